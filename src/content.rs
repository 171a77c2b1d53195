//! Markdown content embedded in the binary: project write-ups, playbooks and
//! blueprints. Each file carries YAML front matter.

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{fmt, future::Future, sync::LazyLock};
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use regex::RegexBuilder;

#[cfg(feature = "ssr")]
use crate::highlight::highlight;
use crate::gallery::RawImage;

pub static GLOBAL_DOC_CACHE: LazyLock<DashMap<(DocKind, String), Doc>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_INDEX_CACHE: LazyLock<DashMap<(DocKind, String), Vec<DocMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Document not found")]
    NotFound,
    #[error("Couldn't parse front matter of {0}")]
    FrontMatter(String),
    #[error("{0} is not valid UTF-8")]
    Encoding(String),
    #[error("Invalid search pattern: {0}")]
    Pattern(String),
    #[error("Couldn't highlight code block: {0}")]
    Highlight(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Playbook,
    Blueprint,
}

impl DocKind {
    pub fn dir(&self) -> &'static str {
        match self {
            Self::Playbook => "playbooks",
            Self::Blueprint => "blueprints",
        }
    }

    pub fn route(&self) -> String {
        format!("/{}", self.dir())
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Playbook => "Project Playbooks",
            Self::Blueprint => "Project Blueprints",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Playbook => "Living documents that describe how I plan, structure, and build modern applications. These playbooks make my workflow transparent and repeatable across projects.",
            Self::Blueprint => "Reusable patterns for real-world features. These help me move fast when building new applications or experimenting with ideas.",
        }
    }

    /// Slug of an embedded path like `playbooks/foo.md`, if it belongs here.
    pub fn slug_of<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.strip_prefix(self.dir())?
            .strip_prefix('/')?
            .strip_suffix(".md")
            .filter(|s| !s.is_empty() && !s.contains('/'))
    }

    pub fn path_of(&self, slug: &str) -> String {
        format!("{}/{slug}.md", self.dir())
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playbook => write!(f, "Playbook"),
            Self::Blueprint => write!(f, "Blueprint"),
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct DocFrontMatter {
    title: String,
    description: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    pub slug: String,
    pub kind: DocKind,
    pub title: String,
    pub description: String,
    pub subtitle: Option<String>,
    pub label: Option<String>,
    pub tag: Option<String>,
    pub status: Option<String>,
    pub order: u32,
}

impl DocMeta {
    pub fn href(&self) -> String {
        format!("{}/{}", self.kind.route(), self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    pub meta: DocMeta,
    pub html: String,
}

/// A showcased project. `screenshots` is kept raw; the carousel normalises
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub label: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub snapshot: Vec<String>,
    #[serde(default)]
    pub tech: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub footnote: Option<String>,
    #[serde(default)]
    pub alt_base: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<Option<RawImage>>,
    #[serde(default)]
    pub order: u32,
}

#[cfg(feature = "ssr")]
fn read_asset(path: &str) -> Result<String, ContentError> {
    let file = Assets::get(path).ok_or(ContentError::NotFound)?;
    String::from_utf8(file.data.into()).map_err(|_| ContentError::Encoding(path.to_string()))
}

#[cfg(feature = "ssr")]
fn parse_doc(kind: DocKind, slug: &str, raw: &str) -> Result<(DocMeta, String), ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<DocFrontMatter>(raw)
        .ok_or_else(|| ContentError::FrontMatter(kind.path_of(slug)))?;
    let fm = parsed.data;
    let meta = DocMeta {
        slug: slug.to_string(),
        kind,
        title: fm.title,
        description: fm.description,
        subtitle: fm.subtitle,
        label: fm.label,
        tag: fm.tag,
        status: fm.status,
        order: fm.order,
    };
    Ok((meta, parsed.content))
}

#[cfg(feature = "ssr")]
fn render_markdown(body: &str) -> Result<String, ContentError> {
    let parser = Parser::new_ext(body, Options::all());
    let events = highlight(parser)?;
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, events.into_iter());
    Ok(html_output)
}

/// Lists documents of one kind. An empty `pattern` lists everything (and is
/// cached); anything else is a case-insensitive regex over the raw file.
#[cfg(feature = "ssr")]
pub async fn list_docs(kind: DocKind, pattern: String) -> Result<Vec<DocMeta>, ContentError> {
    let cache = &*GLOBAL_INDEX_CACHE;
    let is_base = pattern.is_empty();
    if is_base {
        if let Some(r) = cache.get(&(kind, pattern.clone())) {
            return Ok(r.clone());
        }
    }
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|e| ContentError::Pattern(e.to_string()))?;

    let mut docs = Assets::iter()
        .filter_map(|path| {
            let slug = kind.slug_of(&path)?.to_string();
            let raw = match read_asset(&path) {
                Ok(raw) => raw,
                Err(err) => {
                    tracing::warn!(%path, %err, "skipping unreadable document");
                    return None;
                }
            };
            if !is_base && !re.is_match(&raw) {
                return None;
            }
            match parse_doc(kind, &slug, &raw) {
                Ok((meta, _)) => Some(meta),
                Err(err) => {
                    tracing::warn!(%path, %err, "skipping document");
                    None
                }
            }
        })
        .collect::<Vec<_>>();
    docs.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));

    if is_base {
        cache.insert((kind, pattern), docs.clone());
    }
    Ok(docs)
}

/// Returns the cached document or whatever `fetch` yields. Only successes
/// are stored, so unknown slugs and failed requests never take a slot.
pub async fn cached_doc<F, Fut, E>(kind: DocKind, slug: String, fetch: F) -> Result<Doc, E>
where
    F: FnOnce(DocKind, String) -> Fut,
    Fut: Future<Output = Result<Doc, E>>,
{
    let key = (kind, slug);
    let cached = GLOBAL_DOC_CACHE.get(&key).map(|doc| doc.clone());
    if let Some(doc) = cached {
        return Ok(doc);
    }
    let doc = fetch(kind, key.1.clone()).await?;
    GLOBAL_DOC_CACHE.insert(key, doc.clone());
    Ok(doc)
}

#[cfg(feature = "ssr")]
pub async fn get_doc(kind: DocKind, slug: String) -> Result<Doc, ContentError> {
    cached_doc(kind, slug, |kind, slug| async move {
        let raw = read_asset(&kind.path_of(&slug))?;
        let (meta, body) = parse_doc(kind, &slug, &raw)?;
        let html = render_markdown(&body)?;
        Ok(Doc { meta, html })
    })
    .await
}

#[cfg(feature = "ssr")]
fn load_projects() -> Vec<ProjectMeta> {
    let matter = Matter::<YAML>::new();
    let mut projects = Assets::iter()
        .filter_map(|path| {
            let slug = path.strip_prefix("projects/")?.strip_suffix(".md")?.to_string();
            let parsed = read_asset(&path)
                .ok()
                .and_then(|raw| matter.parse_with_struct::<ProjectMeta>(&raw));
            match parsed {
                Some(parsed) => Some(ProjectMeta {
                    slug,
                    ..parsed.data
                }),
                None => {
                    tracing::warn!(%path, "skipping project with unreadable front matter");
                    None
                }
            }
        })
        .collect::<Vec<_>>();
    projects.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
    projects
}

#[cfg(feature = "ssr")]
static PROJECTS: LazyLock<Vec<ProjectMeta>> = LazyLock::new(load_projects);

#[cfg(feature = "ssr")]
pub fn list_projects() -> Vec<ProjectMeta> {
    PROJECTS.clone()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_slug_of() {
        assert_eq!(DocKind::Playbook.slug_of("playbooks/crud.md"), Some("crud"));
        assert_eq!(DocKind::Playbook.slug_of("blueprints/crud.md"), None);
        assert_eq!(DocKind::Blueprint.slug_of("blueprints/a/b.md"), None);
        assert_eq!(DocKind::Blueprint.slug_of("blueprints/.md"), None);
        assert_eq!(DocKind::Blueprint.slug_of("blueprints/readme.txt"), None);
    }

    #[test]
    fn test_kind_routes() {
        assert_eq!(DocKind::Blueprint.route(), "/blueprints");
        assert_eq!(DocKind::Playbook.path_of("x"), "playbooks/x.md");
        assert_eq!(serde_json::to_string(&DocKind::Playbook).unwrap(), "\"playbook\"");
    }

    fn doc(slug: &str) -> Doc {
        Doc {
            meta: DocMeta {
                slug: slug.to_string(),
                kind: DocKind::Playbook,
                title: "Cached".to_string(),
                description: String::new(),
                subtitle: None,
                label: None,
                tag: None,
                status: None,
                order: 0,
            },
            html: "<p>cached</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let calls = Cell::new(0);
        let fetch = |_, _| {
            calls.set(calls.get() + 1);
            async { Err::<Doc, _>(ContentError::NotFound) }
        };
        let first = cached_doc(DocKind::Playbook, "never-there".to_string(), fetch).await;
        let second = cached_doc(DocKind::Playbook, "never-there".to_string(), fetch).await;

        assert_eq!(first, Err(ContentError::NotFound));
        assert_eq!(second, Err(ContentError::NotFound));
        assert_eq!(calls.get(), 2);
        assert!(!GLOBAL_DOC_CACHE.contains_key(&(DocKind::Playbook, "never-there".to_string())));
    }

    #[tokio::test]
    async fn test_error_after_success_serves_cache() {
        let slug = "cached-once".to_string();
        let loaded = cached_doc(DocKind::Playbook, slug.clone(), |_, s| async move {
            Ok::<_, ContentError>(doc(&s))
        })
        .await;
        assert_eq!(loaded, Ok(doc("cached-once")));

        let again = cached_doc(DocKind::Playbook, slug, |_, _| async {
            Err::<Doc, _>(ContentError::Highlight("should not run".to_string()))
        })
        .await;
        assert_eq!(again, Ok(doc("cached-once")));
    }

    #[cfg(feature = "ssr")]
    mod ssr {
        use super::super::*;
        use crate::gallery::ImageCollection;

        #[tokio::test]
        async fn test_list_docs_sorted() {
            let docs = list_docs(DocKind::Playbook, String::new())
                .await
                .expect("playbooks should parse");
            assert!(!docs.is_empty());
            assert!(docs.windows(2).all(|w| w[0].order <= w[1].order));
            assert!(docs.iter().all(|d| d.kind == DocKind::Playbook));
        }

        #[tokio::test]
        async fn test_search_filters() {
            let all = list_docs(DocKind::Blueprint, String::new()).await.unwrap();
            let hits = list_docs(DocKind::Blueprint, "zod".to_string()).await.unwrap();
            assert!(!hits.is_empty());
            assert!(hits.len() < all.len());
            let none = list_docs(DocKind::Blueprint, "no-such-phrase-anywhere".to_string())
                .await
                .unwrap();
            assert!(none.is_empty());
        }

        #[tokio::test]
        async fn test_bad_pattern() {
            let res = list_docs(DocKind::Playbook, "(".to_string()).await;
            assert!(matches!(res, Err(ContentError::Pattern(_))));
        }

        #[tokio::test]
        async fn test_get_doc_renders_html() {
            let doc = get_doc(DocKind::Blueprint, "crud-api-blueprint".to_string())
                .await
                .expect("crud blueprint should exist");
            assert_eq!(doc.meta.title, "CRUD API Blueprint");
            assert!(doc.html.contains("<h2"));
            assert!(!doc.html.contains("status: In progress"));

            let missing = get_doc(DocKind::Blueprint, "nope".to_string()).await;
            assert_eq!(missing, Err(ContentError::NotFound));
        }

        #[test]
        fn test_projects_load_with_screenshots() {
            let projects = list_projects();
            assert!(projects.len() >= 2);
            let first = &projects[0];
            assert!(!first.slug.is_empty());
            let images = ImageCollection::normalize(first.screenshots.clone());
            assert!(!images.is_empty());
            assert!(images.len() <= first.screenshots.len());
        }
    }
}
