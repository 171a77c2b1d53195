use leptos::{html::Input, prelude::*};
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

use crate::config::{SiteConfig, Theme};
#[cfg(feature = "ssr")]
use crate::content::{get_doc, list_docs};
use crate::content::{cached_doc, Doc, DocKind, DocMeta, GLOBAL_INDEX_CACHE};

#[server(input = GetUrl)]
pub async fn list_docs_server(kind: DocKind, pattern: String) -> Result<Vec<DocMeta>, ServerFnError> {
    list_docs(kind, pattern)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_doc_server(kind: DocKind, slug: String) -> Result<Doc, ServerFnError> {
    get_doc(kind, slug)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Index listing shared by the docs pages and the resources page.
async fn fetch_index(kind: DocKind, pattern: String) -> Vec<DocMeta> {
    let key = (kind, pattern);
    if let Some(s) = GLOBAL_INDEX_CACHE.get(&key) {
        return (*s).clone();
    }
    let docs = list_docs_server(key.0, key.1.clone()).await.unwrap_or_default();
    // the server keeps its own cache for the unfiltered listing
    #[cfg(feature = "hydrate")]
    GLOBAL_INDEX_CACHE.insert(key, docs.clone());
    docs
}

#[component]
pub fn DocsWrapper(config: &'static SiteConfig, kind: DocKind) -> impl IntoView {
    let theme = config.theme;
    view! {
        <Title text=kind.heading() />
        <div class=format!("{} flex flex-col gap-8", theme.page)>
            <header class="w-full">
                <p class=format!("{} mb-4", theme.eyebrow)>
                    <A href=kind.route()>{kind.heading()}</A>
                </p>
                <p class=format!("{} max-w-[65ch]", theme.body)>{kind.blurb()}</p>
            </header>
            <div class="w-full">
                <Outlet />
            </div>
        </div>
    }
}

fn status_badge(status: Option<String>) -> impl IntoView {
    status
        .map(|s| {
            view! {
                <span class="rounded-full px-3 py-0.5 text-xs bg-emerald-500/10 border border-emerald-400/40 text-emerald-300">
                    {s}
                </span>
            }
        })
}

#[component]
fn DocCard(doc: DocMeta, theme: Theme) -> impl IntoView {
    let href = doc.href();
    view! {
        <A href=href attr:class=format!("{} block", theme.card)>
            <div class="flex items-start justify-between gap-3 mb-2">
                <p class="text-xs uppercase tracking-[0.14em] text-periwinkle/80">
                    {doc.label.unwrap_or_else(|| doc.kind.to_string())}
                </p>
                {status_badge(doc.status)}
            </div>
            <h3 class="text-lg leading-tight text-cream mb-2">{doc.title}</h3>
            <p class=theme.body>{doc.description}</p>
            {doc.tag.map(|t| view! { <span class=format!("{} inline-block mt-3", theme.tag)>{t}</span> })}
        </A>
    }
}

/// Grid of all documents of one kind.
#[component]
pub fn DocShelf(kind: DocKind, theme: Theme) -> impl IntoView {
    let docs = Resource::new(move || kind, move |kind| fetch_index(kind, String::new()));
    view! {
        <Suspense fallback=move || view! { <div class="loading-skeleton h-32 rounded-2xl"></div> }>
            {move || Suspend::new(async move {
                let docs = docs.await;
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 w-full">
                        {docs.into_iter().map(|doc| view! { <DocCard doc theme /> }).collect_view()}
                    </div>
                }
            })}
        </Suspense>
    }
}

#[component]
pub fn DocsIndex(config: &'static SiteConfig, kind: DocKind) -> impl IntoView {
    let theme = config.theme;
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let docs = Resource::new(move || (kind, search.get()), |(kind, search)| fetch_index(kind, search));

    view! {
        <div class="mb-6">
            <form
                class="flex flex-col sm:flex-row gap-3 items-start sm:items-center"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let Some(el) = input_ref.get_untracked() else {
                        return;
                    };
                    set_search(el.value());
                }
            >
                <label for="docs_grep" class="text-sm text-white/80 whitespace-nowrap">
                    "Search (regex):"
                </label>
                <div class="flex-grow w-full sm:max-w-md">
                    <input
                        id="docs_grep"
                        class=theme.input
                        node_ref=input_ref
                        placeholder="e.g. zod|prisma"
                    />
                </div>
                <button type="submit" class=theme.primary_button>
                    "Search"
                </button>
            </form>
            <p class=format!("{} mt-2", theme.muted)>
                {move || {
                    let s = search.get();
                    if s.is_empty() {
                        format!("Showing every {}.", kind.to_string().to_lowercase())
                    } else {
                        format!("Showing documents matching /{s}/i.")
                    }
                }}
            </p>
        </div>
        <Transition fallback=move || {
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="loading-skeleton h-32 rounded-2xl"></div>
                    <div class="loading-skeleton h-32 rounded-2xl"></div>
                    <div class="loading-skeleton h-32 rounded-2xl"></div>
                    <div class="loading-skeleton h-32 rounded-2xl"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let docs = docs.await;
                if docs.is_empty() {
                    view! { <p class=theme.body>"No documents match that search."</p> }.into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 w-full">
                            {docs.into_iter().map(|doc| view! { <DocCard doc theme /> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            })}
        </Transition>
    }
}

#[component]
pub fn DocPage(config: &'static SiteConfig, kind: DocKind) -> impl IntoView {
    let theme = config.theme;
    let params = use_params_map();
    let slug = move || params.get().get("doc").unwrap_or_default();
    let doc = Resource::new(slug, move |slug| cached_doc(kind, slug, get_doc_server));

    view! {
        <Suspense fallback=move || view! { <div class="loading-skeleton h-64 rounded-2xl"></div> }>
            {move || Suspend::new(async move {
                match doc.await {
                    Ok(Doc { meta, html }) => {
                        view! {
                            <Title text=meta.title.clone() />
                            <header class="mb-8 flex flex-col gap-3 max-w-[48rem]">
                                {meta
                                    .label
                                    .map(|l| {
                                        view! {
                                            <p class="text-xs uppercase tracking-[0.14em] text-periwinkle/80">
                                                {l}
                                            </p>
                                        }
                                    })}
                                <div class="flex flex-wrap items-center gap-3">
                                    <h1 class=theme.heading>{meta.title}</h1>
                                    {status_badge(meta.status)}
                                </div>
                                {meta
                                    .subtitle
                                    .map(|s| view! { <p class=format!("{} text-base md:text-lg", theme.accent)>{s}</p> })}
                            </header>
                            <article class="prose prose-invert max-w-none">
                                <div inner_html=html></div>
                            </article>
                        }
                            .into_any()
                    }
                    Err(_) => {
                        view! {
                            <p class=theme.body>
                                "That document doesn't exist. "
                                <A href=kind.route() attr:class="text-periwinkle hover:underline">
                                    "Back to the list."
                                </A>
                            </p>
                        }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}
