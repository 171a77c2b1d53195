use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::content::ContentError;

const THEME: &str = "base16-ocean.dark";

static HIGHLIGHTER: LazyLock<PulldownHighlighter> = LazyLock::new(PulldownHighlighter::new);

pub struct PulldownHighlighter {
    syntaxset: SyntaxSet,
    themeset: ThemeSet,
}

impl PulldownHighlighter {
    fn new() -> Self {
        Self {
            syntaxset: SyntaxSet::load_defaults_newlines(),
            themeset: ThemeSet::load_defaults(),
        }
    }

    /// Replaces fenced and indented code blocks with pre-rendered HTML.
    /// Unknown languages fall back to plain text.
    pub fn highlight<'a, It>(&self, events: It) -> Result<Vec<Event<'a>>, ContentError>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let theme = self
            .themeset
            .themes
            .get(THEME)
            .ok_or_else(|| ContentError::Highlight(format!("missing theme {THEME}")))?;

        let plain = self.syntaxset.find_syntax_plain_text();
        let mut syntax = None;
        let mut to_highlight = String::new();
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let found = match kind {
                        CodeBlockKind::Fenced(lang) => self.syntaxset.find_syntax_by_token(&lang),
                        CodeBlockKind::Indented => None,
                    };
                    syntax = Some(found.unwrap_or(plain));
                }
                Event::End(TagEnd::CodeBlock) => {
                    let Some(current) = syntax.take() else {
                        return Err(ContentError::Highlight(
                            "code block closed before it opened".to_string(),
                        ));
                    };
                    let html =
                        highlighted_html_for_string(&to_highlight, &self.syntaxset, current, theme)
                            .map_err(|e| ContentError::Highlight(e.to_string()))?;
                    to_highlight.clear();
                    out_events.push(Event::Html(CowStr::from(html)));
                }
                Event::Text(t) if syntax.is_some() => to_highlight.push_str(&t),
                e => out_events.push(e),
            }
        }

        Ok(out_events)
    }
}

/// Highlights with the shared, lazily loaded syntax and theme sets.
pub fn highlight<'a, It>(events: It) -> Result<Vec<Event<'a>>, ContentError>
where
    It: Iterator<Item = Event<'a>>,
{
    HIGHLIGHTER.highlight(events)
}

#[cfg(test)]
mod tests {
    use pulldown_cmark::{html, Parser};

    use super::*;

    fn render(md: &str) -> String {
        let events = highlight(Parser::new(md)).expect("should highlight");
        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }

    #[test]
    fn test_fenced_block_highlighted() {
        let out = render("intro\n\n```rust\nfn main() {}\n```\n");
        assert!(out.contains("<p>intro</p>"));
        assert!(out.contains("<pre style="));
        assert!(!out.contains("<code"));
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let out = render("```nosuchlang\nplain words\n```\n");
        assert!(out.contains("plain words"));
    }
}
