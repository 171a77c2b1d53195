use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::{SiteConfig, Theme};
use crate::pages::{Card, PageContent};

#[component]
pub fn PageHeader(content: &'static PageContent, theme: Theme) -> impl IntoView {
    view! {
        <header class="w-full">
            <p class=format!("{} mb-4", theme.eyebrow)>{content.eyebrow}</p>
            <div class="flex flex-col gap-3 md:gap-4 max-w-[40rem]">
                <h1 class=theme.heading>{content.heading}</h1>
                {content
                    .subheading
                    .map(|s| view! { <p class=format!("{} text-base md:text-lg", theme.accent)>{s}</p> })}
                {content
                    .intro
                    .iter()
                    .map(|p| view! { <p class=theme.body>{*p}</p> })
                    .collect_view()}
            </div>
        </header>
    }
}

#[component]
pub fn TagList(tags: &'static [&'static str], theme: Theme) -> impl IntoView {
    (!tags.is_empty())
        .then(|| {
            view! {
                <div class="flex flex-wrap gap-2 mt-2">
                    {tags.iter().map(|t| view! { <span class=theme.tag>{*t}</span> }).collect_view()}
                </div>
            }
        })
}

#[component]
pub fn CardView(card: &'static Card, theme: Theme) -> impl IntoView {
    view! {
        <article class=format!("{} flex flex-col gap-3", theme.card)>
            {(!card.label.is_empty())
                .then(|| {
                    view! {
                        <p class="text-xs uppercase tracking-[0.14em] text-periwinkle/80">
                            {card.label}
                        </p>
                    }
                })}
            <h2 class="text-lg md:text-xl leading-tight text-cream">{card.title}</h2>
            <div class="w-full border-t border-white/10 my-1"></div>
            {card.body.iter().map(|p| view! { <p class=theme.body>{*p}</p> }).collect_view()}
            {(!card.bullets.is_empty())
                .then(|| {
                    view! {
                        <ul class="space-y-2">
                            {card
                                .bullets
                                .iter()
                                .map(|b| view! { <li class=theme.body>"• " {*b}</li> })
                                .collect_view()}
                        </ul>
                    }
                })}
            <TagList tags=card.tags theme />
        </article>
    }
}

/// Any static page: header plus a grid of cards. Extra sections go in
/// `children` and render below the grid.
#[component]
pub fn ContentPage(
    config: &'static SiteConfig,
    content: &'static PageContent,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let theme = config.theme;
    view! {
        <Title text=content.title />
        <div class=format!("{} flex flex-col gap-10 md:gap-12", theme.page)>
            <PageHeader content theme />
            {(!content.cards.is_empty())
                .then(|| {
                    view! {
                        <section class="grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8 w-full">
                            {content
                                .cards
                                .iter()
                                .map(|card| view! { <CardView card theme /> })
                                .collect_view()}
                        </section>
                    }
                })}
            {children.map(|c| c())}
        </div>
    }
}
