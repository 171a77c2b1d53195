use leptos::prelude::*;
use leptos_meta::Title;

use super::content_page::TagList;
use crate::config::SiteConfig;
use crate::pages::HOME;

#[component]
pub fn HomePage(config: &'static SiteConfig) -> impl IntoView {
    let theme = config.theme;
    let stack = HOME.cards.first().map(|c| c.tags).unwrap_or_default();
    view! {
        <Title text=HOME.title />
        <div class=format!("{} flex flex-col md:flex-row items-center gap-10 md:gap-16", theme.page)>
            <section class="flex-1 flex flex-col gap-4">
                <p class=theme.eyebrow>{HOME.eyebrow}</p>
                <h1 class=theme.heading>{HOME.heading}</h1>
                {HOME.subheading.map(|s| view! { <p class=theme.accent>{s}</p> })}
                {HOME.intro.iter().map(|p| view! { <p class=theme.body>{*p}</p> }).collect_view()}
                <TagList tags=stack theme />
            </section>
            <section class="flex flex-col items-center gap-6">
                <img
                    src=config.profile.portrait
                    alt=format!("Portrait of {}", config.profile.name)
                    class="w-44 md:w-56 h-auto rounded-full object-contain shadow-2xl"
                />
                <div class="flex gap-3">
                    <a href="/projects" class=theme.primary_button>
                        "Explore projects"
                    </a>
                    <a
                        href="/contact"
                        class="px-4 py-2 rounded-lg border border-white/25 text-white/90 hover:bg-periwinkle/10 transition-all duration-150"
                    >
                        "Contact"
                    </a>
                </div>
            </section>
        </div>
    }
}
