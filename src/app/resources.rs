use leptos::prelude::*;
use leptos_router::components::A;

use super::content_page::ContentPage;
use super::docs::DocShelf;
use crate::config::SiteConfig;
use crate::content::DocKind;
use crate::pages::RESOURCES;

#[component]
pub fn ResourcesPage(config: &'static SiteConfig) -> impl IntoView {
    let theme = config.theme;
    view! {
        <ContentPage config content=&RESOURCES>
            {[DocKind::Playbook, DocKind::Blueprint]
                .into_iter()
                .map(|kind| {
                    view! {
                        <section class="w-full flex flex-col gap-4">
                            <div class="flex items-baseline justify-between gap-4">
                                <h2 class="text-xl md:text-2xl tracking-tight text-cream">
                                    {kind.heading()}
                                </h2>
                                <A href=kind.route() attr:class="text-sm text-periwinkle hover:underline">
                                    "View all"
                                </A>
                            </div>
                            <p class=format!("{} max-w-[65ch]", theme.body)>{kind.blurb()}</p>
                            <DocShelf kind theme />
                        </section>
                    }
                })
                .collect_view()}
        </ContentPage>
    }
}
