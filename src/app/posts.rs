use leptos::prelude::*;

use super::content_page::ContentPage;
use crate::config::SiteConfig;
use crate::pages::POSTS;

#[component]
pub fn PostsPage(config: &'static SiteConfig) -> impl IntoView {
    let theme = config.theme;
    view! {
        <ContentPage config content=&POSTS>
            {config
                .social("Instagram")
                .map(|link| {
                    view! {
                        <p class=theme.body>
                            "Follow me on "
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-periwinkle hover:underline"
                            >
                                {link.label}
                            </a>
                            "."
                        </p>
                    }
                })}
        </ContentPage>
    }
}
