use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn Footer(config: &'static SiteConfig) -> impl IntoView {
    // derived from the build stamp so server and client render the same year
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok();
    let year = built.map(|d| d.year().to_string()).unwrap_or_default();
    let built = built.map(|d| d.format("%b %e, %Y").to_string());

    view! {
        <footer class="bg-[#0d0d0d] text-white/85 border-t border-white/10 mt-24 py-8 md:py-10">
            <div class="mx-auto max-w-6xl px-4 md:px-6 flex flex-col items-center">
                <p class="text-sm text-cream tracking-wide text-center">
                    {format!("© {year} · {} · {}", config.profile.name, config.profile.role)}
                </p>
                <div class="flex gap-12 mt-6">
                    {config
                        .socials
                        .iter()
                        .filter(|link| !link.href.starts_with("mailto:"))
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title=link.label
                                    class="text-sm text-white/70 hover:text-periwinkle transition-colors duration-200"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                {built
                    .map(|b| {
                        view! { <p class="mt-6 text-xs text-white/40">"Last built " {b}</p> }
                    })}
            </div>
        </footer>
    }
}
