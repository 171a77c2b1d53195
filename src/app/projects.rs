use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;

use super::carousel::ProjectCarousel;
use super::content_page::PageHeader;
#[cfg(feature = "ssr")]
use crate::content::list_projects;
use crate::config::{SiteConfig, Theme};
use crate::content::ProjectMeta;
use crate::pages::PROJECTS_INTRO;

#[server(input = GetUrl)]
pub async fn list_projects_server() -> Result<Vec<ProjectMeta>, ServerFnError> {
    Ok(list_projects())
}

#[component]
pub fn ProjectsPage(config: &'static SiteConfig) -> impl IntoView {
    let theme = config.theme;
    let projects = Resource::new(|| (), |_| list_projects_server());

    view! {
        <Title text=PROJECTS_INTRO.title />
        <div class=format!("{} flex flex-col gap-10 md:gap-12", theme.page)>
            <PageHeader content=&PROJECTS_INTRO theme />
            <Transition fallback=move || {
                view! {
                    <div class="space-y-6 w-full">
                        <div class="loading-skeleton h-40 rounded-2xl"></div>
                        <div class="loading-skeleton h-40 rounded-2xl"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    match projects.await {
                        Ok(list) => {
                            view! {
                                <div class="flex flex-col gap-6 w-full">
                                    {list
                                        .into_iter()
                                        .map(|project| view! { <ProjectCard project theme /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class=theme.body>"Couldn't load projects."</p> }.into_any()
                        }
                    }
                })}
            </Transition>
        </div>
    }
}

/// Collapsible card; the screenshots only mount once the card is opened.
#[component]
fn ProjectCard(project: ProjectMeta, theme: Theme) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let ProjectMeta {
        label,
        title,
        subtitle,
        summary,
        snapshot,
        tech,
        live_url,
        repo_url,
        footnote,
        alt_base,
        screenshots,
        ..
    } = project;
    let alt_base = alt_base.unwrap_or_else(|| format!("{title} screenshot"));
    let body = StoredValue::new((snapshot, tech, live_url, repo_url, footnote, screenshots, alt_base));

    view! {
        <article class="w-full rounded-2xl border border-white/15 bg-gradient-to-br from-cream/[0.03] to-periwinkle/[0.05] shadow-2xl backdrop-blur-xl overflow-hidden transition-all duration-200 hover:-translate-y-0.5 hover:border-white/25">
            <button
                type="button"
                class="w-full text-left px-5 md:px-6 py-5 md:py-6"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <div class="flex items-start justify-between gap-4">
                    <div>
                        {label
                            .map(|l| {
                                view! {
                                    <p class="text-xs uppercase tracking-[0.14em] text-periwinkle/80 mb-2">
                                        {l}
                                    </p>
                                }
                            })}
                        <h2 class="text-xl md:text-2xl tracking-tight text-cream mb-2">{title}</h2>
                        {subtitle
                            .map(|s| view! { <p class=format!("{} text-sm md:text-base mb-3", theme.accent)>{s}</p> })}
                        <p class=format!("{} max-w-[70ch]", theme.body)>{summary}</p>
                    </div>
                    <span
                        aria-hidden="true"
                        class=move || {
                            if is_open.get() { "text-xl text-periwinkle" } else { "text-xl text-white/60" }
                        }
                    >
                        {move || if is_open.get() { "−" } else { "+" }}
                    </span>
                </div>
            </button>
            <Show when=move || is_open.get()>
                {move || {
                    let (snapshot, tech, live_url, repo_url, footnote, screenshots, alt_base) = body
                        .get_value();
                    view! {
                        <div class="px-5 md:px-6 pb-6 md:pb-7 border-t border-white/10">
                            <div class="pt-6 flex flex-col gap-6">
                                <div class="w-full rounded-2xl border border-white/15 bg-black/20 p-5 md:p-6">
                                    <p class="text-xs uppercase tracking-[0.14em] text-periwinkle/80 mb-3">
                                        "System design snapshot"
                                    </p>
                                    <ul class="space-y-2 mb-5">
                                        {snapshot
                                            .into_iter()
                                            .map(|line| {
                                                view! { <li class="text-sm text-white/80">"• " {line}</li> }
                                            })
                                            .collect_view()}
                                    </ul>
                                    {tech
                                        .map(|t| {
                                            view! { <p class="text-sm text-white/70 mb-5">"Tech: " {t}</p> }
                                        })}
                                    <div class="flex flex-wrap gap-3">
                                        {live_url
                                            .map(|href| {
                                                view! {
                                                    <a
                                                        href=href
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="px-4 py-2 rounded-lg bg-periwinkle/15 border border-periwinkle/45 text-white/95 hover:bg-periwinkle/20"
                                                    >
                                                        "Live demo"
                                                    </a>
                                                }
                                            })}
                                        {repo_url
                                            .map(|href| {
                                                view! {
                                                    <a
                                                        href=href
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="px-4 py-2 rounded-lg border border-white/20 text-white/90 hover:bg-white/5 hover:border-white/30"
                                                    >
                                                        "GitHub repo"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                                <ProjectCarousel images=screenshots alt_base theme />
                                {footnote
                                    .map(|f| view! { <p class="text-sm text-white/65 leading-loose">{f}</p> })}
                            </div>
                        </div>
                    }
                }}
            </Show>
        </article>
    }
}
