use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::{NavLink, SiteConfig};

#[component]
pub fn Header(config: &'static SiteConfig) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    let nav_item = move |link: &'static NavLink, mobile: bool| {
        let sections = config.sections_for(link);
        let active = move || pathname.with(|p| link.is_active(p, sections));
        let base = if mobile {
            "block w-full px-4 py-3 rounded-lg text-base"
        } else {
            "px-3 py-2 rounded-lg text-sm"
        };
        view! {
            <a
                href=link.href
                aria-current=move || active().then_some("page")
                on:click=move |_| set_menu_open(false)
                class=move || {
                    if active() {
                        format!("{base} bg-white/10 text-cream font-semibold")
                    } else {
                        format!(
                            "{base} text-white/75 hover:bg-white/10 hover:text-white transition-all duration-200",
                        )
                    }
                }
            >
                {link.label}
            </a>
        }
    };

    view! {
        <header class="sticky top-0 z-40 bg-black/80 backdrop-blur-md border-b border-white/10">
            <div class="mx-auto max-w-6xl px-4 md:px-6 py-3 flex items-center justify-between">
                <a href="/" class="font-serif text-xl text-cream tracking-wide">
                    {config.profile.handle}
                </a>
                <nav aria-label="Primary" class="hidden md:flex items-center gap-1">
                    {config.nav.iter().map(|link| nav_item(link, false)).collect_view()}
                </nav>
                <button
                    type="button"
                    class="md:hidden px-3 py-2 rounded-md border border-white/20 text-white/80"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav aria-label="Primary" class="md:hidden px-4 pb-4 space-y-1">
                    {config.nav.iter().map(|link| nav_item(link, true)).collect_view()}
                </nav>
            </Show>
        </header>
    }
}
