use leptos::{
    either::Either,
    ev::{self, KeyboardEvent},
    prelude::*,
};

use crate::config::Theme;
use crate::gallery::{
    Carousel, ImageCollection, LightboxAction, LightboxKey, OverflowTarget, RawImage, ScrollLock,
};

struct BodyOverflow(web_sys::HtmlElement);

impl OverflowTarget for BodyOverflow {
    fn overflow(&self) -> String {
        self.0
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        if self.0.style().set_property("overflow", value).is_err() {
            log::warn!("couldn't set body overflow to {value:?}");
        }
    }
}

/// Page-level resources held while the lightbox is open. Dropping this
/// removes the key listener and releases the scroll lock.
struct LightboxGuards {
    keys: Option<WindowListenerHandle>,
    _scroll: Option<ScrollLock<BodyOverflow>>,
}

impl LightboxGuards {
    fn acquire(carousel: RwSignal<Carousel>) -> Self {
        let keys = window_event_listener(ev::keydown, move |e: KeyboardEvent| {
            let key = LightboxKey::from(e.key().as_str());
            let action = carousel
                .try_update(|c| c.handle_key(key))
                .unwrap_or(LightboxAction::None);
            if matches!(action, LightboxAction::Retreat | LightboxAction::Advance) {
                e.prevent_default();
            }
        });
        let scroll = document()
            .body()
            .map(|body| ScrollLock::acquire(BodyOverflow(body)));
        Self {
            keys: Some(keys),
            _scroll: scroll,
        }
    }
}

impl Drop for LightboxGuards {
    fn drop(&mut self) {
        if let Some(keys) = self.keys.take() {
            keys.remove();
        }
    }
}

#[component]
pub fn ProjectCarousel(
    #[prop(into)] images: Signal<Vec<Option<RawImage>>>,
    #[prop(into)] alt_base: String,
    theme: Theme,
) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(ImageCollection::normalize(
        images.get_untracked(),
    )));
    let alt_base = StoredValue::new(alt_base);

    let current = move || carousel.with(|c| c.current().cloned());
    let has_current = move || carousel.with(|c| c.current().is_some());
    let position = move || carousel.with(|c| c.position().to_string());
    let alt = move |suffix: &str| {
        format!("{} {suffix}{}", alt_base.get_value(), carousel.with(|c| c.index()) + 1)
    };

    let retreat = move || carousel.update(|c| c.retreat());
    let advance = move || carousel.update(|c| c.advance());
    let open = move || {
        carousel.update(|c| {
            c.request_open();
        })
    };
    let close = move || carousel.update(|c| c.close());

    // the screenshots can change under us (new project data)
    Effect::watch(
        move || images.get(),
        move |raw, _, _| {
            let collection = ImageCollection::normalize(raw.clone());
            carousel.update(|c| c.set_images(collection));
        },
        false,
    );

    let is_open = Memo::new(move |_| carousel.with(|c| c.is_open()));
    let guards = StoredValue::new_local(None::<LightboxGuards>);
    Effect::watch(
        move || is_open.get(),
        move |open, _, _| {
            if *open {
                guards.update_value(|g| {
                    if g.is_none() {
                        *g = Some(LightboxGuards::acquire(carousel));
                    }
                });
            } else {
                guards.set_value(None);
            }
        },
        false,
    );
    on_cleanup(move || {
        guards.try_update_value(|g| g.take());
    });

    view! {
        <div class="w-full rounded-2xl border border-white/15 bg-black/20 shadow-2xl overflow-hidden">
            <div
                class=move || {
                    if has_current() {
                        "relative w-full h-60 md:h-72 lg:h-[340px] bg-[#050509] cursor-zoom-in transition-transform duration-200 hover:-translate-y-px"
                    } else {
                        "relative w-full h-60 md:h-72 lg:h-[340px] bg-[#050509] cursor-default"
                    }
                }
                role=move || has_current().then_some("button")
                aria-label=move || has_current().then_some("Open screenshot fullscreen")
                on:click=move |_| open()
            >
                {move || match current() {
                    Some(img) => {
                        Either::Left(
                            view! {
                                <img
                                    src=img.src
                                    alt=alt("")
                                    class="absolute inset-0 w-full h-full object-contain p-4"
                                />
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <div class="flex w-full h-full items-center justify-center px-6">
                                    <p class="text-sm md:text-base text-white/75 leading-loose text-center">
                                        "No screenshots found. Place images in "
                                        <b>"/public/projects"</b>
                                        " and make sure each screenshot has a "
                                        <b>"src"</b>
                                        "."
                                    </p>
                                </div>
                            },
                        )
                    }
                }}
            </div>
            <div class="px-4 md:px-5 py-3 md:py-4 border-t border-white/10 bg-black/10">
                <p class="text-base lg:text-lg text-white/85 leading-loose">
                    {move || {
                        current()
                            .and_then(|img| img.caption)
                            .map(Either::Left)
                            .unwrap_or_else(|| {
                                Either::Right(
                                    view! {
                                        <span class="opacity-85">
                                            "Add a caption per screenshot to explain what the viewer is seeing."
                                        </span>
                                    },
                                )
                            })
                    }}
                </p>
                <div class="flex items-center justify-between mt-3 md:mt-4">
                    <button type="button" class=theme.ghost_button on:click=move |_| retreat()>
                        "Prev"
                    </button>
                    <span class="text-xs text-white/60 tracking-[0.14em]">{position}</span>
                    <button type="button" class=theme.ghost_button on:click=move |_| advance()>
                        "Next"
                    </button>
                </div>
                <Show when=has_current>
                    <p class=format!("{} mt-2", theme.muted)>
                        "Tip: click the screenshot to view it fullscreen. (Esc to close)"
                    </p>
                </Show>
            </div>
        </div>

        <Show when=move || is_open.get() && has_current()>
            <div
                class="fixed inset-0 z-[9999] bg-black/80 backdrop-blur-md flex items-center justify-center px-4 md:px-8 py-6 md:py-10 animate-overlay-fade"
                on:click=move |_| close()
            >
                <div
                    class="relative w-[min(1100px,96vw)] h-[min(80vh,720px)] rounded-2xl border border-white/15 bg-[#050509]/85 shadow-2xl overflow-hidden animate-panel-pop"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    {move || {
                        current()
                            .map(|img| {
                                view! {
                                    <img
                                        src=img.src
                                        alt=alt("fullscreen ")
                                        class="absolute inset-0 w-full h-full object-contain p-5"
                                    />
                                }
                            })
                    }}
                    <div class="absolute top-0 inset-x-0 flex items-center justify-between px-4 py-3 bg-gradient-to-b from-black/60 to-transparent">
                        <span class="text-xs text-white/70 tracking-[0.14em]">{position}</span>
                        <button type="button" class=theme.ghost_button on:click=move |_| close()>
                            "Close"
                        </button>
                    </div>
                    <div class="absolute inset-0 flex items-center justify-between px-2 pointer-events-none">
                        <button
                            type="button"
                            aria-label="Previous screenshot"
                            class=format!("{} pointer-events-auto", theme.ghost_button)
                            on:click=move |_| retreat()
                        >
                            "←"
                        </button>
                        <button
                            type="button"
                            aria-label="Next screenshot"
                            class=format!("{} pointer-events-auto", theme.ghost_button)
                            on:click=move |_| advance()
                        >
                            "→"
                        </button>
                    </div>
                    <div class="absolute bottom-0 inset-x-0 px-4 md:px-5 py-3 md:py-4 bg-gradient-to-t from-black/70 to-transparent">
                        <p class="text-sm md:text-base text-white/90 leading-loose">
                            {move || current().and_then(|img| img.caption)}
                        </p>
                        <p class="mt-1 text-xs text-white/60">
                            "Use ← / → to navigate, Esc to close."
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
