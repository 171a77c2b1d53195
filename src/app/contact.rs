use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use super::content_page::{CardView, PageHeader};
use crate::config::SiteConfig;
use crate::contact::{ContactForm, ContactStatus, ContactTransport, RelayTransport};
use crate::pages::CONTACT_INTRO;

#[component]
pub fn ContactPage(config: &'static SiteConfig) -> impl IntoView {
    let theme = config.theme;
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // A pending send keeps the form locked; nothing else goes out.
        let Some(fields) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let transport = RelayTransport::new(config.contact.relay_endpoint, config.contact.subject);
        spawn_local(async move {
            let res = transport.send(&fields).await;
            form.update(|f| f.complete(res));
        });
    };

    let submitting = move || form.with(|f| f.is_submitting());
    let status = move || form.with(|f| f.status());
    let status_class = move || match status() {
        Some(ContactStatus::Success) => "text-sm text-emerald-400",
        Some(ContactStatus::Error) => "text-sm text-red-400",
        _ => "text-sm text-white/60",
    };

    view! {
        <Title text=CONTACT_INTRO.title />
        <div class=format!("{} flex flex-col gap-10 md:gap-12", theme.page)>
            <PageHeader content=&CONTACT_INTRO theme />
            <section class="grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8 w-full">
                <form class=format!("{} flex flex-col gap-4", theme.card) on:submit=on_submit>
                    <h2 class="text-lg md:text-xl leading-tight text-cream">"Send a message"</h2>
                    <div class="flex flex-col gap-1">
                        <label for="contact_name" class="text-sm text-white/80">
                            "Name"
                        </label>
                        <input
                            id="contact_name"
                            name="name"
                            type="text"
                            required
                            placeholder="Your name"
                            class=theme.input
                            prop:value=move || form.with(|f| f.fields().name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.fields_mut().name = value);
                            }
                        />
                    </div>
                    <div class="flex flex-col gap-1">
                        <label for="contact_email" class="text-sm text-white/80">
                            "Email"
                        </label>
                        <input
                            id="contact_email"
                            name="email"
                            type="email"
                            required
                            placeholder="you@example.com"
                            class=theme.input
                            prop:value=move || form.with(|f| f.fields().email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.fields_mut().email = value);
                            }
                        />
                    </div>
                    <div class="flex flex-col gap-1">
                        <label for="contact_message" class="text-sm text-white/80">
                            "Message"
                        </label>
                        <textarea
                            id="contact_message"
                            name="message"
                            rows="5"
                            required
                            placeholder="Tell me a bit about your project or idea"
                            class=format!("{} resize-y", theme.input)
                            prop:value=move || form.with(|f| f.fields().message.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.fields_mut().message = value);
                            }
                        ></textarea>
                    </div>
                    <button type="submit" class=theme.primary_button disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send message" }}
                    </button>
                    <p class=status_class aria-live="polite">
                        {move || ContactStatus::message(status())}
                    </p>
                </form>
                <div class="flex flex-col gap-6">
                    {CONTACT_INTRO
                        .cards
                        .iter()
                        .map(|card| view! { <CardView card theme /> })
                        .collect_view()}
                    <ul class=format!("{} flex flex-col gap-2", theme.card)>
                        {config
                            .socials
                            .iter()
                            .filter(|l| l.label != "LinkedIn")
                            .map(|link| {
                                let external = !link.href.starts_with("mailto:");
                                view! {
                                    <li class=theme.body>
                                        <span class="text-white/55">{link.label} ": "</span>
                                        <a
                                            href=link.href
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="text-periwinkle hover:underline"
                                        >
                                            {link.display}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </section>
        </div>
    }
}
