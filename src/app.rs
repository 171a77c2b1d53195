mod carousel;
mod contact;
mod content_page;
mod docs;
mod footer;
mod header;
mod homepage;
mod posts;
mod projects;
mod resources;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SITE;
use crate::content::DocKind;
use crate::pages::ABOUT;

use contact::ContactPage;
use content_page::ContentPage;
use docs::{DocPage, DocsIndex, DocsWrapper};
use footer::Footer;
use header::Header;
use homepage::HomePage;
use posts::PostsPage;
use projects::ProjectsPage;
use resources::ResourcesPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let config = &SITE;

    view! {
        <Title formatter=move |title| format!("{title} · {}", config.profile.handle) />
        <Meta
            name="description"
            content="Portfolio of Robbert van Asselt: projects, playbooks and blueprints."
        />

        <Router>
            <div class="flex flex-col min-h-screen">
                <Header config />
                <main class="flex flex-col flex-grow w-full min-h-[80dvh]">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=move || view! { <HomePage config /> } />
                        <Route
                            path=path!("/about")
                            view=move || view! { <ContentPage config content=&ABOUT /> }
                        />
                        <Route path=path!("/projects") view=move || view! { <ProjectsPage config /> } />
                        <Route
                            path=path!("/resources")
                            view=move || view! { <ResourcesPage config /> }
                        />
                        <Route path=path!("/contact") view=move || view! { <ContactPage config /> } />
                        <Route path=path!("/posts") view=move || view! { <PostsPage config /> } />
                        <ParentRoute
                            path=path!("/playbooks")
                            view=move || view! { <DocsWrapper config kind=DocKind::Playbook /> }
                        >
                            <Route
                                path=path!("")
                                view=move || view! { <DocsIndex config kind=DocKind::Playbook /> }
                            />
                            <Route
                                path=path!(":doc")
                                view=move || view! { <DocPage config kind=DocKind::Playbook /> }
                            />
                        </ParentRoute>
                        <ParentRoute
                            path=path!("/blueprints")
                            view=move || view! { <DocsWrapper config kind=DocKind::Blueprint /> }
                        >
                            <Route
                                path=path!("")
                                view=move || view! { <DocsIndex config kind=DocKind::Blueprint /> }
                            />
                            <Route
                                path=path!(":doc")
                                view=move || view! { <DocPage config kind=DocKind::Blueprint /> }
                            />
                        </ParentRoute>
                    </Routes>
                </main>
                <Footer config />
            </div>
        </Router>
    }
}
