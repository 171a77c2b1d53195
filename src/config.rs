//! Site-wide settings handed to components as props.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub display: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Sections own their sub-pages, so `/playbooks/foo` keeps
    /// "Resources" lit when the link is declared with `sections`.
    pub fn is_active(&self, pathname: &str, sections: &[&str]) -> bool {
        let pathname = match pathname.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        if pathname == self.href {
            return true;
        }
        self.href != "/"
            && sections
                .iter()
                .any(|s| pathname == *s || pathname.starts_with(&format!("{s}/")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub role: &'static str,
    pub portrait: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSettings {
    pub relay_endpoint: &'static str,
    pub subject: &'static str,
    pub email: &'static str,
}

/// Style tokens. Components take these instead of hard-coding colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub page: &'static str,
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub accent: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub card: &'static str,
    pub tag: &'static str,
    pub primary_button: &'static str,
    pub ghost_button: &'static str,
    pub input: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub profile: Profile,
    pub nav: &'static [NavLink],
    /// Extra path prefixes that count as part of the Resources section.
    pub resource_sections: &'static [&'static str],
    pub socials: &'static [Link],
    pub contact: ContactSettings,
    pub theme: Theme,
}

impl SiteConfig {
    pub fn social(&self, label: &str) -> Option<&'static Link> {
        self.socials.iter().find(|l| l.label == label)
    }

    pub fn sections_for(&self, link: &NavLink) -> &'static [&'static str] {
        if link.href == "/resources" {
            self.resource_sections
        } else {
            &[]
        }
    }
}

pub static SITE: SiteConfig = SiteConfig {
    profile: Profile {
        name: "Robbert van Asselt",
        handle: "dev.robb",
        role: "Fullstack Developer",
        portrait: "/FotoIk.jpg",
    },
    nav: &[
        NavLink { label: "Home", href: "/" },
        NavLink { label: "About", href: "/about" },
        NavLink { label: "Projects", href: "/projects" },
        NavLink { label: "Resources", href: "/resources" },
        NavLink { label: "Contact", href: "/contact" },
    ],
    resource_sections: &["/playbooks", "/blueprints"],
    socials: &[
        Link {
            label: "Email",
            href: "mailto:robbertasselt@gmail.com",
            display: "robbertasselt@gmail.com",
        },
        Link {
            label: "GitHub",
            href: "https://github.com/dev-robb",
            display: "github.com/dev-robb",
        },
        Link {
            label: "Instagram",
            href: "https://instagram.com/dev.robb",
            display: "instagram.com/dev.robb",
        },
        Link {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/dev-robb",
            display: "linkedin.com/in/dev-robb",
        },
    ],
    contact: ContactSettings {
        relay_endpoint: "https://formspree.io/f/mnnkwqkg",
        subject: "New message from dev.robb portfolio",
        email: "robbertasselt@gmail.com",
    },
    theme: Theme {
        page: "w-full max-w-6xl mx-auto px-6 md:px-12 pt-10 md:pt-16 pb-12 md:pb-20",
        eyebrow: "text-sm md:text-base font-semibold uppercase tracking-[0.18em] text-white/55",
        heading: "font-serif text-2xl md:text-3xl lg:text-4xl leading-tight text-cream",
        accent: "text-periwinkle font-medium",
        body: "text-sm md:text-base text-white/75 leading-relaxed",
        muted: "text-xs text-white/55 leading-relaxed",
        card: "rounded-2xl border border-white/15 bg-gradient-to-br from-cream/[0.03] to-periwinkle/[0.05] shadow-2xl backdrop-blur-xl p-5 md:p-6 transition-all duration-200 hover:-translate-y-1 hover:border-white/25",
        tag: "rounded-full px-3 py-0.5 text-xs bg-[#111218] border border-periwinkle/55 text-periwinkle",
        primary_button: "px-4 py-2 rounded-lg bg-periwinkle text-black font-semibold transition-all duration-150 hover:bg-[#cac4ff] disabled:opacity-60 disabled:cursor-not-allowed",
        ghost_button: "px-3 py-1 rounded-md text-sm text-white/80 hover:bg-white/10 transition-colors duration-150",
        input: "w-full px-4 py-2 rounded-lg text-sm bg-[#111111] border border-[#222222] placeholder-white/45 focus:outline-none focus:border-periwinkle focus:ring-1 focus:ring-periwinkle/50",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(href: &str) -> &'static NavLink {
        SITE.nav
            .iter()
            .find(|l| l.href == href)
            .expect("nav link should exist")
    }

    #[test]
    fn test_social_lookup() {
        let instagram = SITE.social("Instagram").expect("instagram link");
        assert_eq!(instagram.href, "https://instagram.com/dev.robb");
        assert!(SITE.social("MySpace").is_none());
    }

    #[test]
    fn test_home_only_active_on_root() {
        let home = nav("/");
        assert!(home.is_active("/", SITE.sections_for(home)));
        assert!(!home.is_active("/about", SITE.sections_for(home)));
    }

    #[test]
    fn test_trailing_slash_and_sections() {
        let about = nav("/about");
        assert!(about.is_active("/about/", SITE.sections_for(about)));

        let resources = nav("/resources");
        let sections = SITE.sections_for(resources);
        assert!(resources.is_active("/resources", sections));
        assert!(resources.is_active("/playbooks/crud", sections));
        assert!(resources.is_active("/blueprints", sections));
        assert!(!resources.is_active("/playbooksx", sections));
        assert!(!about.is_active("/playbooks", SITE.sections_for(about)));
    }
}
