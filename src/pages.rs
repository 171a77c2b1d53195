//! Copy for the static pages. One [`PageContent`] per page replaces a page
//! file per variant.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub title: &'static str,
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub subheading: Option<&'static str>,
    pub intro: &'static [&'static str],
    pub cards: &'static [Card],
}

pub static HOME: PageContent = PageContent {
    title: "Home",
    eyebrow: "Full-Stack Developer • AI-Driven Architecture Workflow",
    heading: "Robbert van Asselt",
    subheading: Some("dev.robb · Software engineering"),
    intro: &[
        "I work with an AI-driven development workflow: designing modular system architecture, defining data models and flows, and then using AI to accelerate implementation while maintaining clean, scalable code.",
        "The stack I use is modern and predictable, but the architecture-first approach is what keeps everything structured and maintainable.",
    ],
    cards: &[Card {
        label: "",
        title: "Stack",
        body: &[],
        bullets: &[],
        tags: &[
            "React", "Next.js", "Node.js", "Express", "Prisma", "SQLite", "REST APIs",
            "TypeScript", "Git", "Chakra UI",
        ],
    }],
};

pub static ABOUT: PageContent = PageContent {
    title: "About",
    eyebrow: "About me",
    heading: "Robbert van Asselt",
    subheading: Some("AI-Native Full-Stack Developer"),
    intro: &[
        "I work with an architecture-first approach, defining structure and data flow before writing code. AI accelerates iteration and refinement, while system design stays in full control.",
    ],
    cards: &[
        Card {
            label: "Soft skills",
            title: "Clear communication, structured thinking, steady focus.",
            body: &[],
            bullets: &[
                "I communicate clearly and directly: structure over noise, solutions over drama.",
                "I explain complex technical ideas in simple language, through playbooks and content.",
                "I take ownership of my work and keep the process transparent and predictable.",
                "I stay calm under pressure and break problems into manageable layers.",
            ],
            tags: &[],
        },
        Card {
            label: "Tech stack",
            title: "Tools I use inside an architecture-first workflow.",
            body: &[
                "I prefer a small, predictable stack so I can focus on architecture and problem-solving instead of tooling. React, Next.js, Node, and Prisma provide everything I need to build clean, maintainable systems.",
            ],
            bullets: &[],
            tags: &[
                "React", "Next.js", "Node.js", "Express", "Prisma", "TypeScript", "Chakra UI",
            ],
        },
        Card {
            label: "How I work",
            title: "Architecture first. AI for acceleration. Quality by design.",
            body: &[],
            bullets: &[
                "I start with the system: domain models, data flow, boundaries and constraints, before thinking about code.",
                "I use AI to explore implementation options, generate scaffolding and speed up refactoring, not to replace thinking.",
                "I document what works in playbooks so my workflow stays consistent across projects.",
                "I prefer small, focused commits and clear reasoning so every codebase stays understandable.",
            ],
            tags: &[],
        },
    ],
};

pub static RESOURCES: PageContent = PageContent {
    title: "Resources",
    eyebrow: "Resources",
    heading: "Resources",
    subheading: None,
    intro: &[
        "A collection of tools, learning materials, and development systems I use to build high-quality projects efficiently.",
    ],
    cards: &[
        Card {
            label: "Best learning content",
            title: "Reels that helped me learn and teach.",
            body: &[
                "A curated selection of my best-performing educational reels that helped me learn, teach others, and grow my developer network.",
            ],
            bullets: &[
                "HTTP Status Codes Explained",
                "React Hooks Breakdown",
                "JavaScript Array Methods",
                "The DOM vs The Shadow DOM",
                "WebGPU in 60 Seconds",
                "API Calls Explained Simply",
            ],
            tags: &[],
        },
        Card {
            label: "Tools I use",
            title: "Daily drivers.",
            body: &["(More tools will be added as my stack grows.)"],
            bullets: &[],
            tags: &[
                "VS Code", "Postman", "Prisma Studio", "Chrome DevTools", "GitHub Desktop",
                "Node.js",
            ],
        },
    ],
};

pub static PROJECTS_INTRO: PageContent = PageContent {
    title: "Projects",
    eyebrow: "Projects",
    heading: "Featured work.",
    subheading: None,
    intro: &[
        "A small selection of projects that represent how I think: architecture first, predictable systems, and clean delivery.",
    ],
    cards: &[],
};

pub static CONTACT_INTRO: PageContent = PageContent {
    title: "Contact",
    eyebrow: "Contact",
    heading: "Let's build something together.",
    subheading: Some("Reach out for junior roles, freelance work or a small collab."),
    intro: &[
        "I like clear communication, realistic scope and simple planning. If that matches how you work, send me a message and I'll get back to you soon.",
    ],
    cards: &[Card {
        label: "Other ways to reach me",
        title: "Pick whatever channel fits best.",
        body: &["You can contact me directly if you prefer not to use the form:"],
        bullets: &[
            "Email for jobs, collabs or project ideas.",
            "GitHub if you want to look at my code or open an issue.",
            "Instagram for quick questions or content-related chat.",
        ],
        tags: &[],
    }],
};

pub static POSTS: PageContent = PageContent {
    title: "Posts & Reels",
    eyebrow: "Posts",
    heading: "Posts & Reels",
    subheading: None,
    intro: &["Short, visual explanations about modern web development."],
    cards: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_title_and_heading() {
        for page in [&HOME, &ABOUT, &RESOURCES, &PROJECTS_INTRO, &CONTACT_INTRO, &POSTS] {
            assert!(!page.title.is_empty());
            assert!(!page.heading.is_empty());
        }
        assert_eq!(POSTS.title, "Posts & Reels");
    }
}
