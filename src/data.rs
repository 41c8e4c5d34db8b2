use serde::Serialize;

use crate::config::{EMAIL, GITHUB_URL, INSTAGRAM_URL, LINKEDIN_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechTool {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: Level,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: &'static str,
    pub timeline: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

pub const OWNER: &str = "Akash Prabhakaran";
pub const TAGLINE: &str = "Full Stack Developer";

const DEVICON: &str = "devicon-";

pub const TECH_TOOLS: &[TechTool] = &[
    TechTool {
        name: "React",
        icon: "react-original",
        level: Level::Advanced,
        description: "Building dynamic UIs with reusable components and modern React patterns",
    },
    TechTool {
        name: "Next.js",
        icon: "nextjs-plain",
        level: Level::Advanced,
        description: "Creating performant full-stack applications with SSR and static generation",
    },
    TechTool {
        name: "TypeScript",
        icon: "typescript-plain",
        level: Level::Advanced,
        description: "Writing type-safe code for better maintainability and developer experience",
    },
    TechTool {
        name: "Node.js",
        icon: "nodejs-plain",
        level: Level::Advanced,
        description: "Building scalable backend services and REST APIs",
    },
    TechTool {
        name: "Firebase",
        icon: "firebase-plain",
        level: Level::Intermediate,
        description: "Real-time database, authentication, and cloud functions",
    },
    TechTool {
        name: "Tailwind CSS",
        icon: "tailwindcss-original",
        level: Level::Advanced,
        description: "Rapid UI development with utility-first CSS framework",
    },
    TechTool {
        name: "PostgreSQL",
        icon: "postgresql-plain",
        level: Level::Intermediate,
        description: "Relational database for structured data",
    },
    TechTool {
        name: "Docker",
        icon: "docker-plain",
        level: Level::Intermediate,
        description: "Containerization for consistent development and deployment",
    },
    TechTool {
        name: "Git",
        icon: "git-plain",
        level: Level::Advanced,
        description: "Version control and collaborative development",
    },
];

pub const UPCOMING_PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack marketplace with real-time inventory management, secure payment processing, and an admin dashboard.",
        tech: &["Next.js", "TypeScript", "Stripe", "Prisma"],
        status: "Planning Phase",
        timeline: "Q2 2024",
    },
    Project {
        title: "AI-Powered Chat Application",
        description: "An intelligent chat platform with natural language processing, voice recognition, and real-time translation.",
        tech: &["React", "Node.js", "OpenAI", "WebSocket"],
        status: "Research Phase",
        timeline: "Q3 2024",
    },
    Project {
        title: "Portfolio 2.0",
        description: "An enhanced version of this portfolio with interactive project demonstrations.",
        tech: &["Rust", "Leptos", "WebAssembly", "Tailwind"],
        status: "In Development",
        timeline: "Q2 2024",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Email",
        href: "mailto:akashfgz80@gmail.com",
        description: "Drop me a line anytime",
    },
    SocialLink {
        name: "GitHub",
        href: GITHUB_URL,
        description: "Check out my code",
    },
    SocialLink {
        name: "LinkedIn",
        href: LINKEDIN_URL,
        description: "Let's connect professionally",
    },
    SocialLink {
        name: "Instagram",
        href: INSTAGRAM_URL,
        description: "Follow my journey",
    },
];

pub fn devicon_class(tool: &TechTool) -> String {
    format!("{DEVICON}{} colored", tool.icon)
}

/// schema.org `Person` description embedded in the document head.
pub fn person_json_ld() -> String {
    let same_as = SOCIAL_LINKS
        .iter()
        .filter(|l| l.href.starts_with("https://"))
        .map(|l| l.href)
        .collect::<Vec<_>>();
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": OWNER,
        "jobTitle": TAGLINE,
        "email": EMAIL,
        "sameAs": same_as,
        "knowsAbout": TECH_TOOLS.iter().map(|t| t.name).collect::<Vec<_>>(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links_are_external() {
        for link in SOCIAL_LINKS {
            assert!(
                link.href.starts_with("https://") || link.href.starts_with("mailto:"),
                "{}",
                link.name
            );
        }
        assert!(SOCIAL_LINKS.iter().any(|l| l.href.ends_with(EMAIL)));
    }

    #[test]
    fn test_person_json_ld() {
        let v: serde_json::Value = serde_json::from_str(&person_json_ld()).unwrap();
        assert_eq!(v["@type"], "Person");
        assert_eq!(v["name"], OWNER);
        assert_eq!(v["sameAs"].as_array().unwrap().len(), 3);
        assert!(v["knowsAbout"]
            .as_array()
            .unwrap()
            .iter()
            .any(|t| t == "TypeScript"));
    }

    #[test]
    fn test_devicon_class() {
        assert_eq!(devicon_class(&TECH_TOOLS[0]), "devicon-react-original colored");
    }
}
