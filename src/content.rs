//! Static page content rendered by the frontend.

pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_ROLE: &str = "Full-stack developer";
pub const CONTACT_EMAIL: &str = "hello@alexmorgan.dev";

pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        section: "home",
    },
    NavItem {
        label: "About",
        section: "about",
    },
    NavItem {
        label: "Skills",
        section: "skills",
    },
    NavItem {
        label: "Projects",
        section: "projects",
    },
    NavItem {
        label: "Contact",
        section: "contact",
    },
];

pub struct SkillCard {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
}

pub const SKILL_CARDS: &[SkillCard] = &[
    SkillCard {
        id: "frontend",
        name: "Frontend",
        icon: "fa-laptop-code",
        summary: "Responsive interfaces with modern component frameworks.",
    },
    SkillCard {
        id: "backend",
        name: "Backend",
        icon: "fa-server",
        summary: "APIs and services that stay fast under load.",
    },
    SkillCard {
        id: "typescript",
        name: "TypeScript",
        icon: "fa-code",
        summary: "Typed codebases that are easy to change.",
    },
    SkillCard {
        id: "devops",
        name: "DevOps",
        icon: "fa-cloud",
        summary: "CI pipelines, containers and cloud deployments.",
    },
];

pub struct SkillBadge {
    pub name: &'static str,
    pub brand_color: &'static str,
}

pub const SKILL_BADGES: &[SkillBadge] = &[
    SkillBadge {
        name: "HTML5",
        brand_color: "#e34f26",
    },
    SkillBadge {
        name: "CSS3",
        brand_color: "#1572b6",
    },
    SkillBadge {
        name: "JavaScript",
        brand_color: "#f7df1e",
    },
    SkillBadge {
        name: "TypeScript",
        brand_color: "#3178c6",
    },
    SkillBadge {
        name: "React",
        brand_color: "#61dafb",
    },
    SkillBadge {
        name: "Node.js",
        brand_color: "#339933",
    },
    SkillBadge {
        name: "Rust",
        brand_color: "#b7410e",
    },
    SkillBadge {
        name: "PostgreSQL",
        brand_color: "#4169e1",
    },
    SkillBadge {
        name: "Docker",
        brand_color: "#2496ed",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Task Board",
        description: "Realtime kanban board with offline sync.",
        href: "https://github.com/alexmorgan/task-board",
    },
    Project {
        title: "Weather Lens",
        description: "Forecast dashboard built on open meteorological data.",
        href: "https://github.com/alexmorgan/weather-lens",
    },
    Project {
        title: "Shopfront",
        description: "Headless storefront with a typed GraphQL API.",
        href: "https://github.com/alexmorgan/shopfront",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_rgba;
    use std::collections::HashSet;

    #[test]
    fn every_badge_has_a_usable_brand_color() {
        for badge in SKILL_BADGES {
            assert!(
                hex_to_rgba(badge.brand_color, 0.2).is_ok(),
                "{} has color {}",
                badge.name,
                badge.brand_color
            );
        }
    }

    #[test]
    fn nav_targets_are_unique() {
        let sections: HashSet<&str> = NAV_ITEMS.iter().map(|item| item.section).collect();

        assert_eq!(sections.len(), NAV_ITEMS.len());
    }

    #[test]
    fn skill_ids_are_unique() {
        let ids: HashSet<&str> = SKILL_CARDS.iter().map(|card| card.id).collect();

        assert_eq!(ids.len(), SKILL_CARDS.len());
    }
}
