//! Static portfolio catalog served by the JSON API.
//!
//! Hard-coded; there is no store behind it.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

/// One gallery entry. Field names follow the public JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    pub is_live: bool,
    pub tech: &'static [&'static str],
}

pub const CONTACT: Contact = Contact {
    email: "ziyan@example.com",
    linkedin: "https://linkedin.com/in/ziyansolanki",
    github: "https://github.com/ZiyanSolanki",
};

pub const PROJECTS: &[Project] = &[
    Project {
        id: "flavorflow",
        title: "FlavorFlow AI",
        description: "AI-powered recipe assistant",
        link: Some("https://flavorflow-ai.vercel.app/"),
        is_live: true,
        tech: &["AI", "Recipe Generation", "Natural Language Processing"],
    },
    Project {
        id: "calendar-ai",
        title: "Calendar Management AI",
        description: "Intelligent calendar automation system",
        link: None,
        is_live: false,
        tech: &["AI Automation", "Calendar APIs", "Natural Language Processing"],
    },
    Project {
        id: "client-automation",
        title: "Client Automation System",
        description: "Comprehensive automation platform for client management",
        link: None,
        is_live: false,
        tech: &["Automation", "CRM Integration", "Analytics Dashboard"],
    },
    Project {
        id: "nightmare-saga",
        title: "Nightmare Saga: Dream 1",
        description: "Immersive game development project",
        link: None,
        is_live: false,
        tech: &["Game Development", "Unity", "C#", "Game Design"],
    },
    Project {
        id: "data-dashboard",
        title: "Data Analytics Dashboard",
        description: "Interactive visualization platform",
        link: None,
        is_live: false,
        tech: &["Excel", "IBM Cognos", "Google Looker Studio", "Data Visualization"],
    },
];
