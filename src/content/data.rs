//! The built-in portfolio tables. Declaration order is display order.

use crate::{
    content::model::{
        Content, CyberProjectKind, DevProjectKind, Icon, Profile, ProjectEntry, SkillCategory,
        SkillEntry, SkillLevel, SocialLink,
    },
    foundation::color::Rgba8,
};

/// Placeholder href for links that do not exist yet.
pub const PLACEHOLDER_HREF: &str = "#";

/// Content shipped with the site.
pub fn builtin() -> Content {
    Content {
        profile: profile(),
        cyber_skills: cyber_skills(),
        cyber_projects: cyber_projects(),
        dev_skills: dev_skills(),
        dev_projects: dev_projects(),
        social: social_links(),
    }
}

pub fn profile() -> Profile {
    Profile {
        first_name: "Mouad".to_owned(),
        last_name: "Boudhar".to_owned(),
        headline: "Cybersecurity Pentester & Full Stack Developer".to_owned(),
        email: "mouadboudhar4@gmail.com".to_owned(),
        prompt: "guest@portfolio".to_owned(),
        cyber_tagline: "Junior Pentester & Security Enthusiast".to_owned(),
        dev_tagline: "Full Stack Developer Toolkit".to_owned(),
        copyright_year: 2025,
    }
}

fn leveled_category(name: &str, icon: &str, skills: &[(&str, SkillLevel)]) -> SkillCategory {
    SkillCategory {
        name: name.to_owned(),
        icon: icon.to_owned(),
        accent: None,
        skills: skills
            .iter()
            .map(|(n, l)| SkillEntry::leveled(*n, *l))
            .collect(),
    }
}

fn accented_category(name: &str, icon: &str, accent: Rgba8, skills: &[&str]) -> SkillCategory {
    SkillCategory {
        name: name.to_owned(),
        icon: icon.to_owned(),
        accent: Some(accent),
        skills: skills.iter().map(|n| SkillEntry::plain(*n)).collect(),
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_owned()).collect()
}

fn placeholder() -> Option<String> {
    Some(PLACEHOLDER_HREF.to_owned())
}

pub fn cyber_skills() -> Vec<SkillCategory> {
    use SkillLevel::{Intermediate, Learning, Proficient};

    vec![
        leveled_category(
            "Reconnaissance",
            "🔍",
            &[
                ("Nmap", Proficient),
                ("OSINT", Intermediate),
                ("Shodan", Intermediate),
                ("Recon-ng", Learning),
            ],
        ),
        leveled_category(
            "Web Exploitation",
            "🌐",
            &[
                ("Burp Suite", Proficient),
                ("SQL Injection", Intermediate),
                ("XSS", Intermediate),
                ("OWASP Top 10", Proficient),
            ],
        ),
        leveled_category(
            "Network Security",
            "🔐",
            &[
                ("Wireshark", Proficient),
                ("Metasploit", Intermediate),
                ("Netcat", Intermediate),
                ("VPN/Tunneling", Learning),
            ],
        ),
        leveled_category(
            "Scripting & Automation",
            "⚡",
            &[
                ("Python", Proficient),
                ("Bash", Intermediate),
                ("PowerShell", Learning),
                ("Custom Tools", Intermediate),
            ],
        ),
    ]
}

pub fn cyber_projects() -> Vec<ProjectEntry<CyberProjectKind>> {
    vec![
        ProjectEntry {
            title: "HackTheBox Writeups".to_owned(),
            description: "Collection of detailed writeups for various HTB machines, documenting enumeration, exploitation, and privilege escalation techniques.".to_owned(),
            kind: CyberProjectKind::Writeup,
            tags: tags(&["HTB", "Linux", "Windows", "PrivEsc"]),
            link: None,
            repo: placeholder(),
        },
        ProjectEntry {
            title: "Network Scanner Tool".to_owned(),
            description: "Custom Python tool for automated network reconnaissance, port scanning, and service enumeration with clean reporting.".to_owned(),
            kind: CyberProjectKind::Tool,
            tags: tags(&["Python", "Nmap", "Automation"]),
            link: None,
            repo: placeholder(),
        },
        ProjectEntry {
            title: "Web App Pentest Report".to_owned(),
            description: "Professional penetration testing report template following OWASP methodology with findings and remediation steps.".to_owned(),
            kind: CyberProjectKind::Report,
            tags: tags(&["OWASP", "Report", "Methodology"]),
            link: placeholder(),
            repo: None,
        },
        ProjectEntry {
            title: "CTF Challenge Solutions".to_owned(),
            description: "Scripts and solutions from various CTF competitions including web exploitation, crypto, and reverse engineering challenges.".to_owned(),
            kind: CyberProjectKind::Ctf,
            tags: tags(&["CTF", "Web", "Crypto", "RE"]),
            link: None,
            repo: placeholder(),
        },
    ]
}

pub fn dev_skills() -> Vec<SkillCategory> {
    vec![
        accented_category(
            "Languages",
            "💻",
            Rgba8::rgb(0x00, 0xd4, 0xff),
            &["TypeScript", "Python", "C/C++", "C#", "Java", "SQL"],
        ),
        accented_category(
            "Frontend",
            "🎨",
            Rgba8::rgb(0x00, 0xff, 0x9d),
            &["React", "Next.js", "Tailwind CSS", "Framer Motion", "HTML/CSS", "Vite"],
        ),
        accented_category(
            "Backend",
            "⚙️",
            Rgba8::rgb(0xff, 0x9d, 0x00),
            &["Node.js", "Django", ".NET", "REST APIs", "GraphQL", "Express"],
        ),
        accented_category(
            "Databases",
            "🗄️",
            Rgba8::rgb(0xd4, 0x00, 0xff),
            &["PostgreSQL", "MongoDB", "MySQL", "Oracle", "Redis", "SQLite"],
        ),
        accented_category(
            "DevOps & Tools",
            "🛠️",
            Rgba8::rgb(0xff, 0x5f, 0x56),
            &["Git", "Docker", "Linux", "CI/CD", "VS Code", "Postman"],
        ),
    ]
}

pub fn dev_projects() -> Vec<ProjectEntry<DevProjectKind>> {
    vec![
        ProjectEntry {
            title: "Portfolio Website".to_owned(),
            description: "Modern, responsive portfolio with smooth scroll snapping, terminal aesthetic, and Framer Motion animations. Built with React and Tailwind CSS.".to_owned(),
            kind: DevProjectKind::Web,
            tags: tags(&["React", "TypeScript", "Tailwind", "Framer Motion"]),
            link: placeholder(),
            repo: placeholder(),
        },
        ProjectEntry {
            title: "E-Commerce Platform".to_owned(),
            description: "Full-stack e-commerce solution with user authentication, product management, shopping cart, and payment integration.".to_owned(),
            kind: DevProjectKind::Fullstack,
            tags: tags(&["Next.js", "Node.js", "PostgreSQL", "Stripe"]),
            link: None,
            repo: placeholder(),
        },
        ProjectEntry {
            title: "Task Management API".to_owned(),
            description: "RESTful API for task management with JWT authentication, role-based access control, and real-time notifications.".to_owned(),
            kind: DevProjectKind::Api,
            tags: tags(&["Django", "REST", "PostgreSQL", "Docker"]),
            link: None,
            repo: placeholder(),
        },
        ProjectEntry {
            title: "Mobile Expense Tracker".to_owned(),
            description: "Cross-platform mobile application for tracking personal expenses with charts, categories, and budget alerts.".to_owned(),
            kind: DevProjectKind::App,
            tags: tags(&["React Native", "TypeScript", "SQLite", "Charts"]),
            link: None,
            repo: placeholder(),
        },
    ]
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            platform: "GitHub".to_owned(),
            icon: Icon::Github,
            url: "https://github.com/mouadboudhar".to_owned(),
            color: Rgba8::rgb(0xff, 0xff, 0xff),
            handle: "@mouadboudhar".to_owned(),
        },
        SocialLink {
            platform: "LinkedIn".to_owned(),
            icon: Icon::Linkedin,
            url: "https://linkedin.com/in/mouadboudhar".to_owned(),
            color: Rgba8::rgb(0x00, 0x77, 0xb5),
            handle: "/in/mouadboudhar".to_owned(),
        },
        SocialLink {
            platform: "Twitter".to_owned(),
            icon: Icon::Twitter,
            url: "https://twitter.com/unholydkplayer".to_owned(),
            color: Rgba8::rgb(0x1d, 0xa1, 0xf2),
            handle: "@unholydkplayer".to_owned(),
        },
        SocialLink {
            platform: "Bluesky".to_owned(),
            icon: Icon::Bluesky,
            url: "https://bsky.app/profile/mouadboudhar.bsky.social".to_owned(),
            color: Rgba8::rgb(0x00, 0x85, 0xff),
            handle: "@mouadboudhar".to_owned(),
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/content/data.rs"]
mod tests;
