//! Everything the page says. Records are plain `'static` data compiled into the site.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Projects,
    Timeline,
    Skills,
    About,
    Contact,
}

impl SectionId {
    /// Sections in page order; also the navigation order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Projects,
        SectionId::Timeline,
        SectionId::Skills,
        SectionId::About,
        SectionId::Contact,
    ];

    /// DOM id of the section, used as the `#anchor` target.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Projects => "projects",
            SectionId::Timeline => "timeline",
            SectionId::Skills => "skills",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Projects => "Projects",
            SectionId::Timeline => "Timeline",
            SectionId::Skills => "Skills",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub period: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Mail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const SITE_NAME: &str = "PV ABHIRAM";
pub const OWNER: &str = "PV Abhiram";

pub const HERO_HEADLINE: &str = "Hello World";
pub const HERO_TAGLINE: &str = "I'm a freelance ML Engineer & Consultant Analyst.";
pub const HERO_CTA: &str = "Contact Me For A Chat";
pub const HERO_VIDEO: &str = "/bg3_3.mp4";
/// Rotated under the tagline, one at a time.
pub const HERO_ROLES: &[&str] = &[
    "Machine Learning Engineer",
    "Computer Vision Tinkerer",
    "Data Consultant",
    "Creative Developer",
];
pub const ROLE_ROTATION_MS: u64 = 3000;

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Neural Style Transfer",
        description: "AI-powered artistic style transformation using deep learning.",
        tags: &["TensorFlow", "Python", "React"],
        link: None,
    },
    Project {
        title: "Sentiment Analysis API",
        description: "Real-time emotion detection from text using NLP and BERT.",
        tags: &["BERT", "FastAPI", "Docker"],
        link: None,
    },
    Project {
        title: "Real-time Object Detection",
        description: "A computer vision app for object detection and classification.",
        tags: &["YOLO", "OpenCV", "JavaScript"],
        link: None,
    },
    Project {
        title: "Generative Art System",
        description: "Creating unique visual art using Generative Adversarial Networks (GANs).",
        tags: &["PyTorch", "GANs", "Next.js"],
        link: None,
    },
];

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        period: "2023 - Present",
        role: "Senior ML Engineer",
        organization: "Innovate AI",
        description: "Leading the development of a next-generation recommendation engine and mentoring junior engineers.",
    },
    TimelineEvent {
        period: "2020 - 2023",
        role: "Machine Learning Engineer",
        organization: "Data Driven Inc.",
        description: "Designed and deployed several computer vision models for automated quality inspection in manufacturing.",
    },
    TimelineEvent {
        period: "2018 - 2020",
        role: "Software Developer",
        organization: "Tech Solutions Co.",
        description: "Developed full-stack web applications and APIs, gaining a strong foundation in software engineering principles.",
    },
    TimelineEvent {
        period: "2018",
        role: "M.S. in Computer Science",
        organization: "University of Technology",
        description: "Specialized in Artificial Intelligence and Machine Learning, graduating with honors.",
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Machine Learning",
        skills: &["PyTorch", "TensorFlow", "scikit-learn", "Hugging Face", "GANs"],
    },
    SkillCategory {
        title: "Computer Vision & NLP",
        skills: &["OpenCV", "YOLO", "BERT", "spaCy"],
    },
    SkillCategory {
        title: "Engineering",
        skills: &["Python", "Rust", "TypeScript", "FastAPI", "Docker"],
    },
    SkillCategory {
        title: "Data",
        skills: &["SQL", "Pandas", "Spark", "Airflow"],
    },
];

pub const ABOUT: &str = "I'm a Machine Learning Engineer with a passion for creative development. My expertise lies in building intelligent applications that are not only functional but also intuitive and engaging. I have a strong background in deep learning, natural language processing, and computer vision, and I love bridging the gap between complex algorithms and beautiful user interfaces. I'm always eager to explore new technologies and push the boundaries of what's possible in the digital realm.";

pub const CONTACT_HEADLINE: &str = "Let's Connect";
pub const CONTACT_BLURB: &str = "Ready to build something amazing together?";
pub const CONTACT_EMAIL: &str = "alex.johnson@example.com";

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: SocialIcon::LinkedIn,
    },
    SocialLink {
        label: "Email",
        href: "mailto:alex.johnson@example.com",
        icon: SocialIcon::Mail,
    },
];

pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// One-based, zero-padded list position ("01", "02", ... "10").
pub fn display_index(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Role shown after `current` in the hero rotation.
pub fn next_role(current: usize) -> usize {
    if HERO_ROLES.is_empty() {
        0
    } else {
        (current + 1) % HERO_ROLES.len()
    }
}

pub fn copyright_line() -> String {
    format!("© {BUILD_YEAR} {OWNER}. Inspired by Julien Heuer.")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_display_index_padding() {
        assert_eq!(display_index(0), "01");
        assert_eq!(display_index(3), "04");
        assert_eq!(display_index(9), "10");
        assert_eq!(display_index(99), "100");
    }

    #[test]
    fn test_section_ids_unique() {
        let ids: HashSet<_> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());
        for section in SectionId::ALL {
            assert_eq!(section.href(), format!("#{}", section.as_str()));
            assert!(!section.label().is_empty());
        }
    }

    #[test]
    fn test_role_rotation_wraps() {
        let mut current = 0;
        for _ in 0..HERO_ROLES.len() {
            current = next_role(current);
        }
        assert_eq!(current, 0);
        assert_eq!(next_role(HERO_ROLES.len() - 1), 0);
    }

    #[test]
    fn test_content_is_populated() {
        assert!(!PROJECTS.is_empty());
        assert!(!TIMELINE.is_empty());
        assert!(!SKILLS.is_empty());
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.tags.is_empty());
        }
        // keys for list rendering must not collide
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
        for category in SKILLS {
            assert!(!category.skills.is_empty());
        }
    }

    #[test]
    fn test_copyright_uses_build_year() {
        let line = copyright_line();
        assert!(line.starts_with("© "));
        assert!(line.contains(BUILD_YEAR));
        assert_eq!(BUILD_YEAR.len(), 4);
        assert!(BUILD_YEAR.chars().all(|c| c.is_ascii_digit()));
    }
}
