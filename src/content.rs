//! Static page content

pub struct Profile {
    pub brand: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Role {
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

pub const PROFILE: Profile = Profile {
    brand: ".Dev",
    name: "Tirumala Teja",
    headline: "AI Engineer & Full Stack Developer",
};

// terminal, brain, globe, database, cloud
pub const HERO_ICONS: &[&str] = &["🖥", "🧠", "🌐", "🗄", "☁"];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &["React", "Angular", "JavaScript", "HTML/CSS"],
    },
    SkillCategory {
        name: "Backend",
        skills: &["Node.js", "Python", "Java", "MySQL"],
    },
    SkillCategory {
        name: "AI",
        skills: &[
            "Machine Learning",
            "Deep Learning",
            "Prompt Engineering",
            "CodeT5",
        ],
    },
];

pub const EXPERIENCE: &[Role] = &[Role {
    company: "Jamsetji Tata Society for Innovation and Entrepreneurship (JITSIE)",
    title: "DevOps",
    period: "2023 - 2026",
    highlights: &[
        "Developed JITSIE's website to enhance digital presence",
        "Designed an intuitive UI using Figma",
        "Built a responsive site with dynamic content features",
        "Improved online engagement and accessibility",
    ],
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Alzheimer's Detection Using CNN with ResNet",
        points: &[
            "Developed a CNN model using ResNet for MRI data",
            "Trained on ADNI dataset with 98% accuracy",
            "Optimized preprocessing for reliable early detection",
        ],
    },
    Project {
        title: "Restaurant Management System",
        points: &[
            "Designed MEAN stack app for order management",
            "Features: QR-based orders, real-time tracking, admin panel",
            "Reduced workload by 60%, improved accuracy and delivery",
        ],
    },
];

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        icon: "🐙",
        label: "GitHub",
        url: "https://github.com/thirumalateja03",
    },
    ContactLink {
        icon: "🔗",
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/reddy-tirumala-teja-25a934252/",
    },
    ContactLink {
        icon: "✉",
        label: "Email",
        url: "mailto:thirumalateja03@gmail.com",
    },
];
