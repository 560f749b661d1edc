//! Hardcoded profile content rendered by the section components.
//!
//! Everything on the page is compiled in; there is no fetch layer and no
//! CMS. Collections are const slices of `'static` strings so components
//! can iterate them without cloning.

/// Name shown in the nav brand and hero heading.
pub const NAME: &str = "Barış Güngör";

/// Hero tagline under the name.
pub const TAGLINE: &str = "Software Heritage Ambassador & AI Specialist";

/// Hero summary paragraph.
pub const SUMMARY: &str = "Passionate Software Development Specialist leveraging Python, React Native, and Natural Language Processing to develop innovative solutions across various industries.";

/// Biography paragraphs for the about section.
pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "As a Software Development Specialist, I leverage my skills in Python, React Native, and Natural Language Processing (NLP) to develop innovative solutions for various industries. I have a strong educational background in Computer Science and Engineering, with certifications in Artificial Intelligence and Automation with Python.",
    "I am passionate about applying my knowledge and skills to create value for organizations and society. Currently serving as a Software Heritage Ambassador, I'm committed to advancing open-source software preservation and contributing to the global technology community.",
    "My experience spans across AI/ML development, mobile application development, and software quality assurance, with a particular focus on creating user-friendly, efficient, and innovative solutions.",
];

/// Headline figure shown on an about-section stat card.
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "15+", label: "Certifications" },
    Stat { value: "5+", label: "Professional Memberships" },
    Stat { value: "3+", label: "Major Projects" },
    Stat { value: "2", label: "Degrees in Progress" },
];

/// A professional role on the experience timeline.
#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: [Experience; 5] = [
    Experience {
        title: "Project Employee",
        company: "Nurol Teknoloji",
        period: "May 2025 - Present",
        location: "Ankara",
        description: "Current role focusing on innovative technology solutions.",
    },
    Experience {
        title: "Artificial Intelligence Intern",
        company: "Powea",
        period: "November 2024 - Present",
        location: "Istanbul",
        description: "Developed Voice Recorder Application using React Native Expo. Created comprehensive AI Image Detection System leveraging AppSheet, BigQuery, and Flask. Performed exploratory data analysis, feature engineering, and ML pipeline construction.",
    },
    Experience {
        title: "McKinsey Forward Program Scholar",
        company: "McKinsey & Company",
        period: "April 2025 - May 2025",
        location: "Global",
        description: "Participated in prestigious leadership development program.",
    },
    Experience {
        title: "AI Trainer",
        company: "Outlier",
        period: "February 2025 - May 2025",
        location: "Los Angeles, California",
        description: "Specialized in natural language processing and machine learning, focusing on developing and refining training data to improve AI model accuracy and efficiency.",
    },
    Experience {
        title: "Software Development Specialist",
        company: "NovaSisTek | NovaSysTec",
        period: "July 2024 - May 2025",
        location: "Ankara",
        description: "Developed mobile applications using Kotlin and Java. Participated in rigorous code reviews and collaborated with designers and backend developers to deliver refined application features.",
    },
];

/// A featured project card.
#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "MRI-Based Brain Tumor Detection System",
        period: "April 2025 - May 2025",
        description: "AI-powered application designed to assist patients and doctors by providing a user-friendly platform for analyzing brain scan images. Features secure image handling, multi-format support, and clear interface leveraging AI and database for robust performance.",
        technologies: &["Python", "React Native", "ResNet", "AI/ML", "Medical Imaging"],
    },
    Project {
        title: "Traffic Violation Detection System",
        period: "February 2025 - May 2025",
        description: "Python-based application designed to analyze traffic video streams, detect traffic light states, track vehicles using YOLO, and identify red light violations with interactive calibration process.",
        technologies: &["Python", "YOLO", "Computer Vision", "Video Processing"],
    },
    Project {
        title: "Voice Recorder Application",
        period: "2024",
        description: "Developed using React Native Expo with AppSheet UI components to ensure intuitive and user-friendly experience.",
        technologies: &["React Native", "Expo", "AppSheet", "Mobile Development"],
    },
];

/// A named group of related skills.
#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        name: "Programming Languages",
        skills: &["Python", "Java", "Kotlin", "JavaScript"],
    },
    SkillCategory {
        name: "Frameworks & Libraries",
        skills: &["React Native", "Flask", "Expo"],
    },
    SkillCategory {
        name: "AI & Machine Learning",
        skills: &["Natural Language Processing", "Deep Learning", "Computer Vision", "YOLO", "ResNet"],
    },
    SkillCategory {
        name: "Tools & Platforms",
        skills: &["AppSheet", "BigQuery", "Git", "JIRA"],
    },
    SkillCategory {
        name: "Databases",
        skills: &["SQL", "Data Processing"],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &["Project Management", "Code Review", "Team Collaboration", "Quality Assurance"],
    },
];

/// A degree or program on the education list.
#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub location: &'static str,
}

pub const EDUCATION: [Education; 3] = [
    Education {
        degree: "Bachelor of Applied Science - Computer Science",
        institution: "Karkonoska Akademia Nauk Stosowanych w Jeleniej",
        period: "September 2024 - February 2025",
        location: "Poland",
    },
    Education {
        degree: "Bachelor of Engineering - Computer Engineering",
        institution: "OSTİM Teknik Üniversitesi",
        period: "October 2021 - June 2025",
        location: "Ankara, Turkey",
    },
    Education {
        degree: "Aspire Leaders Program",
        institution: "Aspire Institute",
        period: "March 2025 - May 2025",
        location: "Global",
    },
];

pub const CERTIFICATIONS: [&str; 9] = [
    "AI [Tomorrow Summit] 2025 - AIPA",
    "Certificate of Completion - Aspire Institute",
    "English Placement Test - European Commission",
    "GEODI Summer Workshop - DECE Software",
    "Software Quality Assurance Training",
    "Python Programming Series (101-401) - Turkcell",
    "Certified Associate In Scrum Fundamentals™",
    "Machine Learning and Image Processing - Cisco",
    "Artificial Intelligence for Everyone I & II - METU",
];

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/barisgungor10/";
pub const LOCATION: &str = "Ankara, Turkey";
pub const AVAILABILITY: &str = "Open to Remote & Global Opportunities";
pub const MEMBERSHIPS: &str = "Royal Aeronautical Society, NSPE, ISEA, IAENG";
