//! Static page content.
//!
//! Every field has a built-in default; a `[content]` table in the config
//! file can replace any of them.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Short mark shown at the left of the navigation bar.
    pub monogram: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            monogram: "AS.".into(),
            first_name: "Abhayraj".into(),
            last_name: "Singh".into(),
            role: "Data Science & AI Engineer".into(),
            tagline: "MS Data Science student at University of Maryland, crafting intelligent \
                      solutions through data pipelines, machine learning, and cloud engineering."
                .into(),
            email: "abhay16@umd.edu".into(),
            linkedin: "https://linkedin.com/in/abhay16".into(),
            github: "https://github.com/devwo1f".into(),
            location: "College Park, MD".into(),
        }
    }
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct About {
    pub lead: String,
    pub paragraphs: Vec<String>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            lead: "A passionate Data Scientist and AI Engineer with experience in building \
                   real-time data pipelines and optimizing cloud-based solutions."
                .into(),
            paragraphs: vec![
                "Currently pursuing my MS in Data Science at the University of Maryland, \
                 College Park. Previously worked at Accenture as an AI/ML Analyst and Data \
                 Engineer, where I engineered high-performance data systems and collaborated \
                 with cross-functional teams."
                    .into(),
                "My background in Computer Science from RGPV, combined with hands-on \
                 experience in machine learning, NLP, and computer vision, drives my passion \
                 for creating intelligent, scalable solutions."
                    .into(),
            ],
            skills: [
                "Python",
                "SQL",
                "Machine Learning",
                "Data Pipelines",
                "Cloud Engineering",
                "NLP",
                "Computer Vision",
                "TensorRT",
                "EfficientNet",
                "Embedding Vectors",
            ]
            .map(String::from)
            .to_vec(),
            certifications: [
                "Databricks Certified Data Engineer",
                "Azure AI Associate",
                "Azure Data Engineer Associate",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub period: String,
    pub role: String,
    pub organization: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Content {
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub about: About,
    pub timeline: Vec<Milestone>,
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            nav: vec![
                NavItem::new("About", "#about"),
                NavItem::new("Timeline", "#timeline"),
                NavItem::new("Projects", "#projects"),
                NavItem::new("Blog", "#blog"),
            ],
            about: About::default(),
            timeline: default_timeline(),
            projects: default_projects(),
            posts: default_posts(),
        }
    }
}

fn default_timeline() -> Vec<Milestone> {
    vec![
        Milestone {
            period: "Now".into(),
            role: "MS, Data Science".into(),
            organization: "University of Maryland, College Park".into(),
            summary: "Graduate study in data science, machine learning and data systems.".into(),
        },
        Milestone {
            period: "Previously".into(),
            role: "AI/ML Analyst & Data Engineer".into(),
            organization: "Accenture".into(),
            summary: "Engineered high-performance data systems and real-time pipelines with \
                      cross-functional teams."
                .into(),
        },
        Milestone {
            period: "Earlier".into(),
            role: "BE, Computer Science".into(),
            organization: "RGPV".into(),
            summary: "Foundations in computer science, with hands-on work in NLP and computer \
                      vision."
                .into(),
        },
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Smart Traffic Sign Recognition for Autonomous Vehicles".into(),
            description: "Developed a computer vision pipeline using EfficientNet to detect 50+ \
                          road signs. Applied quantization techniques and TensorRT to accelerate \
                          inference speed by 3x (60 FPS), enabling real-time processing for \
                          autonomous navigation."
                .into(),
            tags: ["Python", "Computer Vision", "EfficientNet", "TensorRT"]
                .map(String::from)
                .to_vec(),
            link: None,
        },
        Project {
            title: "Findflix Movie Recommendation".into(),
            description: "Architected a hybrid recommendation engine using embedding vectors and \
                          collaborative filtering; achieved an NDCG score of 0.88 (18% above \
                          baseline). Focused on production scalability, optimizing the data \
                          loading pipeline for real-time predictions."
                .into(),
            tags: [
                "Python",
                "Machine Learning",
                "Collaborative Filtering",
                "Embedding Vectors",
            ]
            .map(String::from)
            .to_vec(),
            link: None,
        },
    ]
}

fn default_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Building Scalable Data Pipelines in the Cloud".into(),
            excerpt: "Exploring best practices for designing and implementing real-time data \
                      processing systems that can handle millions of events."
                .into(),
            date: "Dec 2025".into(),
            read_time: "5 min read".into(),
            category: "Data Engineering".into(),
        },
        Post {
            title: "Azure Certifications: A Comprehensive Guide".into(),
            excerpt: "Tips and strategies for preparing and passing Azure Data Engineer and AI \
                      Associate certifications."
                .into(),
            date: "Oct 2025".into(),
            read_time: "6 min read".into(),
            category: "Certifications".into(),
        },
    ]
}
