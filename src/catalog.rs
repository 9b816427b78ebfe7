//! Fixed portfolio content rendered by the sections.

pub const OWNER_NAME: &str = "Alok Kushwaha";
pub const OWNER_ROLE: &str = "Data Scientist & AI Engineer";
pub const OWNER_EMAIL: &str = "kushwahaalok025@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/Alok-Fusion";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/akushwaha-j";
pub const PORTFOLIO_URL: &str = "https://alok-kushwaha.vercel.app";

pub const CARD_TECH_LIMIT: usize = 4;
pub const CARD_HIGHLIGHT_LIMIT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Ml,
    Nlp,
    Cv,
    Data,
    Finance,
}

impl Category {
    pub const FILTERS: [Category; 6] = [
        Self::All,
        Self::Ml,
        Self::Nlp,
        Self::Cv,
        Self::Data,
        Self::Finance,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Ml => "ml",
            Self::Nlp => "nlp",
            Self::Cv => "cv",
            Self::Data => "data",
            Self::Finance => "finance",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::FILTERS
            .into_iter()
            .find(|category| category.key() == value)
    }

    /// Label on the filter button.
    pub fn filter_label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Ml => "Machine Learning",
            Self::Nlp => "NLP",
            Self::Cv => "Computer Vision",
            Self::Data => "Data Extraction",
            Self::Finance => "Finance Analytics",
        }
    }

    /// Label on a project card badge.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            other => other.filter_label(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub accuracy: Option<&'static str>,
    pub impact: Option<&'static str>,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub github: &'static str,
    pub accent: &'static str,
}

impl Project {
    pub fn badge(&self) -> Option<&'static str> {
        self.accuracy
            .or_else(|| self.impact.and_then(|impact| impact.split(' ').next()))
    }

    pub fn card_tech(&self) -> &'static [&'static str] {
        &self.tech[..self.tech.len().min(CARD_TECH_LIMIT)]
    }

    pub fn hidden_tech_count(&self) -> usize {
        self.tech.len().saturating_sub(CARD_TECH_LIMIT)
    }

    pub fn card_highlights(&self) -> &'static [&'static str] {
        &self.highlights[..self.highlights.len().min(CARD_HIGHLIGHT_LIMIT)]
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Wheat Crop Disease Detection",
        subtitle: "MSc Research - Computer Vision",
        category: Category::Cv,
        image: "/project_wheat.jpg",
        accuracy: Some("89%"),
        impact: Some("~15-20% accuracy improvement"),
        description: "Research project for MSc Data Science focusing on wheat crop health detection using CNN and ML hybrid pipeline with preprocessing techniques.",
        tech: &["Python", "OpenCV", "CNN", "Scikit-learn", "Matplotlib"],
        highlights: &[
            "Applied CLAHE, resizing, and denoising preprocessing",
            "Evaluated RandomForest, XGBoost, SVM with Bayesian optimization",
            "Used Grad-CAM for interpretability and feature saliency",
            "Reduced manual crop inspection effort significantly",
        ],
        github: GITHUB_URL,
        accent: "#10b981",
    },
    Project {
        title: "NemesisAI",
        subtitle: "NLP Debate Analytics Platform",
        category: Category::Nlp,
        image: "/project_nemesis.jpg",
        accuracy: Some("88%"),
        impact: Some("Persistent conversation analytics"),
        description: "Advanced NLP platform for debate analytics using Transformer models to generate relevant counter-arguments and analyze conversation patterns.",
        tech: &["Python", "Flask", "Transformers", "MongoDB"],
        highlights: &[
            "~88% relevance accuracy in counter-arguments",
            "Persistent conversation analytics storage",
            "Demonstrates reasoning-based NLP capabilities",
            "Real-time debate flow analysis",
        ],
        github: GITHUB_URL,
        accent: "#a855f7",
    },
    Project {
        title: "Fake Persona Detector",
        subtitle: "Fraud Classification System",
        category: Category::Ml,
        image: "/project1.jpg",
        accuracy: Some("80%+"),
        impact: Some("Fintech fraud & KYC relevance"),
        description: "Multimodal fraud detection system combining text embeddings (TF-IDF, Word2Vec) and image embeddings for fake persona identification.",
        tech: &["Python", "TF-IDF", "Embeddings", "Scikit-learn"],
        highlights: &[
            "~80%+ accuracy in fake vs real classification",
            "Direct relevance to fintech fraud & KYC",
            "Image feature analysis integration",
            "Text-based embedding classification",
        ],
        github: GITHUB_URL,
        accent: "#3b82f6",
    },
    Project {
        title: "AI Reverse Image Search",
        subtitle: "Analytical Prototype",
        category: Category::Cv,
        image: "/project_reverse.jpg",
        accuracy: None,
        impact: Some("Fast similarity ranking"),
        description: "Computer vision prototype for reverse image search using image hashing and embedding similarity metrics for fast image retrieval.",
        tech: &["Python", "Image Hashing", "Embeddings", "Similarity Metrics"],
        highlights: &[
            "Fast similarity ranking algorithm",
            "Image hashing for quick lookups",
            "Embedding-based similarity matching",
            "Reduced manual verification effort",
        ],
        github: GITHUB_URL,
        accent: "#06b6d4",
    },
    Project {
        title: "MindMood",
        subtitle: "Emotion Analytics System",
        category: Category::Nlp,
        image: "/project_mindmood.jpg",
        accuracy: Some("75-80%"),
        impact: Some("Privacy-first local analytics"),
        description: "Emotion detection and analytics platform using sentiment and emotion classifiers for behavioral analysis with privacy-focused design.",
        tech: &["Python", "Sentiment Analysis", "Emotion Classifiers"],
        highlights: &[
            "~75-80% emotion detection accuracy",
            "Privacy-first local analytics approach",
            "Behavioral pattern recognition",
            "Real-time emotion tracking",
        ],
        github: GITHUB_URL,
        accent: "#ec4899",
    },
    Project {
        title: "PDF Measurement & BOQ Extraction",
        subtitle: "Industrial Analytics",
        category: Category::Data,
        image: "/project_pdf.jpg",
        accuracy: None,
        impact: Some("60-70% effort reduction"),
        description: "Automated PDF processing system for extracting measurements and Bill of Quantities data from construction documents using computer vision.",
        tech: &["Python", "OpenCV", "PDF Processing", "Pandas"],
        highlights: &[
            "60-70% reduction in manual BOQ effort",
            "Structured, traceable tabular outputs",
            "Automated measurement extraction",
            "Construction document parsing",
        ],
        github: GITHUB_URL,
        accent: "#f97316",
    },
    Project {
        title: "Missing Person Finder",
        subtitle: "Analytical System",
        category: Category::Cv,
        image: "/project4.jpg",
        accuracy: Some("92%"),
        impact: Some("Faster candidate shortlisting"),
        description: "Computer vision-based system for missing person identification using 128D deep metric embeddings and similarity ranking algorithms.",
        tech: &["Python", "OpenCV", "KNN", "Cosine Similarity"],
        highlights: &[
            "128D deep metric embeddings",
            "Cosine similarity & KNN retrieval",
            "40% improvement in search latency",
            "Structured lifecycle data tracking",
        ],
        github: GITHUB_URL,
        accent: "#6366f1",
    },
    Project {
        title: "Financial Stress & Commodity Gap Analysis",
        subtitle: "Financial Data Analysis",
        category: Category::Finance,
        image: "/project_finance.jpg",
        accuracy: None,
        impact: Some("Market imbalance detection"),
        description: "Real analytical study of price gaps, spreads, and volatility patterns to identify financial stress periods through commodity vs financial movement.",
        tech: &["Python", "Pandas", "NumPy", "Statistical Analysis"],
        highlights: &[
            "Identified stress periods via widening gaps",
            "Price gaps & spreads analysis",
            "Volatility pattern detection",
            "Market imbalance interpretability",
        ],
        github: GITHUB_URL,
        accent: "#ef4444",
    },
    Project {
        title: "Commodity Price Trend Analysis",
        subtitle: "Time-Series Finance Analysis",
        category: Category::Finance,
        image: "/project_finance.jpg",
        accuracy: None,
        impact: Some("Risk-aware decision making"),
        description: "Comprehensive time-series analysis of commodity prices with rolling statistics, trend analysis, and comparative period studies.",
        tech: &["Python", "Pandas", "NumPy", "Rolling Statistics"],
        highlights: &[
            "Trend analysis & pattern detection",
            "Rolling mean & volatility tracking",
            "Comparative period analysis",
            "Unstable price regime detection",
        ],
        github: GITHUB_URL,
        accent: "#f59e0b",
    },
    Project {
        title: "Inflation & Price Sensitivity Analysis",
        subtitle: "Economic Analytics",
        category: Category::Finance,
        image: "/project_finance.jpg",
        accuracy: None,
        impact: Some("Macro-economic insights"),
        description: "Economic analysis studying price changes across time windows and comparing commodity movement against inflationary pressure.",
        tech: &["Python", "Pandas", "Economic Modeling"],
        highlights: &[
            "Purchasing-power erosion analysis",
            "Price change time-window studies",
            "Commodity vs inflation comparison",
            "Macro-economic analytical exposure",
        ],
        github: GITHUB_URL,
        accent: "#22c55e",
    },
    Project {
        title: "Profit-Loss & Margin Analysis",
        subtitle: "Financial Case Studies",
        category: Category::Finance,
        image: "/project_finance.jpg",
        accuracy: None,
        impact: Some("Business finance analytics"),
        description: "Analytical case studies focusing on margin computation, break-even analysis, and scenario-based financial comparisons.",
        tech: &["Python", "Pandas", "Financial Modeling"],
        highlights: &[
            "Margin computation & analysis",
            "Break-even point calculation",
            "Scenario-based comparison",
            "Practical business finance analytics",
        ],
        github: GITHUB_URL,
        accent: "#8b5cf6",
    },
];

pub fn visible_projects(category: Category) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| category == Category::All || project.category == category)
        .collect()
}

pub fn category_count(category: Category) -> usize {
    match category {
        Category::All => PROJECTS.len(),
        other => PROJECTS
            .iter()
            .filter(|project| project.category == other)
            .count(),
    }
}

pub fn category_counts() -> Vec<(Category, usize)> {
    Category::FILTERS
        .into_iter()
        .map(|category| (category, category_count(category)))
        .collect()
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub accent: &'static str,
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Programming",
        skills: &["Python", "SQL", "Pandas", "NumPy"],
        accent: "#3b82f6",
    },
    SkillGroup {
        title: "ML / DL",
        skills: &["Scikit-Learn", "TensorFlow", "PyTorch", "Keras"],
        accent: "#a855f7",
    },
    SkillGroup {
        title: "Data Processing",
        skills: &["Spark", "Hadoop", "Airflow", "ETL Pipelines"],
        accent: "#22c55e",
    },
    SkillGroup {
        title: "Cloud & DevOps",
        skills: &["AWS", "Azure", "Docker", "Git"],
        accent: "#f97316",
    },
    SkillGroup {
        title: "Visualization",
        skills: &["Matplotlib", "Seaborn", "Plotly", "PowerBI"],
        accent: "#ef4444",
    },
    SkillGroup {
        title: "Deployment",
        skills: &["FastAPI", "Flask", "REST APIs", "Model Serving"],
        accent: "#6366f1",
    },
    SkillGroup {
        title: "ML Workflow",
        skills: &["EDA", "Feature Engineering", "Hyperparameter Tuning", "CV"],
        accent: "#14b8a6",
    },
    SkillGroup {
        title: "Specializations",
        skills: &["Computer Vision", "NLP", "Time Series", "Fraud Detection"],
        accent: "#d946ef",
    },
];

pub const CORE_SKILLS: &[&str] = &[
    "Regression",
    "Classification",
    "Clustering",
    "Time Series",
    "A/B Testing",
    "NLP",
    "Computer Vision",
    "Deep Learning",
    "MLOps",
    "Statistical Analysis",
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "GenAI Intern",
        company: "Innomatics Research Labs",
        location: "Remote",
        period: "Nov 2025 - Present",
        description: "Designed ML-ready datasets using structured preprocessing pipelines including tokenization, vectorization, and normalization.",
        achievements: &[
            "Built validation frameworks using statistical checks, improving model reliability by 18%",
            "Worked with retrieval augmented data flows and embedding evaluation workflows",
        ],
    },
    Experience {
        role: "AI Model Trainer",
        company: "Outlier.ai",
        location: "Remote",
        period: "Sept 2024 - Present",
        description: "Cleaned, validated, and structured multi-million-record datasets for classification and reasoning tasks.",
        achievements: &[
            "Applied cross-validation and inter-rater reliability checks, enhancing dataset quality by 22%",
            "Performed statistical profiling and pattern analysis on large-scale datasets",
        ],
    },
    Experience {
        role: "Software Developer Intern",
        company: "MGrid Technologies",
        location: "Remote",
        period: "Nov 2024 - Jun 2025",
        description: "Built Python/Node.js analytics pipelines with automated data ingestion and preprocessing.",
        achievements: &[
            "Designed SQL schemas and optimized queries, reducing query latency by 30%",
            "Automated recurring workflows using scripting, reducing manual load by 8 hrs/week",
        ],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub score: &'static str,
    pub description: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "MSc Data Science",
        institution: "SIES College of Arts, Science and Commerce",
        period: "Jul 2024 - May 2026",
        score: "8.57 CGPA",
        description: "Advanced studies in machine learning, statistical modeling, and big data analytics.",
    },
    Education {
        degree: "BSc Information Technology",
        institution: "SIES College of Arts, Science and Commerce",
        period: "Jun 2021 - May 2024",
        score: "9.03 CGPA",
        description: "Foundation in programming, database management, and software development.",
    },
    Education {
        degree: "12th Grade (HSC)",
        institution: "P.V.G's Vidya Bhawan High School and Junior College",
        period: "Feb 2021",
        score: "83.67%",
        description: "Science stream with focus on Mathematics and Computer Science.",
    },
    Education {
        degree: "10th Grade (SSC)",
        institution: "New Model English High School",
        period: "Mar 2019",
        score: "71.2%",
        description: "Secondary education with strong academic foundation.",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Google Data Analytics",
    "Python Programming",
    "Machine Learning Projects",
    "GenAI Projects",
];

pub struct Link {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_DETAILS: &[Link] = &[
    Link {
        label: "Email",
        value: OWNER_EMAIL,
        href: "mailto:kushwahaalok025@gmail.com",
    },
    Link {
        label: "Phone",
        value: "+91 9137479236",
        href: "tel:+919137479236",
    },
    Link {
        label: "Location",
        value: "Mumbai, India",
        href: "#contact",
    },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        value: "Code and experiments",
        href: GITHUB_URL,
    },
    Link {
        label: "LinkedIn",
        value: "Professional profile",
        href: LINKEDIN_URL,
    },
    Link {
        label: "Portfolio",
        value: "Previous portfolio",
        href: PORTFOLIO_URL,
    },
];

pub const HERO_TECH_STACK: &[&str] = &[
    "Python",
    "TensorFlow",
    "PyTorch",
    "SQL",
    "AWS",
    "Docker",
    "OpenCV",
    "NLP",
];

pub const HERO_FLOATING_CHIPS: &[&str] =
    &["Machine Learning", "Deep Learning", "Computer Vision", "NLP"];

pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("education", "Education"),
    ("contact", "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nlp_filter_shows_exactly_the_nlp_projects() {
        let visible = visible_projects(Category::from_key("nlp").expect("nlp is a category"));
        let titles: Vec<&str> = visible.iter().map(|project| project.title).collect();

        assert_eq!(titles, vec!["NemesisAI", "MindMood"]);
        assert!(visible.iter().all(|project| project.category == Category::Nlp));
    }

    #[test]
    fn counts_match_the_fixed_list() {
        let counts = category_counts();
        assert_eq!(
            counts,
            vec![
                (Category::All, 11),
                (Category::Ml, 1),
                (Category::Nlp, 2),
                (Category::Cv, 3),
                (Category::Data, 1),
                (Category::Finance, 4),
            ]
        );

        for (category, count) in counts {
            assert_eq!(visible_projects(category).len(), count);
        }
    }

    #[test]
    fn all_keeps_the_declared_order() {
        let visible = visible_projects(Category::All);
        assert_eq!(visible.len(), PROJECTS.len());
        assert_eq!(visible[0].title, "Wheat Crop Disease Detection");
        assert_eq!(visible[10].title, "Profit-Loss & Margin Analysis");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(Category::from_key("robotics"), None);
        for category in Category::FILTERS {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn card_badge_falls_back_to_the_first_impact_word() {
        let pdf = &PROJECTS[5];
        assert_eq!(pdf.badge(), Some("60-70%"));
        assert_eq!(PROJECTS[0].badge(), Some("89%"));
        assert_eq!(PROJECTS[0].card_tech().len(), CARD_TECH_LIMIT);
        assert_eq!(PROJECTS[0].hidden_tech_count(), 1);
        assert_eq!(PROJECTS[4].hidden_tech_count(), 0);
        assert_eq!(PROJECTS[4].card_highlights().len(), CARD_HIGHLIGHT_LIMIT);
    }
}
