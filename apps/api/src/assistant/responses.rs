// Canned text used by the assistant. All scoring and selection logic lives in
// recommend.rs / jobs.rs / chat.rs; this file only holds the tables.

pub const BEGINNER_MODULES: &[&str] = &[
    "Start with IT Fundamentals to build a strong foundation",
    "Programming Fundamentals is perfect for beginners in Software Engineering",
    "Data Analysis Fundamentals will introduce you to the world of data",
    "Database Fundamentals is essential for Information Management",
];

pub const INTERMEDIATE_MODULES: &[&str] = &[
    "Network Administration will enhance your IT skills",
    "Web Development is the next step in your software journey",
    "Python for Data Science will boost your analytical capabilities",
    "Information Systems will expand your management knowledge",
];

pub const ADVANCED_MODULES: &[&str] = &[
    "Cloud Technologies for advanced IT specialization",
    "Software Architecture for senior development roles",
    "Machine Learning for cutting-edge data science",
    "Data Governance for enterprise information management",
];

/// (interest tag, sentence appended to the recommendation), checked in this order.
pub const INTEREST_SUFFIXES: &[(&str, &str)] = &[
    (
        "programming",
        " Given your interest in programming, focus on hands-on coding practice.",
    ),
    (
        "analytics",
        " Your analytical mindset will be valuable in this module.",
    ),
    (
        "systems",
        " Your systems thinking will help you excel in this area.",
    ),
];

pub const RECOMMENDATION_CONFIDENCE: f64 = 0.85;

pub const NEXT_STEPS: &[&str] = &[
    "Start with the recommended module",
    "Complete all hands-on exercises",
    "Join our community discussions",
    "Take the module assessment",
];

pub const DEFAULT_SPECIALIZATION: &str = "it";

/// Job titles per specialization key. Unknown keys fall back to `it`.
pub const JOB_TITLES: &[(&str, [&str; 4])] = &[
    (
        "it",
        [
            "IT Support Specialist",
            "Network Administrator",
            "Cloud Architect",
            "Cybersecurity Analyst",
        ],
    ),
    (
        "se",
        [
            "Junior Developer",
            "Full Stack Developer",
            "Software Architect",
            "DevOps Engineer",
        ],
    ),
    (
        "ds",
        ["Data Analyst", "Data Scientist", "ML Engineer", "Data Engineer"],
    ),
    (
        "im",
        [
            "Database Administrator",
            "Business Analyst",
            "Information Architect",
            "Data Governance Manager",
        ],
    ),
];

/// (interest tag, title substring): each pair that fires adds `JOB_MATCH_BONUS`.
pub const JOB_BONUS_RULES: &[(&str, &str)] = &[
    ("leadership", "Manager"),
    ("coding", "Developer"),
    ("analytics", "Analyst"),
    ("systems", "Architect"),
];

pub const JOB_MATCH_BONUS: f64 = 0.1;
pub const JOB_BASE_SCORE: f64 = 0.7;
pub const JOB_BASE_SPREAD: f64 = 0.3;

pub const JOB_REASONS: &[&str] = &[
    "Matches your skill level",
    "Aligns with your interests",
    "High growth potential",
    "Good salary prospects",
];

/// (keywords, reply): the first group with any keyword in the message wins.
pub const CHAT_REPLIES: &[(&[&str], &str)] = &[
    (
        &["start", "begin"],
        "Great! I'd recommend starting with the fundamentals of your chosen specialization. What interests you most: IT, Software Engineering, Data Science, or Information Management?",
    ),
    (
        &["career", "job"],
        "The tech industry offers amazing career opportunities! Each specialization has its own unique career paths. Would you like me to suggest jobs based on your interests?",
    ),
    (
        &["difficult", "hard"],
        "Don't worry! Every expert was once a beginner. Start with basic modules, practice regularly, and join our community for support. You've got this!",
    ),
    (
        &["time", "long"],
        "Most modules take 4-12 weeks depending on complexity. The key is consistent daily practice - even 30 minutes a day makes a big difference!",
    ),
    (
        &["salary", "money"],
        "Tech careers offer excellent earning potential! Entry-level positions start around $35-50K, while senior roles can reach $100K+. The exact salary depends on your specialization and location.",
    ),
];

pub const CHAT_FALLBACK: &str = "I'm here to help you with your learning journey! Ask me about module recommendations, career paths, or any specific questions about our specializations.";

pub const CHAT_SUGGESTIONS: &[&str] = &[
    "Recommend a module for me",
    "What jobs are available in my field?",
    "How long does it take to complete a specialization?",
    "What should I learn first?",
];

pub const CAPABILITY_FEATURES: &[&str] = &[
    "Module Recommendations",
    "Career Path Guidance",
    "Job Market Insights",
    "Learning Plan Creation",
    "Skill Assessment",
    "Progress Tracking",
];

pub const CAPABILITY_ENDPOINTS: &[(&str, &str)] = &[
    (
        "recommend-module",
        "POST - Get personalized module recommendations",
    ),
    ("suggest-jobs", "POST - Get job suggestions based on interests"),
    ("chat", "POST - General AI assistant conversation"),
];

pub const ASSISTANT_VERSION: &str = "1.0.0";
