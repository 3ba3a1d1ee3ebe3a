//! Built-in curriculum content.

use super::{JobListing, Module, RoadmapPhase, Specialization};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn module(
    id: &str,
    title: &str,
    level: &str,
    duration: &str,
    description: &str,
    topics: &[&str],
) -> Module {
    Module {
        id: id.to_string(),
        title: title.to_string(),
        level: level.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        topics: strings(topics),
    }
}

fn phase(phase: u32, title: &str, duration: &str, topics: &[&str]) -> RoadmapPhase {
    RoadmapPhase {
        phase,
        title: title.to_string(),
        duration: duration.to_string(),
        topics: strings(topics),
    }
}

fn job(title: &str, salary: &str, growth: &str) -> JobListing {
    JobListing {
        title: title.to_string(),
        salary: salary.to_string(),
        growth: growth.to_string(),
    }
}

pub fn builtin_specializations() -> Vec<Specialization> {
    vec![
        information_technology(),
        software_engineering(),
        data_science(),
        interactive_media(),
    ]
}

fn information_technology() -> Specialization {
    Specialization {
        id: "it".to_string(),
        name: "Information Technology".to_string(),
        description: "Master the fundamentals of computing, networking, and system administration"
            .to_string(),
        color: "blue".to_string(),
        icon: "computer".to_string(),
        modules: vec![
            module(
                "it-basics",
                "IT Fundamentals",
                "Beginner",
                "4 weeks",
                "Basic concepts of IT, computer systems, and networking",
                &["Computer Hardware", "Operating Systems", "Basic Networking", "IT Security Basics"],
            ),
            module(
                "networking",
                "Network Administration",
                "Intermediate",
                "6 weeks",
                "Learn to configure and manage computer networks",
                &["TCP/IP", "Routing & Switching", "Network Security", "Wireless Networks"],
            ),
            module(
                "cloud-computing",
                "Cloud Technologies",
                "Advanced",
                "8 weeks",
                "Modern cloud platforms and services",
                &["AWS/Azure/GCP", "Container Technologies", "DevOps", "Cloud Security"],
            ),
        ],
        roadmap: vec![
            phase(1, "Foundation", "2 months", &["Basic IT", "Hardware", "OS"]),
            phase(2, "Networking", "2 months", &["Networking", "Security", "Protocols"]),
            phase(3, "Specialization", "3 months", &["Cloud", "DevOps", "Advanced Security"]),
            phase(4, "Certification", "1 month", &["CompTIA", "Cisco", "Microsoft"]),
        ],
        jobs: vec![
            job("IT Support Specialist", "$35,000 - $50,000", "High"),
            job("Network Administrator", "$55,000 - $75,000", "Medium"),
            job("Cloud Architect", "$90,000 - $130,000", "Very High"),
            job("Cybersecurity Analyst", "$70,000 - $100,000", "Very High"),
        ],
    }
}

fn software_engineering() -> Specialization {
    Specialization {
        id: "se".to_string(),
        name: "Software Engineering".to_string(),
        description:
            "Build robust software systems and applications using modern development practices"
                .to_string(),
        color: "green".to_string(),
        icon: "code".to_string(),
        modules: vec![
            module(
                "programming-basics",
                "Programming Fundamentals",
                "Beginner",
                "6 weeks",
                "Learn core programming concepts and your first language",
                &["Programming Logic", "Variables & Data Types", "Control Structures", "Functions"],
            ),
            module(
                "web-development",
                "Web Development",
                "Intermediate",
                "8 weeks",
                "Build modern web applications with frontend and backend",
                &["HTML/CSS/JavaScript", "React/Vue", "Node.js", "Databases"],
            ),
            module(
                "software-architecture",
                "Software Architecture",
                "Advanced",
                "10 weeks",
                "Design scalable and maintainable software systems",
                &["Design Patterns", "Microservices", "System Design", "Performance Optimization"],
            ),
        ],
        roadmap: vec![
            phase(1, "Programming Basics", "3 months", &["Python/Java", "Algorithms", "Git"]),
            phase(2, "Web Development", "3 months", &["Frontend", "Backend", "Databases"]),
            phase(3, "Advanced Topics", "4 months", &["Architecture", "Testing", "DevOps"]),
            phase(4, "Specialization", "2 months", &["Mobile", "AI/ML", "Cloud Native"]),
        ],
        jobs: vec![
            job("Junior Developer", "$45,000 - $65,000", "High"),
            job("Full Stack Developer", "$70,000 - $95,000", "Very High"),
            job("Software Architect", "$110,000 - $150,000", "High"),
            job("DevOps Engineer", "$85,000 - $120,000", "Very High"),
        ],
    }
}

fn data_science() -> Specialization {
    Specialization {
        id: "ds".to_string(),
        name: "Data Science".to_string(),
        description: "Extract insights from data using statistical analysis and machine learning"
            .to_string(),
        color: "purple".to_string(),
        icon: "chart".to_string(),
        modules: vec![
            module(
                "data-analysis",
                "Data Analysis Fundamentals",
                "Beginner",
                "5 weeks",
                "Learn to analyze and visualize data effectively",
                &[
                    "Statistics Basics",
                    "Excel/Google Sheets",
                    "Data Visualization",
                    "Descriptive Analytics",
                ],
            ),
            module(
                "python-data-science",
                "Python for Data Science",
                "Intermediate",
                "8 weeks",
                "Use Python libraries for data manipulation and analysis",
                &["Pandas", "NumPy", "Matplotlib", "Seaborn", "Jupyter Notebooks"],
            ),
            module(
                "machine-learning",
                "Machine Learning",
                "Advanced",
                "12 weeks",
                "Build predictive models and AI systems",
                &[
                    "Supervised Learning",
                    "Unsupervised Learning",
                    "Deep Learning",
                    "Model Deployment",
                ],
            ),
        ],
        roadmap: vec![
            phase(1, "Math & Statistics", "2 months", &["Statistics", "Linear Algebra", "Calculus"]),
            phase(2, "Programming", "2 months", &["Python", "R", "SQL"]),
            phase(3, "Data Analysis", "3 months", &["EDA", "Visualization", "Storytelling"]),
            phase(4, "Machine Learning", "4 months", &["ML Algorithms", "Deep Learning", "MLOps"]),
        ],
        jobs: vec![
            job("Data Analyst", "$50,000 - $70,000", "High"),
            job("Data Scientist", "$80,000 - $120,000", "Very High"),
            job("ML Engineer", "$95,000 - $140,000", "Very High"),
            job("Data Engineer", "$85,000 - $125,000", "Very High"),
        ],
    }
}

fn interactive_media() -> Specialization {
    Specialization {
        id: "im".to_string(),
        name: "Interactive Media".to_string(),
        description: "Create engaging digital experiences through multimedia design, web development, and user interaction"
            .to_string(),
        color: "orange".to_string(),
        icon: "palette".to_string(),
        modules: vec![
            module(
                "design-fundamentals",
                "Digital Design Fundamentals",
                "Beginner",
                "4 weeks",
                "Learn core principles of digital design and visual communication",
                &["Design Principles", "Color Theory", "Typography", "Adobe Creative Suite"],
            ),
            module(
                "web-multimedia",
                "Web & Multimedia Development",
                "Intermediate",
                "6 weeks",
                "Build interactive websites and multimedia applications",
                &["HTML5/CSS3", "JavaScript Animations", "Video Production", "Audio Editing"],
            ),
            module(
                "ux-interaction",
                "UX Design & Interactive Systems",
                "Advanced",
                "8 weeks",
                "Design user-centered interactive experiences and interfaces",
                &["User Research", "Prototyping", "Interaction Design", "Usability Testing"],
            ),
        ],
        roadmap: vec![
            phase(
                1,
                "Design Foundation",
                "2 months",
                &["Design Principles", "Creative Software", "Visual Arts"],
            ),
            phase(
                2,
                "Web Development",
                "2 months",
                &["Frontend Development", "Responsive Design", "CSS Frameworks"],
            ),
            phase(
                3,
                "Multimedia Production",
                "3 months",
                &["Video Editing", "Animation", "3D Graphics"],
            ),
            phase(
                4,
                "UX Specialization",
                "2 months",
                &["User Experience", "Interaction Design", "Prototyping"],
            ),
        ],
        jobs: vec![
            job("UI/UX Designer", "$55,000 - $80,000", "Very High"),
            job("Web Designer", "$45,000 - $65,000", "High"),
            job("Multimedia Developer", "$60,000 - $85,000", "High"),
            job("Interaction Designer", "$70,000 - $95,000", "Very High"),
        ],
    }
}
