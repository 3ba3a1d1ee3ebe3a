use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobMatch {
    pub title: String,
    #[serde(rename = "match")]
    pub match_percent: u32,
}

/// Result of a CV upload. The content is fixed: uploads are not parsed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvAnalysis {
    pub skills: Vec<String>,
    pub experience: String,
    pub recommendations: Vec<String>,
    pub matching_jobs: Vec<JobMatch>,
}

pub fn placeholder_analysis() -> CvAnalysis {
    CvAnalysis {
        skills: ["JavaScript", "React", "Node.js", "Problem Solving"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        experience: "Entry Level".to_string(),
        recommendations: [
            "Consider strengthening your database skills",
            "Add more projects to your portfolio",
            "Consider learning cloud technologies",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        matching_jobs: [
            ("Junior Developer", 85),
            ("Frontend Developer", 78),
            ("Full Stack Developer", 65),
        ]
        .iter()
        .map(|(title, pct)| JobMatch {
            title: title.to_string(),
            match_percent: *pct,
        })
        .collect(),
    }
}
