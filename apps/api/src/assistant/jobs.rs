//! Job suggestions: a random base score per job plus fixed bonuses for
//! (interest, title word) pairs, sorted best first.

use rand::Rng;
use serde::Serialize;

use crate::assistant::responses::{
    DEFAULT_SPECIALIZATION, JOB_BASE_SCORE, JOB_BASE_SPREAD, JOB_BONUS_RULES, JOB_MATCH_BONUS,
    JOB_REASONS, JOB_TITLES,
};
use crate::assistant::tags::TagList;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendation {
    pub title: String,
    pub match_score: f64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestionResult {
    pub recommendations: Vec<JobRecommendation>,
    pub specialization: String,
    pub total_jobs: usize,
    pub advice: String,
}

/// Job titles for a specialization key, falling back to the `it` list.
pub fn job_titles(specialization: &str) -> &'static [&'static str; 4] {
    JOB_TITLES
        .iter()
        .find(|(key, _)| *key == specialization)
        .or_else(|| {
            JOB_TITLES
                .iter()
                .find(|(key, _)| *key == DEFAULT_SPECIALIZATION)
        })
        .map(|(_, titles)| titles)
        .unwrap_or(&JOB_TITLES[0].1)
}

/// Base in [0.7, 1.0), +0.1 per matching rule, capped at 1.0.
fn score_job<R: Rng + ?Sized>(rng: &mut R, title: &str, interests: &TagList) -> f64 {
    let mut score = JOB_BASE_SCORE + rng.gen::<f64>() * JOB_BASE_SPREAD;

    for (tag, word) in JOB_BONUS_RULES {
        if interests.mentions(tag) && title.contains(word) {
            score += JOB_MATCH_BONUS;
        }
    }

    score.min(1.0)
}

pub fn suggest_jobs<R: Rng + ?Sized>(
    rng: &mut R,
    specialization: Option<&str>,
    interests: &TagList,
) -> JobSuggestionResult {
    let specialization = specialization
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SPECIALIZATION);

    let mut recommendations: Vec<JobRecommendation> = job_titles(specialization)
        .iter()
        .map(|title| JobRecommendation {
            title: title.to_string(),
            match_score: score_job(&mut *rng, title, interests),
            reasons: JOB_REASONS.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    // Stable: equal scores keep table order.
    recommendations.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    JobSuggestionResult {
        total_jobs: recommendations.len(),
        recommendations,
        specialization: specialization.to_string(),
        advice: format!(
            "Based on your profile, focus on developing skills in {} for the best career opportunities.",
            specialization.to_uppercase()
        ),
    }
}
