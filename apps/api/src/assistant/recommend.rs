//! Module recommendation: a random pick from the caller's level bucket,
//! personalised with fixed sentences for recognised interests.

use rand::Rng;
use serde::Serialize;

use crate::assistant::responses::{
    ADVANCED_MODULES, BEGINNER_MODULES, DEFAULT_SPECIALIZATION, INTEREST_SUFFIXES,
    INTERMEDIATE_MODULES, NEXT_STEPS, RECOMMENDATION_CONFIDENCE,
};
use crate::assistant::tags::TagList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBucket {
    Beginner,
    Intermediate,
    Advanced,
}

impl LevelBucket {
    /// Absent or empty → beginner; anything not beginner/intermediate → advanced.
    pub fn from_level(level: Option<&str>) -> Self {
        match level {
            None | Some("") | Some("beginner") => LevelBucket::Beginner,
            Some("intermediate") => LevelBucket::Intermediate,
            Some(_) => LevelBucket::Advanced,
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            LevelBucket::Beginner => BEGINNER_MODULES,
            LevelBucket::Intermediate => INTERMEDIATE_MODULES,
            LevelBucket::Advanced => ADVANCED_MODULES,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub recommendation: String,
    pub confidence: f64,
    pub suggested_specialization: String,
    pub next_steps: Vec<String>,
}

pub fn recommend_module<R: Rng + ?Sized>(
    rng: &mut R,
    level: Option<&str>,
    interests: &TagList,
    specialization: Option<&str>,
) -> RecommendationResult {
    let options = LevelBucket::from_level(level).options();
    let mut recommendation = options[rng.gen_range(0..options.len())].to_string();

    for (tag, suffix) in INTEREST_SUFFIXES {
        if interests.mentions(tag) {
            recommendation.push_str(suffix);
        }
    }

    RecommendationResult {
        recommendation,
        confidence: RECOMMENDATION_CONFIDENCE,
        suggested_specialization: specialization
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SPECIALIZATION)
            .to_string(),
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn tags(items: &[&str]) -> TagList {
        TagList::from_tags(items)
    }

    #[test]
    fn test_missing_level_always_uses_beginner_bucket() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = recommend_module(&mut rng, None, &TagList::Empty, None);
            assert!(
                BEGINNER_MODULES.contains(&result.recommendation.as_str()),
                "{}",
                result.recommendation
            );
        }
    }

    #[test]
    fn test_level_buckets() {
        assert_eq!(LevelBucket::from_level(Some("beginner")), LevelBucket::Beginner);
        assert_eq!(LevelBucket::from_level(Some("")), LevelBucket::Beginner);
        assert_eq!(
            LevelBucket::from_level(Some("intermediate")),
            LevelBucket::Intermediate
        );
        assert_eq!(LevelBucket::from_level(Some("advanced")), LevelBucket::Advanced);
        assert_eq!(LevelBucket::from_level(Some("expert")), LevelBucket::Advanced);
    }

    #[test]
    fn test_suffixes_follow_fixed_order_not_input_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = recommend_module(
            &mut rng,
            Some("intermediate"),
            &tags(&["systems", "cooking", "programming"]),
            None,
        );

        let base = INTERMEDIATE_MODULES
            .iter()
            .find(|m| result.recommendation.starts_with(*m))
            .expect("recommendation starts with an intermediate module");
        let expected = format!(
            "{base} Given your interest in programming, focus on hands-on coding practice. Your systems thinking will help you excel in this area."
        );
        assert_eq!(result.recommendation, expected);
    }

    #[test]
    fn test_interest_string_matches_by_substring() {
        let mut rng = StdRng::seed_from_u64(4);
        let result = recommend_module(
            &mut rng,
            None,
            &TagList::Text("programming".to_string()),
            None,
        );
        assert!(result
            .recommendation
            .ends_with(" Given your interest in programming, focus on hands-on coding practice."));
    }

    #[test]
    fn test_same_seed_same_pick() {
        let none = TagList::Empty;
        let a = recommend_module(&mut StdRng::seed_from_u64(11), Some("advanced"), &none, None);
        let b = recommend_module(&mut StdRng::seed_from_u64(11), Some("advanced"), &none, None);
        assert_eq!(a.recommendation, b.recommendation);
    }

    #[test]
    fn test_constant_fields() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = recommend_module(&mut rng, None, &TagList::Empty, Some("ds"));
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.suggested_specialization, "ds");
        assert_eq!(result.next_steps.len(), 4);

        let defaulted = recommend_module(&mut rng, None, &TagList::Empty, None);
        assert_eq!(defaulted.suggested_specialization, "it");
    }
}
