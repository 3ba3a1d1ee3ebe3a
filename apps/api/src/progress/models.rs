use chrono::{DateTime, Utc};
use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a profile write. Every field is replaced, so omitting one clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub user_id: String,
    pub specialization_id: String,
    pub module_id: String,
    pub issued_at: DateTime<Utc>,
    pub certificate_url: String,
    pub verification_code: String,
}

/// Body of a progress write.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressUpdate {
    pub module_id: Option<String>,
    pub completed: Option<bool>,
    /// Outer `None` when the field is absent; `Some(None)` for an explicit `null`.
    /// Stored as given: no bounds or monotonicity check.
    #[serde(deserialize_with = "present")]
    pub progress_percentage: Option<Option<Number>>,
}

/// Marks a field as present, keeping `null` distinguishable from absence.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub completed_modules: Vec<String>,
    pub current_module: Option<String>,
    /// The number exactly as written (`25` stays `25`), or `null` if a client wrote null.
    pub progress_percentage: Option<Number>,
    pub certificates: Vec<Certificate>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            completed_modules: Vec::new(),
            current_module: None,
            progress_percentage: Some(Number::from(0u8)),
            certificates: Vec::new(),
        }
    }
}

impl ProgressRecord {
    /// Applies a progress write in place.
    ///
    /// A completed module is appended only once. The percentage is last-write-wins.
    /// The current module always becomes `update.module_id`, even when absent.
    pub fn apply(&mut self, update: ProgressUpdate) {
        if update.completed.unwrap_or(false) {
            if let Some(module_id) = &update.module_id {
                if !self.completed_modules.contains(module_id) {
                    self.completed_modules.push(module_id.clone());
                }
            }
        }

        if let Some(percentage) = update.progress_percentage {
            self.progress_percentage = percentage;
        }

        self.current_module = update.module_id;
    }
}

/// A user's records keyed by specialization id, kept in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProgress {
    records: Vec<(String, ProgressRecord)>,
}

impl UserProgress {
    pub fn get(&self, specialization_id: &str) -> Option<&ProgressRecord> {
        self.records
            .iter()
            .find(|(id, _)| id == specialization_id)
            .map(|(_, record)| record)
    }

    pub fn get_or_insert_default(&mut self, specialization_id: &str) -> &mut ProgressRecord {
        let index = match self.records.iter().position(|(id, _)| id == specialization_id) {
            Some(index) => index,
            None => {
                self.records
                    .push((specialization_id.to_string(), ProgressRecord::default()));
                self.records.len() - 1
            }
        };
        &mut self.records[index].1
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, &ProgressRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Every certificate, by record creation order then issuance order.
    pub fn certificates(&self) -> Vec<Certificate> {
        self.records
            .iter()
            .flat_map(|(_, record)| record.certificates.iter().cloned())
            .collect()
    }
}

impl Serialize for UserProgress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (id, record) in self.records() {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserOverview {
    pub user: User,
    pub progress: UserProgress,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completed(module_id: &str) -> ProgressUpdate {
        ProgressUpdate {
            module_id: Some(module_id.to_string()),
            completed: Some(true),
            progress_percentage: None,
        }
    }

    #[test]
    fn test_completing_twice_keeps_one_entry() {
        let mut record = ProgressRecord::default();
        record.apply(completed("it-basics"));
        record.apply(completed("it-basics"));
        assert_eq!(record.completed_modules, vec!["it-basics"]);
    }

    #[test]
    fn test_completion_order_follows_calls() {
        let mut record = ProgressRecord::default();
        record.apply(completed("networking"));
        record.apply(completed("it-basics"));
        assert_eq!(record.completed_modules, vec!["networking", "it-basics"]);
        assert_eq!(record.current_module.as_deref(), Some("it-basics"));
    }

    fn percentage(value: u64) -> Option<Option<Number>> {
        Some(Some(Number::from(value)))
    }

    #[test]
    fn test_percentage_is_last_write_wins() {
        let mut record = ProgressRecord::default();
        record.apply(ProgressUpdate {
            progress_percentage: percentage(80),
            ..completed("networking")
        });
        record.apply(ProgressUpdate {
            module_id: Some("networking".to_string()),
            completed: None,
            progress_percentage: percentage(40),
        });
        assert_eq!(record.progress_percentage, Some(Number::from(40u64)));
    }

    #[test]
    fn test_out_of_range_percentage_is_stored() {
        let mut record = ProgressRecord::default();
        record.apply(ProgressUpdate {
            progress_percentage: percentage(140),
            ..Default::default()
        });
        assert_eq!(record.progress_percentage, Some(Number::from(140u64)));
    }

    #[test]
    fn test_update_distinguishes_null_from_missing() {
        let missing: ProgressUpdate = serde_json::from_value(json!({ "moduleId": "x" })).unwrap();
        assert_eq!(missing.progress_percentage, None);

        let null: ProgressUpdate =
            serde_json::from_value(json!({ "progressPercentage": null })).unwrap();
        assert_eq!(null.progress_percentage, Some(None));

        let mut record = ProgressRecord::default();
        record.apply(missing);
        assert_eq!(record.progress_percentage, Some(Number::from(0u8)));
        record.apply(null);
        assert_eq!(record.progress_percentage, None);
    }

    #[test]
    fn test_integer_percentage_round_trips_as_written() {
        let update: ProgressUpdate =
            serde_json::from_value(json!({ "progressPercentage": 25 })).unwrap();
        let mut record = ProgressRecord::default();
        record.apply(update);
        assert_eq!(
            serde_json::to_value(&record).unwrap()["progressPercentage"],
            json!(25)
        );
    }

    #[test]
    fn test_missing_module_clears_current_without_completing() {
        let mut record = ProgressRecord::default();
        record.apply(completed("it-basics"));
        record.apply(ProgressUpdate {
            completed: Some(true),
            ..Default::default()
        });
        assert_eq!(record.completed_modules, vec!["it-basics"]);
        assert!(record.current_module.is_none());
    }

    #[test]
    fn test_default_record_serializes_camel_case() {
        let value = serde_json::to_value(ProgressRecord::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "completedModules": [],
                "currentModule": null,
                "progressPercentage": 0,
                "certificates": []
            })
        );
    }

    #[test]
    fn test_user_progress_serializes_in_creation_order() {
        let mut progress = UserProgress::default();
        progress.get_or_insert_default("se");
        progress.get_or_insert_default("it");
        progress.get_or_insert_default("se");

        let ids: Vec<&str> = progress.records().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["se", "it"]);

        let rendered = serde_json::to_string(&progress).unwrap();
        let se = rendered.find("\"se\"").unwrap();
        let it = rendered.find("\"it\"").unwrap();
        assert!(se < it, "{rendered}");
    }
}
