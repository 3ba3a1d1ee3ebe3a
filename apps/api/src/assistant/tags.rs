//! Interest and skill tags as clients send them: a list, a single string, or null.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum TagList {
    /// Missing or `null`.
    #[default]
    Empty,
    /// A list matches a tag only when one entry equals it.
    Tags(Vec<String>),
    /// A bare string matches any tag it contains.
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    Tags(Vec<String>),
    Text(String),
}

impl TagList {
    pub fn from_tags(items: &[&str]) -> Self {
        TagList::Tags(items.iter().map(|s| s.to_string()).collect())
    }

    pub fn mentions(&self, tag: &str) -> bool {
        match self {
            TagList::Empty => false,
            TagList::Tags(tags) => tags.iter().any(|t| t == tag),
            TagList::Text(text) => text.contains(tag),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TagList::Empty => 0,
            TagList::Tags(tags) => tags.len(),
            TagList::Text(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for TagList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawTags>::deserialize(deserializer)? {
            None => TagList::Empty,
            Some(RawTags::Tags(tags)) => TagList::Tags(tags),
            Some(RawTags::Text(text)) => TagList::Text(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> TagList {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(parse(json!(null)), TagList::Empty);
        assert!(TagList::Empty.is_empty());
        assert!(!TagList::Empty.mentions("coding"));
    }

    #[test]
    fn test_list_matches_whole_entries_only() {
        let tags = parse(json!(["programming", "art"]));
        assert!(tags.mentions("programming"));
        assert!(!tags.mentions("program"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_string_matches_substrings() {
        let tags = parse(json!("data analytics and systems"));
        assert!(tags.mentions("analytics"));
        assert!(tags.mentions("systems"));
        assert!(!tags.mentions("coding"));
    }

    #[test]
    fn test_non_string_entries_are_rejected() {
        assert!(serde_json::from_value::<TagList>(json!([1, 2])).is_err());
    }
}
