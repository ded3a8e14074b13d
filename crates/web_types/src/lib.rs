//! Shared data types for the AI project dashboard.
//!
//! This crate defines the repository record shape served by the backend
//! feeds (`/trending` and `/new`) and the display helpers the frontend
//! renders cards from.

use serde::{Deserialize, Serialize};

/// One software repository as described by the backend.
///
/// The backend owns this shape; the frontend validates it once at the
/// fetch boundary by deserializing and never again. Fields the backend
/// sends but the dashboard never reads (`name`, `trending_score`,
/// `created_at`, ...) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// "owner/name" identifier, unique within a feed.
    pub full_name: String,
    /// Link target for the card title.
    pub url: String,
    /// Short description; GitHub allows null, so may be absent.
    #[serde(default)]
    pub description: Option<String>,
    /// Total star count.
    pub stars: u64,
    /// Stars gained since the backend's previous refresh. Computed as a
    /// day-over-day difference, so it can be zero or negative.
    #[serde(default)]
    pub daily_stars: Option<i64>,
    /// Primary language, when the backend knows one.
    #[serde(default)]
    pub language: Option<String>,
    /// Topic tags, in the order the backend lists them.
    pub topics: Vec<String>,
}

impl RepositoryRecord {
    /// Description text for display; empty when the backend sent none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Daily star delta worth showing on the card.
    ///
    /// Zero, absent, and negative values all mean "no delta indicator".
    pub fn daily_delta(&self) -> Option<i64> {
        self.daily_stars.filter(|&n| n > 0)
    }

    /// Language label for display, substituting "N/A" when the backend
    /// sent nothing or an empty string.
    pub fn language_label(&self) -> &str {
        match self.language.as_deref() {
            Some(lang) if !lang.is_empty() => lang,
            _ => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RepositoryRecord {
        RepositoryRecord {
            full_name: "a/b".to_string(),
            url: "https://x".to_string(),
            description: Some("d".to_string()),
            stars: 10,
            daily_stars: Some(3),
            language: Some("Go".to_string()),
            topics: vec!["x".to_string()],
        }
    }

    #[test]
    fn test_parse_full_backend_payload() {
        // Exactly what the backend serves, extra fields included.
        let json = r#"{
            "name": "b",
            "full_name": "a/b",
            "description": "d",
            "url": "https://x",
            "stars": 10,
            "daily_stars": 3,
            "topics": ["x"],
            "language": "Go",
            "trending_score": 6.0
        }"#;

        let record: RepositoryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record, sample());
    }

    #[test]
    fn test_parse_tolerates_null_optionals() {
        let json = r#"{
            "full_name": "a/b",
            "description": null,
            "url": "https://x",
            "stars": 0,
            "daily_stars": null,
            "language": null,
            "topics": []
        }"#;

        let record: RepositoryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.description, None);
        assert_eq!(record.daily_stars, None);
        assert_eq!(record.language, None);
    }

    #[test]
    fn test_parse_tolerates_absent_optionals() {
        let json = r#"{
            "full_name": "a/b",
            "url": "https://x",
            "stars": 0,
            "topics": []
        }"#;

        let record: RepositoryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.description_text(), "");
        assert_eq!(record.daily_delta(), None);
        assert_eq!(record.language_label(), "N/A");
    }

    #[test]
    fn test_missing_topics_is_a_schema_error() {
        let json = r#"{
            "full_name": "a/b",
            "url": "https://x",
            "stars": 0
        }"#;

        let result: Result<RepositoryRecord, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_daily_delta_hides_zero_and_negative() {
        let mut record = sample();

        record.daily_stars = Some(0);
        assert_eq!(record.daily_delta(), None);

        record.daily_stars = Some(-5);
        assert_eq!(record.daily_delta(), None);

        record.daily_stars = None;
        assert_eq!(record.daily_delta(), None);

        record.daily_stars = Some(3);
        assert_eq!(record.daily_delta(), Some(3));
    }

    #[test]
    fn test_language_label_substitutes_na() {
        let mut record = sample();

        assert_eq!(record.language_label(), "Go");

        record.language = Some(String::new());
        assert_eq!(record.language_label(), "N/A");

        record.language = None;
        assert_eq!(record.language_label(), "N/A");
    }

    #[test]
    fn test_list_parse_preserves_length_and_order() {
        let json = r#"[
            {"full_name": "a/b", "url": "u1", "stars": 1, "topics": ["t1", "t2"]},
            {"full_name": "c/d", "url": "u2", "stars": 2, "topics": []}
        ]"#;

        let records: Vec<RepositoryRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].full_name, "a/b");
        assert_eq!(records[0].topics, vec!["t1", "t2"]);
        assert_eq!(records[1].full_name, "c/d");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = sample();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: RepositoryRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }
}
