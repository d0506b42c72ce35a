use serde::{Deserialize, Serialize};

/// A single modification of a tracked file, aged relative to the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub days_ago: u32,
}

impl ChangeEvent {
    pub fn new(days_ago: u32) -> Self {
        Self { days_ago }
    }

    /// Age a commit timestamp (unix seconds) against `now`. Future timestamps count as today.
    pub fn from_timestamp(timestamp: i64, now: i64) -> Self {
        let days = (now - timestamp).max(0) / 86400;
        Self {
            days_ago: u32::try_from(days).unwrap_or(u32::MAX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCommits {
    pub name: String,
    pub commits: u32,
}

impl AuthorCommits {
    pub fn new(name: impl Into<String>, commits: u32) -> Self {
        Self {
            name: name.into(),
            commits,
        }
    }
}

/// Per-file historical signals supplied by a `SignalProvider`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSignal {
    pub id: String,
    pub name: String,
    pub path: String,
    pub complexity: f64,
    pub historical_bugs: u32,
    #[serde(default)]
    pub change_history: Vec<ChangeEvent>,
    pub authors: Vec<AuthorCommits>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ages_timestamps_in_whole_days() {
        let now = 1_700_000_000;
        assert_eq!(ChangeEvent::from_timestamp(now - 86400 * 3 - 10, now).days_ago, 3);
        assert_eq!(ChangeEvent::from_timestamp(now + 500, now).days_ago, 0);
    }

    #[test]
    fn decodes_camel_case_wire_names() {
        let raw = r#"{
            "id": "1",
            "name": "auth.ts",
            "path": "src/auth/auth.ts",
            "complexity": 42.5,
            "historicalBugs": 3,
            "changeHistory": [{ "daysAgo": 2 }, { "daysAgo": 45 }],
            "authors": [{ "name": "alice", "commits": 12 }]
        }"#;

        let signal: FileSignal = serde_json::from_str(raw).unwrap();
        assert_eq!(signal.historical_bugs, 3);
        assert_eq!(signal.change_history, vec![ChangeEvent::new(2), ChangeEvent::new(45)]);
        assert_eq!(signal.authors[0], AuthorCommits::new("alice", 12));
    }

    #[test]
    fn missing_change_history_defaults_to_empty() {
        let raw = r#"{
            "id": "2", "name": "a.rs", "path": "a.rs", "complexity": 1,
            "historicalBugs": 0, "authors": [{ "name": "bob", "commits": 1 }]
        }"#;

        let signal: FileSignal = serde_json::from_str(raw).unwrap();
        assert!(signal.change_history.is_empty());
    }
}
