// File: stalker-core/src/registry.rs

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use tracing::{debug, info};

/// A comma-prefixed group: optional separator, whitespace, then the id.
static TARGET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(,?)\s*([0-9]+)").expect("target pattern is valid"));

/// Result of toggling a user in the target list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetEdit {
    Added,
    Removed,
}

/// The set of user ids being watched.
///
/// Cloning the registry hands out another handle to the same list, which is
/// how both watchers and the plugin share it.
#[derive(Clone, Default)]
pub struct TargetRegistry {
    targets: Arc<RwLock<Vec<String>>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the ids from a raw target string, in order and with
    /// duplicates kept. Anything that is not a run of digits is ignored.
    pub fn parse(raw: &str) -> Vec<String> {
        TARGET_PATTERN
            .captures_iter(raw)
            .filter_map(|caps| caps.get(2))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Serialize a target list into its persisted form.
    pub fn serialize(targets: &[String]) -> String {
        targets.join(",")
    }

    /// Toggle `user_id` in the raw target string: remove its first
    /// occurrence if present, append it otherwise. Returns the new raw string
    /// to persist.
    pub fn toggled(raw: &str, user_id: &str) -> (String, TargetEdit) {
        let mut targets = Self::parse(raw);
        let edit = match targets.iter().position(|id| id == user_id) {
            Some(index) => {
                targets.remove(index);
                TargetEdit::Removed
            }
            None => {
                targets.push(user_id.to_string());
                TargetEdit::Added
            }
        };
        (Self::serialize(&targets), edit)
    }

    /// Replace the whole target list with the ids parsed from `raw`.
    pub fn set_targets(&self, raw: &str) -> Vec<String> {
        let parsed = Self::parse(raw);
        {
            let mut targets = self.targets.write();
            *targets = parsed.clone();
        }
        info!("Now watching {} target(s)", parsed.len());
        debug!("Targets: {:?}", parsed);
        parsed
    }

    pub fn targets(&self) -> Vec<String> {
        self.targets.read().clone()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.targets.read().iter().any(|id| id == user_id)
    }

    pub fn len(&self) -> usize {
        self.targets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerates_stray_separators() {
        assert_eq!(TargetRegistry::parse("123, 456,789"), vec!["123", "456", "789"]);
        assert_eq!(TargetRegistry::parse(" ,,12 ,  34,, "), vec!["12", "34"]);
        assert_eq!(TargetRegistry::parse(",5,"), vec!["5"]);
        assert!(TargetRegistry::parse("").is_empty());
        assert!(TargetRegistry::parse("abc, def").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        assert_eq!(TargetRegistry::parse("9,1,9"), vec!["9", "1", "9"]);
    }

    #[test]
    fn test_parse_splits_on_junk_between_digits() {
        assert_eq!(TargetRegistry::parse("12ab34"), vec!["12", "34"]);
    }

    #[test]
    fn test_toggle_off_then_reparse() {
        let (raw, edit) = TargetRegistry::toggled("123, 456,789", "456");
        assert_eq!(edit, TargetEdit::Removed);
        assert_eq!(TargetRegistry::parse(&raw), vec!["123", "789"]);
    }

    #[test]
    fn test_toggle_removes_only_first_occurrence() {
        let (raw, _) = TargetRegistry::toggled("7,8,7", "7");
        assert_eq!(TargetRegistry::parse(&raw), vec!["8", "7"]);
    }

    #[test]
    fn test_toggle_on_appends_without_leading_separator() {
        let (raw, edit) = TargetRegistry::toggled("", "42");
        assert_eq!(edit, TargetEdit::Added);
        assert_eq!(raw, "42");

        let (raw, _) = TargetRegistry::toggled(&raw, "43");
        assert_eq!(raw, "42,43");
    }

    #[test]
    fn test_handles_share_one_list() {
        let registry = TargetRegistry::new();
        let other = registry.clone();

        registry.set_targets("1,2");
        assert!(other.contains("2"));
        assert!(!other.contains("3"));
        assert_eq!(other.len(), 2);

        other.set_targets("");
        assert!(registry.is_empty());
    }
}
