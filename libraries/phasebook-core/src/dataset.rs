//! The user directory searched by the server
//!
//! A [`Dataset`] is built once at startup, either from the seed records
//! compiled into the crate or from a JSON file, and is read-only afterwards.

use crate::error::{PhasebookError, Result};
use crate::search::{search_users, SearchParams};
use crate::types::User;
use std::collections::HashSet;
use std::path::Path;

/// Ordered, read-only collection of users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    users: Vec<User>,
}

impl Dataset {
    /// Wrap an ordered list of users
    ///
    /// Ids are expected to be unique but this is not enforced; duplicates
    /// are only reported in the log.
    pub fn new(users: Vec<User>) -> Self {
        warn_on_duplicate_ids(&users);
        Self { users }
    }

    /// Seed directory shipped with the server
    pub fn builtin() -> Self {
        Self::new(vec![
            User::new("1", "John Doe", 30, "Developer"),
            User::new("2", "Jane Doe", 25, "Designer"),
            User::new("3", "Bob Smith", 35, "Manager"),
            User::new("4", "Alice Johnson", 28, "Developer"),
            User::new("5", "Michael Brown", 40, "Architect"),
            User::new("6", "Emily Davis", 22, "Intern"),
            User::new("7", "David Wilson", 33, "Manager"),
            User::new("8", "Sarah Miller", 29, "Designer"),
            User::new("9", "James Taylor", 31, "Developer"),
            User::new("10", "Laura Anderson", 27, "Analyst"),
            User::new("11", "Daniel Thomas", 45, "Director"),
            User::new("12", "Olivia Martinez", 26, "Nurse"),
        ])
    }

    /// Parse a JSON array of user objects, keeping array order
    pub fn from_json_str(json: &str) -> Result<Self> {
        let users: Vec<User> = serde_json::from_str(json)?;
        Ok(Self::new(users))
    }

    /// Load a JSON array of user objects from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PhasebookError::invalid_input(format!(
                "Dataset file not found: {}",
                path.display()
            )));
        }

        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            users = dataset.len(),
            "Loaded user dataset"
        );
        Ok(dataset)
    }

    /// All users, in dataset order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// `true` when the dataset holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Run a search over this dataset
    pub fn search(&self, params: &SearchParams) -> Vec<User> {
        search_users(params, &self.users)
    }
}

fn warn_on_duplicate_ids(users: &[User]) {
    let mut seen = HashSet::new();
    for user in users {
        if !seen.insert(&user.id) {
            tracing::warn!(id = %user.id, "Duplicate user id in dataset");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_has_unique_ids() {
        let dataset = Dataset::builtin();
        let ids: HashSet<_> = dataset.users().iter().map(|u| &u.id).collect();
        assert_eq!(ids.len(), dataset.len());
        assert!(!dataset.is_empty());
    }

    #[test]
    fn from_json_keeps_order() {
        let dataset = Dataset::from_json_str(
            r#"[
                {"id": "2", "name": "Bob", "age": 30, "occupation": "Chef"},
                {"id": "1", "name": "Alice", "age": 25, "occupation": "Nurse"}
            ]"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.users()[0].name, "Bob");
        assert_eq!(dataset.users()[1].name, "Alice");
    }

    #[test]
    fn from_json_rejects_malformed_records() {
        let result = Dataset::from_json_str(r#"[{"id": "1", "name": "Alice"}]"#);
        assert!(matches!(result, Err(PhasebookError::Serialization(_))));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "name": "Alice", "age": 25, "occupation": "Nurse"}}]"#
        )
        .unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.users(), &[User::new("1", "Alice", 25, "Nurse")]);
    }

    #[test]
    fn load_missing_file_is_invalid_input() {
        let result = Dataset::load("/definitely/not/here/users.json");
        assert!(matches!(result, Err(PhasebookError::InvalidInput(_))));
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let dataset = Dataset::new(vec![
            User::new("1", "Alice", 25, "Nurse"),
            User::new("1", "Alicia", 52, "Chef"),
        ]);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn search_delegates_to_search_users() {
        let dataset = Dataset::builtin();
        let result = dataset.search(&SearchParams::new().with_id("3"));
        assert_eq!(result, vec![User::new("3", "Bob Smith", 35, "Manager")]);
    }
}
