//! User domain type
use super::UserId;
use serde::{Deserialize, Serialize};

/// Directory entry
///
/// Records are compared and hashed over every field, so two entries are the
/// same user only when all four fields agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Age in years
    pub age: i64,

    /// Job title
    pub occupation: String,
}

impl User {
    /// Create a new user
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: i64,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            age,
            occupation: occupation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_shape() {
        let user = User::new("1", "Alice", 25, "Nurse");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "name": "Alice",
                "age": 25,
                "occupation": "Nurse"
            })
        );
    }

    #[test]
    fn users_differing_in_one_field_are_distinct() {
        let a = User::new("1", "Alice", 25, "Nurse");
        let b = User::new("1", "Alice", 26, "Nurse");
        assert_ne!(a, b);
    }
}
