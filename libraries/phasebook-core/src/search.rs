//! Multi-field user search
//!
//! Each active filter scans the whole directory on its own and tags every hit
//! with the filter's priority. The hits are then stable-sorted by priority and
//! deduplicated, so a user matched by several filters is reported once, at
//! the position of its strongest match. The result is the union of the
//! filters, not their intersection.
//!
//! When no filter is active the whole directory is returned, ordered by id.

use crate::types::User;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Widest age difference still counted as an age match (inclusive)
pub const AGE_PROXIMITY: u64 = 1;

/// Query parameters accepted by the search
///
/// A `None` or empty value means the field is not filtered on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Exact id
    #[serde(default)]
    pub id: Option<String>,

    /// Case-insensitive name fragment
    #[serde(default)]
    pub name: Option<String>,

    /// Age, as sent by the client; must parse as an integer to be used
    #[serde(default)]
    pub age: Option<String>,

    /// Case-insensitive occupation fragment
    #[serde(default)]
    pub occupation: Option<String>,
}

impl SearchParams {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on an exact id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Filter on a name fragment
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter on an age
    #[must_use]
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Filter on an occupation fragment
    #[must_use]
    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    /// Build a query from raw key/value pairs, e.g. a decoded query string
    ///
    /// Unknown keys are ignored. When a key repeats, its first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "id" => &mut params.id,
                "name" => &mut params.name,
                "age" => &mut params.age,
                "occupation" => &mut params.occupation,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// `true` when no field carries a non-empty value
    ///
    /// An age that does not parse still counts as provided.
    pub fn is_empty(&self) -> bool {
        [&self.id, &self.name, &self.age, &self.occupation]
            .into_iter()
            .all(|value| active(value).is_none())
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Rank of the filter that produced a match; lower sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchPriority {
    /// Exact id match
    Id = 1,
    /// Name contains the fragment
    Name = 2,
    /// Age within the proximity window
    Age = 3,
    /// Occupation contains the fragment
    Occupation = 4,
}

impl MatchPriority {
    /// Numeric rank, 1 being the strongest
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// A user hit by one filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Matched record
    pub user: &'a User,
    /// Filter that matched it
    pub priority: MatchPriority,
}

/// Run every active filter over `users` and concatenate the hits
///
/// Passes run in priority order (id, name, age, occupation) and each pass
/// keeps dataset order, so a user may appear once per filter it satisfies.
pub fn collect_matches<'a>(params: &SearchParams, users: &'a [User]) -> Vec<Match<'a>> {
    let mut matches = Vec::new();
    let mut push_where = |priority: MatchPriority, pred: &dyn Fn(&User) -> bool| {
        matches.extend(
            users
                .iter()
                .filter(|&user| pred(user))
                .map(|user| Match { user, priority }),
        );
    };

    if let Some(id) = active(&params.id) {
        push_where(MatchPriority::Id, &|user: &User| user.id.as_str() == id);
    }

    if let Some(name) = active(&params.name) {
        let needle = name.to_lowercase();
        push_where(MatchPriority::Name, &|user: &User| {
            user.name.to_lowercase().contains(&needle)
        });
    }

    if let Some(raw) = active(&params.age) {
        match parse_age(raw) {
            Some(age) => push_where(MatchPriority::Age, &|user: &User| {
                age.abs_diff(user.age) <= AGE_PROXIMITY
            }),
            None => tracing::debug!(age = raw, "Ignoring non-numeric age filter"),
        }
    }

    if let Some(occupation) = active(&params.occupation) {
        let needle = occupation.to_lowercase();
        push_where(MatchPriority::Occupation, &|user: &User| {
            user.occupation.to_lowercase().contains(&needle)
        });
    }

    matches
}

/// Order matches by priority and drop repeats of the same record
///
/// The sort is stable, so equal priorities keep collection order, and each
/// record survives only at its first (strongest) position.
pub fn rank_matches(mut matches: Vec<Match<'_>>) -> Vec<User> {
    matches.sort_by_key(|m| m.priority);

    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.user))
        .map(|m| m.user.clone())
        .collect()
}

/// Search `users` with `params`
///
/// Never fails: an age that does not parse as an integer is skipped and the
/// remaining filters still apply. With no active filter, every user is
/// returned sorted by id.
pub fn search_users(params: &SearchParams, users: &[User]) -> Vec<User> {
    if params.is_empty() {
        let mut all = users.to_vec();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        return all;
    }

    let matches = collect_matches(params, users);
    tracing::debug!(hits = matches.len(), "Collected filter matches");
    rank_matches(matches)
}

/// Parse an age the way a lenient integer literal reads: surrounding
/// whitespace, an optional sign, and single `_` separators between digits
fn parse_age(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let separators_ok = bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        });
    if !separators_ok {
        return None;
    }

    trimmed.replace('_', "").parse().ok()
}
