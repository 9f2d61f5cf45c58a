//! Phasebook Core
//!
//! In-memory user directory and the ranked multi-field search run over it.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`
//! - **Search**: `SearchParams` and `search_users`, an OR-of-filters search
//!   ranked by which filter matched
//! - **Dataset**: the read-only directory, seeded or loaded from JSON
//! - **Error Handling**: `PhasebookError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use phasebook_core::{Dataset, SearchParams};
//!
//! let dataset = Dataset::builtin();
//! let params = SearchParams::new().with_name("doe").with_age("31");
//!
//! for user in dataset.search(&params) {
//!     println!("{} {}", user.id, user.name);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dataset;
pub mod error;
pub mod search;
pub mod types;

pub use dataset::Dataset;
pub use error::{PhasebookError, Result};
pub use search::{collect_matches, rank_matches, search_users, Match, MatchPriority, SearchParams};
pub use types::{User, UserId};
