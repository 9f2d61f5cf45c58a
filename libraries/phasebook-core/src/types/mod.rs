//! Domain types

mod ids;
mod user;

pub use ids::UserId;
pub use user::User;
