//! Presentation projections of domain types.

mod card;

pub use card::{NO_DESCRIPTION, RepoCard, UNKNOWN_LANGUAGE, badge_class, format_created};
