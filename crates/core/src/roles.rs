//! Role name constants.
//!
//! The first registered user gets `admin`; everyone else gets `user`.

/// Full access: may delete any movie, vote, or comment and curate the
/// community top list.
pub const ROLE_ADMIN: &str = "admin";

/// Default role for every account after the first.
pub const ROLE_USER: &str = "user";
