//! Domain types and business rules shared by the DB and API layers.
//!
//! Everything here is pure: no I/O, no database handles. The persistence
//! layer (`cinelog-db`) and HTTP layer (`cinelog-api`) call into these
//! modules for validation and the small amount of in-process computation
//! the system performs (ranking rounding, tag normalization, edit-window
//! checks, profanity matching).

pub mod comments;
pub mod community_top;
pub mod error;
pub mod imdb;
pub mod pagination;
pub mod profanity;
pub mod ranking;
pub mod rating;
pub mod roles;
pub mod types;
pub mod watchlist;
