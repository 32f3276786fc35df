//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod comments;
pub mod community_top;
pub mod favorites;
pub mod movies;
pub mod my_list;
pub mod users;
pub mod votes;
