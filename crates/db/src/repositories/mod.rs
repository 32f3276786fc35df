//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. All uniqueness-sensitive
//! writes go through single `INSERT ... ON CONFLICT` statements so the
//! database enforces the invariants atomically.

pub mod comment_repo;
pub mod community_top_repo;
pub mod favorite_repo;
pub mod list_entry_repo;
pub mod movie_repo;
pub mod user_repo;
pub mod vote_repo;

pub use comment_repo::CommentRepo;
pub use community_top_repo::CommunityTopRepo;
pub use favorite_repo::FavoriteRepo;
pub use list_entry_repo::ListEntryRepo;
pub use movie_repo::MovieRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;

/// Escape LIKE/ILIKE metacharacters in a user-supplied search term and
/// wrap it in `%` wildcards.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("noir"), "%noir%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern(r"back\slash"), r"%back\\slash%");
    }
}
