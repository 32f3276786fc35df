//! Page-based pagination clamping.
//!
//! List endpoints accept `?page=&pageSize=` and clamp the values here so
//! every repository sees a sane window.

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp an optional page number to `>= 1` (default 1).
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp an optional page size into `1..=MAX_PAGE_SIZE` (default 20).
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    match page_size {
        Some(n) => n.clamp(1, MAX_PAGE_SIZE),
        None => DEFAULT_PAGE_SIZE,
    }
}

/// Offset of the first row for a (page, page_size) window.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_and_floor() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-2)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn test_page_size_window() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(500)), MAX_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(33)), 33);
    }

    #[test]
    fn test_offset() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 20), 40);
    }
}
