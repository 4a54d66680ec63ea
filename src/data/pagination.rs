//! Caller-held cursor state for paging through a listing
//!
//! The client is stateless across calls. Whoever drives it keeps one
//! `Pagination` per listing and feeds each returned page back in.

use super::{AreaList, ClientError, Direction};

/// Next/previous cursors for one listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Human-readable listing name used in boundary errors
    listing: &'static str,
    next: Option<String>,
    previous: Option<String>,
    /// Whether any page has been loaded yet
    started: bool,
}

impl Pagination {
    /// Creates cursor state positioned before the first page
    pub fn new(listing: &'static str) -> Self {
        Self {
            listing,
            next: None,
            previous: None,
            started: false,
        }
    }

    /// Cursor for the following page
    ///
    /// # Returns
    /// * `Ok(None)` before the first page, meaning "use the default endpoint"
    /// * `Ok(Some(url))` when a following page exists
    /// * `Err(ClientError::PaginationBoundary)` after the last page
    pub fn next_cursor(&self) -> Result<Option<&str>, ClientError> {
        match (&self.next, self.started) {
            (Some(next), _) => Ok(Some(next.as_str())),
            (None, false) => Ok(None),
            (None, true) => Err(self.boundary(Direction::Next)),
        }
    }

    /// Cursor for the preceding page, or a boundary error on the first page
    pub fn previous_cursor(&self) -> Result<&str, ClientError> {
        self.previous
            .as_deref()
            .ok_or_else(|| self.boundary(Direction::Previous))
    }

    /// Records the cursors of the page that was just loaded
    pub fn advance(&mut self, page: &AreaList) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.started = true;
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    fn boundary(&self, direction: Direction) -> ClientError {
        ClientError::PaginationBoundary {
            listing: self.listing,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(next: Option<&str>, previous: Option<&str>) -> AreaList {
        AreaList {
            next: next.map(String::from),
            previous: previous.map(String::from),
            names: vec![],
        }
    }

    #[test]
    fn test_fresh_pagination_uses_default_endpoint() {
        let pagination = Pagination::new("location areas");

        assert_eq!(pagination.next_cursor().unwrap(), None);
        assert!(!pagination.is_started());
    }

    #[test]
    fn test_previous_on_first_page_is_boundary_error() {
        let mut pagination = Pagination::new("location areas");
        assert!(matches!(
            pagination.previous_cursor(),
            Err(ClientError::PaginationBoundary {
                direction: Direction::Previous,
                ..
            })
        ));

        pagination.advance(&page(Some("U2"), None));
        assert!(pagination.previous_cursor().is_err());
    }

    #[test]
    fn test_advance_tracks_both_cursors() {
        let mut pagination = Pagination::new("location areas");

        pagination.advance(&page(Some("U3"), Some("U1")));

        assert_eq!(pagination.next_cursor().unwrap(), Some("U3"));
        assert_eq!(pagination.previous_cursor().unwrap(), "U1");
        assert_eq!(pagination.next(), Some("U3"));
        assert_eq!(pagination.previous(), Some("U1"));
    }

    #[test]
    fn test_next_after_last_page_is_boundary_error() {
        let mut pagination = Pagination::new("pokemon");

        pagination.advance(&page(None, Some("U1")));

        let err = pagination.next_cursor().unwrap_err();
        assert!(matches!(
            err,
            ClientError::PaginationBoundary {
                listing: "pokemon",
                direction: Direction::Next
            }
        ));
    }
}
