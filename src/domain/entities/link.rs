//! Link entity representing a shortened URL and its visit history.

use chrono::{DateTime, Utc};

use super::visit::Visit;

/// A shortened URL.
///
/// `id` and `target` never change after creation. `visits` only grows,
/// in chronological (append) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
    pub visits: Vec<Visit>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: String, target: String, created_at: DateTime<Utc>, visits: Vec<Visit>) -> Self {
        Self {
            id,
            target,
            created_at,
            visits,
        }
    }

    /// Number of recorded visits.
    pub fn total_clicks(&self) -> usize {
        self.visits.len()
    }

    /// Timestamp of the most recent visit, if any.
    pub fn last_visit(&self) -> Option<&Visit> {
        self.visits.last()
    }
}

/// Input data for creating a new link.
///
/// The store stamps `created_at` and starts with an empty visit history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub id: String,
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc1234".to_string(),
            "https://example.com/a".to_string(),
            now,
            vec![],
        );

        assert_eq!(link.id, "abc1234");
        assert_eq!(link.target, "https://example.com/a");
        assert_eq!(link.created_at, now);
        assert_eq!(link.total_clicks(), 0);
        assert!(link.last_visit().is_none());
    }

    #[test]
    fn test_link_counts_visits() {
        let visits = vec![
            Visit::from_millis(1_000).unwrap(),
            Visit::from_millis(2_000).unwrap(),
        ];
        let link = Link::new(
            "abc1234".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            visits,
        );

        assert_eq!(link.total_clicks(), 2);
        assert_eq!(link.last_visit().unwrap().timestamp_millis(), 2_000);
    }
}
