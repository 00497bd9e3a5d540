//! DTOs for link analytics.

use serde::{Deserialize, Serialize};

use crate::application::services::LinkAnalytics;
use crate::domain::entities::Visit;

/// Query string for `GET /analytics?id=...`.
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub id: Option<String>,
}

/// Click total plus the full link record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub success: bool,
    pub total_clicks: usize,
    pub entry: LinkEntry,
}

/// A link as exposed to clients. Timestamps are epoch milliseconds.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    pub short_url: String,
    pub redirect_url: String,
    pub created_at: i64,
    pub visit_history: Vec<VisitEntry>,
}

#[derive(Debug, Serialize)]
pub struct VisitEntry {
    pub timestamp: i64,
}

impl From<&Visit> for VisitEntry {
    fn from(visit: &Visit) -> Self {
        Self {
            timestamp: visit.timestamp_millis(),
        }
    }
}

impl From<LinkAnalytics> for AnalyticsResponse {
    fn from(analytics: LinkAnalytics) -> Self {
        let link = analytics.link;

        Self {
            success: true,
            total_clicks: analytics.total_clicks,
            entry: LinkEntry {
                visit_history: link.visits.iter().map(VisitEntry::from).collect(),
                created_at: link.created_at.timestamp_millis(),
                short_url: link.id,
                redirect_url: link.target,
            },
        }
    }
}
