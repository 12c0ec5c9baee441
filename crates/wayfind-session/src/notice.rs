//! User-facing, non-blocking notices raised by a submission.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The geocoder answered, but with nothing.
    OriginNotFound,
    /// The geocoder could not be reached or answered garbage.
    OriginLookupFailed,
    DestinationNotFound,
    DestinationLookupFailed,
    RouteUnavailable,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    fn new(kind: NoticeKind, message: String) -> Self {
        Self {
            kind,
            message,
            raised_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn not_found(field: Field) -> Self {
        let kind = match field {
            Field::Origin => NoticeKind::OriginNotFound,
            Field::Destination => NoticeKind::DestinationNotFound,
        };
        Self::new(kind, format!("{} location not found", field.title()))
    }

    pub fn lookup_failed(field: Field, reason: impl std::fmt::Display) -> Self {
        let kind = match field {
            Field::Origin => NoticeKind::OriginLookupFailed,
            Field::Destination => NoticeKind::DestinationLookupFailed,
        };
        Self::new(
            kind,
            format!("Could not look up {} location: {reason}", field.as_str()),
        )
    }

    pub fn route_unavailable(reason: impl std::fmt::Display) -> Self {
        Self::new(
            NoticeKind::RouteUnavailable,
            format!("Could not fetch a route: {reason}"),
        )
    }
}
