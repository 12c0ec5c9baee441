//! Suggestions while typing.
//!
//! There is no time-based debounce: every change that leaves at least
//! [`MIN_QUERY_CHARS`](crate::state::MIN_QUERY_CHARS) characters sends one
//! lookup. Responses that arrive after a newer change to the same field are
//! dropped.

use serde::Serialize;
use wayfind_core::Suggestion;

use crate::error::SessionError;
use crate::session::Session;
use crate::state::{Field, QueryStart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome {
    Unchanged,
    /// Too short; no lookup was sent.
    Suppressed,
    Applied {
        count: usize,
    },
    /// The lookup errored; the field shows no suggestions.
    Failed,
    /// A newer change to the field won; this result was dropped.
    Stale,
}

impl Session {
    /// Handles one edit of a field's text.
    pub async fn update_query(&self, field: Field, text: &str) -> QueryOutcome {
        let ticket = match self.state.lock().await.set_query(field, text) {
            QueryStart::Unchanged => return QueryOutcome::Unchanged,
            QueryStart::Suppressed => return QueryOutcome::Suppressed,
            QueryStart::Issued(ticket) => ticket,
        };

        let result = self.geocoder.geocode(ticket.text()).await;
        let outcome = match &result {
            Ok(suggestions) => QueryOutcome::Applied {
                count: suggestions.len(),
            },
            Err(e) => {
                tracing::warn!(%field, query = ticket.text(), error = %e, "suggestion lookup failed");
                QueryOutcome::Failed
            }
        };

        let applied = self
            .state
            .lock()
            .await
            .apply_suggestions(&ticket, result.map_err(|e| e.to_string()));

        if applied {
            outcome
        } else {
            tracing::debug!(%field, query = ticket.text(), "dropping stale suggestions");
            QueryOutcome::Stale
        }
    }

    /// Picks the `index`-th suggestion currently listed for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSuchSuggestion`] if the list has no such entry.
    pub async fn select_suggestion(
        &self,
        field: Field,
        index: usize,
    ) -> Result<Suggestion, SessionError> {
        let mut state = self.state.lock().await;
        let suggestions = state.field(field).suggestions();
        let suggestion = suggestions
            .get(index)
            .cloned()
            .ok_or(SessionError::NoSuchSuggestion {
                field,
                index,
                available: suggestions.len(),
            })?;

        state.select(field, suggestion.clone());
        tracing::debug!(%field, label = %suggestion.label, "suggestion selected");
        Ok(suggestion)
    }
}
