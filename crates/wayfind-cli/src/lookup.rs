//! One-shot commands: `suggest` and `route`.

use serde::Serialize;
use wayfind_session::{
    Field, MapView, Notice, QueryOutcome, SearchState, Session, SubmitOutcome, SuggestionPhase,
};

use crate::print_json;

#[derive(Debug, Serialize)]
struct SuggestReport<'a> {
    field: Field,
    #[serde(flatten)]
    outcome: QueryOutcome,
    phase: &'a SuggestionPhase,
    suggestions: &'a [wayfind_core::Suggestion],
}

#[derive(Debug, Serialize)]
pub(crate) struct RouteReport {
    #[serde(flatten)]
    pub(crate) outcome: SubmitOutcome,
    pub(crate) state: SearchState,
    pub(crate) map: MapView,
    pub(crate) notices: Vec<Notice>,
}

/// Types `text` into `field` and prints what the suggestion list shows.
///
/// # Errors
///
/// Returns an error only if the report cannot be written.
pub(crate) async fn run_suggest(session: &Session, field: Field, text: &str) -> anyhow::Result<()> {
    let outcome = session.update_query(field, text).await;
    let state = session.snapshot().await;
    let field_state = state.field(field);

    print_json(&SuggestReport {
        field,
        outcome,
        phase: field_state.phase(),
        suggestions: field_state.suggestions(),
    })
}

/// Fills both fields, picks the top suggestion where there is one, and
/// prints the outcome of submitting.
///
/// # Errors
///
/// Returns an error if the top suggestion cannot be picked or the report
/// cannot be written. Lookup and routing failures are part of the report.
pub(crate) async fn run_route(
    session: &Session,
    origin: &str,
    destination: &str,
) -> anyhow::Result<()> {
    let report = route_report(session, origin, destination).await?;
    print_json(&report)
}

pub(crate) async fn route_report(
    session: &Session,
    origin: &str,
    destination: &str,
) -> anyhow::Result<RouteReport> {
    for (field, text) in [(Field::Origin, origin), (Field::Destination, destination)] {
        if let QueryOutcome::Applied { count } = session.update_query(field, text).await {
            if count > 0 {
                session.select_suggestion(field, 0).await?;
            }
        }
    }

    let outcome = session.submit().await;
    if !matches!(outcome, SubmitOutcome::Routed { .. }) {
        tracing::warn!(?outcome, "no route");
    }

    Ok(RouteReport {
        outcome,
        map: session.map_view().await,
        notices: session.take_notices().await,
        state: session.snapshot().await,
    })
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
