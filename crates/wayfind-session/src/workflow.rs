//! Route acquisition on form submission.
//!
//! Resolve origin, resolve destination, then ask the routing service for
//! the path between them. Each resolved endpoint moves its marker right
//! away, so the markers update even when routing later fails. A failure at
//! any step raises exactly one notice and stops the submission.

use serde::Serialize;
use wayfind_core::Coordinate;
use wayfind_geocoder::GeocodeError;

use crate::notice::Notice;
use crate::session::Session;
use crate::state::{Field, Resolution, SubmitTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Routed { points: usize },
    OriginUnresolved,
    DestinationUnresolved,
    /// Both endpoints resolved; the routing call failed and the previous
    /// route was kept.
    RouteUnavailable,
    /// A newer submission started, or the form was edited, before this one
    /// finished. Nothing it produced after that point was applied.
    Superseded,
}

impl SubmitOutcome {
    fn unresolved(field: Field) -> Self {
        match field {
            Field::Origin => SubmitOutcome::OriginUnresolved,
            Field::Destination => SubmitOutcome::DestinationUnresolved,
        }
    }
}

impl Session {
    /// Runs one submission against the current form contents.
    pub async fn submit(&self) -> SubmitOutcome {
        let ticket = self.state.lock().await.begin_submission();

        let origin = match self.resolve_endpoint(&ticket, Field::Origin).await {
            Ok(coordinate) => coordinate,
            Err(outcome) => return outcome,
        };
        let destination = match self.resolve_endpoint(&ticket, Field::Destination).await {
            Ok(coordinate) => coordinate,
            Err(outcome) => return outcome,
        };

        match self.router.fetch_route(origin, destination).await {
            Ok(route) => {
                let points = route.len();
                if self.state.lock().await.apply_route(&ticket, route) {
                    tracing::info!(%origin, %destination, points, "route updated");
                    SubmitOutcome::Routed { points }
                } else {
                    SubmitOutcome::Superseded
                }
            }
            Err(e) => {
                tracing::error!(%origin, %destination, error = %e, "route request failed");
                self.raise(&ticket, Notice::route_unavailable(&e), SubmitOutcome::RouteUnavailable)
                    .await
            }
        }
    }

    async fn resolve_endpoint(
        &self,
        ticket: &SubmitTicket,
        field: Field,
    ) -> Result<Coordinate, SubmitOutcome> {
        let coordinate = match ticket.resolution(field) {
            Resolution::Selected(suggestion) => {
                tracing::debug!(%field, label = %suggestion.label, "using selected suggestion");
                suggestion.coordinate
            }
            Resolution::Lookup(text) => match self.geocoder.geocode(text).await {
                Ok(candidates) => match candidates.into_iter().next() {
                    Some(best) => best.coordinate,
                    None => {
                        tracing::info!(%field, query = %text, "no geocoder match");
                        return Err(self
                            .raise(ticket, Notice::not_found(field), SubmitOutcome::unresolved(field))
                            .await);
                    }
                },
                Err(GeocodeError::EmptyQuery) => {
                    return Err(self
                        .raise(ticket, Notice::not_found(field), SubmitOutcome::unresolved(field))
                        .await);
                }
                Err(e) => {
                    tracing::warn!(%field, query = %text, error = %e, "geocoding failed on submit");
                    return Err(self
                        .raise(
                            ticket,
                            Notice::lookup_failed(field, &e),
                            SubmitOutcome::unresolved(field),
                        )
                        .await);
                }
            },
        };

        if self.state.lock().await.resolve(ticket, field, coordinate) {
            Ok(coordinate)
        } else {
            Err(SubmitOutcome::Superseded)
        }
    }

    /// Records `notice` and returns `outcome`, or `Superseded` if the
    /// submission went stale.
    async fn raise(
        &self,
        ticket: &SubmitTicket,
        notice: Notice,
        outcome: SubmitOutcome,
    ) -> SubmitOutcome {
        if self.state.lock().await.raise(ticket, notice) {
            outcome
        } else {
            SubmitOutcome::Superseded
        }
    }
}
