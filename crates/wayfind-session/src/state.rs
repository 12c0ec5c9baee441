//! The single mutable value behind a search session.
//!
//! Every change goes through a named transition on [`SearchState`]. Work that
//! suspends on the network is split in two: a transition that hands out a
//! ticket, and a second transition that applies the result only if the
//! ticket is still the latest one issued. Late answers to superseded
//! requests are dropped instead of overwriting newer state.

use serde::Serialize;
use wayfind_core::{Coordinate, Route, Suggestion, DEFAULT_DESTINATION, DEFAULT_ORIGIN};

use crate::error::SessionError;
use crate::notice::Notice;
use crate::shell::Shell;

/// Shortest query, in characters, that is sent to the geocoder while typing.
pub const MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Origin,
    Destination,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Origin, Field::Destination];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Origin => "origin",
            Field::Destination => "destination",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Field::Origin => "Origin",
            Field::Destination => "Destination",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "origin" | "from" => Ok(Field::Origin),
            "destination" | "to" => Ok(Field::Destination),
            _ => Err(SessionError::UnknownField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SuggestionPhase {
    Idle,
    Querying,
    HasSuggestions,
    /// The last lookup errored. Suggestions are empty, but unlike `Idle`
    /// this is not "nothing matched".
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldState {
    query: String,
    suggestions: Vec<Suggestion>,
    phase: SuggestionPhase,
    coordinate: Coordinate,
    /// Suggestion the user picked; dropped as soon as the text is edited.
    selected: Option<Suggestion>,
    #[serde(skip)]
    latest_request: u64,
}

impl FieldState {
    fn new(coordinate: Coordinate) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            phase: SuggestionPhase::Idle,
            coordinate,
            selected: None,
            latest_request: 0,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    #[must_use]
    pub fn phase(&self) -> &SuggestionPhase {
        &self.phase
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected.as_ref()
    }
}

/// Proof that a geocode request was issued for a given text.
#[derive(Debug, Clone)]
pub struct QueryTicket {
    field: Field,
    token: u64,
    text: String,
}

impl QueryTicket {
    #[must_use]
    pub fn field(&self) -> Field {
        self.field
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Result of recording a text change.
#[derive(Debug, Clone)]
pub enum QueryStart {
    /// Same text as before; nothing to do.
    Unchanged,
    /// Too short to look up. Suggestions were cleared.
    Suppressed,
    Issued(QueryTicket),
}

/// How a submission will obtain one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A picked suggestion whose label still matches the text.
    Selected(Suggestion),
    /// Geocode this text and take the first candidate.
    Lookup(String),
}

/// A submission in flight, plus the form revision it was started from.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    token: u64,
    origin: Resolution,
    destination: Resolution,
    /// Each field's `latest_request` when the submission began.
    origin_revision: u64,
    destination_revision: u64,
}

impl SubmitTicket {
    #[must_use]
    pub fn resolution(&self, field: Field) -> &Resolution {
        match field {
            Field::Origin => &self.origin,
            Field::Destination => &self.destination,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchState {
    origin: FieldState,
    destination: FieldState,
    route: Route,
    notices: Vec<Notice>,
    shell: Shell,
    #[serde(skip)]
    latest_submission: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: FieldState::new(DEFAULT_ORIGIN),
            destination: FieldState::new(DEFAULT_DESTINATION),
            route: Route::empty(),
            notices: Vec::new(),
            shell: Shell::default(),
            latest_submission: 0,
        }
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Origin => &self.origin,
            Field::Destination => &self.destination,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Origin => &mut self.origin,
            Field::Destination => &mut self.destination,
        }
    }

    #[must_use]
    pub fn coordinate(&self, field: Field) -> Coordinate {
        self.field(field).coordinate
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Opens or closes the side drawer; returns the new open state.
    pub fn toggle_drawer(&mut self) -> bool {
        self.shell.toggle()
    }

    /// Removes and returns every pending notice.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Records new text for a field.
    ///
    /// Any change invalidates requests still in flight for the field and
    /// forgets a previously picked suggestion.
    pub fn set_query(&mut self, field: Field, text: &str) -> QueryStart {
        let state = self.field_mut(field);
        if state.query == text {
            return QueryStart::Unchanged;
        }

        state.query = text.to_string();
        state.selected = None;
        state.latest_request += 1;

        // whitespace alone never reaches the geocoder
        if text.trim().chars().count() < MIN_QUERY_CHARS {
            state.suggestions.clear();
            state.phase = SuggestionPhase::Idle;
            return QueryStart::Suppressed;
        }

        state.phase = SuggestionPhase::Querying;
        QueryStart::Issued(QueryTicket {
            field,
            token: state.latest_request,
            text: text.to_string(),
        })
    }

    /// Applies a lookup result if `ticket` is still the field's latest
    /// request. Returns `false` when the result was stale and dropped.
    ///
    /// The suggestion list is replaced wholesale, never merged.
    pub fn apply_suggestions(
        &mut self,
        ticket: &QueryTicket,
        result: Result<Vec<Suggestion>, String>,
    ) -> bool {
        let state = self.field_mut(ticket.field);
        if state.latest_request != ticket.token {
            return false;
        }

        match result {
            Ok(suggestions) if suggestions.is_empty() => {
                state.suggestions.clear();
                state.phase = SuggestionPhase::Idle;
            }
            Ok(suggestions) => {
                state.suggestions = suggestions;
                state.phase = SuggestionPhase::HasSuggestions;
            }
            Err(reason) => {
                state.suggestions.clear();
                state.phase = SuggestionPhase::Failed { reason };
            }
        }
        true
    }

    /// Picks a suggestion: text becomes its label, the marker moves to it,
    /// and the list closes. Applying the same suggestion twice leaves the
    /// state as after the first time.
    pub fn select(&mut self, field: Field, suggestion: Suggestion) {
        let state = self.field_mut(field);
        state.query.clone_from(&suggestion.label);
        state.coordinate = suggestion.coordinate;
        state.suggestions.clear();
        state.phase = SuggestionPhase::Idle;
        state.selected = Some(suggestion);
        // responses for text typed before the pick must not reopen the list
        state.latest_request += 1;
    }

    /// Starts a submission, superseding any submission still in flight.
    pub fn begin_submission(&mut self) -> SubmitTicket {
        self.latest_submission += 1;
        SubmitTicket {
            token: self.latest_submission,
            origin: Self::resolution_for(&self.origin),
            destination: Self::resolution_for(&self.destination),
            origin_revision: self.origin.latest_request,
            destination_revision: self.destination.latest_request,
        }
    }

    fn resolution_for(state: &FieldState) -> Resolution {
        match &state.selected {
            Some(selected) if selected.label == state.query => {
                Resolution::Selected(selected.clone())
            }
            _ => Resolution::Lookup(state.query.clone()),
        }
    }

    /// A submission stays current until a newer one starts or either field
    /// is edited or re-picked. Results of a stale submission are dropped.
    #[must_use]
    pub fn is_current(&self, ticket: &SubmitTicket) -> bool {
        self.latest_submission == ticket.token
            && self.origin.latest_request == ticket.origin_revision
            && self.destination.latest_request == ticket.destination_revision
    }

    /// Moves a field's marker to a resolved endpoint.
    pub fn resolve(&mut self, ticket: &SubmitTicket, field: Field, coordinate: Coordinate) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.field_mut(field).coordinate = coordinate;
        true
    }

    pub fn apply_route(&mut self, ticket: &SubmitTicket, route: Route) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.route = route;
        true
    }

    pub fn raise(&mut self, ticket: &SubmitTicket, notice: Notice) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.notices.push(notice);
        true
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
