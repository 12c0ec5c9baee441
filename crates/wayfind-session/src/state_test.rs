use super::*;

fn suggestion(label: &str, lat: f64, lon: f64) -> Suggestion {
    Suggestion::new(label, Coordinate::new(lat, lon))
}

fn issued(start: QueryStart) -> QueryTicket {
    match start {
        QueryStart::Issued(ticket) => ticket,
        other => panic!("expected an issued query, got: {other:?}"),
    }
}

#[test]
fn new_state_has_default_markers_and_no_route() {
    let state = SearchState::new();
    assert_eq!(state.coordinate(Field::Origin), DEFAULT_ORIGIN);
    assert_eq!(state.coordinate(Field::Destination), DEFAULT_DESTINATION);
    assert!(state.route().is_empty());
    assert!(state.notices().is_empty());
}

#[test]
fn short_queries_are_suppressed() {
    let mut state = SearchState::new();
    for text in ["", "K", "Ko"] {
        assert!(
            matches!(state.set_query(Field::Origin, text), QueryStart::Suppressed | QueryStart::Unchanged),
            "{text:?} should not issue a request"
        );
        assert!(state.field(Field::Origin).suggestions().is_empty());
        assert_eq!(state.field(Field::Origin).phase(), &SuggestionPhase::Idle);
    }
}

#[test]
fn short_query_counts_characters_not_bytes() {
    let mut state = SearchState::new();
    // two characters, six bytes
    assert!(matches!(
        state.set_query(Field::Origin, "ಬೆ"),
        QueryStart::Suppressed
    ));
}

#[test]
fn three_characters_issue_a_request() {
    let mut state = SearchState::new();
    let ticket = issued(state.set_query(Field::Destination, "Kor"));
    assert_eq!(ticket.field(), Field::Destination);
    assert_eq!(ticket.text(), "Kor");
    assert_eq!(
        state.field(Field::Destination).phase(),
        &SuggestionPhase::Querying
    );
}

#[test]
fn unchanged_text_issues_nothing() {
    let mut state = SearchState::new();
    issued(state.set_query(Field::Origin, "Kora"));
    assert!(matches!(
        state.set_query(Field::Origin, "Kora"),
        QueryStart::Unchanged
    ));
}

#[test]
fn results_replace_the_list_wholesale() {
    let mut state = SearchState::new();

    let first = issued(state.set_query(Field::Origin, "Kor"));
    assert!(state.apply_suggestions(
        &first,
        Ok(vec![
            suggestion("Koramangala", 12.93, 77.62),
            suggestion("Korattur", 12.95, 77.60),
        ])
    ));

    let second = issued(state.set_query(Field::Origin, "Kora"));
    assert!(state.apply_suggestions(&second, Ok(vec![suggestion("Koramangala", 12.93, 77.62)])));

    let labels: Vec<&str> = state
        .field(Field::Origin)
        .suggestions()
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(labels, ["Koramangala"]);
    assert_eq!(
        state.field(Field::Origin).phase(),
        &SuggestionPhase::HasSuggestions
    );
}

#[test]
fn stale_results_are_dropped() {
    let mut state = SearchState::new();

    let stale = issued(state.set_query(Field::Origin, "Kor"));
    let latest = issued(state.set_query(Field::Origin, "Kora"));

    assert!(state.apply_suggestions(&latest, Ok(vec![suggestion("Koramangala", 12.93, 77.62)])));
    assert!(!state.apply_suggestions(&stale, Ok(vec![suggestion("Kormangala Club", 12.94, 77.61)])));

    assert_eq!(
        state.field(Field::Origin).suggestions()[0].label,
        "Koramangala"
    );
}

#[test]
fn shrinking_below_three_chars_invalidates_in_flight_request() {
    let mut state = SearchState::new();
    let ticket = issued(state.set_query(Field::Origin, "Kor"));
    assert!(matches!(
        state.set_query(Field::Origin, "Ko"),
        QueryStart::Suppressed
    ));

    assert!(!state.apply_suggestions(&ticket, Ok(vec![suggestion("Koramangala", 12.93, 77.62)])));
    assert!(state.field(Field::Origin).suggestions().is_empty());
}

#[test]
fn fields_are_independent() {
    let mut state = SearchState::new();
    let origin = issued(state.set_query(Field::Origin, "Kor"));
    issued(state.set_query(Field::Destination, "Whi"));

    assert!(state.apply_suggestions(&origin, Ok(vec![suggestion("Koramangala", 12.93, 77.62)])));
    assert!(state.field(Field::Destination).suggestions().is_empty());
    assert_eq!(
        state.field(Field::Destination).phase(),
        &SuggestionPhase::Querying
    );
}

#[test]
fn empty_result_returns_to_idle_and_failure_is_distinct() {
    let mut state = SearchState::new();

    let ticket = issued(state.set_query(Field::Origin, "zzzq"));
    assert!(state.apply_suggestions(&ticket, Ok(Vec::new())));
    assert_eq!(state.field(Field::Origin).phase(), &SuggestionPhase::Idle);

    let ticket = issued(state.set_query(Field::Origin, "zzzqq"));
    assert!(state.apply_suggestions(&ticket, Err("HTTP error: timed out".to_string())));
    assert!(state.field(Field::Origin).suggestions().is_empty());
    assert!(matches!(
        state.field(Field::Origin).phase(),
        SuggestionPhase::Failed { reason } if reason.contains("timed out")
    ));
}

#[test]
fn select_sets_text_coordinate_and_clears_list() {
    let mut state = SearchState::new();
    let ticket = issued(state.set_query(Field::Destination, "Whitefield"));
    let pick = suggestion("Whitefield, Bengaluru", 12.9698, 77.7500);
    state.apply_suggestions(&ticket, Ok(vec![pick.clone()]));

    state.select(Field::Destination, pick.clone());

    let field = state.field(Field::Destination);
    assert_eq!(field.query(), "Whitefield, Bengaluru");
    assert_eq!(field.coordinate(), Coordinate::new(12.9698, 77.7500));
    assert!(field.suggestions().is_empty());
    assert_eq!(field.phase(), &SuggestionPhase::Idle);
    assert_eq!(field.selected(), Some(&pick));
}

#[test]
fn select_twice_is_idempotent() {
    let mut state = SearchState::new();
    let pick = suggestion("Whitefield, Bengaluru", 12.9698, 77.7500);

    state.select(Field::Destination, pick.clone());
    let once = state.field(Field::Destination).clone();
    state.select(Field::Destination, pick);
    let twice = state.field(Field::Destination);

    assert_eq!(once.query(), twice.query());
    assert_eq!(once.coordinate(), twice.coordinate());
    assert_eq!(once.suggestions(), twice.suggestions());
    assert_eq!(once.phase(), twice.phase());
    assert_eq!(once.selected(), twice.selected());
}

#[test]
fn select_drops_responses_for_earlier_typing() {
    let mut state = SearchState::new();
    let ticket = issued(state.set_query(Field::Origin, "Indira"));
    state.select(Field::Origin, suggestion("Indiranagar", 12.9784, 77.6408));

    assert!(!state.apply_suggestions(&ticket, Ok(vec![suggestion("Indira Nagar", 12.97, 77.64)])));
    assert!(state.field(Field::Origin).suggestions().is_empty());
}

#[test]
fn submission_uses_selection_until_text_is_edited() {
    let mut state = SearchState::new();
    let pick = suggestion("Indiranagar", 12.9784, 77.6408);
    state.select(Field::Origin, pick.clone());
    state.set_query(Field::Destination, "MG Road");

    let ticket = state.begin_submission();
    assert_eq!(
        ticket.resolution(Field::Origin),
        &Resolution::Selected(pick)
    );
    assert_eq!(
        ticket.resolution(Field::Destination),
        &Resolution::Lookup("MG Road".to_string())
    );

    state.set_query(Field::Origin, "Indiranagar 100ft Road");
    let ticket = state.begin_submission();
    assert_eq!(
        ticket.resolution(Field::Origin),
        &Resolution::Lookup("Indiranagar 100ft Road".to_string())
    );
}

#[test]
fn newer_submission_supersedes_older() {
    let mut state = SearchState::new();
    let older = state.begin_submission();
    let newer = state.begin_submission();

    assert!(!state.resolve(&older, Field::Origin, Coordinate::new(12.9, 77.6)));
    assert!(!state.raise(&older, Notice::not_found(Field::Origin)));
    assert_eq!(state.coordinate(Field::Origin), DEFAULT_ORIGIN);
    assert!(state.notices().is_empty());

    assert!(state.resolve(&newer, Field::Origin, Coordinate::new(12.9, 77.6)));
    assert_eq!(state.coordinate(Field::Origin), Coordinate::new(12.9, 77.6));
}

#[test]
fn take_notices_drains() {
    let mut state = SearchState::new();
    let ticket = state.begin_submission();
    state.raise(&ticket, Notice::not_found(Field::Origin));

    assert_eq!(state.take_notices().len(), 1);
    assert!(state.notices().is_empty());
}

#[test]
fn toggle_drawer_flips_shell() {
    let mut state = SearchState::new();
    assert!(state.toggle_drawer());
    assert!(state.shell().is_drawer_open());
    assert!(!state.toggle_drawer());
}

#[test]
fn field_names_parse_case_insensitively() {
    assert_eq!("Origin".parse::<Field>().unwrap(), Field::Origin);
    assert_eq!("to".parse::<Field>().unwrap(), Field::Destination);
    assert!(matches!(
        "via".parse::<Field>(),
        Err(SessionError::UnknownField(ref s)) if s == "via"
    ));
}

#[test]
fn whitespace_does_not_count_towards_query_length() {
    let mut state = SearchState::new();
    for text in ["   ", "  Ko  ", "\tK\t\t"] {
        assert!(
            matches!(state.set_query(Field::Origin, text), QueryStart::Suppressed),
            "{text:?} should not issue a request"
        );
        assert_eq!(state.field(Field::Origin).phase(), &SuggestionPhase::Idle);
    }
    assert!(matches!(
        state.set_query(Field::Origin, " Kor "),
        QueryStart::Issued(_)
    ));
}

#[test]
fn editing_a_field_during_submission_drops_its_results() {
    let mut state = SearchState::new();
    let ticket = state.begin_submission();
    state.select(Field::Origin, suggestion("Indiranagar", 12.9784, 77.6408));

    assert!(!state.is_current(&ticket));
    assert!(!state.resolve(&ticket, Field::Origin, Coordinate::new(12.97, 77.59)));
    assert!(!state.raise(&ticket, Notice::not_found(Field::Destination)));
    assert!(!state.apply_route(
        &ticket,
        Route::try_from_points(vec![
            Coordinate::new(12.97, 77.59),
            Coordinate::new(12.99, 77.61),
        ])
        .unwrap()
    ));

    assert_eq!(
        state.coordinate(Field::Origin),
        Coordinate::new(12.9784, 77.6408)
    );
    assert!(state.route().is_empty());
    assert!(state.notices().is_empty());
}

#[test]
fn typing_in_the_other_field_also_invalidates_submission() {
    let mut state = SearchState::new();
    let ticket = state.begin_submission();
    state.set_query(Field::Destination, "He");

    assert!(!state.resolve(&ticket, Field::Origin, Coordinate::new(12.97, 77.59)));
    assert_eq!(state.coordinate(Field::Origin), DEFAULT_ORIGIN);
}
