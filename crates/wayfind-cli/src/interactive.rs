//! Line-driven search session.
//!
//! Each stdin line is one form action: typing into a field, picking a
//! suggestion, submitting, or inspecting the map. Every action prints one
//! JSON document on stdout.

use anyhow::bail;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use wayfind_session::{Field, Session};

use crate::print_json;

const HELP: &str = "\
commands:
  origin <text>          type into the origin field
  destination <text>     type into the destination field
  select <field> <n>     pick suggestion n (0-based) for a field
  submit                 resolve both ends and fetch the route
  view                   print the map view
  state                  print the whole search state
  notices                print and clear pending notices
  drawer                 open or close the side drawer
  help                   show this text
  quit                   leave";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Type { field: Field, text: String },
    Select { field: Field, index: usize },
    Submit,
    View,
    State,
    Notices,
    Drawer,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
///
/// Text after a field keyword is kept verbatim (minus the separating space)
/// so that clearing a field is just `origin` on its own.
pub(crate) fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let command = match word {
        "origin" => Command::Type {
            field: Field::Origin,
            text: rest.to_string(),
        },
        "destination" => Command::Type {
            field: Field::Destination,
            text: rest.to_string(),
        },
        "select" => {
            let mut args = rest.split_whitespace();
            let (Some(field), Some(index), None) = (args.next(), args.next(), args.next()) else {
                bail!("usage: select <origin|destination> <n>");
            };
            Command::Select {
                field: field.parse()?,
                index: index.parse()?,
            }
        }
        "submit" => Command::Submit,
        "view" => Command::View,
        "state" => Command::State,
        "notices" => Command::Notices,
        "drawer" => Command::Drawer,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command {other:?}; try `help`"),
    };
    Ok(Some(command))
}

/// Reads commands from stdin until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or output cannot be written.
/// Bad input lines are reported on stderr and skipped.
pub(crate) async fn run_session(session: &Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprintln!("{HELP}");

    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            Command::Type { field, text } => {
                let outcome = session.update_query(field, &text).await;
                let state = session.snapshot().await;
                let field_state = state.field(field);
                print_json(&json!({
                    "field": field,
                    "result": outcome,
                    "phase": field_state.phase(),
                    "suggestions": field_state.suggestions(),
                }))?;
            }
            Command::Select { field, index } => match session.select_suggestion(field, index).await {
                Ok(suggestion) => print_json(&suggestion)?,
                Err(e) => eprintln!("{e}"),
            },
            Command::Submit => {
                let outcome = session.submit().await;
                let notices = session.take_notices().await;
                let state = session.snapshot().await;
                print_json(&json!({
                    "result": outcome,
                    "origin": state.coordinate(Field::Origin),
                    "destination": state.coordinate(Field::Destination),
                    "route": state.route(),
                    "notices": notices,
                }))?;
            }
            Command::View => print_json(&session.map_view().await)?,
            Command::State => print_json(&session.snapshot().await)?,
            Command::Notices => print_json(&session.take_notices().await)?,
            Command::Drawer => {
                let open = session.toggle_drawer().await;
                print_json(&session.map_view().await.shell)?;
                tracing::debug!(open, "drawer toggled");
            }
            Command::Help => eprintln!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}
