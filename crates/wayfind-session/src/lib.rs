//! Search session for the wayfind map: suggestions while typing, route
//! acquisition on submit, and the map view derived from both.

pub mod error;
pub mod map_view;
pub mod notice;
pub mod session;
pub mod shell;
pub mod state;
pub mod suggest;
pub mod workflow;

pub use error::SessionError;
pub use map_view::{MapView, Viewport};
pub use notice::{Notice, NoticeKind};
pub use session::Session;
pub use shell::{Shell, ShellView};
pub use state::{Field, SearchState, SuggestionPhase};
pub use suggest::QueryOutcome;
pub use workflow::SubmitOutcome;
