use tokio::sync::Mutex;
use wayfind_core::AppConfig;
use wayfind_geocoder::GeocoderClient;
use wayfind_router::RouteClient;

use crate::error::SessionError;
use crate::map_view::MapView;
use crate::notice::Notice;
use crate::state::SearchState;

/// One user's search session: the two service clients plus the state they
/// feed.
///
/// Methods take `&self`, so several lookups and submissions may be in flight
/// at once. The state lock is only held for synchronous transitions, never
/// across a network call.
pub struct Session {
    pub(crate) geocoder: GeocoderClient,
    pub(crate) router: RouteClient,
    pub(crate) state: Mutex<SearchState>,
}

impl Session {
    #[must_use]
    pub fn new(geocoder: GeocoderClient, router: RouteClient) -> Self {
        Self {
            geocoder,
            router,
            state: Mutex::new(SearchState::new()),
        }
    }

    /// Builds both clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if either HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionError> {
        let geocoder = GeocoderClient::from_config(config)?;
        let router = RouteClient::from_config(config)?;
        Ok(Self::new(geocoder, router))
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> SearchState {
        self.state.lock().await.clone()
    }

    pub async fn map_view(&self) -> MapView {
        MapView::render(&*self.state.lock().await)
    }

    pub async fn toggle_drawer(&self) -> bool {
        self.state.lock().await.toggle_drawer()
    }

    pub async fn take_notices(&self) -> Vec<Notice> {
        self.state.lock().await.take_notices()
    }
}
