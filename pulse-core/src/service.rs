//! Weather query service.
//!
//! Every fetch runs on its own tokio task and reports back through an
//! unbounded channel. The receiving side owns the [`DisplayState`] and applies
//! each [`Update`] as it arrives, so the state itself is never shared between
//! tasks.
//!
//! [`DisplayState`]: crate::state::DisplayState

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::{
    error::FetchError,
    model::{CurrentConditions, ForecastEntry},
    provider::WeatherProvider,
    state::SearchTicket,
};

/// Result of one finished fetch, tagged with the search that issued it.
#[derive(Debug)]
pub enum Update {
    Current {
        ticket: SearchTicket,
        result: Result<CurrentConditions, FetchError>,
    },
    Forecast {
        ticket: SearchTicket,
        result: Result<Vec<ForecastEntry>, FetchError>,
    },
}

impl Update {
    pub fn ticket(&self) -> SearchTicket {
        match self {
            Update::Current { ticket, .. } | Update::Forecast { ticket, .. } => *ticket,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    tx: mpsc::UnboundedSender<Update>,
}

impl WeatherService {
    /// Create the service and the receiver its updates are delivered on.
    pub fn new(provider: Arc<dyn WeatherProvider>) -> (Self, mpsc::UnboundedReceiver<Update>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { provider, tx }, rx)
    }

    /// Start both fetches for one search. Must be called inside a tokio runtime.
    pub fn search(&self, place: &str, ticket: SearchTicket) -> [JoinHandle<()>; 2] {
        [
            self.fetch_current(place, ticket),
            self.fetch_forecast(place, ticket),
        ]
    }

    pub fn fetch_current(&self, place: &str, ticket: SearchTicket) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let place = place.trim().to_string();

        tokio::spawn(async move {
            let result = provider.current(&place).await;
            if tx.send(Update::Current { ticket, result }).is_err() {
                debug!(%ticket, "display closed before current conditions arrived");
            }
        })
    }

    pub fn fetch_forecast(&self, place: &str, ticket: SearchTicket) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let place = place.trim().to_string();

        tokio::spawn(async move {
            let result = provider.forecast(&place).await;
            if tx.send(Update::Forecast { ticket, result }).is_err() {
                debug!(%ticket, "display closed before forecast arrived");
            }
        })
    }
}
