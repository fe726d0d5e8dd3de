use std::fmt;

use tracing::{debug, warn};

use crate::{
    model::{CurrentConditions, FORECAST_LEN, ForecastEntry},
    service::Update,
};

/// Identifies one user search. Later searches carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub const fn first() -> Self {
        SearchTicket(1)
    }

    fn next(self) -> Self {
        SearchTicket(self.0 + 1)
    }
}

impl fmt::Display for SearchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Progress of one data group (current conditions, or the forecast list).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// The last fetch failed; the previous data is still shown.
    Failed(String),
}

impl GroupStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, GroupStatus::Loading)
    }
}

/// What [`DisplayState::apply`] did with an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Replaced,
    Failed,
    /// The update belongs to a superseded search and was dropped.
    Stale,
}

/// Everything the screen shows. Owned by the UI loop; the only writers are
/// [`DisplayState::begin_search`] and [`DisplayState::apply`].
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    ticket: SearchTicket,
    place: Option<String>,
    current: Option<CurrentConditions>,
    forecast: Vec<ForecastEntry>,
    current_status: GroupStatus,
    forecast_status: GroupStatus,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new search and return its ticket. Updates for every earlier
    /// ticket are ignored from now on.
    pub fn begin_search(&mut self, place: &str) -> SearchTicket {
        self.ticket = self.ticket.next();
        self.place = Some(place.trim().to_string());
        self.current_status = GroupStatus::Loading;
        self.forecast_status = GroupStatus::Loading;
        self.ticket
    }

    pub fn apply(&mut self, update: Update) -> ApplyOutcome {
        let ticket = update.ticket();
        if ticket != self.ticket {
            debug!(%ticket, latest = %self.ticket, "dropping update from superseded search");
            return ApplyOutcome::Stale;
        }

        match update {
            Update::Current { result: Ok(current), .. } => {
                self.current = Some(current);
                self.current_status = GroupStatus::Ready;
                ApplyOutcome::Replaced
            }
            Update::Forecast { result: Ok(mut forecast), .. } => {
                forecast.truncate(FORECAST_LEN);
                self.forecast = forecast;
                self.forecast_status = GroupStatus::Ready;
                ApplyOutcome::Replaced
            }
            Update::Current { result: Err(err), .. } => {
                warn!(%ticket, error = %err, "current conditions not updated");
                self.current_status = GroupStatus::Failed(err.summary());
                ApplyOutcome::Failed
            }
            Update::Forecast { result: Err(err), .. } => {
                warn!(%ticket, error = %err, "forecast not updated");
                self.forecast_status = GroupStatus::Failed(err.summary());
                ApplyOutcome::Failed
            }
        }
    }

    pub fn ticket(&self) -> SearchTicket {
        self.ticket
    }

    /// Place name of the latest search, as typed.
    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    /// `None` until the first successful current-weather fetch.
    pub fn current(&self) -> Option<&CurrentConditions> {
        self.current.as_ref()
    }

    pub fn forecast(&self) -> &[ForecastEntry] {
        &self.forecast
    }

    pub fn current_status(&self) -> &GroupStatus {
        &self.current_status
    }

    pub fn forecast_status(&self) -> &GroupStatus {
        &self.forecast_status
    }

    /// True when neither group is waiting on the latest search.
    pub fn is_settled(&self) -> bool {
        !self.current_status.is_loading() && !self.forecast_status.is_loading()
    }
}
