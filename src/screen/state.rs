use super::input::TextInput;
use crate::domain::GameRecord;
use crate::error::FetchError;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What to do with a fetch that settles after a newer one was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Whatever settles last overwrites the results, regardless of issue order.
    #[default]
    LastSettledWins,
    /// Only the most recently issued fetch may replace the results.
    LatestOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SearchState {
    pub query: TextInput,
    pub results: Vec<GameRecord>,
    policy: StalePolicy,
    last_settled: Phase,
    in_flight: usize,
    issued: u64,
}

impl SearchState {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            query: TextInput::new(),
            results: Vec::new(),
            policy,
            last_settled: Phase::Idle,
            in_flight: 0,
            issued: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading() {
            Phase::Loading
        } else {
            self.last_settled
        }
    }

    /// Marks a fetch for the current query as in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.in_flight += 1;
        FetchTicket {
            seq: self.issued,
            query: self.query.text.clone(),
        }
    }

    /// Applies a settled fetch. Returns true when `results` was replaced.
    pub fn settle(
        &mut self,
        seq: u64,
        outcome: std::result::Result<Vec<GameRecord>, FetchError>,
    ) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.policy == StalePolicy::LatestOnly && seq < self.issued {
            debug!("Discarding fetch #{} superseded by #{}", seq, self.issued);
            return false;
        }

        match outcome {
            Ok(games) => {
                info!("Fetch #{} settled with {} games", seq, games.len());
                self.results = games;
                self.last_settled = Phase::Ready;
                true
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                self.last_settled = Phase::Failed;
                false
            }
        }
    }
}
