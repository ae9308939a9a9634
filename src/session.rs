//! A running calculator: one evaluator state plus its history.

use crate::calculator::{CalculationState, Input};
use crate::history::{HistoryEntry, HistoryLog};
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Clone, Debug, Default)]
pub struct Session {
    state: CalculationState,
    history: HistoryLog,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculationState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Apply one input, recording any calculation it completes.
    pub fn dispatch(&mut self, input: Input) {
        trace!(?input, "dispatch");
        let transition = self.state.apply(input);
        self.state = transition.state;

        if let Some(calculation) = transition.completed {
            debug!(
                expression = %calculation.expression,
                result = %calculation.result,
                "calculation completed"
            );
            self.history
                .record(calculation.expression, calculation.result);
        }
    }

    /// Bring a history entry's result back into the display.
    pub fn restore(&mut self, entry: &HistoryEntry) {
        debug!(id = %entry.id(), result = %entry.result(), "restoring history entry");
        self.state = self.state.restore(entry.result());
    }

    /// Restore the entry at `index` (0 is newest). Returns false if there is none.
    pub fn select_history(&mut self, index: usize) -> bool {
        // Clone out of the log so the state can be replaced.
        let Some(entry) = self.history.get(index).cloned() else {
            return false;
        };
        self.restore(&entry);
        true
    }

    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "clearing history");
        self.history.clear();
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            display: self.state.formatted_display(),
            raw_display: self.state.display(),
            pending: self.state.pending().map(|p| p.summary()),
            memory: self.state.memory(),
            history: self.history.iter().collect(),
        }
    }
}

/// Serialisable view of a session.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub display: String,
    pub raw_display: &'a str,
    pub pending: Option<String>,
    pub memory: f64,
    pub history: Vec<&'a HistoryEntry>,
}
