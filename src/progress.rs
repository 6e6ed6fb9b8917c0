//! Progress reporting for the export pipeline
//!
//! The orchestrator reports coarse stages ("Copying user messages...") and
//! failures to an observer. Frontends implement it to surface status to the
//! operator.

use crate::error::Error;
use log::{error, info};

pub trait Progress {
    /// Free-form status line for human eyes.
    fn update(&mut self, _msg: &str) {}

    /// A failure the operator should see.
    fn failed(&mut self, _err: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Reports progress through the `log` facade.
pub struct LogProgress;

impl Progress for LogProgress {
    fn update(&mut self, msg: &str) {
        info!("{}", msg);
    }

    fn failed(&mut self, err: &Error) {
        error!("Export failed: {}", err);
    }
}

/// Records every event, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub messages: Vec<String>,
    pub failures: Vec<String>,
    pub finished: bool,
}

#[cfg(test)]
impl Progress for RecordingProgress {
    fn update(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn failed(&mut self, err: &Error) {
        self.failures.push(err.to_string());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
