//! Simulated network latency for the fixture-backed store.

use std::time::Duration;
use tracing::trace;

/// Data-provider calls that carry a simulated delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Milestones,
    Child,
    Children,
    Postcards,
    PostcardContent,
    Timeline,
    Login,
    Register,
}

impl Operation {
    pub fn delay(&self) -> Duration {
        let millis = match self {
            Operation::Milestones => 300,
            Operation::Child => 300,
            Operation::Children => 300,
            Operation::Postcards => 400,
            Operation::PostcardContent => 200,
            Operation::Timeline => 200,
            Operation::Login => 800,
            Operation::Register => 1000,
        };
        Duration::from_millis(millis)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    enabled: bool,
}

impl SimulatedLatency {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn from_flag(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Sleep for the operation's delay when simulation is on.
    pub async fn wait(&self, operation: Operation) {
        if !self.enabled {
            return;
        }
        let delay = operation.delay();
        trace!(?operation, ?delay, "simulating latency");
        tokio::time::sleep(delay).await;
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::enabled()
    }
}
