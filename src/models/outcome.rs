//! Result of one job run

/// What a successful run did. `price` is the 22K price per gram it acted on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// Price at or below target while Idle; notification sent, now Triggered
    AlertSent { price: f64 },
    /// Price at or below target but an alert was already sent
    AlertSuppressed { price: f64 },
    /// Price recovered above target + buffer; back to Idle
    Reset { price: f64 },
    /// Dead zone, or above target while Idle
    NoChange { price: f64 },
}

impl RunOutcome {
    pub fn price(&self) -> f64 {
        match *self {
            RunOutcome::AlertSent { price }
            | RunOutcome::AlertSuppressed { price }
            | RunOutcome::Reset { price }
            | RunOutcome::NoChange { price } => price,
        }
    }
}
