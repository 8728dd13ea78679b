//! Debounce flag persisted between runs

use serde::{Deserialize, Serialize};

/// Whether an alert has been sent for the current drop below target.
///
/// `triggered == false` is Idle, `true` is Triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertState {
    #[serde(rename = "alert_triggered", default)]
    pub triggered: bool,
}
