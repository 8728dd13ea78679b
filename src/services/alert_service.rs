//! One run of the alert job: fetch, derive, compare, notify, persist

use tracing::{debug, error, info};

use crate::api::{AlertSink, PriceSource};
use crate::config::{PersistPolicy, Thresholds};
use crate::models::{AlertState, RunOutcome};
use crate::services::price_service;
use crate::store::StateStore;
use crate::utils::JobError;

/// Which state change, if any, a price calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle -> Triggered
    Trigger,
    /// At or below target, already Triggered
    Suppress,
    /// Triggered -> Idle
    Reset,
    /// Dead zone, or above target while Idle
    Hold,
}

/// Decide the transition for the 22K price `price`.
///
/// Trigger is inclusive (`price <= target`), reset is strict
/// (`price > target + reset_buffer`). Prices in `(target, target + reset_buffer]`
/// never change the state.
pub fn decide(price: f64, state: AlertState, thresholds: &Thresholds) -> Transition {
    if price <= thresholds.target {
        if state.triggered {
            Transition::Suppress
        } else {
            Transition::Trigger
        }
    } else if price > thresholds.reset_level() && state.triggered {
        Transition::Reset
    } else {
        Transition::Hold
    }
}

pub fn format_alert_message(price_22k: f64, target: f64) -> String {
    format!("22K Gold hit ₹{:.2} / gram\nTarget: ₹{:.2}", price_22k, target)
}

/// Run the job once.
///
/// A fetch or notify failure aborts the run before anything is saved, so a
/// failed alert stays Idle and is sent again on the next run.
pub async fn run_once<P, N, S>(
    source: &P,
    sink: &N,
    store: &S,
    thresholds: &Thresholds,
    policy: PersistPolicy,
) -> Result<RunOutcome, JobError>
where
    P: PriceSource + ?Sized,
    N: AlertSink + ?Sized,
    S: StateStore + ?Sized,
{
    let state = store.load();

    let per_gram_24k = source
        .fetch_price_per_gram()
        .await
        .map_err(JobError::PriceFetch)?;
    let quote = price_service::quote(per_gram_24k);
    let price = quote.per_gram_22k;

    info!("💰 Gold 24K: ₹{:.2} / g", quote.per_gram_24k);
    info!("💰 Gold 22K: ₹{:.2} / g", price);

    match decide(price, state, thresholds) {
        Transition::Trigger => {
            let message = format_alert_message(price, thresholds.target);
            sink.send(&message).await.map_err(JobError::Notify)?;
            info!("✅ Pushover alert sent");

            persist(store, AlertState { triggered: true }, policy)?;
            Ok(RunOutcome::AlertSent { price })
        }
        Transition::Reset => {
            info!("🔄 Resetting alert state");
            persist(store, AlertState { triggered: false }, policy)?;
            Ok(RunOutcome::Reset { price })
        }
        Transition::Suppress => {
            debug!("Alert already sent for this drop, not notifying again");
            Ok(RunOutcome::AlertSuppressed { price })
        }
        Transition::Hold => {
            debug!(
                "No transition (target ₹{:.2}, reset above ₹{:.2}, triggered: {})",
                thresholds.target,
                thresholds.reset_level(),
                state.triggered
            );
            Ok(RunOutcome::NoChange { price })
        }
    }
}

fn persist<S>(store: &S, state: AlertState, policy: PersistPolicy) -> Result<(), JobError>
where
    S: StateStore + ?Sized,
{
    match store.save(&state) {
        Ok(()) => Ok(()),
        Err(e) => match policy {
            PersistPolicy::Swallow => {
                error!("Failed to save alert state {:?}: {}", state, e);
                Ok(())
            }
            PersistPolicy::Propagate => Err(JobError::Persist(e)),
        },
    }
}
