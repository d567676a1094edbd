//! Estimating whether a person is still alive.

use crate::models::Person;
use crate::traits::ITreeStore;

/// Decides whether a person is probably alive.
///
/// Parentage sentences switch between present and past tense on this.
/// Hosts with richer data (probate records, last-seen dates) can supply
/// better estimates than the default death-record check.
pub trait IAliveEstimator: Send + Sync {
    fn probably_alive(&self, person: &Person, store: &dyn ITreeStore) -> bool;
}
