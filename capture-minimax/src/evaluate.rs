use anyhow::{bail, Result};
use capture_game_types::{Action, Seat};
use rustc_hash::FxHashMap;

/// Named feature measurements for one (state, action) pair.
///
/// Built fresh per evaluation. A feature that would contribute nothing
/// is simply not pushed rather than pushed with a zero value.
pub type FeatureVector = Vec<(&'static str, f64)>;

/// Immutable feature-name to weight map for one agent role.
#[derive(Debug, Clone)]
pub struct WeightTable {
    weights: FxHashMap<&'static str, f64>,
}

impl WeightTable {
    /// Build a table from a static role configuration.
    pub fn new(weights: &[(&'static str, f64)]) -> Self {
        Self {
            weights: weights.iter().copied().collect(),
        }
    }

    /// The weight configured for `name`, if any.
    pub fn weight_for(&self, name: &str) -> Option<f64> {
        self.weights.get(name).copied()
    }

    /// Dot product of `features` with this table.
    ///
    /// Every produced feature must have a weight. A missing weight is a
    /// role configuration error and fails the evaluation, it never
    /// silently contributes zero.
    pub fn score(&self, features: &FeatureVector) -> Result<f64> {
        let mut total = 0.0;

        for &(name, value) in features {
            match self.weight_for(name) {
                Some(weight) => total += weight * value,
                None => bail!("feature {name:?} has no configured weight"),
            }
        }

        Ok(total)
    }
}

/// One evaluation role (offense, defense, ...).
///
/// The search engine and the selectors depend only on this interface,
/// never on a concrete role.
pub trait Evaluate<G> {
    /// Measure the features of `seat` taking `action` from `state`.
    fn features(&self, state: &G, seat: Seat, action: Action) -> Result<FeatureVector>;

    /// This role's weight table.
    fn weights(&self) -> &WeightTable;

    /// Linear evaluation: the features dotted with the role's weights.
    fn evaluate(&self, state: &G, seat: Seat, action: Action) -> Result<f64> {
        self.weights().score(&self.features(state, seat, action)?)
    }
}
