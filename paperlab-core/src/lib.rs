//! PaperLab Core — feature pipeline, strategies, walk-forward engine.
//!
//! This crate contains the heart of the backtester:
//! - Domain types (price points, feature rows, predictions, simulation steps)
//! - Causal indicator primitives (EMA, RSI, rolling volatility)
//! - The feature-derivation pipeline with drop-incomplete-rows semantics
//! - The `Strategy` trait with a rule-based and a trained-classifier variant
//! - A small deterministic gradient-boosted-trees model
//! - The day-by-day walk-forward simulation loop
//! - Price providers (Yahoo Finance, in-memory fixtures)

pub mod data;
pub mod domain;
pub mod engine;
pub mod features;
pub mod indicators;
pub mod model;
pub mod strategy;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: core types cross thread boundaries.
    ///
    /// Batch runs fan out across worker threads, one (symbol × strategy)
    /// run per task; everything a run touches must be Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PricePoint>();
        require_sync::<domain::PricePoint>();
        require_send::<domain::FeatureRow>();
        require_sync::<domain::FeatureRow>();
        require_send::<domain::Prediction>();
        require_sync::<domain::Prediction>();
        require_send::<domain::SimulationStep>();
        require_sync::<domain::SimulationStep>();

        require_send::<engine::EngineConfig>();
        require_sync::<engine::EngineConfig>();

        require_send::<strategy::StrategyKind>();
        require_sync::<strategy::StrategyKind>();
        require_send::<Box<dyn strategy::Strategy>>();
        require_sync::<Box<dyn strategy::Strategy>>();

        require_send::<data::StaticProvider>();
        require_sync::<data::StaticProvider>();
        require_send::<data::YahooProvider>();
        require_sync::<data::YahooProvider>();
    }

    /// Architecture contract: the engine sees strategies only through the
    /// trait object — it cannot depend on which variant is supplied.
    #[test]
    fn engine_accepts_any_strategy_object() {
        fn _check_trait_object_builds(
            features: &[domain::FeatureRow],
            strategy: &dyn strategy::Strategy,
        ) -> Vec<domain::SimulationStep> {
            engine::walk_forward(features, strategy, 100_000.0)
        }
    }
}
