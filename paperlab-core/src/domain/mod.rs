//! Domain types shared across the pipeline, strategies, and engine.

pub mod feature;
pub mod prediction;
pub mod price;
pub mod step;

pub use feature::{FeatureRow, FEATURE_DIM};
pub use prediction::{Direction, Prediction};
pub use price::PricePoint;
pub use step::SimulationStep;
