pub mod auto;

pub use auto::{AutoController, ControlDecision, CoolingAction, LightingAction};
