//! Steps asserting on the email sent during a scenario.
//!
//! [`EmailSteps`] holds the scenario state and exposes one method per step.
//! [`StepRegistry`] maps step texts to those methods, for runners which
//! dispatch steps by text.
mod bindings;
mod error;
mod params;
pub mod registry;
mod scenario;

pub use bindings::{EmailSteps, GoTo};
pub use error::Error;
pub use params::Negation;
pub use registry::{StepOutcome, StepRegistry};
pub use scenario::Scenario;
