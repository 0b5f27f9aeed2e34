//! Reconciliation stages for the Olympic dataset.
//!
//! Stages run in a fixed order (see [`pipeline::run_pipeline`]):
//! clean athletes, clean games, merge countries, integrate the secondary
//! source, add ages, tally medals. Each stage validates its required columns
//! before touching a row, so a [`podium_model::ModelError::MissingColumn`]
//! always leaves the stage's input unchanged.

pub mod age;
pub mod clean;
pub mod context;
pub mod identity;
pub mod ids;
pub mod integrate;
pub mod pipeline;
pub mod tally;

pub use context::{BirthdateIndex, ReconcileContext};
pub use identity::{IdentityIndex, identity_key};
pub use ids::IdAllocator;
pub use integrate::{IntegrationReport, IntegrationStats, SecondarySources, integrate};
pub use pipeline::{ReconcileInputs, ReconcileOutput, run_pipeline};
pub use tally::tally;
