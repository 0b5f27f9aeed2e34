//! Cleaning stages for the primary tables.

pub mod athletes;
pub mod countries;
pub mod games;

pub use athletes::{AthleteIndices, clean_athletes};
pub use countries::merge_countries;
pub use games::clean_games;
