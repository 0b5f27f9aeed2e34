//! Run-scoped state threaded from stage to stage.
//!
//! The indices are owned by the context and lent to one stage at a time:
//! cleaning builds them, integration extends them, the age stage reads them.

use std::collections::HashMap;

use podium_model::{ReconcileOptions, TargetEdition};

use crate::identity::IdentityIndex;

/// Athlete id to canonical birthdate. Only grows during a run.
#[derive(Debug, Clone, Default)]
pub struct BirthdateIndex {
    dates: HashMap<String, String>,
}

impl BirthdateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a birthdate. Empty ids or dates are ignored so the index never
    /// holds the unknown sentinel.
    pub fn record(&mut self, athlete_id: &str, birthdate: &str) -> bool {
        let athlete_id = athlete_id.trim();
        if athlete_id.is_empty() || birthdate.is_empty() {
            return false;
        }
        self.dates
            .insert(athlete_id.to_string(), birthdate.to_string());
        true
    }

    pub fn get(&self, athlete_id: &str) -> Option<&str> {
        self.dates.get(athlete_id.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Centralized context for one reconciliation run.
#[derive(Debug, Clone, Default)]
pub struct ReconcileContext {
    pub options: ReconcileOptions,
    pub birthdates: BirthdateIndex,
    pub identities: IdentityIndex,
    /// Detected while cleaning the games table; `None` skips integration.
    pub target: Option<TargetEdition>,
}

impl ReconcileContext {
    pub fn new(options: ReconcileOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_birthdates(mut self, birthdates: BirthdateIndex) -> Self {
        self.birthdates = birthdates;
        self
    }

    pub fn with_identities(mut self, identities: IdentityIndex) -> Self {
        self.identities = identities;
        self
    }

    pub fn with_target(mut self, target: Option<TargetEdition>) -> Self {
        self.target = target;
        self
    }

    pub fn target_edition_id(&self) -> Option<&str> {
        self.target.as_ref().map(|target| target.edition_id.as_str())
    }
}
