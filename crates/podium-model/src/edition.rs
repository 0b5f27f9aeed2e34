/// The single edition being integrated from the secondary source.
///
/// Detected once while cleaning the games table; its id is stable for the
/// rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEdition {
    pub edition_id: String,
    /// Display name written into every synthesized result row.
    pub name: String,
}

impl TargetEdition {
    pub fn new(edition_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            edition_id: edition_id.into(),
            name: name.into(),
        }
    }
}
