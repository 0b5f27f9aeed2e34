use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A stage needs a header that the row-set does not carry.
    #[error("{table}: missing required column '{column}'")]
    MissingColumn { table: String, column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
