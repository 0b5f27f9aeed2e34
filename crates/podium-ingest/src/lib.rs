//! Boundary collaborators that move row-sets to and from delimited files.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{IngestError, Result};
pub use reader::{read_row_set, read_row_set_or_empty};
pub use writer::write_row_set;
