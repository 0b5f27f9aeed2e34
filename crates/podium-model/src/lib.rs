pub mod columns;
pub mod edition;
pub mod error;
pub mod medal;
pub mod options;
pub mod row_set;

pub use edition::TargetEdition;
pub use error::{ModelError, Result};
pub use medal::{Medal, format_team_flag, is_team_flag};
pub use options::{ReconcileOptions, TargetEditionOptions};
pub use row_set::{ColumnIndex, RowSet, cell};
