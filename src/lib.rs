pub mod scenario;

use std::num::ParseIntError;

use collections::TableError;
use thiserror::{self, Error};

#[derive(Debug, Error)]
pub enum DemoError {
    /// Derived table error
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// The capacity argument was not a non-negative integer
    #[error("Invalid capacity {arg:?}: {source}")]
    InvalidCapacityArg {
        arg: String,
        #[source]
        source: ParseIntError,
    },
}
