use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Roster is missing required column: {0}")]
    MissingColumn(&'static str),
}
