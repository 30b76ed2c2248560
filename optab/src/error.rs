use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing top-level table `{0}`")]
    MissingTable(&'static str),

    #[error("Table `{0}` is not an object")]
    InvalidTable(&'static str),

    #[error("Opcode {opcode}: missing field `{field}`")]
    MissingField { opcode: String, field: String },

    #[error("Opcode {opcode}: field `{field}` is not {expected}")]
    InvalidField {
        opcode: String,
        field: String,
        expected: &'static str,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to echo listing: {0}")]
    Echo(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
