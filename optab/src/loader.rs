//! Reads an opcode description document and extracts the unprefixed table.
//!
//! The expected document shape is the one published for the Game Boy CPU:
//!
//! ```json
//! {
//!   "unprefixed": {
//!     "0x01": { "mnemonic": "LD", "operands": [{ "name": "BC" }, { "name": "n16" }] }
//!   },
//!   "cbprefixed": { ... }
//! }
//! ```
//!
//! Only `"unprefixed"` is read. Entries are kept in the order they appear in
//! the source object.

use std::io;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key of the single-byte opcode table.
pub const UNPREFIXED: &str = "unprefixed";

/// A single opcode entry from the unprefixed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Opcode key exactly as written in the source, e.g. `0x3E`.
    pub key: String,
    pub mnemonic: String,
    /// Operand names in declaration order.
    pub operands: Vec<String>,
}

/// The unprefixed opcode table, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpcodeTable {
    entries: Vec<OpcodeEntry>,
}

impl OpcodeTable {
    /// Read and parse an opcode description file.
    pub fn open(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
            _ => Error::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let table = Self::parse(&text)?;
        log::info!(
            "Loaded {} unprefixed opcodes from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse an opcode description document from JSON text.
    pub fn parse(text: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(text)?;
        let Value::Object(root) = document else {
            return Err(Error::MissingTable(UNPREFIXED));
        };

        for name in root.keys().filter(|k| *k != UNPREFIXED) {
            log::debug!("Ignoring table `{name}`");
        }

        let table = match root.get(UNPREFIXED) {
            Some(Value::Object(table)) => table,
            Some(_) => return Err(Error::InvalidTable(UNPREFIXED)),
            None => return Err(Error::MissingTable(UNPREFIXED)),
        };

        let entries = table
            .iter()
            .map(|(key, value)| parse_entry(key, value))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[OpcodeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry(key: &str, value: &Value) -> Result<OpcodeEntry> {
    let Value::Object(fields) = value else {
        return Err(invalid(key, "entry", "an object"));
    };

    let mnemonic = require(key, fields, "mnemonic")?
        .as_str()
        .ok_or_else(|| invalid(key, "mnemonic", "a string"))?
        .to_string();

    let operands = require(key, fields, "operands")?
        .as_array()
        .ok_or_else(|| invalid(key, "operands", "an array"))?
        .iter()
        .enumerate()
        .map(|(i, operand)| operand_name(key, i, operand))
        .collect::<Result<Vec<_>>>()?;

    Ok(OpcodeEntry {
        key: key.to_string(),
        mnemonic,
        operands,
    })
}

fn operand_name(key: &str, index: usize, operand: &Value) -> Result<String> {
    let field = format!("operands[{index}].name");
    let Value::Object(fields) = operand else {
        return Err(invalid(key, &format!("operands[{index}]"), "an object"));
    };
    match fields.get("name") {
        Some(Value::String(name)) => Ok(name.clone()),
        Some(_) => Err(invalid(key, &field, "a string")),
        None => Err(Error::MissingField {
            opcode: key.to_string(),
            field,
        }),
    }
}

fn require<'a>(key: &str, fields: &'a Map<String, Value>, field: &str) -> Result<&'a Value> {
    fields.get(field).ok_or_else(|| Error::MissingField {
        opcode: key.to_string(),
        field: field.to_string(),
    })
}

fn invalid(key: &str, field: &str, expected: &'static str) -> Error {
    Error::InvalidField {
        opcode: key.to_string(),
        field: field.to_string(),
        expected,
    }
}
