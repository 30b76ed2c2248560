//! Converts an opcode description document into a listing of 8-bit
//! hardware-description constants.
//!
//! Each entry of the document's `"unprefixed"` table becomes one line of the
//! form `LD_BC_n16 = 8'h01`: the mnemonic joined with its operand names, and
//! the opcode key without its `0x` prefix.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let written = optab::convert(
//!     Path::new("opcode.json"),
//!     Path::new("opcodes.txt"),
//!     Some(&mut std::io::stdout()),
//! )?;
//! # Ok::<(), optab::Error>(())
//! ```

pub mod error;
pub mod listing;
pub mod loader;
pub mod symbol;

use std::io::Write;
use std::path::Path;

pub use error::{Error, Result};
pub use loader::{OpcodeEntry, OpcodeTable};
pub use symbol::OpcodeLine;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "opcode.json";
/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "opcodes.txt";

/// Load `input`, format every unprefixed opcode and write the listing to
/// `output`, echoing each line to `echo`.
///
/// The whole input is validated before `output` is opened, so a malformed
/// document leaves any existing output untouched.
pub fn convert<E: Write>(input: &Path, output: &Path, echo: Option<&mut E>) -> Result<usize> {
    let table = OpcodeTable::open(input)?;
    let lines = symbol::transform(&table);
    listing::write_file(output, &lines, echo)
}
