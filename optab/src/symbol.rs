use std::fmt;

use crate::loader::{OpcodeEntry, OpcodeTable};

/// One line of the listing: a symbolic constant and its 8-bit encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeLine {
    pub symbol: String,
    /// Hex digits without the `0x` prefix, case as in the source.
    pub hex: String,
}

impl OpcodeLine {
    pub fn from_entry(entry: &OpcodeEntry) -> Self {
        Self {
            symbol: symbol_name(&entry.mnemonic, &entry.operands),
            hex: hex_digits(&entry.key).to_string(),
        }
    }
}

impl fmt::Display for OpcodeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = 8'h{}", self.symbol, self.hex)
    }
}

/// Build the constant name for an instruction.
///
/// ```
/// use optab::symbol::symbol_name;
///
/// assert_eq!(symbol_name("NOP", &[] as &[&str]), "NOP");
/// assert_eq!(symbol_name("LD", &["BC", "d16"]), "LD_BC_d16");
/// ```
pub fn symbol_name<S: AsRef<str>>(mnemonic: &str, operands: &[S]) -> String {
    operands.iter().fold(mnemonic.to_string(), |mut symbol, op| {
        symbol.push('_');
        symbol.push_str(op.as_ref());
        symbol
    })
}

/// Strip the `0x` prefix from an opcode key. Keys without it are returned as-is.
pub fn hex_digits(key: &str) -> &str {
    key.strip_prefix("0x").unwrap_or(key)
}

/// Format every entry of the table, preserving table order.
pub fn transform(table: &OpcodeTable) -> Vec<OpcodeLine> {
    table.entries().iter().map(OpcodeLine::from_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_digits_preserves_case() {
        assert_eq!(hex_digits("0xCB"), "CB");
        assert_eq!(hex_digits("0xcb"), "cb");
    }

    #[test]
    fn hex_digits_without_prefix() {
        assert_eq!(hex_digits("FF"), "FF");
        // Only the lowercase prefix is recognised.
        assert_eq!(hex_digits("0XFF"), "0XFF");
    }

    #[test]
    fn hex_digits_longer_key() {
        assert_eq!(hex_digits("0x1FF"), "1FF");
    }

    #[test]
    fn display_line() {
        let line = OpcodeLine {
            symbol: "JR_NZ_e8".into(),
            hex: "20".into(),
        };
        assert_eq!(line.to_string(), "JR_NZ_e8 = 8'h20");
    }
}
