use optab::symbol::{hex_digits, symbol_name, transform};
use optab::*;

#[test]
fn symbol_without_operands_is_mnemonic() {
    for mnemonic in ["NOP", "HALT", "DI", "EI", "RETI", "PREFIX"] {
        assert_eq!(symbol_name(mnemonic, &[] as &[String]), mnemonic);
    }
}

#[test]
fn symbol_joins_operands_in_order() {
    assert_eq!(symbol_name("LD", &["A", "HL"]), "LD_A_HL");
    assert_eq!(symbol_name("LD", &["HL", "A"]), "LD_HL_A");
    assert_eq!(symbol_name("RST", &["$38"]), "RST_$38");
    assert_eq!(symbol_name("LD", &["HL", "SP", "e8"]), "LD_HL_SP_e8");
}

#[test]
fn hex_strips_prefix_once() {
    assert_eq!(hex_digits("0x00"), "00");
    assert_eq!(hex_digits("0xFa"), "Fa");
}

#[test]
fn transform_whole_table() {
    let table = OpcodeTable::parse(
        r#"{"unprefixed": {
            "0xC3": {"mnemonic": "JP", "operands": [{"name": "a16"}]},
            "0x00": {"mnemonic": "NOP", "operands": []}
        }}"#,
    )
    .unwrap();
    let lines: Vec<String> = transform(&table).iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["JP_a16 = 8'hC3", "NOP = 8'h00"]);
}

#[test]
fn line_from_entry() {
    let entry = OpcodeEntry {
        key: "0xE0".into(),
        mnemonic: "LDH".into(),
        operands: vec!["a8".into(), "A".into()],
    };
    assert_eq!(
        OpcodeLine::from_entry(&entry),
        OpcodeLine {
            symbol: "LDH_a8_A".into(),
            hex: "E0".into(),
        }
    );
}
