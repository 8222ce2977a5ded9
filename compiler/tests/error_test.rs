use hwreg_compiler::{compile_text, error::RegGenError, generate_header, EmitOptions};

fn generate(text: &str) -> Result<String, RegGenError> {
    generate_header(text, &EmitOptions::default())
}

#[test]
fn test_width_mismatch_names_register() {
    // The broken register comes first; the later well-formed one must not mask it
    let input = r#"[
        {"type": "register", "name": "short_reg", "address": 1, "layout": [
            {"type": "volatile_read_write", "name": "a", "width": 3},
            {"type": "padding", "width": 4}
        ]},
        {"type": "register", "name": "fine", "address": 2, "layout": [
            {"type": "volatile_read_write", "name": "b", "width": 8}
        ]}
    ]"#;

    match generate(input) {
        Err(RegGenError::WidthMismatch { register, actual, expected }) => {
            assert_eq!(register, "short_reg");
            assert_eq!(actual, 7);
            assert_eq!(expected, 8);
        }
        other => panic!("expected a width mismatch, got {:?}", other),
    }
}

#[test]
fn test_width_mismatch_message() {
    let input = r#"[
        {"type": "register", "name": "wide", "address": 1, "layout": [
            {"type": "write_only", "name": "a", "width": 9}
        ]}
    ]"#;
    let err = generate(input).unwrap_err();
    assert_eq!(err.to_string(), "Fields in \"wide\" add up to 9 bits, expected 8");
}

#[test]
fn test_duplicate_address() {
    let input = r#"[
        {"type": "register", "name": "stat", "address": "0xFF41", "layout": [
            {"type": "volatile_read_only", "name": "a", "width": 8}
        ]},
        {"type": "register", "name": "stat_alias", "address": 65345, "layout": [
            {"type": "volatile_read_only", "name": "b", "width": 8}
        ]}
    ]"#;

    match generate(input) {
        Err(RegGenError::DuplicateAddress { address, first, second }) => {
            assert_eq!(address, 0xFF41);
            assert_eq!(first, "stat");
            assert_eq!(second, "stat_alias");
        }
        other => panic!("expected a duplicate address, got {:?}", other),
    }
    assert!(compile_text(input).is_err());
}

#[test]
fn test_width_errors_win_over_address_collisions() {
    let input = r#"[
        {"type": "register", "name": "a", "address": 5, "layout": [
            {"type": "write_only", "name": "x", "width": 8}
        ]},
        {"type": "register", "name": "b", "address": 5, "layout": [
            {"type": "write_only", "name": "x", "width": 8}
        ]},
        {"type": "register", "name": "c", "address": 6, "layout": [
            {"type": "write_only", "name": "x", "width": 7}
        ]}
    ]"#;

    assert!(matches!(generate(input), Err(RegGenError::WidthMismatch { ref register, .. }) if register == "c"));
}

#[test]
fn test_duplicate_enum() {
    let input = r#"[
        {"type": "enum", "name": "Mode", "width": 8, "values": []},
        {"type": "enum", "name": "Mode", "width": 8, "values": []}
    ]"#;

    match generate(input) {
        Err(RegGenError::DuplicateDefinition { kind, name }) => {
            assert_eq!(kind, "enum");
            assert_eq!(name, "Mode");
        }
        other => panic!("expected a duplicate definition, got {:?}", other),
    }
}

#[test]
fn test_duplicate_register_name() {
    let input = r#"[
        {"type": "register", "name": "r", "address": 1, "layout": [
            {"type": "write_only", "name": "x", "width": 8}
        ]},
        {"type": "register", "name": "r", "address": 2, "layout": [
            {"type": "write_only", "name": "x", "width": 8}
        ]}
    ]"#;

    assert!(matches!(
        generate(input),
        Err(RegGenError::DuplicateDefinition { kind: "register", .. })
    ));
}

#[test]
fn test_duplicate_members() {
    let enum_input = r#"[
        {"type": "enum", "name": "Mode", "width": 8, "values": [
            {"name": "On", "value": 1},
            {"name": "On", "value": 2}
        ]}
    ]"#;
    match generate(enum_input) {
        Err(RegGenError::DuplicateMember { owner, member }) => {
            assert_eq!(owner, "Mode");
            assert_eq!(member, "On");
        }
        other => panic!("expected a duplicate member, got {:?}", other),
    }

    let register_input = r#"[
        {"type": "register", "name": "r", "address": 1, "layout": [
            {"type": "write_only", "name": "x", "width": 4},
            {"type": "write_only", "name": "x", "width": 4}
        ]}
    ]"#;
    assert!(matches!(generate(register_input), Err(RegGenError::DuplicateMember { .. })));
}

#[test]
fn test_malformed_values() {
    let inputs = [
        r#"[{"type": "enum", "name": "E", "width": 8, "values": [{"name": "A", "value": "0xZZ"}]}]"#,
        r#"[{"type": "enum", "name": "E", "width": "eight", "values": []}]"#,
        r#"[{"type": "register", "name": "r", "address": "ff40", "layout": [
            {"type": "write_only", "name": "x", "width": 8}
        ]}]"#,
        r#"[{"type": "register", "name": "r", "address": -1, "layout": [
            {"type": "write_only", "name": "x", "width": 8}
        ]}]"#,
    ];

    for input in inputs {
        assert!(
            matches!(generate(input), Err(RegGenError::MalformedValue { .. })),
            "{}",
            input
        );
    }
}

#[test]
fn test_malformed_value_names_member() {
    let input = r#"[{"type": "enum", "name": "E", "width": 8, "values": [{"name": "A", "value": "1.5"}]}]"#;
    match generate(input) {
        Err(RegGenError::MalformedValue { entity, literal }) => {
            assert_eq!(entity, "E::A");
            assert_eq!(literal, "1.5");
        }
        other => panic!("expected a malformed value, got {:?}", other),
    }
}

#[test]
fn test_bare_json_numbers_outside_integers_are_malformed() {
    let fractional = r#"[{"type": "enum", "name": "E", "width": 8, "values": [{"name": "A", "value": 1.5}]}]"#;
    match generate(fractional) {
        Err(RegGenError::MalformedValue { entity, literal }) => {
            assert_eq!(entity, "E::A");
            assert_eq!(literal, "1.5");
        }
        other => panic!("expected a malformed value, got {:?}", other),
    }

    // One past u64::MAX no longer fits either integer form
    let huge = r#"[{"type": "register", "name": "r", "address": 18446744073709551616, "layout": [
        {"type": "write_only", "name": "x", "width": 8}
    ]}]"#;
    assert!(matches!(generate(huge), Err(RegGenError::MalformedValue { .. })));

    let fractional_width = r#"[{"type": "register", "name": "r", "address": 1, "layout": [
        {"type": "write_only", "name": "x", "width": 8.0}
    ]}]"#;
    assert!(matches!(generate(fractional_width), Err(RegGenError::MalformedValue { .. })));
}

#[test]
fn test_enum_value_range_and_width() {
    let too_big = r#"[{"type": "enum", "name": "E", "width": 8, "values": [{"name": "A", "value": 256}]}]"#;
    assert!(matches!(generate(too_big), Err(RegGenError::ValueOutOfRange { width: 8, .. })));

    let negative = r#"[{"type": "enum", "name": "E", "width": 8, "values": [{"name": "A", "value": "-1"}]}]"#;
    assert!(matches!(generate(negative), Err(RegGenError::ValueOutOfRange { value: -1, .. })));

    let odd_width = r#"[{"type": "enum", "name": "E", "width": 12, "values": []}]"#;
    assert!(matches!(generate(odd_width), Err(RegGenError::InvalidWidth { width: 12, .. })));
}

#[test]
fn test_unknown_capability_kind() {
    let input = r#"[
        {"type": "register", "name": "r", "address": 1, "layout": [
            {"type": "read_write", "name": "x", "width": 8}
        ]}
    ]"#;

    match generate(input) {
        Err(RegGenError::UnknownCapabilityKind { register, field, kind }) => {
            assert_eq!(register, "r");
            assert_eq!(field, "x");
            assert_eq!(kind, "read_write");
        }
        other => panic!("expected an unknown capability kind, got {:?}", other),
    }
}

#[test]
fn test_unknown_capability_kind_without_name() {
    let input = r#"[
        {"type": "register", "name": "r", "address": 1, "layout": [
            {"type": "read_write", "width": 8}
        ]}
    ]"#;

    match generate(input) {
        Err(RegGenError::UnknownCapabilityKind { register, field, kind }) => {
            assert_eq!(register, "r");
            assert_eq!(field, "r[0]");
            assert_eq!(kind, "read_write");
        }
        other => panic!("expected an unknown capability kind, got {:?}", other),
    }
}

#[test]
fn test_unknown_enum_reference() {
    let input = r#"[
        {"type": "register", "name": "r", "address": 1, "layout": [
            {"type": "volatile_read_write", "name": "mode", "width": 2, "enum": "Missing"},
            {"type": "padding", "width": 6}
        ]}
    ]"#;

    match generate(input) {
        Err(RegGenError::UnknownEnum { register, field, enum_name }) => {
            assert_eq!(register, "r");
            assert_eq!(field, "mode");
            assert_eq!(enum_name, "Missing");
        }
        other => panic!("expected an unknown enum, got {:?}", other),
    }
}

#[test]
fn test_enum_fields_require_unit_width_enums() {
    // A 16-bit enum behind an 8-bit register would make the accessor read two bytes
    let whole = r#"[
        {"type": "enum", "name": "Bank", "width": 16, "values": [{"name": "Low", "value": 1}]},
        {"type": "register", "name": "svbk", "address": "0xFF70", "layout": [
            {"type": "volatile_read_write", "name": "bank", "width": 8, "enum": "Bank"}
        ]}
    ]"#;

    match generate(whole) {
        Err(RegGenError::EnumWidthMismatch { register, field, enum_name, width, expected }) => {
            assert_eq!(register, "svbk");
            assert_eq!(field, "bank");
            assert_eq!(enum_name, "Bank");
            assert_eq!(width, 16);
            assert_eq!(expected, 8);
        }
        other => panic!("expected an enum width mismatch, got {:?}", other),
    }

    let packed = r#"[
        {"type": "enum", "name": "Mode", "width": 32, "values": [{"name": "Off", "value": 0}]},
        {"type": "register", "name": "ctrl", "address": 16, "layout": [
            {"type": "volatile_read_write", "name": "mode", "width": 2, "enum": "Mode"},
            {"type": "padding", "width": 6}
        ]}
    ]"#;
    assert!(matches!(
        generate(packed),
        Err(RegGenError::EnumWidthMismatch { width: 32, .. })
    ));
    assert!(compile_text(packed).is_err());
}

#[test]
fn test_struct_name_collisions() {
    let registers = r#"[
        {"type": "register", "name": "nr_10", "address": "0xFF10", "layout": [
            {"type": "volatile_read_write", "name": "shift", "width": 3},
            {"type": "padding", "width": 5}
        ]},
        {"type": "register", "name": "nr10", "address": "0xFF11", "layout": [
            {"type": "volatile_read_write", "name": "shift", "width": 3},
            {"type": "padding", "width": 5}
        ]}
    ]"#;

    match generate(registers) {
        Err(RegGenError::TypeNameCollision { type_name, first, second }) => {
            assert_eq!(type_name, "Nr10");
            assert_eq!(first, "register \"nr_10\"");
            assert_eq!(second, "register \"nr10\"");
        }
        other => panic!("expected a type name collision, got {:?}", other),
    }

    let with_enum = r#"[
        {"type": "enum", "name": "Lcdc", "width": 8, "values": []},
        {"type": "register", "name": "lcdc", "address": "0xFF40", "layout": [
            {"type": "volatile_read_write", "name": "lcd_enable", "width": 1},
            {"type": "padding", "width": 7}
        ]}
    ]"#;
    let err = generate(with_enum).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The type name \"Lcdc\" of register \"lcdc\" collides with enum \"Lcdc\""
    );

    // Single full-width registers emit no struct, so their names are free
    let no_struct = r#"[
        {"type": "enum", "name": "Ly", "width": 8, "values": []},
        {"type": "register", "name": "ly", "address": "0xFF44", "layout": [
            {"type": "volatile_read_only", "name": "line", "width": 8}
        ]}
    ]"#;
    assert!(generate(no_struct).is_ok());
}

#[test]
fn test_structural_errors() {
    let padding_only = r#"[{"type": "register", "name": "r", "address": 1, "layout": [
        {"type": "padding", "width": 8}
    ]}]"#;
    assert!(matches!(generate(padding_only), Err(RegGenError::NoFields(ref name)) if name == "r"));

    let zero_width = r#"[{"type": "register", "name": "r", "address": 1, "layout": [
        {"type": "write_only", "name": "x", "width": 0},
        {"type": "write_only", "name": "y", "width": 8}
    ]}]"#;
    assert!(matches!(generate(zero_width), Err(RegGenError::InvalidWidth { width: 0, .. })));

    let unnamed = r#"[{"type": "register", "name": "r", "address": 1, "layout": [
        {"type": "write_only", "width": 8}
    ]}]"#;
    assert!(matches!(generate(unnamed), Err(RegGenError::MissingField(_))));

    let bad_name = r#"[{"type": "register", "name": "r", "address": 1, "layout": [
        {"type": "write_only", "name": "two words", "width": 8}
    ]}]"#;
    assert!(matches!(generate(bad_name), Err(RegGenError::InvalidIdentifier(_))));
}

#[test]
fn test_invalid_documents() {
    assert!(matches!(generate("{"), Err(RegGenError::Json(_))));
    assert!(matches!(generate(r#"[{"type": "bitmap", "name": "x"}]"#), Err(RegGenError::Json(_))));
    assert!(matches!(generate(r#"[{"type": "enum", "name": "x"}]"#), Err(RegGenError::Json(_))));
}
