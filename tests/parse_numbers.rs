use ldmlfmt::{compile_parser, parse_default, NumberParser, SeparatorConfig, Value};

#[test]
fn test_parse_grouped_text() {
    assert_eq!(parse_default("1,234,567", "#,##0"), Some(1234567.0));
    assert_eq!(parse_default("1234567", "#,##0"), Some(1234567.0));
}

#[test]
fn test_parse_percent() {
    assert_eq!(parse_default("12.50%", "#0.00%"), Some(0.125));
    assert_eq!(parse_default("-50%", "#0%"), Some(-0.5));
    assert_eq!(parse_default("5%", "0%"), Some(0.05));
}

#[test]
fn test_parse_negative_sections() {
    assert_eq!(parse_default("(1,234)", "#,##0;(#,##0)"), Some(-1234.0));
    assert_eq!(parse_default("1,234", "#,##0;(#,##0)"), Some(1234.0));
    assert_eq!(parse_default("-1,234", "#,##0;(#,##0)"), None);
    assert_eq!(parse_default("-5.00", "#,##0.00"), Some(-5.0));
}

#[test]
fn test_fraction_group_may_be_absent() {
    assert_eq!(parse_default("12", "#0.00"), Some(12.0));
    assert_eq!(parse_default("12.5", "#0.00"), None);
    assert_eq!(parse_default("12.50", "#0.00"), Some(12.5));
}

#[test]
fn test_fixed_width_integer_digits() {
    assert_eq!(parse_default("07", "00"), Some(7.0));
    assert_eq!(parse_default("123", "00"), None);
    assert_eq!(parse_default(".50", ".00"), Some(0.5));
}

#[test]
fn test_not_matching_text() {
    assert_eq!(parse_default("abc", "#,##0"), None);
    assert_eq!(parse_default("1,234 ", "#,##0"), None);
    assert_eq!(parse_default("", "#,##0"), None);
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse_default("$1,234.50", "'$'#,##0.00"), Some(1234.5));
    assert_eq!(parse_default("3 o'clock", "0' o''clock'"), Some(3.0));
}

#[test]
fn test_parse_overflow() {
    assert_eq!(parse_default("9,007,199,254,740,991", "#,##0"), Some(9007199254740991.0));
    assert_eq!(parse_default("9,007,199,254,740,992", "#,##0"), None);
}

#[test]
fn test_parse_custom_separators() {
    let parse = compile_parser("#,##0.00", &SeparatorConfig::new(" ", ","));
    assert_eq!(parse("1 234 567,25"), Some(1234567.25));
    assert_eq!(parse("1,234,567.89"), None);
}

#[test]
fn test_parse_untyped_values() {
    let parser = NumberParser::new("0.0", &SeparatorConfig::default());
    assert_eq!(parser.parse_value(Value::Text("1.5")), Some(1.5));
    assert_eq!(parser.parse_value(Value::Number(1.5)), None);
    assert_eq!(parser.parse_value(Value::Empty), None);
}
