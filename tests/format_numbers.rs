use ldmlfmt::{format_default, NumberFormatter, SeparatorConfig, Value};

#[test]
fn test_format_thousands() {
    assert_eq!(format_default(1234567.0, "#,##0"), "1,234,567");
    assert_eq!(format_default(123.0, "#,##0"), "123");
    assert_eq!(format_default(0.0, "#,##0"), "0");
}

#[test]
fn test_format_decimal_trimming() {
    assert_eq!(format_default(1234.5, "#,##0.00"), "1,234.50");
    assert_eq!(format_default(1234.5, "#,##0.##"), "1,234.5");
    assert_eq!(format_default(1234.0, "#,##0.0#"), "1,234.0");
    assert_eq!(format_default(1234.567, "#,##0.0#"), "1,234.57");
}

#[test]
fn test_format_rounding() {
    assert_eq!(format_default(0.125, "0.00"), "0.13");
    assert_eq!(format_default(2.5, "0"), "3");
    // 1.005 is slightly below 1.005 in binary
    assert_eq!(format_default(1.005, "0.00"), "1.00");
    assert_eq!(format_default(999.999, "#,##0.00"), "1,000.00");
}

#[test]
fn test_format_percentage() {
    assert_eq!(format_default(0.125, "#0.00%"), "12.50%");
    assert_eq!(format_default(0.42, "#0%"), "42%");
    assert_eq!(format_default(-0.5, "#0%"), "-50%");
    assert_eq!(format_default(0.05, "0%"), "5%");
}

#[test]
fn test_quoted_percent_does_not_scale() {
    assert_eq!(format_default(42.0, "#0'%'"), "42%");
}

#[test]
fn test_format_negative_section() {
    assert_eq!(format_default(-5.0, "#,##0.00;-#,##0.00"), "-5.00");
    assert_eq!(format_default(-5.0, "#,##0.00"), "-5.00");
    assert_eq!(format_default(-1234.0, "#,##0;(#,##0)"), "(1,234)");
    assert_eq!(format_default(1234.0, "#,##0;(#,##0)"), "1,234");
}

#[test]
fn test_negative_zero_uses_negative_section() {
    assert_eq!(format_default(-0.0, "0;'neg '0"), "neg 0");
    assert_eq!(format_default(0.0, "0;'neg '0"), "0");
}

#[test]
fn test_fixed_width_pads_and_truncates() {
    assert_eq!(format_default(7.0, "000"), "007");
    assert_eq!(format_default(12345.0, "000"), "345");
    assert_eq!(format_default(123.0, "00"), "23");
    assert_eq!(format_default(123.0, "0"), "3");
    assert_eq!(format_default(0.42, "0%"), "2%");
}

#[test]
fn test_integer_part_without_markers() {
    assert_eq!(format_default(1.5, ".00"), ".50");
    assert_eq!(format_default(-1.5, ".00"), "-.50");
}

#[test]
fn test_secondary_grouping() {
    assert_eq!(format_default(1234567.0, "#,##,##0"), "12,34,567");
}

#[test]
fn test_literals_and_escapes() {
    assert_eq!(format_default(1234.5, "'$'#,##0.00"), "$1,234.50");
    assert_eq!(format_default(3.0, "0' o''clock'"), "3 o'clock");
    assert_eq!(format_default(3.0, "0''"), "3'");
    assert_eq!(format_default(5.0, "'#'0"), "#5");
}

#[test]
fn test_custom_separators() {
    let config = SeparatorConfig::new("\u{a0}", ",");
    let formatter = NumberFormatter::new("#,##0.00", &config);
    assert_eq!(formatter.format(1234567.891), "1\u{a0}234\u{a0}567,89");
}

#[test]
fn test_not_formattable_inputs() {
    let formatter = NumberFormatter::new("#,##0", &SeparatorConfig::default());
    assert_eq!(formatter.format(f64::NAN), "");
    assert_eq!(formatter.format_value(Value::Text("12")), "");
    assert_eq!(formatter.format_value(Value::Bool(true)), "");
    assert_eq!(formatter.format_value(Value::Empty), "");
    assert_eq!(formatter.format_value(12), "12");
}
