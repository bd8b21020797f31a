use ldmlfmt::{format, format_default, parse, parse_default, Pattern, PatternCache, SeparatorConfig};

#[test]
fn test_format_convenience() {
    let config = SeparatorConfig::default();
    assert_eq!(format(1234.5, "#,##0.00", &config), "1,234.50");
    assert_eq!(format_default(0.42, "#0%"), "42%");
}

#[test]
fn test_parse_convenience() {
    let config = SeparatorConfig::new(".", ",");
    assert_eq!(parse("1.234,50", "#,##0.00", &config), Some(1234.5));
    assert_eq!(parse_default("42%", "#0%"), Some(0.42));
}

#[test]
fn test_empty_pattern() {
    assert_eq!(format_default(42.0, ""), "");
    assert_eq!(parse_default("42", ""), None);
}

#[test]
fn test_pattern_sections() {
    let pattern = Pattern::parse("#,##0.00;(#,##0.00)");
    let [positive, negative] = pattern.sections();
    assert_eq!(positive.group_sizes, vec![3]);
    assert!(!positive.percent);
    assert_eq!(negative.fraction_precision.min, 2);
    assert!(pattern.has_explicit_negative());
}

#[test]
fn test_cache_serves_both_directions() {
    let mut cache = PatternCache::default();
    let codec = cache.get_or_compile("#0.0%", &SeparatorConfig::default());
    assert_eq!(codec.format(0.5), "50.0%");
    assert_eq!(codec.parse("50.0%"), Some(0.5));
}
