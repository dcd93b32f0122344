use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn color_mode_explicit_values() {
    assert!(ColorMode::Always.should_use_colors());
    assert!(!ColorMode::Never.should_use_colors());
}

#[test]
fn paint_respects_enabled_flag() {
    assert_eq!(ansi::paint(false, ansi::RED, "FAIL"), "FAIL");
    assert_eq!(ansi::paint(true, ansi::RED, "FAIL"), "\x1b[31mFAIL\x1b[0m");
}
