use crate::text::constants::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_UNDERLINE};
use crate::text::{repeat, repeated, wrap, LineWrapper, Measure};

#[test]
fn test_default_wrapper_settings() {
    let wrapper = LineWrapper::default();
    assert_eq!(wrapper.max_line_length(), DEFAULT_MAX_LINE_LENGTH);
    assert_eq!(wrapper.measure(), Measure::Chars);
}

#[test]
fn test_wrapped_lines_fit_underline() {
    let width = 20;
    let lines = wrap("Summary of the quarterly results for the northern region", width).unwrap();
    assert!(lines.len() > 1);

    for line in &lines {
        let len = line.chars().count();
        assert!(len < width, "{line:?} is not under {width}");

        let rule = repeat(&DEFAULT_UNDERLINE.to_string(), len);
        assert_eq!(rule.chars().count(), len);
        assert!(rule.chars().count() < width);
    }
}

#[test]
fn test_columns_width_of_underline() {
    let title = "報告 summary";
    let width = Measure::Columns.str_width(title);
    assert_eq!(width, 12);
    assert_eq!(Measure::Chars.str_width(title), 10);
    assert_eq!(repeated('-', width).to_string().len(), 12);
}

#[test]
fn test_every_default_line_fits() {
    let text = repeat("word ", 100);
    let lines = LineWrapper::default().wrap(&text);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.chars().count() < DEFAULT_MAX_LINE_LENGTH, "{line:?}");
    }
}
