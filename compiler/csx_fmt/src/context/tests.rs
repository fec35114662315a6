use super::*;

#[test]
fn default_config_uses_four_spaces_and_lf() {
    let config = RenderConfig::default();
    assert_eq!(config.indent, IndentStyle::Spaces(INDENT_WIDTH));
    assert_eq!(config.indent_unit(), "    ");
    assert_eq!(config.line_ending.as_str(), "\n");
}

#[test]
fn custom_indent_width() {
    assert_eq!(RenderConfig::with_indent_width(2).indent_unit(), "  ");
    assert_eq!(RenderConfig::with_indent_width(0).indent_unit(), "");
}

#[test]
fn tabs() {
    assert_eq!(RenderConfig::with_tabs().indent_unit(), "\t");
}

#[test]
fn crlf_line_ending() {
    let config = RenderConfig::default().line_ending(LineEnding::CrLf);
    assert_eq!(config.line_ending.as_str(), "\r\n");
    assert_eq!(config.indent, IndentStyle::Spaces(4));
}
