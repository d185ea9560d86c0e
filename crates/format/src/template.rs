//! `{token}` template rendering.

use crate::token::Token;
use crate::view::DateView;

/// Renders a template against a date view.
///
/// Placeholders are token identifiers in braces, e.g.
/// `"{ddd} the {Do} of {MMM}, {Y}"`. Identifiers outside the closed
/// token set render as empty strings; a `{` without a closing brace is
/// kept as literal text.
pub fn render(template: &str, view: &DateView<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                if let Some(token) = Token::parse(&after[..close]) {
                    out.push_str(&token.render(view));
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
