//! `<Name>` placeholder tokens embedded in template bodies.

/// A placeholder token found in a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderToken<'a> {
    /// Name between the angle brackets.
    pub name: &'a str,
    /// Byte offset of the opening `<`.
    pub start: usize,
    /// Byte offset just past the closing `>`.
    pub end: usize,
}

/// Whether `name` is usable as a placeholder name.
///
/// Names start with an ASCII letter and continue with ASCII letters, digits, or `_`.
pub fn is_valid_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Iterate the placeholder tokens of `text` in order of appearance.
///
/// Angle brackets that do not enclose a valid name are literal text.
pub fn placeholder_tokens(text: &str) -> PlaceholderTokens<'_> {
    PlaceholderTokens { text, pos: 0 }
}

pub struct PlaceholderTokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for PlaceholderTokens<'a> {
    type Item = PlaceholderToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.pos + self.text[self.pos..].find('<')?;
            let rest = &self.text[start + 1..];
            let name_len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let name = &rest[..name_len];

            if is_valid_placeholder_name(name) && rest[name_len..].starts_with('>') {
                let end = start + 1 + name_len + 1;
                self.pos = end;
                return Some(PlaceholderToken { name, start, end });
            }
            self.pos = start + 1;
        }
    }
}

/// Replace placeholder tokens in a single pass.
///
/// Every occurrence of a token is replaced by `resolve(name)`. Tokens that
/// resolve to `None` are kept verbatim. Substituted values are never re-scanned,
/// so a value that itself reads `<Language>` stays literal instead of being
/// filled by a later placeholder, unlike chained string replacement.
pub fn substitute<'v, F>(text: &str, resolve: F) -> String
where
    F: Fn(&str) -> Option<&'v str>,
{
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for token in placeholder_tokens(text) {
        if let Some(value) = resolve(token.name) {
            output.push_str(&text[cursor..token.start]);
            output.push_str(value);
            cursor = token.end;
        }
    }

    output.push_str(&text[cursor..]);
    output
}
