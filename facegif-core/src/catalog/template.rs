//! `{name}` placeholders inside layer fragments.
//!
//! A placeholder is a `{...}` span whose contents are a non-empty run of ASCII alphanumerics,
//! `_` or `-`. Anything else between braces (CSS blocks, for example) is copied verbatim.

/// Iterate placeholder names in order of appearance.
pub fn placeholders(fragment: &str) -> impl Iterator<Item = &str> {
    Spans { rest: fragment }.filter_map(|span| match span {
        Span::Placeholder(name) => Some(name),
        Span::Text(_) => None,
    })
}

/// Replace every placeholder with the value returned by `lookup`.
///
/// Returns the first unresolved placeholder name as the error.
pub fn fill<'a, F>(fragment: &'a str, mut lookup: F) -> Result<String, &'a str>
where
    F: FnMut(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(fragment.len());
    for span in (Spans { rest: fragment }) {
        match span {
            Span::Text(t) => out.push_str(t),
            Span::Placeholder(name) => out.push_str(lookup(name).ok_or(name)?),
        }
    }
    Ok(out)
}

/// Names usable as placeholders (and as category names).
pub fn is_placeholder_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

enum Span<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

struct Spans<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(open) = self.rest.find('{') else {
            let text = self.rest;
            self.rest = "";
            return Some(Span::Text(text));
        };
        if open > 0 {
            let (text, rest) = self.rest.split_at(open);
            self.rest = rest;
            return Some(Span::Text(text));
        }

        // `rest` starts with '{'.
        if let Some(close) = self.rest[1..].find('}') {
            let inner = &self.rest[1..1 + close];
            if is_placeholder_name(inner) {
                self.rest = &self.rest[close + 2..];
                return Some(Span::Placeholder(inner));
            }
        }
        let (text, rest) = self.rest.split_at(1);
        self.rest = rest;
        Some(Span::Text(text))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/template.rs"]
mod tests;
