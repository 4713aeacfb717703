use crate::{
    foundation::error::{CanvasError, CanvasResult},
    grid::model::{GRID_LEN, PixelGrid},
};

fn is_bracket(c: char) -> bool {
    c == '[' || c == ']'
}

/// Remove at most one bracket character from each end of `text`.
///
/// Surrounding whitespace is trimmed first. The two ends are handled
/// independently: `"[1,2"` and `"1,2]"` are both accepted, and no check is
/// made that the brackets pair up.
pub fn strip_brackets(text: &str) -> &str {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix(is_bracket) {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix(is_bracket) {
        s = rest;
    }
    s
}

/// Parse a serialized grid into a [`PixelGrid`].
///
/// Brackets are removed with [`strip_brackets`] before the tokens are read
/// by [`parse_tokens`].
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn parse_grid(text: &str) -> CanvasResult<PixelGrid> {
    parse_tokens(strip_brackets(text))
}

/// Parse comma-separated tokens as they are, without touching brackets.
///
/// Every token must be a finite number; the first offending token is
/// reported. Only once all tokens parse is the count checked against
/// [`GRID_LEN`].
pub fn parse_tokens(body: &str) -> CanvasResult<PixelGrid> {
    let mut values = Vec::with_capacity(GRID_LEN);
    for (index, raw) in body.split(',').enumerate() {
        let token = raw.trim();
        let v: f64 = token
            .parse()
            .map_err(|_| CanvasError::parse(index, token))?;
        if !v.is_finite() {
            return Err(CanvasError::parse(index, token));
        }
        values.push(v);
    }

    PixelGrid::from_values(values)
}

#[cfg(test)]
#[path = "../../tests/unit/grid/parse.rs"]
mod tests;
