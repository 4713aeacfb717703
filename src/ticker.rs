use std::fmt;

use serde::Serialize;

use crate::foundation::error::{CanvasError, CanvasResult};

const MAX_SYMBOL_LEN: usize = 10;

/// Validated, upper-cased stock ticker symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Trim, validate and normalize a user-supplied symbol.
    ///
    /// Accepts 1 to 10 characters from `A-Z a-z 0-9 . ^ -`.
    pub fn parse(raw: &str) -> CanvasResult<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CanvasError::validation("ticker symbol must be non-empty"));
        }
        if s.len() > MAX_SYMBOL_LEN {
            return Err(CanvasError::validation(format!(
                "ticker symbol must be at most {MAX_SYMBOL_LEN} characters"
            )));
        }
        if let Some(bad) = s
            .chars()
            .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '^' | '-')))
        {
            return Err(CanvasError::validation(format!(
                "ticker symbol contains invalid character {bad:?}"
            )));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
