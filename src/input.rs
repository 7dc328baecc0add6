use std::num::IntErrorKind;

use crate::{DASH_SEPARATOR, ParseError, SLASH_SEPARATOR, consts::DATE_COMPONENTS, prelude::*};

/// Component separator recognised in a raw date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Separator {
    #[display(fmt = "/")]
    Slash,
    #[display(fmt = "-")]
    Dash,
}

impl Separator {
    /// Picks the separator for `s`: a slash anywhere wins over a dash.
    pub fn detect(s: &str) -> Option<Self> {
        if s.contains(SLASH_SEPARATOR) {
            Some(Self::Slash)
        } else if s.contains(DASH_SEPARATOR) {
            Some(Self::Dash)
        } else {
            None
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => SLASH_SEPARATOR,
            Self::Dash => DASH_SEPARATOR,
        }
    }
}

/// A trimmed, non-empty date string together with its detected separator.
/// Lives only for the duration of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDateInput<'a> {
    text:      &'a str,
    separator: Separator,
}

impl<'a> RawDateInput<'a> {
    /// # Errors
    /// `EmptyInput` for blank strings, `UnsupportedFormat` when neither
    /// separator is present.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let separator =
            Separator::detect(text).ok_or_else(|| ParseError::UnsupportedFormat(text.to_owned()))?;
        Ok(Self { text, separator })
    }

    /// The trimmed input.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Splits into exactly three trimmed tokens.
    ///
    /// # Errors
    /// `UnsupportedFormat` for any other token count.
    pub fn tokens(&self) -> Result<[&'a str; DATE_COMPONENTS], ParseError> {
        let parts: Vec<&'a str> = self
            .text
            .split(self.separator.as_char())
            .map(str::trim)
            .collect();
        <[&'a str; DATE_COMPONENTS]>::try_from(parts)
            .map_err(|_| ParseError::UnsupportedFormat(self.text.to_owned()))
    }

    /// Converts the three tokens to integers, in input order `(a, b, y)`.
    ///
    /// # Errors
    /// `UnsupportedFormat` from [`Self::tokens`], `NonIntegerComponent` for the
    /// first token that is not a base-10 integer.
    pub fn components(&self) -> Result<(i64, i64, i64), ParseError> {
        let [a, b, y] = self.tokens()?;
        Ok((
            self.parse_component(a)?,
            self.parse_component(b)?,
            self.parse_component(y)?,
        ))
    }

    /// Helper to parse one component with better error messages.
    /// Accepts ASCII digits with an optional leading sign and nothing else.
    /// Integers too large for `i64` saturate; they are still integers and are
    /// rejected later by the range and calendar checks.
    fn parse_component(&self, token: &str) -> Result<i64, ParseError> {
        token.parse::<i64>().or_else(|e| match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ParseError::NonIntegerComponent {
                token: token.to_owned(),
                input: self.text.to_owned(),
            }),
        })
    }
}
