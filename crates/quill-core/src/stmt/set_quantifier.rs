use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// Whether a set operation keeps (`ALL`) or removes (`DISTINCT`) duplicate
/// rows.
///
/// `DISTINCT` is the SQL default when neither keyword is written.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SetQuantifier {
    All,
    #[default]
    Distinct,
}

impl SetQuantifier {
    /// Interprets the optional quantifier token that followed the operator
    /// keyword. An absent token means `DISTINCT`.
    pub fn from_token(token: Option<&str>) -> Result<SetQuantifier> {
        match token {
            Some(token) => token.parse(),
            None => Ok(SetQuantifier::Distinct),
        }
    }

    pub fn is_all(self) -> bool {
        matches!(self, SetQuantifier::All)
    }

    /// `true` when duplicate rows are removed from the result, i.e. the
    /// inverse of the `ALL` keyword.
    pub fn eliminates_duplicates(self) -> bool {
        !self.is_all()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SetQuantifier::All => "ALL",
            SetQuantifier::Distinct => "DISTINCT",
        }
    }
}

impl From<bool> for SetQuantifier {
    /// `true` is the `ALL` keyword.
    fn from(all: bool) -> Self {
        if all {
            SetQuantifier::All
        } else {
            SetQuantifier::Distinct
        }
    }
}

impl FromStr for SetQuantifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<SetQuantifier> {
        let token = s.trim();

        if token.eq_ignore_ascii_case("ALL") {
            Ok(SetQuantifier::All)
        } else if token.eq_ignore_ascii_case("DISTINCT") {
            Ok(SetQuantifier::Distinct)
        } else {
            Err(Error::construction(format!(
                "expected ALL or DISTINCT, found `{s}`"
            )))
        }
    }
}

impl fmt::Display for SetQuantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
