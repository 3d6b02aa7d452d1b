use super::alphabet::{resolve, BaseCode};
use crate::utils::{Error, Result};
use regex::{Regex, RegexBuilder};

/// A motif compiled into a case-insensitive regular expression in which every
/// ambiguity code became a character class. Each motif character consumes exactly
/// one character of the target, so a match is always `width()` long.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    width: usize,
}

impl Pattern {
    pub fn compile(raw_motif: &str) -> Result<Self> {
        if raw_motif.is_empty() {
            return Err(Error::EmptyMotif);
        }

        let mut expr = String::with_capacity(raw_motif.len() * 4);
        for base in raw_motif.chars() {
            match resolve(base) {
                Some(BaseCode::Literal(literal)) => {
                    expr.push_str(&regex::escape(&literal.to_string()))
                }
                Some(BaseCode::Ambiguous(bases)) => {
                    expr.push('[');
                    expr.push_str(bases);
                    expr.push(']');
                }
                None => {
                    return Err(Error::InvalidBase {
                        base,
                        motif: raw_motif.to_string(),
                    })
                }
            }
        }

        let regex = RegexBuilder::new(&expr).case_insensitive(true).build()?;
        Ok(Self {
            regex,
            width: raw_motif.chars().count(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(super) fn regex(&self) -> &Regex {
        &self.regex
    }
}
