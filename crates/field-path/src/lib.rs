//! Paths through a decorated response.
//!
//! A path is a list of steps separated by `/`, e.g.
//! `serviceResult/results/0/zipCode`. A leading `/` is optional. A step
//! names a field, or, when it is a plain decimal number, may also select
//! an element of a decorated sequence. `~1` stands for `/` and `~0` for
//! `~` inside a step; any other `~` sequence is rejected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("empty step at position {step}")]
    EmptyStep { step: usize },
    #[error("invalid escape in step {step} at byte {offset}")]
    InvalidEscape { step: usize, offset: usize },
}

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    name: String,
}

impl Step {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The field name this step reads.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sequence index this step selects, if it is a canonical decimal
    /// number (`0`, `12`, but not `012` or `+1`).
    pub fn index(&self) -> Option<usize> {
        let bytes = self.name.as_bytes();
        if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }
        if bytes.len() > 1 && bytes[0] == b'0' {
            return None;
        }
        self.name.parse().ok()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.name.chars() {
            match ch {
                '~' => f.write_str("~0")?,
                '/' => f.write_str("~1")?,
                _ => write!(f, "{ch}")?,
            }
        }
        Ok(())
    }
}

/// A parsed path. The empty string parses to a path with no steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    steps: Vec<Step>,
}

impl FieldPath {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let body = input.strip_prefix('/').unwrap_or(input);
        if body.is_empty() {
            return Ok(Self::default());
        }
        let steps = body
            .split('/')
            .enumerate()
            .map(|(step, raw)| parse_step(step, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().map(Step::new).collect(),
        }
    }
}

fn parse_step(step: usize, raw: &str) -> Result<Step, FieldPathError> {
    if raw.is_empty() {
        return Err(FieldPathError::EmptyStep { step });
    }
    let mut name = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((offset, ch)) = chars.next() {
        if ch != '~' {
            name.push(ch);
            continue;
        }
        match chars.next() {
            Some((_, '0')) => name.push('~'),
            Some((_, '1')) => name.push('/'),
            _ => return Err(FieldPathError::InvalidEscape { step, offset }),
        }
    }
    Ok(Step { name })
}
