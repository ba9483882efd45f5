//! Staged (uncommitted) input of a range facet.

use thiserror::Error;

use crate::filter_state::RangeValue;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeApplyError {
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: f64, max: f64 },
    #[error("\"{text}\" is not a number")]
    InvalidNumber { text: String },
}


/// Text typed into the min/max inputs before "Apply".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeStage {
    pub min_text: String,
    pub max_text: String,
}

impl RangeStage {
    /// Seeds the inputs from the committed value.
    pub fn from_committed(committed: &RangeValue) -> Self {
        Self {
            min_text: committed.min.map(format_number).unwrap_or_default(),
            max_text: committed.max.map(format_number).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_text.trim().is_empty() && self.max_text.trim().is_empty()
    }

    /// Parses the staged text into the value to commit.
    ///
    /// `Ok(None)` when both inputs are blank: nothing is committed.
    /// Errors leave the committed value untouched.
    pub fn apply(&self) -> Result<Option<RangeValue>, RangeApplyError> {
        if self.is_empty() {
            return Ok(None);
        }
        let min = parse_bound(&self.min_text)?;
        let max = parse_bound(&self.max_text)?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(RangeApplyError::InvertedBounds { min, max });
            }
        }
        Ok(Some(RangeValue { min, max }))
    }

    /// Resets both inputs and returns the unbounded value to commit.
    pub fn clear(&mut self) -> RangeValue {
        self.min_text.clear();
        self.max_text.clear();
        RangeValue::default()
    }
}

fn parse_bound(text: &str) -> Result<Option<f64>, RangeApplyError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(RangeApplyError::InvalidNumber { text: text.to_string() }),
    }
}

/// `10.0` renders as `10`, `2.5` as `2.5`.
pub fn format_number(n: f64) -> String {
    format!("{}", n)
}

/// Line shown under a range facet, built from the committed bounds.
pub fn range_summary(committed: &RangeValue, unit: &str) -> Option<String> {
    match (committed.min, committed.max) {
        (Some(min), Some(max)) => Some(format!("{unit}{} - {unit}{}", format_number(min), format_number(max))),
        (Some(min), None) => Some(format!("From {unit}{}", format_number(min))),
        (None, Some(max)) => Some(format!("Up to {unit}{}", format_number(max))),
        (None, None) => None,
    }
}
