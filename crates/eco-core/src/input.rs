//! Raw form fields and their conversion into range-checked numbers.
//!
//! Every calculator describes its fields with a static [`FieldSpec`] table.
//! [`InputValidator`] walks that table against a [`RawInputSet`] and either
//! yields a complete [`ValidatedInputSet`] or the first [`ValidationError`].
//! Nothing partial ever escapes a failed validation.

use fnv::FnvHashMap;
use thiserror::Error;

use crate::constants::MAX_FIELD_VALUE;

/// Static description of one numeric input field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Blank input is an error instead of a default substitution.
    pub required: bool,
    pub default_value: f64,
    /// An explicitly entered value must be strictly greater than zero.
    pub must_be_positive: bool,
    /// Truncate toward zero after parsing (counts, household size).
    pub whole: bool,
}

impl FieldSpec {
    /// Optional non-negative field that falls back to zero.
    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            default_value: 0.0,
            must_be_positive: false,
            whole: false,
        }
    }

    /// Denominator-style field: falls back to `default_value` when blank but
    /// rejects an explicit zero or negative entry.
    pub const fn positive(name: &'static str, label: &'static str, default_value: f64) -> Self {
        Self {
            name,
            label,
            required: false,
            default_value,
            must_be_positive: true,
            whole: false,
        }
    }

    pub const fn whole(self) -> Self {
        Self {
            whole: true,
            ..self
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// Field name to raw text, exactly as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInputSet {
    fields: FnvHashMap<String, String>,
}

impl RawInputSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.fields.insert(name.into(), text.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|t| t.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInputSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = Self::new();
        for (name, text) in iter {
            raw.set(name, text);
        }
        raw
    }
}

/// Field name to a parsed, range-checked value. Only [`InputValidator`]
/// constructs these.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatedInputSet {
    values: FnvHashMap<&'static str, f64>,
}

impl ValidatedInputSet {
    /// Value of a field declared in the validator's field table; undeclared
    /// names read as zero.
    pub fn value(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Missing {
        field: &'static str,
        label: &'static str,
    },
    #[error("{label} must not be negative (got {value})")]
    Negative {
        field: &'static str,
        label: &'static str,
        value: f64,
    },
    #[error("{label} must be greater than zero (got {value})")]
    NotPositive {
        field: &'static str,
        label: &'static str,
        value: f64,
    },
    #[error("{label} must be at most {} (got {value})", MAX_FIELD_VALUE)]
    TooLarge {
        field: &'static str,
        label: &'static str,
        value: f64,
    },
    /// The inputs passed their field checks but the result overflowed.
    #[error("the {domain} result is too large to represent")]
    Overflow { domain: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field, .. }
            | Self::Negative { field, .. }
            | Self::NotPositive { field, .. }
            | Self::TooLarge { field, .. } => field,
            Self::Overflow { .. } => "total",
        }
    }
}

pub struct InputValidator {
    fields: &'static [FieldSpec],
}

impl InputValidator {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn validate(&self, raw: &RawInputSet) -> Result<ValidatedInputSet, ValidationError> {
        let mut values = FnvHashMap::default();
        for spec in self.fields {
            let value = validate_field(spec, raw.get(spec.name))?;
            values.insert(spec.name, value);
        }
        Ok(ValidatedInputSet { values })
    }
}

fn validate_field(spec: &FieldSpec, text: Option<&str>) -> Result<f64, ValidationError> {
    let parsed = text.map(str::trim).filter(|t| !t.is_empty()).and_then(parse_number);
    let Some(value) = parsed else {
        if spec.required {
            log::warn!("[input] missing required field {}", spec.name);
            return Err(ValidationError::Missing {
                field: spec.name,
                label: spec.label,
            });
        }
        log::debug!("[input] {} defaulted to {}", spec.name, spec.default_value);
        return Ok(spec.default_value);
    };

    // Range checks apply to the value as typed; truncation comes after.
    if spec.must_be_positive && value <= 0.0 {
        log::warn!("[input] {} rejected: {} is not positive", spec.name, value);
        return Err(ValidationError::NotPositive {
            field: spec.name,
            label: spec.label,
            value,
        });
    }
    if value < 0.0 {
        log::warn!("[input] {} rejected: {} is negative", spec.name, value);
        return Err(ValidationError::Negative {
            field: spec.name,
            label: spec.label,
            value,
        });
    }
    if value > MAX_FIELD_VALUE {
        log::warn!("[input] {} rejected: {} is above {}", spec.name, value, MAX_FIELD_VALUE);
        return Err(ValidationError::TooLarge {
            field: spec.name,
            label: spec.label,
            value,
        });
    }

    if !spec.whole {
        return Ok(value);
    }
    let whole = value.trunc();
    if spec.must_be_positive && whole == 0.0 {
        // a positive fraction below one counts as no entry
        log::debug!("[input] {} truncated to 0, defaulted to {}", spec.name, spec.default_value);
        return Ok(spec.default_value);
    }
    Ok(whole)
}

/// Leading decimal number of `text`, read the way a browser's `parseFloat`
/// reads it: `"12abc"` is 12, `"abc"` is nothing. NaN and infinities are
/// refused.
pub fn parse_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
