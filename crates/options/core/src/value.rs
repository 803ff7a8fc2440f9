//! Resolved option values.
//!
//! Declarations describe what a player may set; values are what a player
//! actually set for one generation run. The host resolves player-supplied
//! text against the finalized option set before seeding a run.

use std::collections::HashMap;

use crate::error::OptionsError;
use crate::spec::{OptionKind, OptionSpec};

/// A single resolved value, tagged by option kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OptionValue {
    Toggle(bool),
    Choice(u32),
    Range(i64),
    Text(String),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Toggle(enabled) => Some(*enabled),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<u32> {
        match self {
            OptionValue::Choice(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptionValue::Range(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl OptionSpec {
    /// Returns this option's default as a resolved value.
    pub fn default_value(&self) -> OptionValue {
        match &self.kind {
            OptionKind::Toggle(toggle) => OptionValue::Toggle(toggle.default),
            OptionKind::Choice(choice) => OptionValue::Choice(choice.default),
            OptionKind::Range(range) => OptionValue::Range(range.default),
            OptionKind::FreeText(text) => OptionValue::Text(text.default.clone()),
        }
    }

    /// Resolves player-supplied text against this option.
    ///
    /// Toggles accept `true/false`, `on/off`, `yes/no`, and `1/0`; choices
    /// accept canonical value names and aliases; ranges accept integers
    /// within bounds. All matching is ASCII case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::InvalidValue` when the text matches nothing,
    /// or `OptionsError::ValueOutOfRange` for an out-of-bounds integer.
    pub fn resolve(&self, text: &str) -> Result<OptionValue, OptionsError> {
        match &self.kind {
            OptionKind::Toggle(_) => parse_toggle(text)
                .map(OptionValue::Toggle)
                .ok_or_else(|| self.invalid_value(text)),
            OptionKind::Choice(choice) => choice
                .resolve_name(text.trim())
                .map(OptionValue::Choice)
                .ok_or_else(|| self.invalid_value(text)),
            OptionKind::Range(range) => {
                let value: i64 = text
                    .trim()
                    .parse()
                    .map_err(|_| self.invalid_value(text))?;
                if value < range.min || value > range.max {
                    return Err(OptionsError::ValueOutOfRange {
                        key: self.key.to_string(),
                        value,
                        min: range.min,
                        max: range.max,
                    });
                }
                Ok(OptionValue::Range(value))
            }
            OptionKind::FreeText(_) => Ok(OptionValue::Text(text.to_string())),
        }
    }

    fn invalid_value(&self, text: &str) -> OptionsError {
        OptionsError::InvalidValue {
            key: self.key.to_string(),
            text: text.to_string(),
        }
    }
}

fn parse_toggle(text: &str) -> Option<bool> {
    let text = text.trim();
    const TRUE_FORMS: [&str; 4] = ["true", "on", "yes", "1"];
    const FALSE_FORMS: [&str; 4] = ["false", "off", "no", "0"];

    if TRUE_FORMS.iter().any(|form| text.eq_ignore_ascii_case(form)) {
        Some(true)
    } else if FALSE_FORMS.iter().any(|form| text.eq_ignore_ascii_case(form)) {
        Some(false)
    } else {
        None
    }
}

/// Per-run option values, keyed by option key.
///
/// Seeded from defaults via [`crate::FinalizedOptions::resolve_defaults`],
/// then overridden from player text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedOptions {
    pub(crate) values: HashMap<&'static str, OptionValue>,
}

impl ResolvedOptions {
    /// Returns the resolved value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::UnknownOption` if the key was never resolved.
    pub fn get(&self, key: &str) -> Result<&OptionValue, OptionsError> {
        self.values
            .get(key)
            .ok_or_else(|| OptionsError::UnknownOption(key.to_string()))
    }

    /// Returns whether a toggle option is enabled.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::KindMismatch` if the option is not a toggle.
    pub fn is_enabled(&self, key: &str) -> Result<bool, OptionsError> {
        self.get(key)?
            .as_bool()
            .ok_or_else(|| OptionsError::KindMismatch {
                key: key.to_string(),
                expected: "toggle",
            })
    }

    /// Returns the selected value of a choice option.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::KindMismatch` if the option is not a choice.
    pub fn choice(&self, key: &str) -> Result<u32, OptionsError> {
        self.get(key)?
            .as_choice()
            .ok_or_else(|| OptionsError::KindMismatch {
                key: key.to_string(),
                expected: "choice",
            })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: OptionValue) {
        self.values.insert(key, value);
    }
}
