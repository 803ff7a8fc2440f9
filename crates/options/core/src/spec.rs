//! Option declarations.
//!
//! An option is a named configuration slot a player sets before a
//! generation run. Declarations are pure data: the host interprets them
//! when building the item pool and logic, worlds only describe them.

use std::collections::HashMap;

/// A named, typed configuration slot with display metadata.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds metadata common to every option (key, display name,
///   player-facing documentation)
/// - `kind` enum holds kind-specific data (defaults, value sets, bounds)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionSpec {
    /// Unique key within the registry. Collisions are last-wins.
    pub key: &'static str,
    /// Human-readable name shown in host UIs and spoiler logs.
    pub display_name: &'static str,
    /// Player-facing documentation. Cross-option contracts that the host's
    /// pool builder honors are documented here, never enforced locally.
    pub description: &'static str,
    pub kind: OptionKind,
}

impl OptionSpec {
    pub fn new(
        key: &'static str,
        display_name: &'static str,
        description: &'static str,
        kind: OptionKind,
    ) -> Self {
        Self {
            key,
            display_name,
            description,
            kind,
        }
    }

    /// Declares a boolean toggle.
    pub fn toggle(
        key: &'static str,
        display_name: &'static str,
        description: &'static str,
        default: bool,
    ) -> Self {
        Self::new(key, display_name, description, OptionKind::Toggle(ToggleData { default }))
    }

    /// Declares a single-choice enumeration over a fixed, ordered value set.
    pub fn choice(
        key: &'static str,
        display_name: &'static str,
        description: &'static str,
        values: Vec<NamedValue>,
        default: u32,
    ) -> Self {
        Self::new(
            key,
            display_name,
            description,
            OptionKind::Choice(ChoiceData {
                values,
                aliases: HashMap::new(),
                default,
            }),
        )
    }

    /// Declares a bounded integer option.
    pub fn range(
        key: &'static str,
        display_name: &'static str,
        description: &'static str,
        min: i64,
        max: i64,
        default: i64,
    ) -> Self {
        Self::new(key, display_name, description, OptionKind::Range(RangeData { min, max, default }))
    }

    /// Declares a free-text option.
    pub fn free_text(
        key: &'static str,
        display_name: &'static str,
        description: &'static str,
        default: impl Into<String>,
    ) -> Self {
        Self::new(
            key,
            display_name,
            description,
            OptionKind::FreeText(TextData {
                default: default.into(),
            }),
        )
    }

    /// Returns the choice data, if this option is a choice.
    pub fn as_choice(&self) -> Option<&ChoiceData> {
        match &self.kind {
            OptionKind::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    /// Returns the toggle data, if this option is a toggle.
    pub fn as_toggle(&self) -> Option<&ToggleData> {
        match &self.kind {
            OptionKind::Toggle(toggle) => Some(toggle),
            _ => None,
        }
    }
}

/// Option kind with kind-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OptionKind {
    /// Boolean on/off switch.
    Toggle(ToggleData),

    /// Single choice from a fixed set of named values.
    Choice(ChoiceData),

    /// Integer within inclusive bounds.
    Range(RangeData),

    /// Arbitrary text.
    FreeText(TextData),
}

impl OptionKind {
    /// Kind name used in error messages and host UIs.
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Toggle(_) => "toggle",
            OptionKind::Choice(_) => "choice",
            OptionKind::Range(_) => "range",
            OptionKind::FreeText(_) => "text",
        }
    }
}

/// Toggle-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ToggleData {
    pub default: bool,
}

/// Choice-specific data.
///
/// `values` is ordered for display. `aliases` are alternate spellings
/// accepted when resolving player text; every alias must target a value
/// that is a member of `values`, which [`crate::FinalizedOptions`]
/// enforces when aliases are added.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChoiceData {
    pub values: Vec<NamedValue>,
    pub aliases: HashMap<String, u32>,
    pub default: u32,
}

impl ChoiceData {
    /// Returns true if `value` is a member of the value set.
    pub fn is_member(&self, value: u32) -> bool {
        self.values.iter().any(|named| named.value == value)
    }

    /// Resolves a canonical value name or alias, case-insensitively.
    pub fn resolve_name(&self, name: &str) -> Option<u32> {
        self.values
            .iter()
            .find(|named| named.name.eq_ignore_ascii_case(name))
            .map(|named| named.value)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                    .map(|(_, value)| *value)
            })
    }
}

/// A canonical name/value pair in a choice's value set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedValue {
    pub name: String,
    pub value: u32,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Range-specific data. Bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeData {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

/// Free-text-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextData {
    pub default: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_membership_and_name_resolution() {
        let spec = OptionSpec::choice(
            "weather",
            "Weather",
            "Pick the weather.",
            vec![NamedValue::new("sunny", 0), NamedValue::new("rainy", 1)],
            0,
        );
        let choice = spec.as_choice().unwrap();

        assert!(choice.is_member(1));
        assert!(!choice.is_member(7));
        assert_eq!(choice.resolve_name("rainy"), Some(1));
        assert_eq!(choice.resolve_name("RAINY"), Some(1));
        assert_eq!(choice.resolve_name("stormy"), None);
    }

    #[test]
    fn kind_names() {
        assert_eq!(OptionSpec::toggle("t", "T", "", true).kind.name(), "toggle");
        assert_eq!(OptionSpec::range("r", "R", "", 0, 5, 1).kind.name(), "range");
        assert_eq!(OptionSpec::free_text("f", "F", "", "x").kind.name(), "text");
    }
}
