//! Option registries.
//!
//! The host owns two registry stages. [`OptionRegistry`] is the pre-merge
//! builder handed to a world's `before_options_defined` hook: an ordered
//! collection of declarations where a repeated key silently overwrites the
//! earlier entry. [`FinalizedOptions`] is the merged set produced by
//! [`OptionRegistry::finalize`]; it carries the mutation surface the
//! `after_options_defined` hook uses (alias extension, default overwrite)
//! and the resolution APIs the generation pipeline consumes.

use std::collections::HashMap;

use crate::error::OptionsError;
use crate::spec::{OptionKind, OptionSpec};
use crate::value::ResolvedOptions;

/// Pre-merge option builder.
///
/// Declarations are kept in insertion order for display; a lookup table
/// gives O(1) access by key. Re-inserting a key replaces the declaration
/// in place, keeping its original position.
#[derive(Clone, Debug, Default)]
pub struct OptionRegistry {
    specs: Vec<OptionSpec>,
    index: HashMap<&'static str, usize>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration. Last insert wins on key collision.
    pub fn insert(&mut self, spec: OptionSpec) {
        match self.index.get(spec.key) {
            Some(&position) => self.specs[position] = spec,
            None => {
                self.index.insert(spec.key, self.specs.len());
                self.specs.push(spec);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionSpec> {
        self.index.get(key).map(|&position| &self.specs[position])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterates declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> + '_ {
        self.specs.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.key)
    }

    /// The host's merge step: freezes the registry into the finalized set.
    pub fn finalize(self) -> FinalizedOptions {
        FinalizedOptions {
            specs: self.specs,
            index: self.index,
        }
    }
}

/// The merged option set.
///
/// Produced once per run after every world hook has contributed its
/// declarations. Mutations after this point are limited to what the
/// post-merge hook needs; all of them validate against the value set so a
/// bad reference surfaces as an [`OptionsError`] in the host pipeline.
#[derive(Clone, Debug, Default)]
pub struct FinalizedOptions {
    specs: Vec<OptionSpec>,
    index: HashMap<&'static str, usize>,
}

impl FinalizedOptions {
    /// Returns the declaration for `key`.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::UnknownOption` if no such option exists.
    pub fn get(&self, key: &str) -> Result<&OptionSpec, OptionsError> {
        self.position(key).map(|position| &self.specs[position])
    }

    /// Returns a modifiable declaration for `key`.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::UnknownOption` if no such option exists.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut OptionSpec, OptionsError> {
        let position = self.position(key)?;
        Ok(&mut self.specs[position])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterates declarations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> + '_ {
        self.specs.iter()
    }

    /// Adds alias spellings to a choice option.
    ///
    /// Re-adding an existing alias with the same target is a no-op, so the
    /// operation is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::KindMismatch` if the option is not a choice,
    /// or `OptionsError::ValueNotInSet` if an alias targets a value outside
    /// the option's value set.
    pub fn add_aliases<S: Into<String>>(
        &mut self,
        key: &str,
        aliases: impl IntoIterator<Item = (S, u32)>,
    ) -> Result<(), OptionsError> {
        let spec = self.get_mut(key)?;
        let OptionKind::Choice(choice) = &mut spec.kind else {
            return Err(OptionsError::KindMismatch {
                key: key.to_string(),
                expected: "choice",
            });
        };
        for (alias, value) in aliases {
            if !choice.is_member(value) {
                return Err(OptionsError::ValueNotInSet {
                    key: key.to_string(),
                    value,
                });
            }
            choice.aliases.insert(alias.into(), value);
        }
        Ok(())
    }

    /// Overwrites a choice option's default.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::KindMismatch` if the option is not a choice,
    /// or `OptionsError::ValueNotInSet` if `value` is outside the option's
    /// value set.
    pub fn set_choice_default(&mut self, key: &str, value: u32) -> Result<(), OptionsError> {
        let spec = self.get_mut(key)?;
        let OptionKind::Choice(choice) = &mut spec.kind else {
            return Err(OptionsError::KindMismatch {
                key: key.to_string(),
                expected: "choice",
            });
        };
        if !choice.is_member(value) {
            return Err(OptionsError::ValueNotInSet {
                key: key.to_string(),
                value,
            });
        }
        choice.default = value;
        Ok(())
    }

    /// Resolves every option to its declared default.
    pub fn resolve_defaults(&self) -> ResolvedOptions {
        let mut resolved = ResolvedOptions::default();
        for spec in &self.specs {
            resolved.insert(spec.key, spec.default_value());
        }
        resolved
    }

    /// Resolves option values for one run: defaults first, then
    /// player-supplied text overrides.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::UnknownOption` for an override of a key that
    /// was never registered, or the resolution error for text that does
    /// not name a valid value.
    pub fn resolve<K, V>(
        &self,
        overrides: impl IntoIterator<Item = (K, V)>,
    ) -> Result<ResolvedOptions, OptionsError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut resolved = self.resolve_defaults();
        for (key, text) in overrides {
            let spec = self.get(key.as_ref())?;
            resolved.insert(spec.key, spec.resolve(text.as_ref())?);
        }
        Ok(resolved)
    }

    fn position(&self, key: &str) -> Result<usize, OptionsError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| OptionsError::UnknownOption(key.to_string()))
    }
}
