//! Display groups.
//!
//! Groups bucket options for host UIs and generated documentation. They
//! have no effect on generation.

use std::collections::HashMap;

use crate::error::OptionsError;
use crate::registry::FinalizedOptions;

/// Pre-build group mapping: group name to ordered option keys.
///
/// Same shape as [`crate::OptionRegistry`]: insertion-ordered with an
/// index, last insert wins on name collision.
#[derive(Clone, Debug, Default)]
pub struct GroupRegistry {
    groups: Vec<(String, Vec<&'static str>)>,
    index: HashMap<String, usize>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a group's member keys, replacing any existing definition.
    pub fn insert(&mut self, name: impl Into<String>, keys: Vec<&'static str>) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.groups[position].1 = keys,
            None => {
                self.index.insert(name.clone(), self.groups.len());
                self.groups.push((name, keys));
            }
        }
    }

    /// Appends a key to a group, creating the group if absent.
    pub fn add(&mut self, name: impl Into<String>, key: &'static str) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.groups[position].1.push(key),
            None => self.insert(name, vec![key]),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[&'static str]> {
        self.index
            .get(name)
            .map(|&position| self.groups[position].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The host's build step: constructs display groups, checking that
    /// every member key exists in the finalized option set.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::GroupMemberUnknown` for a member key that was
    /// never registered.
    pub fn build(self, options: &FinalizedOptions) -> Result<Vec<OptionGroup>, OptionsError> {
        self.groups
            .into_iter()
            .map(|(name, keys)| {
                for key in &keys {
                    if !options.contains(key) {
                        return Err(OptionsError::GroupMemberUnknown {
                            group: name.clone(),
                            key: key.to_string(),
                        });
                    }
                }
                Ok(OptionGroup {
                    name,
                    options: keys,
                })
            })
            .collect()
    }
}

/// A named display bucket of option keys, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionGroup {
    pub name: String,
    pub options: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OptionRegistry;
    use crate::spec::OptionSpec;

    fn finalized() -> FinalizedOptions {
        let mut registry = OptionRegistry::new();
        registry.insert(OptionSpec::toggle("traps", "Traps", "", false));
        registry.insert(OptionSpec::toggle("music", "Music", "", true));
        registry.finalize()
    }

    #[test]
    fn build_preserves_group_and_member_order() {
        let mut groups = GroupRegistry::new();
        groups.insert("Pool", vec!["traps", "music"]);
        groups.add("Cosmetic", "music");

        let built = groups.build(&finalized()).unwrap();
        assert_eq!(built.len(), 2);
        assert_eq!(built[0].name, "Pool");
        assert_eq!(built[0].options, ["traps", "music"]);
        assert_eq!(built[1].options, ["music"]);
    }

    #[test]
    fn build_rejects_unknown_members() {
        let mut groups = GroupRegistry::new();
        groups.insert("Pool", vec!["traps", "ghosts"]);

        assert_eq!(
            groups.build(&finalized()),
            Err(OptionsError::GroupMemberUnknown {
                group: "Pool".to_string(),
                key: "ghosts".to_string(),
            })
        );
    }

    #[test]
    fn empty_registry_builds_no_groups() {
        assert!(GroupRegistry::new().build(&finalized()).unwrap().is_empty());
    }
}
