//! World lifecycle hooks and the host's option-loading pipeline.
//!
//! While a world definition is loaded, the host calls the four extension
//! points of [`WorldHooks`] exactly once each, in a fixed total order:
//!
//! 1. [`WorldHooks::before_options_defined`] — contribute declarations to
//!    the pre-merge registry (built-ins may already be present).
//! 2. The host merges the registry into a [`FinalizedOptions`] set.
//! 3. [`WorldHooks::after_options_defined`] — adjust the merged set
//!    (alias tables, defaults).
//! 4. [`WorldHooks::before_option_groups_created`] — contribute display
//!    groupings.
//! 5. [`WorldHooks::after_option_groups_created`] — observe or reorder the
//!    constructed groups.
//!
//! Every method has a default implementation that leaves its input
//! untouched, so a world overrides only the points it actually uses.
//! [`load_options`] and [`load_groups`] are the pipeline itself; tests and
//! embedding hosts drive worlds through them.

use tracing::debug;

use crate::error::OptionsError;
use crate::groups::{GroupRegistry, OptionGroup};
use crate::registry::{FinalizedOptions, OptionRegistry};

/// Extension points a world module implements to register its options.
///
/// Registration is single-threaded and synchronous; each method is called
/// once per generation run. Methods take the registry by value and return
/// it, so contribution is an explicit build step rather than hidden
/// in-place mutation.
pub trait WorldHooks {
    /// Called before the option set is merged. The registry may already
    /// contain host built-ins; inserting an existing key overwrites it.
    fn before_options_defined(&self, options: OptionRegistry) -> OptionRegistry {
        options
    }

    /// Called after the host merged the option set. Adjustments that
    /// reference unknown keys or values surface as host-level errors.
    ///
    /// # Errors
    ///
    /// Returns any [`OptionsError`] produced by mutating the merged set.
    fn after_options_defined(&self, _options: &mut FinalizedOptions) -> Result<(), OptionsError> {
        Ok(())
    }

    /// Called before display groups are constructed.
    fn before_option_groups_created(&self, groups: GroupRegistry) -> GroupRegistry {
        groups
    }

    /// Called with the fully constructed display groups.
    fn after_option_groups_created(&self, groups: Vec<OptionGroup>) -> Vec<OptionGroup> {
        groups
    }
}

/// Runs the option-definition phase for one world.
///
/// `builtins` is the host's pre-populated registry (may be empty). The
/// world contributes declarations, the host merges, and the world's
/// post-merge adjustments are applied.
///
/// # Errors
///
/// Propagates any [`OptionsError`] from the world's post-merge hook.
pub fn load_options<W: WorldHooks + ?Sized>(
    world: &W,
    builtins: OptionRegistry,
) -> Result<FinalizedOptions, OptionsError> {
    let registry = world.before_options_defined(builtins);
    debug!(
        target: "options::hooks",
        count = registry.len(),
        "world options registered"
    );

    let mut options = registry.finalize();
    world.after_options_defined(&mut options)?;
    debug!(
        target: "options::hooks",
        count = options.len(),
        "option set finalized"
    );

    Ok(options)
}

/// Runs the group-creation phase for one world.
///
/// `base` is the host's pre-populated group mapping (may be empty). Group
/// construction validates member keys against the finalized option set.
///
/// # Errors
///
/// Returns `OptionsError::GroupMemberUnknown` for a group member that was
/// never registered.
pub fn load_groups<W: WorldHooks + ?Sized>(
    world: &W,
    base: GroupRegistry,
    options: &FinalizedOptions,
) -> Result<Vec<OptionGroup>, OptionsError> {
    let registry = world.before_option_groups_created(base);
    let groups = world.after_option_groups_created(registry.build(options)?);
    debug!(
        target: "options::hooks",
        count = groups.len(),
        "option groups created"
    );

    Ok(groups)
}
