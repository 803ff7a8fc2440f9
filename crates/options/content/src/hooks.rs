//! Lifecycle hooks the host invokes while loading this world.

use options_core::{FinalizedOptions, OptionRegistry, OptionsError, WorldHooks};

use crate::goal::StarLevelGoal;
use crate::options::{self, GOAL};

/// The MySims world module, handed to the host's option-loading pipeline.
///
/// Only the two option-definition hooks are overridden; this world has no
/// display groupings of its own, so the group hooks fall through to the
/// identity defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimsWorld;

impl WorldHooks for SimsWorld {
    fn before_options_defined(&self, mut registry: OptionRegistry) -> OptionRegistry {
        registry.insert(options::goal());
        registry.insert(options::pc_switch_exclusives());
        registry.insert(options::best_friend_rewards());
        registry.insert(options::uber_sims());
        registry.insert(options::level_5_sims());
        registry
    }

    fn after_options_defined(&self, options: &mut FinalizedOptions) -> Result<(), OptionsError> {
        let aliases =
            StarLevelGoal::all().map(|goal| (<&'static str>::from(goal), goal.value()));
        options.add_aliases(GOAL, aliases)?;
        options.set_choice_default(GOAL, StarLevelGoal::default().value())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use options_core::{
        GroupRegistry, OptionKind, OptionSpec, load_groups, load_options,
    };

    use super::*;
    use crate::options::{
        BEST_FRIEND_REWARDS, GOAL, LEVEL_5_SIMS, PC_SWITCH_EXCLUSIVES, UBER_SIMS,
    };

    const TOGGLE_KEYS: [&str; 4] = [
        PC_SWITCH_EXCLUSIVES,
        BEST_FRIEND_REWARDS,
        UBER_SIMS,
        LEVEL_5_SIMS,
    ];

    #[test]
    fn registers_exactly_the_five_options() {
        let registry = SimsWorld.before_options_defined(OptionRegistry::new());

        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(
            keys,
            [GOAL, PC_SWITCH_EXCLUSIVES, BEST_FRIEND_REWARDS, UBER_SIMS, LEVEL_5_SIMS]
        );

        assert!(matches!(registry.get(GOAL).unwrap().kind, OptionKind::Choice(_)));
        for key in TOGGLE_KEYS {
            assert!(matches!(registry.get(key).unwrap().kind, OptionKind::Toggle(_)), "{key}");
        }
    }

    #[test]
    fn overwrites_colliding_builtins() {
        let mut builtins = OptionRegistry::new();
        builtins.insert(OptionSpec::toggle(GOAL, "Goal", "Host placeholder.", false));

        let registry = SimsWorld.before_options_defined(builtins);
        assert_eq!(registry.len(), 5);
        assert!(registry.get(GOAL).unwrap().as_choice().is_some());
    }

    #[test]
    fn goal_default_and_aliases_after_loading() {
        let options = load_options(&SimsWorld, OptionRegistry::new()).unwrap();
        let choice = options.get(GOAL).unwrap().as_choice().unwrap();

        assert_eq!(choice.default, 2);
        assert_eq!(choice.aliases.len(), 3);
        assert_eq!(choice.aliases.get("star_level_3"), Some(&0));
        assert_eq!(choice.aliases.get("star_level_4"), Some(&1));
        assert_eq!(choice.aliases.get("star_level_5"), Some(&2));
    }

    #[test]
    fn after_options_defined_is_idempotent() {
        let options = load_options(&SimsWorld, OptionRegistry::new()).unwrap();
        let mut twice = options.clone();
        SimsWorld.after_options_defined(&mut twice).unwrap();

        let once = options.get(GOAL).unwrap().as_choice().unwrap();
        let again = twice.get(GOAL).unwrap().as_choice().unwrap();
        assert_eq!(once.aliases, again.aliases);
        assert_eq!(once.default, again.default);
    }

    #[test]
    fn content_toggles_resolve_enabled_by_default() {
        let options = load_options(&SimsWorld, OptionRegistry::new()).unwrap();
        let resolved = options.resolve_defaults();

        for key in TOGGLE_KEYS {
            assert!(resolved.is_enabled(key).unwrap(), "{key}");
        }
        assert_eq!(
            resolved.choice(GOAL).unwrap(),
            StarLevelGoal::StarLevel5.value()
        );
    }

    #[test]
    fn goal_resolves_from_alias_text() {
        let options = load_options(&SimsWorld, OptionRegistry::new()).unwrap();
        let resolved = options.resolve([(GOAL, "star_level_3")]).unwrap();
        assert_eq!(resolved.choice(GOAL).unwrap(), 0);
    }

    #[test]
    fn group_hooks_pass_through_unchanged() {
        let world = SimsWorld;

        assert!(world.before_option_groups_created(GroupRegistry::new()).is_empty());

        let mut base = GroupRegistry::new();
        base.insert("Item Pool", vec![BEST_FRIEND_REWARDS, UBER_SIMS]);
        let passed = world.before_option_groups_created(base);
        assert_eq!(passed.get("Item Pool").unwrap(), [BEST_FRIEND_REWARDS, UBER_SIMS]);

        let options = load_options(&world, OptionRegistry::new()).unwrap();
        let mut host_groups = GroupRegistry::new();
        host_groups.insert("Item Pool", vec![BEST_FRIEND_REWARDS, UBER_SIMS]);
        let built = load_groups(&world, host_groups, &options).unwrap();
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].name, "Item Pool");
        assert_eq!(built[0].options, [BEST_FRIEND_REWARDS, UBER_SIMS]);

        assert!(load_groups(&world, GroupRegistry::new(), &options).unwrap().is_empty());
    }
}
