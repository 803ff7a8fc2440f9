//! Option declarations for the MySims world.
//!
//! Descriptions are player-facing and double as the contract for the
//! host's item-pool builder: a disabled toggle leaves its items in the
//! pool as filler rather than removing them, with the one exception
//! documented on [`level_5_sims`]. The soft dependencies between
//! `uber_sims`/`level_5_sims` and `best_friend_rewards` are honored by the
//! pool builder, not validated here.

use options_core::{NamedValue, OptionSpec};

use crate::goal::StarLevelGoal;

pub const GOAL: &str = "goal";
pub const PC_SWITCH_EXCLUSIVES: &str = "pc_switch_exclusives";
pub const BEST_FRIEND_REWARDS: &str = "best_friend_rewards";
pub const UBER_SIMS: &str = "uber_sims";
pub const LEVEL_5_SIMS: &str = "level_5_sims";

/// Victory condition tier. Declared with the lowest tier as the default;
/// the post-merge hook raises it to the full game and registers the alias
/// spellings.
pub fn goal() -> OptionSpec {
    OptionSpec::choice(
        GOAL,
        "Star Level Goal",
        "Choose your goal.",
        StarLevelGoal::all()
            .map(|goal| NamedValue::new(<&'static str>::from(goal), goal.value()))
            .to_vec(),
        StarLevelGoal::StarLevel3.value(),
    )
}

pub fn pc_switch_exclusives() -> OptionSpec {
    OptionSpec::toggle(
        PC_SWITCH_EXCLUSIVES,
        "PC/Switch Exclusives",
        "Include PC/Switch-exclusive content (Gardens Essences and Commercial Sims). \
         If disabled, the exclusive Essences and Sims remain in the pool as filler items.",
        true,
    )
}

pub fn best_friend_rewards() -> OptionSpec {
    OptionSpec::toggle(
        BEST_FRIEND_REWARDS,
        "Best Friend Rewards",
        "Add Best Friend rewards to the pool, including Commercial Sims'. \
         If disabled, Townie Sims remain in the pool as filler items.",
        true,
    )
}

pub fn uber_sims() -> OptionSpec {
    OptionSpec::toggle(
        UBER_SIMS,
        "Uber Sims",
        "Include Uber Sims' Best Friend rewards. \
         If disabled, Uber Sims remain in the pool as filler items. \
         Enabling this while best_friend_rewards is disabled keeps Uber Sims rewards in logic.",
        true,
    )
}

pub fn level_5_sims() -> OptionSpec {
    OptionSpec::toggle(
        LEVEL_5_SIMS,
        "Level 5 Sims",
        "Include Level 5 Townie Sims' Best Friend rewards. \
         If disabled, the Sims unlocked at level 5 remain in the pool as filler items. \
         If best_friend_rewards is disabled, Level 5 Sims rewards are excluded regardless \
         of this option.",
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_declares_the_three_tiers() {
        let spec = goal();
        let choice = spec.as_choice().unwrap();

        let names: Vec<_> = choice.values.iter().map(|named| named.name.as_str()).collect();
        assert_eq!(names, ["star_level_3", "star_level_4", "star_level_5"]);
        assert_eq!(choice.default, 0);
        assert!(choice.aliases.is_empty());
    }

    #[test]
    fn toggles_default_on() {
        for spec in [
            pc_switch_exclusives(),
            best_friend_rewards(),
            uber_sims(),
            level_5_sims(),
        ] {
            let toggle = spec.as_toggle().unwrap_or_else(|| panic!("{} is not a toggle", spec.key));
            assert!(toggle.default, "{}", spec.key);
        }
    }
}
