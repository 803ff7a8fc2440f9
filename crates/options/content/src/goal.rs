//! Victory condition tiers.

/// The star level a player must reach to complete their run.
///
/// Discriminants are the values the host stores for the `goal` choice;
/// the textual forms double as the alias spellings players may write.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum StarLevelGoal {
    /// Reach star level 3.
    #[strum(serialize = "star_level_3")]
    StarLevel3 = 0,
    /// Reach star level 4.
    #[strum(serialize = "star_level_4")]
    StarLevel4 = 1,
    /// Reach star level 5 (the full game).
    #[default]
    #[strum(serialize = "star_level_5")]
    StarLevel5 = 2,
}

impl StarLevelGoal {
    /// Returns all goals in ascending tier order.
    pub const fn all() -> [StarLevelGoal; 3] {
        [
            StarLevelGoal::StarLevel3,
            StarLevelGoal::StarLevel4,
            StarLevelGoal::StarLevel5,
        ]
    }

    /// Returns the goal as the choice value the host stores.
    pub const fn value(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn textual_forms_round_trip() {
        for goal in StarLevelGoal::all() {
            let name: &'static str = goal.into();
            assert_eq!(StarLevelGoal::from_str(name).unwrap(), goal);
        }
        assert_eq!(
            StarLevelGoal::from_str("STAR_LEVEL_4").unwrap(),
            StarLevelGoal::StarLevel4
        );
        assert!(StarLevelGoal::from_str("star_level_6").is_err());
    }

    #[test]
    fn values_and_default() {
        assert_eq!(StarLevelGoal::StarLevel3.value(), 0);
        assert_eq!(StarLevelGoal::StarLevel4.value(), 1);
        assert_eq!(StarLevelGoal::StarLevel5.value(), 2);
        assert_eq!(StarLevelGoal::default(), StarLevelGoal::StarLevel5);
    }
}
