//! Playable races

use serde::{Deserialize, Serialize};

use super::Ability;

/// Walking speed of a race that doesn't set one
pub const DEFAULT_SPEED: i64 = 30;

fn default_speed() -> i64 {
    DEFAULT_SPEED
}

/// A race with its ability bonuses, speed and perks.
///
/// Every field except `name` may be omitted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub name: String,
    /// Bonus the player may place on any ability
    #[serde(default)]
    pub any: i64,
    #[serde(default)]
    pub strength: i64,
    #[serde(default)]
    pub dexterity: i64,
    #[serde(default)]
    pub constitution: i64,
    #[serde(default)]
    pub intelligence: i64,
    #[serde(default)]
    pub wisdom: i64,
    #[serde(default)]
    pub charisma: i64,
    #[serde(default = "default_speed")]
    pub speed: i64,
    #[serde(default)]
    pub perks: Vec<String>,
}

impl Race {
    /// A race with no bonuses and the default speed
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            any: 0,
            strength: 0,
            dexterity: 0,
            constitution: 0,
            intelligence: 0,
            wisdom: 0,
            charisma: 0,
            speed: DEFAULT_SPEED,
            perks: Vec::new(),
        }
    }

    /// Fixed bonus for one ability
    pub fn bonus(&self, ability: Ability) -> i64 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let race: Race = serde_json::from_str(r#"{"name": "Human"}"#).unwrap();
        assert_eq!(race, Race::new("Human"));
        assert_eq!(race.speed, DEFAULT_SPEED);
    }

    #[test]
    fn test_deserialize_bonuses() {
        let race: Race = serde_json::from_str(
            r#"{"name": "Dwarf", "constitution": 2, "speed": 25, "perks": ["darkvision"]}"#,
        )
        .unwrap();
        assert_eq!(race.bonus(Ability::Constitution), 2);
        assert_eq!(race.bonus(Ability::Strength), 0);
        assert_eq!(race.speed, 25);
        assert_eq!(race.perks, ["darkvision"]);
    }
}
