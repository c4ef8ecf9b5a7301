//! Characters and creatures

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::{Attribute, Change, Field, ListenerId, Listeners, Points, Race, DEFAULT_SPEED};
use crate::error::{Error, Result};

/// Starting maximum for hit points and magic points
pub const DEFAULT_POOL: i64 = 10;

/// Bounds for a stored initiative roll
pub const INITIATIVE_ROLL_MIN: i64 = 1;
pub const INITIATIVE_ROLL_MAX: i64 = 20;

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Three-letter abbreviation, e.g. "str"
    pub fn abbrev(self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Intelligence => "int",
            Ability::Wisdom => "wis",
            Ability::Charisma => "cha",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

impl FromStr for Ability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ability::ALL
            .into_iter()
            .find(|a| a.abbrev().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid(format!("unknown ability {}", s)))
    }
}

/// What part of an actor changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Ability(Ability),
    Hp,
    Mp,
    Speed,
}

/// A change forwarded to actor-level subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorChange {
    pub target: Target,
    pub change: Change,
}

/// A character or creature.
///
/// Mutations go through the `update_*` methods so actor-level subscribers
/// hear about them.
///
/// # Examples
/// ```
/// use tabletop::character::{Ability, Actor};
///
/// let mut actor = Actor::new("Mira").with_max_dex_mod(5);
/// actor.update_ability(Ability::Dexterity, |dex| dex.set_level(16));
/// assert_eq!(actor.initiative(Some(14)), 3);
/// assert_eq!(actor.init_roll(), 14);
/// ```
#[derive(Debug)]
pub struct Actor {
    name: String,
    race: Option<Race>,
    init_mod: i64,
    init_roll: i64,
    max_dex_mod: i64,
    speed: i64,
    abilities: [Attribute; 6],
    hp: Points,
    mp: Points,
    subscribers: Listeners<ActorChange>,
}

impl Actor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            race: None,
            init_mod: 0,
            init_roll: 0,
            max_dex_mod: 0,
            speed: DEFAULT_SPEED,
            abilities: Default::default(),
            hp: Points::new(DEFAULT_POOL),
            mp: Points::new(DEFAULT_POOL),
            subscribers: Listeners::new(),
        }
    }

    /// Set the race; its speed and fixed ability bonuses are applied
    pub fn with_race(mut self, race: Race) -> Self {
        self.speed = race.speed;
        for ability in Ability::ALL {
            self.abilities[ability.index()].set_racial(race.bonus(ability));
        }
        self.race = Some(race);
        self
    }

    pub fn with_init_mod(mut self, init_mod: i64) -> Self {
        self.init_mod = init_mod;
        self
    }

    /// Cap on the dexterity modifier's contribution to initiative
    pub fn with_max_dex_mod(mut self, max_dex_mod: i64) -> Self {
        self.max_dex_mod = max_dex_mod;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Option<&Race> {
        self.race.as_ref()
    }

    pub fn ability(&self, ability: Ability) -> &Attribute {
        &self.abilities[ability.index()]
    }

    pub fn strength(&self) -> &Attribute {
        self.ability(Ability::Strength)
    }

    pub fn dexterity(&self) -> &Attribute {
        self.ability(Ability::Dexterity)
    }

    pub fn constitution(&self) -> &Attribute {
        self.ability(Ability::Constitution)
    }

    pub fn intelligence(&self) -> &Attribute {
        self.ability(Ability::Intelligence)
    }

    pub fn wisdom(&self) -> &Attribute {
        self.ability(Ability::Wisdom)
    }

    pub fn charisma(&self) -> &Attribute {
        self.ability(Ability::Charisma)
    }

    pub fn hp(&self) -> &Points {
        &self.hp
    }

    pub fn mp(&self) -> &Points {
        &self.mp
    }

    pub fn speed(&self) -> i64 {
        self.speed
    }

    /// Last stored initiative roll, 0 if none
    pub fn init_roll(&self) -> i64 {
        self.init_roll
    }

    /// Mutate one ability and forward the resulting change
    pub fn update_ability<C>(
        &mut self,
        ability: Ability,
        f: impl FnOnce(&mut Attribute) -> C,
    ) -> Option<Change>
    where
        C: Into<Option<Change>>,
    {
        let change = f(&mut self.abilities[ability.index()]).into();
        self.forward(Target::Ability(ability), change)
    }

    /// Mutate hit points and forward the resulting change
    ///
    /// # Examples
    /// ```
    /// use tabletop::character::Actor;
    ///
    /// let mut actor = Actor::new("Bram");
    /// let change = actor.update_hp(|hp| hp.add_current(-4)).unwrap();
    /// assert_eq!((change.old, change.new), (10, 6));
    /// ```
    pub fn update_hp<C>(&mut self, f: impl FnOnce(&mut Points) -> C) -> Option<Change>
    where
        C: Into<Option<Change>>,
    {
        let change = f(&mut self.hp).into();
        self.forward(Target::Hp, change)
    }

    /// Mutate magic points and forward the resulting change
    pub fn update_mp<C>(&mut self, f: impl FnOnce(&mut Points) -> C) -> Option<Change>
    where
        C: Into<Option<Change>>,
    {
        let change = f(&mut self.mp).into();
        self.forward(Target::Mp, change)
    }

    pub fn set_speed(&mut self, speed: i64) -> Change {
        let old = std::mem::replace(&mut self.speed, speed);
        let change = Change::new(Field::Speed, old, speed);
        self.forward(Target::Speed, Some(change));
        change
    }

    /// Initiative bonus.
    ///
    /// A supplied roll is clamped to 1..=20 and stored. The result is
    /// `init_mod + min(dex modifier, max_dex_mod)`.
    pub fn initiative(&mut self, roll: Option<i64>) -> i64 {
        if let Some(roll) = roll {
            self.init_roll = roll.clamp(INITIATIVE_ROLL_MIN, INITIATIVE_ROLL_MAX);
        }
        self.init_mod + self.dexterity().modifier().min(self.max_dex_mod)
    }

    /// Subscribe to every change made through this actor
    pub fn subscribe(&mut self, callback: impl FnMut(&ActorChange) + 'static) -> ListenerId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn forward(&mut self, target: Target, change: Option<Change>) -> Option<Change> {
        let change = change?;
        trace!("{} {:?} {}", self.name, target, change);
        self.subscribers.notify(&ActorChange { target, change });
        Some(change)
    }
}
