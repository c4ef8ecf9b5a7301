//! Ability scores

use std::fmt;

use super::{Change, Field, ListenerId, Listeners};

/// Level given to a new attribute
pub const DEFAULT_LEVEL: i64 = 10;

/// An ability score built from a base level plus racial, enhancement and
/// spell bonuses.
///
/// # Examples
/// ```
/// use tabletop::character::Attribute;
///
/// let mut strength = Attribute::new(14);
/// strength.set_racial(2);
/// assert_eq!(strength.current(), 16);
/// assert_eq!(strength.modifier(), 3);
/// ```
#[derive(Debug)]
pub struct Attribute {
    level: i64,
    racial: i64,
    enhancement: i64,
    spell: i64,
    listeners: Listeners,
}

impl Attribute {
    pub fn new(level: i64) -> Self {
        Self {
            level,
            racial: 0,
            enhancement: 0,
            spell: 0,
            listeners: Listeners::new(),
        }
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn racial(&self) -> i64 {
        self.racial
    }

    pub fn enhancement(&self) -> i64 {
        self.enhancement
    }

    pub fn spell(&self) -> i64 {
        self.spell
    }

    pub fn set_level(&mut self, value: i64) -> Change {
        let old = std::mem::replace(&mut self.level, value);
        self.emit(Field::Level, old, value)
    }

    pub fn set_racial(&mut self, value: i64) -> Change {
        let old = std::mem::replace(&mut self.racial, value);
        self.emit(Field::Racial, old, value)
    }

    pub fn set_enhancement(&mut self, value: i64) -> Change {
        let old = std::mem::replace(&mut self.enhancement, value);
        self.emit(Field::Enhancement, old, value)
    }

    pub fn set_spell(&mut self, value: i64) -> Change {
        let old = std::mem::replace(&mut self.spell, value);
        self.emit(Field::Spell, old, value)
    }

    /// Raise the base level
    pub fn add(&mut self, amount: i64) -> Change {
        self.set_level(self.level + amount)
    }

    /// Lower the base level
    pub fn subtract(&mut self, amount: i64) -> Change {
        self.set_level(self.level - amount)
    }

    /// Multiply the base level
    pub fn scale(&mut self, factor: i64) -> Change {
        self.set_level(self.level * factor)
    }

    /// Level with all bonuses applied
    pub fn current(&self) -> i64 {
        self.level + self.racial + self.enhancement + self.spell
    }

    /// Roll modifier, `floor(current / 2) - 5`
    pub fn modifier(&self) -> i64 {
        self.current().div_euclid(2) - 5
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Change) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn emit(&mut self, field: Field, old: i64, new: i64) -> Change {
        let change = Change::new(field, old, new);
        self.listeners.notify(&change);
        change
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.current(), self.modifier())
    }
}
