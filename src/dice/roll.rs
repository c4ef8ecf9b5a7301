//! Roll specifications and their results

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};

use super::parser::parse_roll;

/// Generator used by [`Roll::roll`] when the caller supplies none
static DEFAULT_RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

/// Most dice a single roll may throw
pub const MAX_DICE: u32 = 10_000;

/// A validated dice roll specification, e.g. "4d6H1+2"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    num: u32,
    sides: u32,
    drop_highest: u32,
    drop_lowest: u32,
    add: i32,
}

impl Roll {
    /// A plain roll of `num` dice with `sides` faces
    pub fn new(num: u32, sides: u32) -> Result<Self> {
        Self::with_modifiers(num, sides, 0, 0, 0)
    }

    /// A roll with drop counts and a modifier
    ///
    /// # Errors
    /// `InvalidArgument` when `num` is 0 or above [`MAX_DICE`], `sides` is
    /// below 2, or the drop counts would leave no dice.
    pub fn with_modifiers(
        num: u32,
        sides: u32,
        drop_highest: u32,
        drop_lowest: u32,
        add: i32,
    ) -> Result<Self> {
        if num < 1 {
            return Err(Error::invalid("number of rolls must be positive"));
        }
        if num > MAX_DICE {
            return Err(Error::invalid(format!(
                "number of rolls may not exceed {}, got {}",
                MAX_DICE, num
            )));
        }
        if sides < 2 {
            return Err(Error::invalid("number of sides must be more than 1"));
        }
        if drop_highest >= num {
            return Err(Error::invalid("drop highest must be less than the number of rolls"));
        }
        if drop_lowest >= num {
            return Err(Error::invalid("drop lowest must be less than the number of rolls"));
        }
        if u64::from(drop_highest) + u64::from(drop_lowest) >= u64::from(num) {
            return Err(Error::invalid("can not drop more dice than are rolled"));
        }

        Ok(Self {
            num,
            sides,
            drop_highest,
            drop_lowest,
            add,
        })
    }

    /// Parse a roll-spec
    ///
    /// # Examples
    /// ```
    /// use tabletop::Roll;
    ///
    /// let roll = Roll::parse("4d6H1+2").unwrap();
    /// assert_eq!(roll.num(), 4);
    /// assert_eq!(roll.drop_highest(), 1);
    /// assert_eq!(roll.add(), 2);
    /// assert_eq!(roll.to_string(), "4d6H1+2");
    /// ```
    pub fn parse(data: &str) -> Result<Self> {
        parse_roll(data)
    }

    /// Number of dice rolled
    pub fn num(&self) -> u32 {
        self.num
    }

    /// Faces per die
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Highest results discarded
    pub fn drop_highest(&self) -> u32 {
        self.drop_highest
    }

    /// Lowest results discarded
    pub fn drop_lowest(&self) -> u32 {
        self.drop_lowest
    }

    /// Modifier added to the kept dice
    pub fn add(&self) -> i32 {
        self.add
    }

    /// Dice that count toward the total
    pub fn kept(&self) -> u32 {
        self.num - self.drop_highest - self.drop_lowest
    }

    /// Get the minimum possible result
    pub fn min(&self) -> i64 {
        self.kept() as i64 + self.add as i64
    }

    /// Get the maximum possible result
    pub fn max(&self) -> i64 {
        self.kept() as i64 * self.sides as i64 + self.add as i64
    }

    /// Roll using the shared default generator
    pub fn roll(&self) -> RollValue {
        let mut rng = DEFAULT_RNG.lock();
        self.roll_with(&mut *rng)
    }

    /// Roll using the given generator.
    ///
    /// Without drops the results stay in the order they were drawn. With
    /// drops they are sorted ascending before the extremes are removed.
    pub fn roll_with<R: Rng>(&self, rng: &mut R) -> RollValue {
        let mut rolls: Vec<u32> = (0..self.num)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();

        if self.drop_lowest == 0 && self.drop_highest == 0 {
            return RollValue::new(rolls, Vec::new(), Vec::new(), self.add);
        }

        rolls.sort();
        let dropped_high = rolls.split_off((self.num - self.drop_highest) as usize);
        let kept = rolls.split_off(self.drop_lowest as usize);
        RollValue::new(kept, rolls, dropped_high, self.add)
    }
}

impl FromStr for Roll {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_roll(s)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)?;
        if self.drop_highest > 0 {
            write!(f, "H{}", self.drop_highest)?;
        }
        if self.drop_lowest > 0 {
            write!(f, "L{}", self.drop_lowest)?;
        }
        if self.add > 0 {
            write!(f, "+{}", self.add)?;
        } else if self.add < 0 {
            write!(f, "{}", self.add)?;
        }
        Ok(())
    }
}

/// The outcome of one evaluation of a [`Roll`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollValue {
    rolls: Vec<u32>,
    dropped_low: Vec<u32>,
    dropped_high: Vec<u32>,
    add: i32,
    value: i64,
}

impl RollValue {
    fn new(rolls: Vec<u32>, dropped_low: Vec<u32>, dropped_high: Vec<u32>, add: i32) -> Self {
        let value = rolls.iter().map(|r| *r as i64).sum::<i64>() + add as i64;
        Self {
            rolls,
            dropped_low,
            dropped_high,
            add,
            value,
        }
    }

    /// Sum of kept dice plus the modifier
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Kept dice
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    pub fn dropped_low(&self) -> &[u32] {
        &self.dropped_low
    }

    pub fn dropped_high(&self) -> &[u32] {
        &self.dropped_high
    }

    pub fn add(&self) -> i32 {
        self.add
    }
}
