//! The Money value type
//!
//! Money is split into four coin types: platinum, gold, silver and copper
//! pieces. A value is always normalized (cp, sp and gp stay below 100) and
//! never negative. Assigning a negative count to a denomination borrows from
//! the next higher one; borrowing past platinum fails.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::coin_spec::parse_coin_spec;
use super::denomination::{Denomination, EXCHANGE_RATE};

/// Weight of a single coin, in pounds
pub const COIN_WEIGHT: f64 = 0.02;

/// Copper counts are rounded to this many parts per piece before the
/// fraction is dropped (0.29 * 100 == 28.999...)
const MAGNITUDE_PRECISION: f64 = 1e9;

/// A normalized amount of currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "MoneyInput")]
pub struct Money {
    /// Counts indexed by `Denomination::index`
    coins: [u64; 4],
}

/// Accepted shapes for a Money value in JSON
#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyInput {
    Coins(BTreeMap<String, i64>),
    Magnitude(f64),
    Spec(String),
}

impl TryFrom<MoneyInput> for Money {
    type Error = Error;

    fn try_from(input: MoneyInput) -> Result<Self> {
        match input {
            MoneyInput::Coins(coins) => Money::from_coins(coins),
            MoneyInput::Magnitude(magnitude) => Money::from_magnitude(magnitude),
            MoneyInput::Spec(spec) => spec.parse(),
        }
    }
}

impl Money {
    /// Build from any accepted JSON shape: a coin mapping, a magnitude or a
    /// coin-spec string.
    ///
    /// Errors from the chosen shape keep their kind, so a malformed coin-spec
    /// is a parse error.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let input: MoneyInput = serde_json::from_value(value)
            .map_err(|_| Error::invalid("money must be a coin mapping, a number or a coin-spec"))?;
        Money::try_from(input)
    }

    /// Zero money
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw, possibly unnormalized counts.
    ///
    /// Counts are assigned platinum first, then gold, silver and copper,
    /// each through the borrowing setter. Negative counts borrow upward.
    pub fn from_counts(cp: i64, sp: i64, gp: i64, pp: i64) -> Result<Self> {
        Self::normalized([cp as i128, sp as i128, gp as i128, pp as i128])
    }

    /// Build from a mapping of `"cp" | "sp" | "gp" | "pp"` to counts.
    ///
    /// # Examples
    /// ```
    /// use tabletop::Money;
    ///
    /// let m = Money::from_coins([("gp", 101)]).unwrap();
    /// assert_eq!((m.pp(), m.gp(), m.sp(), m.cp()), (1, 1, 0, 0));
    ///
    /// assert!(Money::from_coins([("something", 1)]).is_err());
    /// ```
    pub fn from_coins<I, K>(coins: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut counts = [0i128; 4];
        let mut unknown = Vec::new();

        for (key, count) in coins {
            let key = key.as_ref();
            match Denomination::from_abbrev(key) {
                Some(denom) => counts[denom.index()] += count as i128,
                None => unknown.push(key.to_string()),
            }
        }

        if !unknown.is_empty() {
            return Err(Error::invalid(format!(
                "unknown keyword arguments: {}",
                unknown.join(", ")
            )));
        }

        Self::normalized(counts)
    }

    /// Build from a magnitude where 1.0 is one silver piece.
    ///
    /// The magnitude is multiplied by 100 and assigned to copper, with any
    /// fraction of a copper piece truncated. The product is first rounded to
    /// nine decimal places so binary noise like `0.29 * 100 == 28.999...`
    /// still yields 29 cp.
    ///
    /// # Examples
    /// ```
    /// use tabletop::Money;
    ///
    /// let m = Money::from_magnitude(10101.01).unwrap();
    /// assert_eq!((m.pp(), m.gp(), m.sp(), m.cp()), (1, 1, 1, 1));
    /// assert!(Money::from_magnitude(-0.001).is_err());
    /// ```
    pub fn from_magnitude(magnitude: f64) -> Result<Self> {
        if !magnitude.is_finite() {
            return Err(Error::invalid(format!("money value must be finite, got {}", magnitude)));
        }
        if magnitude < 0.0 {
            return Err(Error::invalid("money value may not be negative"));
        }

        let scaled = magnitude * EXCHANGE_RATE as f64;
        let copper = ((scaled * MAGNITUDE_PRECISION).round() / MAGNITUDE_PRECISION).floor();
        if copper >= u64::MAX as f64 {
            return Err(Error::invalid(format!("money value {} out of range", magnitude)));
        }

        Self::normalized([copper as i128, 0, 0, 0])
    }

    fn normalized(counts: [i128; 4]) -> Result<Self> {
        let mut money = Self::default();
        for denom in Denomination::DESCENDING {
            money.assign(denom, counts[denom.index()])?;
        }
        Ok(money)
    }

    /// Copper pieces
    pub fn cp(&self) -> u64 {
        self.coins[Denomination::Copper.index()]
    }

    /// Silver pieces
    pub fn sp(&self) -> u64 {
        self.coins[Denomination::Silver.index()]
    }

    /// Gold pieces
    pub fn gp(&self) -> u64 {
        self.coins[Denomination::Gold.index()]
    }

    /// Platinum pieces
    pub fn pp(&self) -> u64 {
        self.coins[Denomination::Platinum.index()]
    }

    /// Count of a single denomination
    pub fn get(&self, denom: Denomination) -> u64 {
        self.coins[denom.index()]
    }

    /// Set a denomination's count, cascading as needed.
    ///
    /// A count of 100 or more carries the excess into the next higher
    /// denomination. A negative count borrows from it instead. If the borrow
    /// reaches past platinum the call fails and `self` is unchanged.
    ///
    /// A debt of `owed` borrows `ceil(owed / 100)` higher coins, so an exact
    /// multiple of 100 borrows no extra coin: -200 cp takes 2 sp and leaves
    /// 0 cp, not 3 sp and 100 cp.
    ///
    /// # Examples
    /// ```
    /// use tabletop::{Denomination, Money};
    ///
    /// let mut m = Money::from_coins([("pp", 1)]).unwrap();
    /// m.set(Denomination::Copper, -1).unwrap();
    /// assert_eq!((m.pp(), m.gp(), m.sp(), m.cp()), (0, 99, 99, 99));
    ///
    /// assert!(m.set(Denomination::Platinum, -1).is_err());
    /// ```
    pub fn set(&mut self, denom: Denomination, value: i64) -> Result<()> {
        let mut next = *self;
        next.assign(denom, value as i128)?;
        *self = next;
        Ok(())
    }

    /// Recursive setter; may leave `self` partially updated on error
    fn assign(&mut self, denom: Denomination, value: i128) -> Result<()> {
        let rate = EXCHANGE_RATE as i128;
        let idx = denom.index();

        if value < 0 {
            let higher = denom
                .higher()
                .ok_or_else(|| Error::invalid("money value may not be negative"))?;
            let owed = -value;
            let borrow = (owed + rate - 1) / rate;
            let above = self.coins[higher.index()] as i128 - borrow;
            self.assign(higher, above)?;
            self.coins[idx] = (borrow * rate - owed) as u64;
            return Ok(());
        }

        match denom.higher() {
            Some(higher) if value >= rate => {
                let above = self.coins[higher.index()] as i128 + value / rate;
                self.assign(higher, above)?;
                self.coins[idx] = (value % rate) as u64;
            }
            _ => {
                self.coins[idx] = u64::try_from(value)
                    .map_err(|_| Error::invalid(format!("{} count out of range", denom)))?;
            }
        }
        Ok(())
    }

    /// Total worth in copper pieces
    pub fn total_copper(&self) -> u128 {
        Denomination::ASCENDING
            .iter()
            .map(|d| self.get(*d) as u128 * d.copper_value() as u128)
            .sum()
    }

    /// Worth as a magnitude (1.0 == one silver piece)
    pub fn magnitude(&self) -> f64 {
        self.total_copper() as f64 / EXCHANGE_RATE as f64
    }

    /// Whether every denomination is zero
    pub fn is_zero(&self) -> bool {
        self.coins.iter().all(|c| *c == 0)
    }

    /// Number of coins
    pub fn coin_count(&self) -> u64 {
        self.coins.iter().sum()
    }

    /// Weight of the coins, in pounds
    pub fn weight(&self) -> f64 {
        self.coin_count() as f64 * COIN_WEIGHT
    }

    /// Non-zero denominations and their counts
    pub fn to_map(&self) -> BTreeMap<Denomination, u64> {
        Denomination::ASCENDING
            .into_iter()
            .filter(|d| self.get(*d) != 0)
            .map(|d| (d, self.get(d)))
            .collect()
    }

    /// Sum of two amounts
    pub fn checked_add(&self, rhs: &Money) -> Result<Money> {
        Self::normalized(self.combine(rhs, |a, b| a + b))
    }

    /// Difference of two amounts; fails if `rhs` is worth more than `self`
    ///
    /// # Examples
    /// ```
    /// use tabletop::Money;
    ///
    /// let purse: Money = "1 gp".parse().unwrap();
    /// let price: Money = "3 sp 50 cp".parse().unwrap();
    /// assert_eq!(purse.checked_sub(&price).unwrap().to_string(), "96 sp 50 cp");
    /// assert!(price.checked_sub(&purse).is_err());
    /// ```
    pub fn checked_sub(&self, rhs: &Money) -> Result<Money> {
        Self::normalized(self.combine(rhs, |a, b| a - b))
            .map_err(|_| Error::invalid(format!("can not subtract {} from {}", rhs, self)))
    }

    /// Each denomination multiplied by `factor`
    pub fn checked_mul(&self, factor: u64) -> Result<Money> {
        let factor = factor as i128;
        let mut counts = [0i128; 4];
        for (slot, coins) in counts.iter_mut().zip(self.coins) {
            *slot = (coins as i128)
                .checked_mul(factor)
                .ok_or_else(|| Error::invalid(format!("{} times {} is out of range", self, factor)))?;
        }
        Self::normalized(counts)
    }

    /// Divide by `divisor`, carrying each remainder into the next lower
    /// denomination. Fractions of a copper piece are dropped.
    pub fn checked_div(&self, divisor: u64) -> Result<Money> {
        if divisor == 0 {
            return Err(Error::invalid("can not divide money by zero"));
        }

        let divisor = divisor as u128;
        let mut coins = [0u64; 4];
        let mut remainder = 0u128;
        for denom in Denomination::DESCENDING {
            let total = remainder * EXCHANGE_RATE as u128 + self.get(denom) as u128;
            // Below platinum the quotient is < 100 since remainder < divisor
            coins[denom.index()] = (total / divisor) as u64;
            remainder = total % divisor;
        }
        Ok(Money { coins })
    }

    /// Add `rhs` in place
    pub fn deposit(&mut self, rhs: &Money) -> Result<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// Subtract `rhs` in place; `self` is unchanged on failure
    pub fn withdraw(&mut self, rhs: &Money) -> Result<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    fn combine(&self, rhs: &Money, op: impl Fn(i128, i128) -> i128) -> [i128; 4] {
        let mut out = [0i128; 4];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = op(self.coins[i] as i128, rhs.coins[i] as i128);
        }
        out
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_copper().cmp(&other.total_copper())
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<f64> for Money {
    fn eq(&self, other: &f64) -> bool {
        self.magnitude() == *other
    }
}

impl PartialOrd<f64> for Money {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.magnitude().partial_cmp(other)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (cp, sp, gp, pp) = parse_coin_spec(s)?;
        Self::normalized([cp as i128, sp as i128, gp as i128, pp as i128])
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Denomination::DESCENDING
            .iter()
            .filter(|d| self.get(**d) != 0)
            .map(|d| format!("{} {}", self.get(*d), d))
            .collect();

        if parts.is_empty() {
            write!(f, "0 gp")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let coins: Vec<Denomination> = Denomination::DESCENDING
            .into_iter()
            .filter(|d| self.get(*d) != 0)
            .collect();

        let mut map = serializer.serialize_map(Some(coins.len()))?;
        for denom in coins {
            map.serialize_entry(denom.abbrev(), &self.get(denom))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(m: &Money) -> (u64, u64, u64, u64) {
        (m.pp(), m.gp(), m.sp(), m.cp())
    }

    #[test]
    fn test_init_single_denominations() {
        assert_eq!(parts(&Money::from_coins([("pp", 10)]).unwrap()), (10, 0, 0, 0));
        assert_eq!(parts(&Money::from_coins([("gp", 10)]).unwrap()), (0, 10, 0, 0));
        assert_eq!(parts(&Money::from_coins([("sp", 10)]).unwrap()), (0, 0, 10, 0));
        assert_eq!(parts(&Money::from_coins([("cp", 10)]).unwrap()), (0, 0, 0, 10));
    }

    #[test]
    fn test_init_overflow() {
        assert_eq!(parts(&Money::from_coins([("gp", 101)]).unwrap()), (1, 1, 0, 0));
        assert_eq!(parts(&Money::from_coins([("sp", 101)]).unwrap()), (0, 1, 1, 0));
        assert_eq!(parts(&Money::from_coins([("cp", 101)]).unwrap()), (0, 0, 1, 1));
        assert_eq!(parts(&Money::from_coins([("cp", 100)]).unwrap()), (0, 0, 1, 0));
    }

    #[test]
    fn test_init_all() {
        let m = Money::from_coins([("cp", 50), ("sp", 50), ("gp", 50), ("pp", 50)]).unwrap();
        assert_eq!(parts(&m), (50, 50, 50, 50));
    }

    #[test]
    fn test_init_all_overflow() {
        let m = Money::from_coins([("cp", 101), ("sp", 101), ("gp", 101), ("pp", 101)]).unwrap();
        assert_eq!(parts(&m), (102, 2, 2, 1));
    }

    #[test]
    fn test_init_multi_level_cascade() {
        let m = Money::from_coins([("cp", 1_010_101)]).unwrap();
        assert_eq!(parts(&m), (1, 1, 1, 1));
    }

    #[test]
    fn test_init_negative() {
        for key in ["pp", "gp", "sp", "cp"] {
            let err = Money::from_coins([(key, -1)]).unwrap_err();
            assert!(err.is_invalid_argument(), "{} accepted -1", key);
        }
        assert!(Money::from_coins([("pp", -1), ("gp", -1), ("sp", -1), ("cp", -1)]).is_err());
    }

    #[test]
    fn test_init_valid_borrow() {
        let m = Money::from_coins([("pp", 1), ("gp", 0), ("sp", 0), ("cp", -1)]).unwrap();
        assert_eq!(parts(&m), (0, 99, 99, 99));
    }

    #[test]
    fn test_borrow_exact_hundreds() {
        let m = Money::from_counts(-200, 0, 5, 0).unwrap();
        assert_eq!(parts(&m), (0, 4, 98, 0));
        assert_eq!(m.total_copper(), 5 * 10_000 - 200);
    }

    #[test]
    fn test_init_extra_keys() {
        let err = Money::from_coins([("something", 1)]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("something"));
    }

    #[test]
    fn test_init_numeric() {
        assert_eq!(parts(&Money::from_magnitude(1.01).unwrap()), (0, 0, 1, 1));
        assert_eq!(parts(&Money::from_magnitude(10101.01).unwrap()), (1, 1, 1, 1));
        assert_eq!(parts(&Money::from_magnitude(0.29).unwrap()), (0, 0, 0, 29));
        assert!(Money::from_magnitude(0.001).unwrap().is_zero());
        // just under one copper stays under it
        assert!(Money::from_magnitude(0.0099999999).unwrap().is_zero());
        assert_eq!(parts(&Money::from_magnitude(0.0199999).unwrap()), (0, 0, 0, 1));
    }

    #[test]
    fn test_init_numeric_negative() {
        for value in [-10000.0, -100.0, -1.0, -0.01, -0.001] {
            assert!(Money::from_magnitude(value).unwrap_err().is_invalid_argument());
        }
        assert!(Money::from_magnitude(f64::NAN).is_err());
        assert!(Money::from_magnitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_str() {
        let m: Money = "4pp 3gp 2sp 1cp".parse().unwrap();
        assert_eq!(parts(&m), (4, 3, 2, 1));

        let m: Money = "250 cp".parse().unwrap();
        assert_eq!(parts(&m), (0, 0, 2, 50));

        assert!("1 dollar".parse::<Money>().unwrap_err().is_parse());
    }

    #[test]
    fn test_set_failure_leaves_value_unchanged() {
        let mut m = Money::from_coins([("sp", 5)]).unwrap();
        assert!(m.set(Denomination::Copper, -1000).is_err());
        assert_eq!(parts(&m), (0, 0, 5, 0));
    }

    #[test]
    fn test_weight() {
        let m = Money::from_coins([("gp", 10), ("sp", 40)]).unwrap();
        assert!((m.weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new().to_string(), "0 gp");
        assert_eq!(
            Money::from_counts(1, 0, 3, 2).unwrap().to_string(),
            "2 pp 3 gp 1 cp"
        );
    }

    #[test]
    fn test_to_map_skips_zero() {
        let m = Money::from_coins([("gp", 3), ("cp", 7)]).unwrap();
        let map = m.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Denomination::Gold], 3);
        assert_eq!(map[&Denomination::Copper], 7);
    }

    #[test]
    fn test_ordering_uses_uniform_exchange_rate() {
        let gold: Money = "1 gp".parse().unwrap();
        let silver: Money = "99 sp".parse().unwrap();
        let platinum: Money = "1 pp".parse().unwrap();
        assert!(silver < gold);
        assert!(gold < platinum);
        assert_eq!(gold.total_copper(), 10_000);
        assert!(gold == 100.0);
        assert!(platinum > 9_999.0);
    }

    #[test]
    fn test_add_sub() {
        let a: Money = "1 pp 50 gp".parse().unwrap();
        let b: Money = "60 gp 1 cp".parse().unwrap();

        let sum = a.checked_add(&b).unwrap();
        assert_eq!(parts(&sum), (2, 10, 0, 1));

        let diff = sum.checked_sub(&b).unwrap();
        assert_eq!(diff, a);

        assert!(b.checked_sub(&sum).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_deposit_withdraw() {
        let mut purse: Money = "5 gp".parse().unwrap();
        let price: Money = "2 gp 50 sp".parse().unwrap();

        purse.withdraw(&price).unwrap();
        assert_eq!(parts(&purse), (0, 2, 50, 0));

        // Insufficient funds leaves the purse alone
        let big: Money = "1 pp".parse().unwrap();
        assert!(purse.withdraw(&big).is_err());
        assert_eq!(parts(&purse), (0, 2, 50, 0));

        purse.deposit(&big).unwrap();
        assert_eq!(parts(&purse), (1, 2, 50, 0));
    }

    #[test]
    fn test_mul_div() {
        let m: Money = "3 gp 50 sp".parse().unwrap();
        assert_eq!(parts(&m.checked_mul(3).unwrap()), (0, 10, 50, 0));

        let half = m.checked_div(2).unwrap();
        assert_eq!(parts(&half), (0, 1, 75, 0));

        let third: Money = "1 gp".parse::<Money>().unwrap().checked_div(3).unwrap();
        assert_eq!(parts(&third), (0, 0, 33, 33));

        assert!(m.checked_div(0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_from_json_keeps_error_kind() {
        let m = Money::from_json(serde_json::json!("1 gp 5 sp")).unwrap();
        assert_eq!(parts(&m), (0, 1, 5, 0));
        assert!(Money::from_json(serde_json::json!("3 dollars")).unwrap_err().is_parse());
        assert!(Money::from_json(serde_json::json!(-2.0)).unwrap_err().is_invalid_argument());
        assert!(Money::from_json(serde_json::json!([1, 2])).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_mul_out_of_range() {
        let hoard = Money::from_coins([("pp", i64::MAX), ("pp", i64::MAX)]).unwrap();
        assert_eq!(hoard.pp(), u64::MAX - 1);

        let err = hoard.checked_mul(u64::MAX).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(hoard.checked_mul(2).is_err());
        assert_eq!(hoard.checked_mul(1).unwrap(), hoard);
    }

    #[test]
    fn test_json_shapes() {
        let m: Money = serde_json::from_str(r#"{"gp": 101}"#).unwrap();
        assert_eq!(parts(&m), (1, 1, 0, 0));

        let m: Money = serde_json::from_str("1.01").unwrap();
        assert_eq!(parts(&m), (0, 0, 1, 1));

        let m: Money = serde_json::from_str(r#""2 gp 3 cp""#).unwrap();
        assert_eq!(parts(&m), (0, 2, 0, 3));

        assert!(serde_json::from_str::<Money>(r#"{"pp": "h"}"#).is_err());
        assert!(serde_json::from_str::<Money>(r#"{"pp": -1}"#).is_err());
        assert!(serde_json::from_str::<Money>(r#"{"bogus": 1}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let m = Money::from_counts(7, 0, 12, 3).unwrap();
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json, serde_json::json!({"pp": 3, "gp": 12, "cp": 7}));

        let back: Money = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);

        let text_back: Money = m.to_string().parse().unwrap();
        assert_eq!(text_back, m);
    }
}
