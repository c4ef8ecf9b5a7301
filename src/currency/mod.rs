//! Currency system
//!
//! Provides:
//! - Four coin denominations with a fixed 100:1 exchange rate
//! - Coin-spec parsing ("4pp 3gp 2sp 1cp")
//! - A normalized, never-negative Money value with borrowing arithmetic

mod coin_spec;
mod denomination;
mod money;

pub use coin_spec::parse_coin_spec;
pub use denomination::{Denomination, EXCHANGE_RATE};
pub use money::{Money, COIN_WEIGHT};
