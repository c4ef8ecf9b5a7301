//! tabletop - tabletop RPG toolkit
//!
//! Coin-spec parsing and normalized money, dice roll parsing and evaluation,
//! an item catalog and a character model.

pub mod character;
pub mod config;
pub mod currency;
pub mod dice;
pub mod error;
pub mod items;
pub mod scanner;

pub use config::{Config, Verbosity};
pub use currency::{parse_coin_spec, Denomination, Money};
pub use dice::{parse_roll, Roll, RollValue, MAX_DICE};
pub use error::{Error, Result};
pub use scanner::Scanner;
