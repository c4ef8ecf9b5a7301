//! Dice rolling system
//!
//! Parses and rolls dice notation like "2d6+3", "1d20", "4d6L1" (drop the
//! lowest) and "5d10H1L1-2" (drop the highest and lowest).

mod parser;
mod roll;

pub use parser::parse_roll;
pub use roll::{Roll, RollValue, MAX_DICE};
