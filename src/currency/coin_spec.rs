//! Coin-spec parser
//!
//! A coin-spec is a sequence of `<int> <unit>` pairs such as
//! `"4pp 3gp 2sp 1cp"` or `"1 pp 2 gp"`. Units are `cp`, `sp`, `gp` and
//! `pp`, matched case-insensitively.

use crate::error::{Error, Result};
use crate::scanner::Scanner;

use super::Denomination;

/// Parse a coin-spec into raw `(cp, sp, gp, pp)` counts.
///
/// Nothing is normalized: `"10000 cp"` yields `(10000, 0, 0, 0)`, and a
/// unit named more than once is summed.
///
/// # Examples
/// ```
/// use tabletop::currency::parse_coin_spec;
///
/// assert_eq!(parse_coin_spec("4pp 3gp 2sp 1cp").unwrap(), (1, 2, 3, 4));
/// assert_eq!(parse_coin_spec("250 cp 1 CP").unwrap(), (251, 0, 0, 0));
/// assert!(parse_coin_spec("1 cp 2").is_err());
/// ```
pub fn parse_coin_spec(data: &str) -> Result<(u64, u64, u64, u64)> {
    let mut coins = [0u64; 4];
    let mut parsed = 0usize;
    let mut scanner = Scanner::new(data);

    while let Some(value) = scanner.next_int(false)? {
        let coin = scanner
            .next_token()
            .ok_or_else(|| Error::parse("value without coin specifier", value.to_string()))?;
        let denom: Denomination = coin.parse()?;

        let slot = &mut coins[denom.index()];
        *slot = slot
            .checked_add(value)
            .ok_or_else(|| Error::parse("coin count out of range", coin))?;
        parsed += 1;
    }

    if parsed == 0 {
        return Err(Error::parse("no coins specified in coin spec", data));
    }

    let [cp, sp, gp, pp] = coins;
    Ok((cp, sp, gp, pp))
}
