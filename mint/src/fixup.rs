//! Hard-coded inflation schedule for the bootstrap years of the network.
//!
//! While the schedule applies, it replaces the bonded-ratio driven
//! inflation adjustment. The inflation calculator owns both the year index
//! (typically blocks since genesis divided by `blocks_per_year`) and the
//! decision of when the schedule stops applying: past the last year, or
//! once the supply reaches [`FIXUP_TOTAL_TOKEN_NUMBER`].

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use shared::dec::Dec;

/// Number of years covered by [`FIXUP_INFLATION`].
pub const FIXUP_YEARS: u64 = 7;

/// Total token supply in the smallest unit (200M tokens, 6 decimals).
pub const FIXUP_TOTAL_TOKEN_NUMBER: u128 = 200_000_000 * 1_000_000;

lazy_static! {
    /// Year index to annual inflation rate.
    pub static ref FIXUP_INFLATION: BTreeMap<u64, Dec> = BTreeMap::from([
        (0, Dec::new_with_prec(300, 4)),
        (1, Dec::new_with_prec(250, 4)),
        (2, Dec::new_with_prec(150, 4)),
        (3, Dec::new_with_prec(125, 4)),
        (4, Dec::new_with_prec(100, 4)),
        (5, Dec::new_with_prec(75, 4)),
        (6, Dec::new_with_prec(0, 4)),
    ]);
}

/// Inflation rate for `year`, `None` once the schedule is over.
pub fn fixup_inflation(year: u64) -> Option<Dec> {
    FIXUP_INFLATION.get(&year).cloned()
}

pub fn fixup_schedule() -> impl Iterator<Item = (u64, &'static Dec)> {
    let schedule: &'static BTreeMap<u64, Dec> = &FIXUP_INFLATION;
    schedule.iter().map(|(year, rate)| (*year, rate))
}
