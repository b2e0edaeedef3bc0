use mint::params::MintParams;
use proptest::prelude::*;
use shared::dec::Dec;

/// Decimals in `[min, max] * 10^-prec`.
pub fn arb_dec(min: i64, max: i64, prec: u32) -> impl Strategy<Value = Dec> {
    (min..=max).prop_map(move |units| Dec::new_with_prec(units, prec))
}

/// Ratios in `[0, 1]` with four decimals.
pub fn arb_ratio() -> impl Strategy<Value = Dec> {
    arb_dec(0, 10_000, 4)
}

pub fn arb_denom() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9/]{0,15}"
}

/// Params that pass validation.
pub fn arb_valid_params() -> impl Strategy<Value = MintParams> {
    (
        arb_denom(),
        arb_dec(0, 10_000, 4),
        (0i64..=10_000, 0i64..=10_000),
        arb_ratio(),
        1u64..=u64::MAX,
    )
        .prop_map(|(denom, rate_change, (a, b), goal_bonded, blocks)| {
            MintParams::new(
                denom,
                rate_change,
                Dec::new_with_prec(a.max(b), 4),
                Dec::new_with_prec(a.min(b), 4),
                goal_bonded,
                blocks,
            )
        })
}

/// Any params, valid or not.
pub fn arb_params() -> impl Strategy<Value = MintParams> {
    (
        "[a-z]{0,8}",
        arb_dec(-20_000, 20_000, 4),
        arb_dec(-20_000, 20_000, 4),
        arb_dec(-20_000, 20_000, 4),
        arb_dec(-20_000, 20_000, 4),
        any::<u64>(),
    )
        .prop_map(
            |(denom, rate_change, max, min, goal_bonded, blocks)| {
                MintParams::new(denom, rate_change, max, min, goal_bonded, blocks)
            },
        )
}
