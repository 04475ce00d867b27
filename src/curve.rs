multiversx_sc::imports!();

// ============================================================
// Bancor curve math
//
// Amounts are 18-decimal integers. Everything below runs on a
// 36-digit internal scale and converts back at the end.
// ============================================================

/// Reserve ratio denominator: the ratio is expressed in parts per million.
pub const MAX_RESERVE_RATIO: u32 = 1_000_000;

/// Fractional digits of every external amount.
pub const AMOUNT_DECIMALS: u32 = 18;

const PRECISION_DIGITS: u32 = 36;

/// Square roots taken for the fractional part of an exponent.
/// The exponent is truncated to 40 bits, which bounds the relative error of
/// `x^e` by `|ln(x)| * 2^-40`, under 1e-8 for every base below `e^10000`.
const LADDER_STEPS: u32 = 40;

fn unit<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(10u64).pow(PRECISION_DIGITS)
}

fn mul_fixed<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>, one: &BigUint<M>) -> BigUint<M> {
    &(a * b) / one
}

fn sqrt_fixed<M: ManagedTypeApi>(a: &BigUint<M>, one: &BigUint<M>) -> BigUint<M> {
    (a * one).sqrt()
}

fn ceil_div<M: ManagedTypeApi>(numerator: &BigUint<M>, denominator: &BigUint<M>) -> BigUint<M> {
    (numerator + denominator - 1u64) / denominator
}

fn power_whole<M: ManagedTypeApi>(base: &BigUint<M>, exponent: u64, one: &BigUint<M>) -> BigUint<M> {
    let mut result = one.clone();
    let mut square = base.clone();
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = mul_fixed(&result, &square, one);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = mul_fixed(&square, &square, one);
        }
    }
    result
}

/// `base^(numerator / denominator)` with `base` scaled by `one`.
///
/// The whole part of the exponent is applied by squaring. The fractional part
/// walks a binary-exponent ladder: the k-th successive square root of `base`
/// is `base^(2^-k)` and is multiplied in whenever the k-th binary digit of the
/// fraction is set. Digits past `LADDER_STEPS` are dropped.
pub fn power<M: ManagedTypeApi>(
    base: &BigUint<M>,
    numerator: u64,
    denominator: u64,
    one: &BigUint<M>,
) -> BigUint<M> {
    let mut result = power_whole(base, numerator / denominator, one);

    let mut fraction = numerator % denominator;
    let mut root = base.clone();
    for _ in 0..LADDER_STEPS {
        if fraction == 0 {
            break;
        }
        root = sqrt_fixed(&root, one);
        fraction *= 2;
        if fraction >= denominator {
            fraction -= denominator;
            result = mul_fixed(&result, &root, one);
        }
    }
    result
}

/// Tokens minted for `deposit` reserve units:
/// `supply * ((1 + deposit / reserve)^ratio - 1)`, rounded down.
pub fn calculate_mint<M: ManagedTypeApi>(
    supply: &BigUint<M>,
    reserve: &BigUint<M>,
    reserve_ratio: u32,
    deposit: &BigUint<M>,
) -> BigUint<M> {
    let one = unit::<M>();
    let base = &(&(reserve + deposit) * &one) / reserve;
    let grown = power(&base, reserve_ratio as u64, MAX_RESERVE_RATIO as u64, &one);
    &(supply * &(grown - &one)) / &one
}

/// Reserve returned for burning `amount` tokens:
/// `reserve * (1 - (1 - amount / supply)^(1 / ratio))`, rounded down.
///
/// Requires `amount < supply`. The reserve kept back is rounded up and is
/// never less than one base unit, so a burn can never empty the reserve.
pub fn calculate_burn<M: ManagedTypeApi>(
    supply: &BigUint<M>,
    reserve: &BigUint<M>,
    reserve_ratio: u32,
    amount: &BigUint<M>,
) -> BigUint<M> {
    if *reserve == 0u64 {
        return BigUint::zero();
    }
    let one = unit::<M>();
    let remaining = supply - amount;
    // rounding the base up keeps the returned reserve on the low side
    let base = ceil_div(&(&remaining * &one), supply);
    let shrunk = power(&base, MAX_RESERVE_RATIO as u64, reserve_ratio as u64, &one);

    let mut kept = ceil_div(&(reserve * &shrunk), &one);
    if kept == 0u64 {
        kept = BigUint::from(1u64);
    }
    if kept >= *reserve {
        return BigUint::zero();
    }
    reserve - &kept
}

/// Spot price in reserve units per token, 18 decimals:
/// `reserve / (supply * ratio)`.
pub fn spot_price<M: ManagedTypeApi>(
    supply: &BigUint<M>,
    reserve: &BigUint<M>,
    reserve_ratio: u32,
) -> BigUint<M> {
    if *supply == 0u64 {
        return BigUint::zero();
    }
    let scaled_reserve = reserve * &BigUint::from(10u64).pow(AMOUNT_DECIMALS);
    let numerator = scaled_reserve * MAX_RESERVE_RATIO as u64;
    numerator / &(supply * &BigUint::from(reserve_ratio))
}
