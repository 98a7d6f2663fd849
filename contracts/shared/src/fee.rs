use crate::types::Error;

/// Fee percent is a whole percentage of each leg.
pub const PERCENT_DENOMINATOR: u32 = 100;

pub fn validate_fee_percent(fee_percent: u32) -> Result<(), Error> {
    if fee_percent >= PERCENT_DENOMINATOR {
        return Err(Error::InvalidFeePercent);
    }
    Ok(())
}

/// Split of one leg between its recipient and the treasury.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LegSplit {
    pub fee: i128,
    pub net: i128,
}

/// floor(amount * fee_percent / 100), with `net = amount - fee`.
///
/// `amount` is decomposed as `q * 100 + r` so the product never exceeds
/// `amount`: `fee = q * p + (r * p) / 100`, which equals the floor of the
/// exact quotient for any positive `amount`.
pub fn split(amount: i128, fee_percent: u32) -> Result<LegSplit, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    validate_fee_percent(fee_percent)?;

    let denom = PERCENT_DENOMINATOR as i128;
    let pct = fee_percent as i128;
    let fee = (amount / denom) * pct + (amount % denom) * pct / denom;

    Ok(LegSplit {
        fee,
        net: amount - fee,
    })
}
