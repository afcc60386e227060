#![no_std]
//! Linear vesting with an optional cliff.
//!
//! A schedule accrues `total_amount` linearly from `start` over `duration`
//! seconds. Nothing is vested before `start + cliff`; once the cliff passes,
//! everything accrued since `start` becomes vested at once and accrual then
//! continues on the same slope. All division rounds toward zero, so a
//! beneficiary is never credited more than the exact pro-rata share.

/// Computes `amount * numerator / denominator` rounded toward zero.
///
/// Requires `amount >= 0`, `denominator > 0` and `numerator <= denominator`.
/// The product is split as `(q * d + r) * n / d = q * n + r * n / d`, which
/// keeps every intermediate inside `u128` for any `i128` amount and `u64`
/// ratio.
pub fn mul_div_floor(amount: i128, numerator: u64, denominator: u64) -> Option<i128> {
    if amount < 0 || denominator == 0 || numerator > denominator {
        return None;
    }

    let amount = amount as u128;
    let n = numerator as u128;
    let d = denominator as u128;

    // (amount / d) * n <= amount, and (amount % d) * n < 2^128.
    let whole = (amount / d) * n;
    let part = (amount % d) * n / d;

    i128::try_from(whole + part).ok()
}

/// Parameters of one linear release curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearSchedule {
    pub total_amount: i128,
    pub start: u64,
    pub cliff: u64,
    pub duration: u64,
}

impl LinearSchedule {
    pub const fn new(total_amount: i128, start: u64, cliff: u64, duration: u64) -> Self {
        Self {
            total_amount,
            start,
            cliff,
            duration,
        }
    }

    /// A curve without a cliff, as used for grants embedded in claims.
    pub const fn without_cliff(total_amount: i128, start: u64, duration: u64) -> Self {
        Self::new(total_amount, start, 0, duration)
    }

    pub fn cliff_end(&self) -> u64 {
        self.start.saturating_add(self.cliff)
    }

    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }

    /// Amount vested at `now`.
    pub fn vested_amount(&self, now: u64) -> i128 {
        if self.total_amount <= 0 || now < self.cliff_end() {
            return 0;
        }
        if now >= self.end() {
            return self.total_amount;
        }

        // start <= cliff_end <= now < end, so 0 <= elapsed < duration.
        let elapsed = now - self.start;
        mul_div_floor(self.total_amount, elapsed, self.duration).unwrap_or(0)
    }

    /// Vested amount not yet paid out, floored at zero.
    pub fn releasable_amount(&self, released_amount: i128, now: u64) -> i128 {
        self.vested_amount(now).saturating_sub(released_amount).max(0)
    }
}

/// Clamps `now` to a freeze point, if one was recorded.
///
/// A revoked schedule stops accruing at its revocation timestamp.
pub fn accrual_time(now: u64, frozen_at: Option<u64>) -> u64 {
    match frozen_at {
        Some(at) => now.min(at),
        None => now,
    }
}
