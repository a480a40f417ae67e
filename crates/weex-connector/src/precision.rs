/*
[INPUT]:  Step/tick size decimal strings from WEEX market metadata
[OUTPUT]: Decimal-place precision for amounts and prices
[POS]:    Translation layer - market status precision fix-up
[UPDATE]: When WEEX changes how increments are published
*/

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::types::MarketStatus;

/// Precision used when an increment cannot be parsed
pub const DEFAULT_PRECISION: u32 = 8;

/// Fixed-point width increments are rounded to before counting digits
const MAX_FRACTION_DIGITS: u32 = 10;

/// Number of decimal places implied by a step or tick size.
///
/// Values of one or more have precision 0. Input too large for a
/// `Decimal` is read as `f64`, so `1e30` and `inf` are whole increments.
/// Unparseable input degrades to [`DEFAULT_PRECISION`] with a warning
/// rather than failing.
pub fn precision_from_step_size(step_size: &str) -> u32 {
    match parse_increment(step_size) {
        Some(Increment::Exact(step)) => exact_precision(step),
        Some(Increment::Approx(step)) => approx_precision(step),
        None => {
            warn!(
                step_size,
                default = DEFAULT_PRECISION,
                "unparseable step size, using default precision"
            );
            DEFAULT_PRECISION
        }
    }
}

fn exact_precision(step: Decimal) -> u32 {
    if step >= Decimal::ONE {
        return 0;
    }

    step.round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .scale()
}

/// Non-finite values render without a fraction and count as 0
fn approx_precision(step: f64) -> u32 {
    if !step.is_finite() || step >= 1.0 {
        return 0;
    }

    let rendered = format!("{step:.prec$}", prec = MAX_FRACTION_DIGITS as usize);
    rendered
        .trim_end_matches('0')
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as u32)
}

/// Overwrite derived precision from `info.stepSize` / `info.tickSize`.
///
/// Increments that are missing, unparseable or not positive leave the
/// existing precision untouched.
pub fn apply_market_status_fixes(status: &mut MarketStatus) {
    if let Some(step_size) = positive_increment(status.info.step_size.as_deref()) {
        let amount = precision_from_step_size(step_size);
        debug!(symbol = %status.symbol, step_size, amount, "amount precision from step size");
        status.precision.amount = Some(amount);
    }

    if let Some(tick_size) = positive_increment(status.info.tick_size.as_deref()) {
        let price = precision_from_step_size(tick_size);
        debug!(symbol = %status.symbol, tick_size, price, "price precision from tick size");
        status.precision.price = Some(price);
    }
}

fn positive_increment(raw: Option<&str>) -> Option<&str> {
    let raw = raw?;
    match parse_increment(raw) {
        Some(Increment::Exact(value)) if value > Decimal::ZERO => Some(raw),
        Some(Increment::Approx(value)) if value > 0.0 => Some(raw),
        _ => None,
    }
}

/// A parsed increment; `Approx` holds values outside the `Decimal` range
#[derive(Debug, Clone, Copy, PartialEq)]
enum Increment {
    Exact(Decimal),
    Approx(f64),
}

fn parse_increment(raw: &str) -> Option<Increment> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(Increment::Exact)
        .ok()
        .or_else(|| f64::from_str(trimmed).ok().map(Increment::Approx))
}
