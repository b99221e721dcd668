use anstyle::Style;
use anyhow::{Result, anyhow};
use log::{debug, warn};
use std::{
    any::Any,
    io::Write,
    panic::{UnwindSafe, catch_unwind},
};

mod error;
pub use error::{ChamadaError, DIVISION_BY_ZERO};

/// A zero divisor yields a [`ChamadaError`] rather than a fault. Callers that want the `0`
/// placeholder can use `unwrap_or_default()`.
pub fn checked_divide(dividend: i64, divisor: i64) -> Result<i64, ChamadaError> {
    if divisor == 0 {
        return Err(ChamadaError::division_by_zero());
    }
    Ok(dividend.wrapping_div(divisor))
}

/// Panics if `divisor` is zero.
#[must_use]
pub fn unchecked_divide(dividend: i64, divisor: i64) -> i64 {
    // `i64::MIN / -1` wraps, as on the checked path. Only a zero divisor faults.
    dividend.wrapping_div(divisor)
}

pub fn supervise<T, F>(operation: F) -> Result<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    catch_unwind(operation).map_err(|payload| {
        let message = panic_message(&*payload);
        warn!("intercepted fatal fault: {message}");
        anyhow!("fatal fault: {message}")
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}

// The quotient, or `0` after an error, is always written and returned.
pub fn report<W: Write>(out: &mut W, style: Style, dividend: i64, divisor: i64) -> Result<i64> {
    let result = checked_divide(dividend, divisor);
    if let Err(error) = &result {
        debug!("refusing to divide {dividend} by zero");
        writeln!(out, "{style}error:{style:#} {error}")?;
    }
    let quotient = result.unwrap_or_default();
    writeln!(out, "{quotient}")?;
    Ok(quotient)
}
