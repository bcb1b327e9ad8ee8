use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{GeometryError, Result};

/// Default geometric tolerance for floating-point comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

// Bit pattern of the active tolerance. `0x3DDB7CDFD9D7BDBB` is 1e-10.
static TOLERANCE_BITS: AtomicU64 = AtomicU64::new(0x3DDB_7CDF_D9D7_BDBB);

/// Returns the tolerance currently used by every comparison in the crate.
#[must_use]
pub fn tolerance() -> f64 {
    f64::from_bits(TOLERANCE_BITS.load(Ordering::Relaxed))
}

/// Replaces the shared tolerance.
///
/// The setting is process-wide: every later comparison, in every thread,
/// observes the new value.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateInput` if `eps` is not a finite positive number.
pub fn set_tolerance(eps: f64) -> Result<()> {
    if !eps.is_finite() || eps <= 0.0 {
        return Err(GeometryError::DegenerateInput(format!(
            "tolerance must be finite and positive, got {eps}"
        ))
        .into());
    }
    tracing::debug!(tolerance = eps, "geometric tolerance changed");
    TOLERANCE_BITS.store(eps.to_bits(), Ordering::Relaxed);
    Ok(())
}

/// `|v| <= tolerance()`.
#[must_use]
pub fn approx_zero(v: f64) -> bool {
    v.abs() <= tolerance()
}

/// `|a - b| <= tolerance()`.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_zero(a - b)
}
