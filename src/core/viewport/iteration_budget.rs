use crate::core::data::complex_rect::ComplexRect;

/// Budget a viewport starts with, and returns to on formula or mode changes.
pub const DEFAULT_ITERATION_BUDGET: u32 = 32;

// Empirical fit.
const DYNAMIC_BUDGET_SCALE: f64 = 50.0;
const DYNAMIC_BUDGET_EXPONENT: f64 = 1.25;

/// `round(50 * log10(image_width / imag_span)^1.25)`, never below 1.
///
/// The log argument drops to 1 or less when the imaginary span is at least
/// the image width, which makes the power zero or NaN; both clamp to 1.
#[must_use]
pub fn dynamic_iteration_budget(image_width: u32, region: &ComplexRect) -> u32 {
    let zoom_ratio = f64::from(image_width) / region.height();
    let raw = DYNAMIC_BUDGET_SCALE * zoom_ratio.log10().powf(DYNAMIC_BUDGET_EXPONENT);

    clamp_budget(raw.round())
}

fn clamp_budget(raw: f64) -> u32 {
    if raw.is_nan() || raw < 1.0 {
        return 1;
    }

    // saturates at u32::MAX
    raw as u32
}

/// Doubles a fixed budget, saturating at `u32::MAX`.
#[must_use]
pub fn doubled(budget: u32) -> u32 {
    budget.saturating_mul(2)
}

/// Halves a fixed budget, never below 1.
#[must_use]
pub fn halved(budget: u32) -> u32 {
    (budget / 2).max(1)
}
