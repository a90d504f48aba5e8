//! Human-readable edge weight formatting.
//!
//! Weights are printed with at most two decimals and no trailing zeros:
//! `1.0` → `"1"`, `2.5` → `"2.5"`, `std::f64::consts::SQRT_2` → `"1.41"`.

/// The weight every unit edge carries. Formatting omits it by default.
pub const UNIT_WEIGHT: f64 = 1.0;

/// Format a weight (or path cost) with at most two decimals.
#[must_use]
pub fn format_weight(weight: f64) -> String {
    if !weight.is_finite() {
        return weight.to_string();
    }
    let fixed = format!("{weight:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
