// Numeric helpers shared by the projection and input modules

/// Significant decimal digits carried by an `f32`.
const F32_SIGNIFICANT_DIGITS: i32 = 7;

/// Check whether `value` lies between `min` and `max`.
///
/// With `inclusive` set the bounds themselves count as inside. Integer inputs
/// are widened to `f64` without rounding, so `between(1, 3, 2, false)` and
/// `between(1.0, 3.0, 2.0, false)` agree. No ordering of `min` and `max` is
/// assumed: when `min > max` both comparisons cannot hold and the result is
/// `false`. Any NaN makes the result `false`.
pub fn between<T: Into<f64>>(min: T, max: T, value: T, inclusive: bool) -> bool {
    let (min, max, value) = (min.into(), max.into(), value.into());
    if inclusive {
        min <= value && value <= max
    } else {
        min < value && value < max
    }
}

/// Exclusive form of [`between`]
pub fn between_exclusive<T: Into<f64>>(min: T, max: T, value: T) -> bool {
    between(min, max, value, false)
}

/// Round to `decimals` places, halves away from zero.
///
/// The value is first snapped to the digits an `f32` actually carries, so
/// `0.015_f32` (stored as `0.01499999966...`) rounds like the literal `0.015`.
pub fn round_to(value: f32, decimals: u32) -> f32 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let value = f64::from(value);
    let magnitude = value.abs().log10().floor() as i32;
    let exponent = F32_SIGNIFICANT_DIGITS - 1 - magnitude;
    let digits = (value * 10f64.powi(exponent)).round();

    // Already coarser than the requested precision
    let shift = exponent - decimals as i32;
    if shift <= 0 {
        return (digits / 10f64.powi(exponent)) as f32;
    }

    // `digits` is integral, so an exact half survives the division
    let rounded = (digits / 10f64.powi(shift)).round();
    (rounded / 10f64.powi(decimals as i32)) as f32
}
