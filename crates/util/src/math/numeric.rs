use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MathError {
    #[error("{operation} can only be found for integers, got {value}")]
    NotInteger { operation: &'static str, value: f64 },
}

/// Truncate a number to the given count of decimal digits.
///
/// Scales by `10^digits`, floors, then scales back, so the result never
/// rounds up.
///
/// ```
/// use goodish_util::math::to_fixed_num;
///
/// assert_eq!(to_fixed_num(3.14159, 2), 3.14);
/// assert_eq!(to_fixed_num(1.618, 2), 1.61);
/// ```
pub fn to_fixed_num(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).floor() / scale
}

fn integral(operation: &'static str, value: f64) -> Result<f64, MathError> {
    if value.is_finite() && value.fract() == 0.0 {
        Ok(value.abs())
    } else {
        Err(MathError::NotInteger { operation, value })
    }
}

/// Greatest common divisor of two integral numbers.
///
/// Signs are ignored. Fails if either input has a fractional part or is not
/// finite.
///
/// ```
/// use goodish_util::math::greatest_common_divisor;
///
/// assert_eq!(greatest_common_divisor(18.0, 12.0).unwrap(), 6.0);
/// assert!(greatest_common_divisor(1.1, 2.0).is_err());
/// ```
pub fn greatest_common_divisor(a: f64, b: f64) -> Result<f64, MathError> {
    const OP: &str = "Greatest common divisor";
    let mut a = integral(OP, a)?;
    let mut b = integral(OP, b)?;
    while b != 0.0 {
        let t = b;
        b = a % b;
        a = t;
    }
    Ok(a)
}

/// Lowest common multiple of two integral numbers. Zero if either is zero.
pub fn lowest_common_multiple(a: f64, b: f64) -> Result<f64, MathError> {
    const OP: &str = "Lowest common multiple";
    let a = integral(OP, a)?;
    let b = integral(OP, b)?;
    if a == 0.0 || b == 0.0 {
        return Ok(0.0);
    }
    Ok((a * b / greatest_common_divisor(a, b)?).abs())
}

/// Clamp a value into `[min, max]`.
pub fn clamp<T: PartialOrd>(val: T, min: T, max: T) -> T {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Wrap a value around the `[min, max]` band.
///
/// Values past `max` re-enter from `min` and values below `min` re-enter
/// from `max`, by the remainder of the overshoot.
///
/// ```
/// use goodish_util::math::wrap;
///
/// assert_eq!(wrap(12.0, 5.0, 10.0), 7.0);
/// assert_eq!(wrap(2.0, 5.0, 10.0), 7.0);
/// ```
pub fn wrap(val: f64, min: f64, max: f64) -> f64 {
    if val < min {
        max - ((min - val) % (max - min))
    } else if val > max {
        min + ((val - max) % (max - min))
    } else {
        val
    }
}
