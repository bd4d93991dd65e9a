//! Directed rounding on top of round-to-nearest hardware arithmetic.
//!
//! Each directed operation computes the nearest result and then recovers the
//! sign of the rounding error with an error-free transformation (`two_sum`,
//! or an `fma` remainder for products, quotients and roots). The nearest
//! result is stepped one ulp outward only when the error points that way.
//! Close to the underflow threshold the remainders stop being exact, so
//! those results are stepped unconditionally.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    Down,
    Nearest,
    Up,
}

/// Smallest positive normalized double.
pub const MIN_REAL: f64 = f64::MIN_POSITIVE;
/// Largest finite double.
pub const MAX_REAL: f64 = f64::MAX;
/// Exponent reported by [`expo`] for zero.
pub const EXPO_ZERO: i32 = -10_000_000;

/// Products and quotients above 2^-969 in magnitude have exact remainders.
fn tiny(x: f64) -> bool {
    x != 0.0 && x.abs() < pow2(-969)
}

/// Next representable double above `x`.
pub fn succ(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Next representable double below `x`.
pub fn pred(x: f64) -> f64 {
    -succ(-x)
}

/// Exponent `e` with `x = m * 2^e` and `0.5 <= |m| < 1`.
pub fn expo(x: f64) -> i32 {
    if x == 0.0 {
        return EXPO_ZERO;
    }
    if !x.is_finite() {
        return 1025;
    }
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    if biased != 0 {
        return biased - 1022;
    }
    let frac = bits & ((1u64 << 52) - 1);
    let top = 63 - frac.leading_zeros() as i32;
    top - 1073
}

/// Mantissa `m` of `x = m * 2^expo(x)`, with `0.5 <= |m| < 1`.
pub fn mant(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    times2pown(x, -expo(x))
}

/// Exact power of two, saturating to 0 or infinity outside the double range.
pub fn pow2(n: i32) -> f64 {
    if n > 1023 {
        f64::INFINITY
    } else if n >= -1022 {
        f64::from_bits(((n + 1023) as u64) << 52)
    } else if n >= -1074 {
        f64::from_bits(1u64 << (n + 1074))
    } else {
        0.0
    }
}

/// `x * 2^n`, scaled in steps so intermediate factors stay representable.
/// Exact unless the result falls into the subnormal range.
pub fn times2pown(x: f64, n: i32) -> f64 {
    let mut y = x;
    let mut k = n;
    while k > 1000 {
        y *= pow2(1000);
        k -= 1000;
    }
    while k < -1000 {
        y *= pow2(-1000);
        k += 1000;
    }
    y * pow2(k)
}

/// Error-free sum: `a + b == s + e` exactly when no overflow occurs.
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

fn overflowed(result: f64, mode: Rounding) -> f64 {
    match mode {
        Rounding::Down if result == f64::INFINITY => MAX_REAL,
        Rounding::Up if result == f64::NEG_INFINITY => -MAX_REAL,
        _ => result,
    }
}

fn step(value: f64, error_sign: f64, mode: Rounding) -> f64 {
    match mode {
        Rounding::Up if error_sign > 0.0 => succ(value),
        Rounding::Down if error_sign < 0.0 => pred(value),
        _ => value,
    }
}

fn step_always(value: f64, mode: Rounding) -> f64 {
    match mode {
        Rounding::Up => succ(value),
        Rounding::Down => pred(value),
        Rounding::Nearest => value,
    }
}

/// Directed result for a nonzero value that may have underflowed to `value`.
fn underflowed(value: f64, positive: bool, mode: Rounding) -> f64 {
    if value != 0.0 {
        return step_always(value, mode);
    }
    match mode {
        Rounding::Up if positive => succ(0.0),
        Rounding::Down if !positive => pred(0.0),
        _ => 0.0,
    }
}

pub fn add(a: f64, b: f64, mode: Rounding) -> f64 {
    let s = a + b;
    if s.is_nan() {
        if a.is_nan() || b.is_nan() {
            return s;
        }
        return match mode {
            Rounding::Down => f64::NEG_INFINITY,
            _ => f64::INFINITY,
        };
    }
    if s.is_infinite() {
        return if a.is_finite() && b.is_finite() {
            overflowed(s, mode)
        } else {
            s
        };
    }
    let (_, e) = two_sum(a, b);
    step(s, e, mode)
}

pub fn sub(a: f64, b: f64, mode: Rounding) -> f64 {
    add(a, -b, mode)
}

pub fn mul(a: f64, b: f64, mode: Rounding) -> f64 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    let p = a * b;
    if p.is_infinite() {
        return if a.is_finite() && b.is_finite() {
            overflowed(p, mode)
        } else {
            p
        };
    }
    if p == 0.0 || tiny(p) {
        return underflowed(p, (a > 0.0) == (b > 0.0), mode);
    }
    let e = a.mul_add(b, -p);
    step(p, e, mode)
}

pub fn div(a: f64, b: f64, mode: Rounding) -> f64 {
    if a == 0.0 && b != 0.0 {
        return 0.0;
    }
    let q = a / b;
    if q.is_nan() || b == 0.0 {
        return q;
    }
    if q.is_infinite() {
        return if a.is_finite() {
            overflowed(q, mode)
        } else {
            q
        };
    }
    if b.is_infinite() {
        return 0.0;
    }
    if q == 0.0 || tiny(q) || a.abs() < pow2(-960) {
        return underflowed(q, (a > 0.0) == (b > 0.0), mode);
    }
    let r = (-q).mul_add(b, a);
    let error_sign = if r == 0.0 {
        0.0
    } else if (r > 0.0) == (b > 0.0) {
        1.0
    } else {
        -1.0
    };
    step(q, error_sign, mode)
}

pub fn sqrt(a: f64, mode: Rounding) -> f64 {
    let s = a.sqrt();
    if a == 0.0 || !s.is_finite() {
        return s;
    }
    if a < pow2(-960) {
        return step_always(s, mode).max(0.0);
    }
    let r = (-s).mul_add(s, a);
    step(s, r, mode).max(0.0)
}

pub fn add_down(a: f64, b: f64) -> f64 {
    add(a, b, Rounding::Down)
}

pub fn add_up(a: f64, b: f64) -> f64 {
    add(a, b, Rounding::Up)
}

pub fn sub_down(a: f64, b: f64) -> f64 {
    sub(a, b, Rounding::Down)
}

pub fn sub_up(a: f64, b: f64) -> f64 {
    sub(a, b, Rounding::Up)
}

pub fn mul_down(a: f64, b: f64) -> f64 {
    mul(a, b, Rounding::Down)
}

pub fn mul_up(a: f64, b: f64) -> f64 {
    mul(a, b, Rounding::Up)
}

pub fn div_down(a: f64, b: f64) -> f64 {
    div(a, b, Rounding::Down)
}

pub fn div_up(a: f64, b: f64) -> f64 {
    div(a, b, Rounding::Up)
}

pub fn sqrt_down(a: f64) -> f64 {
    sqrt(a, Rounding::Down)
}

pub fn sqrt_up(a: f64) -> f64 {
    sqrt(a, Rounding::Up)
}
