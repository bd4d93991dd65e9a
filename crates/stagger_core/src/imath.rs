//! Elementary functions on double intervals.
//!
//! Monotone pieces evaluate the platform `libm` at the endpoints and widen
//! each value by [`LIBM_ULPS`] units in the last place, which covers the
//! documented error of the glibc and musl implementations. Non-monotone
//! functions locate their interior extrema with outward-rounded multiples
//! of π. Exact special values (`exp(0)`, `ln(1)`, ...) are returned unwidened
//! so point arguments stay sharp. `asinh`, `acosh` and `atanh` are composed
//! from outward-rounded `lnp1` and `sqrt`, since std does not route them
//! through `libm`.
//!
//! These results are the coarse enclosures every staggered function is
//! intersected with, and the whole answer when the working precision is 1.

use crate::error::{ArithResult, ArithmeticError};
use crate::interval::Interval;
use crate::rounding::{mul_down, mul_up, pred, sqrt_down, sqrt_up, succ};

/// Error allowance for one `libm` evaluation.
pub const LIBM_ULPS: u32 = 2;

/// Lower and upper double neighbours of π.
pub const PI_LO: f64 = std::f64::consts::PI;
pub const PI_HI: f64 = 3.141_592_653_589_793_6;

pub fn pi() -> Interval {
    Interval::unchecked(PI_LO, PI_HI)
}

fn below(v: f64) -> f64 {
    (0..LIBM_ULPS).fold(v, |acc, _| pred(acc))
}

fn above(v: f64) -> f64 {
    (0..LIBM_ULPS).fold(v, |acc, _| succ(acc))
}

/// Enclosure of `f(v)` for a single `libm` evaluation. `exact` lists
/// arguments where `f` is known to be returned exactly.
fn point_enclosure(f: fn(f64) -> f64, v: f64, exact: &[f64]) -> Interval {
    let y = f(v);
    if exact.contains(&v) || (y.is_infinite() && v.is_infinite()) {
        return Interval::point(y);
    }
    Interval::point(y).widened(LIBM_ULPS)
}

fn increasing(x: Interval, f: fn(f64) -> f64, exact: &[f64]) -> Interval {
    let lo = point_enclosure(f, x.inf(), exact).inf();
    let hi = point_enclosure(f, x.sup(), exact).sup();
    Interval::unchecked(lo, hi)
}

fn decreasing(x: Interval, f: fn(f64) -> f64, exact: &[f64]) -> Interval {
    let lo = point_enclosure(f, x.sup(), exact).inf();
    let hi = point_enclosure(f, x.inf(), exact).sup();
    Interval::unchecked(lo, hi)
}

/// Applies an increasing function given as an enclosure of its point values.
fn increasing_by(x: Interval, f: impl Fn(f64) -> ArithResult<Interval>) -> ArithResult<Interval> {
    let lo = f(x.inf())?.inf();
    let hi = f(x.sup())?.sup();
    Ok(Interval::unchecked(lo, hi))
}

fn decreasing_by(x: Interval, f: impl Fn(f64) -> ArithResult<Interval>) -> ArithResult<Interval> {
    let lo = f(x.sup())?.inf();
    let hi = f(x.inf())?.sup();
    Ok(Interval::unchecked(lo, hi))
}

fn clamp(x: Interval, lo: f64, hi: f64) -> Interval {
    let a = x.inf().max(lo).min(hi);
    let b = x.sup().min(hi).max(lo);
    Interval::unchecked(a, b)
}

fn pi_half() -> Interval {
    pi().times2pown(-1)
}

pub fn sqrt(x: Interval) -> ArithResult<Interval> {
    if x.inf() < 0.0 {
        return Err(ArithmeticError::domain("sqrt"));
    }
    Ok(Interval::unchecked(sqrt_down(x.inf()), sqrt_up(x.sup())))
}

fn pow_nonneg(v: f64, n: u32, round_up: bool) -> f64 {
    let mut result = 1.0;
    let mut base = v;
    let mut k = n;
    while k > 0 {
        if k & 1 == 1 {
            result = if round_up { mul_up(result, base) } else { mul_down(result, base) };
        }
        k >>= 1;
        if k > 0 {
            base = if round_up { mul_up(base, base) } else { mul_down(base, base) };
        }
    }
    result
}

/// Integer power `x^n`.
pub fn power(x: Interval, n: i32) -> ArithResult<Interval> {
    if n == 0 {
        return Ok(Interval::ONE);
    }
    if n < 0 {
        return Interval::ONE / power(x, -n)?;
    }
    let k = n as u32;
    if k % 2 == 0 {
        let a = x.abs();
        return Ok(Interval::unchecked(
            pow_nonneg(a.inf(), k, false),
            pow_nonneg(a.sup(), k, true),
        ));
    }
    let signed = |v: f64, up: bool| {
        if v >= 0.0 {
            pow_nonneg(v, k, up)
        } else {
            -pow_nonneg(-v, k, !up)
        }
    };
    Ok(Interval::unchecked(signed(x.inf(), false), signed(x.sup(), true)))
}

/// Verified `n`-th root of a nonnegative double.
fn root_point(v: f64, n: u32) -> Interval {
    if v == 0.0 || v == 1.0 || v.is_infinite() {
        return Interval::point(v);
    }
    let r = v.powf(1.0 / n as f64);
    let mut lo = below(r);
    while lo > 0.0 && pow_nonneg(lo, n, true) > v {
        lo = pred(lo);
    }
    let mut hi = above(r);
    while pow_nonneg(hi, n, false) < v {
        hi = succ(hi);
    }
    Interval::unchecked(lo.max(0.0), hi)
}

/// `n`-th root of `x`.
pub fn sqrt_n(x: Interval, n: i32) -> ArithResult<Interval> {
    if x.inf() < 0.0 || n == 0 {
        return Err(ArithmeticError::domain("sqrt(x, n)"));
    }
    if n < 0 {
        return Interval::ONE / sqrt_n(x, -n)?;
    }
    let k = n as u32;
    Ok(Interval::unchecked(
        root_point(x.inf(), k).inf(),
        root_point(x.sup(), k).sup(),
    ))
}

pub fn exp(x: Interval) -> Interval {
    clamp(increasing(x, f64::exp, &[0.0]), 0.0, f64::INFINITY)
}

pub fn exp2(x: Interval) -> Interval {
    clamp(increasing(x, f64::exp2, &[0.0, 1.0, 2.0, -1.0]), 0.0, f64::INFINITY)
}

pub fn exp10(x: Interval) -> Interval {
    clamp(increasing(x, |v| 10f64.powf(v), &[0.0, 1.0, 2.0]), 0.0, f64::INFINITY)
}

pub fn expm1(x: Interval) -> Interval {
    clamp(increasing(x, f64::exp_m1, &[0.0]), -1.0, f64::INFINITY)
}

/// `exp(-x^2)`.
pub fn expmx2(x: Interval) -> Interval {
    clamp(exp(-x.sqr()), 0.0, 1.0)
}

pub fn ln(x: Interval) -> ArithResult<Interval> {
    if x.inf() <= 0.0 {
        return Err(ArithmeticError::domain("ln"));
    }
    Ok(increasing(x, f64::ln, &[1.0]))
}

/// `ln(1 + x)`.
pub fn lnp1(x: Interval) -> ArithResult<Interval> {
    if x.inf() <= -1.0 {
        return Err(ArithmeticError::domain("lnp1"));
    }
    Ok(increasing(x, f64::ln_1p, &[0.0]))
}

pub fn log2(x: Interval) -> ArithResult<Interval> {
    if x.inf() <= 0.0 {
        return Err(ArithmeticError::domain("log2"));
    }
    Ok(increasing(x, f64::log2, &[1.0, 2.0, 4.0, 0.5]))
}

pub fn log10(x: Interval) -> ArithResult<Interval> {
    if x.inf() <= 0.0 {
        return Err(ArithmeticError::domain("log10"));
    }
    Ok(increasing(x, f64::log10, &[1.0, 10.0, 100.0]))
}

/// Integers `k` for which `(k + shift) * π` may lie in `x`, as a superset.
fn multiples_of_pi(x: Interval, shift: f64) -> Option<(f64, f64)> {
    let lo = (Interval::point(x.inf()) / pi()).ok()?.inf() - shift;
    let hi = (Interval::point(x.sup()) / pi()).ok()?.sup() - shift;
    let first = pred(lo).ceil();
    let last = succ(hi).floor();
    if first > last {
        None
    } else {
        Some((first, last))
    }
}

/// Extends an endpoint hull by the extrema of a `2π`-periodic function.
/// Extrema sit at `(k + shift) π`; even `k` gives `even_value`.
fn with_extrema(hull: Interval, x: Interval, shift: f64, even_value: f64) -> Interval {
    if !x.inf().is_finite() || !x.sup().is_finite() || x.diam() >= 2.0 * PI_HI {
        return Interval::unchecked(-1.0, 1.0);
    }
    let mut lo = hull.inf();
    let mut hi = hull.sup();
    if let Some((first, last)) = multiples_of_pi(x, shift) {
        if last - first >= 1.0 {
            return Interval::unchecked(-1.0, 1.0);
        }
        let value = if first.rem_euclid(2.0) == 0.0 { even_value } else { -even_value };
        if value > 0.0 {
            hi = 1.0;
        } else {
            lo = -1.0;
        }
    }
    clamp(Interval::unchecked(lo, hi), -1.0, 1.0)
}

fn endpoint_hull(x: Interval, f: fn(f64) -> f64, exact: &[f64]) -> Interval {
    point_enclosure(f, x.inf(), exact) | point_enclosure(f, x.sup(), exact)
}

pub fn sin(x: Interval) -> Interval {
    with_extrema(endpoint_hull(x, f64::sin, &[0.0]), x, 0.5, 1.0)
}

pub fn cos(x: Interval) -> Interval {
    with_extrema(endpoint_hull(x, f64::cos, &[0.0]), x, 0.0, 1.0)
}

pub fn tan(x: Interval) -> ArithResult<Interval> {
    if !x.inf().is_finite() || !x.sup().is_finite() || multiples_of_pi(x, 0.5).is_some() {
        return Err(ArithmeticError::domain("tan"));
    }
    Ok(increasing(x, f64::tan, &[0.0]))
}

pub fn cot(x: Interval) -> ArithResult<Interval> {
    if !x.inf().is_finite() || !x.sup().is_finite() || multiples_of_pi(x, 0.0).is_some() {
        return Err(ArithmeticError::domain("cot"));
    }
    decreasing_by(x, |v| Interval::ONE / point_enclosure(f64::tan, v, &[]))
}

pub fn asin(x: Interval) -> ArithResult<Interval> {
    if x.inf() < -1.0 || x.sup() > 1.0 {
        return Err(ArithmeticError::domain("asin"));
    }
    let half = pi_half();
    Ok(clamp(increasing(x, f64::asin, &[0.0]), -half.sup(), half.sup()))
}

pub fn acos(x: Interval) -> ArithResult<Interval> {
    if x.inf() < -1.0 || x.sup() > 1.0 {
        return Err(ArithmeticError::domain("acos"));
    }
    Ok(clamp(decreasing(x, f64::acos, &[1.0]), 0.0, PI_HI))
}

pub fn atan(x: Interval) -> Interval {
    let half = pi_half();
    clamp(increasing(x, f64::atan, &[0.0]), -half.sup(), half.sup())
}

/// `acot(x) = π/2 - atan(x)`, with values in `(0, π)`.
pub fn acot(x: Interval) -> Interval {
    let branch = |v: f64| -> ArithResult<Interval> {
        Ok(pi_half() - point_enclosure(f64::atan, v, &[0.0]))
    };
    match decreasing_by(x, branch) {
        Ok(y) => clamp(y, 0.0, PI_HI),
        Err(_) => Interval::unchecked(0.0, PI_HI),
    }
}

pub fn sinh(x: Interval) -> Interval {
    increasing(x, f64::sinh, &[0.0])
}

pub fn cosh(x: Interval) -> Interval {
    let a = x.abs();
    clamp(increasing(a, f64::cosh, &[0.0]), 1.0, f64::INFINITY)
}

pub fn tanh(x: Interval) -> Interval {
    clamp(increasing(x, f64::tanh, &[0.0]), -1.0, 1.0)
}

pub fn coth(x: Interval) -> ArithResult<Interval> {
    if x.contains_zero() {
        return Err(ArithmeticError::domain("coth"));
    }
    let y = decreasing_by(x, |v| Interval::ONE / point_enclosure(f64::tanh, v, &[]))?;
    Ok(if x.inf() > 0.0 {
        clamp(y, 1.0, f64::INFINITY)
    } else {
        clamp(y, f64::NEG_INFINITY, -1.0)
    })
}

/// `ln(2v)` for `v` so large that `v^2` overflows.
fn ln_twice(v: f64) -> ArithResult<Interval> {
    Ok(ln(Interval::point(v))? + ln(Interval::point(2.0))?)
}

/// `asinh a = lnp1(a + a^2 / (1 + sqrt(1 + a^2)))` for `a >= 0`. Past
/// `1e150` the neglected `1 / (4a^2)` is below one ulp of `ln(2a)`.
fn asinh_nonneg(a: f64) -> ArithResult<Interval> {
    if a == 0.0 || a.is_infinite() {
        return Ok(Interval::point(a));
    }
    if a > 1e150 {
        let y = ln_twice(a)?;
        return Ok(Interval::unchecked(y.inf(), succ(y.sup())));
    }
    let p = Interval::point(a);
    let s = p.sqr();
    lnp1(p + (s / (sqrt(s + 1.0)? + 1.0))?)
}

/// `acosh(1 + t) = lnp1(t + sqrt(t (2 + t)))` for `t >= 0`. Past `1e150`
/// it differs from `ln(2t)` by less than `1 / t`.
fn acoshp1_nonneg(t: Interval) -> ArithResult<Interval> {
    if t.sup().is_infinite() {
        return Ok(Interval::point(f64::INFINITY));
    }
    if t.sup() > 1e150 {
        let y = ln_twice(t.inf())? | ln_twice(t.sup())?;
        return Ok(y.widened(1));
    }
    lnp1(t + sqrt(t * (t + 2.0))?)
}

/// `atanh v = sign(v) lnp1(2|v| / (1 - |v|)) / 2`.
fn atanh_point(v: f64) -> ArithResult<Interval> {
    if v == 0.0 {
        return Ok(Interval::ZERO);
    }
    let a = Interval::point(v.abs());
    let y = lnp1((a.times2pown(1) / (1.0 - a))?)?.times2pown(-1);
    Ok(if v < 0.0 { -y } else { y })
}

pub fn asinh(x: Interval) -> ArithResult<Interval> {
    increasing_by(x, |v| {
        let y = asinh_nonneg(v.abs())?;
        Ok(if v < 0.0 { -y } else { y })
    })
}

pub fn acosh(x: Interval) -> ArithResult<Interval> {
    if x.inf() < 1.0 {
        return Err(ArithmeticError::domain("acosh"));
    }
    let y = increasing_by(x, |v| acoshp1_nonneg(Interval::point(v) - 1.0))?;
    Ok(clamp(y, 0.0, f64::INFINITY))
}

pub fn atanh(x: Interval) -> ArithResult<Interval> {
    if x.inf() <= -1.0 || x.sup() >= 1.0 {
        return Err(ArithmeticError::domain("atanh"));
    }
    increasing_by(x, atanh_point)
}

pub fn acoth(x: Interval) -> ArithResult<Interval> {
    if x.inf() <= 1.0 && x.sup() >= -1.0 {
        return Err(ArithmeticError::domain("acoth"));
    }
    decreasing_by(x, |v| {
        let r = (Interval::ONE / Interval::point(v))?;
        atanh(r)
    })
}

/// `sqrt(1 + x^2)`.
pub fn sqrt1px2(x: Interval) -> Interval {
    let a = x.abs();
    let f = |v: f64| 1f64.hypot(v);
    clamp(increasing(a, f, &[0.0]), 1.0, f64::INFINITY)
}

/// `sqrt(x^2 + y^2)`.
pub fn sqrtx2y2(x: Interval, y: Interval) -> Interval {
    let a = x.abs();
    let b = y.abs();
    let corner = |u: f64, v: f64| {
        let h = u.hypot(v);
        if u == 0.0 || v == 0.0 {
            Interval::point(h)
        } else {
            Interval::unchecked(below(h), above(h))
        }
    };
    let lo = corner(a.inf(), b.inf()).inf().max(a.inf()).max(b.inf());
    let hi = corner(a.sup(), b.sup()).sup();
    Interval::unchecked(lo, hi)
}

/// `sqrt(1 + x) - 1`.
pub fn sqrtp1m1(x: Interval) -> ArithResult<Interval> {
    if x.inf() < -1.0 {
        return Err(ArithmeticError::domain("sqrtp1m1"));
    }
    increasing_by(x, |v| {
        if v == 0.0 {
            return Ok(Interval::ZERO);
        }
        let p = Interval::point(v);
        p / (sqrt(p + 1.0)? + 1.0)
    })
}

/// `sqrt(x^2 - 1)` for `|x| >= 1`.
pub fn sqrtx2m1(x: Interval) -> ArithResult<Interval> {
    let a = x.abs();
    if a.inf() < 1.0 {
        return Err(ArithmeticError::domain("sqrtx2m1"));
    }
    increasing_by(a, |v| {
        let p = Interval::point(v);
        sqrt((p - 1.0) * (p + 1.0))
    })
}

/// `sqrt(1 - x^2)` for `|x| <= 1`.
pub fn sqrt1mx2(x: Interval) -> ArithResult<Interval> {
    let a = x.abs();
    if a.sup() > 1.0 {
        return Err(ArithmeticError::domain("sqrt1mx2"));
    }
    let y = decreasing_by(a, |v| {
        let p = Interval::point(v);
        let r = (1.0 - p) * (1.0 + p);
        sqrt(clamp(r, 0.0, 1.0))
    })?;
    Ok(clamp(y, 0.0, 1.0))
}

/// `ln(sqrt(x^2 + y^2))`.
pub fn ln_sqrtx2y2(x: Interval, y: Interval) -> ArithResult<Interval> {
    let r = sqrtx2y2(x, y);
    if r.inf() <= 0.0 {
        return Err(ArithmeticError::domain("ln_sqrtx2y2"));
    }
    ln(r)
}

/// `acosh(1 + x)`.
pub fn acoshp1(x: Interval) -> ArithResult<Interval> {
    if x.inf() < 0.0 {
        return Err(ArithmeticError::domain("acoshp1"));
    }
    increasing_by(x, |v| acoshp1_nonneg(Interval::point(v)))
}

/// `x^e` for a real exponent interval.
pub fn pow(x: Interval, e: Interval) -> ArithResult<Interval> {
    if x.inf() < 0.0 {
        return Err(ArithmeticError::domain("pow"));
    }
    if x.inf() == 0.0 {
        if e.inf() <= 0.0 {
            return Err(ArithmeticError::domain("pow"));
        }
        if x.sup() == 0.0 {
            return Ok(Interval::ZERO);
        }
        let top = exp(e * ln(Interval::point(x.sup()))?);
        return Ok(Interval::unchecked(0.0, top.sup()));
    }
    Ok(exp(e * ln(x)?))
}
