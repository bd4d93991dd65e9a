//! Circular functions and their inverses.

use tracing::trace;

use super::{endpoint_hull, finish, is_exactly, ln_eps, relative_error, sqr, sqrt, sqrt1px2, STAGMAX};
use crate::constants::pid4;
use crate::error::{ArithResult, ArithmeticError};
use crate::imath;
use crate::interval::Interval;
use crate::l_interval::LInterval;
use crate::l_real::LReal;
use crate::precision::{stagprec, PrecisionGuard};
use crate::rounding::{expo, pow2, MIN_REAL};

/// Largest `|x|` for which `asin` and `acos` use their direct formula.
const DIRECT_LIMIT: f64 = 0.75;
const LN3: f64 = 1.098_612_289;

fn pi_half() -> LInterval {
    pid4().times2pown(1)
}

pub fn sin(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::sin(dx);
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(LInterval::new(0.0));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        cos(&(x - &pi_half()))?
    };
    Ok(finish(&y, coarse))
}

/// Cosine: reduction modulo `2π`, halving until `|t| < 0.01`, Taylor series,
/// then `cos 2t = 2 cos^2 t - 1` to undo the halving.
pub fn cos(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::cos(dx);
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(LInterval::new(1.0));
    }
    let Some((y, reaches_min, reaches_max)) = cos_series(x)? else {
        return Ok(LInterval::from_interval(Interval::unchecked(-1.0, 1.0)).intersect_interval(coarse));
    };

    let mut y = y.adjust();
    let one = LReal::new(1.0);
    let minus_one = LReal::new(-1.0);
    if reaches_min || y.inf() < -1.0 {
        y.set_inf(&minus_one)?;
    }
    if reaches_max || y.sup() > 1.0 {
        y.set_sup(&one)?;
    }
    Ok(y.intersect_interval(coarse))
}

/// Works one limb above the caller's precision. `None` when the argument
/// spans a full half period; otherwise the series value and whether a
/// minimum or maximum of cosine lies inside.
fn cos_series(x: &LInterval) -> ArithResult<Option<(LInterval, bool, bool)>> {
    let _g = PrecisionGuard::raise(STAGMAX);
    let two_pi = pid4().times2pown(3);
    let period = two_pi.to_interval().sup();
    let mut t = x.clone();
    for _ in 0..2 {
        if period >= t.to_interval().abs_max() {
            break;
        }
        let m = (&t / &two_pi)?.to_interval().sup().floor();
        t = &t - &(&two_pi * m);
    }

    // t / π; an integer inside marks an extremum.
    let extr = (&(2.0 / &two_pi)? * &t).to_interval();
    let m2 = extr.sup().floor();
    let (reaches_min, reaches_max) = if !extr.contains(m2) {
        (false, false)
    } else if extr.contains(m2 - 1.0) {
        return Ok(None);
    } else {
        let odd = m2.rem_euclid(2.0) == 1.0;
        (odd, !odd)
    };

    let mut n = 0;
    let mut zhn = 1.0;
    while t.to_interval().abs_max() / zhn >= 0.01 {
        n += 1;
        zhn += zhn;
    }
    let t = t.times2pown(-n);
    let t2 = &t * &t;

    let degree = cos_degree(t.to_interval().abs_max().max(MIN_REAL).ln())?;
    trace!(degree, halvings = n, "cos series");

    let mut negative = (degree / 2) % 2 == 1;
    let mut p = (&t2 / (degree * (degree - 1)) as f64)?;
    if negative {
        p = -p;
    }
    let mut k = degree - 2;
    while k >= 2 {
        negative = !negative;
        p = if negative { p - 1.0 } else { p + 1.0 };
        p = &p * &(&t2 / (k * (k - 1)) as f64)?;
        k -= 2;
    }
    let e = pow2((-53 * stagprec() as i32).max(-1074));
    p = 1.0 + LInterval::from_interval(Interval::unchecked(-e, e)) + &p;
    for _ in 0..n {
        p = sqr(&p).times2pown(1) - 1.0;
    }
    Ok(Some((p, reaches_min, reaches_max)))
}

/// Double enclosure of `tan` or `cot`, or `None` when the double test
/// cannot rule out a pole but the argument is finite. The staggered quotient
/// then decides, at two limbs or more.
fn coarse_quotient(
    dx: Interval,
    f: fn(Interval) -> ArithResult<Interval>,
) -> ArithResult<Option<Interval>> {
    match f(dx) {
        Ok(y) => Ok(Some(y)),
        Err(_) if dx.inf().is_finite() && dx.sup().is_finite() => Ok(None),
        Err(e) => Err(e),
    }
}

/// `num(x) / den(x)` one limb above the caller's precision, failing with
/// `op` when the denominator encloses zero.
fn quotient(
    x: &LInterval,
    coarse: Option<Interval>,
    op: &'static str,
    num: fn(&LInterval) -> ArithResult<LInterval>,
    den: fn(&LInterval) -> ArithResult<LInterval>,
) -> ArithResult<LInterval> {
    let prec = stagprec();
    let y = {
        let _g = PrecisionGuard::new(prec.max(2));
        let d = den(x)?;
        if d.contains_zero() {
            return Err(ArithmeticError::domain(op));
        }
        let n = num(x)?;
        let _inner = PrecisionGuard::new(stagprec() + 1);
        (&n / &d)?
    };
    Ok(match coarse {
        Some(c) => finish(&y, c),
        None => y.adjusted(prec),
    })
}

/// Even Taylor degree for `cos` on `|t| <= e^lnt`. For `|t| < 0.01` and at
/// most [`STAGMAX`] limbs it stays below 100; the cap only trips at larger
/// precisions.
fn cos_degree(lnt: f64) -> ArithResult<i64> {
    let lneps = ln_eps();
    let mut mm: i64 = 6;
    let mut fak = 720.0_f64;
    while lneps - (mm as f64 * lnt + (2.0 / fak).ln()) <= 0.0 {
        mm += 4;
        if mm > 170 {
            return Err(ArithmeticError::series("cos"));
        }
        fak *= (mm * (mm - 1) * (mm - 2) * (mm - 3)) as f64;
    }
    Ok(mm - 2)
}

pub fn tan(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = coarse_quotient(dx, imath::tan)?;
    if let (Some(c), 1) = (coarse, stagprec()) {
        return Ok(LInterval::from_interval(c));
    }
    if is_exactly(dx, 0.0) {
        return Ok(LInterval::new(0.0));
    }
    quotient(x, coarse, "tan", sin, cos)
}

pub fn cot(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = coarse_quotient(dx, imath::cot)?;
    if let (Some(c), 1) = (coarse, stagprec()) {
        return Ok(LInterval::from_interval(c));
    }
    quotient(x, coarse, "cot", cos, sin)
}

fn check_unit_interval(x: &LInterval, op: &'static str) -> ArithResult<()> {
    if x.inf() < -1.0 || x.sup() > 1.0 {
        return Err(ArithmeticError::domain(op));
    }
    Ok(())
}

/// An argument that reaches past `DIRECT_LIMIT` in magnitude but also
/// comes close to zero is evaluated at its endpoints, since the formula for
/// large arguments breaks down at `1 / sqrt(2)`.
fn straddles_limit(x: &LInterval) -> bool {
    let dx = x.to_interval();
    !x.is_point() && dx.abs_min() <= DIRECT_LIMIT && dx.abs_max() > DIRECT_LIMIT
}

pub fn asin(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::asin(dx)?;
    check_unit_interval(x, "asin")?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(LInterval::new(0.0));
    }
    if is_exactly(dx, 1.0) {
        return Ok(pi_half());
    }
    if is_exactly(dx, -1.0) {
        return Ok(-pi_half());
    }
    if straddles_limit(x) {
        return Ok(endpoint_hull(x, true, asin_direct)?.intersect_interval(coarse));
    }
    asin_direct(x)
}

/// `asin x = atan(x / sqrt(1 - x^2))`; for `|x| > 0.75` the doubled angle
/// `u = 2x sqrt(1 - x^2)` is used instead.
fn asin_direct(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::asin(dx)?;
    let large = dx.abs_max() > DIRECT_LIMIT;
    let prec = stagprec();
    let (half_pi, t) = {
        let _g = PrecisionGuard::new(prec + 1);
        let u = if large {
            &(x * 2.0) * &sqrt(&((1.0 - x) * (1.0 + x)))?
        } else {
            x.clone()
        };
        let t = (&u / &sqrt(&((1.0 - &u) * (1.0 + &u)))?)?;
        (pi_half(), t)
    };
    let ta = atan(&t)?;
    let y = {
        let _g = PrecisionGuard::new(prec + 1);
        if !large {
            ta
        } else if dx.inf() > 0.0 {
            &half_pi - &ta.times2pown(-1)
        } else {
            -&half_pi - &ta.times2pown(-1)
        }
    };
    Ok(finish(&y, coarse))
}

pub fn acos(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::acos(dx)?;
    check_unit_interval(x, "acos")?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 1.0) {
        return Ok(LInterval::new(0.0));
    }
    if is_exactly(dx, -1.0) {
        return Ok(pid4().times2pown(2));
    }
    if straddles_limit(x) {
        return Ok(endpoint_hull(x, false, acos_direct)?.intersect_interval(coarse));
    }
    acos_direct(x)
}

fn acos_direct(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::acos(dx)?;
    let negative = dx.sup() < 0.0;
    let y = if negative { -x } else { x.clone() };
    let large = dx.abs_max() > DIRECT_LIMIT;
    let r = {
        let _g = PrecisionGuard::new(stagprec() + 1);
        let pi = pid4().times2pown(2);
        if large {
            let r = asin(&sqrt(&((1.0 - &y) * (1.0 + &y)))?)?;
            if negative {
                &pi - &r
            } else {
                r
            }
        } else {
            let s = asin(&y)?;
            let half = pi.times2pown(-1);
            if negative {
                &half + &s
            } else {
                &half - &s
            }
        }
    };
    Ok(finish(&r, coarse))
}

/// Arctangent: halving by `t / (1 + sqrt(1 + t^2))` until `|t|` is small,
/// then the alternating series.
pub fn atan(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::atan(dx);
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(LInterval::new(0.0));
    }
    if is_exactly(dx, 1.0) {
        return Ok(pid4());
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let eps = 0.01 / stagprec() as f64;
        let mut t = x.clone();
        let mut halvings = 0;
        while t.to_interval().abs_max() > eps {
            t = (&t / &(1.0 + sqrt1px2(&t)?))?;
            halvings += 1;
        }
        let t2 = &t * &t;

        let err = t2.to_interval().abs_max();
        let mut m = 1;
        if expo(err) < -300 {
            m = 4;
        } else {
            let lnt2 = err.ln();
            let ln3m = (3.0 - t2.to_interval().sup()).ln();
            let lneps = ln_eps();
            loop {
                m += 3;
                let slack = lneps - LN3 - f64::from(m + 1) * lnt2 + f64::from(2 * m + 3).ln() + ln3m;
                if slack > 0.0 {
                    break;
                }
            }
        }
        trace!(degree = m, halvings, "atan series");

        let mut sign = if m % 2 == 1 { -1 } else { 1 };
        let mut p = (1.0 / LInterval::new(f64::from(sign * (2 * m + 1))))?;
        for k in (0..m).rev() {
            sign = -sign;
            p = &(&p * &t2) + &(1.0 / LInterval::new(f64::from(sign * (2 * k + 1))))?;
        }
        (&(&t * &p) * &relative_error()).times2pown(halvings)
    };
    Ok(finish(&y, coarse))
}

/// `acot x = π/2 - atan x`.
pub fn acot(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::acot(dx);
    let half_pi = {
        let _g = PrecisionGuard::new(stagprec() + 1);
        pi_half()
    };
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(half_pi.adjust());
    }
    let y = &half_pi - &atan(x)?;
    Ok(finish(&y, coarse))
}
