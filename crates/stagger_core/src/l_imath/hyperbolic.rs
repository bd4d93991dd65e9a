//! Hyperbolic functions and their inverses.

use tracing::trace;

use super::exp_log::{exp, ln, lnp1};
use super::roots::{sqrt1px2, sqrtp1m1, sqrtx2m1};
use super::{endpoint_hull, finish, is_exactly, ln_eps, relative_error, sqr, sqrt, LNB, STAGMAX};
use crate::constants::ln2;
use crate::error::{ArithResult, ArithmeticError};
use crate::imath;
use crate::interval::Interval;
use crate::l_interval::LInterval;
use crate::l_real::LReal;
use crate::precision::{stagprec, PrecisionGuard};
use crate::rounding::{expo, pow2, MIN_REAL};

/// Past this `exp` no longer has a finite staggered value.
const HYPERBOLIC_LIMIT: f64 = 709.0;
/// `tanh` and `coth` equal one to every representable digit beyond here.
const SATURATION: f64 = 352.0;

const TANH_EXPO: [i32; 8] = [1, -1, -2, -4, -5, -6, -8, -9];
const TANH_NUM: [f64; 8] = [1.0, -1.0, 2.0, -17.0, 62.0, -1382.0, 21844.0, -929569.0];
const TANH_DEN: [f64; 8] = [
    1.0,
    3.0,
    15.0,
    315.0,
    2835.0,
    155925.0,
    6081075.0,
    638512875.0,
];

// coth t = 1/t + (t/3) * sum(COTH_NUM[k] / COTH_DEN[k] * t^(2k))
const COTH_EXPO: [i32; 8] = [-1, -5, -8, -12, -15, -18, -22, -25];
const COTH_NUM: [f64; 8] = [1.0, -1.0, 2.0, -1.0, 2.0, -1382.0, 4.0, -3617.0];
const COTH_DEN: [f64; 8] = [
    1.0,
    15.0,
    315.0,
    1575.0,
    31185.0,
    212837625.0,
    6081075.0,
    54273594375.0,
];

fn coefficient(num: f64, den: f64) -> ArithResult<LInterval> {
    LInterval::new(num) / den
}

/// Horner evaluation of `sum(num[k] / den[k] * s^k)` for `k <= last`.
fn even_series(num: &[f64], den: &[f64], last: usize, s: &LInterval) -> ArithResult<LInterval> {
    let mut y = coefficient(num[last], den[last])?;
    for k in (0..last).rev() {
        y = &y * s + coefficient(num[k], den[k])?;
    }
    Ok(y)
}

/// Number of series terms until `|t|^(2N+1)` scaled by the coefficient
/// drops below `2^floor`, with the bound of the first omitted term.
fn odd_power_tail(t: f64, expos: &[i32; 8], floor: i32) -> (usize, Interval) {
    let r0 = Interval::point(t);
    let r2 = r0.sqr();
    let mut r = r0;
    let mut n = 0;
    loop {
        n += 1;
        r *= r2;
        if n == expos.len() - 1 || expo(r.sup()) + expos[n] <= floor {
            return (n, r);
        }
    }
}

/// Even Taylor degree for `sinh` on `|t| <= e^lnt`. For `|t| <= 0.5` and at
/// most [`STAGMAX`] limbs the search ends by `n = 151`; the cap only trips at
/// larger precisions.
fn sinh_degree(lnt: f64) -> ArithResult<i64> {
    let lneps = ln_eps();
    let mut n: i64 = 1;
    let mut fak = 1.0_f64;
    loop {
        n += 3;
        if n > 170 {
            return Err(ArithmeticError::series("sinh"));
        }
        fak *= (n * (n - 1) * (n - 2)) as f64;
        if lneps + fak.ln() - n as f64 * lnt - LNB > 0.0 {
            return Ok(2 * (n / 2 + 1));
        }
    }
}

pub fn sinh(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::sinh(dx);
    if stagprec() == 1 || dx.abs_max() > HYPERBOLIC_LIMIT {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(x.clone());
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let negative = dx.sup() < 0.0;
        let t = if negative { -x } else { x.clone() };
        let dt = t.to_interval();
        let y = if dt.abs_max() > 0.5 {
            let e = exp(&t)?;
            (&e - &(1.0 / &e)?).times2pown(-1)
        } else {
            let degree = sinh_degree(dt.abs_max().max(MIN_REAL).ln())?;
            trace!(degree, "sinh series");
            let t2 = sqr(&t);
            let mut p = LInterval::new(1.0);
            let mut i = degree;
            while i >= 2 {
                p = (&p * &t2 / ((i + 1) * i) as f64)? + 1.0;
                i -= 2;
            }
            &(&p * &t) * &relative_error()
        };
        if negative {
            -y
        } else {
            y
        }
    };
    Ok(finish(&y, coarse))
}

pub fn cosh(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::cosh(dx);
    if stagprec() == 1 || dx.abs_max() > HYPERBOLIC_LIMIT {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(LInterval::new(1.0));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let e = exp(&x.abs())?;
        let mut y = (&e + &(1.0 / &e)?).times2pown(-1);
        if dx.contains_zero() {
            y.set_inf(&LReal::new(1.0))?;
        }
        y
    };
    Ok(finish(&y, coarse))
}

/// Hyperbolic tangent. Tiny arguments use the odd power series, moderate
/// ones `sinh / cosh`, larger ones `1 - 2 / (exp(2x) + 1)`.
pub fn tanh(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::tanh(dx);
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(x.clone());
    }
    if dx.contains_zero() {
        return endpoint_hull(x, true, tanh);
    }
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        let negative = dx.sup() < 0.0;
        let t = x.abs();
        let dt = t.to_interval();
        let ex = expo(dt.sup());
        let y = if ex < -70 {
            let floor = (ex - 53 * stagprec() as i32).max(-1074);
            let (n, r) = odd_power_tail(dt.sup(), &TANH_EXPO, floor);
            let err = ((r * Interval::point(TANH_NUM[n].abs())) / TANH_DEN[n])?.sup();
            trace!(terms = n, "tanh series");
            let s = sqr(&t);
            &even_series(&TANH_NUM, &TANH_DEN, n - 1, &s)? * &t
                + Interval::unchecked(-err, err)
        } else if ex < -4 {
            let _inner = PrecisionGuard::raise(STAGMAX);
            (sinh(&t)? / cosh(&t)?)?
        } else if dt.sup() < SATURATION {
            let _inner = PrecisionGuard::raise(STAGMAX);
            1.0 - (2.0 / (exp(&t.times2pown(1))? + 1.0))?
        } else if dt.inf() < SATURATION {
            let _inner = PrecisionGuard::raise(STAGMAX);
            let lo = LInterval::from(&t.inf());
            let mut y = 1.0 - (2.0 / (exp(&lo.times2pown(1))? + 1.0))?;
            y.set_sup(&LReal::new(1.0))?;
            y
        } else {
            let lo = LReal::from_limbs(vec![1.0, -pow2(-1014)]);
            LInterval::from_bounds(&lo, &LReal::new(1.0))?
        };
        if negative {
            -y
        } else {
            y
        }
    };
    Ok(finish(&y, coarse))
}

/// Hyperbolic cotangent; the Laurent series handles arguments near zero.
pub fn coth(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::coth(dx)?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        let negative = dx.sup() < 0.0;
        let t = x.abs();
        let dt = t.to_interval();
        let ex = expo(dt.inf());
        let mut y = if ex < -66 {
            let floor = -ex - 53 * stagprec() as i32;
            let (n, r) = odd_power_tail(dt.sup(), &COTH_EXPO, floor);
            if n == COTH_EXPO.len() - 1 && expo(r.sup()) + COTH_EXPO[n] > floor {
                return Ok(LInterval::from_interval(coarse));
            }
            let err = ((r * Interval::point(COTH_NUM[n].abs())) / (3.0 * COTH_DEN[n]))?.sup();
            trace!(terms = n, "coth series");
            let s = sqr(&t);
            let odd = (&even_series(&COTH_NUM, &COTH_DEN, n - 1, &s)? * &t / 3.0)?;
            odd + (1.0 / &t)? + Interval::unchecked(-err, err)
        } else if ex < 2 {
            let _inner = PrecisionGuard::raise(STAGMAX);
            (cosh(&t)? / sinh(&t)?)?
        } else if dt.inf() < SATURATION + 1.0 {
            let _inner = PrecisionGuard::raise(STAGMAX);
            let saturated = dt.sup() >= SATURATION + 1.0;
            let arg = if saturated {
                LInterval::from(&t.inf())
            } else {
                t.clone()
            };
            let mut y = 1.0 + (2.0 / (exp(&arg.times2pown(1))? - 1.0))?;
            if saturated {
                y.set_inf(&LReal::new(1.0))?;
            }
            y
        } else {
            let hi = LReal::from_limbs(vec![1.0, pow2(-1017)]);
            LInterval::from_bounds(&LReal::new(1.0), &hi)?
        };
        if y.inf() < 1.0 {
            y.set_inf(&LReal::new(1.0))?;
        }
        if negative {
            -y
        } else {
            y
        }
    };
    Ok(finish(&y, coarse))
}

pub fn asinh(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::asinh(dx)?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(x.clone());
    }
    if dx.interior_contains(0.0) {
        return endpoint_hull(x, true, asinh);
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let a = dx.abs_max();
        if a < 2e-108 {
            // asinh x = x - x^3 / 6 + ...
            let d = Interval::point(a);
            let err = ((d * d * d) / 6.0)?.sup();
            x + Interval::unchecked(-err, err)
        } else if dx.sup() <= 0.0 {
            -asinh_positive(&-x)?
        } else {
            asinh_positive(x)?
        }
    };
    Ok(finish(&y, coarse))
}

/// `ln(x + sqrt(1 + x^2))` for `x >= 0`, shifted by one below `1e10`.
fn asinh_positive(x: &LInterval) -> ArithResult<LInterval> {
    if x.to_interval().sup() < 1e10 {
        lnp1(&(x + &sqrtp1m1(&sqr(x))?))
    } else {
        ln(&(x + &sqrt1px2(x)?))
    }
}

pub fn acosh(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::acosh(dx)?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 1.0) {
        return Ok(LInterval::new(0.0));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        if expo(dx.inf()) > 500 {
            // ln(2x) - 1/(4x^2) - ... lies in ln(2x) + [-1/x^2, 0]
            let r = (Interval::ONE / Interval::point(dx.inf()))?.sqr().sup();
            ln2() + ln(x)? + Interval::unchecked(-r, 0.0)
        } else if expo(dx.sup()) < 2 {
            let t = x - 1.0;
            let root = sqrt(&(&t * &(2.0 + &t)))?;
            lnp1(&(&t + &root))?
        } else {
            ln(&(x + &sqrtx2m1(x)?))?
        }
    };
    Ok(finish(&y, coarse))
}

pub fn atanh(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::atanh(dx)?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(x.clone());
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        if dx.abs_max() < 0.125 {
            lnp1(&(&x.times2pown(1) / &(1.0 - x))?)?.times2pown(-1)
        } else {
            ln(&((1.0 + x) / (1.0 - x))?)?.times2pown(-1)
        }
    };
    Ok(finish(&y, coarse))
}

/// Inverse hyperbolic cotangent, defined for `|x| > 1`.
pub fn acoth(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::acoth(dx)?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        if dx.abs_max() > 1e10 {
            lnp1(&(2.0 / (x - 1.0))?)?.times2pown(-1)
        } else {
            ln(&((x + 1.0) / (x - 1.0))?)?.times2pown(-1)
        }
    };
    Ok(finish(&y, coarse))
}

/// `acosh(1 + x)` for `x >= 0`, accurate for tiny `x`.
pub fn acoshp1(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::acoshp1(dx)?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(x.clone());
    }
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        let ex = expo(dx.sup());
        if ex <= -1016 {
            // sqrt(2x) (1 - x/12) <= acosh(1 + x) <= sqrt(2x)
            let t = sqrt(&x.times2pown(1))?;
            let lr = LInterval::from(&t.inf());
            let lower = &lr * &(1.0 - (&lr / 12.0)?);
            LInterval::from_bounds(&lower.inf(), &t.sup())?
        } else if ex < -400 && dx.inf() > 0.0 {
            let root = sqrt(&(1.0 + (2.0 / x)?))?;
            lnp1(&(x * &(1.0 + root)))?
        } else {
            acosh(&(1.0 + x))?
        }
    };
    Ok(finish(&y, coarse))
}
