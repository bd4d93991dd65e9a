//! Elementary functions on staggered intervals.
//!
//! Every function first evaluates the double enclosure from
//! [`crate::imath`]. At precision 1 that enclosure is the answer. Otherwise
//! the function works one limb above the caller's precision (at most
//! [`STAGMAX`] limbs), reduces the argument, sums a truncated series with an
//! explicit error term, undoes the reduction, reads the result back at the
//! caller's precision and intersects it with the double enclosure.
//!
//! Domain violations surface as [`ArithmeticError::OutOfDomain`]; a series
//! whose degree search runs past `170!` fails with
//! [`ArithmeticError::SeriesOverflow`].

mod exp_log;
mod hyperbolic;
mod roots;
mod trig;

pub use exp_log::{exp, exp10, exp2, expm1, expmx2, ln, ln_sqrtx2y2, lnp1, log10, log2};
pub use hyperbolic::{acosh, acoshp1, acoth, asinh, atanh, cosh, coth, sinh, tanh};
pub use roots::{sqrt1mx2, sqrt1px2, sqrtp1m1, sqrtx2m1, sqrtx2y2};
pub use trig::{acos, acot, asin, atan, cos, cot, sin, tan};

use tracing::trace;

use crate::error::{ArithResult, ArithmeticError};
use crate::imath;
use crate::interval::Interval;
use crate::l_interval::LInterval;
use crate::l_real::LReal;
use crate::precision::{stagprec, PrecisionGuard};
use crate::rounding::{expo, pow2};

/// Highest working precision of the series evaluations.
pub const STAGMAX: usize = 19;
/// Working-precision cap of the Newton square root.
const SQRT_STAGMAX: usize = 30;
/// Rough `ln 2`, only used for degree estimates.
const LNB: f64 = 0.693_147_18;
const DIGITS: f64 = 53.0;

/// `ln` of the target accuracy `2^(1 - 53 p)` at the current precision.
fn ln_eps() -> f64 {
    (1.0 - DIGITS * stagprec() as f64) * LNB
}

fn is_exactly(x: Interval, v: f64) -> bool {
    x.is_point() && x.inf() == v
}

/// `1 + [-e, e]` with `e = 2^(1 - 53 p)`: the relative error of a series
/// truncated at the current precision.
fn relative_error() -> LInterval {
    let e = pow2((1 - 53 * stagprec() as i32).max(-1074));
    LInterval::from_parts(vec![1.0], Interval::unchecked(-e, e))
}

/// Back at the caller's precision, tightened with the double enclosure.
fn finish(y: &LInterval, coarse: Interval) -> LInterval {
    y.adjust().intersect_interval(coarse)
}

/// Hull of a monotone function's values at the endpoints of `x`.
fn endpoint_hull(
    x: &LInterval,
    increasing: bool,
    f: impl Fn(&LInterval) -> ArithResult<LInterval>,
) -> ArithResult<LInterval> {
    let at_inf = f(&LInterval::from(&x.inf()))?;
    let at_sup = f(&LInterval::from(&x.sup()))?;
    if increasing {
        LInterval::from_bounds(&at_inf.inf(), &at_sup.sup())
    } else {
        LInterval::from_bounds(&at_sup.inf(), &at_inf.sup())
    }
}

/// Square; never negative, unlike `x * x` for an `x` containing zero.
pub fn sqr(x: &LInterval) -> LInterval {
    let a = x.abs();
    &a * &a
}

/// Integer power by binary powering.
pub fn power(x: &LInterval, n: i32) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::power(dx, n)?;
    if is_exactly(dx, 1.0) {
        return Ok(x.clone());
    }
    if n == 0 {
        return Ok(LInterval::new(1.0));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        match n {
            1 => x.clone(),
            2 => sqr(x),
            _ => {
                let k = n.unsigned_abs() as u64;
                let mut y = if k % 2 == 1 {
                    x.clone()
                } else {
                    LInterval::new(1.0)
                };
                let mut base = sqr(x);
                let mut bit = 2u64;
                while bit <= k {
                    if (k / bit) % 2 == 1 {
                        y = &y * &base;
                    }
                    bit += bit;
                    if bit <= k {
                        base = sqr(&base);
                    }
                }
                if n < 0 {
                    y = (1.0 / &y)?;
                }
                y
            }
        }
    };
    Ok(finish(&y, coarse))
}

/// `x^e` for an arbitrary exponent, via `exp(e ln x)` unless `e` is a small
/// integer.
pub fn pow(x: &LInterval, e: &LInterval) -> ArithResult<LInterval> {
    let de = e.to_interval();
    if de.is_point() && de.inf().abs() < 32768.0 && de.inf().fract() == 0.0 {
        return power(x, de.inf() as i32);
    }
    let dx = x.to_interval();
    if dx.inf() < 0.0 {
        return Err(ArithmeticError::domain("pow"));
    }
    let coarse = imath::pow(dx, de)?;
    if is_exactly(dx, 1.0) || is_exactly(de, 1.0) {
        return Ok(x.clone());
    }
    if dx.inf() == 0.0 || stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        exp(&(e * &ln(x)?))?
    };
    Ok(finish(&y, coarse))
}

/// Square root by an interval Newton iteration that doubles the precision
/// on every step. Arguments wider than a double ulp are evaluated at their
/// endpoints.
pub fn sqrt(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::sqrt(dx)?;
    if is_exactly(dx, 0.0) || is_exactly(dx, 1.0) {
        return Ok(x.clone());
    }
    let y = if dx.inf() > 0.0 && x.rel_diam() > f64::EPSILON {
        endpoint_hull(x, true, sqrt_newton)?
    } else {
        sqrt_newton(x)?
    };
    Ok(y.intersect_interval(coarse))
}

fn sqrt_newton(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let inf_zero = dx.inf() == 0.0;
    let mut x1 = if inf_zero {
        LInterval::from(&x.sup())
    } else {
        x.clone()
    };

    // Scale small arguments by an even power of two.
    let mut ex = expo(dx.sup());
    if ex > 0 {
        ex = 0;
    } else {
        ex = (-ex).min(1023);
        if ex % 2 == 1 {
            ex -= 1;
        }
    }
    x1 = x1.times2pown(ex);

    let target = (stagprec() + 1).min(SQRT_STAGMAX);
    let mut t = LInterval::from_interval(imath::sqrt(x1.to_interval())?);
    let mut p = 1;
    while p < target {
        p = (2 * p).min(SQRT_STAGMAX);
        let _g = PrecisionGuard::new(p);
        let mt = LInterval::from(&t.mid());
        let slope = t.times2pown(1);
        let step = &mt - &((&(&mt * &mt) - &x1) / &slope)?;
        t = (&step & &t)?;
    }
    trace!(limbs = p, "sqrt newton finished");
    let mut y = t.times2pown(-ex / 2).adjust();
    if inf_zero {
        y.set_inf(&LReal::zero())?;
    }
    Ok(y)
}

/// `n`-th root by Newton steps of doubling precision.
pub fn sqrt_n(x: &LInterval, n: i32) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::sqrt_n(dx, n)?;
    if n < 0 {
        return 1.0 / sqrt_n(x, -n)?;
    }
    if n == 1 || is_exactly(dx, 0.0) || is_exactly(dx, 1.0) {
        return Ok(x.clone());
    }
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if dx.inf() == 0.0 {
        let mut y = sqrt_n(&LInterval::from(&x.sup()), n)?;
        y.set_inf(&LReal::zero())?;
        return Ok(y.intersect_interval(coarse));
    }
    let y = {
        let _outer = PrecisionGuard::raise(STAGMAX);
        let mut steps = 2;
        while steps < stagprec() {
            steps *= 2;
        }
        steps *= 2;

        let shift = -expo(dx.sup());
        let xx = x.times2pown(shift);
        let mut y = LInterval::from_interval(imath::sqrt_n(dx.times2pown(shift), n)?);
        let mut p = 1;
        let mut i = 2;
        while i <= steps {
            let short = p;
            p = (2 * p).min(STAGMAX);
            let (my, fy) = {
                let _g = PrecisionGuard::new(p);
                let my = LInterval::from(&y.mid());
                let fy = &power(&my, n)? - &xx;
                (my, fy)
            };
            let corr = {
                let _g = PrecisionGuard::new(short);
                (&fy / &(&power(&y, n - 1)? * f64::from(n)))?
            };
            y = {
                let _g = PrecisionGuard::new(p);
                &my - &corr
            };
            i += i;
        }
        // 2^(-shift / n) = exp(-shift ln 2 / n)
        let back = (LInterval::new(-f64::from(shift)) / f64::from(n))?;
        &y * &exp(&(&back * &crate::constants::ln2()))?
    };
    Ok(finish(&y, coarse))
}
