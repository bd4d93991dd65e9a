//! Exponential, trigonometric and hyperbolic functions.
//!
//! `tan` and `cot` use the half-angle quotients
//! `tan z = (sin 2x + i sinh 2y) / (cos 2x + cosh 2y)` and
//! `cot z = (sin 2x - i sinh 2y) / (cosh 2y - cos 2x)`, whose denominators
//! vanish exactly at the poles. `tanh` and `coth` are rotations of them.

use super::growth_ok;
use crate::constants::{ln10, ln2};
use crate::error::{ArithResult, ArithmeticError};
use crate::interval::Interval;
use crate::l_cinterval::LCInterval;
use crate::l_imath::{self as real, STAGMAX};
use crate::l_interval::LInterval;
use crate::precision::PrecisionGuard;

/// `expm1` switches to the cancellation-free real part when both `e^x cos y`
/// and `cos y` lie inside this interval.
const CANCELLATION_BAND: (f64, f64) = (0.995, 1.005);

pub fn exp(z: &LCInterval) -> ArithResult<LCInterval> {
    if z.re.to_interval().sup() > super::GROWTH_LIMIT {
        return Err(ArithmeticError::domain("exp"));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let a = real::exp(&z.re)?;
        LCInterval::new(&a * &real::cos(&z.im)?, &a * &real::sin(&z.im)?)
    };
    Ok(y.adjust())
}

pub fn exp2(z: &LCInterval) -> ArithResult<LCInterval> {
    exp(&z.scale(&ln2()))
}

pub fn exp10(z: &LCInterval) -> ArithResult<LCInterval> {
    exp(&z.scale(&ln10()))
}

/// `exp(z) - 1`. Near the real axis the real part `e^x cos y - 1` is taken
/// as `expm1(x + ln(1 - sin^2 y) / 2)`.
pub fn expm1(z: &LCInterval) -> ArithResult<LCInterval> {
    if z.re.to_interval().sup() > super::GROWTH_LIMIT {
        return Err(ArithmeticError::domain("expm1"));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let exp_x = real::exp(&z.re)?;
        let sin_y = real::sin(&z.im)?;
        let cos_y = real::cos(&z.im)?;
        let band = LInterval::from_interval(Interval::unchecked(CANCELLATION_BAND.0, CANCELLATION_BAND.1));
        let h = &exp_x * &cos_y;
        let re = if h.interior_of(&band) && cos_y.interior_of(&band) {
            let half_log = real::lnp1(&-real::sqr(&sin_y))?.times2pown(-1);
            real::expm1(&(&z.re + &half_log))?
        } else {
            h - 1.0
        };
        LCInterval::new(re, &exp_x * &sin_y)
    };
    Ok(y.adjust())
}

pub fn sin(z: &LCInterval) -> ArithResult<LCInterval> {
    growth_ok(&z.im, "sin")?;
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let (x, t) = (&z.re, &z.im);
        LCInterval::new(
            &real::sin(x)? * &real::cosh(t)?,
            &real::cos(x)? * &real::sinh(t)?,
        )
    };
    Ok(y.adjust())
}

pub fn cos(z: &LCInterval) -> ArithResult<LCInterval> {
    growth_ok(&z.im, "cos")?;
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let (x, t) = (&z.re, &z.im);
        LCInterval::new(
            &real::cos(x)? * &real::cosh(t)?,
            -(&real::sin(x)? * &real::sinh(t)?),
        )
    };
    Ok(y.adjust())
}

pub fn sinh(z: &LCInterval) -> ArithResult<LCInterval> {
    growth_ok(&z.re, "sinh")?;
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let (x, t) = (&z.re, &z.im);
        LCInterval::new(
            &real::cos(t)? * &real::sinh(x)?,
            &real::sin(t)? * &real::cosh(x)?,
        )
    };
    Ok(y.adjust())
}

pub fn cosh(z: &LCInterval) -> ArithResult<LCInterval> {
    growth_ok(&z.re, "cosh")?;
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let (x, t) = (&z.re, &z.im);
        LCInterval::new(
            &real::cos(t)? * &real::cosh(x)?,
            &real::sin(t)? * &real::sinh(x)?,
        )
    };
    Ok(y.adjust())
}

/// Numerators and denominator of the half-angle forms at `2z`.
fn doubled_parts(z: &LCInterval, op: &'static str) -> ArithResult<[LInterval; 4]> {
    let x2 = z.re.times2pown(1);
    let y2 = z.im.times2pown(1);
    growth_ok(&y2, op)?;
    Ok([
        real::sin(&x2)?,
        real::sinh(&y2)?,
        real::cos(&x2)?,
        real::cosh(&y2)?,
    ])
}

/// Tangent; boxes containing a pole `(k + 1/2) pi` fail.
pub fn tan(z: &LCInterval) -> ArithResult<LCInterval> {
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let [s, sh, c, ch] = doubled_parts(z, "tan")?;
        let den = &c + &ch;
        if den.contains_zero() {
            return Err(ArithmeticError::domain("tan"));
        }
        LCInterval::new((&s / &den)?, (&sh / &den)?)
    };
    Ok(y.adjust())
}

/// Cotangent; boxes containing a pole `k pi` fail.
pub fn cot(z: &LCInterval) -> ArithResult<LCInterval> {
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let [s, sh, c, ch] = doubled_parts(z, "cot")?;
        let den = &ch - &c;
        if den.contains_zero() {
            return Err(ArithmeticError::domain("cot"));
        }
        LCInterval::new((&s / &den)?, -(&sh / &den)?)
    };
    Ok(y.adjust())
}

/// `tanh z = -i tan(i z)`.
pub fn tanh(z: &LCInterval) -> ArithResult<LCInterval> {
    Ok(tan(&z.mul_i())?.div_i())
}

/// `coth z = i cot(i z)`.
pub fn coth(z: &LCInterval) -> ArithResult<LCInterval> {
    Ok(cot(&z.mul_i())?.mul_i())
}
