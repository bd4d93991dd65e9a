//! Inverse trigonometric and hyperbolic functions as principal logarithms:
//!
//! - `asin z = -i ln(i z + sqrt(1 - z^2))`, `acos z = pi/2 - asin z`
//! - `atan z = i/2 (ln(1 - i z) - ln(1 + i z))`, `acot z = atan(1/z)`
//! - `acosh z = ln(z + sqrt(z + 1) sqrt(z - 1))`
//!
//! and the rotations `asinh z = -i asin(i z)`, `atanh z = -i atan(i z)`,
//! `acoth z = atanh(1/z)`.

use super::{ln_principal, sqrt, sqrt1mx2};
use crate::constants::pid2;
use crate::error::{ArithResult, ArithmeticError};
use crate::l_cinterval::LCInterval;
use crate::l_imath::STAGMAX;
use crate::precision::PrecisionGuard;

fn reciprocal(z: &LCInterval, op: &'static str) -> ArithResult<LCInterval> {
    (LCInterval::from(1.0) / z).map_err(|_| ArithmeticError::domain(op))
}

pub fn asin(z: &LCInterval) -> ArithResult<LCInterval> {
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let w = &z.mul_i() + &sqrt1mx2(z)?;
        ln_principal(&w)?.div_i()
    };
    Ok(y.adjust())
}

pub fn acos(z: &LCInterval) -> ArithResult<LCInterval> {
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        LCInterval::from(pid2()) - asin(z)?
    };
    Ok(y.adjust())
}

/// Arctangent; boxes containing `+-i` fail.
pub fn atan(z: &LCInterval) -> ArithResult<LCInterval> {
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let iz = z.mul_i();
        let d = ln_principal(&(1.0 - &iz))? - ln_principal(&(1.0 + &iz))?;
        d.mul_i().times2pown(-1)
    };
    Ok(y.adjust())
}

pub fn acot(z: &LCInterval) -> ArithResult<LCInterval> {
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        atan(&reciprocal(z, "acot")?)?
    };
    Ok(y.adjust())
}

pub fn asinh(z: &LCInterval) -> ArithResult<LCInterval> {
    Ok(asin(&z.mul_i())?.div_i())
}

pub fn acosh(z: &LCInterval) -> ArithResult<LCInterval> {
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let root = &sqrt(&(z + 1.0))? * &sqrt(&(z - 1.0))?;
        ln_principal(&(z + &root))?
    };
    Ok(y.adjust())
}

/// Inverse hyperbolic tangent; boxes containing `+-1` fail.
pub fn atanh(z: &LCInterval) -> ArithResult<LCInterval> {
    Ok(atan(&z.mul_i())?.div_i())
}

pub fn acoth(z: &LCInterval) -> ArithResult<LCInterval> {
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        atanh(&reciprocal(z, "acoth")?)?
    };
    Ok(y.adjust())
}
