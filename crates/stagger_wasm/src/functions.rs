//! Name-dispatched elementary functions over staggered intervals.

use js_sys::Float64Array;
use stagger_core::error::ArithResult;
use stagger_core::interval::Interval;
use stagger_core::{l_cimath, l_imath, LCInterval, LInterval, PrecisionGuard};
use wasm_bindgen::prelude::*;

use crate::{js_error, DEFAULT_PRECISION};

type RealFn = fn(&LInterval) -> ArithResult<LInterval>;
type ComplexFn = fn(&LCInterval) -> ArithResult<LCInterval>;

fn real_function(name: &str) -> Option<RealFn> {
    let f: RealFn = match name {
        "exp" => l_imath::exp,
        "exp2" => l_imath::exp2,
        "exp10" => l_imath::exp10,
        "expm1" => l_imath::expm1,
        "expmx2" => l_imath::expmx2,
        "ln" => l_imath::ln,
        "log2" => l_imath::log2,
        "log10" => l_imath::log10,
        "lnp1" => l_imath::lnp1,
        "sqrt" => l_imath::sqrt,
        "sqrt1px2" => l_imath::sqrt1px2,
        "sqrtp1m1" => l_imath::sqrtp1m1,
        "sqrtx2m1" => l_imath::sqrtx2m1,
        "sqrt1mx2" => l_imath::sqrt1mx2,
        "sin" => l_imath::sin,
        "cos" => l_imath::cos,
        "tan" => l_imath::tan,
        "cot" => l_imath::cot,
        "asin" => l_imath::asin,
        "acos" => l_imath::acos,
        "atan" => l_imath::atan,
        "acot" => l_imath::acot,
        "sinh" => l_imath::sinh,
        "cosh" => l_imath::cosh,
        "tanh" => l_imath::tanh,
        "coth" => l_imath::coth,
        "asinh" => l_imath::asinh,
        "acosh" => l_imath::acosh,
        "atanh" => l_imath::atanh,
        "acoth" => l_imath::acoth,
        "acoshp1" => l_imath::acoshp1,
        _ => return None,
    };
    Some(f)
}

fn complex_function(name: &str) -> Option<ComplexFn> {
    let f: ComplexFn = match name {
        "exp" => l_cimath::exp,
        "exp2" => l_cimath::exp2,
        "exp10" => l_cimath::exp10,
        "expm1" => l_cimath::expm1,
        "ln" => l_cimath::ln,
        "Ln" => l_cimath::ln_principal,
        "log2" => l_cimath::log2,
        "log10" => l_cimath::log10,
        "lnp1" => l_cimath::lnp1,
        "sqrt" => l_cimath::sqrt,
        "sqrt1px2" => l_cimath::sqrt1px2,
        "sqrtp1m1" => l_cimath::sqrtp1m1,
        "sqrtx2m1" => l_cimath::sqrtx2m1,
        "sqrt1mx2" => l_cimath::sqrt1mx2,
        "sin" => l_cimath::sin,
        "cos" => l_cimath::cos,
        "tan" => l_cimath::tan,
        "cot" => l_cimath::cot,
        "asin" => l_cimath::asin,
        "acos" => l_cimath::acos,
        "atan" => l_cimath::atan,
        "acot" => l_cimath::acot,
        "sinh" => l_cimath::sinh,
        "cosh" => l_cimath::cosh,
        "tanh" => l_cimath::tanh,
        "coth" => l_cimath::coth,
        "asinh" => l_cimath::asinh,
        "acosh" => l_cimath::acosh,
        "atanh" => l_cimath::atanh,
        "acoth" => l_cimath::acoth,
        _ => return None,
    };
    Some(f)
}

fn precision(prec: u32) -> usize {
    if prec == 0 {
        DEFAULT_PRECISION as usize
    } else {
        prec as usize
    }
}

fn interval(inf: f64, sup: f64) -> Result<Interval, JsValue> {
    Interval::new(inf, sup).map_err(|e| js_error("Invalid interval", e))
}

/// Evaluates `name` on `[inf, sup]` with `prec` limbs and returns the double
/// enclosure `[inf, sup]` of the result.
#[wasm_bindgen]
pub fn eval_real_function(name: &str, inf: f64, sup: f64, prec: u32) -> Result<Float64Array, JsValue> {
    let f = real_function(name).ok_or_else(|| JsValue::from_str(&format!("Unknown function: {}", name)))?;
    let x = LInterval::from_interval(interval(inf, sup)?);
    let _g = PrecisionGuard::new(precision(prec));
    let y = f(&x).map_err(|e| js_error(name, e))?.to_interval();
    Ok(Float64Array::from([y.inf(), y.sup()].as_slice()))
}

/// Complex counterpart of [`eval_real_function`]. `bounds` is
/// `[re_inf, re_sup, im_inf, im_sup]`; the result has the same layout.
#[wasm_bindgen]
pub fn eval_complex_function(name: &str, bounds: Vec<f64>, prec: u32) -> Result<Float64Array, JsValue> {
    let f = complex_function(name).ok_or_else(|| JsValue::from_str(&format!("Unknown function: {}", name)))?;
    if bounds.len() != 4 {
        return Err(JsValue::from_str("Complex bounds must have length 4."));
    }
    let z = LCInterval::new(
        LInterval::from_interval(interval(bounds[0], bounds[1])?),
        LInterval::from_interval(interval(bounds[2], bounds[3])?),
    );
    let _g = PrecisionGuard::new(precision(prec));
    let w = f(&z).map_err(|e| js_error(name, e))?.to_cinterval();
    Ok(Float64Array::from(
        [w.re.inf(), w.re.sup(), w.im.inf(), w.im.sup()].as_slice(),
    ))
}
