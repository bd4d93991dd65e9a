//! JavaScript bindings for the staggered interval library: elementary
//! function evaluation at a chosen precision and the verified polynomial
//! root solver.

use wasm_bindgen::prelude::*;

mod functions;
mod roots;

pub use functions::{eval_complex_function, eval_real_function};
pub use roots::{cpoly_zero_message, solve_polynomial_root, WasmDeflationRunner};

/// Limb count used by the bindings when the caller passes `0`.
pub const DEFAULT_PRECISION: u32 = 2;

#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

pub(crate) fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}
