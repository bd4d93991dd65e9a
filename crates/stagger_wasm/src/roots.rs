//! Verified polynomial roots: a one-shot solve and a stepped deflation
//! runner that finds one root per step.

use num_complex::Complex;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use stagger_core::cinterval::CInterval;
use stagger_core::cpzero::{cpoly_zero, err_msg, status, Deflation, ZeroSettings};
use wasm_bindgen::prelude::*;

use crate::js_error;

fn coefficients(re: &[f64], im: &[f64]) -> Result<Vec<Complex<f64>>, JsValue> {
    if re.len() != im.len() {
        return Err(JsValue::from_str("Coefficient real/imaginary length mismatch."));
    }
    Ok(re.iter().zip(im).map(|(&a, &b)| Complex::new(a, b)).collect())
}

fn settings_from(value: JsValue) -> Result<ZeroSettings, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ZeroSettings::default());
    }
    from_value(value).map_err(|e| js_error("Invalid settings", e))
}

#[derive(Serialize)]
struct RootSolveResult {
    code: i32,
    message: String,
    deflation: Option<Deflation>,
}

/// Encloses one root near `guess_re + i guess_im`. Failures of the solver are
/// reported through `code` and `message`, not as exceptions.
#[wasm_bindgen]
pub fn solve_polynomial_root(
    coeffs_re: Vec<f64>,
    coeffs_im: Vec<f64>,
    guess_re: f64,
    guess_im: f64,
    settings: JsValue,
) -> Result<JsValue, JsValue> {
    let p = coefficients(&coeffs_re, &coeffs_im)?;
    let settings = settings_from(settings)?;
    let result = cpoly_zero(&p, Complex::new(guess_re, guess_im), &settings);
    let code = status(&result);
    let payload = RootSolveResult {
        code: code.code(),
        message: code.message(),
        deflation: result.ok(),
    };
    to_value(&payload).map_err(|e| js_error("Serialization error", e))
}

#[wasm_bindgen]
pub fn cpoly_zero_message(code: i32) -> String {
    err_msg(code)
}

#[derive(Serialize)]
struct DeflationProgress {
    done: bool,
    found: usize,
    degree: usize,
}

struct DeflationState {
    input: Vec<Complex<f64>>,
    current: Vec<Complex<f64>>,
    guess: Complex<f64>,
    settings: ZeroSettings,
    roots: Vec<CInterval>,
}

impl DeflationState {
    fn done(&self) -> bool {
        self.current.len() <= 1
    }

    fn progress(&self) -> DeflationProgress {
        DeflationProgress {
            done: self.done(),
            found: self.roots.len(),
            degree: self.input.len().saturating_sub(1),
        }
    }

    fn step(&mut self) -> Result<(), JsValue> {
        let step = cpoly_zero(&self.current, self.guess, &self.settings)
            .map_err(|e| js_error("Deflation failed", e))?;
        let polished = cpoly_zero(&self.input, step.root.mid(), &self.settings)
            .map_err(|e| js_error("Re-verification failed", e))?;
        if self.roots.iter().any(|r| r.intersect(&polished.root).is_ok()) {
            return Err(JsValue::from_str("Root enclosure overlaps an earlier one."));
        }
        self.roots.push(polished.root);
        self.current = step.deflated.iter().map(|c| c.mid()).collect();
        Ok(())
    }
}

#[wasm_bindgen]
pub struct WasmDeflationRunner {
    state: Option<DeflationState>,
}

#[wasm_bindgen]
impl WasmDeflationRunner {
    #[wasm_bindgen(constructor)]
    pub fn new(
        coeffs_re: Vec<f64>,
        coeffs_im: Vec<f64>,
        guess_re: f64,
        guess_im: f64,
        settings: JsValue,
    ) -> Result<WasmDeflationRunner, JsValue> {
        console_error_panic_hook::set_once();

        let input = coefficients(&coeffs_re, &coeffs_im)?;
        if input.len() < 2 {
            return Err(JsValue::from_str("Polynomial must have degree at least 1."));
        }
        let settings = settings_from(settings)?;
        Ok(WasmDeflationRunner {
            state: Some(DeflationState {
                current: input.clone(),
                input,
                guess: Complex::new(guess_re, guess_im),
                settings,
                roots: Vec::new(),
            }),
        })
    }

    pub fn is_done(&self) -> bool {
        self.state.as_ref().map_or(true, |state| state.done())
    }

    pub fn run_steps(&mut self, batch_size: u32) -> Result<JsValue, JsValue> {
        let state = self
            .state
            .as_mut()
            .ok_or_else(|| JsValue::from_str("Runner not initialized"))?;

        for _ in 0..batch_size {
            if state.done() {
                break;
            }
            state.step()?;
        }

        to_value(&state.progress()).map_err(|e| js_error("Serialization error", e))
    }

    pub fn get_progress(&self) -> Result<JsValue, JsValue> {
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Runner not initialized"))?;
        to_value(&state.progress()).map_err(|e| js_error("Serialization error", e))
    }

    pub fn get_result(&self) -> Result<JsValue, JsValue> {
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Runner not initialized"))?;
        if !state.done() {
            return Err(JsValue::from_str("Deflation has not finished."));
        }
        to_value(&state.roots).map_err(|e| js_error("Serialization error", e))
    }
}
