//! Verified enclosure of a simple root of a complex polynomial and of the
//! deflated polynomial.
//!
//! A root `z` of `p(x) = p[0] + p[1] x + ... + p[n] x^n` is an eigenvalue of
//! the companion matrix, and the coefficients `q` of `p(x) / (x - z)` form
//! the matching eigenvector (normalised by `q[n-1] = p[n]`). Both are first
//! refined by a simplified floating-point Newton iteration, then enclosed by
//! an interval residual iteration whose inclusion test certifies that the
//! enclosures contain a true root and the true deflated coefficients.

use anyhow::{bail, Context, Result};
use nalgebra::DVector;
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::accumulator::{CIntervalAccumulator, ComplexAccumulator};
use crate::cinterval::CInterval;
use crate::rounding::Rounding;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZeroSettings {
    /// Cap on floating-point Newton steps.
    pub approx_max_steps: usize,
    /// Relative size of the last Newton correction at which refinement stops.
    pub approx_tolerance: f64,
    /// Cap on interval residual steps.
    pub verify_max_steps: usize,
}

impl Default for ZeroSettings {
    fn default() -> Self {
        Self {
            approx_max_steps: 50,
            approx_tolerance: 1e-9,
            verify_max_steps: 10,
        }
    }
}

/// Integer status codes of the root solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ZeroCode {
    NoError = 0,
    ZeroPoly = 1,
    ConstPoly = 2,
    InvFailed = 3,
    VerFailed = 4,
    IncFailed = 5,
}

impl ZeroCode {
    pub const ALL: [ZeroCode; 6] = [
        ZeroCode::NoError,
        ZeroCode::ZeroPoly,
        ZeroCode::ConstPoly,
        ZeroCode::InvFailed,
        ZeroCode::VerFailed,
        ZeroCode::IncFailed,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<ZeroCode> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Human-readable diagnostic for this status.
    pub fn message(self) -> String {
        match self {
            ZeroCode::NoError => "No error occurred".to_string(),
            ZeroCode::ZeroPoly => ZeroError::ZeroPoly.to_string(),
            ZeroCode::ConstPoly => ZeroError::ConstPoly.to_string(),
            ZeroCode::InvFailed => ZeroError::InvFailed.to_string(),
            ZeroCode::VerFailed => ZeroError::VerFailed.to_string(),
            ZeroCode::IncFailed => ZeroError::IncFailed.to_string(),
        }
    }
}

/// Message for a raw status code; unknown codes get a fixed text.
pub fn err_msg(code: i32) -> String {
    match ZeroCode::from_code(code) {
        Some(c) => c.message(),
        None => "Error: Code not defined!".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZeroError {
    #[error("Error: Zero polynomial occurred!")]
    ZeroPoly,
    #[error("Error: Constant polynomial != 0 occurred!")]
    ConstPoly,
    #[error("Error: Inversion of the Jacobian failed!")]
    InvFailed,
    #[error("Error: Verified inversion of the Jacobian failed!")]
    VerFailed,
    #[error("Error: Inclusion failed!")]
    IncFailed,
}

impl ZeroError {
    pub fn code(&self) -> ZeroCode {
        match self {
            ZeroError::ZeroPoly => ZeroCode::ZeroPoly,
            ZeroError::ConstPoly => ZeroCode::ConstPoly,
            ZeroError::InvFailed => ZeroCode::InvFailed,
            ZeroError::VerFailed => ZeroCode::VerFailed,
            ZeroError::IncFailed => ZeroCode::IncFailed,
        }
    }
}

/// Status code of a solver result.
pub fn status<T>(result: &Result<T, ZeroError>) -> ZeroCode {
    match result {
        Ok(_) => ZeroCode::NoError,
        Err(e) => e.code(),
    }
}

/// Verified root enclosure and deflated coefficients `qq[0..n-1]`, with
/// `qq[n-1]` the point `p[n]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deflation {
    pub root: CInterval,
    pub deflated: Vec<CInterval>,
}

/// Encloses a root of `p` near `guess` together with `p(x) / (x - root)`.
/// The degree is `p.len() - 1`; the leading coefficient is taken as given.
pub fn cpoly_zero(
    p: &[Complex<f64>],
    guess: Complex<f64>,
    settings: &ZeroSettings,
) -> Result<Deflation, ZeroError> {
    let zero = Complex::new(0.0, 0.0);
    let classify = |c: Complex<f64>| {
        if c == zero {
            ZeroError::ZeroPoly
        } else {
            ZeroError::ConstPoly
        }
    };
    match p {
        [] => Err(ZeroError::ZeroPoly),
        [p0] => Err(classify(*p0)),
        [p0, p1] if *p1 == zero => Err(classify(*p0)),
        [p0, p1] => {
            let root = (-CInterval::point(*p0) / *p1).map_err(|_| ZeroError::InvFailed)?;
            Ok(Deflation {
                root,
                deflated: vec![CInterval::point(*p1)],
            })
        }
        _ => {
            let p = DVector::from_column_slice(p);
            let (z, q) = approximate(&p, guess, settings)?;
            debug!(degree = p.len() - 1, re = z.re, im = z.im, "approximate root");
            verify(&p, &q, z, settings)
        }
    }
}

fn max_norm<'a>(v: impl Iterator<Item = &'a Complex<f64>>) -> f64 {
    v.map(|c| c.norm()).fold(0.0, f64::max)
}

/// Simplified Newton iteration on the eigenpair `(z, q)`. Returns the refined
/// root and deflated coefficients.
fn approximate(
    p: &DVector<Complex<f64>>,
    mut z: Complex<f64>,
    settings: &ZeroSettings,
) -> Result<(Complex<f64>, DVector<Complex<f64>>), ZeroError> {
    let n = p.len() - 1;
    let mut q = DVector::from_element(n, Complex::new(0.0, 0.0));
    q[n - 1] = p[n];
    for i in (0..n - 1).rev() {
        q[i] = q[i + 1] * z + p[i + 1];
    }

    let mut d = DVector::from_element(n, Complex::new(0.0, 0.0));
    let mut w = d.clone();
    let mut delta = d.clone();
    for k in 1..=settings.approx_max_steps {
        // defect d = (A - z I) q
        for i in 0..n {
            let mut acc = ComplexAccumulator::new();
            if i == 0 {
                acc.sub(p[0]);
            } else {
                acc.add(q[i - 1]);
                acc.sub(p[i]);
            }
            acc.accumulate(-z, q[i]);
            d[i] = acc.round(Rounding::Nearest);
        }

        w[n - 1] = q[n - 1];
        for i in (0..n - 1).rev() {
            let mut acc = ComplexAccumulator::new();
            acc.add(q[i]);
            acc.accumulate(z, w[i + 1]);
            w[i] = acc.round(Rounding::Nearest);
        }
        if w[0] == Complex::new(0.0, 0.0) {
            warn!(step = k, "singular Jacobian in newton refinement");
            return Err(ZeroError::InvFailed);
        }

        delta[n - 1] = d[n - 1];
        for i in (0..n - 1).rev() {
            delta[i] = d[i] + z * delta[i + 1];
        }
        let t = delta[0] / w[0];
        for i in 0..n - 1 {
            delta[i] = -delta[i + 1] + t * w[i + 1];
        }
        delta[n - 1] = t;

        for i in 0..n - 1 {
            q[i] += delta[i];
        }
        z += delta[n - 1];

        let scale = max_norm(q.iter().take(n - 1)).max(z.norm());
        let relative = max_norm(delta.iter()) / scale;
        trace!(step = k, relative, "newton correction");
        if relative <= settings.approx_tolerance {
            break;
        }
    }
    Ok((z, q))
}

/// Interval residual iteration around `(z, q)`.
fn verify(
    p: &DVector<Complex<f64>>,
    q: &DVector<Complex<f64>>,
    z: Complex<f64>,
    settings: &ZeroSettings,
) -> Result<Deflation, ZeroError> {
    let n = p.len() - 1;
    let zi = CInterval::point(z);
    let origin = CInterval::default();

    let mut dd = DVector::from_element(n, origin);
    for i in 0..n {
        let mut acc = CIntervalAccumulator::new();
        if i == 0 {
            acc.sub_point(p[0]);
        } else {
            acc.add_point(q[i - 1]);
            acc.sub_point(p[i]);
        }
        acc.accumulate_point(-z, q[i]);
        dd[i] = acc.round();
    }

    let mut ww = DVector::from_element(n, origin);
    ww[n - 1] = CInterval::point(q[n - 1]);
    for i in (0..n - 1).rev() {
        let mut acc = CIntervalAccumulator::from_point(q[i]);
        acc.accumulate(zi, ww[i + 1]);
        ww[i] = acc.round();
    }
    if ww[0].contains_zero() {
        warn!("Jacobian inverse not verified");
        return Err(ZeroError::VerFailed);
    }
    let over_w0 = |x: CInterval| (x / ww[0]).map_err(|_| ZeroError::VerFailed);

    let mut start = DVector::from_element(n, origin);
    start[n - 1] = dd[n - 1];
    for i in (0..n - 1).rev() {
        let mut acc = CIntervalAccumulator::new();
        acc.add(dd[i]);
        acc.accumulate(zi, start[i + 1]);
        start[i] = acc.round();
    }
    let tt = over_w0(start[0])?;
    for i in 0..n - 1 {
        let mut acc = CIntervalAccumulator::new();
        acc.sub(start[i + 1]);
        acc.accumulate(tt, ww[i + 1]);
        start[i] = acc.round();
    }
    start[n - 1] = tt;

    let mut ddelta = start.clone();
    let mut vv = DVector::from_element(n, origin);
    let mut certified = false;
    for k in 0..settings.verify_max_steps {
        let eps = match k {
            0..=3 => 0.125,
            4..=6 => 0.5,
            _ => 5.0,
        };
        let old = ddelta.map(|x| x.blow(eps));

        vv[n - 1] = origin;
        for i in (0..n - 1).rev() {
            let mut acc = CIntervalAccumulator::new();
            acc.accumulate(old[n - 1], old[i]);
            acc.accumulate(zi, vv[i + 1]);
            vv[i] = acc.round();
        }
        vv[0] = over_w0(vv[0])?;
        for i in 0..n - 1 {
            let mut acc = CIntervalAccumulator::new();
            acc.add(start[i]);
            acc.add(vv[i + 1]);
            acc.accumulate(-vv[0], ww[i + 1]);
            ddelta[i] = acc.round();
        }
        ddelta[n - 1] = start[n - 1] - vv[0];

        certified = ddelta.iter().zip(old.iter()).all(|(new, old)| new.interior_of(old));
        trace!(step = k + 1, certified, "interval residual step");
        if certified {
            break;
        }
    }
    if !certified {
        warn!("residual iteration did not contract");
        return Err(ZeroError::IncFailed);
    }

    let mut deflated: Vec<CInterval> = (0..n - 1)
        .map(|i| {
            let mut acc = CIntervalAccumulator::from_point(q[i]);
            acc.add(ddelta[i]);
            acc.round()
        })
        .collect();
    deflated.push(CInterval::point(p[n]));
    let mut acc = CIntervalAccumulator::from_point(z);
    acc.add(ddelta[n - 1]);
    Ok(Deflation {
        root: acc.round(),
        deflated,
    })
}

/// Encloses all roots of `p` by repeated deflation. Each root found on a
/// deflated polynomial is re-verified against `p` itself, so clustered or
/// multiple roots surface as an error rather than a wrong enclosure.
pub fn all_roots(
    p: &[Complex<f64>],
    guess: Complex<f64>,
    settings: &ZeroSettings,
) -> Result<Vec<CInterval>> {
    let degree = p.len().saturating_sub(1);
    let mut current = p.to_vec();
    let mut roots: Vec<CInterval> = Vec::with_capacity(degree);
    while current.len() > 1 {
        let step = cpoly_zero(&current, guess, settings)
            .with_context(|| format!("deflating to degree {}", current.len() - 2))?;
        let polished = cpoly_zero(p, step.root.mid(), settings)
            .with_context(|| format!("re-verifying root {} on the input", roots.len() + 1))?;
        if roots.iter().any(|r| r.intersect(&polished.root).is_ok()) {
            bail!("root enclosure {} overlaps an earlier one", polished.root);
        }
        debug!(found = roots.len() + 1, degree, "root verified");
        roots.push(polished.root);
        current = step.deflated.iter().map(|c| c.mid()).collect();
    }
    Ok(roots)
}
