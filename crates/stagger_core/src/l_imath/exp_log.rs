//! Exponentials and logarithms.

use tracing::trace;

use super::{finish, is_exactly, ln_eps, sqr, sqrt, LNB, STAGMAX};
use crate::constants::{ln10, ln2};
use crate::error::{ArithResult, ArithmeticError};
use crate::imath;
use crate::interval::Interval;
use crate::l_interval::LInterval;
use crate::precision::{stagprec, PrecisionGuard};
use crate::rounding::{expo, pow2, succ, MIN_REAL};

/// Below this `exp` underflows to the double enclosure.
const EXP_UNDERFLOW: f64 = -708.396_418_532_264;
/// Above this `exp` overflows.
const EXP_OVERFLOW: f64 = 709.782_712_893_384;
/// Factorials past `170!` overflow a double.
const MAX_FACTORIAL: i64 = 170;

/// Exponential by halving reduction, Taylor series and repeated squaring.
pub fn exp(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::exp(dx);
    if stagprec() == 1 || dx.inf() < EXP_UNDERFLOW || dx.sup() > EXP_OVERFLOW {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 0.0) {
        return Ok(LInterval::new(1.0));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let negative = dx.sup() <= 0.0;
        let t = if negative { -x } else { x.clone() };

        let mut halvings = 0;
        let mut zhn = 1.0;
        while t.to_interval().abs_max() / zhn > 0.1 {
            halvings += 1;
            zhn += zhn;
        }
        let t = t.times2pown(-halvings);
        let dt = t.to_interval();

        let (n, fak) = exp_degree(dt.abs_max().max(MIN_REAL).ln())?;
        trace!(degree = n, halvings, "exp series");

        let mut p = (&t / n as f64)?;
        for i in (1..n).rev() {
            p = ((p + 1.0) * &t / i as f64)?;
        }
        // Lagrange remainder, |exp(xi)| < 2 on |t| <= 0.1.
        let rest = ((Interval::unchecked(-2.0, 2.0) * imath::power(dt.abs(), n as i32)?) / fak)?;
        p = p + &(1.0 + LInterval::from_interval(rest));
        for _ in 0..halvings {
            p = &p * &p;
        }
        if negative {
            p = (1.0 / p)?;
        }
        p
    };
    Ok(finish(&y, coarse))
}

/// Taylor degree `n` and `n!` for `exp` on `|t| <= e^lny` at the current
/// precision. For `|t| <= 0.1` and at most [`STAGMAX`] limbs the degree stays
/// below 120; the cap only trips at larger precisions.
fn exp_degree(lny: f64) -> ArithResult<(i64, f64)> {
    let lneps = ln_eps();
    let mut n: i64 = 2;
    let mut fak = 2.0_f64;
    while lneps - LNB + fak.ln() - n as f64 * lny <= 0.0 {
        n += 3;
        if n > MAX_FACTORIAL {
            return Err(ArithmeticError::series("exp"));
        }
        fak *= (n * (n - 1) * (n - 2)) as f64;
    }
    Ok((n, fak))
}

/// `2^x`.
pub fn exp2(x: &LInterval) -> ArithResult<LInterval> {
    let coarse = imath::exp2(x.to_interval());
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        exp(&(x * &ln2()))?
    };
    Ok(finish(&y, coarse))
}

/// `10^x`.
pub fn exp10(x: &LInterval) -> ArithResult<LInterval> {
    let coarse = imath::exp10(x.to_interval());
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        exp(&(x * &ln10()))?
    };
    Ok(finish(&y, coarse))
}

/// `exp(x) - 1`; tiny arguments use the Taylor polynomial directly.
pub fn expm1(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::expm1(dx);
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        let s = dx.abs_max();
        let ex = expo(s);
        if s == 0.0 {
            LInterval::new(0.0)
        } else if ex < -49 {
            let bound = pow2((ex - 53 * stagprec() as i32).max(-1022) - 1);
            // Degree N with |x|^(N+1) / (N+1)! below the bound.
            let mut degree = 0;
            let mut term = Interval::point(s);
            loop {
                degree += 1;
                term = ((term * s) / f64::from(degree + 1))?;
                if term.sup() <= bound {
                    break;
                }
            }
            // 1 / (1 - |x|) for the geometric tail
            let abserr = (term * 1.000_000_01).sup();
            let mut y = (x / f64::from(degree))?;
            for i in (1..degree).rev() {
                y = ((y + 1.0) * x / f64::from(i))?;
            }
            y + Interval::unchecked(-abserr, abserr)
        } else {
            let _inner = PrecisionGuard::raise(STAGMAX);
            exp(x)? - 1.0
        }
    };
    Ok(finish(&y, coarse))
}

/// `exp(-x^2)`.
pub fn expmx2(x: &LInterval) -> ArithResult<LInterval> {
    let z = x.abs();
    let coarse = imath::expmx2(z.to_interval());
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        if stagprec() == 1 || z.to_interval().inf() > 30.0 {
            LInterval::from_interval(coarse)
        } else {
            exp(&-sqr(&z))?
        }
    };
    Ok(finish(&y, coarse))
}

/// Number of square roots that bring `mx` below `1.1`, at most 14.
fn root_count(mx: f64) -> i32 {
    if mx <= 1.1 {
        return 0;
    }
    let cmp = ((mx.ln() / 1.1f64.ln()).ln() / std::f64::consts::LN_2) as i32;
    cmp.clamp(0, 14)
}

/// Natural logarithm: square roots pull the argument towards one, then
/// `ln y = 2 atanh((y - 1) / (y + 1))` is summed as a series.
pub fn ln(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::ln(dx)?;
    if dx.sup() > succ(succ(dx.inf())) {
        return Ok(LInterval::from_interval(coarse));
    }
    if x.inf() <= 0.0 {
        return Err(ArithmeticError::domain("ln"));
    }
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    if is_exactly(dx, 1.0) {
        return Ok(LInterval::new(0.0));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let mut y = x.clone();
        let mx = dx.sup().max(1.0 / dx.sup()).max(1.0 / dx.inf());
        let first = root_count(mx);
        for _ in 0..first {
            y = sqrt(&y)?;
        }
        let second = root_count(y.to_interval().sup().abs());
        for _ in 0..second {
            y = sqrt(&y)?;
        }

        let t = ((&y - 1.0) / (&y + 1.0))?;
        let t2 = &t * &t;
        let mut tmp = t2.to_interval().sup();
        if tmp == 0.0 {
            tmp = MIN_REAL;
        }
        let lny = tmp.ln();
        let lneps = ln_eps();
        let mut m = 0;
        loop {
            m += 2;
            if lneps - LNB + f64::from(2 * m + 3).ln() - f64::from(m + 1) * lny > 0.0 {
                break;
            }
        }
        trace!(degree = m, roots = first + second, "ln series");

        let mut p = LInterval::new(0.0);
        for k in (1..=2 * m + 1).rev().step_by(2) {
            p = &(&p * &t2) + &(2.0 / LInterval::new(f64::from(k)))?;
        }
        p = &p * &t;
        let rest = ((Interval::unchecked(-4.0, 4.0) * imath::power(t2.to_interval(), m + 1)?)
            / f64::from(2 * m + 3))?;
        p = p + rest;
        p.times2pown(first + second)
    };
    Ok(finish(&y, coarse))
}

/// `log2(x)`.
pub fn log2(x: &LInterval) -> ArithResult<LInterval> {
    let coarse = imath::log2(x.to_interval())?;
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        (ln(x)? / ln2())?
    };
    Ok(finish(&y, coarse))
}

/// `log10(x)`.
pub fn log10(x: &LInterval) -> ArithResult<LInterval> {
    let coarse = imath::log10(x.to_interval())?;
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        (ln(x)? / ln10())?
    };
    Ok(finish(&y, coarse))
}

/// `ln(1 + x)`. Tiny arguments use `zeta P(zeta^2)` with
/// `zeta = x / (2 + x)`.
pub fn lnp1(x: &LInterval) -> ArithResult<LInterval> {
    const C1: f64 = 0.693_147_181;
    let dx = x.to_interval();
    let coarse = imath::lnp1(dx)?;
    let t = {
        let _g = PrecisionGuard::cap(STAGMAX);
        let gr = dx.abs_max();
        if gr == 0.0 {
            LInterval::new(0.0)
        } else if gr < 1e-8 {
            let mut n = 0;
            let mut two_n_p3 = 3;
            let k = expo(gr);
            if k > -1019 {
                let lngr = (gr / 2.0).ln();
                let u = f64::from((k - 1 - 53 * stagprec() as i32).max(-1074) - 1) * C1;
                loop {
                    n += 1;
                    two_n_p3 += 2;
                    if f64::from(two_n_p3) * lngr - f64::from(two_n_p3).ln() <= u {
                        break;
                    }
                }
            }
            let two = LInterval::new(2.0);
            let coeffs = (0..=n)
                .map(|i| &two / f64::from(2 * i + 1))
                .collect::<ArithResult<Vec<_>>>()?;
            let zeta = (x / &(2.0 + x))?;
            let z2 = sqr(&zeta);
            let mut t = coeffs[n as usize].clone();
            for c in coeffs[..n as usize].iter().rev() {
                t = &(&t * &z2) + c;
            }
            // P(zeta) - P_N(zeta) <= 2 z^(N+1) / ((2N + 3)(1 - z))
            let dz = Interval::point(z2.to_interval().sup());
            let ax = imath::power(dz, n + 1)?.times2pown(1);
            let rest = (ax / (f64::from(2 * n + 3) * (1.0 - dz)))?;
            t = t + Interval::unchecked(0.0, rest.sup());
            &zeta * &t
        } else if gr < 1.0 {
            let _inner = PrecisionGuard::raise(STAGMAX);
            ln(&(1.0 + x))?
        } else {
            ln(&(1.0 + x))?
        }
    };
    Ok(finish(&t, coarse))
}

/// `ln(sqrt(x^2 + y^2))`, scaled away from overflow and underflow.
pub fn ln_sqrtx2y2(x: &LInterval, y: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let dy = y.to_interval();
    let coarse = imath::ln_sqrtx2y2(dx, dy)?;
    let ax = x.abs();
    let ay = y.abs();
    let ex = expo(dx.abs_max()).max(expo(dy.abs_max()));
    let ar = if ex > 508 {
        let n = ex - 500;
        let (sx, sy) = (ax.times2pown(-n), ay.times2pown(-n));
        ln(&(&(&sx * &sx) + &(&sy * &sy)))?.times2pown(-1) + &(ln2() * f64::from(n))
    } else if ex < -20 {
        let n = 500 - ex;
        let (sx, sy) = (ax.times2pown(n), ay.times2pown(n));
        ln(&(&(&sx * &sx) + &(&sy * &sy)))?.times2pown(-1) - &(ln2() * f64::from(n))
    } else {
        lnp1(&(sqr(&ax) + &sqr(&ay) - 1.0))?.times2pown(-1)
    };
    Ok(finish(&ar, coarse))
}
