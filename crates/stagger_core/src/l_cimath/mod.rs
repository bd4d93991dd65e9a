//! Elementary functions on staggered complex intervals.
//!
//! Real and imaginary parts are enclosed with the real functions of
//! [`crate::l_imath`], evaluated one limb above the caller's precision and
//! read back with [`LCInterval::adjust`]. Multi-valued functions return
//! principal values. A box that meets a branch cut in a way that breaks the
//! enclosure fails with [`ArithmeticError::OutOfDomain`]; a point on a cut
//! takes the value from the upper half plane.

mod exp_trig;
mod inverse;

pub use exp_trig::{cos, cosh, cot, coth, exp, exp10, exp2, expm1, sin, sinh, tan, tanh};
pub use inverse::{acos, acosh, acot, acoth, asin, asinh, atan, atanh};

use crate::accumulator::Accumulator;
use crate::constants::{ln10, ln2, pi, pid2, sqrt2r};
use crate::error::{ArithResult, ArithmeticError};
use crate::l_cinterval::LCInterval;
use crate::l_imath::{self as real, STAGMAX};
use crate::l_interval::LInterval;
use crate::l_real::LReal;
use crate::precision::{stagprec, PrecisionGuard};
use crate::rounding::Rounding;

/// Working-precision cap of the helpers built on the complex square root.
const ROOT_STAGMAX: usize = 30;
/// A quotient exponent gap beyond which `atan(y / x)` is inside `+-pi/2`.
const ATAN_EXPO_GAP: i32 = 1022;
/// Components above `2^1021` are scaled before forming `|z| + |x|`.
const HUGE_EXPO: i32 = 1021;
/// Hyperbolic parts overflow a double beyond this.
const GROWTH_LIMIT: f64 = 709.0;
/// Below `|z|` of this the `1 + z` helpers use their cancellation-free form.
const SMALL_ARG: f64 = 0.125;
/// Above this `|z|` the `sqrt(1 +- z^2)` helpers are `+-z` plus a correction.
const LARGE_ARG: f64 = 1e152;

fn growth_ok(x: &LInterval, op: &'static str) -> ArithResult<()> {
    if x.to_interval().abs_max() > GROWTH_LIMIT {
        return Err(ArithmeticError::domain(op));
    }
    Ok(())
}

/// `atan(y / x)` for point arguments, without forming an overflowing quotient.
fn atan_quotient(y: &LReal, x: &LReal) -> ArithResult<LInterval> {
    if y.sign() == 0 {
        return Ok(LInterval::new(0.0));
    }
    if y.expo_gr() - x.expo_gr() > ATAN_EXPO_GAP {
        let h = pid2();
        return Ok(if y.sign() * x.sign() > 0 { h } else { -h });
    }
    real::atan(&(LInterval::from(y) / LInterval::from(x))?)
}

/// Principal argument, the hull of `Arg(z)` over the nonzero members of the
/// box inside `(-pi, pi]`. Fails when the box crosses the negative real axis.
pub fn arg_principal(z: &LCInterval) -> ArithResult<LInterval> {
    let (xl, xu) = (z.re.inf(), z.re.sup());
    let (yl, yu) = (z.im.inf(), z.im.sup());
    let (half, pi) = (pid2(), pi());
    let (lo, hi) = if yl > 0.0 {
        let lo = if xu > 0.0 {
            atan_quotient(&yl, &xu)?.inf()
        } else if xu < 0.0 {
            (atan_quotient(&yu, &xu)? + &pi).inf()
        } else {
            half.inf()
        };
        let hi = if xl > 0.0 {
            atan_quotient(&yu, &xl)?.sup()
        } else if xl < 0.0 {
            (atan_quotient(&yl, &xl)? + &pi).sup()
        } else {
            half.sup()
        };
        (lo, hi)
    } else if yu < 0.0 {
        let lo = if xl < 0.0 {
            (atan_quotient(&yu, &xl)? - &pi).inf()
        } else if xl > 0.0 {
            atan_quotient(&yl, &xl)?.inf()
        } else {
            -half.sup()
        };
        let hi = if xu < 0.0 {
            (atan_quotient(&yl, &xu)? - &pi).sup()
        } else if xu > 0.0 {
            atan_quotient(&yu, &xu)?.sup()
        } else {
            -half.inf()
        };
        (lo, hi)
    } else if xl > 0.0 {
        let lo = if yl < 0.0 {
            atan_quotient(&yl, &xl)?.inf()
        } else {
            LReal::zero()
        };
        (lo, atan_quotient(&yu, &xl)?.sup())
    } else if xl < 0.0 {
        return Err(ArithmeticError::domain("arg"));
    } else if xu > 0.0 {
        let lo = if yl < 0.0 { -half.sup() } else { LReal::zero() };
        let hi = if yu > 0.0 { half.sup() } else { LReal::zero() };
        (lo, hi)
    } else if yl.is_zero() && yu.is_zero() {
        return Ok(LInterval::new(0.0));
    } else {
        let lo = if yl < 0.0 { -half.sup() } else { half.inf() };
        let hi = if yu > 0.0 { half.sup() } else { -half.inf() };
        (lo, hi)
    };
    LInterval::from_bounds(&lo, &hi)
}

/// Argument defined on every box. Where the box crosses the negative real
/// axis the arguments of the lower half are continued past `pi`, so the
/// result lies in `[-pi, 3 pi / 2]`.
pub fn arg(z: &LCInterval) -> ArithResult<LInterval> {
    let (xl, xu) = (z.re.inf(), z.re.sup());
    let (yl, yu) = (z.im.inf(), z.im.sup());
    if !(xl < 0.0 && yl <= 0.0 && yu >= 0.0) {
        return arg_principal(z);
    }
    let pi = pi();
    let (lo, hi) = if xu > 0.0 {
        let lo = if yl < 0.0 { -pi.sup() } else { LReal::zero() };
        let hi = if yl < 0.0 && yu.is_zero() {
            LReal::zero()
        } else {
            pi.sup()
        };
        (lo, hi)
    } else if yl == yu {
        return Ok(pi);
    } else if xu.is_zero() {
        let half = pid2();
        let lo = if yu > 0.0 { half.inf() } else { -pi.sup() };
        let hi = if yl < 0.0 {
            if yu > 0.0 {
                (&half * 3.0).sup()
            } else {
                -half.inf()
            }
        } else {
            pi.sup()
        };
        (lo, hi)
    } else {
        let lo = if yu > 0.0 {
            (atan_quotient(&yu, &xu)? + &pi).inf()
        } else {
            -pi.sup()
        };
        let hi = if yl < 0.0 {
            if yu > 0.0 {
                (atan_quotient(&yl, &xu)? + &pi).sup()
            } else {
                (atan_quotient(&yl, &xu)? - &pi).sup()
            }
        } else {
            pi.sup()
        };
        (lo, hi)
    };
    LInterval::from_bounds(&lo, &hi)
}

/// Inclusion-monotone argument: `[-pi, pi]` where [`arg_principal`] is
/// undefined.
pub fn arg_inclmon(z: &LCInterval) -> ArithResult<LInterval> {
    if z.re.inf() < 0.0 && z.im.inf() <= 0.0 && z.im.sup() >= 0.0 {
        let hi = pi().sup();
        return LInterval::from_bounds(&-&hi, &hi);
    }
    arg_principal(z)
}

/// Natural logarithm with the imaginary part from [`arg`]; defined on every
/// box that avoids the origin.
pub fn ln(z: &LCInterval) -> ArithResult<LCInterval> {
    if z.contains_zero() {
        return Err(ArithmeticError::domain("ln"));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        LCInterval::new(real::ln_sqrtx2y2(&z.re, &z.im)?, arg(z)?)
    };
    Ok(y.adjust())
}

/// Principal logarithm; the box must avoid the origin and must not reach
/// the negative real axis from below.
pub fn ln_principal(z: &LCInterval) -> ArithResult<LCInterval> {
    if z.contains_zero() || (z.re.sup() < 0.0 && z.im.inf() < 0.0 && z.im.sup() >= 0.0) {
        return Err(ArithmeticError::domain("ln"));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        LCInterval::new(real::ln_sqrtx2y2(&z.re, &z.im)?, arg(z)?)
    };
    Ok(y.adjust())
}

/// `ln(1 + z)`, free of cancellation for small `|z|`.
pub fn lnp1(z: &LCInterval) -> ArithResult<LCInterval> {
    let minus_one = LReal::new(-1.0);
    if z.re.contains(&minus_one) && z.im.contains_zero() {
        return Err(ArithmeticError::domain("lnp1"));
    }
    if z.re.sup() < -1.0 && z.im.inf() < 0.0 && z.im.sup() >= 0.0 {
        return Err(ArithmeticError::domain("lnp1"));
    }
    let _g = PrecisionGuard::cap(ROOT_STAGMAX);
    let z1 = z + 1.0;
    if z.abs()?.sup() < 1.0 {
        // |1 + z|^2 - 1 = x (2 + x) + y^2
        let t = &(&z.re * &(2.0 + &z.re)) + &real::sqr(&z.im);
        let re = real::lnp1(&t)?.times2pown(-1);
        Ok(LCInterval::new(re, arg(&z1)?).adjust())
    } else {
        ln_principal(&z1)
    }
}

pub fn log2(z: &LCInterval) -> ArithResult<LCInterval> {
    ln_principal(z)?.div_real(&ln2())
}

pub fn log10(z: &LCInterval) -> ArithResult<LCInterval> {
    ln_principal(z)?.div_real(&ln10())
}

/// Square with the real part read out of one accumulator per bound.
pub fn sqr(z: &LCInterval) -> LCInterval {
    let prec = stagprec();
    let (ra, ia) = (z.re.abs(), z.im.abs());
    let (rl, ru) = (ra.inf(), ra.sup());
    let (il, iu) = (ia.inf(), ia.sup());

    let mut acc = Accumulator::new();
    rl.accumulate_product(&rl, &mut acc);
    (-&iu).accumulate_product(&iu, &mut acc);
    let lo = LReal::from_acc_rounded(&acc, Rounding::Down, prec);

    let mut acc = Accumulator::new();
    ru.accumulate_product(&ru, &mut acc);
    (-&il).accumulate_product(&il, &mut acc);
    let hi = LReal::from_acc_rounded(&acc, Rounding::Up, prec);

    let re = LInterval::from_bounds(&lo, &hi).unwrap_or_else(|_| real::sqr(&z.re) - real::sqr(&z.im));
    LCInterval::new(re, (&z.re * &z.im).times2pown(1))
}

/// `sqrt(|z| + |x|)` for the point `z = x + i y`. Tiny components are scaled
/// by `2^-d` first; the returned `d` is even.
fn sqrt_zpx(x: &LInterval, y: &LInterval) -> ArithResult<(LInterval, i32)> {
    let (ix, iy) = (x.inf(), y.inf());
    let mut ex = ix.expo_gr();
    let ey = iy.expo_gr();
    let xc = x.abs();
    let y_zero = iy.is_zero();
    if ex >= HUGE_EXPO || ey >= HUGE_EXPO {
        let xc = xc.times2pown(-2);
        let r = if y_zero {
            real::sqrt(&xc.times2pown(1))?
        } else {
            real::sqrt(&(&real::sqrtx2y2(&xc, &y.times2pown(-2))? + &xc))?
        };
        return Ok((r.times2pown(1), 0));
    }
    if y_zero {
        return Ok((real::sqrt(&xc.times2pown(1))?, 0));
    }
    ex = ex.max(ey);
    if ex % 2 != 0 {
        ex -= 1;
    }
    if ex < -50 {
        let (xs, ys) = (xc.times2pown(-ex), y.times2pown(-ex));
        Ok((real::sqrt(&(&real::sqrtx2y2(&xs, &ys)? + &xs))?, ex))
    } else {
        Ok((real::sqrt(&(&real::sqrtx2y2(&xc, y)? + &xc))?, 0))
    }
}

/// Real part of the principal root of a point.
fn re_sqrt_point(re: &LInterval, im: &LInterval) -> ArithResult<LInterval> {
    let (ir, ii) = (re.inf(), im.inf());
    if ii.is_zero() {
        return if ir >= 0.0 {
            real::sqrt(re)
        } else {
            Ok(LInterval::new(0.0))
        };
    }
    let (r, d) = sqrt_zpx(re, im)?;
    if ir >= 0.0 {
        Ok(&sqrt2r() * &r.times2pown(d / 2))
    } else {
        let num = LInterval::from(&ii.abs().times2pown(-d / 2));
        &sqrt2r() * &num / r
    }
}

/// Imaginary part of the principal root of a point.
fn im_sqrt_point(re: &LInterval, im: &LInterval) -> ArithResult<LInterval> {
    let (ir, ii) = (re.inf(), im.inf());
    if ii.is_zero() {
        return if ir >= 0.0 {
            Ok(LInterval::new(0.0))
        } else {
            real::sqrt(&-re)
        };
    }
    let (r, d) = sqrt_zpx(re, im)?;
    if ir >= 0.0 {
        let num = LInterval::from(&ii.times2pown(-d / 2));
        &sqrt2r() * &num / r
    } else {
        let r = &sqrt2r() * &r.times2pown(d / 2);
        Ok(if ii > 0.0 { r } else { -r })
    }
}

/// Principal square root, built from the roots of the box corners.
pub fn sqrt(z: &LCInterval) -> ArithResult<LCInterval> {
    let (xl, xu) = (z.re.inf(), z.re.sup());
    let (yl, yu) = (z.im.inf(), z.im.sup());
    if xl < 0.0 && yl < 0.0 && yu >= 0.0 {
        return Err(ArithmeticError::domain("sqrt"));
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let (hxl, hxu) = (LInterval::from(&xl), LInterval::from(&xu));
        let (hyl, hyu) = (LInterval::from(&yl), LInterval::from(&yu));
        let (re_lo, re_hi, im_lo, im_hi) = if yl >= 0.0 {
            (
                re_sqrt_point(&hxl, &hyl)?.inf(),
                re_sqrt_point(&hxu, &hyu)?.sup(),
                im_sqrt_point(&hxu, &hyl)?.inf(),
                im_sqrt_point(&hxl, &hyu)?.sup(),
            )
        } else if yu <= 0.0 {
            (
                re_sqrt_point(&hxl, &hyu)?.inf(),
                re_sqrt_point(&hxu, &hyl)?.sup(),
                im_sqrt_point(&hxl, &hyl)?.inf(),
                im_sqrt_point(&hxu, &hyu)?.sup(),
            )
        } else {
            let far = if -&yl > yu { &hyl } else { &hyu };
            (
                real::sqrt(&hxl)?.inf(),
                re_sqrt_point(&hxu, far)?.sup(),
                im_sqrt_point(&hxl, &hyl)?.inf(),
                im_sqrt_point(&hxl, &hyu)?.sup(),
            )
        };
        LCInterval::new(
            LInterval::from_bounds(&re_lo, &re_hi)?,
            LInterval::from_bounds(&im_lo, &im_hi)?,
        )
    };
    Ok(y.adjust())
}

/// Principal `n`-th root, `|z|^(1/n) e^(i Arg(z) / n)`.
pub fn sqrt_n(z: &LCInterval, n: i32) -> ArithResult<LCInterval> {
    match n {
        i32::MIN..=0 => return Err(ArithmeticError::domain("sqrt_n")),
        1 => return Ok(z.clone()),
        2 => return sqrt(z),
        _ => {}
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let phi = (arg_principal(z)? / f64::from(n))?;
        let r = real::sqrt_n(&z.abs()?, n)?;
        LCInterval::new(&r * &real::cos(&phi)?, &r * &real::sin(&phi)?)
    };
    Ok(y.adjust())
}

/// `sqrt(1 + z) - 1`.
pub fn sqrtp1m1(z: &LCInterval) -> ArithResult<LCInterval> {
    let _g = PrecisionGuard::cap(ROOT_STAGMAX);
    let root = sqrt(&(z + 1.0))?;
    let y = if z.abs()?.sup() < SMALL_ARG {
        (z / &(root + 1.0))?
    } else {
        root - 1.0
    };
    Ok(y.adjust())
}

/// Correction box `[-1/|z|, 1/|z|]^2` of the large-argument expansions.
fn large_arg_correction(abs_z: &LInterval) -> ArithResult<LCInterval> {
    let d = (1.0 / LInterval::from(&abs_z.inf()))?.sup();
    let w = LInterval::from_bounds(&-&d, &d)?;
    Ok(LCInterval::new(w.clone(), w))
}

/// Clips a negative lower real bound of a principal root to zero.
fn clip_re(mut y: LCInterval) -> ArithResult<LCInterval> {
    if y.re.inf() < 0.0 {
        y.re = LInterval::from_bounds(&LReal::zero(), &y.re.sup())?;
    }
    Ok(y)
}

/// `sqrt(1 + z^2)`.
pub fn sqrt1px2(z: &LCInterval) -> ArithResult<LCInterval> {
    let _g = PrecisionGuard::cap(ROOT_STAGMAX);
    let abs_z = z.abs()?;
    let y = if abs_z.inf() > LARGE_ARG {
        let delta = large_arg_correction(&abs_z)?;
        if z.re.inf() >= 0.0 {
            z + &delta
        } else {
            -z + delta
        }
    } else {
        let i = LCInterval::new(LInterval::new(0.0), LInterval::new(1.0));
        let near_pole = (z - &i).abs()?.sup() < 0.5 || (z + &i).abs()?.sup() < 0.5;
        if near_pole {
            // (1 - i z)(1 + i z) = 1 + z^2
            let iz = z.mul_i();
            sqrt(&(&(1.0 - &iz) * &(1.0 + &iz)))?
        } else {
            sqrt(&(1.0 + sqr(z)))?
        }
    };
    Ok(clip_re(y)?.adjust())
}

/// `sqrt(z^2 - 1)`.
pub fn sqrtx2m1(z: &LCInterval) -> ArithResult<LCInterval> {
    let _g = PrecisionGuard::cap(ROOT_STAGMAX);
    let abs_z = z.abs()?;
    let y = if abs_z.inf() > LARGE_ARG {
        let delta = large_arg_correction(&abs_z)?;
        if z.re.inf() >= 0.0 {
            z + &delta
        } else {
            -z + delta
        }
    } else {
        let (zm, zp) = (z - 1.0, z + 1.0);
        if zm.abs()?.sup() < 0.5 || zp.abs()?.sup() < 0.5 {
            sqrt(&(&zm * &zp))?
        } else {
            sqrt(&(sqr(z) - 1.0))?
        }
    };
    Ok(clip_re(y)?.adjust())
}

/// `sqrt(1 - z^2)`.
pub fn sqrt1mx2(z: &LCInterval) -> ArithResult<LCInterval> {
    let _g = PrecisionGuard::cap(ROOT_STAGMAX);
    let abs_z = z.abs()?;
    let y = if abs_z.inf() > LARGE_ARG {
        let delta = large_arg_correction(&abs_z)?;
        let iz = z.mul_i();
        if z.im.inf() >= 0.0 {
            -iz + delta
        } else {
            &iz + &delta
        }
    } else {
        let (zm, zp) = (1.0 - z, 1.0 + z);
        if zm.abs()?.sup() < 0.5 || zp.abs()?.sup() < 0.5 {
            sqrt(&(&zm * &zp))?
        } else {
            sqrt(&(1.0 - sqr(z)))?
        }
    };
    Ok(clip_re(y)?.adjust())
}

/// Integer power. Boxes away from the origin are also evaluated in polar
/// form and the two enclosures intersected.
pub fn power(z: &LCInterval, n: i32) -> ArithResult<LCInterval> {
    match n {
        0 => return Ok(LCInterval::from(1.0)),
        1 => return Ok(z.clone()),
        2 => return Ok(sqr(z)),
        _ if n < 0 => return LCInterval::from(1.0) / power(z, n.checked_neg().unwrap_or(i32::MAX))?,
        _ => {}
    }
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let k = n.unsigned_abs();
        let mut y = if k % 2 == 1 { z.clone() } else { LCInterval::from(1.0) };
        let mut base = sqr(z);
        let mut bit = 2u32;
        while bit <= k {
            if (k / bit) % 2 == 1 {
                y = &y * &base;
            }
            match bit.checked_add(bit) {
                Some(b) if b <= k => {
                    base = sqr(&base);
                    bit = b;
                }
                _ => break,
            }
        }
        if !z.is_point() && !z.contains_zero() {
            let r = real::power(&z.abs()?, n)?;
            let phi = &arg_inclmon(z)? * f64::from(n);
            let polar = LCInterval::new(&r * &real::cos(&phi)?, &r * &real::sin(&phi)?);
            y = y.intersect(&polar)?;
        }
        y
    };
    Ok(y.adjust())
}

/// `z^p = exp(p Ln z)` for a real exponent.
pub fn pow(z: &LCInterval, p: &LInterval) -> ArithResult<LCInterval> {
    exp(&ln_principal(z)?.scale(p))
}

/// `z^p = exp(p Ln z)` for a complex exponent.
pub fn pow_complex(z: &LCInterval, p: &LCInterval) -> ArithResult<LCInterval> {
    exp(&(p * &ln_principal(z)?))
}

#[cfg(test)]
fn encloses(y: &LCInterval, w: num_complex::Complex<f64>) -> bool {
    let c = y.to_cinterval();
    let tol = 1e-13 * (1.0 + w.norm());
    c.re.inf() - tol <= w.re
        && w.re <= c.re.sup() + tol
        && c.im.inf() - tol <= w.im
        && w.im <= c.im.sup() + tol
}

#[cfg(test)]
fn point(re: f64, im: f64) -> LCInterval {
    LCInterval::from(crate::cinterval::CInterval::point(num_complex::Complex::new(re, im)))
}
