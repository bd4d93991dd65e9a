//! Staggered complex numbers.
//!
//! Products are read out of an exact accumulator. Quotients go through
//! [`scaled_quotient`], which is also the corner evaluation of the optimal
//! complex interval division.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::accumulator::{Accumulator, IntervalAccumulator};
use crate::error::{ArithResult, ArithmeticError};
use crate::l_interval::LInterval;
use crate::l_real::LReal;
use crate::precision::{stagprec, PrecisionGuard};
use crate::rounding::{Rounding, EXPO_ZERO};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LComplex {
    pub re: LReal,
    pub im: LReal,
}

impl LComplex {
    pub fn new(re: LReal, im: LReal) -> Self {
        Self { re, im }
    }

    /// Nearest double complex number.
    pub fn to_complex(&self) -> Complex<f64> {
        Complex::new(self.re.to_f64(), self.im.to_f64())
    }

    pub fn conj(&self) -> Self {
        Self::new(self.re.clone(), -&self.im)
    }

    pub fn is_zero(&self) -> bool {
        self.re.sign() == 0 && self.im.sign() == 0
    }

    pub fn adjust(&self) -> Self {
        Self::new(self.re.adjust(), self.im.adjust())
    }

    /// `re^2 + im^2`, rounded once.
    pub fn abs2(&self) -> LReal {
        let mut acc = Accumulator::new();
        self.re.accumulate_product(&self.re, &mut acc);
        self.im.accumulate_product(&self.im, &mut acc);
        LReal::from_acc(&acc)
    }

    /// Approximation of `|z|` without intermediate overflow.
    pub fn abs(&self) -> ArithResult<LReal> {
        let r = crate::l_imath::sqrtx2y2(&LInterval::from(&self.re), &LInterval::from(&self.im))?;
        Ok(r.mid())
    }

    /// Quotient with both components rounded toward `mode`.
    pub fn div_rounded(&self, rhs: &LComplex, mode: Rounding) -> ArithResult<LComplex> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivByZero);
        }
        let re = scaled_quotient(&self.re, &self.im, &rhs.re, &rhs.im, mode)?;
        let im = scaled_quotient(&self.im, &-&self.re, &rhs.re, &rhs.im, mode)?;
        Ok(Self::new(re, im))
    }

    /// Adds the exact product `self * rhs` to a pair of accumulators.
    pub fn accumulate_product(&self, rhs: &LComplex, re: &mut Accumulator, im: &mut Accumulator) {
        self.re.accumulate_product(&rhs.re, re);
        (-&self.im).accumulate_product(&rhs.im, re);
        self.re.accumulate_product(&rhs.im, im);
        self.im.accumulate_product(&rhs.re, im);
    }
}

/// `(a c + b d) / (c^2 + d^2)` at the current precision, rounded toward
/// `mode`. All four operands are scaled by powers of two first, so neither
/// numerator nor denominator overflows or underflows.
pub(crate) fn scaled_quotient(
    a: &LReal,
    b: &LReal,
    c: &LReal,
    d: &LReal,
    mode: Rounding,
) -> ArithResult<LReal> {
    let sc = c.expo_gr().max(d.expo_gr());
    if sc == EXPO_ZERO {
        return Err(ArithmeticError::DivByZero);
    }
    let sa = a.expo_gr().max(b.expo_gr());
    if sa == EXPO_ZERO {
        return Ok(LReal::zero());
    }
    let prec = stagprec();
    let q = {
        let _g = PrecisionGuard::new(prec + 1);
        let scaled = |x: &LReal, e: i32| LInterval::from(x).times2pown(-e);
        let (ai, bi) = (scaled(a, sa), scaled(b, sa));
        let (ci, di) = (scaled(c, sc), scaled(d, sc));
        let mut num = IntervalAccumulator::new();
        ai.accumulate_product(&ci, &mut num);
        bi.accumulate_product(&di, &mut num);
        let mut den = IntervalAccumulator::new();
        ci.accumulate_product(&ci, &mut den);
        di.accumulate_product(&di, &mut den);
        (LInterval::from_acc(&num) / LInterval::from_acc(&den))?.times2pown(sa - sc)
    };
    let bound = match mode {
        Rounding::Down => q.inf(),
        Rounding::Up => q.sup(),
        Rounding::Nearest => q.mid(),
    };
    Ok(LReal::from_acc_rounded(&bound.to_acc(), mode, prec))
}

impl From<Complex<f64>> for LComplex {
    fn from(z: Complex<f64>) -> Self {
        Self::new(LReal::new(z.re), LReal::new(z.im))
    }
}

impl From<f64> for LComplex {
    fn from(x: f64) -> Self {
        Self::new(LReal::new(x), LReal::zero())
    }
}

impl From<LReal> for LComplex {
    fn from(x: LReal) -> Self {
        Self::new(x, LReal::zero())
    }
}

impl fmt::Display for LComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}

impl Neg for &LComplex {
    type Output = LComplex;
    fn neg(self) -> LComplex {
        LComplex::new(-&self.re, -&self.im)
    }
}

impl Neg for LComplex {
    type Output = LComplex;
    fn neg(self) -> LComplex {
        -&self
    }
}

impl Add for &LComplex {
    type Output = LComplex;
    fn add(self, rhs: &LComplex) -> LComplex {
        LComplex::new(&self.re + &rhs.re, &self.im + &rhs.im)
    }
}

impl Sub for &LComplex {
    type Output = LComplex;
    fn sub(self, rhs: &LComplex) -> LComplex {
        LComplex::new(&self.re - &rhs.re, &self.im - &rhs.im)
    }
}

impl Mul for &LComplex {
    type Output = LComplex;
    fn mul(self, rhs: &LComplex) -> LComplex {
        let mut re = Accumulator::new();
        let mut im = Accumulator::new();
        self.accumulate_product(rhs, &mut re, &mut im);
        LComplex::new(LReal::from_acc(&re), LReal::from_acc(&im))
    }
}

impl Div for &LComplex {
    type Output = ArithResult<LComplex>;
    fn div(self, rhs: &LComplex) -> ArithResult<LComplex> {
        self.div_rounded(rhs, Rounding::Nearest)
    }
}

forward_binop!(impl Add, add for LComplex, LComplex => LComplex);
forward_binop!(impl Sub, sub for LComplex, LComplex => LComplex);
forward_binop!(impl Mul, mul for LComplex, LComplex => LComplex);
forward_binop!(impl Div, div for LComplex, LComplex => ArithResult<LComplex>);
