//! Staggered multi-precision reals.
//!
//! An [`LReal`] is a sequence of doubles whose exact sum is the represented
//! value. Results carry as many limbs as the current working precision
//! ([`crate::precision::stagprec`]); every operation accumulates the exact
//! result and reads it out limb by limb.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::accumulator::Accumulator;
use crate::error::{ArithResult, ArithmeticError};
use crate::precision::stagprec;
use crate::rounding::{expo, pred, succ, times2pown, Rounding, EXPO_ZERO};

#[derive(Clone, Serialize, Deserialize)]
pub struct LReal {
    limbs: Vec<f64>,
}

impl LReal {
    /// `x` at the current precision.
    pub fn new(x: f64) -> Self {
        let mut limbs = vec![0.0; stagprec()];
        limbs[0] = x;
        Self { limbs }
    }

    pub fn zero() -> Self {
        Self::new(0.0)
    }

    pub fn from_limbs(limbs: Vec<f64>) -> Self {
        if limbs.is_empty() {
            return Self { limbs: vec![0.0] };
        }
        Self { limbs }
    }

    pub fn limbs(&self) -> &[f64] {
        &self.limbs
    }

    pub fn prec(&self) -> usize {
        self.limbs.len()
    }

    /// Limb `i`, counted from zero; zero past the end.
    pub fn limb(&self, i: usize) -> f64 {
        self.limbs.get(i).copied().unwrap_or(0.0)
    }

    /// Adds every limb to `acc`.
    pub fn add_to(&self, acc: &mut Accumulator) {
        for &l in self.limbs.iter().filter(|&&l| l != 0.0) {
            acc.add(l);
        }
    }

    pub fn sub_from(&self, acc: &mut Accumulator) {
        for &l in self.limbs.iter().filter(|&&l| l != 0.0) {
            acc.sub(l);
        }
    }

    /// Adds the exact product `self * factor` to `acc`.
    pub fn accumulate_into(&self, acc: &mut Accumulator, factor: f64) {
        for &l in self.limbs.iter().filter(|&&l| l != 0.0) {
            acc.accumulate(l, factor);
        }
    }

    /// Adds the exact product `self * rhs` to `acc`.
    pub fn accumulate_product(&self, rhs: &LReal, acc: &mut Accumulator) {
        for &a in self.limbs.iter().filter(|&&a| a != 0.0) {
            rhs.accumulate_into(acc, a);
        }
    }

    pub fn to_acc(&self) -> Accumulator {
        let mut acc = Accumulator::new();
        self.add_to(&mut acc);
        acc
    }

    /// Reads an exact sum out with `prec` limbs, each rounded to nearest.
    pub fn from_acc_prec(acc: &Accumulator, prec: usize) -> Self {
        let prec = prec.max(1);
        let mut rest = acc.clone();
        let mut limbs = vec![0.0; prec];
        limbs[0] = rest.round_nearest();
        for i in 1..prec {
            if limbs[i - 1] == 0.0 {
                break;
            }
            rest.sub(limbs[i - 1]);
            limbs[i] = rest.round_nearest();
        }
        Self { limbs }
    }

    pub fn from_acc(acc: &Accumulator) -> Self {
        Self::from_acc_prec(acc, stagprec())
    }

    /// Reads an exact sum out so that the limb sum is a lower (`Down`) or
    /// upper (`Up`) bound of it.
    pub fn from_acc_rounded(acc: &Accumulator, mode: Rounding, prec: usize) -> Self {
        let prec = prec.max(1);
        let mut rest = acc.clone();
        let mut limbs = vec![0.0; prec];
        limbs[0] = if prec == 1 { rest.round(mode) } else { rest.round_nearest() };
        for i in 1..prec {
            rest.sub(limbs[i - 1]);
            if rest.sign() == 0 {
                break;
            }
            limbs[i] = if i + 1 == prec { rest.round(mode) } else { rest.round_nearest() };
        }
        Self { limbs }
    }

    /// Nearest double to the value.
    pub fn to_f64(&self) -> f64 {
        self.to_acc().round_nearest()
    }

    pub fn round_down(&self) -> f64 {
        self.to_acc().round_down()
    }

    pub fn round_up(&self) -> f64 {
        self.to_acc().round_up()
    }

    /// The value re-expressed with the current number of limbs.
    pub fn adjust(&self) -> Self {
        self.adjusted(stagprec())
    }

    pub fn adjusted(&self, prec: usize) -> Self {
        let prec = prec.max(1);
        match self.prec().cmp(&prec) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::from_acc_prec(&self.to_acc(), prec),
            Ordering::Less => {
                let mut limbs = self.limbs.clone();
                limbs.resize(prec, 0.0);
                Self { limbs }
            }
        }
    }

    /// `self * 2^n`, limb by limb.
    pub fn times2pown(&self, n: i32) -> Self {
        Self {
            limbs: self.limbs.iter().map(|&l| times2pown(l, n)).collect(),
        }
    }

    /// True when every limb is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0.0)
    }

    pub fn sign(&self) -> i32 {
        self.to_acc().sign()
    }

    pub fn abs(&self) -> Self {
        if self.sign() < 0 {
            -self
        } else {
            self.clone()
        }
    }

    /// Exponent of the first nonzero limb.
    pub fn expo_gr(&self) -> i32 {
        self.limbs
            .iter()
            .find(|&&l| l != 0.0)
            .map_or(EXPO_ZERO, |&l| expo(l))
    }

    /// Exponent of the last nonzero limb.
    pub fn expo_sm(&self) -> i32 {
        self.limbs
            .iter()
            .rev()
            .find(|&&l| l != 0.0)
            .map_or(EXPO_ZERO, |&l| expo(l))
    }

    /// Moves the last limb one ulp down, or up when `up` is set.
    pub(crate) fn nudge_last(&mut self, up: bool) {
        if let Some(last) = self.limbs.last_mut() {
            *last = if up { succ(*last) } else { pred(*last) };
        }
    }

    pub fn max(&self, other: &LReal) -> LReal {
        if self >= other {
            self.clone()
        } else {
            other.clone()
        }
    }

    pub fn min(&self, other: &LReal) -> LReal {
        if self <= other {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// Quotient `self / rhs`, failing when `rhs` is zero.
    pub fn checked_div(&self, rhs: &LReal) -> ArithResult<LReal> {
        let mut dot1 = self.to_acc();
        let dot2 = rhs.to_acc();
        if dot2.sign() == 0 {
            return Err(ArithmeticError::DivByZero);
        }
        let prec = stagprec();
        let b = dot2.round_nearest();
        let mut a = dot1.round_down();
        let mut limbs = vec![0.0; prec];
        limbs[0] = a / b;
        for i in 1..prec {
            if a == 0.0 {
                break;
            }
            for &d in rhs.limbs.iter().filter(|&&d| d != 0.0) {
                dot1.accumulate(limbs[i - 1], -d);
            }
            a = dot1.round_down();
            limbs[i] = a / b;
        }
        Ok(Self { limbs })
    }
}

impl Default for LReal {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for LReal {
    fn from(x: f64) -> Self {
        Self::new(x)
    }
}

impl fmt::Debug for LReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LReal").field(&self.limbs).finish()
    }
}

impl fmt::Display for LReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.to_f64())
    }
}

impl PartialEq for LReal {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for LReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_acc().compare(&other.to_acc())
    }
}

impl PartialEq<f64> for LReal {
    fn eq(&self, other: &f64) -> bool {
        self.to_acc().compare(&Accumulator::from_value(*other)) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for LReal {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.to_acc().compare(&Accumulator::from_value(*other))
    }
}

impl Neg for &LReal {
    type Output = LReal;
    fn neg(self) -> LReal {
        LReal {
            limbs: self.limbs.iter().map(|&l| -l).collect(),
        }
    }
}

impl Neg for LReal {
    type Output = LReal;
    fn neg(self) -> LReal {
        -&self
    }
}

impl Add for &LReal {
    type Output = LReal;
    fn add(self, rhs: &LReal) -> LReal {
        let mut acc = self.to_acc();
        rhs.add_to(&mut acc);
        LReal::from_acc(&acc)
    }
}

impl Sub for &LReal {
    type Output = LReal;
    fn sub(self, rhs: &LReal) -> LReal {
        let mut acc = self.to_acc();
        rhs.sub_from(&mut acc);
        LReal::from_acc(&acc)
    }
}

impl Mul for &LReal {
    type Output = LReal;
    fn mul(self, rhs: &LReal) -> LReal {
        let mut acc = Accumulator::new();
        self.accumulate_product(rhs, &mut acc);
        LReal::from_acc(&acc)
    }
}

impl Div for &LReal {
    type Output = ArithResult<LReal>;
    fn div(self, rhs: &LReal) -> ArithResult<LReal> {
        self.checked_div(rhs)
    }
}

forward_binop!(impl Add, add for LReal, LReal => LReal);
forward_binop!(impl Sub, sub for LReal, LReal => LReal);
forward_binop!(impl Mul, mul for LReal, LReal => LReal);
forward_binop!(impl Div, div for LReal, LReal => ArithResult<LReal>);
forward_scalar_binop!(impl Add, add for LReal, f64 => LReal);
forward_scalar_binop!(impl Sub, sub for LReal, f64 => LReal);
forward_scalar_binop!(impl Mul, mul for LReal, f64 => LReal);
forward_scalar_binop!(impl Div, div for LReal, f64 => ArithResult<LReal>);
forward_assign_op!(impl AddAssign, add_assign for LReal, LReal, +);
forward_assign_op!(impl SubAssign, sub_assign for LReal, LReal, -);
forward_assign_op!(impl MulAssign, mul_assign for LReal, LReal, *);
