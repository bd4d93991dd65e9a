//! Staggered multi-precision intervals.
//!
//! An [`LInterval`] of precision `p` stores `p - 1` point limbs and a
//! trailing double interval. It encloses every real number `l + t` where
//! `l` is the exact sum of the limbs and `t` lies in the tail. Results are
//! produced by accumulating exact bounds and reading them out outward.

use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::accumulator::IntervalAccumulator;
use crate::error::{ArithResult, ArithmeticError};
use crate::interval::Interval;
use crate::l_real::LReal;
use crate::precision::stagprec;
use crate::rounding::{add_down, add_up, div_up, mant, succ, MIN_REAL};

/// Largest single scaling step of [`LInterval::times2pown`].
const MAX_SCALE_STEP: i32 = 1023;
const MIN_SCALE_STEP: i32 = -1074;

#[derive(Clone, Serialize, Deserialize)]
pub struct LInterval {
    limbs: Vec<f64>,
    tail: Interval,
}

impl LInterval {
    /// The point `x` at the current precision.
    pub fn new(x: f64) -> Self {
        Self::from_interval(Interval::point(x))
    }

    pub fn from_interval(x: Interval) -> Self {
        Self {
            limbs: vec![0.0; stagprec() - 1],
            tail: x,
        }
    }

    pub fn from_parts(limbs: Vec<f64>, tail: Interval) -> Self {
        Self { limbs, tail }
    }

    /// Smallest staggered interval containing `[lo, hi]`.
    pub fn from_bounds(lo: &LReal, hi: &LReal) -> ArithResult<Self> {
        if lo > hi {
            return Err(ArithmeticError::EmptyInterval);
        }
        let idot = IntervalAccumulator {
            lo: lo.to_acc(),
            hi: hi.to_acc(),
        };
        Ok(Self::from_acc(&idot))
    }

    /// Encloses `lr + z` without rounding when `lr` has fewer limbs than the
    /// current precision; otherwise the last limb is folded into the tail.
    pub fn from_l_real_plus(lr: &LReal, z: Interval) -> Self {
        let q = stagprec();
        let p = lr.prec();
        let mut limbs = vec![0.0; q - 1];
        if p < q {
            limbs[..p].copy_from_slice(lr.limbs());
            return Self { limbs, tail: z };
        }
        let keep = q - 1;
        limbs.copy_from_slice(&lr.limbs()[..keep]);
        let mut tail = z;
        for &l in &lr.limbs()[keep..] {
            tail = Interval::unchecked(add_down(l, tail.inf()), add_up(l, tail.sup()));
        }
        Self { limbs, tail }
    }

    pub fn limbs(&self) -> &[f64] {
        &self.limbs
    }

    pub fn tail(&self) -> Interval {
        self.tail
    }

    pub fn prec(&self) -> usize {
        self.limbs.len() + 1
    }

    pub fn add_to(&self, acc: &mut IntervalAccumulator) {
        for &l in self.limbs.iter().filter(|&&l| l != 0.0) {
            acc.add_point(l);
        }
        if self.tail != Interval::ZERO {
            acc.add_interval(self.tail);
        }
    }

    pub fn sub_from(&self, acc: &mut IntervalAccumulator) {
        for &l in self.limbs.iter().filter(|&&l| l != 0.0) {
            acc.sub_point(l);
        }
        if self.tail != Interval::ZERO {
            acc.sub_interval(self.tail);
        }
    }

    /// Adds the range of `self * rhs` to `idot`, exactly up to the tails.
    pub fn accumulate_product(&self, rhs: &LInterval, idot: &mut IntervalAccumulator) {
        for &a in self.limbs.iter().filter(|&&a| a != 0.0) {
            for &b in rhs.limbs.iter().filter(|&&b| b != 0.0) {
                idot.accumulate_point(a, b);
            }
            idot.accumulate(Interval::point(a), rhs.tail);
        }
        for &b in rhs.limbs.iter().filter(|&&b| b != 0.0) {
            idot.accumulate(self.tail, Interval::point(b));
        }
        idot.accumulate(self.tail, rhs.tail);
    }

    pub fn to_acc(&self) -> IntervalAccumulator {
        let mut acc = IntervalAccumulator::new();
        self.add_to(&mut acc);
        acc
    }

    /// Outward readout of an accumulated range with `prec` components.
    pub fn from_acc_prec(idot: &IntervalAccumulator, prec: usize) -> Self {
        let prec = prec.max(1);
        let mut rest = idot.clone();
        let mut limbs = vec![0.0; prec - 1];
        let mut z = rest.round();
        let mut i = 0;
        while i < prec - 1 && !z.contains_zero() {
            if succ(succ(z.inf())) < z.sup() {
                break;
            }
            let m = z.mid();
            limbs[i] = m;
            rest.sub_point(m);
            z = rest.round();
            i += 1;
        }
        Self { limbs, tail: z }
    }

    pub fn from_acc(idot: &IntervalAccumulator) -> Self {
        Self::from_acc_prec(idot, stagprec())
    }

    /// Inward readout: the result lies inside the accumulated range unless
    /// that range is narrower than one ulp.
    pub fn from_acc_inner(idot: &IntervalAccumulator, prec: usize) -> Self {
        let prec = prec.max(1);
        let mut rest = idot.clone();
        let mut limbs = vec![0.0; prec - 1];
        let bounds = |acc: &IntervalAccumulator| {
            let (lo, hi) = acc.round_inner();
            (lo.min(hi), hi)
        };
        let (mut inf, mut sup) = bounds(&rest);
        let mut i = 0;
        while i < prec - 1 && !(inf <= 0.0 && sup >= 0.0) {
            let m = inf + (sup - inf) / 2.0;
            limbs[i] = m;
            rest.sub_point(m);
            (inf, sup) = bounds(&rest);
            i += 1;
        }
        Self {
            limbs,
            tail: Interval::unchecked(inf, sup),
        }
    }

    /// Exact lower bound.
    pub fn inf(&self) -> LReal {
        let mut limbs = self.limbs.clone();
        limbs.push(self.tail.inf());
        LReal::from_limbs(limbs)
    }

    /// Exact upper bound.
    pub fn sup(&self) -> LReal {
        let mut limbs = self.limbs.clone();
        limbs.push(self.tail.sup());
        LReal::from_limbs(limbs)
    }

    pub fn set_inf(&mut self, lo: &LReal) -> ArithResult<()> {
        *self = Self::from_bounds(lo, &self.sup())?;
        Ok(())
    }

    pub fn set_sup(&mut self, hi: &LReal) -> ArithResult<()> {
        *self = Self::from_bounds(&self.inf(), hi)?;
        Ok(())
    }

    /// Double interval enclosing `self`.
    pub fn to_interval(&self) -> Interval {
        self.to_acc().round()
    }

    pub fn mid(&self) -> LReal {
        let mut acc = crate::accumulator::Accumulator::new();
        for &l in self.limbs.iter().filter(|&&l| l != 0.0) {
            acc.accumulate(l, 2.0);
        }
        acc.add(self.tail.inf());
        acc.add(self.tail.sup());
        LReal::from_acc(&acc).times2pown(-1)
    }

    /// Width, rounded up.
    pub fn diam(&self) -> f64 {
        self.tail.diam()
    }

    /// Width relative to the smallest absolute value, rounded up.
    pub fn rel_diam(&self) -> f64 {
        if self.contains_zero() {
            return self.diam();
        }
        let m = self.abs_min().round_down();
        if m == 0.0 {
            return f64::INFINITY;
        }
        div_up(self.diam(), m)
    }

    pub fn is_point(&self) -> bool {
        self.tail.is_point()
    }

    pub fn contains_zero(&self) -> bool {
        self.to_acc().contains_zero()
    }

    pub fn contains(&self, x: &LReal) -> bool {
        self.inf() <= *x && *x <= self.sup()
    }

    /// `self` lies inside `other`.
    pub fn subset_of(&self, other: &LInterval) -> bool {
        self.to_acc().subset_of(&other.to_acc())
    }

    /// `self` lies in the interior of `other`.
    pub fn interior_of(&self, other: &LInterval) -> bool {
        self.to_acc().interior_of(&other.to_acc())
    }

    pub fn disjoint(&self, other: &LInterval) -> bool {
        self.inf() > other.sup() || other.inf() > self.sup()
    }

    /// Inner and outer enclosure of the convex hull.
    pub fn convex_hull(&self, other: &LInterval) -> (LInterval, LInterval) {
        if self.subset_of(other) {
            return (other.clone(), other.clone());
        }
        if other.subset_of(self) {
            return (self.clone(), self.clone());
        }
        let mut idot = self.to_acc();
        idot.hull_with(&other.to_acc());
        let prec = stagprec();
        (Self::from_acc_inner(&idot, prec), Self::from_acc_prec(&idot, prec))
    }

    /// Inner and outer enclosure of the intersection.
    pub fn intersection(&self, other: &LInterval) -> ArithResult<(LInterval, LInterval)> {
        if self.subset_of(other) {
            return Ok((self.clone(), self.clone()));
        }
        if other.subset_of(self) {
            return Ok((other.clone(), other.clone()));
        }
        let mut idot = self.to_acc();
        idot.intersect_with(&other.to_acc())?;
        let prec = stagprec();
        Ok((Self::from_acc_inner(&idot, prec), Self::from_acc_prec(&idot, prec)))
    }

    pub fn hull(&self, other: &LInterval) -> LInterval {
        self.convex_hull(other).1
    }

    pub fn intersect(&self, other: &LInterval) -> ArithResult<LInterval> {
        Ok(self.intersection(other)?.1)
    }

    /// Tightens `self` with a double enclosure of the same quantity.
    pub fn intersect_interval(&self, x: Interval) -> LInterval {
        let mut idot = self.to_acc();
        let mut other = IntervalAccumulator::new();
        other.add_interval(x);
        if idot.intersect_with(&other).is_err() {
            return self.clone();
        }
        Self::from_acc(&idot)
    }

    /// Re-expresses `self` with the current number of components.
    pub fn adjust(&self) -> Self {
        self.adjusted(stagprec())
    }

    pub fn adjusted(&self, prec: usize) -> Self {
        let prec = prec.max(1);
        if prec > self.prec() {
            let mut limbs = self.limbs.clone();
            limbs.resize(prec - 1, 0.0);
            Self {
                limbs,
                tail: self.tail,
            }
        } else if prec < self.prec() {
            Self::from_acc_prec(&self.to_acc(), prec)
        } else {
            self.clone()
        }
    }

    fn scale_once(&self, n: i32) -> Self {
        let factor = Interval::point(crate::rounding::pow2(n));
        let mut z = self.tail.times2pown(n);
        let mut limbs = self.limbs.clone();
        for limb in limbs.iter_mut() {
            let t = *limb;
            let scaled = crate::rounding::times2pown(t, n);
            if mant(t) != mant(scaled) {
                *limb = 0.0;
                z += Interval::point(t) * factor;
            } else {
                *limb = scaled;
            }
        }
        Self { limbs, tail: z }
    }

    /// Encloses `self * 2^n`.
    pub fn times2pown(&self, n: i32) -> Self {
        let mut y = self.clone();
        let mut k = n;
        while k > MAX_SCALE_STEP {
            y = y.scale_once(MAX_SCALE_STEP);
            k -= MAX_SCALE_STEP;
        }
        while k < -1022 {
            y = y.scale_once(-1022);
            k += 1022;
        }
        debug_assert!((MIN_SCALE_STEP..=MAX_SCALE_STEP).contains(&k));
        y.scale_once(k)
    }

    /// Widens `self` by `eps` times its diameter and one ulp of the last
    /// component on each side.
    pub fn blow(&self, eps: f64) -> Self {
        let spread = Interval::unchecked(-eps, eps) * Interval::point(self.diam());
        let y = self + &LInterval::from_interval(spread);
        let mut lo = y.inf();
        lo.nudge_last(false);
        let mut hi = y.sup();
        hi.nudge_last(true);
        Self::from_bounds(&lo, &hi).unwrap_or(y)
    }

    pub fn abs(&self) -> Self {
        if self.inf() >= 0.0 {
            self.clone()
        } else if self.sup() <= 0.0 {
            -self
        } else {
            let hi = (-self.inf()).max(&self.sup());
            Self::from_bounds(&LReal::zero(), &hi).unwrap_or_else(|_| self.clone())
        }
    }

    /// Smallest absolute value of the members.
    pub fn abs_min(&self) -> LReal {
        if self.contains_zero() {
            return LReal::zero();
        }
        let lo = self.inf();
        if lo > 0.0 {
            lo
        } else {
            -self.sup()
        }
    }

    pub fn abs_max(&self) -> LReal {
        let a = self.inf().abs();
        let b = self.sup().abs();
        if a > b {
            a
        } else {
            b
        }
    }

    /// Kraemer's division: the quotient is built limb by limb from
    /// residuals, then intersected with the plain double quotient.
    pub fn checked_div(&self, rhs: &LInterval) -> ArithResult<LInterval> {
        let dn = rhs.to_interval();
        let stddiv = (self.to_interval() / dn)?;
        if dn.contains_zero() {
            return Ok(Self::from_interval(stddiv));
        }
        let prec = stagprec();
        let mut quotient = vec![0.0; prec - 1];
        let mut dz = stddiv;
        if prec > 1 {
            let idot = self.to_acc();
            let z_positive = dz.inf() > 0.0;
            let (tail_lo, tail_hi) = if z_positive {
                (rhs.tail.sup(), rhs.tail.inf())
            } else {
                (rhs.tail.inf(), rhs.tail.sup())
            };
            for k in 0..prec - 1 {
                let centre = (dz.inf() + dz.sup()) / 2.0;
                let tight = !dz.contains_zero()
                    && dz.abs_max() > MIN_REAL
                    && dz.diam() < 1e-14 * centre.abs();
                if !tight {
                    continue;
                }
                quotient[k] = centre;
                let mut residual = IntervalAccumulator::new();
                for &q in &quotient[..=k] {
                    for &d in rhs.limbs.iter().filter(|&&d| d != 0.0) {
                        residual.accumulate_point(-d, q);
                    }
                    residual.lo.accumulate(-tail_lo, q);
                    residual.hi.accumulate(-tail_hi, q);
                }
                residual.lo.add_acc(&idot.lo);
                residual.hi.add_acc(&idot.hi);
                let r = Interval::unchecked(residual.lo.round_down(), residual.hi.round_up());
                dz = (r / dn)?;
            }
        }
        let y = Self {
            limbs: quotient,
            tail: dz,
        };
        Ok(y.intersect_interval(stddiv))
    }
}

impl Default for LInterval {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for LInterval {
    fn from(x: f64) -> Self {
        Self::new(x)
    }
}

impl From<Interval> for LInterval {
    fn from(x: Interval) -> Self {
        Self::from_interval(x)
    }
}

impl From<&LReal> for LInterval {
    fn from(x: &LReal) -> Self {
        let idot = IntervalAccumulator {
            lo: x.to_acc(),
            hi: x.to_acc(),
        };
        Self::from_acc(&idot)
    }
}

impl From<LReal> for LInterval {
    fn from(x: LReal) -> Self {
        Self::from(&x)
    }
}

impl fmt::Debug for LInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LInterval")
            .field("limbs", &self.limbs)
            .field("tail", &self.tail)
            .finish()
    }
}

impl fmt::Display for LInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_interval())
    }
}

impl PartialEq for LInterval {
    fn eq(&self, other: &Self) -> bool {
        self.to_acc() == other.to_acc()
    }
}

impl Neg for &LInterval {
    type Output = LInterval;
    fn neg(self) -> LInterval {
        LInterval {
            limbs: self.limbs.iter().map(|&l| -l).collect(),
            tail: -self.tail,
        }
    }
}

impl Neg for LInterval {
    type Output = LInterval;
    fn neg(self) -> LInterval {
        -&self
    }
}

impl Add for &LInterval {
    type Output = LInterval;
    fn add(self, rhs: &LInterval) -> LInterval {
        let mut idot = self.to_acc();
        rhs.add_to(&mut idot);
        LInterval::from_acc(&idot)
    }
}

impl Sub for &LInterval {
    type Output = LInterval;
    fn sub(self, rhs: &LInterval) -> LInterval {
        let mut idot = self.to_acc();
        rhs.sub_from(&mut idot);
        LInterval::from_acc(&idot)
    }
}

impl Mul for &LInterval {
    type Output = LInterval;
    fn mul(self, rhs: &LInterval) -> LInterval {
        let stdmul = self.to_interval() * rhs.to_interval();
        let mut idot = IntervalAccumulator::new();
        self.accumulate_product(rhs, &mut idot);
        LInterval::from_acc(&idot).intersect_interval(stdmul)
    }
}

impl Div for &LInterval {
    type Output = ArithResult<LInterval>;
    fn div(self, rhs: &LInterval) -> ArithResult<LInterval> {
        self.checked_div(rhs)
    }
}

impl BitOr for &LInterval {
    type Output = LInterval;
    fn bitor(self, rhs: &LInterval) -> LInterval {
        self.hull(rhs)
    }
}

impl BitAnd for &LInterval {
    type Output = ArithResult<LInterval>;
    fn bitand(self, rhs: &LInterval) -> ArithResult<LInterval> {
        self.intersect(rhs)
    }
}

forward_binop!(impl Add, add for LInterval, LInterval => LInterval);
forward_binop!(impl Sub, sub for LInterval, LInterval => LInterval);
forward_binop!(impl Mul, mul for LInterval, LInterval => LInterval);
forward_binop!(impl Div, div for LInterval, LInterval => ArithResult<LInterval>);
forward_binop!(impl BitOr, bitor for LInterval, LInterval => LInterval);
forward_binop!(impl BitAnd, bitand for LInterval, LInterval => ArithResult<LInterval>);
forward_scalar_binop!(impl Add, add for LInterval, f64 => LInterval);
forward_scalar_binop!(impl Sub, sub for LInterval, f64 => LInterval);
forward_scalar_binop!(impl Mul, mul for LInterval, f64 => LInterval);
forward_scalar_binop!(impl Div, div for LInterval, f64 => ArithResult<LInterval>);
forward_scalar_binop!(impl Add, add for LInterval, Interval => LInterval);
forward_scalar_binop!(impl Sub, sub for LInterval, Interval => LInterval);
forward_scalar_binop!(impl Mul, mul for LInterval, Interval => LInterval);
forward_scalar_binop!(impl Div, div for LInterval, Interval => ArithResult<LInterval>);
forward_assign_op!(impl AddAssign, add_assign for LInterval, LInterval, +);
forward_assign_op!(impl SubAssign, sub_assign for LInterval, LInterval, -);
forward_assign_op!(impl MulAssign, mul_assign for LInterval, LInterval, *);
