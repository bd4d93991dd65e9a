use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{ArithResult, ArithmeticError};
use crate::rounding::{
    add_down, add_up, div_down, div_up, mul_down, mul_up, pred, sub_down, sub_up, succ,
    times2pown, MAX_REAL,
};

/// Closed interval of doubles with outward rounded arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    inf: f64,
    sup: f64,
}

impl Interval {
    pub const ZERO: Interval = Interval { inf: 0.0, sup: 0.0 };
    pub const ONE: Interval = Interval { inf: 1.0, sup: 1.0 };
    pub const ENTIRE: Interval = Interval {
        inf: f64::NEG_INFINITY,
        sup: f64::INFINITY,
    };

    pub fn new(inf: f64, sup: f64) -> ArithResult<Self> {
        if inf.is_nan() || sup.is_nan() || inf > sup {
            return Err(ArithmeticError::EmptyInterval);
        }
        Ok(Self { inf, sup })
    }

    pub fn point(x: f64) -> Self {
        Self { inf: x, sup: x }
    }

    /// Builds an interval from bounds already known to be ordered.
    pub(crate) fn unchecked(inf: f64, sup: f64) -> Self {
        debug_assert!(!(inf > sup), "reversed bounds [{inf}, {sup}]");
        Self { inf, sup }
    }

    pub fn inf(&self) -> f64 {
        self.inf
    }

    pub fn sup(&self) -> f64 {
        self.sup
    }

    pub fn set_inf(&mut self, inf: f64) -> ArithResult<()> {
        *self = Self::new(inf, self.sup)?;
        Ok(())
    }

    pub fn set_sup(&mut self, sup: f64) -> ArithResult<()> {
        *self = Self::new(self.inf, sup)?;
        Ok(())
    }

    /// A double inside the interval, close to its center.
    pub fn mid(&self) -> f64 {
        if self.inf == self.sup {
            return self.inf;
        }
        let lo = self.inf.max(-MAX_REAL);
        let hi = self.sup.min(MAX_REAL);
        let m = 0.5 * lo + 0.5 * hi;
        m.clamp(self.inf, self.sup)
    }

    pub fn diam(&self) -> f64 {
        sub_up(self.sup, self.inf)
    }

    pub fn is_point(&self) -> bool {
        self.inf == self.sup
    }

    pub fn contains(&self, x: f64) -> bool {
        self.inf <= x && x <= self.sup
    }

    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }

    /// `x` lies strictly inside the interval.
    pub fn interior_contains(&self, x: f64) -> bool {
        self.inf < x && x < self.sup
    }

    pub fn subset_of(&self, other: &Interval) -> bool {
        other.inf <= self.inf && self.sup <= other.sup
    }

    /// Both bounds lie strictly inside `other`.
    pub fn interior_of(&self, other: &Interval) -> bool {
        other.inf < self.inf && self.sup < other.sup
    }

    pub fn disjoint(&self, other: &Interval) -> bool {
        self.inf > other.sup || other.inf > self.sup
    }

    pub fn hull(&self, other: &Interval) -> Interval {
        Interval::unchecked(self.inf.min(other.inf), self.sup.max(other.sup))
    }

    pub fn intersect(&self, other: &Interval) -> ArithResult<Interval> {
        Interval::new(self.inf.max(other.inf), self.sup.min(other.sup))
    }

    pub fn abs(&self) -> Interval {
        if self.inf >= 0.0 {
            *self
        } else if self.sup <= 0.0 {
            -*self
        } else {
            Interval::unchecked(0.0, (-self.inf).max(self.sup))
        }
    }

    /// Smallest absolute value in the interval.
    pub fn abs_min(&self) -> f64 {
        self.abs().inf
    }

    /// Largest absolute value in the interval.
    pub fn abs_max(&self) -> f64 {
        self.abs().sup
    }

    pub fn sqr(&self) -> Interval {
        let a = self.abs();
        Interval::unchecked(mul_down(a.inf, a.inf), mul_up(a.sup, a.sup))
    }

    /// Enlarges the interval by `eps` times its diameter on each side.
    pub fn blow(&self, eps: f64) -> Interval {
        let y = Interval::point(1.0 + eps) * *self - Interval::point(eps) * *self;
        Interval::unchecked(pred(y.inf), succ(y.sup))
    }

    /// Multiplication by `2^n`, widened outward if the scaling was inexact.
    pub fn times2pown(&self, n: i32) -> Interval {
        let scale = |x: f64| {
            let y = times2pown(x, n);
            let exact = y.is_infinite() || x.is_infinite() || times2pown(y, -n) == x;
            (y, exact)
        };
        let (lo, lo_exact) = scale(self.inf);
        let (hi, hi_exact) = scale(self.sup);
        let lo = if lo_exact { lo } else { pred(lo) };
        let hi = if hi_exact { hi } else { succ(hi) };
        Interval::unchecked(lo, hi)
    }

    /// Widens both bounds outward by `ulps` units in the last place.
    pub(crate) fn widened(&self, ulps: u32) -> Interval {
        let mut lo = self.inf;
        let mut hi = self.sup;
        for _ in 0..ulps {
            lo = pred(lo);
            hi = succ(hi);
        }
        Interval::unchecked(lo, hi)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::ZERO
    }
}

impl From<f64> for Interval {
    fn from(x: f64) -> Self {
        Interval::point(x)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:e},{:e}]", self.inf, self.sup)
    }
}

impl Neg for Interval {
    type Output = Interval;
    fn neg(self) -> Interval {
        Interval::unchecked(-self.sup, -self.inf)
    }
}

impl Add for Interval {
    type Output = Interval;
    fn add(self, rhs: Interval) -> Interval {
        Interval::unchecked(add_down(self.inf, rhs.inf), add_up(self.sup, rhs.sup))
    }
}

impl Sub for Interval {
    type Output = Interval;
    fn sub(self, rhs: Interval) -> Interval {
        Interval::unchecked(sub_down(self.inf, rhs.sup), sub_up(self.sup, rhs.inf))
    }
}

impl Mul for Interval {
    type Output = Interval;
    fn mul(self, rhs: Interval) -> Interval {
        let corners = [
            (self.inf, rhs.inf),
            (self.inf, rhs.sup),
            (self.sup, rhs.inf),
            (self.sup, rhs.sup),
        ];
        let lo = corners
            .iter()
            .map(|&(a, b)| mul_down(a, b))
            .fold(f64::INFINITY, f64::min);
        let hi = corners
            .iter()
            .map(|&(a, b)| mul_up(a, b))
            .fold(f64::NEG_INFINITY, f64::max);
        Interval::unchecked(lo, hi)
    }
}

impl Div for Interval {
    type Output = ArithResult<Interval>;

    /// Division by an interval that touches zero only at one endpoint yields
    /// an unbounded result; zero in the interior is an error.
    fn div(self, rhs: Interval) -> ArithResult<Interval> {
        if rhs.inf > 0.0 || rhs.sup < 0.0 {
            let corners = [
                (self.inf, rhs.inf),
                (self.inf, rhs.sup),
                (self.sup, rhs.inf),
                (self.sup, rhs.sup),
            ];
            let lo = corners
                .iter()
                .map(|&(a, b)| div_down(a, b))
                .fold(f64::INFINITY, f64::min);
            let hi = corners
                .iter()
                .map(|&(a, b)| div_up(a, b))
                .fold(f64::NEG_INFINITY, f64::max);
            return Ok(Interval::unchecked(lo, hi));
        }
        if (rhs.inf < 0.0 && rhs.sup > 0.0) || (rhs.inf == 0.0 && rhs.sup == 0.0) {
            return Err(ArithmeticError::DivByZero);
        }
        if self.inf == 0.0 && self.sup == 0.0 {
            return Ok(Interval::ZERO);
        }
        let positive_divisor = rhs.inf == 0.0;
        let edge = if positive_divisor { rhs.sup } else { rhs.inf };
        let out = if self.inf >= 0.0 {
            if positive_divisor {
                Interval::unchecked(div_down(self.inf, edge), f64::INFINITY)
            } else {
                Interval::unchecked(f64::NEG_INFINITY, div_up(self.inf, edge))
            }
        } else if self.sup <= 0.0 {
            if positive_divisor {
                Interval::unchecked(f64::NEG_INFINITY, div_up(self.sup, edge))
            } else {
                Interval::unchecked(div_down(self.sup, edge), f64::INFINITY)
            }
        } else {
            Interval::ENTIRE
        };
        Ok(out)
    }
}

impl BitOr for Interval {
    type Output = Interval;
    fn bitor(self, rhs: Interval) -> Interval {
        self.hull(&rhs)
    }
}

impl BitAnd for Interval {
    type Output = ArithResult<Interval>;
    fn bitand(self, rhs: Interval) -> ArithResult<Interval> {
        self.intersect(&rhs)
    }
}

macro_rules! scalar_ops {
    ($($trait:ident $method:ident),*) => {$(
        impl $trait<f64> for Interval {
            type Output = <Interval as $trait>::Output;
            fn $method(self, rhs: f64) -> Self::Output {
                $trait::$method(self, Interval::point(rhs))
            }
        }
        impl $trait<Interval> for f64 {
            type Output = <Interval as $trait>::Output;
            fn $method(self, rhs: Interval) -> Self::Output {
                $trait::$method(Interval::point(self), rhs)
            }
        }
    )*};
}

scalar_ops!(Add add, Sub sub, Mul mul, Div div);

impl AddAssign for Interval {
    fn add_assign(&mut self, rhs: Interval) {
        *self = *self + rhs;
    }
}

impl SubAssign for Interval {
    fn sub_assign(&mut self, rhs: Interval) {
        *self = *self - rhs;
    }
}

impl MulAssign for Interval {
    fn mul_assign(&mut self, rhs: Interval) {
        *self = *self * rhs;
    }
}
