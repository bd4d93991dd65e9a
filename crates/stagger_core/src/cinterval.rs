//! Rectangular complex intervals over doubles.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::accumulator::CIntervalAccumulator;
use crate::error::{ArithResult, ArithmeticError};
use crate::interval::Interval;
use crate::l_cinterval::LCInterval;
use crate::precision::PrecisionGuard;

/// Box `re x im` in the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CInterval {
    pub re: Interval,
    pub im: Interval,
}

impl CInterval {
    pub fn new(re: Interval, im: Interval) -> Self {
        Self { re, im }
    }

    pub fn point(z: Complex<f64>) -> Self {
        Self::new(Interval::point(z.re), Interval::point(z.im))
    }

    pub fn inf(&self) -> Complex<f64> {
        Complex::new(self.re.inf(), self.im.inf())
    }

    pub fn sup(&self) -> Complex<f64> {
        Complex::new(self.re.sup(), self.im.sup())
    }

    pub fn mid(&self) -> Complex<f64> {
        Complex::new(self.re.mid(), self.im.mid())
    }

    pub fn is_point(&self) -> bool {
        self.re.is_point() && self.im.is_point()
    }

    pub fn contains(&self, z: Complex<f64>) -> bool {
        self.re.contains(z.re) && self.im.contains(z.im)
    }

    /// The origin lies in the box.
    pub fn contains_zero(&self) -> bool {
        self.re.contains_zero() && self.im.contains_zero()
    }

    pub fn subset_of(&self, other: &CInterval) -> bool {
        self.re.subset_of(&other.re) && self.im.subset_of(&other.im)
    }

    /// Both components lie in the interior of `other`'s.
    pub fn interior_of(&self, other: &CInterval) -> bool {
        self.re.interior_of(&other.re) && self.im.interior_of(&other.im)
    }

    pub fn hull(&self, other: &CInterval) -> CInterval {
        Self::new(self.re.hull(&other.re), self.im.hull(&other.im))
    }

    pub fn intersect(&self, other: &CInterval) -> ArithResult<CInterval> {
        Ok(Self::new(
            self.re.intersect(&other.re)?,
            self.im.intersect(&other.im)?,
        ))
    }

    /// Componentwise [`Interval::blow`].
    pub fn blow(&self, eps: f64) -> CInterval {
        Self::new(self.re.blow(eps), self.im.blow(eps))
    }

    pub fn conj(&self) -> CInterval {
        Self::new(self.re, -self.im)
    }

    /// Range of `|z|` over the box.
    pub fn abs(&self) -> Interval {
        crate::imath::sqrtx2y2(self.re, self.im)
    }
}

impl From<Complex<f64>> for CInterval {
    fn from(z: Complex<f64>) -> Self {
        Self::point(z)
    }
}

impl From<f64> for CInterval {
    fn from(x: f64) -> Self {
        Self::new(Interval::point(x), Interval::ZERO)
    }
}

impl From<Interval> for CInterval {
    fn from(x: Interval) -> Self {
        Self::new(x, Interval::ZERO)
    }
}

impl fmt::Display for CInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}

impl Zero for CInterval {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.re == Interval::ZERO && self.im == Interval::ZERO
    }
}

impl Neg for CInterval {
    type Output = CInterval;
    fn neg(self) -> CInterval {
        Self::new(-self.re, -self.im)
    }
}

impl Add for CInterval {
    type Output = CInterval;
    fn add(self, rhs: CInterval) -> CInterval {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for CInterval {
    type Output = CInterval;
    fn sub(self, rhs: CInterval) -> CInterval {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for CInterval {
    type Output = CInterval;
    fn mul(self, rhs: CInterval) -> CInterval {
        let mut acc = CIntervalAccumulator::new();
        acc.accumulate(self, rhs);
        acc.round()
    }
}

/// Quotient through the optimal staggered division at one limb.
impl Div for CInterval {
    type Output = ArithResult<CInterval>;
    fn div(self, rhs: CInterval) -> ArithResult<CInterval> {
        if rhs.contains_zero() {
            return Err(ArithmeticError::DivByZero);
        }
        let _g = PrecisionGuard::new(1);
        let q = (LCInterval::from(self) / LCInterval::from(rhs))?;
        Ok(q.to_cinterval())
    }
}

impl Mul<Complex<f64>> for CInterval {
    type Output = CInterval;
    fn mul(self, rhs: Complex<f64>) -> CInterval {
        self * CInterval::point(rhs)
    }
}

impl Div<Complex<f64>> for CInterval {
    type Output = ArithResult<CInterval>;
    fn div(self, rhs: Complex<f64>) -> ArithResult<CInterval> {
        self / CInterval::point(rhs)
    }
}
