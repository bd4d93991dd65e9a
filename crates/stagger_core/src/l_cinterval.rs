//! Staggered complex intervals.
//!
//! Division of two proper boxes is the optimal rectangular division: real
//! and imaginary parts of the quotient are bounded by the extrema of
//! `f(c, d) = (a c + b d) / (c^2 + d^2)` over the divisor box, for the
//! numerator corner that can attain them. Extrema on the box edges are
//! located in closed form; divisor corners are only evaluated when no edge
//! extremum made them redundant.

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::accumulator::IntervalAccumulator;
use crate::cinterval::CInterval;
use crate::error::{ArithResult, ArithmeticError};
use crate::l_complex::{scaled_quotient, LComplex};
use crate::l_imath::{sqrt1px2, sqrtx2y2};
use crate::l_interval::LInterval;
use crate::l_real::LReal;
use crate::rounding::{expo, Rounding, MAX_REAL};

/// Exponent headroom kept free when locating edge extrema.
const MAX_EXPO: i32 = 1020;
const MAX_EXPO1: i32 = 1023;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LCInterval {
    pub re: LInterval,
    pub im: LInterval,
}

impl LCInterval {
    pub fn new(re: LInterval, im: LInterval) -> Self {
        Self { re, im }
    }

    pub fn point(z: &LComplex) -> Self {
        Self::new(LInterval::from(&z.re), LInterval::from(&z.im))
    }

    pub fn to_cinterval(&self) -> CInterval {
        CInterval::new(self.re.to_interval(), self.im.to_interval())
    }

    pub fn inf(&self) -> LComplex {
        LComplex::new(self.re.inf(), self.im.inf())
    }

    pub fn sup(&self) -> LComplex {
        LComplex::new(self.re.sup(), self.im.sup())
    }

    pub fn mid(&self) -> LComplex {
        LComplex::new(self.re.mid(), self.im.mid())
    }

    /// Larger of the two component diameters.
    pub fn diam(&self) -> f64 {
        self.re.diam().max(self.im.diam())
    }

    pub fn is_point(&self) -> bool {
        self.re.is_point() && self.im.is_point()
    }

    pub fn contains(&self, z: &LComplex) -> bool {
        self.re.contains(&z.re) && self.im.contains(&z.im)
    }

    /// The origin lies in the box.
    pub fn contains_zero(&self) -> bool {
        self.re.contains_zero() && self.im.contains_zero()
    }

    pub fn subset_of(&self, other: &LCInterval) -> bool {
        self.re.subset_of(&other.re) && self.im.subset_of(&other.im)
    }

    pub fn interior_of(&self, other: &LCInterval) -> bool {
        self.re.interior_of(&other.re) && self.im.interior_of(&other.im)
    }

    pub fn disjoint(&self, other: &LCInterval) -> bool {
        self.re.disjoint(&other.re) || self.im.disjoint(&other.im)
    }

    pub fn hull(&self, other: &LCInterval) -> LCInterval {
        Self::new(self.re.hull(&other.re), self.im.hull(&other.im))
    }

    pub fn intersect(&self, other: &LCInterval) -> ArithResult<LCInterval> {
        Ok(Self::new(
            self.re.intersect(&other.re)?,
            self.im.intersect(&other.im)?,
        ))
    }

    pub fn conj(&self) -> LCInterval {
        Self::new(self.re.clone(), -&self.im)
    }

    /// `i * z`.
    pub fn mul_i(&self) -> LCInterval {
        Self::new(-&self.im, self.re.clone())
    }

    /// `-i * z`.
    pub fn div_i(&self) -> LCInterval {
        Self::new(self.im.clone(), -&self.re)
    }

    pub fn adjust(&self) -> LCInterval {
        Self::new(self.re.adjust(), self.im.adjust())
    }

    pub fn times2pown(&self, n: i32) -> LCInterval {
        Self::new(self.re.times2pown(n), self.im.times2pown(n))
    }

    pub fn blow(&self, eps: f64) -> LCInterval {
        Self::new(self.re.blow(eps), self.im.blow(eps))
    }

    /// Both components multiplied by a real interval.
    pub fn scale(&self, x: &LInterval) -> LCInterval {
        Self::new(&self.re * x, &self.im * x)
    }

    /// Both components divided by a real interval.
    pub fn div_real(&self, x: &LInterval) -> ArithResult<LCInterval> {
        Ok(Self::new((&self.re / x)?, (&self.im / x)?))
    }

    /// Range of `|z|` over the box.
    pub fn abs(&self) -> ArithResult<LInterval> {
        sqrtx2y2(&self.re, &self.im)
    }

    /// Optimal division; fails when the divisor box contains the origin.
    pub fn checked_div(&self, rhs: &LCInterval) -> ArithResult<LCInterval> {
        if rhs.contains_zero() {
            return Err(ArithmeticError::DivByZero);
        }
        if self.is_point() && rhs.is_point() {
            point_div(&self.inf(), &rhs.inf())
        } else {
            cidiv(self, rhs)
        }
    }
}

fn point_div(a: &LComplex, b: &LComplex) -> ArithResult<LCInterval> {
    let lo = a.div_rounded(b, Rounding::Down)?;
    let hi = a.div_rounded(b, Rounding::Up)?;
    Ok(LCInterval::new(
        LInterval::from_bounds(&lo.re, &hi.re)?,
        LInterval::from_bounds(&lo.im, &hi.im)?,
    ))
}

/// Divisor box with its bounds read out once. Corner `k` has the real
/// bound selected by bit 0 and the imaginary bound by bit 1 of `k`.
struct Divisor {
    re: LInterval,
    im: LInterval,
    re_inf: LReal,
    re_sup: LReal,
    im_inf: LReal,
    im_sup: LReal,
}

impl Divisor {
    fn new(b: &LCInterval) -> Self {
        Self {
            re: b.re.clone(),
            im: b.im.clone(),
            re_inf: b.re.inf(),
            re_sup: b.re.sup(),
            im_inf: b.im.inf(),
            im_sup: b.im.sup(),
        }
    }

    fn corner(&self, k: usize) -> (&LReal, &LReal) {
        let c = if k & 1 == 0 { &self.re_inf } else { &self.re_sup };
        let d = if k & 2 == 0 { &self.im_inf } else { &self.im_sup };
        (c, d)
    }
}

fn straddles_zero(x: &LInterval) -> bool {
    x.inf() < 0.0 && x.sup() > 0.0
}

/// Extremum of `f` along one divisor edge: `d = y0` fixed, `c` ranging over
/// `x` (or the mirrored roles). `edge` names the two corners of that edge;
/// they are cleared once the edge extremum covers them.
#[allow(clippy::too_many_arguments)]
fn minmax(
    minimum: bool,
    a: &LReal,
    b: &LReal,
    y0: &LReal,
    x: &LInterval,
    edge: (usize, usize),
    pending: &mut [bool; 4],
) -> ArithResult<LReal> {
    let (i, j) = edge;
    let unset = LReal::new(if minimum { MAX_REAL } else { -MAX_REAL });
    let mode = if minimum { Rounding::Down } else { Rounding::Up };
    let bound = |q: LInterval| if minimum { q.inf() } else { q.sup() };

    if x.is_point() {
        let value = if pending[i] && pending[j] {
            scaled_quotient(a, b, &x.inf(), y0, mode)?
        } else {
            unset
        };
        pending[i] = false;
        pending[j] = false;
        return Ok(value);
    }

    if a.sign() == 0 {
        if b.sign() == 0 || y0.sign() == 0 {
            pending[i] = false;
            pending[j] = false;
            return Ok(LReal::zero());
        }
        // f = b d / (c^2 + d^2) peaks at c = 0
        if straddles_zero(x) && (b.sign() == y0.sign()) != minimum {
            pending[i] = false;
            pending[j] = false;
            return Ok(bound((LInterval::from(b) / LInterval::from(y0))?));
        }
        return Ok(unset);
    }

    if y0.sign() == 0 {
        // f = a / c on this edge
        let at = if (*a > 0.0) == minimum { x.sup() } else { x.inf() };
        pending[i] = false;
        pending[j] = false;
        return Ok(bound((LInterval::from(a) / LInterval::from(&at))?));
    }

    // t = sign(a) (|b/a| + sqrt(1 + (b/a)^2)), with a scaled by 2^da so
    // the quotient cannot overflow.
    let mut da = 0;
    let mut t = if b.sign() == 0 {
        LInterval::new(1.0)
    } else {
        let mut a_scaled = LInterval::from(a);
        let mut two_da = LInterval::new(1.0);
        let expo_diff = b.expo_gr() - a.expo_gr();
        if expo_diff > MAX_EXPO {
            da = expo_diff - MAX_EXPO;
            a_scaled = a_scaled.times2pown(da);
            two_da = two_da.times2pown(-da);
        }
        let q = (LInterval::from(b) / a_scaled)?.abs();
        if da > 0 {
            &q + &sqrtx2y2(&two_da, &q)?
        } else {
            &q + &sqrt1px2(&q)?
        }
    };
    if *a < 0.0 {
        t = -t;
    }

    let ay0 = y0.abs();
    let ay0_expo = ay0.expo_gr();
    let t_expo = expo(t.to_interval().abs_max());
    let ay0 = LInterval::from(&ay0);
    let mut x0 = if (b.sign() == y0.sign()) == minimum {
        if ay0_expo + t_expo + da > MAX_EXPO1 {
            return Ok(unset);
        }
        (&ay0 * &t).times2pown(da)
    } else {
        if ay0_expo - t_expo - da > MAX_EXPO1 {
            return Ok(unset);
        }
        (&ay0 / &t)?.times2pown(-da)
    };
    if minimum {
        x0 = -x0;
    }

    if x0.interior_of(x) {
        // value of f at the extremum: a / (2 x0)
        let q = (LInterval::from(a) / &x0)?.times2pown(-1);
        pending[i] = false;
        pending[j] = false;
        return Ok(bound(q));
    }
    Ok(unset)
}

/// Extremum of `f(c, d) = (a c + b d) / (c^2 + d^2)` over the divisor box.
fn sweep(minimum: bool, a: &LReal, b: &LReal, div: &Divisor) -> ArithResult<LReal> {
    let mut pending = [true; 4];
    let pick = |u: LReal, v: LReal| if minimum { u.min(&v) } else { u.max(&v) };
    let mut best = minmax(minimum, a, b, &div.im_inf, &div.re, (0, 1), &mut pending)?;
    best = pick(best, minmax(minimum, a, b, &div.im_sup, &div.re, (2, 3), &mut pending)?);
    best = pick(best, minmax(minimum, b, a, &div.re_inf, &div.im, (0, 2), &mut pending)?);
    best = pick(best, minmax(minimum, b, a, &div.re_sup, &div.im, (1, 3), &mut pending)?);
    let mode = if minimum { Rounding::Down } else { Rounding::Up };
    for k in (0..4).filter(|&k| pending[k]) {
        let (c, d) = div.corner(k);
        best = pick(best, scaled_quotient(a, b, c, d, mode)?);
    }
    Ok(best)
}

/// Optimal quotient of two boxes, the divisor not containing the origin.
pub fn cidiv(a: &LCInterval, b: &LCInterval) -> ArithResult<LCInterval> {
    let div = Divisor::new(b);
    let (are_inf, are_sup) = (a.re.inf(), a.re.sup());
    let (aim_inf, aim_sup) = (a.im.inf(), a.im.sup());
    let re_nonneg = div.re_inf >= 0.0;
    let im_nonneg = div.im_inf >= 0.0;
    let re_split = straddles_zero(&div.re);
    let im_split = straddles_zero(&div.im);
    let rep = if re_split || im_split { 2 } else { 1 };

    // Real part: f(a, b, c, d).
    let mut a0 = if re_nonneg { &are_sup } else { &are_inf };
    let mut b0 = if im_nonneg { &aim_sup } else { &aim_inf };
    let mut re_hi = LReal::new(-MAX_REAL);
    for _ in 0..rep {
        re_hi = re_hi.max(&sweep(false, a0, b0, &div)?);
        if re_split {
            a0 = &are_sup;
        } else if im_split {
            b0 = &aim_sup;
        }
    }

    a0 = if re_nonneg { &are_inf } else { &are_sup };
    b0 = if im_nonneg { &aim_inf } else { &aim_sup };
    let mut re_lo = LReal::new(MAX_REAL);
    for _ in 0..rep {
        re_lo = re_lo.min(&sweep(true, a0, b0, &div)?);
        if re_split {
            a0 = &are_inf;
        } else if im_split {
            b0 = &aim_inf;
        }
    }

    // Imaginary part: f(b, -a, c, d).
    let mut b0 = if re_nonneg { aim_sup.clone() } else { aim_inf.clone() };
    let mut a0 = if im_nonneg { are_inf.clone() } else { are_sup.clone() };
    let mut im_hi = LReal::new(-MAX_REAL);
    for _ in 0..rep {
        im_hi = im_hi.max(&sweep(false, &b0, &-&a0, &div)?);
        if re_split {
            b0 = aim_sup.clone();
        } else if im_split {
            a0 = are_inf.clone();
        }
    }

    b0 = if re_nonneg { aim_inf.clone() } else { aim_sup.clone() };
    a0 = if im_nonneg { are_sup.clone() } else { are_inf.clone() };
    let mut im_lo = LReal::new(MAX_REAL);
    for _ in 0..rep {
        im_lo = im_lo.min(&sweep(true, &b0, &-&a0, &div)?);
        if re_split {
            b0 = aim_inf.clone();
        } else if im_split {
            a0 = are_sup.clone();
        }
    }

    Ok(LCInterval::new(
        LInterval::from_bounds(&re_lo, &re_hi)?,
        LInterval::from_bounds(&im_lo, &im_hi)?,
    ))
}

impl From<CInterval> for LCInterval {
    fn from(z: CInterval) -> Self {
        Self::new(LInterval::from_interval(z.re), LInterval::from_interval(z.im))
    }
}

impl From<LInterval> for LCInterval {
    fn from(x: LInterval) -> Self {
        Self::new(x, LInterval::new(0.0))
    }
}

impl From<f64> for LCInterval {
    fn from(x: f64) -> Self {
        Self::from(LInterval::new(x))
    }
}

impl From<&LComplex> for LCInterval {
    fn from(z: &LComplex) -> Self {
        Self::point(z)
    }
}

impl fmt::Display for LCInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}

impl Neg for &LCInterval {
    type Output = LCInterval;
    fn neg(self) -> LCInterval {
        LCInterval::new(-&self.re, -&self.im)
    }
}

impl Neg for LCInterval {
    type Output = LCInterval;
    fn neg(self) -> LCInterval {
        -&self
    }
}

impl Add for &LCInterval {
    type Output = LCInterval;
    fn add(self, rhs: &LCInterval) -> LCInterval {
        LCInterval::new(&self.re + &rhs.re, &self.im + &rhs.im)
    }
}

impl Sub for &LCInterval {
    type Output = LCInterval;
    fn sub(self, rhs: &LCInterval) -> LCInterval {
        LCInterval::new(&self.re - &rhs.re, &self.im - &rhs.im)
    }
}

impl Mul for &LCInterval {
    type Output = LCInterval;
    fn mul(self, rhs: &LCInterval) -> LCInterval {
        let mut re = IntervalAccumulator::new();
        self.re.accumulate_product(&rhs.re, &mut re);
        (-&self.im).accumulate_product(&rhs.im, &mut re);
        let mut im = IntervalAccumulator::new();
        self.im.accumulate_product(&rhs.re, &mut im);
        self.re.accumulate_product(&rhs.im, &mut im);
        LCInterval::new(LInterval::from_acc(&re), LInterval::from_acc(&im))
    }
}

impl Div for &LCInterval {
    type Output = ArithResult<LCInterval>;
    fn div(self, rhs: &LCInterval) -> ArithResult<LCInterval> {
        self.checked_div(rhs)
    }
}

impl BitOr for &LCInterval {
    type Output = LCInterval;
    fn bitor(self, rhs: &LCInterval) -> LCInterval {
        self.hull(rhs)
    }
}

impl BitAnd for &LCInterval {
    type Output = ArithResult<LCInterval>;
    fn bitand(self, rhs: &LCInterval) -> ArithResult<LCInterval> {
        self.intersect(rhs)
    }
}

forward_binop!(impl Add, add for LCInterval, LCInterval => LCInterval);
forward_binop!(impl Sub, sub for LCInterval, LCInterval => LCInterval);
forward_binop!(impl Mul, mul for LCInterval, LCInterval => LCInterval);
forward_binop!(impl Div, div for LCInterval, LCInterval => ArithResult<LCInterval>);
forward_binop!(impl BitOr, bitor for LCInterval, LCInterval => LCInterval);
forward_binop!(impl BitAnd, bitand for LCInterval, LCInterval => ArithResult<LCInterval>);
forward_scalar_binop!(impl Add, add for LCInterval, f64 => LCInterval);
forward_scalar_binop!(impl Sub, sub for LCInterval, f64 => LCInterval);
forward_scalar_binop!(impl Mul, mul for LCInterval, f64 => LCInterval);
forward_scalar_binop!(impl Div, div for LCInterval, f64 => ArithResult<LCInterval>);
forward_scalar_binop!(impl Add, add for LCInterval, LInterval => LCInterval);
forward_scalar_binop!(impl Sub, sub for LCInterval, LInterval => LCInterval);
forward_scalar_binop!(impl Mul, mul for LCInterval, LInterval => LCInterval);
forward_scalar_binop!(impl Div, div for LCInterval, LInterval => ArithResult<LCInterval>);
