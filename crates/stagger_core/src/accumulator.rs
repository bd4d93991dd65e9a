//! Exact dot-product accumulator.
//!
//! A fixed-point two's complement register wide enough to hold every product
//! of two finite doubles without loss: bit `k` carries weight `2^(k - 2176)`,
//! so the smallest subnormal product (`2^-2148`) and the largest finite
//! product (`< 2^2048`) both fit with room left for carries. Sums are exact;
//! rounding happens once, when a value is read out.

use std::cmp::Ordering;

use num_complex::Complex;

use crate::cinterval::CInterval;
use crate::error::{ArithResult, ArithmeticError};
use crate::interval::Interval;
use crate::rounding::{times2pown, Rounding, MAX_REAL};

const WORDS: usize = 68;
const BITS: i64 = (WORDS * 64) as i64;
/// Bit position of 2^0.
const ORIGIN: i64 = 2176;
/// Lowest bit position a double (subnormals included) can occupy.
const DOUBLE_LSB: i64 = ORIGIN - 1074;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Finite,
    PosInf,
    NegInf,
    Undefined,
}

#[derive(Clone)]
pub struct Accumulator {
    words: [u64; WORDS],
    pos_inf: bool,
    neg_inf: bool,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accumulator")
            .field("nearest", &self.round(Rounding::Nearest))
            .field("pos_inf", &self.pos_inf)
            .field("neg_inf", &self.neg_inf)
            .finish()
    }
}

/// Splits a finite nonzero double into sign, integer mantissa and the
/// exponent of its last bit.
fn decompose(x: f64) -> (bool, u64, i64) {
    let bits = x.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let frac = bits & ((1u64 << 52) - 1);
    if biased == 0 {
        (negative, frac, -1074)
    } else {
        (negative, frac | (1u64 << 52), biased - 1075)
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            words: [0; WORDS],
            pos_inf: false,
            neg_inf: false,
        }
    }

    pub fn from_value(x: f64) -> Self {
        let mut acc = Self::new();
        acc.add(x);
        acc
    }

    pub fn clear(&mut self) {
        self.words = [0; WORDS];
        self.pos_inf = false;
        self.neg_inf = false;
    }

    fn class(&self) -> Class {
        match (self.pos_inf, self.neg_inf) {
            (false, false) => Class::Finite,
            (true, false) => Class::PosInf,
            (false, true) => Class::NegInf,
            (true, true) => Class::Undefined,
        }
    }

    fn mark_infinite(&mut self, positive: bool) {
        if positive {
            self.pos_inf = true;
        } else {
            self.neg_inf = true;
        }
    }

    pub fn add(&mut self, x: f64) {
        self.accumulate(x, 1.0);
    }

    pub fn sub(&mut self, x: f64) {
        self.accumulate(-x, 1.0);
    }

    /// Adds the exact product `a * b`.
    pub fn accumulate(&mut self, a: f64, b: f64) {
        if a.is_nan() || b.is_nan() {
            self.pos_inf = true;
            self.neg_inf = true;
            return;
        }
        if a.is_infinite() || b.is_infinite() {
            if a == 0.0 || b == 0.0 {
                self.pos_inf = true;
                self.neg_inf = true;
            } else {
                self.mark_infinite((a > 0.0) == (b > 0.0));
            }
            return;
        }
        if a == 0.0 || b == 0.0 {
            return;
        }
        let (na, ma, ea) = decompose(a);
        let (nb, mb, eb) = decompose(b);
        let product = ma as u128 * mb as u128;
        let pos = (ea + eb + ORIGIN) as usize;
        self.add_shifted(product, pos, na != nb);
    }

    fn add_shifted(&mut self, value: u128, pos: usize, negative: bool) {
        let w = pos / 64;
        let shift = (pos % 64) as u32;
        let parts: [u64; 3] = if shift == 0 {
            [value as u64, (value >> 64) as u64, 0]
        } else {
            [
                (value as u64) << shift,
                (value >> (64 - shift)) as u64,
                (value >> (128 - shift)) as u64,
            ]
        };
        if negative {
            let mut borrow = false;
            for i in w..WORDS {
                let part = if i - w < 3 { parts[i - w] } else { 0 };
                if part == 0 && !borrow && i - w >= 3 {
                    break;
                }
                let (d1, b1) = self.words[i].overflowing_sub(part);
                let (d2, b2) = d1.overflowing_sub(borrow as u64);
                self.words[i] = d2;
                borrow = b1 || b2;
            }
        } else {
            let mut carry = false;
            for i in w..WORDS {
                let part = if i - w < 3 { parts[i - w] } else { 0 };
                if part == 0 && !carry && i - w >= 3 {
                    break;
                }
                let (s1, c1) = self.words[i].overflowing_add(part);
                let (s2, c2) = s1.overflowing_add(carry as u64);
                self.words[i] = s2;
                carry = c1 || c2;
            }
        }
    }

    pub fn add_acc(&mut self, other: &Accumulator) {
        let mut carry = false;
        for i in 0..WORDS {
            let (s1, c1) = self.words[i].overflowing_add(other.words[i]);
            let (s2, c2) = s1.overflowing_add(carry as u64);
            self.words[i] = s2;
            carry = c1 || c2;
        }
        self.pos_inf |= other.pos_inf;
        self.neg_inf |= other.neg_inf;
    }

    pub fn sub_acc(&mut self, other: &Accumulator) {
        let mut borrow = false;
        for i in 0..WORDS {
            let (d1, b1) = self.words[i].overflowing_sub(other.words[i]);
            let (d2, b2) = d1.overflowing_sub(borrow as u64);
            self.words[i] = d2;
            borrow = b1 || b2;
        }
        self.pos_inf |= other.neg_inf;
        self.neg_inf |= other.pos_inf;
    }

    pub fn negate(&mut self) {
        let mut carry = true;
        for word in self.words.iter_mut() {
            let (s, c) = (!*word).overflowing_add(carry as u64);
            *word = s;
            carry = c;
        }
        std::mem::swap(&mut self.pos_inf, &mut self.neg_inf);
    }

    fn is_negative_bits(&self) -> bool {
        self.words[WORDS - 1] >> 63 == 1
    }

    fn is_zero_bits(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn is_zero(&self) -> bool {
        self.class() == Class::Finite && self.is_zero_bits()
    }

    /// -1, 0 or 1. An undefined sum reports 0.
    pub fn sign(&self) -> i32 {
        match self.class() {
            Class::PosInf => 1,
            Class::NegInf => -1,
            Class::Undefined => 0,
            Class::Finite => {
                if self.is_zero_bits() {
                    0
                } else if self.is_negative_bits() {
                    -1
                } else {
                    1
                }
            }
        }
    }

    pub fn compare(&self, other: &Accumulator) -> Option<Ordering> {
        match (self.class(), other.class()) {
            (Class::Undefined, _) | (_, Class::Undefined) => None,
            (Class::Finite, Class::Finite) => {
                let mut diff = self.clone();
                diff.sub_acc(other);
                Some(diff.sign().cmp(&0))
            }
            (a, b) if a == b => Some(Ordering::Equal),
            (Class::NegInf, _) | (_, Class::PosInf) => Some(Ordering::Less),
            _ => Some(Ordering::Greater),
        }
    }

    fn highest_bit(&self) -> Option<i64> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, &w)| w != 0)
            .map(|(i, &w)| (i as i64) * 64 + 63 - w.leading_zeros() as i64)
    }

    fn bit(&self, k: i64) -> bool {
        if k < 0 || k >= BITS {
            return false;
        }
        (self.words[(k / 64) as usize] >> (k % 64)) & 1 == 1
    }

    /// Bits `lo..=hi` as an integer; the range must span at most 64 bits.
    fn bits(&self, lo: i64, hi: i64) -> u64 {
        let mut out = 0u64;
        let mut k = hi;
        while k >= lo.max(0) {
            out = (out << 1) | self.bit(k) as u64;
            k -= 1;
        }
        if lo < 0 {
            out <<= (-lo).min(63) as u32;
        }
        out
    }

    fn any_below(&self, k: i64) -> bool {
        if k <= 0 {
            return false;
        }
        let full = (k / 64) as usize;
        if self.words[..full.min(WORDS)].iter().any(|&w| w != 0) {
            return true;
        }
        let rem = k % 64;
        if rem == 0 || full >= WORDS {
            return false;
        }
        self.words[full] & ((1u64 << rem) - 1) != 0
    }

    /// Rounds a nonnegative bit pattern to a double scaled by `2^scale`.
    fn round_magnitude(&self, mode: Rounding, scale: i32) -> f64 {
        let Some(h) = self.highest_bit() else {
            return 0.0;
        };
        let lsb_floor = DOUBLE_LSB - scale as i64;
        let l = (h - 52).max(lsb_floor);
        let mut m = if h >= l { self.bits(l, h) } else { 0 };
        let half = self.bit(l - 1);
        let sticky = self.any_below(l - 1);
        let bump = match mode {
            Rounding::Down => false,
            Rounding::Up => half || sticky,
            Rounding::Nearest => half && (sticky || m & 1 == 1),
        };
        if bump {
            m += 1;
        }
        let value = times2pown(m as f64, (l - ORIGIN) as i32 + scale);
        if value.is_infinite() && mode == Rounding::Down {
            MAX_REAL
        } else {
            value
        }
    }

    /// Reads out `sum * 2^scale` with a single rounding.
    pub fn round_scaled(&self, mode: Rounding, scale: i32) -> f64 {
        match self.class() {
            Class::PosInf => return f64::INFINITY,
            Class::NegInf => return f64::NEG_INFINITY,
            Class::Undefined => {
                return match mode {
                    Rounding::Down => f64::NEG_INFINITY,
                    Rounding::Up => f64::INFINITY,
                    Rounding::Nearest => f64::NAN,
                }
            }
            Class::Finite => {}
        }
        if self.is_negative_bits() {
            let mut magnitude = self.clone();
            magnitude.negate();
            let flipped = match mode {
                Rounding::Down => Rounding::Up,
                Rounding::Up => Rounding::Down,
                Rounding::Nearest => Rounding::Nearest,
            };
            -magnitude.round_magnitude(flipped, scale)
        } else {
            self.round_magnitude(mode, scale)
        }
    }

    pub fn round(&self, mode: Rounding) -> f64 {
        self.round_scaled(mode, 0)
    }

    pub fn round_down(&self) -> f64 {
        self.round(Rounding::Down)
    }

    pub fn round_up(&self) -> f64 {
        self.round(Rounding::Up)
    }

    pub fn round_nearest(&self) -> f64 {
        self.round(Rounding::Nearest)
    }

    /// Exponent `e` of the exact sum written as `m * 2^e`, `0.5 <= |m| < 1`.
    pub fn leading_exponent(&self) -> Option<i32> {
        if self.class() != Class::Finite || self.is_zero_bits() {
            return None;
        }
        let h = if self.is_negative_bits() {
            let mut magnitude = self.clone();
            magnitude.negate();
            magnitude.highest_bit()?
        } else {
            self.highest_bit()?
        };
        Some((h - ORIGIN + 1) as i32)
    }
}

impl PartialEq for Accumulator {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Accumulator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

/// Returns whichever of `a1*b1`, `a2*b2` is smaller, compared exactly.
fn smaller_product(a1: f64, b1: f64, a2: f64, b2: f64) -> (f64, f64) {
    let mut scratch = Accumulator::new();
    scratch.accumulate(a1, b1);
    scratch.accumulate(-a2, b2);
    if scratch.sign() <= 0 {
        (a1, b1)
    } else {
        (a2, b2)
    }
}

fn larger_product(a1: f64, b1: f64, a2: f64, b2: f64) -> (f64, f64) {
    let mut scratch = Accumulator::new();
    scratch.accumulate(a1, b1);
    scratch.accumulate(-a2, b2);
    if scratch.sign() >= 0 {
        (a1, b1)
    } else {
        (a2, b2)
    }
}

/// Pair of exact accumulators holding the lower and upper bound of a sum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalAccumulator {
    pub lo: Accumulator,
    pub hi: Accumulator,
}

impl IntervalAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bounds(lo: Accumulator, hi: Accumulator) -> ArithResult<Self> {
        if lo.compare(&hi) == Some(Ordering::Greater) {
            return Err(ArithmeticError::EmptyInterval);
        }
        Ok(Self { lo, hi })
    }

    pub fn add_point(&mut self, x: f64) {
        self.lo.add(x);
        self.hi.add(x);
    }

    pub fn sub_point(&mut self, x: f64) {
        self.lo.sub(x);
        self.hi.sub(x);
    }

    pub fn add_interval(&mut self, x: Interval) {
        self.lo.add(x.inf());
        self.hi.add(x.sup());
    }

    pub fn sub_interval(&mut self, x: Interval) {
        self.lo.sub(x.sup());
        self.hi.sub(x.inf());
    }

    pub fn add_acc(&mut self, other: &IntervalAccumulator) {
        self.lo.add_acc(&other.lo);
        self.hi.add_acc(&other.hi);
    }

    pub fn sub_acc(&mut self, other: &IntervalAccumulator) {
        self.lo.sub_acc(&other.hi);
        self.hi.sub_acc(&other.lo);
    }

    pub fn negate(&mut self) {
        std::mem::swap(&mut self.lo, &mut self.hi);
        self.lo.negate();
        self.hi.negate();
    }

    /// Adds the exact point product `a * b` to both bounds.
    pub fn accumulate_point(&mut self, a: f64, b: f64) {
        self.lo.accumulate(a, b);
        self.hi.accumulate(a, b);
    }

    /// Adds the exact range of `x * y` for `x`, `y` ranging over the intervals.
    pub fn accumulate(&mut self, x: Interval, y: Interval) {
        let (xi, xs, yi, ys) = (x.inf(), x.sup(), y.inf(), y.sup());
        let ((la, lb), (ua, ub)) = if xi >= 0.0 {
            if yi >= 0.0 {
                ((xi, yi), (xs, ys))
            } else if ys <= 0.0 {
                ((xs, yi), (xi, ys))
            } else {
                ((xs, yi), (xs, ys))
            }
        } else if xs <= 0.0 {
            if yi >= 0.0 {
                ((xi, ys), (xs, yi))
            } else if ys <= 0.0 {
                ((xs, ys), (xi, yi))
            } else {
                ((xi, ys), (xi, yi))
            }
        } else if yi >= 0.0 {
            ((xi, ys), (xs, ys))
        } else if ys <= 0.0 {
            ((xs, yi), (xi, yi))
        } else {
            (
                smaller_product(xi, ys, xs, yi),
                larger_product(xi, yi, xs, ys),
            )
        };
        self.lo.accumulate(la, lb);
        self.hi.accumulate(ua, ub);
    }

    pub fn is_empty(&self) -> bool {
        self.lo.compare(&self.hi) == Some(Ordering::Greater)
    }

    pub fn contains_zero(&self) -> bool {
        self.lo.sign() <= 0 && self.hi.sign() >= 0
    }

    /// Outward rounded enclosure of the accumulated range.
    pub fn round(&self) -> Interval {
        Interval::unchecked(self.lo.round_down(), self.hi.round_up())
    }

    /// Widest double interval contained in the accumulated range. May be
    /// reversed when the range is narrower than one ulp.
    pub fn round_inner(&self) -> (f64, f64) {
        (self.lo.round_up(), self.hi.round_down())
    }

    pub fn hull_with(&mut self, other: &IntervalAccumulator) {
        if other.lo.compare(&self.lo) == Some(Ordering::Less) {
            self.lo = other.lo.clone();
        }
        if other.hi.compare(&self.hi) == Some(Ordering::Greater) {
            self.hi = other.hi.clone();
        }
    }

    pub fn intersect_with(&mut self, other: &IntervalAccumulator) -> ArithResult<()> {
        if other.lo.compare(&self.lo) == Some(Ordering::Greater) {
            self.lo = other.lo.clone();
        }
        if other.hi.compare(&self.hi) == Some(Ordering::Less) {
            self.hi = other.hi.clone();
        }
        if self.is_empty() {
            return Err(ArithmeticError::EmptyInterval);
        }
        Ok(())
    }

    /// `self` lies inside `other`.
    pub fn subset_of(&self, other: &IntervalAccumulator) -> bool {
        matches!(
            other.lo.compare(&self.lo),
            Some(Ordering::Less | Ordering::Equal)
        ) && matches!(
            self.hi.compare(&other.hi),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// `self` lies in the interior of `other`.
    pub fn interior_of(&self, other: &IntervalAccumulator) -> bool {
        other.lo.compare(&self.lo) == Some(Ordering::Less)
            && self.hi.compare(&other.hi) == Some(Ordering::Less)
    }
}

/// Exact accumulator for complex point dot products.
#[derive(Debug, Clone, Default)]
pub struct ComplexAccumulator {
    pub re: Accumulator,
    pub im: Accumulator,
}

impl ComplexAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, z: Complex<f64>) {
        self.re.add(z.re);
        self.im.add(z.im);
    }

    pub fn sub(&mut self, z: Complex<f64>) {
        self.re.sub(z.re);
        self.im.sub(z.im);
    }

    /// Adds the exact product `a * b`.
    pub fn accumulate(&mut self, a: Complex<f64>, b: Complex<f64>) {
        self.re.accumulate(a.re, b.re);
        self.re.accumulate(-a.im, b.im);
        self.im.accumulate(a.re, b.im);
        self.im.accumulate(a.im, b.re);
    }

    pub fn round(&self, mode: Rounding) -> Complex<f64> {
        Complex::new(self.re.round(mode), self.im.round(mode))
    }
}

/// Pair of interval accumulators for complex interval dot products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CIntervalAccumulator {
    pub re: IntervalAccumulator,
    pub im: IntervalAccumulator,
}

impl CIntervalAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_point(z: Complex<f64>) -> Self {
        let mut acc = Self::new();
        acc.add_point(z);
        acc
    }

    pub fn add_point(&mut self, z: Complex<f64>) {
        self.re.add_point(z.re);
        self.im.add_point(z.im);
    }

    pub fn sub_point(&mut self, z: Complex<f64>) {
        self.re.sub_point(z.re);
        self.im.sub_point(z.im);
    }

    pub fn add(&mut self, z: CInterval) {
        self.re.add_interval(z.re);
        self.im.add_interval(z.im);
    }

    pub fn sub(&mut self, z: CInterval) {
        self.re.sub_interval(z.re);
        self.im.sub_interval(z.im);
    }

    /// Adds the exact product of two complex points.
    pub fn accumulate_point(&mut self, a: Complex<f64>, b: Complex<f64>) {
        self.re.accumulate_point(a.re, b.re);
        self.re.accumulate_point(-a.im, b.im);
        self.im.accumulate_point(a.re, b.im);
        self.im.accumulate_point(a.im, b.re);
    }

    /// Adds a box enclosing `a * b` for every `a`, `b` in the operands.
    pub fn accumulate(&mut self, a: CInterval, b: CInterval) {
        self.re.accumulate(a.re, b.re);
        self.re.accumulate(-a.im, b.im);
        self.im.accumulate(a.re, b.im);
        self.im.accumulate(a.im, b.re);
    }

    pub fn round(&self) -> CInterval {
        CInterval::new(self.re.round(), self.im.round())
    }
}
