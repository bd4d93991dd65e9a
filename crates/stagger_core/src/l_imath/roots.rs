//! Root expressions evaluated without intermediate overflow or
//! cancellation.

use super::{finish, sqr, sqrt, STAGMAX};
use crate::error::ArithResult;
use crate::imath;
use crate::interval::Interval;
use crate::l_interval::LInterval;
use crate::l_real::LReal;
use crate::precision::{stagprec, PrecisionGuard};
use crate::rounding::expo;

/// `sqrt(1 + x^2)`.
pub fn sqrt1px2(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::sqrt1px2(dx);
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        let a = x.abs();
        // 1 + |x| bounds the result from above.
        let upper = (1.0 + LInterval::from(&a.sup())).sup();
        let ex = expo(dx.abs_max());
        let mut y = if ex > 512 {
            let scale = 512 - ex;
            let s = a.times2pown(scale);
            sqrt(&(&LInterval::new(1.0).times2pown(2 * scale) + &sqr(&s)))?.times2pown(-scale)
        } else {
            sqrt(&(1.0 + sqr(x)))?
        };
        if y.inf() < 1.0 {
            y.set_inf(&LReal::new(1.0))?;
        }
        if y.sup() > upper {
            y.set_sup(&upper)?;
        }
        y
    };
    Ok(finish(&y, coarse))
}

/// `sqrt(x^2 + y^2)`, scaled so neither square overflows or underflows.
pub fn sqrtx2y2(x: &LInterval, y: &LInterval) -> ArithResult<LInterval> {
    let ia = x.to_interval().abs();
    let ib = y.to_interval().abs();
    let coarse = imath::sqrtx2y2(ia, ib);
    if coarse == Interval::ZERO {
        return Ok(LInterval::new(0.0));
    }
    let r = {
        let _g = PrecisionGuard::cap(STAGMAX);
        let (mut a, mut b) = (x.abs(), y.abs());
        let (mut exa, exb) = (expo(ia.sup()), expo(ib.sup()));
        if exb > exa {
            std::mem::swap(&mut a, &mut b);
            exa = exb;
        }
        // times2pown splits large shifts itself
        let ex = 511 - exa;
        let a = a.times2pown(ex);
        let b = b.times2pown(ex);
        sqrt(&(&(&a * &a) + &(&b * &b)))?.times2pown(-ex)
    };
    Ok(finish(&r, coarse))
}

/// `sqrt(1 + x) - 1`, without cancellation for small `x`.
pub fn sqrtp1m1(x: &LInterval) -> ArithResult<LInterval> {
    let dx = x.to_interval();
    let coarse = imath::sqrtp1m1(dx)?;
    let y = {
        let _g = PrecisionGuard::raise(STAGMAX);
        let tmp = x + 1.0;
        const SMALL: f64 = 1e-10;
        if dx.subset_of(&Interval::unchecked(-SMALL, SMALL)) {
            (x / &(sqrt(&tmp)? + 1.0))?
        } else {
            sqrt(&tmp)? - 1.0
        }
    };
    Ok(finish(&y, coarse))
}

/// `sqrt(x^2 - 1)` for `|x| >= 1`.
pub fn sqrtx2m1(x: &LInterval) -> ArithResult<LInterval> {
    let z = x.abs();
    let dz = z.to_interval();
    let coarse = imath::sqrtx2m1(dz)?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        if z.inf() == 1.0 {
            let top = LInterval::from(&z.sup());
            let hi = sqrt(&(sqr(&top) - 1.0))?.sup();
            LInterval::from_bounds(&LReal::zero(), &hi)?
        } else if expo(dz.sup()) < 500 {
            sqrt(&(sqr(&z) - 1.0))?
        } else {
            // x - 1/(2x) < sqrt(x^2 - 1) < x
            let lo = LInterval::from(&z.inf());
            let lower = (&lo - &(1.0 / &lo)?.times2pown(-1)).inf();
            LInterval::from_bounds(&lower, &z.sup())?
        }
    };
    Ok(finish(&y, coarse))
}

/// `sqrt(1 - x^2)` for `|x| <= 1`.
pub fn sqrt1mx2(x: &LInterval) -> ArithResult<LInterval> {
    let z = x.abs();
    let coarse = imath::sqrt1mx2(z.to_interval())?;
    if stagprec() == 1 {
        return Ok(LInterval::from_interval(coarse));
    }
    let y = {
        let _g = PrecisionGuard::cap(STAGMAX);
        // 2^1022 - (2^511 x)^2 keeps the subtraction away from underflow.
        let big = LInterval::new(crate::rounding::pow2(1022));
        let zs = z.times2pown(511);
        sqrt(&(big - sqr(&zs)))?.times2pown(-511)
    };
    Ok(finish(&y, coarse))
}
