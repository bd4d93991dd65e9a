//! Working precision of the staggered types.
//!
//! The number of limbs new `LReal` / `LInterval` values carry is a per-thread
//! setting. Elementary functions raise it temporarily through a
//! [`PrecisionGuard`], which restores the previous value when dropped.

use std::cell::Cell;

/// Precision new threads start with.
pub const DEFAULT_STAGPREC: usize = 2;
/// Highest precision the stored constants support without widening.
pub const MAX_CONSTANT_PREC: usize = 20;

thread_local! {
    static STAGPREC: Cell<usize> = const { Cell::new(DEFAULT_STAGPREC) };
}

pub fn stagprec() -> usize {
    STAGPREC.with(|p| p.get())
}

/// Sets the working precision; values below one are raised to one.
pub fn set_stagprec(prec: usize) {
    STAGPREC.with(|p| p.set(prec.max(1)));
}

/// Restores the previous working precision on drop.
#[must_use = "the precision is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct PrecisionGuard {
    saved: usize,
}

impl PrecisionGuard {
    /// Switches to `prec` limbs.
    pub fn new(prec: usize) -> Self {
        let saved = stagprec();
        set_stagprec(prec);
        Self { saved }
    }

    /// One limb more than the current precision, capped at `max`.
    pub fn raise(max: usize) -> Self {
        let current = stagprec();
        Self::new(if current < max { current + 1 } else { max })
    }

    /// Current precision, lowered to `max` if it exceeds it.
    pub fn cap(max: usize) -> Self {
        Self::new(stagprec().min(max))
    }

    /// The precision that will be restored.
    pub fn saved(&self) -> usize {
        self.saved
    }
}

impl Drop for PrecisionGuard {
    fn drop(&mut self) {
        set_stagprec(self.saved);
    }
}
