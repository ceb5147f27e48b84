//! # Cycle Budget
//!
//! [`CycleBudget`] is the counter the dispatcher threads through every fetch,
//! addressing and instruction helper. Each bus access and each documented
//! internal cycle calls [`CycleBudget::tick`] or [`CycleBudget::consume`].
//!
//! The budget may go negative: an instruction that starts always finishes,
//! so the last instruction of a run can overdraw what the caller asked for.

/// Remaining cycles for one `execute` call.
///
/// # Examples
///
/// ```
/// use m6502::CycleBudget;
///
/// let mut budget = CycleBudget::new(3);
/// budget.tick();
/// budget.consume(4);
///
/// assert!(budget.is_exhausted());
/// assert_eq!(budget.remaining(), -2);
/// assert_eq!(budget.used(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleBudget {
    requested: u32,
    remaining: i64,
}

impl CycleBudget {
    /// Creates a budget of `requested` cycles.
    pub fn new(requested: u32) -> Self {
        Self {
            requested,
            remaining: i64::from(requested),
        }
    }

    /// Charges a single cycle.
    #[inline]
    pub fn tick(&mut self) {
        self.remaining -= 1;
    }

    /// Charges `cycles` cycles.
    #[inline]
    pub fn consume(&mut self, cycles: u32) {
        self.remaining -= i64::from(cycles);
    }

    /// True once the budget has reached zero or been overdrawn.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// Cycles left; negative when the last instruction overran.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// The budget the caller asked for.
    pub fn requested(&self) -> u32 {
        self.requested
    }

    /// Cycles actually consumed so far. May exceed [`requested`](Self::requested).
    pub fn used(&self) -> u64 {
        u64::try_from(i64::from(self.requested) - self.remaining).unwrap_or_default()
    }
}
