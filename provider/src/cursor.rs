use crate::{error::IntegrityViolation, hints::HintCategory};

/// FIFO read position over one category of hints.
///
/// The position only moves forward and never passes the end of the hints it
/// reads from: an out-of-bounds read fails without moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadCursor {
    category: HintCategory,
    position: usize,
}

impl ReadCursor {
    pub(crate) const fn new(category: HintCategory) -> Self {
        Self {
            category,
            position: 0,
        }
    }

    pub const fn category(&self) -> HintCategory {
        self.category
    }

    /// Number of hints consumed so far.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the next unread hint and its index, leaving the cursor in place.
    pub(crate) fn peek<'h, T>(&self, hints: &'h [T]) -> Result<(usize, &'h T), IntegrityViolation> {
        hints
            .get(self.position)
            .map(|hint| (self.position, hint))
            .ok_or(IntegrityViolation::HintsExhausted {
                category: self.category,
                index: self.position,
                len: hints.len(),
            })
    }

    /// Returns the next unread hint and its index, and moves past it.
    pub(crate) fn take<'h, T>(
        &mut self,
        hints: &'h [T],
    ) -> Result<(usize, &'h T), IntegrityViolation> {
        let next = self.peek(hints)?;
        self.position += 1;
        Ok(next)
    }

    /// Fails unless every hint in `hints` has been consumed.
    pub(crate) fn ensure_exhausted<T>(&self, hints: &[T]) -> Result<(), IntegrityViolation> {
        if self.position < hints.len() {
            return Err(IntegrityViolation::UnconsumedHints {
                category: self.category,
                consumed: self.position,
                len: hints.len(),
            });
        }

        Ok(())
    }
}
