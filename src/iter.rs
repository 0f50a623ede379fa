use core::iter::FusedIterator;

use crate::value::RangeValue;

/// Lazy iterator over the members of a `StepRange`.
///
/// Produces `start + i * step` for every index `i` from zero up to the number
/// of steps that fit between `start` and the range's last reachable value.
/// Members are computed from their index rather than by repeated addition,
/// so long fractional ranges do not drift.
///
/// Created by [`StepRange::iter`](crate::StepRange::iter); every call starts
/// over from the first member.
#[derive(Clone, Debug)]
pub struct Iter<T: RangeValue = f64> {
    start: T,
    step: T,
    front: usize,
    back: usize,
    yielded: usize,
}

impl<T: RangeValue> Iter<T> {
    #[inline]
    pub(crate) fn new(start: T, step: T, true_end: T) -> Self {
        let count = ((true_end - start) / step + T::one()).round_half_up();
        Self {
            start,
            step,
            front: 0,
            back: count.to_count(),
            yielded: 0,
        }
    }

    /// Returns how many members this iterator has produced so far.
    ///
    /// Once the iterator is exhausted this is the total number of members.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.yielded
    }

    #[inline]
    fn member(&self, index: usize) -> T {
        let index: T = num_traits::cast(index).unwrap_or_else(T::nan);
        self.start + index * self.step
    }
}

impl<T: RangeValue> Iterator for Iter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let value = self.member(self.front);
        self.front += 1;
        self.yielded += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: RangeValue> DoubleEndedIterator for Iter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.yielded += 1;
        Some(self.member(self.back))
    }
}

impl<T: RangeValue> ExactSizeIterator for Iter<T> {}

impl<T: RangeValue> FusedIterator for Iter<T> {}

/// Walks `start, start + step, ...` by repeated addition while the value stays
/// at or below `end`.
///
/// Stops early once adding `step` no longer moves the value forward, which
/// covers zero, negative and NaN steps as well as infinite starts.
#[derive(Clone, Debug)]
pub(crate) struct Walk<T: RangeValue> {
    next: Option<T>,
    end: T,
    step: T,
}

impl<T: RangeValue> Walk<T> {
    #[inline]
    pub(crate) fn new(start: T, end: T, step: T) -> Self {
        Self {
            next: Some(start),
            end,
            step,
        }
    }
}

impl<T: RangeValue> Iterator for Walk<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let value = self.next.filter(|value| *value <= self.end)?;
        let advanced = value + self.step;
        self.next = (advanced > value).then_some(advanced);
        Some(value)
    }
}

impl<T: RangeValue> FusedIterator for Walk<T> {}
