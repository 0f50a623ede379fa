use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Div, Mul, RangeInclusive, Sub};

use crate::error::{RangeError, Result};
use crate::id::RangeId;
use crate::iter::{Iter, Walk};
use crate::value::RangeValue;

/// An immutable arithmetic progression `start, start + step, ...` bounded by
/// an inclusive `end`.
///
/// The three defining values are fixed at construction. Every transforming
/// operation returns a new range; nothing mutates in place.
///
/// # Type Parameters
/// - `T`: The value type (`f32` or `f64`). Defaults to `f64`.
///
/// # Derived Values
/// Two quantities are computed once at construction:
/// - the *true end*, the last value reachable by stepping from `start`
///   without passing `end` (equal to `end` when the step is 1);
/// - the *count*, `round((end - start) / step + 1)`, which is measured
///   against the nominal `end` and so can disagree with the true end when the
///   step does not divide the span.
///
/// # Unchecked Inputs
/// Nothing is validated. `start > end`, a zero or negative step, or NaN are
/// all accepted, and the arithmetic results (including infinities and NaN)
/// are returned as-is.
///
/// # Equality
/// Two ranges are equal when their `start`, `end` and `step` are equal. The
/// per-instance [`RangeId`] is ignored.
#[derive(Clone, Copy)]
pub struct StepRange<T: RangeValue = f64> {
    start: T,
    end: T,
    step: T,
    true_end: T,
    count: T,
    id: RangeId,
}

/// A value or a range to test for membership with [`StepRange::contains`].
#[derive(Clone, Copy, Debug)]
pub enum Probe<'a, T: RangeValue = f64> {
    /// A single number.
    Value(T),
    /// Every member of another range.
    Range(&'a StepRange<T>),
}

impl<'a> From<f64> for Probe<'a, f64> {
    #[inline]
    fn from(value: f64) -> Self {
        Probe::Value(value)
    }
}

impl<'a> From<f32> for Probe<'a, f32> {
    #[inline]
    fn from(value: f32) -> Self {
        Probe::Value(value)
    }
}

impl<'a, T: RangeValue> From<&'a StepRange<T>> for Probe<'a, T> {
    #[inline]
    fn from(range: &'a StepRange<T>) -> Self {
        Probe::Range(range)
    }
}

/// The defining values of a range, without identity or derived fields.
///
/// This is the JSON shape of a range: exactly `start`, `end` and `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeParts<T = f64> {
    pub start: T,
    pub end: T,
    pub step: T,
}

impl<T: RangeValue> StepRange<T> {
    /// Creates a range from `start` to `end` (inclusive) with a step of 1.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let range = StepRange::new(0.0, 10.0);
    /// assert_eq!(range.step(), 1.0);
    /// assert_eq!(range.count(), 11.0);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self::with_step(start, end, T::one())
    }

    /// Creates a range from `start` to `end` (inclusive) with the given step.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let range = StepRange::with_step(15.0, 32.0, 3.0);
    /// assert_eq!(range.true_end(), 30.0);
    /// assert_eq!(range.to_string(), "[15, 32, 3]");
    /// ```
    pub fn with_step(start: T, end: T, step: T) -> Self {
        let span = end - start;
        let true_end = if step == T::one() {
            end
        } else {
            start + (span / step).floor() * step
        };
        Self {
            start,
            end,
            step,
            true_end,
            count: (span / step + T::one()).round_half_up(),
            id: RangeId::next(),
        }
    }

    /// Returns the first value of the range.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the nominal (inclusive) end of the range.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the distance between successive members.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the last value reachable by stepping from `start` without
    /// passing `end`.
    #[inline]
    pub fn true_end(&self) -> T {
        self.true_end
    }

    /// Returns the number of members, `round((end - start) / step + 1)`.
    #[inline]
    pub fn count(&self) -> T {
        self.count
    }

    /// Returns `end - start`, ignoring the step.
    #[inline]
    pub fn length(&self) -> T {
        self.end - self.start
    }

    /// Returns the identifier assigned when this range was constructed.
    #[inline]
    pub fn id(&self) -> RangeId {
        self.id
    }

    /// Returns the value at `index`. The index is not bounds checked and may
    /// be negative or fractional.
    #[inline]
    pub fn at(&self, index: T) -> T {
        self.start + index * self.step
    }

    /// Returns the index of `value`, or `None` when `value` is not on the step
    /// grid.
    ///
    /// The quotient `(value - start) / step` must be an exact integer; no
    /// tolerance is applied. Values outside `[start, end]` that are on the grid
    /// still produce an index.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let range = StepRange::with_step(0.0, 10.0, 2.0);
    /// assert_eq!(range.try_index_of(6.0), Some(3.0));
    /// assert_eq!(range.try_index_of(12.0), Some(6.0));
    /// assert_eq!(range.try_index_of(5.0), None);
    /// ```
    #[inline]
    pub fn try_index_of(&self, value: T) -> Option<T> {
        let index = (value - self.start) / self.step;
        (index.fract() == T::zero()).then_some(index)
    }

    /// Returns the index of `value`, or `-1`
    /// ([`RangeValue::NOT_ON_GRID`]) when `value` is not on the step grid.
    #[inline]
    pub fn index_of(&self, value: T) -> T {
        self.try_index_of(value).unwrap_or(T::NOT_ON_GRID)
    }

    /// Adds up every member from `start` to `end` by repeated addition.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// assert_eq!(StepRange::new(0.0, 10.0).sum(), 55.0);
    /// assert_eq!(StepRange::with_step(0.0, 10.0, 2.0).sum(), 30.0);
    /// ```
    pub fn sum(&self) -> T {
        self.walk().fold(T::zero(), |sum, value| sum + value)
    }

    /// Returns the midpoint of the nominal endpoints, `(start + end) / 2`.
    #[inline]
    pub fn average(&self) -> T {
        (self.start + self.end) / T::two()
    }

    /// Maps `value` linearly from this range's span onto the span of `to`.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let from = StepRange::new(5.0, 10.0);
    /// let to = StepRange::new(0.0, 100.0);
    /// assert_eq!(from.map_value(6.0, &to), 20.0);
    /// ```
    #[inline]
    pub fn map_value(&self, value: T, to: &StepRange<T>) -> T {
        to.start + (value - self.start) * (to.end - to.start) / (self.end - self.start)
    }

    /// Returns `true` if the range contains the given value or range.
    ///
    /// See [`contains_value`](Self::contains_value) and
    /// [`contains_range`](Self::contains_range) for the exact rules.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let range = StepRange::with_step(0.0, 10.0, 2.0);
    /// assert!(range.contains(4.0));
    /// assert!(!range.contains(5.0));
    /// assert!(range.contains(&StepRange::new(2.0, 8.0)));
    /// ```
    #[inline]
    pub fn contains<'a>(&self, probe: impl Into<Probe<'a, T>>) -> bool
    where
        T: 'a,
    {
        match probe.into() {
            Probe::Value(value) => self.contains_value(value),
            Probe::Range(other) => self.contains_range(other),
        }
    }

    /// Returns `true` if `start <= value <= end` and, when the step is not 1,
    /// `value` sits exactly on the step grid.
    #[inline]
    pub fn contains_value(&self, value: T) -> bool {
        let within = value >= self.start && value <= self.end;
        if self.step == T::one() {
            within
        } else {
            (value - self.start) % self.step == T::zero() && within
        }
    }

    /// Returns `true` if `other` lies within this range.
    ///
    /// With a step of 1 only the endpoints of `other` are compared. Otherwise
    /// `other` is walked from its start to its end using *this* range's step
    /// (its own step is ignored) and every visited value must fall within
    /// `[start, end]`.
    pub fn contains_range(&self, other: &StepRange<T>) -> bool {
        if self.step == T::one() {
            return other.start >= self.start && other.end <= self.end;
        }
        Walk::new(other.start, other.end, self.step)
            .all(|value| value >= self.start && value <= self.end)
    }

    /// Returns the smallest range spanning both ranges.
    ///
    /// The result always has a step of 1.
    ///
    /// # Errors
    /// Returns [`RangeError::StepMismatch`] if the steps differ.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let a = StepRange::new(0.0, 10.0);
    /// let b = StepRange::new(11.0, 20.0);
    /// assert_eq!(a.union(&b).unwrap(), StepRange::new(0.0, 20.0));
    ///
    /// let c = StepRange::with_step(0.0, 10.0, 2.0);
    /// assert!(a.union(&c).is_err());
    /// ```
    pub fn union(&self, other: &StepRange<T>) -> Result<StepRange<T>> {
        if self.step != other.step {
            log::debug!(
                "union of {} and {} rejected: step {} does not match step {}",
                self,
                other,
                self.step,
                other.step
            );
            return Err(RangeError::StepMismatch {
                left: self.step.to_f64().unwrap_or(f64::NAN),
                right: other.step.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(StepRange::new(
            self.start.min_nan(other.start),
            self.end.max_nan(other.end),
        ))
    }

    /// Returns the overlap of the two ranges.
    ///
    /// - Equal steps: `None` if the ranges are disjoint, otherwise the overlap
    ///   with a step of 1.
    /// - Different steps: always `Some`, spanning `[max(starts), min(ends)]`
    ///   with the larger of the two steps (a zero or NaN step on `other`
    ///   counts as 1). The result is not checked for emptiness.
    ///
    /// A NaN bound on either range makes the matching bound of the result NaN.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let a = StepRange::new(0.0, 10.0);
    /// assert_eq!(a.intersection(&StepRange::new(5.0, 15.0)), Some(StepRange::new(5.0, 10.0)));
    /// assert_eq!(a.intersection(&StepRange::new(11.0, 20.0)), None);
    /// assert_eq!(
    ///     a.intersection(&StepRange::with_step(5.0, 15.0, 2.0)),
    ///     Some(StepRange::with_step(5.0, 10.0, 2.0)),
    /// );
    /// ```
    pub fn intersection(&self, other: &StepRange<T>) -> Option<StepRange<T>> {
        let (overall_start, overall_end) = self.overlap(other);

        if self.step != other.step {
            let step = self.step.max_nan(other.step.or_one());
            return Some(StepRange::with_step(overall_start, overall_end, step));
        }

        if overall_end < overall_start {
            return None;
        }
        Some(StepRange::new(overall_start, overall_end))
    }

    /// Returns `true` if the endpoint overlap of the ranges is non-empty and
    /// `other`'s step (zero or NaN counting as 1) is smaller than this range's
    /// length.
    ///
    /// This is a coarse test on the bounds; it does not check that the two
    /// step grids share a member.
    #[inline]
    pub fn intersects(&self, other: &StepRange<T>) -> bool {
        let (overall_start, overall_end) = self.overlap(other);
        overall_end >= overall_start && other.step.or_one() < self.length()
    }

    /// Returns a range whose start and end are mapped through `value_fn`,
    /// keeping the current step.
    #[inline]
    pub fn transform(&self, value_fn: impl Fn(T) -> T) -> StepRange<T> {
        StepRange::with_step(value_fn(self.start), value_fn(self.end), self.step)
    }

    /// Returns a range whose start and end are mapped through `value_fn` and
    /// whose step is mapped through `step_fn`.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let doubled = StepRange::new(0.0, 10.0).transform_with_step(|v| v * 2.0, |s| s * 2.0);
    /// assert_eq!(doubled, StepRange::with_step(0.0, 20.0, 2.0));
    /// ```
    #[inline]
    pub fn transform_with_step(
        &self,
        value_fn: impl Fn(T) -> T,
        step_fn: impl FnOnce(T) -> T,
    ) -> StepRange<T> {
        StepRange::with_step(value_fn(self.start), value_fn(self.end), step_fn(self.step))
    }

    /// Scales start, end and step by `factor`.
    #[inline]
    pub fn multiply(&self, factor: T) -> StepRange<T> {
        self.transform_with_step(|value| value * factor, |step| step * factor)
    }

    /// Divides start, end and step by `divisor`. Dividing by zero yields
    /// infinite or NaN fields.
    #[inline]
    pub fn divide(&self, divisor: T) -> StepRange<T> {
        self.transform_with_step(|value| value / divisor, |step| step / divisor)
    }

    /// Shifts start and end up by `offset`.
    #[inline]
    pub fn add(&self, offset: T) -> StepRange<T> {
        self.transform(|value| value + offset)
    }

    /// Shifts start and end down by `offset`.
    #[inline]
    pub fn subtract(&self, offset: T) -> StepRange<T> {
        self.transform(|value| value - offset)
    }

    /// Clamps `value` into the range, respecting the step grid.
    ///
    /// Values below `start` give `start`, values above the true end give the
    /// true end, and anything in between rounds up to the next member.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let range = StepRange::with_step(0.0, 10.0, 3.0);
    /// assert_eq!(range.clamp(5.0), 6.0);
    /// assert_eq!(range.clamp(11.0), 9.0);
    /// assert_eq!(range.clamp(-1.0), 0.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        if value < self.start {
            return self.start;
        }
        if value > self.true_end {
            return self.true_end;
        }
        self.snap_up(value)
    }

    /// Wraps `value` cyclically into the range, respecting the step grid.
    ///
    /// Out-of-range values are moved back one step at a time, counting hops.
    /// A value below `start` lands at `min(true_end - (hops - 1) * step, true_end)`,
    /// a value above the true end at `max(start - (hops + 1) * step, start)`,
    /// and in-range values round up to the next member as in
    /// [`clamp`](Self::clamp).
    ///
    /// Returns NaN when a hop cannot make progress, which happens for an
    /// out-of-range value with a zero, negative or NaN step, or for an
    /// infinite `value`. In-range values are snapped even with such steps.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let range = StepRange::new(0.0, 10.0);
    /// assert_eq!(range.wrap(11.0), 0.0);
    /// assert_eq!(range.wrap(-1.0), 10.0);
    /// assert_eq!(range.wrap(5.0), 5.0);
    /// ```
    pub fn wrap(&self, value: T) -> T {
        let step = self.step;
        let mut wrapped = value;
        let mut hops = T::zero();
        while wrapped < self.start {
            let next = wrapped + step;
            if !(next > wrapped) {
                log::trace!("wrap of {} in {} stalled below start", value, self);
                return T::nan();
            }
            wrapped = next;
            hops = hops + T::one();
        }
        while wrapped > self.end {
            let next = wrapped - step;
            if !(next < wrapped) {
                log::trace!("wrap of {} in {} stalled above end", value, self);
                return T::nan();
            }
            wrapped = next;
            hops = hops - T::one();
        }

        if value < self.start {
            return (self.true_end - (hops - T::one()) * step).min_nan(self.true_end);
        }
        if value > self.true_end {
            return (self.start - (hops + T::one()) * step).max_nan(self.start);
        }
        self.snap_up(value)
    }

    /// Returns the defining values as a plain `{ start, end, step }` record,
    /// the JSON shape of the range.
    #[inline]
    pub fn to_json(&self) -> RangeParts<T> {
        RangeParts {
            start: self.start,
            end: self.end,
            step: self.step,
        }
    }

    /// Collects every member from `start` to `end` by repeated addition.
    ///
    /// # Examples
    /// ```
    /// use step_range::StepRange;
    ///
    /// let range = StepRange::with_step(15.0, 32.0, 3.0);
    /// assert_eq!(range.to_vec(), vec![15.0, 18.0, 21.0, 24.0, 27.0, 30.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.walk().collect()
    }

    /// Returns a lazy iterator over the members, from `start` to the true end.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.start, self.step, self.true_end)
    }

    #[inline]
    fn walk(&self) -> Walk<T> {
        Walk::new(self.start, self.end, self.step)
    }

    #[inline]
    fn overlap(&self, other: &StepRange<T>) -> (T, T) {
        (self.start.max_nan(other.start), self.end.min_nan(other.end))
    }

    #[inline]
    fn snap_up(&self, value: T) -> T {
        let nearest_step = ((value - self.start) / self.step).ceil();
        self.start + nearest_step * self.step
    }
}

impl<T: RangeValue> PartialEq for StepRange<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.step == other.step
    }
}

impl<T: RangeValue> fmt::Debug for StepRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .field("id", &self.id)
            .finish()
    }
}

impl<T: RangeValue> fmt::Display for StepRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.start, self.end, self.step)
    }
}

impl<T: RangeValue> From<RangeInclusive<T>> for StepRange<T> {
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T: RangeValue> From<RangeParts<T>> for StepRange<T> {
    #[inline]
    fn from(parts: RangeParts<T>) -> Self {
        Self::with_step(parts.start, parts.end, parts.step)
    }
}

impl<T: RangeValue> From<StepRange<T>> for RangeParts<T> {
    #[inline]
    fn from(range: StepRange<T>) -> Self {
        range.to_json()
    }
}

impl<T: RangeValue> Add<T> for StepRange<T> {
    type Output = StepRange<T>;

    #[inline]
    fn add(self, offset: T) -> Self::Output {
        StepRange::add(&self, offset)
    }
}

impl<T: RangeValue> Sub<T> for StepRange<T> {
    type Output = StepRange<T>;

    #[inline]
    fn sub(self, offset: T) -> Self::Output {
        self.subtract(offset)
    }
}

impl<T: RangeValue> Mul<T> for StepRange<T> {
    type Output = StepRange<T>;

    #[inline]
    fn mul(self, factor: T) -> Self::Output {
        self.multiply(factor)
    }
}

impl<T: RangeValue> Div<T> for StepRange<T> {
    type Output = StepRange<T>;

    #[inline]
    fn div(self, divisor: T) -> Self::Output {
        self.divide(divisor)
    }
}

impl<T: RangeValue> IntoIterator for StepRange<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: RangeValue> IntoIterator for &StepRange<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: RangeValue + serde::Serialize> serde::Serialize for StepRange<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_json(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: RangeValue + serde::Deserialize<'de>> serde::Deserialize<'de> for StepRange<T> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        <RangeParts<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}
