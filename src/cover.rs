//! Greedy covering of sorted 1-dimensional positions with fixed-radius centers.

#![cfg(feature = "alloc")]

use crate::{integer::Integer, partition::is_sorted};
use ndarray::{ArrayView1, s};

#[cfg(not(feature = "std"))]
extern crate alloc as no_std_alloc;
#[cfg(not(feature = "std"))]
use no_std_alloc::vec::Vec;

/// Minimum-cardinality covering of sorted positions by centers of a fixed radius.
///
/// A center `c` covers every position `v` with `|v - c| <= radius`. The default radius is one.
///
/// # Examples
///
/// ```
/// use ndarray_partition::{Cover, ndarray::arr1};
///
/// let positions = arr1(&[2, 4, 5, 6, 7, 9, 11, 12]);
///
/// let cover = Cover::default();
/// assert_eq!(cover.min_locations(positions.view()), [3, 6, 10, 13]);
/// assert_eq!(cover.min_locations_reversed(positions.view()), [1, 5, 8, 11]);
///
/// let cover = Cover::new(2);
/// assert_eq!(cover.min_locations(positions.view()), [4, 9, 14]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cover<A> {
	radius: A,
}

impl<A: Integer> Default for Cover<A> {
	#[inline]
	fn default() -> Self {
		Self { radius: A::ONE }
	}
}

impl<A: Integer> Cover<A> {
	/// Creates a covering with the given `radius`.
	///
	/// # Panics
	///
	/// Panics if `radius` is negative.
	#[must_use]
	pub fn new(radius: A) -> Self {
		assert!(radius >= A::ZERO, "coverage radius must not be negative");
		Self { radius }
	}

	/// Coverage radius.
	#[must_use]
	#[inline]
	pub fn radius(&self) -> A {
		self.radius
	}

	/// Covers ascending `positions` scanning from the smallest to the largest one.
	///
	/// The first uncovered position `v` gets a center at `v + radius`, the rightmost center still
	/// covering `v`. Returns the centers in ascending order.
	#[must_use]
	pub fn min_locations(&self, positions: ArrayView1<'_, A>) -> Vec<A> {
		debug_assert!(is_sorted(positions.view()), "positions must be ascending");
		let mut centers = Vec::new();
		let mut next = 0;
		while next < positions.len() {
			let center = positions[next].saturating_add(self.radius);
			let reach = center.saturating_add(self.radius);
			centers.push(center);
			// Skip every position up to the reach of the new center.
			next += partition_point(positions.slice(s![next..]), |&v| v <= reach);
		}
		centers
	}

	/// Covers ascending `positions` scanning from the largest to the smallest one.
	///
	/// The largest uncovered position `v` gets a center at `v - radius`, the leftmost center still
	/// covering `v`. Returns the centers in ascending order.
	#[must_use]
	pub fn min_locations_reversed(&self, positions: ArrayView1<'_, A>) -> Vec<A> {
		debug_assert!(is_sorted(positions.view()), "positions must be ascending");
		let mut centers = Vec::new();
		let mut end = positions.len();
		while end > 0 {
			let center = positions[end - 1].saturating_sub(self.radius);
			let reach = center.saturating_sub(self.radius);
			centers.push(center);
			// Drop every position down to the reach of the new center.
			end = partition_point(positions.slice(s![..end]), |&v| v < reach);
		}
		centers.reverse();
		centers
	}
}

/// Returns the index of the first element of `v` for which `pred` is false.
///
/// Assumes `v` is partitioned by `pred`, i.e., all elements satisfying `pred` come first.
pub(crate) fn partition_point<A, P>(v: ArrayView1<'_, A>, mut pred: P) -> usize
where
	P: FnMut(&A) -> bool,
{
	// INVARIANTS:
	// - 0 <= left <= left + size = right <= v.len()
	// - `pred` returns true for everything in v[..left]
	// - `pred` returns false for everything in v[right..]
	let mut size = v.len();
	let mut left = 0;
	let mut right = size;
	while left < right {
		let mid = left + size / 2;
		if pred(&v[mid]) {
			left = mid + 1;
		} else {
			right = mid;
		}
		size = right - left;
	}
	debug_assert!(left <= v.len());
	left
}
