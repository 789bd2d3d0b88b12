//! Classic in-place [partitioning] quicksorts and greedy [interval covering] for (sub)views into
//! 1-dimensional [`ndarray`] arrays with arbitrary memory layout (e.g., non-contiguous).
//!
//! # Example
//!
//! ```
//! use ndarray_partition::{ndarray::arr2, Slice1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                    [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                    [38, 9, 3,  0,  3],   // row 2, axis 0
//!                    [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//! //                    \     \       \
//! //                  column 0 \    column 4         axis 1
//! //                         column 2                axis 1
//!
//! // Mutable subview into the last column.
//! let mut column = v.column_mut(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be sorted by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Instead, partitioning is specifically implemented for non-contiguous
//! // mutable (sub)views.
//! column.quick_sort_smaller_first();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! //                                   \
//! //                                 column 4 sorted, others untouched
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view and *k* the count of covering centers.
//!
//! | Resource | Complexity | Quicksort          | Quicksort (smaller-first) | Covering             |
//! |----------|------------|--------------------|---------------------------|----------------------|
//! | Time     | Best       | *O*(*n* log *n*)   | *O*(*n* log *n*)          | *O*(log *n*)         |
//! | Time     | Average    | *O*(*n* log *n*)   | *O*(*n* log *n*)          | *O*(*k* log *n*)     |
//! | Time     | Worst      | *O*(*n*^2)         | *O*(*n*^2)                | *O*(*n* log *n*)     |
//! | Space    | Best       | *O*(log *n*)       | *O*(1)                    | *O*(1)               |
//! | Space    | Average    | *O*(log *n*)       | *O*(log *n*)              | *O*(*k*)             |
//! | Space    | Worst      | *O*(*n*)           | *O*(log *n*)              | *O*(*n*)             |
//!
//! Quicksort is unstable (i.e., may reorder equal elements). Partitioning is pluggable, see
//! [`Partition`] with its [`Lomuto`] (default) and [`Hoare`] schemes, and so is the
//! [`Recursion`] strategy.
//!
//! [partitioning]: https://en.wikipedia.org/wiki/Quicksort
//! [interval covering]: https://en.wikipedia.org/wiki/Interval_scheduling
//!
//! # Features
//!
//!   * `alloc` for [`min_locations`](Slice1Ext::min_locations) and
//!     [`min_locations_reversed`](Slice1Ext::min_locations_reversed). Enabled by `std`.
//!   * `std` for `ndarray/std`. Enabled by `default`.
//!   * `stacker` for growing the stack on demand in recursions of *O*(*n*) depth. Enabled by
//!     `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod cover;
mod hoare_partition;
mod integer;
mod partition;
mod quick_sort;

#[cfg(feature = "alloc")]
pub use crate::cover::Cover;
pub use crate::{
	hoare_partition::Hoare,
	integer::Integer,
	partition::{Lomuto, Partition, Split},
	quick_sort::Recursion,
};

use crate::{partition::is_sorted, quick_sort::quick_sort};
use ndarray::{ArrayBase, Data, DataMut, Ix1, s};

pub use ndarray;

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing in-place quicksorts, partitioning
/// schemes, and greedy covering of sorted positions.
pub trait Slice1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array by recursing into both partitions.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate auxiliary arrays), and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// Lomuto partitioning around the last element, see [`lomuto_partition`]. Recursion depth is
	/// *O*(*n*) worst-case, e.g., for already sorted input, which the `stacker` feature
	/// accommodates by growing the stack on demand.
	///
	/// [`lomuto_partition`]: Slice1Ext::lomuto_partition
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[4, 1, 3, 9, 7]);
	///
	/// v.quick_sort();
	/// assert!(v == arr1(&[1, 3, 4, 7, 9]));
	/// ```
	fn quick_sort(&mut self)
	where
		A: Integer,
		S: DataMut;
	/// Sorts the array by recursing into the left partition and looping over the right one.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate auxiliary arrays), and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// Same as [`quick_sort`](Slice1Ext::quick_sort) with the second recursive call replaced by
	/// a loop. Recursion depth remains *O*(*n*) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[2, 1, 6, 10, 4, 1, 3, 9, 7]);
	///
	/// v.quick_sort_tail_recursive();
	/// assert!(v == arr1(&[1, 1, 2, 3, 4, 6, 7, 9, 10]));
	/// ```
	fn quick_sort_tail_recursive(&mut self)
	where
		A: Integer,
		S: DataMut;
	/// Sorts the array by recursing into the smaller partition and looping over the larger one.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate auxiliary arrays), and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// Same as [`quick_sort_tail_recursive`](Slice1Ext::quick_sort_tail_recursive) but the
	/// shorter partition is the one recursed into, which bounds the recursion depth to
	/// `floor(log2(n))` regardless of the input.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[-5i64, 4, 1, -3, 2]);
	///
	/// v.quick_sort_smaller_first();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn quick_sort_smaller_first(&mut self)
	where
		A: Integer,
		S: DataMut;
	/// Sorts the array with partitioning scheme `P` and the given `recursion` strategy.
	///
	/// All combinations produce the same sorted array.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Hoare, Lomuto, Recursion, Slice1Ext};
	///
	/// let mut v = arr1(&[5u8, 4, 1, 3, 2]);
	/// v.quick_sort_with::<Hoare>(Recursion::TailRecursive);
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// let mut v = arr1(&[5u8, 4, 1, 3, 2]);
	/// v.quick_sort_with::<Lomuto>(Recursion::SmallerFirst);
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	/// ```
	fn quick_sort_with<P>(&mut self, recursion: Recursion)
	where
		A: Integer,
		P: Partition,
		S: DataMut;

	/// Partitions the inclusive range `[p, r]` around its last element `x = self[r]`.
	///
	/// Returns the index `q` where `x` ends up. Afterwards, all elements in `[p, q)` are
	/// not greater than `x` and all elements in `(q, r]` are greater than `x`. Elements outside
	/// of `[p, r]` are untouched.
	///
	/// # Panics
	///
	/// Panics when `p > r` or `r >= len()`, meaning it always panics on empty arrays.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[9, 2, 8, 7, 1, 3, 5, 6, 4, 0]);
	///
	/// // Partitions `[2, 8, 7, 1, 3, 5, 6, 4]` around `4`.
	/// let q = v.lomuto_partition(1, 8);
	/// assert_eq!(q, 4);
	/// assert!(v == arr1(&[9, 2, 1, 3, 4, 7, 5, 6, 8, 0]));
	/// ```
	fn lomuto_partition(&mut self, p: usize, r: usize) -> usize
	where
		A: Integer,
		S: DataMut;
	/// Partitions the inclusive range `[p, r]` around its first element `x = self[p]` using
	/// Hoare's two-cursor scheme.
	///
	/// Returns the split index `j`. Afterwards, all elements in `[p, j]` are not greater than `x`
	/// and all elements in `(j, r]` are not less than `x`. If `p < r`, then `p <= j < r`. Unlike
	/// [`lomuto_partition`], `x` is not guaranteed to end up at `j`. Elements outside of `[p, r]`
	/// are untouched.
	///
	/// [`lomuto_partition`]: Slice1Ext::lomuto_partition
	///
	/// # Panics
	///
	/// Panics when `p > r` or `r >= len()`, meaning it always panics on empty arrays.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[13, 19, 9, 5, 12, 8, 7, 4, 11, 2, 6, 21]);
	///
	/// let j = v.hoare_partition(0, 11);
	/// assert_eq!(j, 8);
	/// assert!(v == arr1(&[6, 2, 9, 5, 12, 8, 7, 4, 11, 19, 13, 21]));
	/// ```
	fn hoare_partition(&mut self, p: usize, r: usize) -> usize
	where
		A: Integer,
		S: DataMut;

	/// Covers ascending positions with the fewest centers of radius one, scanning forward.
	///
	/// The array must be sorted in ascending order. Duplicates are allowed. Returns the centers in
	/// ascending order, each one placed as far right as still covers the smallest uncovered
	/// position. See [`Cover`] for other radii.
	///
	/// If the array is not sorted, the result is meaningless. Debug builds panic instead.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Slice1Ext};
	///
	/// assert_eq!(arr1(&[1, 2, 3, 4, 5]).min_locations(), [2, 5]);
	/// assert_eq!(arr1(&[0, 2, 4, 6, 8, 10]).min_locations(), [1, 5, 9]);
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn min_locations(&self) -> Vec<A>
	where
		A: Integer;
	/// Covers ascending positions with the fewest centers of radius one, scanning backward.
	///
	/// The array must be sorted in ascending order. Duplicates are allowed. Returns the centers in
	/// ascending order, each one placed as far left as still covers the largest uncovered
	/// position. See [`Cover`] for other radii.
	///
	/// If the array is not sorted, the result is meaningless. Debug builds panic instead.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Slice1Ext};
	///
	/// assert_eq!(arr1(&[1, 2, 3, 4, 5]).min_locations_reversed(), [1, 4]);
	/// assert_eq!(arr1(&[1, 3, 5, 7, 9]).min_locations_reversed(), [0, 4, 8]);
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn min_locations_reversed(&self) -> Vec<A>
	where
		A: Integer;

	/// Checks if the elements of this array are sorted in ascending order.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_partition::{ndarray::arr1, Slice1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: Ord;
}

impl<A, S> Slice1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn quick_sort(&mut self)
	where
		A: Integer,
		S: DataMut,
	{
		self.quick_sort_with::<Lomuto>(Recursion::Recursive);
	}
	#[inline]
	fn quick_sort_tail_recursive(&mut self)
	where
		A: Integer,
		S: DataMut,
	{
		self.quick_sort_with::<Lomuto>(Recursion::TailRecursive);
	}
	#[inline]
	fn quick_sort_smaller_first(&mut self)
	where
		A: Integer,
		S: DataMut,
	{
		self.quick_sort_with::<Lomuto>(Recursion::SmallerFirst);
	}
	#[inline]
	fn quick_sort_with<P>(&mut self, recursion: Recursion)
	where
		A: Integer,
		P: Partition,
		S: DataMut,
	{
		quick_sort::<P, A, _>(self.view_mut(), recursion, A::lt);
	}

	#[track_caller]
	fn lomuto_partition(&mut self, p: usize, r: usize) -> usize
	where
		A: Integer,
		S: DataMut,
	{
		assert_range(p, r, self.len());
		p + partition::lomuto_partition(self.slice_mut(s![p..=r]), &mut A::lt)
	}
	#[track_caller]
	fn hoare_partition(&mut self, p: usize, r: usize) -> usize
	where
		A: Integer,
		S: DataMut,
	{
		assert_range(p, r, self.len());
		p + hoare_partition::hoare_partition(self.slice_mut(s![p..=r]), &mut A::lt)
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn min_locations(&self) -> Vec<A>
	where
		A: Integer,
	{
		Cover::default().min_locations(self.view())
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn min_locations_reversed(&self) -> Vec<A>
	where
		A: Integer,
	{
		Cover::default().min_locations_reversed(self.view())
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: Ord,
	{
		is_sorted(self.view())
	}
}

#[track_caller]
fn assert_range(p: usize, r: usize, len: usize) {
	assert!(p <= r, "partition range starts at {p} but ends at {r}");
	assert!(r < len, "partition range end {r} out of range for array of length {len}");
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Hoare, Lomuto, Recursion, Slice1Ext};
	use ndarray::{Array1, arr1, arr2, s};
	use quickcheck::TestResult;
	use quickcheck_macros::quickcheck;

	#[test]
	fn quick_sorts() {
		let cases: [(&[i32], &[i32]); 2] = [
			(&[4, 1, 3, 9, 7], &[1, 3, 4, 7, 9]),
			(&[2, 1, 6, 10, 4, 1, 3, 9, 7], &[1, 1, 2, 3, 4, 6, 7, 9, 10]),
		];
		for (xs, sorted) in cases {
			let mut v = arr1(xs);
			v.quick_sort();
			assert_eq!(v, arr1(sorted));
			let mut v = arr1(xs);
			v.quick_sort_tail_recursive();
			assert_eq!(v, arr1(sorted));
			let mut v = arr1(xs);
			v.quick_sort_smaller_first();
			assert_eq!(v, arr1(sorted));
		}
	}

	#[test]
	fn degenerate() {
		let mut empty = Array1::<i32>::from_vec(Vec::new());
		empty.quick_sort();
		assert!(empty.is_empty());
		let mut single = arr1(&[42u64]);
		single.quick_sort_tail_recursive();
		assert_eq!(single, arr1(&[42]));
		let mut equal = arr1(&[7i8; 33]);
		equal.quick_sort_with::<Hoare>(Recursion::Recursive);
		assert_eq!(equal, arr1(&[7; 33]));
	}

	#[test]
	fn non_contiguous() {
		let mut v = arr2(&[[3, 0], [1, 0], [2, 0]]);
		let mut column = v.column_mut(0);
		column.quick_sort_with::<Hoare>(Recursion::SmallerFirst);
		assert_eq!(v, arr2(&[[1, 0], [2, 0], [3, 0]]));
		let mut reversed = arr1(&[1, 2, 3, 4, 5, 6]);
		reversed.slice_mut(s![..;-2]).quick_sort_smaller_first();
		assert_eq!(reversed, arr1(&[1, 6, 3, 4, 5, 2]));
	}

	#[quickcheck]
	fn equivalent(xs: Vec<i64>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);

		let mut recursive = Array1::from_vec(xs.clone());
		recursive.quick_sort();
		let mut tail_recursive = Array1::from_vec(xs.clone());
		tail_recursive.quick_sort_tail_recursive();
		let mut smaller_first = Array1::from_vec(xs.clone());
		smaller_first.quick_sort_smaller_first();

		assert_eq!(recursive, sorted);
		assert_eq!(tail_recursive, sorted);
		assert_eq!(smaller_first, sorted);
		assert!(sorted.is_sorted());

		// Sorting is idempotent.
		recursive.quick_sort_with::<Lomuto>(Recursion::TailRecursive);
		assert_eq!(recursive, sorted);
	}

	#[quickcheck]
	fn hoare_range(xs: Vec<i16>, p: usize, r: usize) -> TestResult {
		if xs.is_empty() {
			return TestResult::discard();
		}
		let (p, r) = (p % xs.len(), r % xs.len());
		let (p, r) = (p.min(r), p.max(r));
		let mut v = Array1::from_vec(xs.clone());
		let j = v.hoare_partition(p, r);
		assert!(p <= j && j <= r);
		if p < r {
			assert!(j < r);
		}
		for i in p..=j {
			for k in j + 1..=r {
				assert!(v[i] <= v[k]);
			}
		}
		assert_eq!(v.slice(s![..p]), arr1(&xs[..p]));
		assert_eq!(v.slice(s![r + 1..]), arr1(&xs[r + 1..]));
		TestResult::passed()
	}

	#[quickcheck]
	fn lomuto_range(xs: Vec<i16>, p: usize, r: usize) -> TestResult {
		if xs.is_empty() {
			return TestResult::discard();
		}
		let (p, r) = (p % xs.len(), r % xs.len());
		let (p, r) = (p.min(r), p.max(r));
		let pivot = xs[r];
		let mut v = Array1::from_vec(xs.clone());
		let q = v.lomuto_partition(p, r);
		assert_eq!(v[q], pivot);
		assert!(v.slice(s![p..q]).iter().all(|&x| x <= pivot));
		assert!(v.slice(s![q + 1..=r]).iter().all(|&x| x > pivot));
		assert_eq!(v.slice(s![..p]), arr1(&xs[..p]));
		assert_eq!(v.slice(s![r + 1..]), arr1(&xs[r + 1..]));
		TestResult::passed()
	}

	#[test]
	#[should_panic(expected = "out of range for array of length 3")]
	fn hoare_out_of_range() {
		let mut v = arr1(&[1, 2, 3]);
		let _ = v.hoare_partition(0, 3);
	}

	#[test]
	#[should_panic(expected = "partition range starts at 2 but ends at 1")]
	fn lomuto_inverted_range() {
		let mut v = arr1(&[1, 2, 3]);
		let _ = v.lomuto_partition(2, 1);
	}

	#[test]
	fn min_locations() {
		assert_eq!(arr1(&[1, 2, 3, 4, 5]).min_locations(), [2, 5]);
		assert_eq!(arr1(&[2, 4, 5, 6, 7, 9, 11, 12]).min_locations(), [3, 6, 10, 13]);
		assert_eq!(arr1(&[0, 2, 4, 6, 8, 10]).min_locations(), [1, 5, 9]);
		assert_eq!(arr1(&[1, 2, 3, 4, 5]).min_locations_reversed(), [1, 4]);
		assert_eq!(arr1(&[1, 3, 5, 7, 9]).min_locations_reversed(), [0, 4, 8]);
		let empty: [i64; 0] = [];
		assert!(arr1(&empty).min_locations().is_empty());
		assert!(arr1(&empty).min_locations_reversed().is_empty());
	}
}
