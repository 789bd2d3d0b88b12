//! Hoare's two-cursor partitioning scheme.

use crate::partition::{Partition, Split};
use ndarray::ArrayViewMut1;

/// Hoare partitioning with the first element as pivot.
///
/// Unlike [`Lomuto`](crate::Lomuto), the pivot is not guaranteed to end up at the split, so the two
/// sub-ranges are `..=j` and `j + 1..` and together cover the whole view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hoare;

impl Partition for Hoare {
	#[inline]
	fn partition<T, F>(v: ArrayViewMut1<'_, T>, is_less: &mut F) -> Split
	where
		T: Copy,
		F: FnMut(&T, &T) -> bool,
	{
		let mid = hoare_partition(v, is_less) + 1;
		Split {
			left: mid,
			right: mid,
		}
	}
}

/// Partitions non-empty `v` around its first element and returns the split index `j`.
///
/// Afterwards, `v[..=j]` is not greater than the pivot and `v[j + 1..]` is not less than the pivot.
/// For `v.len() >= 2`, the split satisfies `j < v.len() - 1`.
pub fn hoare_partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> usize
where
	T: Copy,
	F: FnMut(&T, &T) -> bool,
{
	let pivot = v[0];
	let mut i = 0;
	let mut j = v.len();

	loop {
		// The pivot at `v[0]`, or after the first swap an element not greater than the pivot,
		// stops this scan before it runs past the front.
		j -= 1;
		while is_less(&pivot, &v[j]) {
			j -= 1;
		}

		// Symmetrically, an element not less than the pivot at or after `j` stops this scan.
		while is_less(&v[i], &pivot) {
			i += 1;
		}

		if i < j {
			v.swap(i, j);
			i += 1;
		} else {
			return j;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Hoare, hoare_partition};
	use crate::partition::{Partition, Split};
	use ndarray::{Array1, arr1};
	use quickcheck::TestResult;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn partitioned(xs: Vec<i32>) -> TestResult {
		if xs.is_empty() {
			return TestResult::discard();
		}
		let pivot = xs[0];
		let mut array = Array1::from_vec(xs.clone());
		let j = hoare_partition(array.view_mut(), &mut i32::lt);
		if xs.len() >= 2 {
			assert!(j < xs.len() - 1);
		}
		for left in array.iter().take(j + 1) {
			assert!(*left <= pivot);
		}
		for right in array.iter().skip(j + 1) {
			assert!(*right >= pivot);
		}
		let max_left = array.iter().take(j + 1).max();
		let min_right = array.iter().skip(j + 1).min();
		if let (Some(max_left), Some(min_right)) = (max_left, min_right) {
			assert!(max_left <= min_right);
		}
		let mut before = xs;
		let mut after = array.to_vec();
		before.sort_unstable();
		after.sort_unstable();
		assert_eq!(before, after);
		TestResult::passed()
	}

	#[test]
	fn textbook() {
		let mut array = arr1(&[13, 19, 9, 5, 12, 8, 7, 4, 11, 2, 6, 21]);
		let j = hoare_partition(array.view_mut(), &mut i32::lt);
		assert_eq!(j, 8);
		assert_eq!(array, arr1(&[6, 2, 9, 5, 12, 8, 7, 4, 11, 19, 13, 21]));
	}

	#[test]
	fn all_equal() {
		let mut array = arr1(&[3, 3, 3, 3, 3]);
		let split = Hoare::partition(array.view_mut(), &mut i32::lt);
		assert_eq!(split, Split { left: 3, right: 3 });
		assert_eq!(array, arr1(&[3, 3, 3, 3, 3]));
	}

	#[test]
	fn single() {
		let mut array = arr1(&[7]);
		assert_eq!(hoare_partition(array.view_mut(), &mut i32::lt), 0);
	}
}
