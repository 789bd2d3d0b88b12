//! Quicksort recursion strategies generic over the [`Partition`] scheme.

use crate::partition::Partition;
use ndarray::ArrayViewMut1;

/// How [`quick_sort`] descends into the two sub-ranges left by partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Recursion {
	/// Recurses into both sub-ranges. Recursion depth is *O*(*n*) worst-case.
	#[default]
	Recursive,
	/// Recurses into the left sub-range and loops over the right one. Recursion depth is still
	/// *O*(*n*) worst-case, e.g., for already sorted input.
	TailRecursive,
	/// Recurses into the shorter sub-range and loops over the longer one. Recursion depth is
	/// *O*(log *n*) worst-case.
	SmallerFirst,
}

// Minimum stack headroom before growing, and the size of each newly allocated stack segment.
#[cfg(feature = "stacker")]
const RED_ZONE: usize = 64 * 1024;
#[cfg(feature = "stacker")]
const STACK_SIZE: usize = 1024 * 1024;

/// Runs `f` with enough stack for another level of recursion.
#[inline]
fn grow<R>(f: impl FnOnce() -> R) -> R {
	#[cfg(feature = "stacker")]
	{
		stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
	}
	#[cfg(not(feature = "stacker"))]
	{
		f()
	}
}

/// Sorts `v` using quicksort with partitioning scheme `P` and the given recursion strategy.
///
/// Returns the maximum recursion depth reached, where the initial call is depth zero.
pub fn quick_sort<P, T, F>(v: ArrayViewMut1<'_, T>, recursion: Recursion, mut is_less: F) -> usize
where
	P: Partition,
	T: Copy,
	F: FnMut(&T, &T) -> bool,
{
	match recursion {
		Recursion::Recursive => recurse::<P, T, F>(v, &mut is_less, 0),
		Recursion::TailRecursive => recurse_tail::<P, T, F>(v, &mut is_less, 0),
		Recursion::SmallerFirst => recurse_smaller_first::<P, T, F>(v, &mut is_less, 0),
	}
}

/// Sorts `v` by recursing into both sub-ranges.
fn recurse<P, T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, depth: usize) -> usize
where
	P: Partition,
	T: Copy,
	F: FnMut(&T, &T) -> bool,
{
	// Views of length zero or one are sorted.
	if v.len() < 2 {
		return depth;
	}

	let split = P::partition(v.view_mut(), is_less);
	let (left, right) = split.apply(v);

	let left = grow(|| recurse::<P, T, F>(left, is_less, depth + 1));
	let right = grow(|| recurse::<P, T, F>(right, is_less, depth + 1));
	left.max(right)
}

/// Sorts `v` by recursing into the left sub-range and continuing with the right one.
fn recurse_tail<P, T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, depth: usize) -> usize
where
	P: Partition,
	T: Copy,
	F: FnMut(&T, &T) -> bool,
{
	let mut max_depth = depth;

	while v.len() >= 2 {
		let split = P::partition(v.view_mut(), is_less);
		let (left, right) = split.apply(v);

		max_depth = max_depth.max(grow(|| recurse_tail::<P, T, F>(left, is_less, depth + 1)));

		// Continue with the right side (this is akin to tail recursion).
		v = right;
	}

	max_depth
}

/// Sorts `v` by recursing into the shorter sub-range and continuing with the longer one.
fn recurse_smaller_first<P, T, F>(
	mut v: ArrayViewMut1<'_, T>,
	is_less: &mut F,
	depth: usize,
) -> usize
where
	P: Partition,
	T: Copy,
	F: FnMut(&T, &T) -> bool,
{
	let mut max_depth = depth;

	while v.len() >= 2 {
		let split = P::partition(v.view_mut(), is_less);
		let (left, right) = split.apply(v);

		// Recurse into the shorter side only in order to bound the recursion depth to
		// `floor(log2(len))`. Then just continue with the longer side.
		let (shorter, longer) = if left.len() < right.len() {
			(left, right)
		} else {
			(right, left)
		};
		max_depth =
			max_depth.max(recurse_smaller_first::<P, T, F>(shorter, is_less, depth + 1));
		v = longer;
	}

	max_depth
}
