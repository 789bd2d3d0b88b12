//! Primitive integer element types.

mod sealed {
	pub trait Sealed {}
}

/// Primitive integer usable as array element, pivot and position.
///
/// This trait is sealed and implemented for all primitive signed and unsigned integers.
pub trait Integer: Copy + Ord + sealed::Sealed {
	/// Additive identity.
	const ZERO: Self;
	/// Multiplicative identity, the default coverage radius.
	const ONE: Self;

	/// Integer addition clamped at the numeric bounds.
	#[must_use]
	fn saturating_add(self, rhs: Self) -> Self;
	/// Integer subtraction clamped at the numeric bounds.
	#[must_use]
	fn saturating_sub(self, rhs: Self) -> Self;
}

macro_rules! integer_impl {
	($($t:ty)*) => {$(
		impl sealed::Sealed for $t {}

		impl Integer for $t {
			const ZERO: Self = 0;
			const ONE: Self = 1;

			#[inline]
			fn saturating_add(self, rhs: Self) -> Self {
				<$t>::saturating_add(self, rhs)
			}
			#[inline]
			fn saturating_sub(self, rhs: Self) -> Self {
				<$t>::saturating_sub(self, rhs)
			}
		}
	)*};
}

integer_impl! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

#[cfg(test)]
mod test {
	use super::Integer;

	#[test]
	fn saturates() {
		assert_eq!(Integer::saturating_add(i64::MAX, 1), i64::MAX);
		assert_eq!(Integer::saturating_sub(0u32, 1), 0);
		assert_eq!(Integer::saturating_sub(-3i8, <i8 as Integer>::ONE), -4);
	}
}
