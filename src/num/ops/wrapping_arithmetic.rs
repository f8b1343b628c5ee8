// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::ops::Mul;

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

/// Wrapping multiplication by value (no references).
///
/// This trait provides a by-value API for multiplication that wraps around
/// at the numeric bounds of the type instead of overflowing. It mirrors the
/// inherent `wrapping_mul` on primitive integers but avoids any ambiguity
/// with reference-based trait APIs.
///
/// # Examples
///
/// ```rust
/// # use math_utils::num::ops::wrapping_arithmetic::WrappingMulVal;
///
/// let a: u8 = 64;
/// let b: u8 = 4;
/// assert_eq!(a.wrapping_mul_val(b), 0); // 256 wraps to 0
///
/// let x: i8 = 64;
/// let y: i8 = 2;
/// assert_eq!(x.wrapping_mul_val(y), -128); // 128 wraps to i8::MIN
///
/// let m: i32 = -2;
/// let n: i32 = 5;
/// assert_eq!(m.wrapping_mul_val(n), -10); // No overflow
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use math_utils::num::ops::wrapping_arithmetic::WrappingMulVal;
    ///
    /// let a: u8 = 64;
    /// let b: u8 = 4;
    /// assert_eq!(a.wrapping_mul_val(b), 0); // 256 wraps to 0
    /// ```
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u8, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u16, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u32, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u64, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, usize, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u128, wrapping_mul);

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i8, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i16, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i32, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i64, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, isize, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i128, wrapping_mul);

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapping_mul_val<T: WrappingMulVal>(a: T, b: T) -> T {
        a.wrapping_mul_val(b)
    }

    #[test]
    fn test_wrapping_mul_val() {
        assert_eq!(wrapping_mul_val(3i32, 4i32), 12i32);
        assert_eq!(wrapping_mul_val(-2i32, 5i32), -10i32);
        assert_eq!(wrapping_mul_val(64u8, 4u8), 0u8);
        assert_eq!(wrapping_mul_val(64i8, 2i8), -128i8);
        assert_eq!(wrapping_mul_val(i8::MIN, -1i8), -128i8);
    }

    #[test]
    fn test_wrapping_mul_val_commutes() {
        assert_eq!(wrapping_mul_val(7i64, -3i64), wrapping_mul_val(-3i64, 7i64));
        assert_eq!(wrapping_mul_val(200u8, 200u8), wrapping_mul_val(200u8, 200u8));
        assert_eq!(
            wrapping_mul_val(i16::MAX, 3i16),
            wrapping_mul_val(3i16, i16::MAX)
        );
    }
}
