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

use crate::num::constants::Zero;
use core::ops::Div;

macro_rules! total_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v).unwrap_or(<$t>::ZERO)
            }
        }
    };
}

/// Total division by value (no references).
///
/// This trait provides a by-value API for truncating integer division that
/// is defined for every input. Where the machine quotient exists it matches
/// the `/` operator exactly, rounding toward zero. Where it does not, the
/// result is [`Zero::ZERO`] instead of a panic: a zero divisor, and the one
/// signed case with an unrepresentable quotient (`MIN / -1`), both fall
/// back to zero.
///
/// # Examples
///
/// ```rust
/// # use math_utils::num::ops::total_arithmetic::TotalDivVal;
///
/// let a: i32 = 10;
/// let b: i32 = 2;
/// assert_eq!(a.total_div_val(b), 5);
///
/// let x: i32 = -7;
/// let y: i32 = 2;
/// assert_eq!(x.total_div_val(y), -3); // Truncates toward zero
///
/// let m: i32 = 5;
/// let n: i32 = 0;
/// assert_eq!(m.total_div_val(n), 0); // Zero divisor falls back to zero
/// ```
pub trait TotalDivVal: Sized + Div<Self, Output = Self> + Zero {
    /// Performs total truncating division by value, returning `Self::ZERO`
    /// when the machine quotient is undefined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use math_utils::num::ops::total_arithmetic::TotalDivVal;
    ///
    /// let a: u8 = 100;
    /// let b: u8 = 4;
    /// assert_eq!(a.total_div_val(b), 25);
    /// assert_eq!(a.total_div_val(0), 0); // No panic
    /// ```
    fn total_div_val(self, v: Self) -> Self;
}

total_impl_binary_val!(TotalDivVal, total_div_val, u8, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, u16, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, u32, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, u64, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, usize, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, u128, checked_div);

total_impl_binary_val!(TotalDivVal, total_div_val, i8, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, i16, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, i32, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, i64, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, isize, checked_div);
total_impl_binary_val!(TotalDivVal, total_div_val, i128, checked_div);

#[cfg(test)]
mod tests {
    use super::*;

    fn total_div_val<T: TotalDivVal>(a: T, b: T) -> T {
        a.total_div_val(b)
    }

    #[test]
    fn test_total_div_val() {
        assert_eq!(total_div_val(10i32, 2i32), 5i32);
        assert_eq!(total_div_val(9i32, 3i32), 3i32);
        assert_eq!(total_div_val(100u8, 4u8), 25u8);
        assert_eq!(total_div_val(1u128, 3u128), 0u128);
    }

    #[test]
    fn test_total_div_val_truncates_toward_zero() {
        assert_eq!(total_div_val(-7i32, 2i32), -3i32);
        assert_eq!(total_div_val(7i32, -2i32), -3i32);
        assert_eq!(total_div_val(-7i32, -2i32), 3i32);
    }

    #[test]
    fn test_total_div_val_zero_divisor() {
        assert_eq!(total_div_val(5i32, 0i32), 0i32);
        assert_eq!(total_div_val(0i32, 0i32), 0i32);
        assert_eq!(total_div_val(u64::MAX, 0u64), 0u64);
        assert_eq!(total_div_val(i8::MIN, 0i8), 0i8);
    }

    #[test]
    fn test_total_div_val_unrepresentable_quotient() {
        assert_eq!(total_div_val(i8::MIN, -1i8), 0i8);
        assert_eq!(total_div_val(i64::MIN, -1i64), 0i64);
        assert_eq!(total_div_val(i8::MIN + 1, -1i8), 127i8);
    }
}
