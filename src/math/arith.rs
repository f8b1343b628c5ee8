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

use num_traits::{CheckedDiv, PrimInt, WrappingMul};

/// Returns the product of `a` and `b`, wrapping around at the numeric
/// bounds of the type.
///
/// Overflow does not panic in any build profile; the result is the
/// two's-complement wraparound of the mathematical product. The operation
/// is commutative and has no side effects.
///
/// # Examples
///
/// ```rust
/// # use math_utils::math::arith::multiply;
///
/// assert_eq!(multiply(3, 4), 12);
/// assert_eq!(multiply(-2, 5), -10);
/// assert_eq!(multiply(64u8, 4u8), 0); // 256 wraps to 0
/// ```
#[inline]
pub fn multiply<T>(a: T, b: T) -> T
where
    T: PrimInt + WrappingMul,
{
    a.wrapping_mul(&b)
}

/// Returns the truncating quotient of `a` and `b`, or zero when the
/// machine quotient is undefined.
///
/// For a nonzero divisor with a representable quotient this matches the
/// `/` operator exactly, rounding toward zero. A zero divisor returns zero
/// rather than panicking, as does the one signed case with an
/// unrepresentable quotient (`MIN / -1`). The operation never fails and
/// has no side effects.
///
/// # Examples
///
/// ```rust
/// # use math_utils::math::arith::divide;
///
/// assert_eq!(divide(10, 2), 5);
/// assert_eq!(divide(-7, 2), -3); // Truncates toward zero
/// assert_eq!(divide(5, 0), 0); // No panic
/// ```
#[inline]
pub fn divide<T>(a: T, b: T) -> T
where
    T: PrimInt + CheckedDiv,
{
    a.checked_div(&b).unwrap_or_else(T::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::ops::total_arithmetic::TotalDivVal;
    use crate::num::ops::wrapping_arithmetic::WrappingMulVal;
    use proptest::prelude::*;

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3i32, 4i32), 12i32);
        assert_eq!(multiply(-2i32, 5i32), -10i32);
        assert_eq!(multiply(0i32, 7i32), 0i32);
        assert_eq!(multiply(200u8, 2u8), 144u8);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10i32, 2i32), 5i32);
        assert_eq!(divide(9i32, 3i32), 3i32);
        assert_eq!(divide(5i32, 0i32), 0i32);
        assert_eq!(divide(-7i32, 2i32), -3i32);
        assert_eq!(divide(i8::MIN, -1i8), 0i8);
    }

    proptest! {
        #[test]
        fn multiply_commutes(a: i32, b: i32) {
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }

        #[test]
        fn multiply_commutes_narrow(a: i8, b: i8) {
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }

        #[test]
        fn divide_matches_operator(a: i64, b in prop::num::i64::ANY.prop_filter("nonzero", |b| *b != 0)) {
            prop_assume!(!(a == i64::MIN && b == -1));
            prop_assert_eq!(divide(a, b), a / b);
        }

        #[test]
        fn divide_by_zero_is_zero(a: i64) {
            prop_assert_eq!(divide(a, 0i64), 0i64);
        }

        #[test]
        fn function_layer_agrees_with_trait_layer(a: i32, b: i32) {
            prop_assert_eq!(multiply(a, b), a.wrapping_mul_val(b));
            prop_assert_eq!(divide(a, b), a.total_div_val(b));
        }
    }
}
