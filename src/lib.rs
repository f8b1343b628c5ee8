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

//! # Math Utils
//!
//! Integer arithmetic utilities with fully defined semantics. Every
//! operation in this crate is total: multiplication wraps on overflow and
//! division falls back to zero whenever machine division has no
//! representable result, so no call ever panics or returns an error.
//!
//! ## Modules
//!
//! - `math`: The high-level operation surface (`multiply`, `divide`) as
//!   generic free functions over `num_traits` bounds.
//! - `num`: Integer-centric building blocks including an associated
//!   constant trait (`Zero`) and by-value arithmetic traits for wrapping
//!   multiplication and total division.
//!
//! ## Purpose
//!
//! Callers that feed untrusted or unvalidated operands into arithmetic
//! should not have to guard every division site against a zero divisor.
//! These utilities push that decision into the operation itself, with the
//! fallback documented and pinned by tests rather than left to whatever
//! the surrounding code happens to do.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
