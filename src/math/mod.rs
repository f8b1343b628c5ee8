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

//! # Math Operations
//!
//! The high-level arithmetic surface of the crate, designed to integrate
//! cleanly with Rust's numeric trait ecosystem.
//!
//! ## Submodules
//!
//! - `arith`: Generic `multiply` and `divide` free functions over
//!   `num_traits` bounds. Multiplication wraps on overflow; division
//!   truncates toward zero and returns zero whenever the machine quotient
//!   is undefined. Semantics are identical to the by-value traits in
//!   `crate::num::ops`.
//!
//! ## Motivation
//!
//! Call sites that just want a product or a quotient should not have to
//! name a by-value trait per operation. These functions provide the same
//! total semantics behind ordinary function-call syntax.
//!
//! Refer to the `arith` module for detailed APIs and examples.

pub mod arith;
