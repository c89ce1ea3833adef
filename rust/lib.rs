#![cfg_attr(not(test), no_std)]

//! Type-erased sequence algorithms over raw memory ranges.
//!
//! The engine in [`rawrange`] reimplements the classic standard-algorithms
//! vocabulary (find, filter, reduce, rotate, unique, shuffle, ...) without
//! compile-time knowledge of the element type. A range is a pair of opaque
//! boundary addresses plus a signed byte stride: the magnitude is the element
//! width, the sign is the traversal direction, so one code path serves forward
//! and backward iteration over the same storage.
//!
//! The raw functions are `unsafe` and mirror the calling conventions of a C
//! primitives library; the [`rawrange::RawRange`] and
//! [`rawrange::RawRangeMut`] extension traits wrap them for typed slices,
//! where range construction is correct by construction.

pub mod rawrange;
pub use rawrange as rr;
