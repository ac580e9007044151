//! Conversion between packed RGBA8 and normalized floating-point color.

pub(crate) mod convert;
