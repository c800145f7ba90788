//! RGB pixel buffers: file I/O and geometric building blocks.

pub mod io;
pub mod ops;

pub use self::ops::{crop_half, resample_to, HalfSide};
