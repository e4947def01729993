/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Transforms 8-bit images through 3D color lookup tables.
//!
//! Table is a flat array of `i16` fixed point values sampled on a regular grid,
//! every pixel is mapped onto the grid and trilinearly interpolated from the
//! 8 surrounding table entries, without any floating point in the pixel loop.
//!
//! # Example
//!
//! ```
//! use lutforge::{apply_lut3d, encode_lut_value, LutImage, LutImageMut};
//!
//! // 2x2x2 table which inverts colors
//! let mut table = Vec::new();
//! for b in 0..2 {
//!     for g in 0..2 {
//!         for r in 0..2 {
//!             table.push(encode_lut_value(1. - r as f32));
//!             table.push(encode_lut_value(1. - g as f32));
//!             table.push(encode_lut_value(1. - b as f32));
//!         }
//!     }
//! }
//! let pixels = [0u8, 128, 255];
//! let src = LutImage::borrow(&pixels, 1, 1, 3);
//! let mut dst = LutImageMut::<u8>::alloc(1, 1, 3);
//! apply_lut3d(&mut dst, &src, 3, 2, 2, 2, &table).unwrap();
//! assert_eq!(dst.data.borrow(), &[255, 127, 0]);
//! ```
#![deny(unsafe_code)]
mod apply_lut3d;
mod cube;
mod err;
mod fixed_point;
mod grid;
mod lut_image;
mod lut_table;
mod quantize;
mod trilinear;

pub use apply_lut3d::{apply_lut3d, apply_lut3d_in_place};
pub use err::{LutError, MismatchedSize};
pub use fixed_point::{
    encode_lut_table, encode_lut_value, lut_value_from_level, LUT_VALUE_MAX, MAX_GRID_SIZE,
    MIN_GRID_SIZE, PRECISION_BITS, SCALE_BITS, SHIFT_BITS,
};
pub use lut_image::{BufferStore, LutImage, LutImageMut, PixelEncoding, PixelSample};
pub use lut_table::{ColorLut3d, Lut3dLayout};
