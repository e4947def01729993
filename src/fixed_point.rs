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
//! Fixed point constants shared between the table encoder and the interpolation engine.
//!
//! Tables passed to the engine must be encoded with exactly these constants,
//! a table prepared with other precision is interpolated without any error
//! but produces wrong colors.

/// Fractional bits of a table value.
///
/// 8 bits are taken by the result, table values may overflow [0, 1.0] range,
/// so 2 more bits are reserved for overflow and negative values.
pub const PRECISION_BITS: u32 = 16 - 8 - 2;
pub(crate) const PRECISION_ROUNDING: i32 = 1 << (PRECISION_BITS - 1);

/// Fractional bits of a per axis grid scale.
///
/// Scales are multiplied on byte, and 6 bits are kept for the maximum index in the table.
pub const SCALE_BITS: u32 = 32 - 8 - 6;
pub(crate) const SCALE_MASK: u32 = (1 << SCALE_BITS) - 1;

/// Fractional bits of an interpolation weight.
pub const SHIFT_BITS: u32 = 16 - 1;
pub(crate) const SHIFT_ONE: i32 = 1 << SHIFT_BITS;

/// Smallest supported grid size on any axis.
pub const MIN_GRID_SIZE: usize = 2;
/// Largest supported grid size on any axis.
///
/// Index 64 is the last one addressable with [SCALE_BITS], and it is never a cube origin.
pub const MAX_GRID_SIZE: usize = 65;

/// Table value of the highest output level
pub const LUT_VALUE_MAX: i32 = 255 << PRECISION_BITS;

/// Encodes unit value (where 1.0 is the highest output level) into table value.
///
/// Rounds half away from zero and saturates to `i16` range.
#[inline]
pub fn encode_lut_value(value: f32) -> i16 {
    let scale = LUT_VALUE_MAX as f64;
    let value = value as f64;
    if value.is_nan() {
        return 0;
    }
    if value >= (i16::MAX as f64 - 0.5) / scale {
        return i16::MAX;
    }
    if value <= (i16::MIN as f64 + 0.5) / scale {
        return i16::MIN;
    }
    if value < 0. {
        (value * scale - 0.5) as i16
    } else {
        (value * scale + 0.5) as i16
    }
}

/// Encodes a whole flat table, see [encode_lut_value].
pub fn encode_lut_table(table: &[f32]) -> Vec<i16> {
    table.iter().map(|&x| encode_lut_value(x)).collect()
}

/// Table value of an 8-bit output level
#[inline]
pub const fn lut_value_from_level(level: u8) -> i16 {
    ((level as i32) << PRECISION_BITS) as i16
}
