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
use crate::fixed_point::{PRECISION_BITS, PRECISION_ROUNDING};

/// Rounds table precision value to an 8-bit level.
///
/// Rounding happens before clamping, value is allowed to be out of `[0, 255 << PRECISION_BITS]`.
#[inline(always)]
pub(crate) fn quantize(v: i32) -> u8 {
    ((v + PRECISION_ROUNDING) >> PRECISION_BITS).clamp(0, 255) as u8
}

#[inline(always)]
pub(crate) fn quantize_vec<const CN: usize>(v: [i32; CN]) -> [u8; CN] {
    v.map(quantize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_point::LUT_VALUE_MAX;

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(31), 0);
        assert_eq!(quantize(32), 1);
        assert_eq!(quantize(64), 1);
        assert_eq!(quantize(128 << PRECISION_BITS), 128);
        assert_eq!(quantize(LUT_VALUE_MAX), 255);
        assert_eq!(quantize(LUT_VALUE_MAX + 31), 255);
    }

    #[test]
    fn test_quantize_clamps_overflow() {
        assert_eq!(quantize(i16::MAX as i32), 255);
        assert_eq!(quantize(i16::MIN as i32), 0);
        assert_eq!(quantize(-1), 0);
        assert_eq!(quantize(-32), 0);
        assert_eq!(quantize(-33), 0);
    }

    #[test]
    fn test_round_before_clamp() {
        assert_eq!(quantize(LUT_VALUE_MAX - 32), 255);
        assert_eq!(quantize(LUT_VALUE_MAX - 33), 254);
        assert_eq!(quantize_vec([-100, 8160, 99999]), [0, 128, 255]);
    }
}
