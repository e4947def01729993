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
use crate::cube::CubeCorners;
use crate::fixed_point::{SHIFT_BITS, SHIFT_ONE};

/// Linear interpolation with `t` having [SHIFT_BITS] fractional bits.
///
/// Table values are `i16`, so `a * (1 - t) + b * t` always fits into `i32`.
#[inline(always)]
pub(crate) fn lerp(a: i32, b: i32, t: i32) -> i32 {
    (a * (SHIFT_ONE - t) + b * t) >> SHIFT_BITS
}

#[inline(always)]
fn lerp_vec<const CN: usize>(a: [i32; CN], b: [i32; CN], t: i32) -> [i32; CN] {
    std::array::from_fn(|i| lerp(a[i], b[i], t))
}

/// Blends cube corners along 1D, then 2D, then 3D axis.
///
/// Result keeps table precision and is not clamped.
#[inline(always)]
pub(crate) fn trilinear<const CN: usize>(cube: &CubeCorners<CN>, weights: [i32; 3]) -> [i32; CN] {
    let [t1, t2, t3] = weights;

    let l1 = lerp_vec(cube.corner(0, 0, 0), cube.corner(1, 0, 0), t1);
    let l2 = lerp_vec(cube.corner(0, 1, 0), cube.corner(1, 1, 0), t1);
    let l3 = lerp_vec(cube.corner(0, 0, 1), cube.corner(1, 0, 1), t1);
    let l4 = lerp_vec(cube.corner(0, 1, 1), cube.corner(1, 1, 1), t1);

    let m1 = lerp_vec(l1, l2, t2);
    let m2 = lerp_vec(l3, l4, t2);

    lerp_vec(m1, m2, t3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn cube_from_fn<const CN: usize>(
        f: impl Fn(usize, usize, usize, usize) -> i32,
    ) -> CubeCorners<CN> {
        let mut corners = [[0i32; CN]; 8];
        for c in 0..2 {
            for b in 0..2 {
                for a in 0..2 {
                    for ch in 0..CN {
                        corners[a + 2 * b + 4 * c][ch] = f(a, b, c, ch);
                    }
                }
            }
        }
        CubeCorners { corners }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(100, 200, 0), 100);
        assert_eq!(lerp(100, 200, SHIFT_ONE / 2), 150);
        assert_eq!(lerp(-100, 100, SHIFT_ONE / 4), -50);
        assert_eq!(lerp(i16::MIN as i32, i16::MAX as i32, 0), i16::MIN as i32);
        assert_eq!(
            lerp(i16::MAX as i32, i16::MAX as i32, SHIFT_ONE - 1),
            i16::MAX as i32
        );
        assert_eq!(lerp(i16::MIN as i32, i16::MIN as i32, 12345), i16::MIN as i32);
    }

    #[test]
    fn test_zero_weights_return_origin() {
        let cube =
            cube_from_fn::<4>(|a, b, c, ch| (a * 1000 + b * 100 + c * 10 + ch) as i32 - 500);
        assert_eq!(trilinear(&cube, [0, 0, 0]), cube.corner(0, 0, 0));
    }

    #[test]
    fn test_axis_order() {
        // Only 1D axis changes values
        let cube = cube_from_fn::<3>(|a, _, _, _| if a == 1 { 6400 } else { 0 });
        assert_eq!(trilinear(&cube, [SHIFT_ONE / 2, 0, 0]), [3200; 3]);
        assert_eq!(trilinear(&cube, [0, SHIFT_ONE / 2, SHIFT_ONE / 2]), [0; 3]);

        // Only 3D axis changes values
        let cube = cube_from_fn::<3>(|_, _, c, _| if c == 1 { 6400 } else { 0 });
        assert_eq!(trilinear(&cube, [SHIFT_ONE / 2, SHIFT_ONE / 2, 0]), [0; 3]);
        assert_eq!(trilinear(&cube, [0, 0, SHIFT_ONE / 4]), [1600; 3]);
    }

    #[test]
    fn test_overflowed_values_survive_blend() {
        let cube = cube_from_fn::<3>(|a, _, _, ch| match ch {
            0 => i16::MAX as i32,
            1 => i16::MIN as i32,
            _ if a == 0 => i16::MIN as i32,
            _ => i16::MAX as i32,
        });
        let weights = [SHIFT_ONE / 2, SHIFT_ONE - 1, SHIFT_ONE - 1];
        let result = trilinear(&cube, weights);
        assert_eq!(result[0], i16::MAX as i32);
        assert_eq!(result[1], i16::MIN as i32);
        assert!(result[2].abs() <= 1);
    }

    #[test]
    fn test_matches_float_reference() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let values: [i32; 8] = std::array::from_fn(|_| rng.random_range(-2000..18000));
            let cube = cube_from_fn::<3>(|a, b, c, _| values[a + 2 * b + 4 * c]);
            let weights: [i32; 3] = std::array::from_fn(|_| rng.random_range(0..SHIFT_ONE));
            let [w1, w2, w3] = weights.map(|w| w as f64 / SHIFT_ONE as f64);
            let v = |a: usize, b: usize, c: usize| values[a + 2 * b + 4 * c] as f64;
            let l1 = v(0, 0, 0) * (1. - w1) + v(1, 0, 0) * w1;
            let l2 = v(0, 1, 0) * (1. - w1) + v(1, 1, 0) * w1;
            let l3 = v(0, 0, 1) * (1. - w1) + v(1, 0, 1) * w1;
            let l4 = v(0, 1, 1) * (1. - w1) + v(1, 1, 1) * w1;
            let m1 = l1 * (1. - w2) + l2 * w2;
            let m2 = l3 * (1. - w2) + l4 * w2;
            let expected = m1 * (1. - w3) + m2 * w3;
            let result = trilinear(&cube, weights);
            // Every right shift floors, so 3 nested steps lose less than 3 units
            for r in result {
                let diff = expected - r as f64;
                assert!((-1e-6..3.0).contains(&diff), "diff {}", diff);
            }
        }
    }
}
