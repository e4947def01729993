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
use crate::lut_table::ColorLut3d;

/// 8 corners of a grid cube, `corners[a + 2 * b + 4 * c]` is the corner
/// shifted by `a` on 1D axis, by `b` on 2D axis and by `c` on 3D axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct CubeCorners<const CN: usize> {
    pub(crate) corners: [[i32; CN]; 8],
}

impl<const CN: usize> CubeCorners<CN> {
    #[inline(always)]
    pub(crate) fn corner(&self, a: usize, b: usize, c: usize) -> [i32; CN] {
        self.corners[a + 2 * b + 4 * c]
    }
}

/// Reads cube corners from a flat table.
///
/// There is no bounds adjustment here, cube origins produced by
/// [GridMapper](crate::grid::GridMapper) always keep all 8 corners in the table.
pub(crate) struct CubeSampler<'a, const CN: usize> {
    table: &'a [i16],
    stride2: usize,
    stride3: usize,
}

impl<'a, const CN: usize> CubeSampler<'a, CN> {
    pub(crate) fn new(lut: &ColorLut3d<'a>) -> Self {
        let layout = lut.layout();
        debug_assert_eq!(layout.table_channels, CN);
        Self {
            table: lut.table(),
            stride2: layout.size1d * CN,
            stride3: layout.size1d * layout.size2d * CN,
        }
    }

    #[inline(always)]
    fn fetch(&self, offset: usize) -> [i32; CN] {
        let entry = &self.table[offset..offset + CN];
        std::array::from_fn(|i| entry[i] as i32)
    }

    #[inline(always)]
    pub(crate) fn sample(&self, index: usize) -> CubeCorners<CN> {
        let i2 = index + self.stride2;
        let i3 = index + self.stride3;
        let i23 = i3 + self.stride2;
        CubeCorners {
            corners: [
                self.fetch(index),
                self.fetch(index + CN),
                self.fetch(i2),
                self.fetch(i2 + CN),
                self.fetch(i3),
                self.fetch(i3 + CN),
                self.fetch(i23),
                self.fetch(i23 + CN),
            ],
        }
    }
}
