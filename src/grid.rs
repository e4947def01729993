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
use crate::fixed_point::{SCALE_BITS, SCALE_MASK, SHIFT_BITS};
use crate::lut_table::Lut3dLayout;

/// Cube origin in the flat table and interpolation weights of one pixel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct GridCell {
    /// Offset of the cube origin, already multiplied by table channels
    pub(crate) index: usize,
    /// Weights along 1D, 2D and 3D axes, [SHIFT_BITS] fractional bits
    pub(crate) weights: [i32; 3],
}

/// Maps 8-bit colors onto the table grid.
#[derive(Debug, Copy, Clone)]
pub(crate) struct GridMapper {
    scales: [u32; 3],
    strides: [usize; 3],
    table_channels: usize,
}

impl GridMapper {
    pub(crate) fn new(layout: Lut3dLayout) -> Self {
        // Scales are truncated deliberately, so the highest input never reaches
        // the last grid line as a cube origin and `+1` neighbor stays inside the table.
        let scale = |size: usize| ((size - 1) as f64 / 255.0 * (1u32 << SCALE_BITS) as f64) as u32;
        Self {
            scales: [
                scale(layout.size1d),
                scale(layout.size2d),
                scale(layout.size3d),
            ],
            strides: [1, layout.size1d, layout.size1d * layout.size2d],
            table_channels: layout.table_channels,
        }
    }

    #[inline(always)]
    pub(crate) fn map(&self, c1: u8, c2: u8, c3: u8) -> GridCell {
        let p1 = c1 as u32 * self.scales[0];
        let p2 = c2 as u32 * self.scales[1];
        let p3 = c3 as u32 * self.scales[2];
        let index = (p1 >> SCALE_BITS) as usize * self.strides[0]
            + (p2 >> SCALE_BITS) as usize * self.strides[1]
            + (p3 >> SCALE_BITS) as usize * self.strides[2];
        GridCell {
            index: index * self.table_channels,
            weights: [
                ((p1 & SCALE_MASK) >> (SCALE_BITS - SHIFT_BITS)) as i32,
                ((p2 & SCALE_MASK) >> (SCALE_BITS - SHIFT_BITS)) as i32,
                ((p3 & SCALE_MASK) >> (SCALE_BITS - SHIFT_BITS)) as i32,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_point::{MAX_GRID_SIZE, MIN_GRID_SIZE};

    #[test]
    fn test_zero_maps_to_origin() {
        let mapper = GridMapper::new(Lut3dLayout::new(3, 17, 9, 33));
        let cell = mapper.map(0, 0, 0);
        assert_eq!(cell.index, 0);
        assert_eq!(cell.weights, [0, 0, 0]);
    }

    #[test]
    fn test_highest_input_never_starts_at_last_line() {
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            for table_channels in [3, 4] {
                let layout = Lut3dLayout::cube(table_channels, size);
                let mapper = GridMapper::new(layout);
                let cell = mapper.map(255, 255, 255);
                assert_eq!(
                    cell.index,
                    layout.entry_offset(size - 2, size - 2, size - 2),
                    "Grid size {}",
                    size
                );
                for weight in cell.weights {
                    assert!(weight > 0 && weight < (1 << SHIFT_BITS));
                }
            }
        }
    }

    #[test]
    fn test_axis_strides() {
        let layout = Lut3dLayout::new(4, 2, 3, 5);
        let mapper = GridMapper::new(layout);
        // Half way on 1D axis of size 2 stays at origin 0
        assert_eq!(mapper.map(128, 0, 0).index, 0);
        // 2D axis of size 3: 128 is in the second cell
        assert_eq!(mapper.map(0, 128, 0).index, layout.entry_offset(0, 1, 0));
        // 3D axis of size 5: 180 is in the third cell, 200 in the fourth
        assert_eq!(mapper.map(0, 0, 180).index, layout.entry_offset(0, 0, 2));
        assert_eq!(mapper.map(0, 0, 200).index, layout.entry_offset(0, 0, 3));
    }

    #[test]
    fn test_weights_are_monotonic() {
        let mapper = GridMapper::new(Lut3dLayout::cube(3, 2));
        let mut previous = -1;
        for c in 0..=255u8 {
            let cell = mapper.map(c, 0, 0);
            assert_eq!(cell.index, 0);
            assert!(cell.weights[0] > previous);
            previous = cell.weights[0];
        }
    }
}
