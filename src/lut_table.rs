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
use crate::err::MismatchedSize;
use crate::fixed_point::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::LutError;

/// Describes how a flat 3D LUT table is laid out.
///
/// Table is indexed as `[size3d][size2d][size1d][table_channels]`,
/// channels are changed first, then 1D, then 2D, then 3D.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lut3dLayout {
    /// Output channels of the table, 3 or 4
    pub table_channels: usize,
    pub size1d: usize,
    pub size2d: usize,
    pub size3d: usize,
}

impl Lut3dLayout {
    pub fn new(table_channels: usize, size1d: usize, size2d: usize, size3d: usize) -> Self {
        Self {
            table_channels,
            size1d,
            size2d,
            size3d,
        }
    }

    /// Layout of a cube with equal grid size on every axis
    pub fn cube(table_channels: usize, grid_size: usize) -> Self {
        Self::new(table_channels, grid_size, grid_size, grid_size)
    }

    /// Count of `i16` items in a table of this layout
    #[inline]
    pub fn table_len(&self) -> usize {
        self.table_channels * self.size1d * self.size2d * self.size3d
    }

    /// Checks channels count and grid sizes
    pub fn validate(&self) -> Result<(), LutError> {
        if self.table_channels != 3 && self.table_channels != 4 {
            return Err(LutError::InvalidTableChannels(self.table_channels));
        }
        for size in [self.size1d, self.size2d, self.size3d] {
            if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
                return Err(LutError::InvalidGridSize(size));
            }
        }
        Ok(())
    }

    /// Offset of the table entry at the grid point
    #[inline]
    pub fn entry_offset(&self, x1: usize, x2: usize, x3: usize) -> usize {
        (x1 + x2 * self.size1d + x3 * self.size1d * self.size2d) * self.table_channels
    }
}

/// Validated view over a caller owned 3D LUT table of fixed point values.
///
/// Values carry [PRECISION_BITS](crate::PRECISION_BITS) fractional bits, where 0 is the lowest
/// output level and `255 << PRECISION_BITS` is the highest one. Values outside of this range
/// are allowed and clamped only when the result is quantized.
#[derive(Debug, Copy, Clone)]
pub struct ColorLut3d<'a> {
    pub(crate) table: &'a [i16],
    pub(crate) layout: Lut3dLayout,
}

impl<'a> ColorLut3d<'a> {
    /// Creates a table view, layout and table length are checked once here.
    pub fn new(table: &'a [i16], layout: Lut3dLayout) -> Result<Self, LutError> {
        layout.validate()?;
        if table.len() != layout.table_len() {
            return Err(LutError::TableSizeMismatch(MismatchedSize {
                expected: layout.table_len(),
                received: table.len(),
            }));
        }
        Ok(Self { table, layout })
    }

    #[inline]
    pub fn layout(&self) -> Lut3dLayout {
        self.layout
    }

    #[inline]
    pub fn table(&self) -> &'a [i16] {
        self.table
    }

    /// Returns the entry stored at the grid point
    pub fn entry(&self, x1: usize, x2: usize, x3: usize) -> &'a [i16] {
        let offset = self.layout.entry_offset(x1, x2, x3);
        &self.table[offset..offset + self.layout.table_channels]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_validation() {
        assert!(Lut3dLayout::cube(3, 2).validate().is_ok());
        assert!(Lut3dLayout::cube(4, 65).validate().is_ok());
        assert_eq!(
            Lut3dLayout::cube(2, 17).validate(),
            Err(LutError::InvalidTableChannels(2))
        );
        assert_eq!(
            Lut3dLayout::cube(5, 17).validate(),
            Err(LutError::InvalidTableChannels(5))
        );
        assert_eq!(
            Lut3dLayout::new(3, 1, 17, 17).validate(),
            Err(LutError::InvalidGridSize(1))
        );
        assert_eq!(
            Lut3dLayout::new(3, 17, 17, 66).validate(),
            Err(LutError::InvalidGridSize(66))
        );
    }

    #[test]
    fn test_table_len() {
        let layout = Lut3dLayout::new(4, 2, 3, 5);
        assert_eq!(layout.table_len(), 120);
        let table = vec![0i16; 119];
        assert_eq!(
            ColorLut3d::new(&table, layout).err(),
            Some(LutError::TableSizeMismatch(MismatchedSize {
                expected: 120,
                received: 119,
            }))
        );
        let table = vec![0i16; 120];
        assert!(ColorLut3d::new(&table, layout).is_ok());
    }

    #[test]
    fn test_entry_order() {
        // Channels are changed first, then 1D, then 2D, then 3D
        let layout = Lut3dLayout::new(3, 2, 3, 4);
        let table = (0..layout.table_len() as i16).collect::<Vec<_>>();
        let lut = ColorLut3d::new(&table, layout).unwrap();
        assert_eq!(lut.entry(0, 0, 0), &[0, 1, 2]);
        assert_eq!(lut.entry(1, 0, 0), &[3, 4, 5]);
        assert_eq!(lut.entry(0, 1, 0), &[6, 7, 8]);
        assert_eq!(lut.entry(0, 0, 1), &[18, 19, 20]);
        assert_eq!(lut.entry(1, 2, 3), &[69, 70, 71]);
    }
}
