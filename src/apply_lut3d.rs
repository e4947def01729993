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
use crate::cube::CubeSampler;
use crate::err::MismatchedSize;
use crate::grid::GridMapper;
use crate::lut_image::{LutImage, LutImageMut, PixelEncoding, PixelSample};
use crate::lut_table::{ColorLut3d, Lut3dLayout};
use crate::quantize::quantize_vec;
use crate::trilinear::trilinear;
use crate::LutError;
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::slice::{ParallelSlice, ParallelSliceMut};

struct Lut3dExecutor<'a, const TC: usize> {
    mapper: GridMapper,
    sampler: CubeSampler<'a, TC>,
}

impl<'a, const TC: usize> Lut3dExecutor<'a, TC> {
    fn new(lut: &ColorLut3d<'a>) -> Self {
        Self {
            mapper: GridMapper::new(lut.layout()),
            sampler: CubeSampler::new(lut),
        }
    }

    #[inline(always)]
    fn transform_pixel(&self, c1: u8, c2: u8, c3: u8) -> [u8; TC] {
        let cell = self.mapper.map(c1, c2, c3);
        let cube = self.sampler.sample(cell.index);
        quantize_vec(trilinear(&cube, cell.weights))
    }

    /// Transforms one row, destination channels beyond `TC` are copied from the source.
    fn transform_lane<T: PixelSample>(
        &self,
        src: &[T],
        src_channels: usize,
        dst: &mut [T],
        dst_channels: usize,
    ) where
        u8: AsPrimitive<T>,
    {
        for (src, dst) in src
            .chunks_exact(src_channels)
            .zip(dst.chunks_exact_mut(dst_channels))
        {
            let rgb = self.transform_pixel(src[0].as_(), src[1].as_(), src[2].as_());
            for (dst, &v) in dst.iter_mut().zip(rgb.iter()) {
                *dst = v.as_();
            }
            if dst_channels > TC {
                dst[TC..].copy_from_slice(&src[TC..dst_channels]);
            }
        }
    }

    fn transform_lane_in_place<T: PixelSample>(&self, lane: &mut [T], channels: usize)
    where
        u8: AsPrimitive<T>,
    {
        for chunk in lane.chunks_exact_mut(channels) {
            let rgb = self.transform_pixel(chunk[0].as_(), chunk[1].as_(), chunk[2].as_());
            for (dst, &v) in chunk.iter_mut().zip(rgb.iter()) {
                *dst = v.as_();
            }
        }
    }

    fn execute<T: PixelSample>(&self, dst: &mut LutImageMut<'_, T>, src: &LutImage<'_, T>)
    where
        u8: AsPrimitive<T>,
    {
        let src_channels = src.channels;
        let dst_channels = dst.channels;
        let src_stride = src.row_stride();
        let dst_stride = dst.row_stride();
        let src_lane_len = src.width * src_channels;
        let dst_lane_len = dst.width * dst_channels;
        let height = dst.height;

        #[cfg(feature = "rayon")]
        {
            src.data
                .as_ref()
                .par_chunks(src_stride)
                .zip(dst.data.borrow_mut().par_chunks_mut(dst_stride))
                .take(height)
                .for_each(|(src, dst)| {
                    self.transform_lane(
                        &src[..src_lane_len],
                        src_channels,
                        &mut dst[..dst_lane_len],
                        dst_channels,
                    );
                });
        }
        #[cfg(not(feature = "rayon"))]
        {
            for (src, dst) in src
                .data
                .as_ref()
                .chunks(src_stride)
                .zip(dst.data.borrow_mut().chunks_mut(dst_stride))
                .take(height)
            {
                self.transform_lane(
                    &src[..src_lane_len],
                    src_channels,
                    &mut dst[..dst_lane_len],
                    dst_channels,
                );
            }
        }
    }

    fn execute_in_place<T: PixelSample>(&self, image: &mut LutImageMut<'_, T>)
    where
        u8: AsPrimitive<T>,
    {
        let channels = image.channels;
        let stride = image.row_stride();
        let lane_len = image.width * channels;
        let height = image.height;

        #[cfg(feature = "rayon")]
        {
            image
                .data
                .borrow_mut()
                .par_chunks_mut(stride)
                .take(height)
                .for_each(|lane| {
                    self.transform_lane_in_place(&mut lane[..lane_len], channels);
                });
        }
        #[cfg(not(feature = "rayon"))]
        {
            for lane in image.data.borrow_mut().chunks_mut(stride).take(height) {
                self.transform_lane_in_place(&mut lane[..lane_len], channels);
            }
        }
    }
}

/// Checks that source and destination channels can be produced by the table.
fn check_channels<T: PixelSample>(
    table_channels: usize,
    src_channels: usize,
    dst_channels: usize,
) -> Result<(), LutError> {
    if T::ENCODING != PixelEncoding::Uint8 {
        return Err(LutError::UnsupportedPixelEncoding(T::ENCODING));
    }
    if src_channels < 3 {
        return Err(LutError::NotEnoughSourceChannels(src_channels));
    }
    if dst_channels < table_channels {
        return Err(LutError::NotEnoughDestinationChannels(MismatchedSize {
            expected: table_channels,
            received: dst_channels,
        }));
    }
    // Extra destination channel has nothing to be copied from
    if dst_channels > table_channels && dst_channels > src_channels {
        return Err(LutError::AmbiguousExtraChannels(MismatchedSize {
            expected: src_channels,
            received: dst_channels,
        }));
    }
    Ok(())
}

impl ColorLut3d<'_> {
    /// Transforms colors of `src` through the table and puts the result into `dst`.
    ///
    /// First `table_channels` channels of `dst` are overwritten, remaining channels
    /// are copied from `src`. Everything is checked before any pixel is written,
    /// so on error `dst` stays untouched.
    pub fn apply<'a, 'b, T: PixelSample>(
        &self,
        dst: &'b mut LutImageMut<'a, T>,
        src: &LutImage<'_, T>,
    ) -> Result<&'b mut LutImageMut<'a, T>, LutError>
    where
        u8: AsPrimitive<T>,
    {
        let table_channels = self.layout.table_channels;
        check_channels::<T>(table_channels, src.channels, dst.channels)?;
        src.check_layout()?;
        dst.check_layout()?;
        dst.size_matches(src)?;

        match table_channels {
            3 => Lut3dExecutor::<3>::new(self).execute(dst, src),
            4 => Lut3dExecutor::<4>::new(self).execute(dst, src),
            _ => return Err(LutError::InvalidTableChannels(table_channels)),
        }
        Ok(dst)
    }

    /// Transforms colors of `image` in place.
    ///
    /// Gives exactly the same result as [ColorLut3d::apply] with a copy of the image as a source.
    pub fn apply_in_place<'a, 'b, T: PixelSample>(
        &self,
        image: &'b mut LutImageMut<'a, T>,
    ) -> Result<&'b mut LutImageMut<'a, T>, LutError>
    where
        u8: AsPrimitive<T>,
    {
        let table_channels = self.layout.table_channels;
        check_channels::<T>(table_channels, image.channels, image.channels)?;
        image.check_layout()?;

        match table_channels {
            3 => Lut3dExecutor::<3>::new(self).execute_in_place(image),
            4 => Lut3dExecutor::<4>::new(self).execute_in_place(image),
            _ => return Err(LutError::InvalidTableChannels(table_channels)),
        }
        Ok(image)
    }
}

/// Transforms colors of `src` using provided 3D lookup table and puts the result into `dst`.
///
/// # Arguments
///
/// * `dst`: destination image, same size as `src`, at least `table_channels` channels
/// * `src`: source image with at least 3 channels
/// * `table_channels`: channels count in the lookup table, 3 or 4
/// * `size1d`, `size2d`, `size3d`: grid size on every axis, in `[2, 65]`
/// * `table`: flat table with `table_channels * size1d * size2d * size3d` items,
///   see [ColorLut3d] for the value encoding
///
/// returns: `dst` on success
#[allow(clippy::too_many_arguments)]
pub fn apply_lut3d<'a, 'b, T: PixelSample>(
    dst: &'b mut LutImageMut<'a, T>,
    src: &LutImage<'_, T>,
    table_channels: usize,
    size1d: usize,
    size2d: usize,
    size3d: usize,
    table: &[i16],
) -> Result<&'b mut LutImageMut<'a, T>, LutError>
where
    u8: AsPrimitive<T>,
{
    let layout = Lut3dLayout::new(table_channels, size1d, size2d, size3d);
    ColorLut3d::new(table, layout)?.apply(dst, src)
}

/// Same as [apply_lut3d] when source and destination is the same image.
pub fn apply_lut3d_in_place<'a, 'b, T: PixelSample>(
    image: &'b mut LutImageMut<'a, T>,
    table_channels: usize,
    size1d: usize,
    size2d: usize,
    size3d: usize,
    table: &[i16],
) -> Result<&'b mut LutImageMut<'a, T>, LutError>
where
    u8: AsPrimitive<T>,
{
    let layout = Lut3dLayout::new(table_channels, size1d, size2d, size3d);
    ColorLut3d::new(table, layout)?.apply_in_place(image)
}
