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
use crate::LutError;
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Storage type of a single pixel channel
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelEncoding {
    Uint8,
    Uint16,
    Float32,
}

/// Channel sample which image stores can hold.
///
/// Only [PixelEncoding::Uint8] samples can be transformed by the LUT engine,
/// other encodings are rejected before any pixel is touched.
pub trait PixelSample:
    Copy + Clone + Default + Debug + Send + Sync + AsPrimitive<u8> + 'static
{
    const ENCODING: PixelEncoding;
}

impl PixelSample for u8 {
    const ENCODING: PixelEncoding = PixelEncoding::Uint8;
}

impl PixelSample for u16 {
    const ENCODING: PixelEncoding = PixelEncoding::Uint16;
}

impl PixelSample for f32 {
    const ENCODING: PixelEncoding = PixelEncoding::Float32;
}

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Immutable image store
pub struct LutImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: usize,
    pub height: usize,
    /// Channels per pixel
    pub channels: usize,
    /// Image stride, items per row, might be 0
    pub stride: usize,
}

/// Mutable image store
pub struct LutImageMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: BufferStore<'a, T>,
    pub width: usize,
    pub height: usize,
    /// Channels per pixel
    pub channels: usize,
    /// Image stride, items per row, might be 0
    pub stride: usize,
}

#[inline]
fn check_layout_impl(
    data_len: usize,
    width: usize,
    height: usize,
    stride: usize,
    channels: usize,
) -> Result<(), LutError> {
    if width == 0 || height == 0 {
        return Err(LutError::ZeroBaseSize);
    }
    if stride < width * channels {
        return Err(LutError::MinimumStrideSizeMismatch(MismatchedSize {
            expected: width * channels,
            received: stride,
        }));
    }
    if data_len < stride * (height - 1) + width * channels {
        return Err(LutError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: stride * (height - 1) + width * channels,
            received: data_len,
        }));
    }
    Ok(())
}

impl<'a, T: Clone + Copy + Default + Debug> LutImage<'a, T> {
    /// Allocates default image layout for given channels count
    pub fn alloc(width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: std::borrow::Cow::Owned(vec![T::default(); width * height * channels]),
            width,
            height,
            channels,
            stride: width * channels,
        }
    }

    /// Borrows existing data
    /// Stride will be default `width * channels`
    pub fn borrow(arr: &'a [T], width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            channels,
            stride: width * channels,
        }
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> usize {
        if self.stride == 0 {
            self.width * self.channels
        } else {
            self.stride
        }
    }

    /// Checks if layout matches necessary requirements
    #[inline]
    pub fn check_layout(&self) -> Result<(), LutError> {
        check_layout_impl(
            self.data.len(),
            self.width,
            self.height,
            self.row_stride(),
            self.channels,
        )
    }
}

impl<'a, T: Clone + Copy + Default + Debug> LutImageMut<'a, T> {
    /// Allocates default image layout for given channels count
    pub fn alloc(width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: BufferStore::Owned(vec![T::default(); width * height * channels]),
            width,
            height,
            channels,
            stride: width * channels,
        }
    }

    /// Mutable borrows existing data
    /// Stride will be default `width * channels`
    pub fn borrow(arr: &'a mut [T], width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            channels,
            stride: width * channels,
        }
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> usize {
        if self.stride == 0 {
            self.width * self.channels
        } else {
            self.stride
        }
    }

    /// Checks if layout matches necessary requirements
    #[inline]
    pub fn check_layout(&self) -> Result<(), LutError> {
        check_layout_impl(
            self.data.borrow().len(),
            self.width,
            self.height,
            self.row_stride(),
            self.channels,
        )
    }

    /// Checks if it is matches the size of the other image
    #[inline]
    pub fn size_matches(&self, other: &LutImage<'_, T>) -> Result<(), LutError> {
        if self.width == other.width && self.height == other.height {
            return Ok(());
        }
        Err(LutError::ImageSizeMismatch)
    }

    pub fn to_immutable_ref(&self) -> LutImage<'_, T> {
        LutImage {
            data: std::borrow::Cow::Borrowed(self.data.borrow()),
            stride: self.row_stride(),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}
