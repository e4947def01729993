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
use crate::lut_image::PixelEncoding;
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub enum LutError {
    /// Table channels count must be 3 or 4
    InvalidTableChannels(usize),
    /// Grid size on some axis is outside of supported range
    InvalidGridSize(usize),
    TableSizeMismatch(MismatchedSize),
    UnsupportedPixelEncoding(PixelEncoding),
    /// Source image must have at least 3 channels
    NotEnoughSourceChannels(usize),
    NotEnoughDestinationChannels(MismatchedSize),
    /// Destination has an extra channel which does not exist in the source
    AmbiguousExtraChannels(MismatchedSize),
    ImageSizeMismatch,
    ZeroBaseSize,
    MinimumSliceSizeMismatch(MismatchedSize),
    MinimumStrideSizeMismatch(MismatchedSize),
}

impl LutError {
    /// Returns `true` when the error is caused by table parameters
    /// rather than by source or destination images.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            LutError::InvalidTableChannels(_)
                | LutError::InvalidGridSize(_)
                | LutError::TableSizeMismatch(_)
        )
    }

    /// Returns `true` when source and destination images are not compatible
    /// with each other or with the table.
    pub fn is_mode_mismatch(&self) -> bool {
        matches!(
            self,
            LutError::UnsupportedPixelEncoding(_)
                | LutError::NotEnoughSourceChannels(_)
                | LutError::NotEnoughDestinationChannels(_)
                | LutError::AmbiguousExtraChannels(_)
                | LutError::ImageSizeMismatch
        )
    }
}

impl Display for LutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LutError::InvalidTableChannels(value) => {
                write!(f, "Table channels could be 3 or 4, but it is {}", value)
            }
            LutError::InvalidGridSize(value) => f.write_fmt(format_args!(
                "Grid size must be in range [2, 65], but it is {}",
                value
            )),
            LutError::TableSizeMismatch(size) => f.write_fmt(format_args!(
                "Table size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            LutError::UnsupportedPixelEncoding(encoding) => {
                write!(f, "Unsupported pixel encoding {:?}", encoding)
            }
            LutError::NotEnoughSourceChannels(value) => {
                write!(f, "Source must have at least 3 channels, but it has {}", value)
            }
            LutError::NotEnoughDestinationChannels(size) => f.write_fmt(format_args!(
                "Destination must have at least {} channels, but it has {}",
                size.expected, size.received
            )),
            LutError::AmbiguousExtraChannels(size) => f.write_fmt(format_args!(
                "Destination has {} channels, but source has only {}",
                size.received, size.expected
            )),
            LutError::ImageSizeMismatch => f.write_str("Image size does not match"),
            LutError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            LutError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            LutError::MinimumStrideSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum stride must have size at least {} but it is {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for LutError {}
