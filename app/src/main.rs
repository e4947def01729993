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
use lutforge::{encode_lut_table, ColorLut3d, Lut3dLayout, LutImage, LutImageMut};
use moxcms::{ColorProfile, Layout, TransformOptions};

const GRID_SIZE: usize = 33;

/// Grid points in table order, red is changed first, then green, then blue.
fn sample_grid(grid_size: usize) -> Vec<f32> {
    let scale = 1. / (grid_size - 1) as f32;
    let mut grid = Vec::with_capacity(grid_size * grid_size * grid_size * 3);
    for b in 0..grid_size {
        for g in 0..grid_size {
            for r in 0..grid_size {
                grid.push(r as f32 * scale);
                grid.push(g as f32 * scale);
                grid.push(b as f32 * scale);
            }
        }
    }
    grid
}

fn make_display_p3_to_srgb_table(grid_size: usize) -> Vec<i16> {
    let source = ColorProfile::new_display_p3();
    let target = ColorProfile::new_srgb();
    let transform = source
        .create_transform_f32(Layout::Rgb, &target, Layout::Rgb, TransformOptions::default())
        .unwrap();
    let grid = sample_grid(grid_size);
    let mut mapped = vec![0f32; grid.len()];
    transform.transform(&grid, &mut mapped).unwrap();
    encode_lut_table(&mapped)
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./assets/bench.jpg".to_string());
    let img = image::ImageReader::open(&path).unwrap().decode().unwrap();
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let table = make_display_p3_to_srgb_table(GRID_SIZE);
    let lut = ColorLut3d::new(&table, Lut3dLayout::cube(3, GRID_SIZE)).unwrap();

    let src = LutImage::borrow(rgba.as_raw(), width as usize, height as usize, 4);
    let mut dst = LutImageMut::<u8>::alloc(width as usize, height as usize, 4);

    let instant = std::time::Instant::now();
    lut.apply(&mut dst, &src).unwrap();
    println!("Time {:?}", instant.elapsed());

    image::save_buffer(
        "processed_lut3d.png",
        dst.data.borrow(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
}
