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
use criterion::{criterion_group, criterion_main, Criterion};
use lutforge::{encode_lut_value, ColorLut3d, Lut3dLayout, LutImage, LutImageMut};
use rand::Rng;

fn make_warm_table(layout: Lut3dLayout) -> Vec<i16> {
    let mut table = Vec::with_capacity(layout.table_len());
    for b in 0..layout.size3d {
        for g in 0..layout.size2d {
            for r in 0..layout.size1d {
                let r = r as f32 / (layout.size1d - 1) as f32;
                let g = g as f32 / (layout.size2d - 1) as f32;
                let b = b as f32 / (layout.size3d - 1) as f32;
                table.push(encode_lut_value(r * 1.08));
                table.push(encode_lut_value(g));
                table.push(encode_lut_value(b * 0.92));
                if layout.table_channels == 4 {
                    table.push(encode_lut_value(1.));
                }
            }
        }
    }
    table
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (1920usize, 1080usize);
    let mut rng = rand::rng();
    let rgba = (0..width * height * 4)
        .map(|_| rng.random_range(0..=255u8))
        .collect::<Vec<_>>();

    for grid_size in [17, 33, 65] {
        let layout = Lut3dLayout::cube(3, grid_size);
        let table = make_warm_table(layout);
        let lut = ColorLut3d::new(&table, layout).unwrap();
        let src = LutImage::borrow(&rgba, width, height, 4);
        let mut dst = LutImageMut::<u8>::alloc(width, height, 4);
        c.bench_function(&format!("lutforge: RGBA {}^3", grid_size), |b| {
            b.iter(|| {
                lut.apply(&mut dst, &src).unwrap();
            })
        });
    }

    let layout = Lut3dLayout::cube(4, 33);
    let table = make_warm_table(layout);
    let lut = ColorLut3d::new(&table, layout).unwrap();
    let mut image_data = rgba.clone();
    c.bench_function("lutforge: RGBA in place, 4 channels table 33^3", |b| {
        b.iter(|| {
            let mut image = LutImageMut::borrow(&mut image_data, width, height, 4);
            lut.apply_in_place(&mut image).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
