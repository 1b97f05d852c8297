// SPDX-FileCopyrightText: 2025 Shun Sakai
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [PIC] rendering support.
//!
//! # Examples
//!
//! ```
//! use qr_codec::{QrCode, render::pic::Color};
//!
//! let code = QrCode::new(b"Hello").unwrap();
//! let pic = code.render::<Color>().build();
//! println!("{pic}");
//! ```
//!
//! [PIC]: https://en.wikipedia.org/wiki/PIC_(markup_language)

use alloc::{format, string::String};
use core::fmt::Write;

use crate::{
    render::{Canvas as RenderCanvas, Pixel},
    types::Color as ModuleColor,
};

/// A PIC color. PIC has no notion of grayscale, so every dark module is
/// filled and every light module is left unfilled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color;

impl Pixel for Color {
    type Image = String;
    type Canvas = Canvas;

    #[inline]
    fn default_color(_color: ModuleColor) -> Self {
        Self
    }
}

/// A canvas for PIC rendering.
#[derive(Debug)]
pub struct Canvas {
    pic: String,
}

impl RenderCanvas for Canvas {
    type Pixel = Color;
    type Image = String;

    #[inline]
    fn new(width: u32, height: u32, _dark_pixel: Self::Pixel, _light_pixel: Self::Pixel) -> Self {
        let pic = format!(
            concat!(
                "maxpswid={w};maxpsht={h};movewid=0;moveht=1;boxwid=1;boxht=1\n",
                "define p {{ box wid $3 ht $4 fill 1 thickness 0.1 with .nw at $1,-$2 }}\n",
                "box wid maxpswid ht maxpsht with .nw at 0,0\n",
            ),
            w = width,
            h = height
        );
        Self { pic }
    }

    #[inline]
    fn draw_dark_pixel(&mut self, x: u32, y: u32) {
        self.draw_dark_pixel_block(x, y, 1, 1);
    }

    #[inline]
    fn draw_dark_pixel_block(&mut self, left: u32, top: u32, width: u32, height: u32) {
        writeln!(self.pic, "p({left},{top},{width},{height})").unwrap();
    }

    #[inline]
    fn into_image(self) -> Self::Image {
        self.pic
    }
}
