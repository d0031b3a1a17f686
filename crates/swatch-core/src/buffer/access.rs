//! Pixel access functions
//!
//! Bounds-checked and unchecked getters/setters for individual pixels.

use super::{PixelBuffer, PixelBufferMut};
use crate::color::Color;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Get the packed pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the packed pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + x as usize]
    }

    /// Get the color at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn color(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel(x, y).map(Color::from_pixel32)
    }

    /// Iterate over every pixel in row-major order as `(x, y, color)`.
    pub fn colors(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let width = self.width();
        self.data().iter().enumerate().map(move |(i, &pixel)| {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            (x, y, Color::from_pixel32(pixel))
        })
    }
}

impl PixelBufferMut {
    /// Get the packed pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[self.index(x, y)])
    }

    /// Set the packed pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x.min(self.width()), y.min(self.height())),
                len: self.data().len(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set the packed pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.index(x, y);
        self.data_mut()[idx] = val;
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel32())
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)` with `color`.
    ///
    /// The rectangle is clipped to the buffer.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Color) {
        let pixel = color.to_pixel32();
        let x1 = x1.min(self.width());
        let y1 = y1.min(self.height());
        for y in y0..y1 {
            let row = self.row_data_mut(y);
            for dst in row.iter_mut().take(x1 as usize).skip(x0 as usize) {
                *dst = pixel;
            }
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width() as usize) + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_color() {
        let mut pm = PixelBuffer::new(4, 3).unwrap().try_into_mut().unwrap();
        pm.set_color(3, 2, Color::BLUE).unwrap();
        assert!(pm.set_color(4, 0, Color::BLUE).is_err());
        assert!(pm.set_color(0, 3, Color::BLUE).is_err());
        let buffer: PixelBuffer = pm.into();
        assert_eq!(buffer.color(3, 2), Some(Color::BLUE));
        assert_eq!(buffer.color(4, 2), None);
        assert_eq!(buffer.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_colors_row_major() {
        let mut pm = PixelBuffer::new(2, 2).unwrap().try_into_mut().unwrap();
        pm.set_color(1, 0, Color::RED).unwrap();
        pm.set_color(0, 1, Color::GREEN).unwrap();
        let buffer: PixelBuffer = pm.into();
        let coords: Vec<_> = buffer.colors().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        let colors: Vec<_> = buffer.colors().map(|(_, _, c)| c).collect();
        assert_eq!(colors[1], Color::RED);
        assert_eq!(colors[2], Color::GREEN);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut pm = PixelBuffer::new(4, 4).unwrap().try_into_mut().unwrap();
        pm.fill_rect(2, 1, 10, 3, Color::WHITE);
        let buffer: PixelBuffer = pm.into();
        let white = buffer
            .colors()
            .filter(|&(_, _, c)| c == Color::WHITE)
            .count();
        assert_eq!(white, 4);
        assert_eq!(buffer.color(3, 2), Some(Color::WHITE));
        assert_eq!(buffer.color(1, 2), Some(Color::new(0, 0, 0, 0)));
    }
}
