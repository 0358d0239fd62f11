// Copyright 2020 @TwoCookingMice

use super::constants::Vector3f;

use std::ops;
use std::vec::Vec;

#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<Vector3f>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector3f;

    fn index(&self, index: (usize, usize)) -> &Vector3f {
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector3f {
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self {
            data: vec![Vector3f::new(0.0, 0.0, 0.0); pixel_number],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/* Test for Bitmap */

#[cfg(test)]
mod tests {
    use super::Bitmap;
    use super::Vector3f;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(256usize, 128usize);
        assert_eq!(bitmap.width(), 256);
        assert_eq!(bitmap.height(), 128);

        bitmap[(5, 6)] = Vector3f::new(1.0, 0.5, 0.6);
        assert!((bitmap[(5, 6)][0] - 1.0).abs() < 0.000001);
        assert!((bitmap[(2, 6)][0] - 0.0).abs() < 0.000001);
    }
}
