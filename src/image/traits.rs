//! Read/write pixel-buffer traits shared by every grid type.
//!
//! Pipeline stages work through [`ImageView`] rows rather than per-pixel
//! indexing where possible; row slices keep the inner loops cache-friendly
//! and make the owned and borrowed buffers interchangeable in tests.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImage;

    #[test]
    fn rows_iterates_the_buffer_in_row_major_order() {
        let grid = GrayImage::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]);
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2, 3][..], &[4u8, 5, 6][..]]);
    }
}
