/// Read-only access to an interleaved 8-bit raster.
///
/// `row(y)` returns exactly `width() * CHANNELS` bytes for the requested row,
/// independent of the underlying stride.
pub trait ImageView {
    const CHANNELS: usize;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Pixels between the starts of consecutive rows.
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[u8];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.image.height().saturating_sub(self.y);
        (rest, Some(rest))
    }
}
