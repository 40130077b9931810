/// Generates a black scene with one solid bright axis-aligned rectangle.
///
/// The rectangle covers columns `x0..=x1` and rows `y0..=y1` inclusive.
pub fn bright_rect_u8(
    width: usize,
    height: usize,
    (x0, x1, y0, y1): (usize, usize, usize, usize),
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(x1 < width && y1 < height, "rectangle must fit the image");

    let mut img = vec![0u8; width * height];
    for y in y0..=y1 {
        for x in x0..=x1 {
            img[y * width + x] = 255;
        }
    }
    img
}
