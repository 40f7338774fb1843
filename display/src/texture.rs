use cosmac_core::FrameBuffer;

/// Red, green and blue
pub const BYTES_PER_PIXEL: usize = 3;

/// Formats a FrameBuffer as an RGB24 texture.
///
/// An RGB24 texture is a 1D array of bytes that represent concatenated rows of
/// RGB pixels.
///
/// This creates a black and white rendering by:
/// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
/// - Triplicating each element of that 1D array to represent the RGB values of each pixel
/// - Mapping lit pixels to full intensity and dark ones to 0
///
/// # Arguments
/// * `frame` a FrameBuffer
pub fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .rows()
        .flat_map(|row| row.iter())
        .flat_map(|pixel| std::iter::repeat(*pixel).take(BYTES_PER_PIXEL))
        .map(|lit| if lit { 0xFF } else { 0x00 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_rgb24() {
        let mut frame = FrameBuffer::new();
        // 01000000 on the first row, 10000000 on the second
        frame.draw_sprite(0, 0, &[0x40, 0x80]);
        let texture = frame_to_rgb24(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }

    #[test]
    fn test_blank_frame_is_black() {
        let texture = frame_to_rgb24(&FrameBuffer::new());
        assert_eq!(texture.len(), 64 * 32 * BYTES_PER_PIXEL);
        assert!(texture.iter().all(|byte| *byte == 0));
    }
}
