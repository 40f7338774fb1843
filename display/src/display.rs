use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use cosmac_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use cosmac_core::FrameBuffer;

use crate::texture::{frame_to_rgb24, BYTES_PER_PIXEL};

const TITLE: &str = "Cosmac";

/// # Display
/// The 64x32 black/white display, scaled up into an SDL2 window.
/// The display only gets a call to `render` when the FrameBuffer is updated.
pub struct Display {
    canvas: WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                TITLE,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats the FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = frame_to_rgb24(frame);
        let row_len = self.width * BYTES_PER_PIXEL;
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            // Rows may be padded out to `pitch` bytes
            for (row, line) in pixels.chunks(row_len).enumerate() {
                let start = row * pitch;
                buffer[start..start + row_len].copy_from_slice(line);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    /// Flags the window title while the sound timer is running.
    pub fn set_beeping(&mut self, beeping: bool) -> Result<(), String> {
        let title = if beeping {
            format!("{} \u{266A}", TITLE)
        } else {
            TITLE.to_string()
        };
        self.canvas
            .window_mut()
            .set_title(&title)
            .map_err(|e| e.to_string())
    }
}
