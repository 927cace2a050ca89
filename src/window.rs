use std::time::Duration;

use minifb::{Key, Window, WindowOptions};

use crate::canvas::Canvas;

/// Acquire a presentation window of exactly `width` by `height` pixels,
/// identified by `title`
///
/// Acquisition failure is fatal for callers that need a window: there is no
/// retry or degraded mode, the error propagates out.
pub fn acquire(title: &str, width: u32, height: u32) -> Result<Window, minifb::Error> {
    let mut window = Window::new(title, width as usize, height as usize, WindowOptions::default())?;
    window.limit_update_rate(Some(Duration::from_micros(16600)));
    Ok(window)
}

/// Blit `canvas` into `window` every frame until the window is closed or
/// Escape is pressed
pub fn present(window: &mut Window, canvas: &Canvas) -> Result<(), minifb::Error> {
    let buffer = canvas.packed_buffer();
    let (width, height) = (canvas.width() as usize, canvas.height() as usize);
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, width, height)?;
    }
    Ok(())
}
