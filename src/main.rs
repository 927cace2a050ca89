use splat::{canvas::Canvas, splatter, window};

/// Width and height of the demo canvas, in pixels
const SURFACE_SIZE: u32 = 512;
/// Fixed identifier of the presentation window
const WINDOW_TITLE: &str = "splat";

fn main() {
    // The surface must be acquired before any drawing happens; failing to
    // acquire it is fatal.
    let mut window = window::acquire(WINDOW_TITLE, SURFACE_SIZE, SURFACE_SIZE)
        .expect("Failed to open window");

    let mut canvas = Canvas::new(SURFACE_SIZE, SURFACE_SIZE);
    splatter::run(&mut rand::thread_rng(), &mut canvas);

    window::present(&mut window, &canvas).expect("Failed to present canvas");
}
