//! Splats random coloured line segments onto a [Surface].
//!
//! Each [draw] call is independent: it samples one 24-bit colour and two
//! points, then issues exactly one colour-set and one
//! begin/move/line/stroke sequence. The random source and the target
//! surface are explicit parameters so both can be substituted in tests.

use rand::Rng;

use crate::{
    colour::{Colour, COLOUR_SPACE},
    math::{Fl, Vec2},
    surface::Surface,
};

/// How many segments [run] splats
pub const SEGMENT_COUNT: usize = 50;

/// Exclusive upper bound for sampled point coordinates
pub const COORD_BOUND: Fl = 511.0;

/// Sample a point with both coordinates uniform in `[0, COORD_BOUND)`
pub fn random_point(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(0.0..COORD_BOUND),
        rng.gen_range(0.0..COORD_BOUND),
    )
}

/// Stroke one random segment onto `surface`
///
/// Samples a colour uniform in `[0, COLOUR_SPACE)`, sets it as the stroke
/// colour (which persists on the surface until next changed), then strokes a
/// straight segment between two freshly sampled points.
pub fn draw(rng: &mut impl Rng, surface: &mut impl Surface) {
    surface.set_stroke_colour(Colour::from_rgb24(rng.gen_range(0..COLOUR_SPACE)));
    let from = random_point(rng);
    let to = random_point(rng);
    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke();
}

/// The driver: invoke [draw] exactly [SEGMENT_COUNT] times, back to back
pub fn run(rng: &mut impl Rng, surface: &mut impl Surface) {
    for _ in 0..SEGMENT_COUNT {
        draw(rng, surface);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::surface::{Op, Recorder};

    #[test]
    fn draw_issues_one_stroke_sequence() {
        let mut recorder = Recorder::new();
        draw(&mut rand::thread_rng(), &mut recorder);
        let ops = recorder.ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops[0], Op::SetStrokeColour(_)));
        assert!(matches!(ops[1], Op::BeginPath));
        assert!(matches!(ops[2], Op::MoveTo(_)));
        assert!(matches!(ops[3], Op::LineTo(_)));
        assert!(matches!(ops[4], Op::Stroke));
    }

    #[test]
    fn run_issues_fifty_sequences() {
        let mut recorder = Recorder::new();
        run(&mut rand::thread_rng(), &mut recorder);
        let ops = recorder.into_ops();
        assert_eq!(ops.len(), SEGMENT_COUNT * 5);
        for sequence in ops.chunks(5) {
            assert!(matches!(sequence[0], Op::SetStrokeColour(_)));
            assert!(matches!(sequence[1], Op::BeginPath));
            assert!(matches!(sequence[2], Op::MoveTo(_)));
            assert!(matches!(sequence[3], Op::LineTo(_)));
            assert!(matches!(sequence[4], Op::Stroke));
        }
    }

    #[test]
    fn sampled_values_stay_in_bounds() {
        let mut recorder = Recorder::new();
        run(&mut rand::thread_rng(), &mut recorder);
        for op in recorder.ops() {
            match op {
                Op::SetStrokeColour(colour) => assert!(colour.value() < COLOUR_SPACE),
                Op::MoveTo(point) | Op::LineTo(point) => {
                    assert!((0.0..COORD_BOUND).contains(&point.x()));
                    assert!((0.0..COORD_BOUND).contains(&point.y()));
                }
                _ => {}
            }
        }
    }

    #[test]
    fn zeroed_random_source_gives_black_at_origin() {
        let mut rng = StepRng::new(0, 0);
        let mut recorder = Recorder::new();
        draw(&mut rng, &mut recorder);
        let origin = Vec2::new(0, 0);
        assert_eq!(
            recorder.into_ops(),
            vec![
                Op::SetStrokeColour(Colour::from_rgb24(0)),
                Op::BeginPath,
                Op::MoveTo(origin),
                Op::LineTo(origin),
                Op::Stroke,
            ]
        );
        assert_eq!(Colour::from_rgb24(0).token(), "#000000");
    }

    #[test]
    fn zeroed_run_paints_the_origin_black() {
        let mut rng = StepRng::new(0, 0);
        let mut canvas = crate::canvas::Canvas::new(512, 512);
        run(&mut rng, &mut canvas);
        assert_eq!(canvas.pixel(0, 0), Colour::from_rgb24(0));
        assert_eq!(canvas.pixel(1, 1), Colour::from_rgb24(0xffffff));
    }

    #[test]
    fn maximal_random_source_stays_below_the_bounds() {
        // All-ones words land in the widening-multiply reject zone of the
        // integer sampler; 0xffffff00 is accepted and still maps to the top
        // of the colour space.
        let mut rng = StepRng::new(0xffff_ff00, 0);
        let mut recorder = Recorder::new();
        draw(&mut rng, &mut recorder);
        let ops = recorder.into_ops();
        match &ops[0] {
            Op::SetStrokeColour(colour) => {
                assert_eq!(colour.value(), COLOUR_SPACE - 1);
                assert_eq!(colour.token(), "#ffffff");
            }
            other => panic!("expected a colour set, got {:?}", other),
        }
        for op in &ops {
            if let Op::MoveTo(point) | Op::LineTo(point) = op {
                assert!(point.x() < COORD_BOUND);
                assert!(point.y() < COORD_BOUND);
                assert!(point.x() > COORD_BOUND - 1.0);
                assert!(point.y() > COORD_BOUND - 1.0);
            }
        }
    }
}
