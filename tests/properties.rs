use constellation_backdrop::renderer::{RecordingCanvas, link_alpha, pulse_radius};
use constellation_backdrop::sim::{AnimationClock, Point, PointField, point_count};
use constellation_backdrop::{FieldConfig, SurfaceState, Viewport};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #[test]
    fn point_count_matches_formula(
        w in 0u32..4000,
        h in 0u32..3000,
        cap in 140usize..=180,
        density in 9000u32..=11000,
    ) {
        let n = point_count(w as f32, h as f32, cap, density as f32);
        let expected = ((w as u64 * h as u64) / density as u64).min(cap as u64) as usize;
        prop_assert_eq!(n, expected);
        if w == 0 || h == 0 {
            prop_assert_eq!(n, 0);
        }
    }

    #[test]
    fn reflection_flips_exiting_axis(
        x in 0.0f32..=200.0,
        y in 0.0f32..=100.0,
        vx in -0.5f32..0.5,
        vy in -0.5f32..0.5,
    ) {
        let bounds = Vec2::new(200.0, 100.0);
        let mut p = Point::new(Vec2::new(x, y), Vec2::new(vx, vy), 1.0, 0.0);
        p.step(bounds);

        if p.pos.x < 0.0 || p.pos.x > bounds.x {
            prop_assert!(p.vel.x * vx < 0.0);
        } else {
            prop_assert_eq!(p.vel.x, vx);
        }
        if p.pos.y < 0.0 || p.pos.y > bounds.y {
            prop_assert!(p.vel.y * vy < 0.0);
        } else {
            prop_assert_eq!(p.vel.y, vy);
        }
    }

    #[test]
    fn seeded_field_stays_near_bounds(seed in any::<u64>(), frames in 1usize..400) {
        let config = FieldConfig::two_tone();
        let size = Vec2::new(640.0, 480.0);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut field = PointField::seed(size, &config, &mut rng);
        for _ in 0..frames {
            field.advance(size);
        }
        let slack = config.speed;
        for p in field.points() {
            prop_assert!(p.pos.x >= -slack && p.pos.x <= size.x + slack);
            prop_assert!(p.pos.y >= -slack && p.pos.y <= size.y + slack);
        }
    }

    #[test]
    fn link_alpha_decreases_with_distance(
        a in 0.0f32..120.0,
        b in 0.0f32..120.0,
        base in 0.1f32..0.35,
    ) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(link_alpha(near, 120.0, base) >= link_alpha(far, 120.0, base));
        prop_assert_eq!(link_alpha(120.0, 120.0, base), 0.0);
        prop_assert!(link_alpha(near, 120.0, base) <= base);
    }

    #[test]
    fn pulse_stays_within_amplitude(
        base in 0.6f32..=2.1,
        phase in 0.0f32..std::f32::consts::TAU,
        ticks in 0u32..1_000_000,
        amplitude in 0.0f32..0.6,
    ) {
        let mut clock = AnimationClock::new();
        for _ in 0..(ticks % 1000) {
            clock.tick();
        }
        let r = pulse_radius(base, phase, clock.angle(0.02), amplitude);
        prop_assert!(r >= base - amplitude - 1e-5);
        prop_assert!(r <= base + amplitude + 1e-5);
    }

    #[test]
    fn resize_is_idempotent(
        w in 0.0f32..5000.0,
        h in 0.0f32..5000.0,
        dpr in 0.5f64..4.0,
    ) {
        let mut canvas = RecordingCanvas::new();
        let mut state = SurfaceState::initialize(Viewport::new(800.0, 600.0, 1.0), &mut canvas);
        let viewport = Viewport::new(w, h, dpr);

        state.on_resize(viewport, &mut canvas);
        let first = state;
        let first_backing = canvas.last_backing();
        state.on_resize(viewport, &mut canvas);

        prop_assert_eq!(state, first);
        prop_assert_eq!(canvas.last_backing(), first_backing);
    }
}
