use super::rand::{draw_line, draw_point, draw_round, ReplayToken, RoundGenerator};
use super::*;
use proptest::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

#[test]
fn contains_decides_membership_exactly() {
    // 2*3 + 1 = 7.
    assert!(Line::new(2, 1).contains(GridPoint::new(3, 7)));
    // -1*3 + 4 = 1, not 7.
    assert!(!Line::new(-1, 4).contains(GridPoint::new(3, 7)));
}

#[test]
fn equation_and_prompt_text_are_literal() {
    assert_eq!(Line::new(-2, 3).to_string(), "y = -2x + 3");
    assert_eq!(Line::new(2, -5).to_string(), "y = 2x + -5");
    let round = Round {
        line: Line::new(-1, 4),
        point: GridPoint::new(3, 7),
        on_line: false,
    };
    assert_eq!(
        round.prompt(),
        "Is the point (3, 7) on the line y = -1x + 4?"
    );
}

#[test]
fn sampled_lines_and_points_stay_in_range() {
    let cfg = QuizCfg::default();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..2000 {
        let line = draw_line(&cfg, &mut rng);
        assert!(line.m != 0, "slope zero is excluded");
        assert!((-2..=2).contains(&line.m));
        assert!((-5..=5).contains(&line.b));
        let p = draw_point(&cfg, &mut rng);
        assert!((-8..=8).contains(&p.x));
        assert!((-8..=8).contains(&p.y));
    }
}

#[test]
fn every_nonzero_slope_shows_up() {
    let cfg = QuizCfg::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = [false; 5];
    for _ in 0..500 {
        let line = draw_line(&cfg, &mut rng);
        seen[(line.m + 2) as usize] = true;
    }
    assert_eq!(seen, [true, true, false, true, true]);
}

#[test]
fn rounds_honor_their_coin_flip() {
    let cfg = QuizCfg::default();
    let mut rng = StdRng::seed_from_u64(12345);
    let mut on = 0usize;
    for _ in 0..2000 {
        let round = draw_round(&cfg, &mut rng);
        assert_eq!(round.line.contains(round.point), round.on_line);
        if round.on_line {
            // On-line x stays in the grid; y may leave it and is accepted.
            assert!((-8..=8).contains(&round.point.x));
            on += 1;
        } else {
            assert!((-8..=8).contains(&round.point.x));
            assert!((-8..=8).contains(&round.point.y));
        }
    }
    // Fair coin, 2000 flips: stray outside [40%, 60%] only with negligible
    // probability under this fixed seed.
    assert!((800..=1200).contains(&on), "on-line count {on}");
}

#[test]
fn generator_streams_and_replays() {
    let cfg = QuizCfg::default();
    let mut gen = RoundGenerator::new(cfg, 42).unwrap();
    let a = gen.generate_next();
    let b = gen.generate_next();
    assert_eq!(a.replay, ReplayToken { seed: 42, index: 0 });
    assert_eq!(b.replay, ReplayToken { seed: 42, index: 1 });
    assert_eq!(gen.regenerate(&a.replay), a.round);
    assert_eq!(gen.regenerate(&b.replay), b.round);
    // A fresh generator over the same seed replays the same stream.
    let mut again = RoundGenerator::new(cfg, 42).unwrap();
    assert_eq!(again.generate_next(), a);
}

#[test]
fn generator_rejects_bad_configs() {
    let mut cfg = QuizCfg {
        slope_max: 0,
        ..QuizCfg::default()
    };
    assert!(RoundGenerator::new(cfg, 1).is_err());
    cfg = QuizCfg {
        // Fallback point (0, b + 1) could leave the grid.
        grid_extent: 5,
        intercept_max: 5,
        ..QuizCfg::default()
    };
    assert!(RoundGenerator::new(cfg, 1).is_err());
    cfg = QuizCfg {
        max_off_line_attempts: 0,
        ..QuizCfg::default()
    };
    assert!(RoundGenerator::new(cfg, 1).is_err());
}

proptest! {
    #[test]
    fn contains_round_trips_constructed_points(
        m in prop_oneof![Just(-2), Just(-1), Just(1), Just(2)],
        b in -5i32..=5,
        x in -100i32..=100,
    ) {
        let line = Line::new(m, b);
        prop_assert!(line.contains(GridPoint::new(x, line.y_at(x))));
        prop_assert!(!line.contains(GridPoint::new(x, line.y_at(x) + 1)));
    }

    #[test]
    fn replay_tokens_are_deterministic(seed in any::<u64>(), index in any::<u64>()) {
        let cfg = QuizCfg::default();
        let gen = RoundGenerator::new(cfg, seed).unwrap();
        let token = ReplayToken { seed, index };
        prop_assert_eq!(gen.regenerate(&token), gen.regenerate(&token));
    }
}
