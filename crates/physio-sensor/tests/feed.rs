use physio_sensor::feed::{
    DEFAULT_TARGET_REPS, Feedback, MAX_ANGLE, MAX_STEP, SensorFeed, TICKS_PER_PHASE,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn angle_stays_within_bounds_and_peak_tracks_max() {
    for seed in 0..8 {
        let mut feed = SensorFeed::new(StdRng::seed_from_u64(seed), Some(u32::MAX));
        let mut max_seen = 0;
        let mut prev = 0;
        for _ in 0..5_000 {
            let frame = feed.step();
            assert!(frame.angle <= MAX_ANGLE, "angle {} out of range", frame.angle);
            assert!(frame.angle.abs_diff(prev) < MAX_STEP);
            max_seen = max_seen.max(frame.angle);
            assert_eq!(frame.peak_angle, max_seen);
            prev = frame.angle;
        }
    }
}

#[test]
fn direction_alternates_every_phase() {
    let mut feed = SensorFeed::new(StdRng::seed_from_u64(42), Some(u32::MAX));
    let mut prev = 0;
    for tick in 0..TICKS_PER_PHASE * 4 {
        let frame = feed.step();
        if (tick / TICKS_PER_PHASE) % 2 == 0 {
            assert!(frame.angle >= prev, "tick {tick} decreased");
        } else {
            assert!(frame.angle <= prev, "tick {tick} increased");
        }
        prev = frame.angle;
    }
}

#[test]
fn initial_state_asks_patient_to_align() {
    let feed = SensorFeed::new(StdRng::seed_from_u64(1), None);
    let summary = feed.summary();
    assert_eq!(feed.target_reps(), DEFAULT_TARGET_REPS);
    assert_eq!(summary.reps, 0);
    assert_eq!(summary.peak_rom, 0);
    assert!(!summary.completed);
    assert_eq!(Feedback::Align.message(), "Align your body in the frame");
}

#[test]
fn completes_at_target_and_then_freezes() {
    let mut feed = SensorFeed::new(StdRng::seed_from_u64(7), Some(3));
    let mut last = feed.step();
    for _ in 0..100_000 {
        if last.complete {
            break;
        }
        last = feed.step();
    }
    assert!(last.complete);
    assert_eq!(last.reps, 3);
    assert_eq!(last.feedback, Feedback::GreatExtension);

    let after = feed.step();
    assert_eq!(after, last);
    assert!(feed.summary().completed);
}

#[test]
fn zero_target_is_treated_as_one() {
    let feed = SensorFeed::new(StdRng::seed_from_u64(3), Some(0));
    assert_eq!(feed.target_reps(), 1);
}
