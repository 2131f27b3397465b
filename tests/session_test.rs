//! Integration tests for session state and the recording workflow

use face_sampler::distance_filter::{Acceptance, DistanceFilter};
use face_sampler::session::{SessionState, SkipReason};

fn new_session(single_shot_warmup: bool) -> SessionState {
    SessionState::new(DistanceFilter::new(5, 0.2), single_shot_warmup)
}

/// One recording step as the capture loop performs it: offer the distance,
/// emit on acceptance, disarm after warm-up samples.
fn record_step(session: &mut SessionState, distance: f64) -> bool {
    if !session.recording {
        return false;
    }
    let acceptance = session.distance_filter.offer(distance);
    match acceptance {
        Acceptance::Rejected => {
            session.skips.record(SkipReason::RejectedScale);
            false
        }
        Acceptance::Warmup => {
            session.finish_warmup_sample();
            true
        }
        Acceptance::Accepted => true,
    }
}

#[test]
fn test_warmup_requires_rearming_for_each_seed() {
    let mut session = new_session(true);

    // Each of the first five samples needs its own key press
    for i in 0..5 {
        assert!(!session.recording);
        session.toggle_recording();
        assert!(record_step(&mut session, 40.0 + f64::from(i)));
        assert!(!session.recording, "warm-up sample {i} should disarm recording");
    }
    assert!(!session.distance_filter.is_warming_up());

    // With the window full, recording stays armed across samples
    session.toggle_recording();
    assert!(record_step(&mut session, 41.0));
    assert!(session.recording);
    assert!(record_step(&mut session, 40.5));
    assert!(session.recording);
}

#[test]
fn test_continuous_mode_keeps_recording_through_warmup() {
    let mut session = new_session(false);
    session.toggle_recording();

    for _ in 0..5 {
        assert!(record_step(&mut session, 40.0));
        assert!(session.recording);
    }
}

#[test]
fn test_window_survives_recording_toggles() {
    let mut session = new_session(false);
    session.toggle_recording();
    for _ in 0..5 {
        record_step(&mut session, 40.0);
    }

    // Toggling off and on does not reset the accumulated window
    session.toggle_recording();
    assert_eq!(session.distance_filter.len(), 5);
    session.toggle_recording();
    assert_eq!(session.distance_filter.len(), 5);

    // The old average still rejects outliers after the round trip
    assert!(!record_step(&mut session, 60.0));
    assert_eq!(session.skips.rejected_scale, 1);
}

#[test]
fn test_disarmed_session_never_touches_the_window() {
    let mut session = new_session(true);

    for _ in 0..10 {
        assert!(!record_step(&mut session, 40.0));
    }
    assert!(session.distance_filter.is_empty());
    assert_eq!(session.skips.total(), 0);
}

#[test]
fn test_rejections_only_count_when_armed() {
    let mut session = new_session(false);
    session.toggle_recording();
    for _ in 0..5 {
        record_step(&mut session, 40.0);
    }

    assert!(!record_step(&mut session, 80.0));
    assert!(!record_step(&mut session, 80.0));
    assert_eq!(session.skips.rejected_scale, 2);
    assert_eq!(session.skips.total(), 2);

    session.toggle_recording();
    assert!(!record_step(&mut session, 80.0));
    assert_eq!(session.skips.rejected_scale, 2);
}
