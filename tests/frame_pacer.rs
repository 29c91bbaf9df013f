mod common;

mod tests {
    use core::cell::Cell;

    use shakecube_matrix::{
        Duration, FramePacer, Instant,
        frame_pacer::{MAX_YIELD_SLICE, MIN_POLL_INTERVAL},
    };

    use super::common::{SharedClock, TimedPolls, assert_poll_cadence};

    #[test]
    fn test_session_runs_for_duration() {
        let now = Cell::new(1_000);
        let mut clock = SharedClock { now_ms: &now };
        let mut polls = TimedPolls {
            clock: &now,
            polls: Vec::new(),
        };

        let mut pacer = FramePacer::new(&mut clock, &mut polls, Duration::from_millis(300));
        assert_eq!(pacer.started_at(), Instant::from_millis(1_000));
        assert_eq!(pacer.duration(), Duration::from_millis(300));

        let mut frames = 0;
        while pacer.is_running() {
            frames += 1;
            pacer.wait(Duration::from_millis(100));
        }

        assert_eq!(frames, 3);
        assert_eq!(pacer.elapsed(), Duration::from_millis(300));
    }

    #[test]
    fn test_long_hold_is_sliced() {
        let now = Cell::new(0);
        let mut clock = SharedClock { now_ms: &now };
        let mut polls = TimedPolls {
            clock: &now,
            polls: Vec::new(),
        };

        let mut pacer = FramePacer::new(&mut clock, &mut polls, Duration::from_millis(10_000));
        pacer.wait(Duration::from_millis(600));
        drop(pacer);

        assert_eq!(now.get(), 600);
        assert_eq!(polls.polls, vec![100, 200, 300, 400, 500, 600]);
    }

    #[test]
    fn test_fast_frames_poll_at_most_every_min_interval() {
        let now = Cell::new(0);
        let mut clock = SharedClock { now_ms: &now };
        let mut polls = TimedPolls {
            clock: &now,
            polls: Vec::new(),
        };

        let mut pacer = FramePacer::new(&mut clock, &mut polls, Duration::from_millis(1_000));
        while pacer.is_running() {
            pacer.wait(Duration::from_millis(5));
        }
        drop(pacer);

        assert_eq!(polls.polls.first(), Some(&20));
        assert_poll_cadence(
            &polls.polls,
            MIN_POLL_INTERVAL.as_millis(),
            MAX_YIELD_SLICE.as_millis(),
        );
    }

    #[test]
    fn test_unbounded_session_never_expires() {
        let now = Cell::new(0);
        let mut clock = SharedClock { now_ms: &now };
        let mut polls = TimedPolls {
            clock: &now,
            polls: Vec::new(),
        };

        let mut pacer = FramePacer::unbounded(&mut clock, &mut polls);
        assert_eq!(pacer.duration(), Duration::MAX);
        pacer.wait(Duration::from_millis(3_600_000));
        assert!(pacer.is_running());
    }
}
