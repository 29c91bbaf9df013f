mod common;

mod tests {
    use core::cell::Cell;

    use shakecube_matrix::{
        AnimationId, AnimationScheduler, CubeConfig, Duration, MatrixDisplay, Selection,
    };

    use super::common::{RecordingMatrix, SharedClock, TimedPolls, assert_poll_cadence};

    #[test]
    fn test_choice_is_uniform() {
        let mut scheduler = AnimationScheduler::new(0x5EED, &CubeConfig::DEFAULT);
        let mut counts = [0u32; 12];
        let rounds = 10_000;

        for _ in 0..rounds {
            let selection = scheduler.choose();
            assert!(selection.id.is_pooled());
            counts[selection.id.as_raw() as usize] += 1;
        }

        let expected = rounds / AnimationId::POOL.len() as u32;
        for id in AnimationId::POOL {
            let count = counts[id.as_raw() as usize];
            assert!(
                count.abs_diff(expected) < expected / 5,
                "{} chosen {count} times, expected about {expected}",
                id.as_str()
            );
        }
        assert_eq!(counts[AnimationId::Hyperspace.as_raw() as usize], 0);
    }

    #[test]
    fn test_duration_range() {
        let mut scheduler = AnimationScheduler::new(42, &CubeConfig::DEFAULT);
        let mut shortest = u64::MAX;
        let mut longest = 0;

        for _ in 0..10_000 {
            let ms = scheduler.choose().duration.as_millis();
            assert!((5_000..=10_000).contains(&ms), "duration {ms} out of range");
            shortest = shortest.min(ms);
            longest = longest.max(ms);
        }
        assert!(shortest < 5_100);
        assert!(longest > 9_900);
    }

    #[test]
    fn test_every_animation_plays_for_its_duration() {
        for id in AnimationId::POOL {
            let now = Cell::new(0);
            let mut clock = SharedClock { now_ms: &now };
            let mut polls = TimedPolls {
                clock: &now,
                polls: Vec::new(),
            };
            let mut display = MatrixDisplay::new(RecordingMatrix::default(), 8);
            let mut scheduler = AnimationScheduler::new(u64::from(id.as_raw()), &CubeConfig::DEFAULT);

            let selection = Selection {
                id,
                duration: Duration::from_millis(5_000),
            };
            scheduler.play(selection, &mut display, &mut clock, &mut polls);

            let elapsed = now.get();
            assert!(
                (5_000..5_000 + 600).contains(&elapsed),
                "{} ran for {elapsed} ms",
                id.as_str()
            );
            assert!(display.driver().panel.is_empty(), "{} left pixels on", id.as_str());
            assert_eq!(display.brightness(), 8);
            assert!(!polls.polls.is_empty());
            assert_poll_cadence(&polls.polls, 20, 150);
        }
    }

    #[test]
    fn test_boot_sequence_ends_dark() {
        let now = Cell::new(0);
        let mut clock = SharedClock { now_ms: &now };
        let mut polls = TimedPolls {
            clock: &now,
            polls: Vec::new(),
        };
        let mut display = MatrixDisplay::new(RecordingMatrix::default(), 8);
        let mut scheduler = AnimationScheduler::new(1, &CubeConfig::DEFAULT);

        scheduler.play_boot(&mut display, &mut clock, &mut polls);

        // 50 flight frames from 40 ms down to the 5 ms floor, then the flash
        let flight: u64 = (0..50u64).map(|frame| 40u64.saturating_sub(frame).max(5)).sum();
        assert_eq!(now.get(), flight + 150);
        assert!(display.driver().panel.is_empty());
        assert!(display.driver().row_writes.iter().any(|&(_, bits)| bits == 0xFF));
        assert_poll_cadence(&polls.polls, 20, 150);
    }
}
