#[cfg(test)]
mod main_test {
    use crate::history::interface::HistoryStore;
    use crate::history::record::DisposalRecord;
    use crate::smart_bin::core::{Event, HistoryView, Notice, Phase};
    use crate::smart_bin::tests::fixture::{jpeg_bytes, Fixture};

    fn submit(f: &Fixture, location: &str) {
        f.smart_bin
            .dispatch(Event::LocationChanged(location.to_string()));
        f.smart_bin.dispatch(Event::ImageUploaded {
            name: "bottle.jpg".to_string(),
            bytes: jpeg_bytes(),
        });
        f.smart_bin.dispatch(Event::Submitted);
    }

    #[test]
    fn test_submission_logs_one_record() {
        let f = Fixture::new();

        submit(&f, "Block A");

        let records = f.history.read_all().unwrap().unwrap();
        assert_eq!(
            records,
            vec![DisposalRecord {
                timestamp: "2026-03-14 09:05:07".to_string(),
                location: "Block A".to_string(),
                waste_type: "plastic".to_string(),
                confidence: "92.31%".to_string(),
            }]
        );

        let model = f.smart_bin.model();
        assert!(matches!(
            model.phase,
            Phase::Logged {
                write_error: None,
                ..
            }
        ));
        assert_eq!(
            model.notice,
            Some(Notice::Success("Entry saved successfully".to_string()))
        );
        assert!(!f.bin_is_open());
    }

    #[test]
    fn test_actuation_pauses_follow_declared_timings() {
        let f = Fixture::new();

        submit(&f, "Block A");

        let timings = &f.config.timings;
        assert_eq!(
            f.sleeper.slept(),
            vec![timings.analyzing, timings.activating, timings.opened]
        );
    }

    #[test]
    fn test_interrupted_pause_is_logged_and_sequence_continues() {
        let f = Fixture::new();
        f.sleeper.set_fail(true);

        submit(&f, "Block A");

        assert_eq!(f.history.read_all().unwrap().unwrap().len(), 1);
        let sleep_errors: Vec<String> = f
            .logger
            .errors()
            .into_iter()
            .filter(|line| line.contains("Sleeping") && line.contains("sleep interrupted"))
            .collect();
        assert_eq!(sleep_errors.len(), 3);
    }

    #[test]
    fn test_location_is_kept_verbatim() {
        let f = Fixture::new();

        submit(&f, "  Block A, gate 2 ");

        let records = f.history.read_all().unwrap().unwrap();
        assert_eq!(records[0].location, "  Block A, gate 2 ");
    }

    #[test]
    fn test_blank_location_never_logs() {
        let f = Fixture::new();

        submit(&f, "   ");

        assert_eq!(f.history.read_all().unwrap(), None);
        assert!(f.sleeper.slept().is_empty());
        assert!(matches!(
            f.smart_bin.model().notice,
            Some(Notice::Warning(_))
        ));
    }

    #[test]
    fn test_undecodable_image_logs_nothing() {
        let f = Fixture::new();
        f.smart_bin
            .dispatch(Event::LocationChanged("Block A".to_string()));
        f.smart_bin.dispatch(Event::ImageUploaded {
            name: "broken.jpg".to_string(),
            bytes: vec![0, 1, 2, 3],
        });

        f.smart_bin.dispatch(Event::Submitted);

        let model = f.smart_bin.model();
        assert_eq!(model.phase, Phase::Idle);
        assert!(matches!(model.notice, Some(Notice::Error(_))));
        assert_eq!(f.history.read_all().unwrap(), None);
    }

    #[test]
    fn test_write_failure_keeps_result_on_screen() {
        let f = Fixture::new();
        f.history.set_fail_writes(true);

        submit(&f, "Block A");

        let model = f.smart_bin.model();
        match model.phase {
            Phase::Logged {
                outcome,
                write_error,
            } => {
                assert_eq!(outcome.classification.label, "plastic");
                assert!(write_error.is_some());
            }
            _ => panic!("Unexpected phase"),
        }
        assert!(matches!(model.notice, Some(Notice::Error(_))));
    }

    #[test]
    fn test_history_metrics_grow_by_one() {
        let f = Fixture::new();
        f.smart_bin.dispatch(Event::HistoryToggled(true));
        assert_eq!(f.smart_bin.model().history, HistoryView::Empty);

        submit(&f, "Block A");

        match f.smart_bin.model().history {
            HistoryView::Shown(summary) => {
                assert_eq!(summary.total_entries, 1);
                assert_eq!(summary.waste_counts, vec![("plastic".to_string(), 1)]);
            }
            other => panic!("Unexpected history view: {:?}", other),
        }

        f.smart_bin.dispatch(Event::Submitted);

        match f.smart_bin.model().history {
            HistoryView::Shown(summary) => {
                assert_eq!(summary.total_entries, 2);
                assert_eq!(summary.unique_locations, 1);
            }
            other => panic!("Unexpected history view: {:?}", other),
        }
    }

    #[test]
    fn test_clear_history() {
        let f = Fixture::new();
        submit(&f, "Block A");
        f.smart_bin.dispatch(Event::HistoryToggled(true));

        f.smart_bin.dispatch(Event::ClearHistoryRequested);

        assert_eq!(f.history.read_all().unwrap(), None);
        assert_eq!(f.smart_bin.model().history, HistoryView::Empty);
    }

    #[test]
    fn test_malformed_history_is_reported() {
        let f = Fixture::new();
        f.history.set_malformed(true);

        f.smart_bin.dispatch(Event::HistoryToggled(true));

        assert!(matches!(
            f.smart_bin.model().history,
            HistoryView::Failed(_)
        ));
    }

    #[test]
    fn test_unreadable_history_can_be_cleared() {
        let f = Fixture::new();
        f.history.set_malformed(true);
        f.smart_bin.dispatch(Event::HistoryToggled(true));

        f.smart_bin.dispatch(Event::ClearHistoryRequested);

        let model = f.smart_bin.model();
        assert_eq!(model.history, HistoryView::Empty);
        assert_eq!(
            model.notice,
            Some(Notice::Success("History cleared successfully!".to_string()))
        );
    }

    #[test]
    fn test_camera_capture_can_be_submitted() {
        let f = Fixture::new();
        f.smart_bin
            .dispatch(Event::LocationChanged("Block B".to_string()));

        f.smart_bin.dispatch(Event::CaptureRequested);
        f.smart_bin.dispatch(Event::Submitted);

        let records = f.history.read_all().unwrap().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, "Block B");
    }
}
