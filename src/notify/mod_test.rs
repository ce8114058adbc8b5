use super::*;
use crate::test_support::toasts;

const ALL: [Severity; 4] = [Severity::Info, Severity::Success, Severity::Warning, Severity::Error];

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn severity_names_round_trip() {
    for severity in ALL {
        assert_eq!(Severity::from_name(severity.as_str()), severity);
    }
}

#[test]
fn severity_unknown_name_falls_back_to_info() {
    assert_eq!(Severity::from_name("critical"), Severity::Info);
    assert_eq!(Severity::from_name(""), Severity::Info);
    assert_eq!(Severity::from_name("ERROR"), Severity::Info);
    assert_eq!(Severity::from("bogus"), Severity::Info);
}

#[test]
fn severity_presentations_are_distinct() {
    for (i, a) in ALL.iter().enumerate() {
        for (j, b) in ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.presentation(), b.presentation());
            }
        }
    }
}

#[test]
fn severity_presentation_matches_palette() {
    assert_eq!(Severity::Info.presentation().icon, "fas fa-info-circle");
    assert_eq!(Severity::Success.presentation().icon, "fas fa-check-circle");
    assert_eq!(Severity::Warning.presentation().icon, "fas fa-exclamation-triangle");
    assert_eq!(Severity::Error.presentation().icon, "fas fa-times-circle");
    assert!(Severity::Error.presentation().class.contains("bg-red-50"));
    assert!(Severity::Success.presentation().class.contains("bg-green-50"));
}

#[test]
fn severity_deserializes_lowercase() {
    let severity: Severity = serde_json::from_str("\"warning\"").unwrap();
    assert_eq!(severity, Severity::Warning);
}

// =============================================================
// show
// =============================================================

#[test]
fn show_mounts_with_matching_presentation() {
    for severity in ALL {
        let t = toasts();
        t.center.show("hello", severity);
        let mounted = t.surface.mounted();
        assert_eq!(mounted.len(), 1);
        assert_eq!(mounted[0].notification.severity, severity);
        assert_eq!(mounted[0].icon, severity.presentation().icon);
        assert!(mounted[0].class_name.starts_with(OVERLAY_CLASS));
        assert!(mounted[0].class_name.ends_with(severity.presentation().class));
        assert_eq!(mounted[0].phase, Phase::Shown);
    }
}

#[test]
fn show_unknown_name_uses_info_presentation() {
    let t = toasts();
    t.center.show("hi", Severity::from_name("purple"));
    assert_eq!(t.surface.mounted()[0].icon, "fas fa-info-circle");
}

#[test]
fn show_keeps_message_verbatim() {
    let t = toasts();
    t.center.info("<b>bold</b> & more");
    assert_eq!(t.surface.messages(Severity::Info), vec!["<b>bold</b> & more".to_owned()]);
}

#[test]
fn show_records_creation_time() {
    let t = toasts();
    t.scheduler.advance(Duration::from_millis(250));
    t.center.info("later");
    assert_eq!(t.surface.mounted()[0].notification.created_at, Duration::from_millis(250));
}

// =============================================================
// Lifecycle timing
// =============================================================

#[test]
fn notification_visible_through_display_period() {
    let t = toasts();
    t.center.info("x");
    t.scheduler.advance(Duration::from_millis(2999));
    assert_eq!(t.surface.len(), 1);
    assert_eq!(t.surface.mounted()[0].phase, Phase::Shown);
}

#[test]
fn notification_exits_at_display_end() {
    let t = toasts();
    t.center.info("x");
    t.scheduler.advance(Duration::from_millis(3000));
    assert_eq!(t.surface.len(), 1);
    assert_eq!(t.surface.mounted()[0].phase, Phase::Exiting);
}

#[test]
fn notification_still_mounted_during_exit() {
    let t = toasts();
    t.center.info("x");
    t.scheduler.advance(Duration::from_millis(3299));
    assert_eq!(t.surface.len(), 1);
}

#[test]
fn notification_removed_after_exit() {
    let t = toasts();
    t.center.info("x");
    t.scheduler.advance(Duration::from_millis(3300));
    assert!(t.surface.is_empty());
    assert_eq!(t.scheduler.pending(), 0);
}

#[test]
fn custom_timing_is_honored() {
    let surface = Rc::new(MemorySurface::new());
    let scheduler = Rc::new(crate::schedule::ManualScheduler::new());
    let timing = Timing { display: Duration::from_millis(100), exit: Duration::from_millis(10) };
    let center = NotificationCenter::new(surface.clone(), scheduler.clone(), timing);
    center.info("quick");

    scheduler.advance(Duration::from_millis(100));
    assert_eq!(surface.mounted()[0].phase, Phase::Exiting);
    scheduler.advance(Duration::from_millis(10));
    assert!(surface.is_empty());
}

// =============================================================
// Concurrency
// =============================================================

#[test]
fn concurrent_shows_stack_independently() {
    let t = toasts();
    for i in 0..25 {
        t.center.info(format!("n{i}"));
    }
    assert_eq!(t.surface.len(), 25);
    assert_eq!(t.scheduler.pending(), 25);

    let ids: std::collections::HashSet<_> = t.surface.mounted().iter().map(|m| m.notification.id).collect();
    assert_eq!(ids.len(), 25);

    t.scheduler.advance(Duration::from_millis(3300));
    assert!(t.surface.is_empty());
    assert_eq!(t.surface.total_mounted(), 25);
}

#[test]
fn staggered_shows_follow_their_own_timelines() {
    let t = toasts();
    t.center.info("first");
    t.scheduler.advance(Duration::from_millis(1000));
    t.center.error("second");

    t.scheduler.advance(Duration::from_millis(2300));
    assert_eq!(t.surface.messages(Severity::Info), Vec::<String>::new());
    assert_eq!(t.surface.messages(Severity::Error), vec!["second".to_owned()]);

    t.scheduler.advance(Duration::from_millis(1000));
    assert!(t.surface.is_empty());
}

#[test]
fn mount_order_is_call_order() {
    let t = toasts();
    t.center.info("a");
    t.center.success("b");
    t.center.error("c");
    let messages: Vec<_> = t.surface.mounted().into_iter().map(|m| m.notification.message).collect();
    assert_eq!(messages, vec!["a", "b", "c"]);
}

#[test]
fn clones_share_surface() {
    let t = toasts();
    let other = t.center.clone();
    t.center.info("one");
    other.info("two");
    assert_eq!(t.surface.len(), 2);
    assert_eq!(other.timing(), Timing::default());
}

// =============================================================
// Real timers
// =============================================================

#[cfg(feature = "native")]
#[tokio::test(start_paused = true)]
async fn tokio_scheduler_drives_full_lifecycle() {
    use crate::schedule::TokioScheduler;

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let surface = Rc::new(MemorySurface::new());
            let center = NotificationCenter::new(surface.clone(), Rc::new(TokioScheduler::new()), Timing::default());
            center.info("real");

            tokio::time::sleep(Duration::from_millis(2999)).await;
            assert_eq!(surface.mounted()[0].phase, Phase::Shown);

            tokio::time::sleep(Duration::from_millis(2)).await;
            assert_eq!(surface.mounted()[0].phase, Phase::Exiting);

            tokio::time::sleep(Duration::from_millis(300)).await;
            assert!(surface.is_empty());
        })
        .await;
}
