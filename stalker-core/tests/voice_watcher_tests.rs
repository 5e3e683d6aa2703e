// tests/voice_watcher_tests.rs

mod test_utils;

use stalker_common::models::notification::ClickAction;
use test_utils::{bodies, harness, settings_with_targets};

#[test]
fn test_join_notifies_once() {
    let h = harness(settings_with_targets("100"));
    h.plugin.activate().unwrap();

    h.host.join_voice("100", "C1");
    let shown = h.host.take_shown();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].body.ends_with("Click to join them."));
    assert_eq!(
        shown[0].body,
        "alice is in VC: General from Cats\nClick to join them."
    );
    assert_eq!(
        shown[0].on_click,
        ClickAction::JoinVoice {
            channel_id: "C1".into()
        }
    );

    // same state, another change event
    h.host.touch_voice();
    h.host.join_voice("200", "C1");
    assert!(bodies(&h).is_empty());
}

#[test]
fn test_startup_pass_reports_users_already_in_a_call() {
    let h = harness(settings_with_targets("100"));
    h.host.join_voice("100", "C2");

    h.plugin.activate().unwrap();
    assert_eq!(
        bodies(&h),
        vec!["alice is in VC: Late night\nClick to join them."]
    );

    h.host.touch_voice();
    assert!(bodies(&h).is_empty());
}

#[test]
fn test_switching_channels_is_not_a_join() {
    let h = harness(settings_with_targets("100"));
    h.plugin.activate().unwrap();

    h.host.join_voice("100", "C1");
    h.host.join_voice("100", "C2");
    assert_eq!(bodies(&h).len(), 1);
    assert_eq!(h.plugin.voice_watcher().last_states()["100"].channel_id, "C2");
}

#[test]
fn test_leave_and_rejoin_notifies_again() {
    let h = harness(settings_with_targets("100"));
    h.plugin.activate().unwrap();

    h.host.join_voice("100", "C1");
    h.host.leave_voice("100");
    assert!(h.plugin.voice_watcher().last_states().is_empty());
    h.host.join_voice("100", "C1");
    assert_eq!(bodies(&h).len(), 2);
}

#[test]
fn test_deactivation_keeps_voice_state() {
    let h = harness(settings_with_targets("100"));
    h.plugin.activate().unwrap();
    h.host.join_voice("100", "C1");
    assert_eq!(bodies(&h).len(), 1);

    h.plugin.deactivate();
    assert!(h.plugin.voice_watcher().last_states().contains_key("100"));

    // still in the same call at reactivation: already known, no repeat
    h.plugin.activate().unwrap();
    assert!(bodies(&h).is_empty());
}

#[test]
fn test_untrack_then_retrack_uses_full_replacement() {
    let h = harness(settings_with_targets("100"));
    h.plugin.activate().unwrap();
    h.host.join_voice("100", "C1");
    assert_eq!(bodies(&h).len(), 1);

    h.plugin.toggle_target("100");
    // old state survives until the next pass
    assert!(h.plugin.voice_watcher().last_states().contains_key("100"));

    h.plugin.toggle_target("100");
    h.host.touch_voice();
    // still present before and after: nothing new
    assert!(bodies(&h).is_empty());

    h.plugin.toggle_target("100");
    h.host.touch_voice();
    assert!(h.plugin.voice_watcher().last_states().is_empty());

    h.plugin.toggle_target("100");
    h.host.touch_voice();
    // absent on the previous pass, present now
    assert_eq!(bodies(&h).len(), 1);
}

#[test]
fn test_untracked_users_are_ignored() {
    let h = harness(settings_with_targets("100"));
    h.plugin.activate().unwrap();

    h.host.join_voice("200", "C1");
    assert!(bodies(&h).is_empty());
    assert!(h.plugin.voice_watcher().last_states().is_empty());
}

#[test]
fn test_unknown_channel_skips_notification_but_records_state() {
    let h = harness(settings_with_targets("100"));
    h.plugin.activate().unwrap();

    h.host.join_voice("100", "C404");
    assert!(bodies(&h).is_empty());
    assert!(h.plugin.voice_watcher().last_states().contains_key("100"));
}

#[test]
fn test_duplicate_targets_join_once() {
    let h = harness(settings_with_targets("100, 100"));
    h.plugin.activate().unwrap();

    h.host.join_voice("100", "C1");
    assert_eq!(bodies(&h).len(), 1);
}
