use super::*;
use crate::sequencer::PhraseList;
use std::time::Duration;
use tokio::time::{sleep, sleep_until, timeout};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn config(phrases: &[&str], typing: u64, erasing: u64, hold: u64, blink: u64) -> SequencerConfig {
    SequencerConfig {
        typing_interval: ms(typing),
        erasing_interval: ms(erasing),
        hold: ms(hold),
        cursor_blink: ms(blink),
        ..SequencerConfig::new(PhraseList::new(phrases.iter().copied()).unwrap())
    }
}

#[tokio::test(start_paused = true)]
async fn drives_hi_go_timeline() {
    let start = Instant::now();
    let anim = Animation::start(config(&["Hi", "Go"], 10, 5, 100, 60_000)).unwrap();

    let checks = [
        (0, ""),
        (11, "H"),
        (21, "Hi"),
        (119, "Hi"),
        (121, "Hi"),
        (126, "H"),
        (131, ""),
        (141, "G"),
        (151, "Go"),
    ];
    for (t, expected) in checks {
        sleep_until(start + ms(t)).await;
        assert_eq!(anim.snapshot().text, expected, "at t={t}");
    }
    assert!(anim.is_running());
}

#[tokio::test(start_paused = true)]
async fn subscriber_sees_first_tick_after_typing_interval() {
    let start = Instant::now();
    let anim = Animation::start(config(&["Hi"], 10, 5, 100, 60_000)).unwrap();
    let mut rx = anim.subscribe();

    rx.changed().await.unwrap();
    assert_eq!(Instant::now() - start, ms(10));
    assert_eq!(rx.borrow_and_update().text, "H");

    rx.changed().await.unwrap();
    assert_eq!(Instant::now() - start, ms(20));
    assert_eq!(rx.borrow_and_update().text, "Hi");

    // Hold produces no text change; next change is the first erase.
    rx.changed().await.unwrap();
    assert_eq!(Instant::now() - start, ms(125));
    assert_eq!(rx.borrow_and_update().text, "H");
}

#[tokio::test(start_paused = true)]
async fn cursor_toggles_on_its_own_period() {
    let start = Instant::now();
    let anim = Animation::start(config(&["abc", "de"], 13, 7, 41, 70)).unwrap();
    assert!(anim.snapshot().cursor_visible);

    for k in 0..20u64 {
        sleep_until(start + ms(k * 70 + 1)).await;
        assert_eq!(anim.snapshot().cursor_visible, k % 2 == 0, "after {k} blink periods");
    }
}

#[tokio::test(start_paused = true)]
async fn cursor_blink_does_not_touch_text() {
    let start = Instant::now();
    let anim = Animation::start(config(&["Hi"], 1_000, 1_000, 1_000, 100)).unwrap();

    sleep_until(start + ms(950)).await;
    let snap = anim.snapshot();
    assert_eq!(snap.text, "");
    assert!(!snap.cursor_visible);
}

#[tokio::test(start_paused = true)]
async fn stop_freezes_snapshot_and_closes_channel() {
    let mut anim = Animation::start(config(&["Hi"], 10, 5, 100, 30)).unwrap();
    let mut rx = anim.subscribe();

    sleep(ms(11)).await;
    assert_eq!(anim.snapshot().text, "H");

    anim.stop().await;
    assert!(!anim.is_running());
    let frozen = anim.snapshot();

    sleep(ms(1_000)).await;
    assert_eq!(anim.snapshot(), frozen);

    let _ = rx.borrow_and_update();
    assert!(rx.changed().await.is_err());

    // Second stop is a no-op.
    anim.stop().await;
}

#[tokio::test(start_paused = true)]
async fn drop_aborts_task() {
    let anim = Animation::start(config(&["Hi"], 10, 5, 100, 30)).unwrap();
    let mut rx = anim.subscribe();
    drop(anim);

    let closed = timeout(ms(1_000), async {
        loop {
            if rx.changed().await.is_err() {
                break;
            }
        }
    })
    .await;
    assert!(closed.is_ok(), "sender should be dropped with the task");
}

#[tokio::test(start_paused = true)]
async fn single_empty_phrase_keeps_running() {
    let anim = Animation::start(config(&[""], 10, 5, 100, 60_000)).unwrap();
    sleep(ms(10_000)).await;
    assert!(anim.is_running());
    assert_eq!(anim.snapshot().text, "");
}

#[tokio::test(start_paused = true)]
async fn article_fix_is_applied_to_published_snapshots() {
    let start = Instant::now();
    let mut cfg = config(&["I am a owl"], 10, 5, 100, 60_000);
    cfg.fix_articles = true;
    let anim = Animation::start(cfg).unwrap();

    sleep_until(start + ms(61)).await;
    assert_eq!(anim.snapshot().text, "I am a");
    sleep_until(start + ms(81)).await;
    assert_eq!(anim.snapshot().text, "I am an o");
    sleep_until(start + ms(101)).await;
    assert_eq!(anim.snapshot().text, "I am an owl");
}

#[test]
fn invalid_config_fails_without_spawning() {
    // No runtime here: reaching `tokio::spawn` would panic.
    let err = Animation::start(config(&["Hi"], 0, 5, 100, 530)).err().unwrap();
    assert_eq!(err, SequencerError::ZeroDuration { field: "typing_interval" });
}
