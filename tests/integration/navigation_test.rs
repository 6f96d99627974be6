//! Integration tests for chapter navigation over saved pages

use chapnav::chapters::{ChapterCollector, ChapterNavigator, Direction, JumpAction};
use chapnav::document::HtmlPage;
use chapnav::hotkeys::{self, FocusTarget, KeyEvent, KeyOutcome};
use chapnav::playback::{PlaybackEngine, SimulatedPlayer};
use chapnav::Config;

use super::helpers::fixture;

fn watch_page() -> HtmlPage {
    HtmlPage::load(&fixture("watch_page.html"), "a")
        .unwrap()
        .with_base_url("https://www.youtube.com")
        .unwrap()
}

#[test]
fn timeline_from_description_and_comments() {
    let page = watch_page();
    let config = Config::default();

    let timeline = ChapterCollector::new(&page, &config.collector).collect();
    let labels: Vec<&str> = timeline.entries().iter().map(|e| e.label.as_str()).collect();
    let seconds: Vec<u64> = timeline.entries().iter().map(|e| e.seconds).collect();

    // 02:30 in the comments duplicates the description's 2:30; 5:55 is
    // outside every chapter container
    assert_eq!(labels, vec!["0:00", "1:05", "2:30", "10:00"]);
    assert_eq!(seconds, vec![0, 65, 150, 600]);
}

#[test]
fn repeated_collection_is_identical() {
    let page = watch_page();
    let config = Config::default();
    let collector = ChapterCollector::new(&page, &config.collector);

    assert_eq!(collector.collect(), collector.collect());
}

#[test]
fn walking_forward_visits_every_chapter() {
    let page = watch_page();
    let config = Config::default();
    let mut player = SimulatedPlayer::playing_at(0.0);

    let mut visited = Vec::new();
    {
        let mut navigator = ChapterNavigator::new(&page, &config).with_player(&mut player);
        while let Some(jump) = navigator.handle_detailed(Direction::Next) {
            visited.push(jump.seconds);
        }
    }

    assert_eq!(visited, vec![65, 150, 600]);
    assert_eq!(player.current_time(), 600.01);
}

#[test]
fn walking_backward_visits_every_chapter() {
    let page = watch_page();
    let config = Config::default();
    let mut player = SimulatedPlayer::playing_at(700.0);

    let mut visited = Vec::new();
    let mut navigator = ChapterNavigator::new(&page, &config).with_player(&mut player);
    while let Some(jump) = navigator.handle_detailed(Direction::Prev) {
        visited.push(jump.seconds);
    }

    assert_eq!(visited, vec![600, 150, 65, 0]);
}

#[test]
fn snapshot_navigation_follows_addresses() {
    let page = watch_page();
    let config = Config::default();

    // Time display reads 1:10
    let jump = ChapterNavigator::new(&page, &config)
        .handle_detailed(Direction::Prev)
        .unwrap();

    assert_eq!(jump.seconds, 65);
    assert_eq!(
        jump.action,
        JumpAction::Followed {
            address: "https://www.youtube.com/watch?v=abc123&t=65s".to_string()
        }
    );
    assert_eq!(
        page.followed(),
        vec!["https://www.youtube.com/watch?v=abc123&t=65s"]
    );
}

#[test]
fn fallback_scan_when_no_container_exists() {
    let page = HtmlPage::load(&fixture("no_containers.html"), "a").unwrap();
    let config = Config::default();

    let timeline = ChapterCollector::new(&page, &config.collector).collect();
    let seconds: Vec<u64> = timeline.entries().iter().map(|e| e.seconds).collect();
    assert_eq!(seconds, vec![15, 45]);

    // Time display reads 0:20
    assert!(ChapterNavigator::new(&page, &config).handle(Direction::Next));
    assert_eq!(
        page.followed(),
        vec!["https://www.youtube.com/watch?v=emb&t=45s"]
    );
}

#[test]
fn page_without_chapters_never_transitions() {
    let page = HtmlPage::load(&fixture("no_chapters.html"), "a").unwrap();
    let config = Config::default();
    let mut player = SimulatedPlayer::paused_at(42.0);

    let mut navigator = ChapterNavigator::new(&page, &config).with_player(&mut player);
    assert!(!navigator.handle(Direction::Next));
    assert!(!navigator.handle(Direction::Prev));

    assert!(player.seeks().is_empty());
    assert!(page.followed().is_empty());
}

#[test]
fn hotkey_dispatch_over_snapshot() {
    let page = watch_page();
    let config = Config::default();
    let mut player = SimulatedPlayer::paused_at(150.0);
    let mut navigator = ChapterNavigator::new(&page, &config).with_player(&mut player);

    let prev = dispatch_key(&mut navigator, &config, "p", FocusTarget::Body);
    let typing = dispatch_key(&mut navigator, &config, "p", FocusTarget::Input);

    assert_eq!(prev, KeyOutcome::Handled);
    assert_eq!(typing, KeyOutcome::PassThrough);
    assert_eq!(player.seeks(), &[65.01]);
    assert!(!player.is_paused());
}

fn dispatch_key(
    navigator: &mut ChapterNavigator<'_, HtmlPage>,
    config: &Config,
    key: &str,
    focus: FocusTarget,
) -> KeyOutcome {
    hotkeys::dispatch(&KeyEvent::plain(key), focus, &config.keys, navigator)
}
