use parking_lot::Mutex;

use crate::config::Preferences;
use crate::domain::audio_service::AudioService;
use crate::domain::browser_service::BrowserLauncher;
use crate::domain::clipboard_service::ClipboardService;
use crate::domain::deeplink;
use crate::domain::display_service::DisplayService;
use crate::domain::models::{AudioSession, Browser, Display, LaunchArguments, LaunchContext, LaunchOptions};
use crate::domain::stepper::Direction;
use crate::ui::displays::apply_brightness_step;
use crate::ui::incognito::{build_deeplink, run_launch_flow, LaunchOutcome};
use crate::ui::mixer::{apply_volume_step, fetch_sessions, toggle_session_mute};

struct MockAudio {
    sessions: Vec<AudioSession>,
    volume_calls: Mutex<Vec<(u32, i32)>>,
    mute_calls: Mutex<Vec<(u32, bool)>>,
}

impl MockAudio {
    fn new(sessions: Vec<AudioSession>) -> Self {
        Self {
            sessions,
            volume_calls: Mutex::new(Vec::new()),
            mute_calls: Mutex::new(Vec::new()),
        }
    }
}

impl AudioService for MockAudio {
    fn list_sessions(&self) -> Vec<AudioSession> {
        self.sessions.clone()
    }

    fn set_app_volume(&self, pid: u32, percent: i32) -> Result<(), String> {
        self.volume_calls.lock().push((pid, percent));
        Ok(())
    }

    fn set_app_mute(&self, pid: u32, muted: bool) -> Result<(), String> {
        self.mute_calls.lock().push((pid, muted));
        Ok(())
    }
}

struct MockDisplays {
    brightness: f64,
    set_calls: Mutex<Vec<(String, i32)>>,
}

impl MockDisplays {
    fn new(brightness: f64) -> Self {
        Self {
            brightness,
            set_calls: Mutex::new(Vec::new()),
        }
    }
}

impl DisplayService for MockDisplays {
    fn list_displays(&self) -> Vec<Display> {
        Vec::new()
    }

    fn get_brightness(&self, _device: &str) -> Result<f64, String> {
        Ok(self.brightness)
    }

    fn set_brightness(&self, device: &str, percent: i32) -> Result<(), String> {
        self.set_calls.lock().push((device.to_string(), percent));
        Ok(())
    }
}

struct MockLauncher {
    fail: bool,
    spawns: Mutex<Vec<(Browser, String, LaunchOptions)>>,
}

impl MockLauncher {
    fn new() -> Self {
        Self {
            fail: false,
            spawns: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            spawns: Mutex::new(Vec::new()),
        }
    }
}

impl BrowserLauncher for MockLauncher {
    fn spawn(&self, browser: Browser, url: &str, options: LaunchOptions) -> Result<(), String> {
        if self.fail {
            return Err("Failed to spawn google-chrome: No such file".to_string());
        }
        self.spawns.lock().push((browser, url.to_string(), options));
        Ok(())
    }
}

struct MockClipboard {
    text: Option<String>,
    reads: Mutex<usize>,
}

impl MockClipboard {
    fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            reads: Mutex::new(0),
        }
    }

    fn empty() -> Self {
        Self {
            text: None,
            reads: Mutex::new(0),
        }
    }

    fn read_count(&self) -> usize {
        *self.reads.lock()
    }
}

impl ClipboardService for MockClipboard {
    fn read_text(&self) -> Option<String> {
        *self.reads.lock() += 1;
        self.text.clone()
    }

    fn copy_text(&self, _text: &str) -> Result<(), String> {
        Ok(())
    }
}

fn session(pid: u32, volume: f64, muted: bool, app_name: &str) -> AudioSession {
    AudioSession {
        pid,
        app_name: app_name.to_string(),
        app_icon: String::new(),
        path: String::new(),
        volume,
        muted,
    }
}

fn args(url: Option<&str>, browser: Option<&str>) -> LaunchArguments {
    LaunchArguments {
        url: url.map(str::to_string),
        browser: browser.map(str::to_string),
    }
}

fn context(url: Option<&str>, browser: Option<&str>) -> LaunchContext {
    LaunchContext {
        url: url.map(str::to_string),
        browser: browser.map(str::to_string),
    }
}

#[test]
fn volume_increase_applies_step_and_never_touches_mute() {
    let audio = MockAudio::new(vec![session(10, 0.40, false, "x")]);

    let sessions = fetch_sessions(&audio);
    let target = apply_volume_step(&audio, &sessions[0], 5, Direction::Increase).expect("adjust");

    assert_eq!(target, 45);
    assert_eq!(audio.volume_calls.lock().as_slice(), &[(10, 45)]);
    assert!(audio.mute_calls.lock().is_empty());
}

#[test]
fn volume_decrease_clamps_at_zero() {
    let audio = MockAudio::new(vec![session(10, 0.03, false, "x")]);

    let sessions = fetch_sessions(&audio);
    let target = apply_volume_step(&audio, &sessions[0], 5, Direction::Decrease).expect("adjust");

    assert_eq!(target, 0);
    assert_eq!(audio.volume_calls.lock().as_slice(), &[(10, 0)]);
}

#[test]
fn toggle_mute_flips_reported_state() {
    let audio = MockAudio::new(vec![session(10, 0.5, false, "x")]);

    let sessions = fetch_sessions(&audio);
    let muted = toggle_session_mute(&audio, &sessions[0]).expect("toggle");

    assert!(muted);
    assert_eq!(audio.mute_calls.lock().as_slice(), &[(10, true)]);
    assert!(audio.volume_calls.lock().is_empty());
}

#[test]
fn duplicate_sessions_keep_first_occurrence() {
    let audio = MockAudio::new(vec![
        session(1, 0.1, false, "first"),
        session(2, 0.2, false, "second"),
        session(1, 0.9, true, "duplicate"),
    ]);

    let sessions = fetch_sessions(&audio);

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].pid, 1);
    assert_eq!(sessions[0].app_name, "first");
    assert_eq!(sessions[1].pid, 2);
}

#[test]
fn brightness_decrease_from_full_lands_on_seventy() {
    let displays = MockDisplays::new(1.0);

    let target =
        apply_brightness_step(&displays, "DISPLAY1", 30, Direction::Decrease).expect("adjust");

    assert_eq!(target, 70);
    assert_eq!(
        displays.set_calls.lock().as_slice(),
        &[("DISPLAY1".to_string(), 70)]
    );
}

#[test]
fn brightness_increase_at_ceiling_is_idempotent() {
    let displays = MockDisplays::new(1.0);

    let target =
        apply_brightness_step(&displays, "DISPLAY1", 5, Direction::Increase).expect("adjust");

    assert_eq!(target, 100);
}

#[test]
fn deeplink_url_wins_over_argument_url() {
    let launcher = MockLauncher::new();
    let clipboard = MockClipboard::empty();
    let ctx = context(Some("first.example.com"), None);

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &Preferences::default(),
        &args(Some("second.example.com"), None),
        Some(&ctx),
    );

    assert!(matches!(outcome, LaunchOutcome::Opened { .. }));
    let spawns = launcher.spawns.lock();
    assert_eq!(spawns.len(), 1);
    assert_eq!(spawns[0].1, "https://first.example.com");
    // Запуск из deep link уходит в фон
    assert!(spawns[0].2.background);
}

#[test]
fn argument_url_is_normalized_and_opened_incognito() {
    let launcher = MockLauncher::new();
    let clipboard = MockClipboard::with_text("clipboard.example.com");

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &Preferences::default(),
        &args(Some("example.com"), None),
        None,
    );

    assert_eq!(
        outcome,
        LaunchOutcome::Opened {
            browser: Browser::Chrome,
            from_clipboard: false
        }
    );
    let spawns = launcher.spawns.lock();
    assert_eq!(spawns[0].0, Browser::Chrome);
    assert_eq!(spawns[0].1, "https://example.com");
    assert!(spawns[0].2.incognito);
    assert!(!spawns[0].2.background);
    // Аргумент нашёлся, буфер обмена не читался
    assert_eq!(clipboard.read_count(), 0);
}

#[test]
fn clipboard_fallback_for_direct_invocation() {
    let launcher = MockLauncher::new();
    let clipboard = MockClipboard::with_text("rust-lang.org");

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &Preferences::default(),
        &args(None, None),
        None,
    );

    assert_eq!(
        outcome,
        LaunchOutcome::Opened {
            browser: Browser::Chrome,
            from_clipboard: true
        }
    );
    assert_eq!(launcher.spawns.lock()[0].1, "https://rust-lang.org");
}

#[test]
fn clipboard_is_suppressed_for_deeplink_invocation() {
    let launcher = MockLauncher::new();
    let clipboard = MockClipboard::with_text("example.com");
    let ctx = context(None, None);

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &Preferences::default(),
        &args(None, None),
        Some(&ctx),
    );

    assert_eq!(outcome, LaunchOutcome::NoUrl);
    assert_eq!(clipboard.read_count(), 0);
    assert!(launcher.spawns.lock().is_empty());
}

#[test]
fn self_deeplink_in_arguments_short_circuits_launch() {
    let launcher = MockLauncher::new();
    let clipboard = MockClipboard::with_text("example.com");

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &Preferences::default(),
        &args(Some("quickcast://open-incognito?url=x"), None),
        None,
    );

    assert_eq!(outcome, LaunchOutcome::SelfLinkIgnored);
    assert!(launcher.spawns.lock().is_empty());
    assert_eq!(clipboard.read_count(), 0);
}

#[test]
fn self_deeplink_in_context_short_circuits_launch() {
    let launcher = MockLauncher::new();
    let clipboard = MockClipboard::empty();
    let ctx = context(Some("quickcast://open-incognito?url=x"), None);

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &Preferences::default(),
        &args(None, None),
        Some(&ctx),
    );

    assert_eq!(outcome, LaunchOutcome::SelfLinkIgnored);
    assert!(launcher.spawns.lock().is_empty());
}

#[test]
fn unsupported_browser_aborts_launch() {
    let launcher = MockLauncher::new();
    let clipboard = MockClipboard::empty();

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &Preferences::default(),
        &args(Some("example.com"), Some("safari")),
        None,
    );

    assert_eq!(
        outcome,
        LaunchOutcome::UnsupportedBrowser("Unsupported browser: safari".to_string())
    );
    assert!(launcher.spawns.lock().is_empty());
}

#[test]
fn configured_default_browser_is_used_when_not_given() {
    let launcher = MockLauncher::new();
    let clipboard = MockClipboard::empty();
    let preferences = Preferences {
        default_browser: Some("firefox".to_string()),
        ..Preferences::default()
    };

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &preferences,
        &args(Some("example.com"), None),
        None,
    );

    assert_eq!(
        outcome,
        LaunchOutcome::Opened {
            browser: Browser::Firefox,
            from_clipboard: false
        }
    );
}

#[test]
fn spawn_failure_is_reported_not_propagated() {
    let launcher = MockLauncher::failing();
    let clipboard = MockClipboard::empty();

    let outcome = run_launch_flow(
        &launcher,
        &clipboard,
        &Preferences::default(),
        &args(Some("example.com"), None),
        None,
    );

    assert!(matches!(outcome, LaunchOutcome::Failed(_)));
}

#[test]
fn generated_deeplink_round_trips_into_launch_context() {
    let preferences = Preferences::default();

    let link = build_deeplink(&preferences, Some("example.com"), Some("brave")).expect("build");
    let context = deeplink::parse(&link).expect("parse");

    assert_eq!(context.url.as_deref(), Some("https://example.com"));
    assert_eq!(context.browser.as_deref(), Some("brave"));
}

#[test]
fn deeplink_generation_requires_a_url() {
    let preferences = Preferences::default();

    assert_eq!(
        build_deeplink(&preferences, None, None),
        Err("URL is required".to_string())
    );
    assert_eq!(
        build_deeplink(&preferences, Some("   "), None),
        Err("URL is required".to_string())
    );
}

#[test]
fn deeplink_generation_uses_configured_default_browser() {
    let preferences = Preferences {
        default_browser: Some("edge".to_string()),
        ..Preferences::default()
    };

    let link = build_deeplink(&preferences, Some("example.com"), None).expect("build");
    let context = deeplink::parse(&link).expect("parse");

    assert_eq!(context.browser.as_deref(), Some("edge"));
}
