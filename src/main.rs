mod config;
mod domain;
mod infrastructure;
mod ui;

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use config::Preferences;
use domain::audio_service::AudioService;
use domain::browser_service::BrowserLauncher;
use domain::clipboard_service::ClipboardService;
use domain::deeplink;
use domain::display_service::DisplayService;
use domain::models::{LaunchArguments, NotificationKind};
use domain::notification_service::NotificationService;
use domain::stepper::Direction;
use infrastructure::audio_helper::AudioHelper;
use infrastructure::browser_spawner::BrowserSpawner;
use infrastructure::desktop_notifier::{DesktopNotifier, StderrNotifier};
use infrastructure::display_helper::DisplayHelper;
use infrastructure::wayland_clipboard::WaylandClipboard;
use ui::mixer::MixerAction;

#[derive(Parser)]
#[command(
    name = "quickcast",
    version,
    about = "Quick desktop actions: display brightness, volume mixer, incognito browser"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// List displays with current brightness
    Displays,
    /// Step display brightness up or down
    Brightness {
        /// Device key, as shown by `displays`
        device: String,
        #[arg(value_enum)]
        action: StepAction,
    },
    /// List audio sessions
    Mixer,
    /// Step session volume or toggle mute
    Volume {
        /// Process id, as shown by `mixer`
        pid: u32,
        #[arg(value_enum)]
        action: VolumeAction,
    },
    /// Open a URL in a private browser window
    OpenIncognito {
        /// Target URL; falls back to the clipboard when omitted
        #[arg(long)]
        url: Option<String>,
        /// Browser identifier: chrome, brave, edge, firefox, opera
        #[arg(long)]
        browser: Option<String>,
        /// Deep link payload (quickcast://open-incognito?...)
        #[arg(long)]
        deeplink: Option<String>,
    },
    /// Generate a shareable deep link and copy it to the clipboard
    MakeDeeplink {
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        browser: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StepAction {
    Up,
    Down,
}

impl StepAction {
    fn direction(self) -> Direction {
        match self {
            StepAction::Up => Direction::Increase,
            StepAction::Down => Direction::Decrease,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VolumeAction {
    Up,
    Down,
    Mute,
}

fn main() {
    let cli = Cli::parse();
    let preferences = Preferences::load();

    let displays: Arc<dyn DisplayService> =
        Arc::new(DisplayHelper::new(&preferences.display_helper));
    let audio: Arc<dyn AudioService> = Arc::new(AudioHelper::new(&preferences.audio_helper));
    let launcher: Arc<dyn BrowserLauncher> = Arc::new(BrowserSpawner);
    let clipboard: Arc<dyn ClipboardService> = Arc::new(WaylandClipboard);
    let notifier: Arc<dyn NotificationService> = build_notifier();

    match cli.command {
        CliCommand::Displays => ui::displays::list_displays(&displays),
        CliCommand::Brightness { device, action } => {
            ui::displays::adjust_brightness(&displays, &notifier, &device, action.direction());
        }
        CliCommand::Mixer => ui::mixer::list_sessions(&audio),
        CliCommand::Volume { pid, action } => {
            let action = match action {
                VolumeAction::Up => MixerAction::Step(Direction::Increase),
                VolumeAction::Down => MixerAction::Step(Direction::Decrease),
                VolumeAction::Mute => MixerAction::ToggleMute,
            };
            ui::mixer::run_mixer_action(&audio, &notifier, pid, action);
        }
        CliCommand::OpenIncognito {
            url,
            browser,
            deeplink: payload,
        } => {
            let context = match payload.as_deref().map(deeplink::parse) {
                None => None,
                Some(Ok(context)) => Some(context),
                Some(Err(e)) => {
                    eprintln!("[Incognito] ✗ {}", e);
                    if let Err(e) =
                        notifier.notify("Incognito", "Invalid deeplink", NotificationKind::Failure)
                    {
                        eprintln!("[Notify] ✗ {}", e);
                    }
                    return;
                }
            };
            let args = LaunchArguments { url, browser };
            ui::incognito::open_incognito(&launcher, &clipboard, &notifier, &args, context.as_ref());
        }
        CliCommand::MakeDeeplink { url, browser } => {
            ui::incognito::make_deeplink(&clipboard, &notifier, url.as_deref(), browser.as_deref());
        }
    }
}

fn build_notifier() -> Arc<dyn NotificationService> {
    match DesktopNotifier::new() {
        Ok(notifier) => Arc::new(notifier),
        Err(e) => {
            eprintln!("[Notify] ✗ {}, falling back to stderr", e);
            Arc::new(StderrNotifier)
        }
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod flow_tests;
