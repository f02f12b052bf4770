use std::sync::Arc;

use crate::config::Preferences;
use crate::domain::browser_service::BrowserLauncher;
use crate::domain::clipboard_service::ClipboardService;
use crate::domain::deeplink;
use crate::domain::models::{
    Browser, LaunchArguments, LaunchContext, LaunchOptions, NotificationKind,
};
use crate::domain::notification_service::NotificationService;
use crate::domain::resolver::{self, Source};

/// Исход сценария запуска инкогнито
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Браузер запущен
    Opened {
        browser: Browser,
        from_clipboard: bool,
    },
    /// Ссылка на собственную схему проигнорирована
    SelfLinkIgnored,
    /// Ни один источник не дал валидного URL
    NoUrl,
    /// Идентификатор браузера вне поддерживаемого набора
    UnsupportedBrowser(String),
    /// Сбой запуска браузера
    Failed(String),
}

/// Сценарий запуска: защита от рекурсии → выбор браузера и URL → запуск
pub fn run_launch_flow(
    launcher: &dyn BrowserLauncher,
    clipboard: &dyn ClipboardService,
    preferences: &Preferences,
    args: &LaunchArguments,
    context: Option<&LaunchContext>,
) -> LaunchOutcome {
    // Защита от рекурсии: сырые значения проверяются до разрешения источников
    let possible_url = args
        .url
        .as_deref()
        .or_else(|| context.and_then(|c| c.url.as_deref()));
    if possible_url.map(deeplink::is_self_link).unwrap_or(false) {
        return LaunchOutcome::SelfLinkIgnored;
    }

    let browser_id =
        resolver::resolve_browser(context, args, preferences.default_browser.as_deref());

    let resolved = match resolver::resolve_url(context, args, || clipboard.read_text()) {
        Some(resolved) => resolved,
        None => return LaunchOutcome::NoUrl,
    };
    let url = resolver::normalize_url(&resolved.value);

    let browser = match Browser::parse(&browser_id) {
        Ok(browser) => browser,
        Err(e) => return LaunchOutcome::UnsupportedBrowser(e),
    };

    let options = LaunchOptions {
        incognito: true,
        background: context.is_some(),
    };
    match launcher.spawn(browser, &url, options) {
        Ok(()) => LaunchOutcome::Opened {
            browser,
            from_clipboard: resolved.source == Source::Clipboard,
        },
        Err(e) => LaunchOutcome::Failed(e),
    }
}

/// Команда открытия инкогнито с уведомлениями об исходе
pub fn open_incognito(
    launcher: &Arc<dyn BrowserLauncher>,
    clipboard: &Arc<dyn ClipboardService>,
    notifier: &Arc<dyn NotificationService>,
    args: &LaunchArguments,
    context: Option<&LaunchContext>,
) {
    let preferences = Preferences::load();
    let outcome = run_launch_flow(
        launcher.as_ref(),
        clipboard.as_ref(),
        &preferences,
        args,
        context,
    );

    match outcome {
        LaunchOutcome::Opened {
            browser,
            from_clipboard,
        } => {
            if from_clipboard {
                hud(
                    notifier.as_ref(),
                    "Using URL from clipboard",
                    NotificationKind::Success,
                );
            }
            let message = format!("Opened in {} (Incognito)", browser.id());
            println!("{}", message);
            hud(notifier.as_ref(), &message, NotificationKind::Success);
        }
        LaunchOutcome::SelfLinkIgnored => {
            eprintln!("[Incognito] ✗ Self-deeplink rejected");
            hud(
                notifier.as_ref(),
                "Ignored self-deeplink to prevent recursion",
                NotificationKind::Failure,
            );
        }
        LaunchOutcome::NoUrl => {
            hud(
                notifier.as_ref(),
                "No valid URL provided or found in clipboard",
                NotificationKind::Failure,
            );
        }
        LaunchOutcome::UnsupportedBrowser(e) => {
            eprintln!("[Incognito] ✗ {}", e);
            hud(notifier.as_ref(), &e, NotificationKind::Failure);
        }
        LaunchOutcome::Failed(e) => {
            eprintln!("[Incognito] ✗ {}", e);
            hud(notifier.as_ref(), "Failed to open URL", NotificationKind::Failure);
        }
    }
}

/// Собирает deep link из аргументов команды: URL обязателен,
/// браузер берётся из аргумента, настройки либо по умолчанию
pub fn build_deeplink(
    preferences: &Preferences,
    url: Option<&str>,
    browser: Option<&str>,
) -> Result<String, String> {
    let url = url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| "URL is required".to_string())?;
    let normalized = resolver::normalize_url(url);

    let args = LaunchArguments {
        url: None,
        browser: browser.map(str::to_string),
    };
    let browser = resolver::resolve_browser(None, &args, preferences.default_browser.as_deref());

    deeplink::build(&normalized, &browser)
}

/// Команда генерации deep link: собрать, скопировать в буфер, подтвердить
pub fn make_deeplink(
    clipboard: &Arc<dyn ClipboardService>,
    notifier: &Arc<dyn NotificationService>,
    url: Option<&str>,
    browser: Option<&str>,
) {
    let preferences = Preferences::load();

    let link = match build_deeplink(&preferences, url, browser) {
        Ok(link) => link,
        Err(e) => {
            eprintln!("[Incognito] ✗ {}", e);
            hud(notifier.as_ref(), &e, NotificationKind::Failure);
            return;
        }
    };
    println!("{}", link);

    match clipboard.copy_text(&link) {
        Ok(()) => {
            hud(
                notifier.as_ref(),
                "Deeplink copied to clipboard",
                NotificationKind::Success,
            );
        }
        Err(e) => {
            eprintln!("[Incognito] ✗ {}", e);
            hud(
                notifier.as_ref(),
                "Failed to copy deeplink",
                NotificationKind::Failure,
            );
        }
    }
}

fn hud(notifier: &dyn NotificationService, message: &str, kind: NotificationKind) {
    if let Err(e) = notifier.notify("Incognito", message, kind) {
        eprintln!("[Notify] ✗ {}", e);
    }
}
