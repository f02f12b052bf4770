use std::process::{Command, Stdio};

use crate::domain::browser_service::BrowserLauncher;
use crate::domain::models::{Browser, LaunchOptions};

/// Запускает браузер отдельным процессом
pub struct BrowserSpawner;

impl BrowserLauncher for BrowserSpawner {
    fn spawn(&self, browser: Browser, url: &str, options: LaunchOptions) -> Result<(), String> {
        let mut command = Command::new(browser.program());

        if options.incognito {
            command.arg(browser.incognito_flag());
        }

        // options.background управления окном на этой платформе не имеет,
        // процесс в любом случае отсоединяется
        let child = command
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("Failed to spawn {}: {}", browser.program(), e))?;

        // Хэндл не ждём: браузер живёт дальше самостоятельно
        drop(child);
        Ok(())
    }
}
