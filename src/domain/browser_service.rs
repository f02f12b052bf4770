use crate::domain::models::{Browser, LaunchOptions};

/// Запуск браузера отдельным процессом
pub trait BrowserLauncher: Send + Sync {
    /// Запускает браузер с указанным абсолютным адресом.
    /// Процесс отсоединяется от вызывающего.
    fn spawn(&self, browser: Browser, url: &str, options: LaunchOptions) -> Result<(), String>;
}
