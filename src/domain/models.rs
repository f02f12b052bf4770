use serde::Deserialize;

/// Запись о дисплее, полученная от нативного хелпера
#[derive(Debug, Clone, Deserialize)]
pub struct Display {
    pub device_name: String,
    #[serde(default)]
    pub friendly_name: String,
    /// Текущая яркость (0.0 - 1.0)
    #[serde(default)]
    pub current_brightness: f64,
}

impl Display {
    /// Короткий ключ устройства: первый значимый сегмент системного имени
    pub fn device_key(&self) -> &str {
        self.device_name
            .split(['/', '\\'])
            .find(|segment| !segment.is_empty() && *segment != ".")
            .unwrap_or(&self.device_name)
    }

    /// Название для отображения в списке
    pub fn title(&self) -> &str {
        if self.friendly_name.is_empty() {
            &self.device_name
        } else {
            &self.friendly_name
        }
    }
}

/// Запись об аудио-сессии, полученная от нативного хелпера.
/// Список может содержать дубликаты по pid.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioSession {
    pub pid: u32,
    #[serde(default)]
    pub app_name: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub app_icon: String,
    #[serde(default)]
    pub path: String,
    /// Текущая громкость (0.0 - 1.0)
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub muted: bool,
}

impl AudioSession {
    /// Имя приложения для отображения: явное имя сессии,
    /// иначе имя исполняемого файла из пути
    pub fn display_name(&self) -> String {
        let name = if self.app_name.is_empty() {
            extract_app_name(&self.path).unwrap_or(&self.path)
        } else {
            &self.app_name
        };
        capitalize(name)
    }
}

/// Имя приложения из пути к исполняемому файлу, без расширения .exe
fn extract_app_name(path: &str) -> Option<&str> {
    let file = path.rsplit(['/', '\\']).next()?;
    if file.is_empty() {
        return None;
    }
    Some(
        file.strip_suffix(".exe")
            .or_else(|| file.strip_suffix(".EXE"))
            .unwrap_or(file),
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Поддерживаемые браузеры для инкогнито-запуска
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Brave,
    Edge,
    Firefox,
    Opera,
}

impl Browser {
    /// Разбирает идентификатор браузера.
    /// Идентификатор вне поддерживаемого набора - явная ошибка.
    pub fn parse(id: &str) -> Result<Self, String> {
        match id.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "brave" => Ok(Browser::Brave),
            "edge" => Ok(Browser::Edge),
            "firefox" => Ok(Browser::Firefox),
            "opera" => Ok(Browser::Opera),
            other => Err(format!("Unsupported browser: {}", other)),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Brave => "brave",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Opera => "opera",
        }
    }

    /// Имя исполняемого файла браузера
    pub fn program(&self) -> &'static str {
        match self {
            Browser::Chrome => "google-chrome",
            Browser::Brave => "brave-browser",
            Browser::Edge => "microsoft-edge",
            Browser::Firefox => "firefox",
            Browser::Opera => "opera",
        }
    }

    /// Флаг приватного окна
    pub fn incognito_flag(&self) -> &'static str {
        match self {
            Browser::Chrome | Browser::Brave => "--incognito",
            Browser::Edge => "--inprivate",
            Browser::Firefox => "-private-window",
            Browser::Opera => "--private",
        }
    }
}

/// Параметры, пришедшие из deep link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchContext {
    pub url: Option<String>,
    pub browser: Option<String>,
}

/// Прямые аргументы вызова
#[derive(Debug, Clone, Default)]
pub struct LaunchArguments {
    pub url: Option<String>,
    pub browser: Option<String>,
}

/// Опции запуска браузера
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchOptions {
    pub incognito: bool,
    /// Фоновый запуск; на этой платформе окном не управляет
    #[allow(dead_code)]
    pub background: bool,
}

/// Тип уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}
