use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::stepper::DEFAULT_STEP;

/// Настройки пользователя
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Шаг регулировки в процентах, как ввёл пользователь
    #[serde(default)]
    pub step: Option<String>,
    /// Браузер по умолчанию для инкогнито-запуска
    #[serde(default)]
    pub default_browser: Option<String>,
    /// Программа-хелпер управления дисплеями
    #[serde(default = "default_display_helper")]
    pub display_helper: String,
    /// Программа-хелпер управления аудио-сессиями
    #[serde(default = "default_audio_helper")]
    pub audio_helper: String,
}

fn default_display_helper() -> String {
    "quickcast-display-helper".to_string()
}

fn default_audio_helper() -> String {
    "quickcast-audio-helper".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            step: None,
            default_browser: None,
            display_helper: default_display_helper(),
            audio_helper: default_audio_helper(),
        }
    }
}

impl Preferences {
    /// Путь к файлу конфигурации
    pub fn config_path() -> PathBuf {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".config")
            });

        config_dir.join("quickcast/config.json")
    }

    /// Загрузить настройки. Вызывается в начале каждой операции:
    /// регулировка всегда видит актуальный шаг, без кэша между вызовами.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(preferences) => return preferences,
                    Err(e) => eprintln!("[Config] ✗ Failed to parse {:?}: {}", path, e),
                },
                Err(e) => eprintln!("[Config] ✗ Failed to read {:?}: {}", path, e),
            }
        }
        Self::default()
    }

    /// Шаг регулировки: настройка пользователя либо значение по умолчанию.
    /// Диапазон не проверяется: нулевой или отрицательный шаг принимается как есть.
    pub fn step_percent(&self) -> i32 {
        match self.step.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_STEP,
            Some(raw) => match raw.parse() {
                Ok(step) => step,
                Err(_) => {
                    eprintln!("[Config] ✗ Invalid step value '{}', using default", raw);
                    DEFAULT_STEP
                }
            },
        }
    }
}
