use serde::Deserialize;

use crate::domain::display_service::DisplayService;
use crate::domain::models::Display;
use crate::infrastructure::helper_ipc::run_helper;

/// Обёртка списка устройств в ответе хелпера
#[derive(Debug, Deserialize)]
struct DeviceList {
    #[serde(default)]
    devices: Vec<Display>,
}

/// Управление дисплеями через нативный хелпер (subprocess/JSON)
pub struct DisplayHelper {
    program: String,
}

impl DisplayHelper {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl DisplayService for DisplayHelper {
    fn list_displays(&self) -> Vec<Display> {
        // Ошибка перечисления не валит список, возвращаем пустой
        match run_helper(&self.program, &["list"]) {
            Ok(raw) => match serde_json::from_str::<DeviceList>(&raw) {
                Ok(list) => list.devices,
                Err(e) => {
                    eprintln!("[Display] ✗ Failed to parse device list: {}", e);
                    Vec::new()
                }
            },
            Err(e) => {
                eprintln!("[Display] ✗ {}", e);
                Vec::new()
            }
        }
    }

    fn get_brightness(&self, device: &str) -> Result<f64, String> {
        let raw = run_helper(&self.program, &["get", device])?;
        raw.trim()
            .parse()
            .map_err(|e| format!("Failed to parse brightness '{}': {}", raw.trim(), e))
    }

    fn set_brightness(&self, device: &str, percent: i32) -> Result<(), String> {
        run_helper(&self.program, &["set", device, &percent.to_string()]).map(|_| ())
    }
}
