use crate::domain::audio_service::AudioService;
use crate::domain::models::AudioSession;
use crate::infrastructure::helper_ipc::run_helper;

/// Управление аудио-сессиями через нативный хелпер (subprocess/JSON)
pub struct AudioHelper {
    program: String,
}

impl AudioHelper {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl AudioService for AudioHelper {
    fn list_sessions(&self) -> Vec<AudioSession> {
        // Ошибка перечисления не валит список, возвращаем пустой
        match run_helper(&self.program, &["list"]) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(sessions) => sessions,
                Err(e) => {
                    eprintln!("[Mixer] ✗ Failed to parse session list: {}", e);
                    Vec::new()
                }
            },
            Err(e) => {
                eprintln!("[Mixer] ✗ {}", e);
                Vec::new()
            }
        }
    }

    fn set_app_volume(&self, pid: u32, percent: i32) -> Result<(), String> {
        run_helper(
            &self.program,
            &["set-volume", &pid.to_string(), &percent.to_string()],
        )
        .map(|_| ())
    }

    fn set_app_mute(&self, pid: u32, muted: bool) -> Result<(), String> {
        let mute_arg = if muted { "1" } else { "0" };
        run_helper(&self.program, &["set-mute", &pid.to_string(), mute_arg]).map(|_| ())
    }
}
