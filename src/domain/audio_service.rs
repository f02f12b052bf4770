use crate::domain::models::AudioSession;

/// Сервис управления громкостью аудио-сессий
pub trait AudioService: Send + Sync {
    /// Список аудио-сессий как их отдаёт хелпер (возможны дубликаты по pid);
    /// при ошибке перечисления возвращает пустой список
    fn list_sessions(&self) -> Vec<AudioSession>;

    /// Установить громкость сессии (в процентах)
    fn set_app_volume(&self, pid: u32, percent: i32) -> Result<(), String>;

    /// Установить состояние mute сессии
    fn set_app_mute(&self, pid: u32, muted: bool) -> Result<(), String>;
}
