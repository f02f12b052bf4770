use crate::domain::models::NotificationKind;

/// Поверхность уведомлений (toast)
pub trait NotificationService: Send + Sync {
    /// Показывает уведомление пользователю
    fn notify(&self, title: &str, message: &str, kind: NotificationKind) -> Result<(), String>;
}
