use std::collections::HashMap;

use zbus::zvariant::Value;
use zbus::{blocking::Connection, proxy};

use crate::domain::models::NotificationKind;
use crate::domain::notification_service::NotificationService;

#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Показать уведомление, возвращает его id
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Уведомления рабочего стола через org.freedesktop.Notifications
pub struct DesktopNotifier {
    proxy: NotificationsProxyBlocking<'static>,
}

impl DesktopNotifier {
    pub fn new() -> Result<Self, String> {
        let connection = Connection::session()
            .map_err(|e| format!("Failed to connect to session bus: {}", e))?;

        let proxy = NotificationsProxyBlocking::new(&connection)
            .map_err(|e| format!("Failed to create notifications proxy: {}", e))?;

        Ok(Self { proxy })
    }
}

impl NotificationService for DesktopNotifier {
    fn notify(&self, title: &str, message: &str, kind: NotificationKind) -> Result<(), String> {
        let (icon, urgency) = match kind {
            NotificationKind::Success => ("dialog-information", 1u8),
            NotificationKind::Failure => ("dialog-error", 2u8),
        };

        let mut hints = HashMap::new();
        hints.insert("urgency", Value::U8(urgency));

        self.proxy
            .notify("quickcast", 0, icon, title, message, Vec::new(), hints, 5000)
            .map(|_| ())
            .map_err(|e| format!("Failed to send notification: {}", e))
    }
}

/// Запасной вариант без сессионной шины: уведомления уходят в stderr
pub struct StderrNotifier;

impl NotificationService for StderrNotifier {
    fn notify(&self, title: &str, message: &str, kind: NotificationKind) -> Result<(), String> {
        let marker = match kind {
            NotificationKind::Success => "✓",
            NotificationKind::Failure => "✗",
        };
        eprintln!("[Notify] {} {}: {}", marker, title, message);
        Ok(())
    }
}
