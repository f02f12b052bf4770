use std::sync::Arc;

use crate::config::Preferences;
use crate::domain::display_service::DisplayService;
use crate::domain::models::NotificationKind;
use crate::domain::notification_service::NotificationService;
use crate::domain::stepper::{self, Direction};
use crate::infrastructure::refresh_bus::refresh_bus;

/// Печатает список дисплеев с текущей яркостью
pub fn list_displays(service: &Arc<dyn DisplayService>) {
    let displays = service.list_displays();
    if displays.is_empty() {
        println!("No displays found");
        return;
    }

    println!("{:<16} {:<28} {:>10}", "DEVICE", "NAME", "BRIGHTNESS");
    for display in &displays {
        println!(
            "{:<16} {:<28} {:>9}%",
            display.device_key(),
            display.title(),
            stepper::percent_value(display.current_brightness)
        );
    }
}

/// Читает текущую яркость, вычисляет новое значение и применяет его.
/// Возвращает установленные проценты.
pub fn apply_brightness_step(
    service: &dyn DisplayService,
    device: &str,
    step: i32,
    direction: Direction,
) -> Result<i32, String> {
    let fraction = service.get_brightness(device)?;
    let current = stepper::percent_value(fraction);
    let target = stepper::adjust(current, step, direction);
    service.set_brightness(device, target)?;
    Ok(target)
}

/// Шаговая регулировка яркости выбранного дисплея с уведомлением об исходе
pub fn adjust_brightness(
    service: &Arc<dyn DisplayService>,
    notifier: &Arc<dyn NotificationService>,
    device: &str,
    direction: Direction,
) {
    // Шаг читается на каждый вызов, без кэша
    let step = Preferences::load().step_percent();
    let subscription = refresh_bus().subscribe();

    match apply_brightness_step(service.as_ref(), device, step, direction) {
        Ok(percent) => {
            let message = match direction {
                Direction::Increase => "Brightness Increased",
                Direction::Decrease => "Brightness Decreased",
            };
            show(notifier.as_ref(), device, message, NotificationKind::Success);
            refresh_bus().publish();

            // По сигналу обновления перечитываем состояние у соисполнителя
            let shown = if subscription.try_recv() {
                service
                    .get_brightness(device)
                    .map(stepper::percent_value)
                    .unwrap_or(percent)
            } else {
                percent
            };
            println!("{}: {}%", device, shown);
        }
        Err(e) => {
            eprintln!("[Display] ✗ Failed to set brightness for {}: {}", device, e);
            let title = match direction {
                Direction::Increase => "Error increasing brightness",
                Direction::Decrease => "Error decreasing brightness",
            };
            show(notifier.as_ref(), title, &e, NotificationKind::Failure);
        }
    }
}

fn show(notifier: &dyn NotificationService, title: &str, message: &str, kind: NotificationKind) {
    if let Err(e) = notifier.notify(title, message, kind) {
        eprintln!("[Notify] ✗ {}", e);
    }
}
