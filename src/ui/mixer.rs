use std::collections::HashSet;
use std::sync::Arc;

use crate::config::Preferences;
use crate::domain::audio_service::AudioService;
use crate::domain::models::{AudioSession, NotificationKind};
use crate::domain::notification_service::NotificationService;
use crate::domain::stepper::{self, Direction};
use crate::infrastructure::refresh_bus::refresh_bus;

/// Действие над аудио-сессией
#[derive(Debug, Clone, Copy)]
pub enum MixerAction {
    Step(Direction),
    ToggleMute,
}

/// Убирает дубликаты сессий по pid, первая запись выигрывает
pub fn dedup_by_pid(sessions: Vec<AudioSession>) -> Vec<AudioSession> {
    let mut seen = HashSet::new();
    sessions
        .into_iter()
        .filter(|session| seen.insert(session.pid))
        .collect()
}

/// Загружает список аудио-сессий без дубликатов
pub fn fetch_sessions(service: &dyn AudioService) -> Vec<AudioSession> {
    dedup_by_pid(service.list_sessions())
}

/// Печатает список аудио-сессий
pub fn list_sessions(service: &Arc<dyn AudioService>) {
    let sessions = fetch_sessions(service.as_ref());
    if sessions.is_empty() {
        println!("No audio sessions found");
        return;
    }

    println!("{:>8} {:<24} {:>7} {:>6}", "PID", "APP", "VOLUME", "MUTED");
    for session in &sessions {
        println!(
            "{:>8} {:<24} {:>6}% {:>6}",
            session.pid,
            session.display_name(),
            stepper::percent_value(session.volume),
            if session.muted { "yes" } else { "no" }
        );
    }
}

/// Вычисляет и применяет новую громкость сессии.
/// Возвращает установленные проценты.
pub fn apply_volume_step(
    service: &dyn AudioService,
    session: &AudioSession,
    step: i32,
    direction: Direction,
) -> Result<i32, String> {
    let current = stepper::percent_value(session.volume);
    let target = stepper::adjust(current, step, direction);
    service.set_app_volume(session.pid, target)?;
    Ok(target)
}

/// Переключает mute сессии. Возвращает новое состояние.
pub fn toggle_session_mute(
    service: &dyn AudioService,
    session: &AudioSession,
) -> Result<bool, String> {
    let muted = !session.muted;
    service.set_app_mute(session.pid, muted)?;
    Ok(muted)
}

/// Выполняет действие над сессией, найденной по pid, с уведомлением об исходе
pub fn run_mixer_action(
    service: &Arc<dyn AudioService>,
    notifier: &Arc<dyn NotificationService>,
    pid: u32,
    action: MixerAction,
) {
    let session = match fetch_sessions(service.as_ref())
        .into_iter()
        .find(|session| session.pid == pid)
    {
        Some(session) => session,
        None => {
            eprintln!("[Mixer] ✗ Audio session {} not found", pid);
            show(
                notifier.as_ref(),
                "Session not found",
                &format!("No audio session with pid {}", pid),
                NotificationKind::Failure,
            );
            return;
        }
    };
    let name = session.display_name();
    let subscription = refresh_bus().subscribe();

    match action {
        MixerAction::Step(direction) => {
            // Шаг читается на каждый вызов, без кэша
            let step = Preferences::load().step_percent();

            match apply_volume_step(service.as_ref(), &session, step, direction) {
                Ok(percent) => {
                    let message = match direction {
                        Direction::Increase => "Volume Increased",
                        Direction::Decrease => "Volume Decreased",
                    };
                    show(notifier.as_ref(), &name, message, NotificationKind::Success);
                    refresh_bus().publish();

                    // По сигналу обновления перечитываем состояние сессии
                    let shown = if subscription.try_recv() {
                        refetch(service.as_ref(), pid)
                            .map(|updated| stepper::percent_value(updated.volume))
                            .unwrap_or(percent)
                    } else {
                        percent
                    };
                    println!("{}: {}%", name, shown);
                }
                Err(e) => {
                    eprintln!("[Mixer] ✗ Failed to set volume for {}: {}", name, e);
                    let title = match direction {
                        Direction::Increase => "Error increasing volume",
                        Direction::Decrease => "Error decreasing volume",
                    };
                    show(notifier.as_ref(), title, &e, NotificationKind::Failure);
                }
            }
        }
        MixerAction::ToggleMute => match toggle_session_mute(service.as_ref(), &session) {
            Ok(muted) => {
                show(
                    notifier.as_ref(),
                    &name,
                    &format!("{} session toggled.", name),
                    NotificationKind::Success,
                );
                refresh_bus().publish();

                let shown = if subscription.try_recv() {
                    refetch(service.as_ref(), pid)
                        .map(|updated| updated.muted)
                        .unwrap_or(muted)
                } else {
                    muted
                };
                println!("{}: {}", name, if shown { "muted" } else { "unmuted" });
            }
            Err(e) => {
                eprintln!("[Mixer] ✗ Failed to toggle mute for {}: {}", name, e);
                show(
                    notifier.as_ref(),
                    "Session toggle failed",
                    &e,
                    NotificationKind::Failure,
                );
            }
        },
    }
}

fn refetch(service: &dyn AudioService, pid: u32) -> Option<AudioSession> {
    fetch_sessions(service)
        .into_iter()
        .find(|session| session.pid == pid)
}

fn show(notifier: &dyn NotificationService, title: &str, message: &str, kind: NotificationKind) {
    if let Err(e) = notifier.notify(title, message, kind) {
        eprintln!("[Notify] ✗ {}", e);
    }
}
