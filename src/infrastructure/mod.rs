pub mod helper_ipc;
pub mod display_helper;
pub mod audio_helper;
pub mod browser_spawner;
pub mod wayland_clipboard;
pub mod desktop_notifier;
pub mod refresh_bus;
