pub mod models;
pub mod stepper;
pub mod resolver;
pub mod deeplink;

pub mod display_service;
pub mod audio_service;
pub mod browser_service;
pub mod clipboard_service;
pub mod notification_service;
