use std::io::Write;
use std::process::{Command, Stdio};

use crate::domain::clipboard_service::ClipboardService;

/// Буфер обмена через wl-paste / wl-copy
pub struct WaylandClipboard;

impl ClipboardService for WaylandClipboard {
    fn read_text(&self) -> Option<String> {
        let output = Command::new("wl-paste")
            .arg("--no-newline")
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let text = String::from_utf8_lossy(&output.stdout).to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn copy_text(&self, text: &str) -> Result<(), String> {
        // wl-copy читает содержимое из stdin
        let mut child = Command::new("wl-copy")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| format!("Failed to execute wl-copy: {}", e))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| format!("Failed to write to wl-copy: {}", e))?;
        }

        let status = child
            .wait()
            .map_err(|e| format!("Failed to wait for wl-copy: {}", e))?;

        if !status.success() {
            return Err(format!("wl-copy failed with status: {}", status));
        }
        Ok(())
    }
}
