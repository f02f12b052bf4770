/// Доступ к системному буферу обмена
pub trait ClipboardService: Send + Sync {
    /// Читает текст из буфера обмена
    fn read_text(&self) -> Option<String>;

    /// Копирует текст в буфер обмена
    fn copy_text(&self, text: &str) -> Result<(), String>;
}
