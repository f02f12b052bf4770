use crate::domain::models::Display;

/// Сервис управления яркостью дисплеев
pub trait DisplayService: Send + Sync {
    /// Список дисплеев; при ошибке перечисления возвращает пустой список
    fn list_displays(&self) -> Vec<Display>;

    /// Текущая яркость устройства (0.0 - 1.0)
    fn get_brightness(&self, device: &str) -> Result<f64, String>;

    /// Установить яркость устройства (в процентах)
    fn set_brightness(&self, device: &str, percent: i32) -> Result<(), String>;
}
