/// Шаг регулировки по умолчанию (в процентах)
pub const DEFAULT_STEP: i32 = 5;

/// Направление шаговой регулировки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// Переводит долю (0.0 - 1.0) в целые проценты
pub fn percent_value(fraction: f64) -> i32 {
    (fraction * 100.0).round() as i32
}

/// Переводит проценты в долю (0.0 - 1.0)
#[allow(dead_code)]
pub fn percent_to_fraction(percent: i32) -> f64 {
    percent as f64 / 100.0
}

/// Шаговая регулировка процентного значения с ограничением границ.
/// Увеличение ограничено сверху (100), уменьшение - снизу (0).
/// Функция чистая: применение результата - ответственность вызывающего.
pub fn adjust(current_percent: i32, step: i32, direction: Direction) -> i32 {
    match direction {
        Direction::Increase => {
            let target = current_percent + step;
            if target > 100 {
                100
            } else {
                target
            }
        }
        Direction::Decrease => {
            let target = current_percent - step;
            if target <= 0 {
                0
            } else {
                target
            }
        }
    }
}
