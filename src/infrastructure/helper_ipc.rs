use std::process::Command;

/// Запускает хелпер-процесс и возвращает его stdout.
/// Ненулевой код выхода - ошибка внешнего соисполнителя.
pub fn run_helper(program: &str, args: &[&str]) -> Result<String, String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| format!("Failed to execute {}: {}", program, e))?;

    if !output.status.success() {
        return Err(format!("{} failed with status: {}", program, output.status));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
