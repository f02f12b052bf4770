use url::Url;

use crate::domain::models::LaunchContext;

/// Собственная deep link схема приложения
pub const SCHEME: &str = "quickcast";
/// Префикс собственных ссылок
pub const SELF_LINK_PREFIX: &str = "quickcast://";
/// Действие открытия инкогнито
pub const OPEN_INCOGNITO_ACTION: &str = "open-incognito";

/// Указывает ли значение на собственную схему приложения.
/// Проверка выполняется по сырому значению, до какой-либо валидации.
pub fn is_self_link(raw: &str) -> bool {
    raw.starts_with(SELF_LINK_PREFIX)
}

/// Собирает deep link для действия открытия инкогнито
pub fn build(url: &str, browser: &str) -> Result<String, String> {
    let mut link = Url::parse(&format!("{}://{}", SCHEME, OPEN_INCOGNITO_ACTION))
        .map_err(|e| format!("Failed to build deeplink: {}", e))?;
    link.query_pairs_mut()
        .append_pair("url", url)
        .append_pair("browser", browser);
    Ok(link.to_string())
}

/// Разбирает deep link в параметры запуска.
/// Неизвестные ключи запроса игнорируются, пустые значения отбрасываются.
pub fn parse(raw: &str) -> Result<LaunchContext, String> {
    let link = Url::parse(raw.trim()).map_err(|e| format!("Failed to parse deeplink: {}", e))?;

    if link.scheme() != SCHEME {
        return Err(format!("Unknown deeplink scheme: {}", link.scheme()));
    }
    if link.host_str() != Some(OPEN_INCOGNITO_ACTION) {
        return Err(format!(
            "Unknown deeplink action: {}",
            link.host_str().unwrap_or("")
        ));
    }

    let mut context = LaunchContext::default();
    for (key, value) in link.query_pairs() {
        match key.as_ref() {
            "url" if !value.is_empty() => context.url = Some(value.to_string()),
            "browser" if !value.is_empty() => context.browser = Some(value.to_string()),
            _ => {}
        }
    }
    Ok(context)
}
