use url::Url;

use crate::domain::models::{LaunchArguments, LaunchContext};

/// Источник, из которого получено значение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    DeepLink,
    Argument,
    Preference,
    Clipboard,
}

/// Кандидат: одно из ранжированных мест, где может находиться значение
pub struct Candidate<'a> {
    pub source: Source,
    pub raw: Option<&'a str>,
}

/// Выбранное значение вместе с источником
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub source: Source,
    pub value: String,
}

/// Возвращает первое присутствующее (непустое после обрезки пробелов)
/// и валидное значение в порядке приоритета кандидатов.
/// Отсутствие подходящего кандидата - нормальный исход, не ошибка.
pub fn resolve<F>(candidates: &[Candidate<'_>], is_valid: F) -> Option<Resolved>
where
    F: Fn(&str) -> bool,
{
    for candidate in candidates {
        if let Some(raw) = candidate.raw {
            let trimmed = raw.trim();
            if !trimmed.is_empty() && is_valid(trimmed) {
                return Some(Resolved {
                    source: candidate.source,
                    value: trimmed.to_string(),
                });
            }
        }
    }
    None
}

/// Нормализует адрес: добавляет https://, если схема не указана
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Валидность URL: нормализованный адрес разбирается и содержит хост.
/// Неразбираемые строки молча отбрасываются.
pub fn is_valid_url(raw: &str) -> bool {
    match Url::parse(&normalize_url(raw)) {
        Ok(url) => url.host_str().map(|host| !host.is_empty()).unwrap_or(false),
        Err(_) => false,
    }
}

/// Выбирает URL по порядку приоритета: deep link → аргумент → буфер обмена.
/// Буфер обмена не используется, если вызов пришёл из deep link.
pub fn resolve_url<F>(
    context: Option<&LaunchContext>,
    args: &LaunchArguments,
    read_clipboard: F,
) -> Option<Resolved>
where
    F: FnOnce() -> Option<String>,
{
    let candidates = [
        Candidate {
            source: Source::DeepLink,
            raw: context.and_then(|c| c.url.as_deref()),
        },
        Candidate {
            source: Source::Argument,
            raw: args.url.as_deref(),
        },
    ];
    if let Some(resolved) = resolve(&candidates, is_valid_url) {
        return Some(resolved);
    }

    if context.is_none() {
        if let Some(text) = read_clipboard() {
            let clipboard = [Candidate {
                source: Source::Clipboard,
                raw: Some(text.as_str()),
            }];
            return resolve(&clipboard, is_valid_url);
        }
    }

    None
}

/// Выбирает идентификатор браузера: deep link → аргумент → настройка → chrome.
/// Валидность самого идентификатора проверяется позже, при разборе Browser.
pub fn resolve_browser(
    context: Option<&LaunchContext>,
    args: &LaunchArguments,
    default_browser: Option<&str>,
) -> String {
    let candidates = [
        Candidate {
            source: Source::DeepLink,
            raw: context.and_then(|c| c.browser.as_deref()),
        },
        Candidate {
            source: Source::Argument,
            raw: args.browser.as_deref(),
        },
        Candidate {
            source: Source::Preference,
            raw: default_browser,
        },
    ];
    resolve(&candidates, |_| true)
        .map(|resolved| resolved.value)
        .unwrap_or_else(|| "chrome".to_string())
}
