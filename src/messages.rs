//! User-facing strings.
//!
//! The portal is Russian-language; every string the crate shows or returns
//! is defined here so the wording stays in one place.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

pub const LOGOUT_SUCCEEDED: &str = "Вы успешно вышли из системы";
pub const LOGOUT_FAILED: &str = "Ошибка при выходе из системы";
pub const CODE_COPIED: &str = "Код скопирован в буфер обмена";
pub const TEXT_COPIED: &str = "Текст скопирован в буфер обмена";
pub const DEFAULT_DOWNLOAD_NAME: &str = "generated_code";
pub const SUBMIT_BUSY_HTML: &str = r#"<i class="fas fa-spinner fa-spin mr-2"></i>Обработка..."#;

/// Fallback message for a failed response that carried no `detail`.
#[must_use]
pub fn http_status_failed(status: u16) -> String {
    format!("Ошибка HTTP: {status}")
}

/// Toast text for any failed request.
#[must_use]
pub fn request_failed(message: &str) -> String {
    format!("Ошибка: {message}")
}

#[must_use]
pub fn opening_project(name: &str) -> String {
    format!("Открываем проект: {name}")
}

#[must_use]
pub fn file_downloaded(name: &str) -> String {
    format!("Файл {name} скачан")
}
