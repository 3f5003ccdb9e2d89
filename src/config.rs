use log::Level;

use crate::theme::Theme;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const SCENE_URL: &str = "https://prod.spline.design/qQUip0dJPqrrPryE/scene.splinecode";

/// Base URL of the signup service, baked in at build time.
pub fn get_backend_url() -> &'static str {
    backend_url_or_default(option_env!("PAIRED_BACKEND_URL"))
}

fn backend_url_or_default(value: Option<&'static str>) -> &'static str {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim(),
        _ => DEFAULT_BACKEND_URL,
    }
}

pub fn signup_url(backend: &str) -> String {
    format!("{}/api/signup", backend.trim_end_matches('/'))
}

pub fn get_theme() -> Theme {
    match option_env!("PAIRED_THEME") {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Unknown theme {:?}, falling back to dark", raw);
            Theme::Dark
        }),
        None => Theme::Dark,
    }
}

pub fn get_log_level() -> Level {
    option_env!("PAIRED_LOG_LEVEL")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_defaults_to_local_address() {
        assert_eq!(backend_url_or_default(None), "http://localhost:8000");
        assert_eq!(backend_url_or_default(Some("  ")), "http://localhost:8000");
        assert_eq!(
            backend_url_or_default(Some("https://api.paired.app")),
            "https://api.paired.app"
        );
    }

    #[test]
    fn signup_url_does_not_double_slashes() {
        assert_eq!(signup_url("http://localhost:8000"), "http://localhost:8000/api/signup");
        assert_eq!(signup_url("https://api.paired.app/"), "https://api.paired.app/api/signup");
    }
}
