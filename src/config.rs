use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_REGION_CAP: usize = 30;
pub const DEFAULT_RECOMMEND_COUNT: usize = 5;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_data_file() -> String {
    env::var("DATA_FILE")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
}

/// Base URL of the catalog document store, if one is configured.
/// When set, it takes precedence over the data file.
pub fn get_catalog_api_url() -> Option<String> {
    env::var("CATALOG_API_URL")
        .ok()
        .map(|raw| sanitize_base_url(&raw))
        .filter(|url| !url.is_empty())
}

pub fn get_catalog_api_token() -> String {
    env::var("CATALOG_API_TOKEN").unwrap_or_default()
}

pub fn get_region_cap() -> usize {
    parse_positive("REGION_CAP", env::var("REGION_CAP").ok(), DEFAULT_REGION_CAP)
}

pub fn get_recommend_count() -> usize {
    parse_positive(
        "RECOMMEND_COUNT",
        env::var("RECOMMEND_COUNT").ok(),
        DEFAULT_RECOMMEND_COUNT,
    )
}

pub fn sanitize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_positive(name: &str, raw: Option<String>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(name, value = %raw, default, "Ignoring invalid positive integer setting");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positive_accepts_numbers() {
        assert_eq!(parse_positive("X", Some("12".into()), 3), 12);
        assert_eq!(parse_positive("X", Some(" 7 ".into()), 3), 7);
    }

    #[test]
    fn parse_positive_falls_back() {
        assert_eq!(parse_positive("X", None, 3), 3);
        assert_eq!(parse_positive("X", Some("0".into()), 3), 3);
        assert_eq!(parse_positive("X", Some("-4".into()), 3), 3);
        assert_eq!(parse_positive("X", Some("many".into()), 3), 3);
    }
}
