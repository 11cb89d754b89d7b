use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub base_url: String,
    pub demo_content_dir: String,
    pub demo_content_file: Option<String>,
    /// Members per page, 0 disables the pager.
    pub members_page_limit: usize,
    pub long_date_format: String,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            demo_content_dir: env::var("DEMO_CONTENT_DIR").unwrap_or_else(|_| "/root/dev-scripts/content/".to_string()),
            demo_content_file: env::var("DEMO_CONTENT_FILE").ok().filter(|v| !v.is_empty()),
            members_page_limit: env::var("MEMBERS_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            long_date_format: env::var("DATE_FORMAT_LONG").unwrap_or_else(|_| "%d %B %Y %H:%M".to_string()),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
