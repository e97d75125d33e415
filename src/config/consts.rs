// src/config/consts.rs

// Feed configuration (read at the program edge only)
pub const ENV_PEOPLE_URL: &str = "LAB_FEEDS_PEOPLE_URL";
pub const ENV_PROJECTS_URL: &str = "LAB_FEEDS_PROJECTS_URL";
pub const ENV_PUBLICATIONS_URL: &str = "LAB_FEEDS_PUBLICATIONS_URL";
pub const ENV_RESOURCES_URL: &str = "LAB_FEEDS_RESOURCES_URL";
pub const ENV_NEWS_URL: &str = "LAB_FEEDS_NEWS_URL";

// Net
pub const USER_AGENT: &str = concat!("lab_feeds/", env!("CARGO_PKG_VERSION"));

// Normalization
pub const ORDER_SENTINEL: f64 = f64::MAX; // unordered records sort last
pub const DEFAULT_FILE_LABEL: &str = "File";
pub const FILE_PAIR_SEP: &str = "::";

// Logging
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "lab_feeds.log";

// GUI
pub const WINDOW_TITLE: &str = "Lab Feeds";
pub const ROW_HEIGHT: f32 = 20.0;
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
pub const CELL_PREVIEW_CHARS: usize = 120;
