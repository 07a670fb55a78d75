//! Application constants and configuration

pub const APP_NAME: &str = "Analytics Pro";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DATA_DIR_NAME: &str = "Analytics Pro";
pub const LOG_FILE_PREFIX: &str = "analytics-pro.log";

pub const HEADER_TITLE: &str = "⚡ Ultra-Stats Command Center";
pub const HEADER_SUBTITLE: &str = "Live Performance Overview";
pub const STATUS_ONLINE: &str = "System Status: 🟢 Online";

/// Default length of the sales trend, in days
pub const DEFAULT_TREND_DAYS: usize = 30;
/// Bounds accepted for a configured trend length
pub const TREND_DAYS_RANGE: (usize, usize) = (7, 365);
