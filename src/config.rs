pub const DEFAULT_WIDTH: u32 = 70;
pub const MIN_WIDTH: u32 = 40;
pub const MAX_WIDTH: u32 = 120;

/// Clamp a requested column count into the supported range
pub fn clamp_width(width: u32) -> u32 {
    width.clamp(MIN_WIDTH, MAX_WIDTH)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub default_width: u32,
    pub cache_disabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let default_width = std::env::var("PICASCII_WIDTH")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .map(clamp_width)
            .unwrap_or(DEFAULT_WIDTH);

        let cache_disabled = std::env::var("PICASCII_NO_CACHE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            default_width,
            cache_disabled,
        }
    }
}
