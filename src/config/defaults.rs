//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Default contact address sent in the NWS User-Agent
pub const DEFAULT_CONTACT: &str = "geo-weather-gt@gmail.com";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geo-weather";
