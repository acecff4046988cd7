//! Central constants for the gost application

/// Default values for gist API operations
pub mod gist {
    /// Gist API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("gost/", env!("CARGO_PKG_VERSION"));

    /// Accept header sent with every request
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// Query parameter carrying the access token
    pub const ACCESS_TOKEN_PARAM: &str = "access_token";

    /// Permission bits for downloaded files (owner/group read-write)
    pub const DOWNLOAD_FILE_MODE: u32 = 0o660;
}

/// Default values for configuration
pub mod config {
    /// Configuration file name, looked up in the home directory
    pub const DEFAULT_CONFIG_FILE: &str = ".gost.yaml";

    /// Environment variable overriding the API base URL
    pub const BASE_URL_ENV: &str = "GIST_API_URL";

    /// Environment variable holding the access token
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
}
