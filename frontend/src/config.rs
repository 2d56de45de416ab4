#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// localStorage key holding the whole content document.
pub const STORAGE_KEY: &str = "sinad_content";

/// Where the shipped default content lives, relative to the backend url.
pub const FALLBACK_CONTENT_PATH: &str = "/data/content.json";

pub const EXPORT_FILE_NAME: &str = "sinad_content.json";

/// How long the "Changes saved" acknowledgement stays up.
pub const SAVED_FLASH_MS: u32 = 3000;

pub const CONTACT_ACK_MS: u32 = 5000;

pub fn fallback_content_url() -> String {
    format!("{}{}", get_backend_url(), FALLBACK_CONTENT_PATH)
}
