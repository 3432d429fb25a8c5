//! Application constants and configuration

pub const APP_NAME: &str = "Link Hub";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local key/value store, kept in the app data directory
pub const STORAGE_FILE: &str = "local_storage.json";
pub const DARK_MODE_KEY: &str = "isDarkMode";

/// Locale used to order link titles. The display order follows from this
/// together with the title strings in `profile.rs`; changing either changes it.
pub const COLLATION_LOCALE: &str = "en";

/// Profile picture, resolved against the working directory
pub const AVATAR_PATH: &str = "assets/avatar.jpg";

pub const WINDOW_SIZE: [f32; 2] = [900.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [480.0, 560.0];
