use log::Level;

pub const COMPANY_NAME: &str = "My Amazing Company";
pub const COPYRIGHT: &str = "© 2024 My Amazing Company. All rights reserved.";

pub const LOGO_PATH: &str = "/logo.jpeg";
pub const FALLBACK_TEAM_PHOTO: &str = "/team-placeholder.jpg";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose hover/theme transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
