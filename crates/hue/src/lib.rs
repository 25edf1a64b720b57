pub mod brightness;
pub mod error;
pub mod legacy_api;

/// Hostname the Hue bridge announces itself with on most home networks
pub const HUE_BRIDGE_DEFAULT_HOSTNAME: &str = "Philips-hue";
