//! Synthetic device identities.
//!
//! The backend expects every sign-in and meter-reading submission to describe
//! the client device. A [`DeviceInfo`] is chosen once per configuration and is
//! reused for the session headers and for every `deviceInfo` variable, so one
//! client always presents a single consistent identity.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The `browser` value reported by the native mobile application.
pub const NATIVE_APP_BROWSER: &str = "App";

/// User agent sent by native application identities.
pub const MOBILE_USER_AGENT: &str = "Dart/2.19 (dart:io)";

/// Which official client an identity imitates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppProfile {
    /// The mobile application (native app or mobile browser).
    Mobile,
    /// The desktop web cabinet.
    Desktop,
}

impl AppProfile {
    /// Returns the `appName` reported to the backend.
    #[must_use]
    pub const fn app_name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }

    /// Returns the `appVersion` reported to the backend.
    #[must_use]
    pub const fn app_version(self) -> &'static str {
        match self {
            Self::Mobile => "7.5.14",
            Self::Desktop => "7.5.15",
        }
    }
}

struct SystemProfile {
    system: &'static str,
    browsers: &'static [&'static str],
    devices: &'static [&'static str],
    resolutions: &'static [&'static str],
}

const MOBILE_SYSTEMS: &[SystemProfile] = &[
    SystemProfile {
        system: "Android",
        browsers: &[NATIVE_APP_BROWSER],
        devices: &[
            "Samsung Galaxy S10",
            "Samsung Galaxy A52",
            "Xiaomi Redmi Note 10",
            "Google Pixel 6",
        ],
        resolutions: &["384x592", "412x869", "393x851", "360x800"],
    },
    SystemProfile {
        system: "iOS",
        browsers: &[NATIVE_APP_BROWSER],
        devices: &["iPhone 12", "iPhone 13", "iPhone SE"],
        resolutions: &["390x844", "375x667"],
    },
];

const DESKTOP_SYSTEMS: &[SystemProfile] = &[
    SystemProfile {
        system: "Windows",
        browsers: &[
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
        ],
        devices: &["Desktop"],
        resolutions: &["1920x1080", "1366x768", "1536x864"],
    },
    SystemProfile {
        system: "macOS",
        browsers: &[
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
        ],
        devices: &["Desktop"],
        resolutions: &["1440x900", "2560x1600"],
    },
];

/// The device description sent as the `deviceInfo` GraphQL input.
///
/// # Example
///
/// ```rust
/// use mygas_api::DeviceInfo;
///
/// let device = DeviceInfo::default();
/// assert!(device.is_native_app());
///
/// let json = serde_json::to_value(&device).unwrap();
/// assert_eq!(json["appName"], "mobile");
/// assert_eq!(json["screenResolution"], "384x592");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Application name (`mobile` or `desktop`).
    pub app_name: String,
    /// Application version.
    pub app_version: String,
    /// Browser user agent, or [`NATIVE_APP_BROWSER`] for the native app.
    pub browser: String,
    /// Device model.
    pub device: String,
    /// Screen resolution as `WIDTHxHEIGHT`.
    pub screen_resolution: String,
    /// Operating system.
    pub system: String,
}

impl DeviceInfo {
    /// Picks a random identity from the built-in pool.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Picks an identity from the built-in pool using the given generator.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let profile = if rng.gen_bool(0.5) {
            AppProfile::Mobile
        } else {
            AppProfile::Desktop
        };
        let systems = match profile {
            AppProfile::Mobile => MOBILE_SYSTEMS,
            AppProfile::Desktop => DESKTOP_SYSTEMS,
        };

        let Some(system) = systems.choose(rng) else {
            return Self::default();
        };
        let pick = |values: &'static [&'static str], rng: &mut R| {
            values.choose(rng).copied().map(String::from)
        };

        match (
            pick(system.browsers, rng),
            pick(system.devices, rng),
            pick(system.resolutions, rng),
        ) {
            (Some(browser), Some(device), Some(screen_resolution)) => Self {
                app_name: profile.app_name().to_string(),
                app_version: profile.app_version().to_string(),
                browser,
                device,
                screen_resolution,
                system: system.system.to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Returns `true` if this identity imitates the native application.
    ///
    /// Native identities send no `Origin`/`Referer` headers.
    #[must_use]
    pub fn is_native_app(&self) -> bool {
        self.browser == NATIVE_APP_BROWSER
    }

    /// Returns the `User-Agent` header value for this identity.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        if self.is_native_app() {
            MOBILE_USER_AGENT
        } else {
            &self.browser
        }
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            app_name: AppProfile::Mobile.app_name().to_string(),
            app_version: AppProfile::Mobile.app_version().to_string(),
            browser: NATIVE_APP_BROWSER.to_string(),
            device: "Samsung Galaxy S10".to_string(),
            screen_resolution: "384x592".to_string(),
            system: "Android".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_identity_is_native_app() {
        let device = DeviceInfo::default();
        assert!(device.is_native_app());
        assert_eq!(device.user_agent(), MOBILE_USER_AGENT);
        assert_eq!(device.app_version, "7.5.14");
    }

    #[test]
    fn test_web_identity_uses_browser_as_user_agent() {
        let device = DeviceInfo {
            browser: "Mozilla/5.0 Test".to_string(),
            ..DeviceInfo::default()
        };
        assert!(!device.is_native_app());
        assert_eq!(device.user_agent(), "Mozilla/5.0 Test");
    }

    #[test]
    fn test_random_identity_is_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let device = DeviceInfo::random_with(&mut rng);
            let profile = if device.app_name == "mobile" {
                AppProfile::Mobile
            } else {
                AppProfile::Desktop
            };
            assert_eq!(device.app_version, profile.app_version());
            // Native app browsers only ever appear in mobile identities
            if device.is_native_app() {
                assert_eq!(profile, AppProfile::Mobile);
            } else {
                assert_eq!(profile, AppProfile::Desktop);
            }
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(DeviceInfo::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "appName",
                "appVersion",
                "browser",
                "device",
                "screenResolution",
                "system"
            ]
        );
    }
}
