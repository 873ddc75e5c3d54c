//! Named network profiles with typical modeling parameters.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::ScenarioParams;

/// A link type with known typical overhead, compression and efficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkProfile {
    /// Dedicated private interconnect into a cloud region.
    #[default]
    Fastconnect,
    /// Site-to-site VPN over the internet.
    Vpn,
    /// Plain public internet.
    Internet,
    /// Local area network.
    Lan,
    /// Fallback used when nothing is known about the link.
    Conservative,
}

/// Parameters a profile implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// Base modeling fractions.
    pub params: ScenarioParams,
    /// Typical number of parallel streams.
    pub parallelism: NonZeroU32,
}

impl ProfileDefaults {
    const fn new(
        overhead: f64,
        compression: f64,
        parallelism_efficacy: f64,
        parallelism: NonZeroU32,
        stream_efficiency: f64,
    ) -> Self {
        Self {
            params: ScenarioParams::new(
                overhead,
                compression,
                parallelism_efficacy,
                stream_efficiency,
            ),
            parallelism,
        }
    }
}

const TWO: NonZeroU32 = NonZeroU32::MIN.saturating_add(1);
const FOUR: NonZeroU32 = NonZeroU32::MIN.saturating_add(3);

impl NetworkProfile {
    /// Returns the parameters this profile implies.
    #[must_use]
    pub const fn defaults(&self) -> ProfileDefaults {
        match self {
            Self::Fastconnect => ProfileDefaults::new(0.15, 0.30, 0.85, FOUR, 0.6),
            Self::Vpn => ProfileDefaults::new(0.25, 0.30, 0.70, FOUR, 0.5),
            Self::Internet => ProfileDefaults::new(0.20, 0.20, 0.60, FOUR, 0.5),
            Self::Lan => ProfileDefaults::new(0.10, 0.10, 0.90, TWO, 0.8),
            Self::Conservative => ProfileDefaults::new(0.20, 0.20, 0.60, TWO, 0.6),
        }
    }

    /// Returns the defaults for a profile name, falling back to
    /// [`NetworkProfile::Conservative`] for unknown names.
    #[must_use]
    pub fn lookup(name: &str) -> ProfileDefaults {
        name.parse::<Self>()
            .unwrap_or(Self::Conservative)
            .defaults()
    }

    /// Returns the profile name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fastconnect => "fastconnect",
            Self::Vpn => "vpn",
            Self::Internet => "internet",
            Self::Lan => "lan",
            Self::Conservative => "conservative",
        }
    }

    /// Returns a one-line description of the link type.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Fastconnect => "Dedicated private interconnect",
            Self::Vpn => "Site-to-site VPN",
            Self::Internet => "Public internet",
            Self::Lan => "Local area network",
            Self::Conservative => "Unknown link, cautious assumptions",
        }
    }

    /// Returns all profiles.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Fastconnect,
            Self::Vpn,
            Self::Internet,
            Self::Lan,
            Self::Conservative,
        ]
    }
}

impl std::fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NetworkProfile {
    type Err = ProfileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fastconnect" | "interconnect" => Ok(Self::Fastconnect),
            "vpn" => Ok(Self::Vpn),
            "internet" => Ok(Self::Internet),
            "lan" => Ok(Self::Lan),
            "conservative" | "default" => Ok(Self::Conservative),
            _ => Err(ProfileParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid profile name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileParseError(String);

impl std::fmt::Display for ProfileParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid network profile '{}', expected one of: fastconnect, vpn, internet, lan, conservative",
            self.0
        )
    }
}

impl std::error::Error for ProfileParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastconnect_defaults() {
        let d = NetworkProfile::Fastconnect.defaults();
        assert_eq!(d.params, ScenarioParams::new(0.15, 0.30, 0.85, 0.6));
        assert_eq!(d.parallelism.get(), 4);
    }

    #[test]
    fn test_lan_defaults() {
        let d = NetworkProfile::Lan.defaults();
        assert_eq!(d.params, ScenarioParams::new(0.10, 0.10, 0.90, 0.8));
        assert_eq!(d.parallelism.get(), 2);
    }

    #[test]
    fn test_lookup_falls_back_to_conservative() {
        assert_eq!(
            NetworkProfile::lookup("satellite"),
            NetworkProfile::Conservative.defaults()
        );
        assert_eq!(
            NetworkProfile::lookup("VPN"),
            NetworkProfile::Vpn.defaults()
        );
    }

    #[test]
    fn test_all_profiles_are_valid() {
        for profile in NetworkProfile::all() {
            profile.defaults().params.validate().unwrap();
            assert_eq!(
                profile.as_str().parse::<NetworkProfile>().unwrap(),
                *profile
            );
        }
    }

    #[test]
    fn test_profile_parse_error() {
        let err = "satellite".parse::<NetworkProfile>().unwrap_err();
        assert!(err.to_string().contains("satellite"));
    }
}
