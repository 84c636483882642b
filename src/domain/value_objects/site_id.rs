//! Site identifier value object.

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a web-server site.
///
/// Unique per site and stable across runs; the only identity a site keeps
/// between inventory snapshots.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SiteId(pub u32);

impl SiteId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SiteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(SiteId)
    }
}

impl From<u32> for SiteId {
    fn from(id: u32) -> Self {
        SiteId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_id_display_round_trip() {
        let id: SiteId = "17".parse().unwrap();
        assert_eq!(id, SiteId(17));
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn site_id_rejects_negative_and_garbage() {
        assert!("-3".parse::<SiteId>().is_err());
        assert!("x".parse::<SiteId>().is_err());
        assert!("".parse::<SiteId>().is_err());
        assert!("2.5".parse::<SiteId>().is_err());
    }

    #[test]
    fn site_id_serde_transparent() {
        let json = serde_json::to_string(&SiteId(5)).unwrap();
        assert_eq!(json, "5");
        let id: SiteId = serde_json::from_str("5").unwrap();
        assert_eq!(id, SiteId(5));
    }
}
