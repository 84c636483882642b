//! Target membership value object.
//!
//! A target covers either one site or an explicit set of sites. Membership is
//! carried as a typed variant rather than a sentinel id plus an encoded
//! string, so splitting never round-trips through display text. The historic
//! comma-joined id list survives as the serialized form (`encode`/`decode`)
//! and as the combined target's display label.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use thiserror::Error;

use super::site_id::SiteId;

/// Which site(s) a target covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    /// A single physical site.
    Single(SiteId),
    /// A multi-site selection; order- and duplicate-insensitive.
    Combined(BTreeSet<SiteId>),
}

/// Error decoding a persisted membership string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid site id '{token}' in membership list")]
pub struct ParseMembershipError {
    pub token: String,
}

impl Membership {
    /// Combined membership over the given ids.
    pub fn combined(ids: impl IntoIterator<Item = SiteId>) -> Self {
        Membership::Combined(ids.into_iter().collect())
    }

    pub fn is_combined(&self) -> bool {
        matches!(self, Membership::Combined(_))
    }

    /// The site id of a single-site target, `None` for combined targets.
    pub fn single_id(&self) -> Option<SiteId> {
        match self {
            Membership::Single(id) => Some(*id),
            Membership::Combined(_) => None,
        }
    }

    /// Whether `id` is covered by this membership.
    pub fn contains(&self, id: SiteId) -> bool {
        match self {
            Membership::Single(own) => *own == id,
            Membership::Combined(ids) => ids.contains(&id),
        }
    }

    /// All covered ids, ascending.
    pub fn site_ids(&self) -> BTreeSet<SiteId> {
        match self {
            Membership::Single(id) => BTreeSet::from([*id]),
            Membership::Combined(ids) => ids.clone(),
        }
    }

    /// Comma-joined id list, ascending. Byte-compatible with the historic
    /// persisted format consumed by older renewal files.
    pub fn encode(&self) -> String {
        self.site_ids()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Inverse of [`encode`](Self::encode) for combined targets.
    ///
    /// Duplicate and reordered ids are accepted; tokens are trimmed. An empty
    /// string decodes to an empty combined set.
    pub fn decode(input: &str) -> Result<Self, ParseMembershipError> {
        let mut ids = BTreeSet::new();
        for token in input.split(',').map(str::trim) {
            if token.is_empty() {
                continue;
            }
            let id: SiteId = token.parse().map_err(|_| ParseMembershipError {
                token: token.to_string(),
            })?;
            ids.insert(id);
        }
        Ok(Membership::Combined(ids))
    }
}

impl Serialize for Membership {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Membership::Single(id) => serializer.serialize_u32(id.0),
            Membership::Combined(_) => serializer.serialize_str(&self.encode()),
        }
    }
}

impl<'de> Deserialize<'de> for Membership {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(u32),
            Ids(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Id(id) => Ok(Membership::Single(SiteId(id))),
            Repr::Ids(s) => Membership::decode(&s).map_err(serde::de::Error::custom),
        }
    }
}
