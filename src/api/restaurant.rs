use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::NonZeroU64;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a restaurant on the remote API. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(NonZeroU64);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid restaurant id '{0}': expected a positive integer")]
pub struct InvalidRestaurantId(String);

impl RestaurantId {
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Default for RestaurantId {
    fn default() -> Self {
        Self(NonZeroU64::MIN)
    }
}

impl FromStr for RestaurantId {
    type Err = InvalidRestaurantId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidRestaurantId(s.to_string()))
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
