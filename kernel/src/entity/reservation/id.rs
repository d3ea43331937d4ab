use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub struct ReservationId(i64);

impl ReservationId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}

impl AsRef<i64> for ReservationId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl From<ReservationId> for i64 {
    fn from(id: ReservationId) -> Self {
        id.0
    }
}

impl Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
