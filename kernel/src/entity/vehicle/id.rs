use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub struct VehicleId(i64);

impl VehicleId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}

impl AsRef<i64> for VehicleId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl From<VehicleId> for i64 {
    fn from(id: VehicleId) -> Self {
        id.0
    }
}

impl Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
