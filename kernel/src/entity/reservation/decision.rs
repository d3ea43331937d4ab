use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::ReservationStatus;
use crate::KernelError;

/// Administrator verdict on a pending reservation.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    Approve,
    Reject,
}

impl FromStr for Decision {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approve" => Ok(Decision::Approve),
            "reject" => Ok(Decision::Reject),
            _ => Err(KernelError::InvalidDecision),
        }
    }
}

impl From<Decision> for ReservationStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => ReservationStatus::Approved,
            Decision::Reject => ReservationStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::Decision;
    use crate::KernelError;

    #[test]
    fn parse_is_trimmed_and_case_insensitive() {
        assert_eq!(" Approve ".parse::<Decision>().unwrap(), Decision::Approve);
        assert_eq!("REJECT".parse::<Decision>().unwrap(), Decision::Reject);
    }

    #[test]
    fn unrecognized_decision_is_rejected() {
        assert!(matches!(
            "cancel".parse::<Decision>(),
            Err(KernelError::InvalidDecision)
        ));
    }
}
