mod decision;
mod id;
mod period;
mod status;

pub use self::{decision::*, id::*, period::*, status::*};
use error_stack::report;
use serde::{Deserialize, Serialize};

use crate::entity::{AccountId, VehicleId};
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    user_id: AccountId,
    vehicle_id: VehicleId,
    period: RentalPeriod,
    status: ReservationStatus,
}

impl Reservation {
    pub fn new(
        id: ReservationId,
        user_id: AccountId,
        vehicle_id: VehicleId,
        period: RentalPeriod,
        status: ReservationStatus,
    ) -> Self {
        Self {
            id,
            user_id,
            vehicle_id,
            period,
            status,
        }
    }

    pub fn id(&self) -> &ReservationId {
        &self.id
    }

    pub fn user_id(&self) -> &AccountId {
        &self.user_id
    }

    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    pub fn period(&self) -> &RentalPeriod {
        &self.period
    }

    pub fn status(&self) -> &ReservationStatus {
        &self.status
    }

    /// Drives the one-way status transition. Terminal reservations stay as
    /// decided; a second decision reports `ReservationClosed`.
    pub fn decide(self, decision: Decision) -> error_stack::Result<Self, KernelError> {
        if self.status.is_terminal() {
            return Err(report!(KernelError::ReservationClosed));
        }
        Ok(Self {
            status: decision.into(),
            ..self
        })
    }
}

/// Reservation data before the store has assigned a surrogate id.
/// Always enters the store as `pending`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewReservation {
    user_id: AccountId,
    vehicle_id: VehicleId,
    period: RentalPeriod,
    status: ReservationStatus,
}

impl NewReservation {
    pub fn new(user_id: AccountId, vehicle_id: VehicleId, period: RentalPeriod) -> Self {
        Self {
            user_id,
            vehicle_id,
            period,
            status: ReservationStatus::Pending,
        }
    }

    pub fn user_id(&self) -> &AccountId {
        &self.user_id
    }

    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    pub fn period(&self) -> &RentalPeriod {
        &self.period
    }

    pub fn status(&self) -> &ReservationStatus {
        &self.status
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{
        AccountId, Decision, NewReservation, RentalPeriod, Reservation, ReservationId,
        ReservationStatus, VehicleId,
    };
    use crate::KernelError;

    fn pending() -> Reservation {
        let period = RentalPeriod::parse("2024-01-01", "2024-01-05").unwrap();
        Reservation::new(
            ReservationId::new(42),
            AccountId::new(3),
            VehicleId::new(7),
            period,
            ReservationStatus::Pending,
        )
    }

    #[test]
    fn new_reservation_is_pending() {
        let period = RentalPeriod::parse("2024-01-01", "2024-01-05").unwrap();
        let reservation = NewReservation::new(AccountId::new(3), VehicleId::new(7), period);
        assert_eq!(reservation.status(), &ReservationStatus::Pending);
    }

    #[test]
    fn pending_can_be_approved_or_rejected() {
        let approved = pending().decide(Decision::Approve).unwrap();
        assert_eq!(approved.status(), &ReservationStatus::Approved);

        let rejected = pending().decide(Decision::Reject).unwrap();
        assert_eq!(rejected.status(), &ReservationStatus::Rejected);
    }

    #[test]
    fn terminal_reservation_rejects_second_decision() {
        let approved = pending().decide(Decision::Approve).unwrap();
        let report = approved.decide(Decision::Reject).unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::ReservationClosed
        ));
    }
}
