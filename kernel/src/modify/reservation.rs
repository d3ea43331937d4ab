use crate::entity::{NewReservation, ReservationId, ReservationStatus};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReservationModifier<Connection>: 'static + Sync + Send {
    /// Persists the reservation and returns the store-assigned id.
    async fn create(
        &self,
        con: &mut Connection,
        reservation: &NewReservation,
    ) -> error_stack::Result<ReservationId, KernelError>;

    async fn update_status(
        &self,
        con: &mut Connection,
        id: &ReservationId,
        status: ReservationStatus,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnReservationModifier<Connection>: 'static + Sync + Send {
    type ReservationModifier: ReservationModifier<Connection>;
    fn reservation_modifier(&self) -> &Self::ReservationModifier;
}
