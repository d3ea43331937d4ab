use crate::entity::{Reservation, ReservationId, VehicleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReservationQuery<Connection>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError>;

    /// All reservations in insertion order.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Reservation>, KernelError>;

    async fn find_by_vehicle_id(
        &self,
        con: &mut Connection,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError>;
}

pub trait DependOnReservationQuery<Connection>: Sync + Send + 'static {
    type ReservationQuery: ReservationQuery<Connection>;
    fn reservation_query(&self) -> &Self::ReservationQuery;
}
