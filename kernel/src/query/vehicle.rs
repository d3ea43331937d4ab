use crate::entity::{Vehicle, VehicleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait VehicleQuery<Connection>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError>;

    async fn find_available(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError>;
}

pub trait DependOnVehicleQuery<Connection>: Sync + Send + 'static {
    type VehicleQuery: VehicleQuery<Connection>;
    fn vehicle_query(&self) -> &Self::VehicleQuery;
}
