use crate::entity::{NewVehicle, Vehicle, VehicleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait VehicleModifier<Connection>: 'static + Sync + Send {
    /// Persists the vehicle and returns the store-assigned id.
    async fn create(
        &self,
        con: &mut Connection,
        vehicle: &NewVehicle,
    ) -> error_stack::Result<VehicleId, KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &VehicleId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnVehicleModifier<Connection>: 'static + Sync + Send {
    type VehicleModifier: VehicleModifier<Connection>;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier;
}
