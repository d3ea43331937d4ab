use error_stack::report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    DependOnReservationQuery, DependOnVehicleQuery, ReservationQuery, VehicleQuery,
};
use kernel::interface::update::{DependOnVehicleModifier, VehicleModifier};
use kernel::prelude::entity::{
    DailyRate, NewVehicle, RentWindow, ReservationStatus, VehicleId, VehicleUpdate,
};
use kernel::KernelError;

use crate::transfer::{
    CreateVehicleDto, DeleteVehicleDto, GetVehicleDto, UpdateVehicleDto, VehicleDto,
};

#[async_trait::async_trait]
pub trait GetVehicleService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnVehicleQuery<Connection>
{
    async fn get_vehicle(&self, dto: GetVehicleDto) -> error_stack::Result<VehicleDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = VehicleId::new(dto.id);
        let vehicle = self
            .vehicle_query()
            .find_by_id(&mut connection, &id)
            .await?;
        vehicle
            .map(VehicleDto::from)
            .ok_or_else(|| report!(KernelError::VehicleNotFound))
    }

    async fn get_vehicles(&self) -> error_stack::Result<Vec<VehicleDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let vehicles = self.vehicle_query().find_all(&mut connection).await?;
        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    async fn get_available_vehicles(&self) -> error_stack::Result<Vec<VehicleDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let vehicles = self.vehicle_query().find_available(&mut connection).await?;
        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }
}

impl<Connection: 'static + Send, T> GetVehicleService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnVehicleQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateVehicleService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnVehicleModifier<Connection>
{
    /// New vehicles enter the catalog available for booking.
    async fn create_vehicle(&self, dto: CreateVehicleDto) -> error_stack::Result<i64, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let vehicle = NewVehicle::new(
            dto.make,
            dto.model,
            dto.year,
            dto.mileage,
            DailyRate::new(dto.daily_rate),
            RentWindow::new(dto.min_rent_period, dto.max_rent_period),
            true,
        );
        let id = self
            .vehicle_modifier()
            .create(&mut connection, &vehicle)
            .await?;
        tracing::info!(%id, make = vehicle.make(), model = vehicle.model(), "vehicle added");
        Ok(id.into())
    }
}

impl<Connection: 'static + Send, T> CreateVehicleService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnVehicleModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateVehicleService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnVehicleQuery<Connection>
    + DependOnVehicleModifier<Connection>
{
    async fn update_vehicle(&self, dto: UpdateVehicleDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = VehicleId::new(dto.id);
        let vehicle = self
            .vehicle_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| report!(KernelError::VehicleNotFound))?;

        let updated = vehicle.apply(VehicleUpdate {
            make: dto.make,
            model: dto.model,
            year: dto.year,
            mileage: dto.mileage,
            daily_rate: dto.daily_rate.map(DailyRate::new),
            min_rent_period: dto.min_rent_period,
            max_rent_period: dto.max_rent_period,
            available_now: dto.available_now,
        });
        self.vehicle_modifier()
            .update(&mut connection, &updated)
            .await?;
        tracing::info!(%id, "vehicle updated");
        Ok(())
    }
}

impl<Connection: 'static + Send, T> UpdateVehicleService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnVehicleQuery<Connection>
        + DependOnVehicleModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteVehicleService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnVehicleQuery<Connection>
    + DependOnVehicleModifier<Connection>
    + DependOnReservationQuery<Connection>
{
    /// Hard delete, refused while pending or approved reservations still
    /// reference the vehicle. Rejected reservations do not block.
    async fn delete_vehicle(&self, dto: DeleteVehicleDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = VehicleId::new(dto.id);
        self.vehicle_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| report!(KernelError::VehicleNotFound))?;

        let reservations = self
            .reservation_query()
            .find_by_vehicle_id(&mut connection, &id)
            .await?;
        let blocked = reservations
            .iter()
            .any(|r| r.status() != &ReservationStatus::Rejected);
        if blocked {
            return Err(report!(KernelError::VehicleReserved));
        }

        self.vehicle_modifier().delete(&mut connection, &id).await?;
        tracing::info!(%id, "vehicle deleted");
        Ok(())
    }
}

impl<Connection: 'static + Send, T> DeleteVehicleService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnVehicleQuery<Connection>
        + DependOnVehicleModifier<Connection>
        + DependOnReservationQuery<Connection>
{
}

#[cfg(test)]
mod test {
    use driver::database::SqliteDatabase;
    use kernel::KernelError;

    use crate::service::{CreateVehicleService, GetVehicleService, UpdateVehicleService};
    use crate::transfer::{CreateVehicleDto, GetVehicleDto, UpdateVehicleDto};

    fn corolla() -> CreateVehicleDto {
        CreateVehicleDto {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            mileage: 42_000,
            daily_rate: 50.0,
            min_rent_period: 2,
            max_rent_period: 10,
        }
    }

    #[tokio::test]
    async fn create_then_partial_update() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::connect("sqlite::memory:").await?;
        let id = db.create_vehicle(corolla()).await?;

        db.update_vehicle(UpdateVehicleDto {
            id,
            daily_rate: Some(55.0),
            available_now: Some(false),
            ..UpdateVehicleDto::default()
        })
        .await?;

        let vehicle = db.get_vehicle(GetVehicleDto { id }).await?;
        assert_eq!(vehicle.make, "Toyota");
        assert_eq!(vehicle.daily_rate, 55.0);
        assert_eq!(vehicle.min_rent_period, 2);
        assert!(!vehicle.available_now);

        let available = db.get_available_vehicles().await?;
        assert!(available.is_empty());
        assert_eq!(db.get_vehicles().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_vehicle_fails() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::connect("sqlite::memory:").await?;
        let report = db
            .update_vehicle(UpdateVehicleDto {
                id: 99,
                ..UpdateVehicleDto::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::VehicleNotFound
        ));
        Ok(())
    }
}
