use kernel::interface::query::VehicleQuery;
use kernel::interface::update::VehicleModifier;
use kernel::prelude::entity::{DailyRate, NewVehicle, RentWindow, Vehicle, VehicleId};
use kernel::KernelError;

use crate::database::sqlite::SqliteConnection;
use crate::error::ConvertError;

pub struct SqliteVehicleRepository;

#[async_trait::async_trait]
impl VehicleQuery<SqliteConnection> for SqliteVehicleRepository {
    async fn find_by_id(
        &self,
        con: &mut SqliteConnection,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        VehicleInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        VehicleInternal::find_all(con).await
    }

    async fn find_available(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        VehicleInternal::find_available(con).await
    }
}

#[async_trait::async_trait]
impl VehicleModifier<SqliteConnection> for SqliteVehicleRepository {
    async fn create(
        &self,
        con: &mut SqliteConnection,
        vehicle: &NewVehicle,
    ) -> error_stack::Result<VehicleId, KernelError> {
        VehicleInternal::create(con, vehicle).await
    }

    async fn update(
        &self,
        con: &mut SqliteConnection,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        VehicleInternal::update(con, vehicle).await
    }

    async fn delete(
        &self,
        con: &mut SqliteConnection,
        id: &VehicleId,
    ) -> error_stack::Result<(), KernelError> {
        VehicleInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct VehicleRow {
    id: i64,
    make: String,
    model: String,
    year: i32,
    mileage: i32,
    daily_rate: f64,
    min_rent_period: i64,
    max_rent_period: i64,
    available_now: bool,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle::new(
            VehicleId::new(row.id),
            row.make,
            row.model,
            row.year,
            row.mileage,
            DailyRate::new(row.daily_rate),
            RentWindow::new(row.min_rent_period, row.max_rent_period),
            row.available_now,
        )
    }
}

pub(in crate::database) struct VehicleInternal;

impl VehicleInternal {
    async fn find_by_id(
        con: &mut sqlx::SqliteConnection,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            // language=sqlite
            r#"
            SELECT id, make, model, year, mileage, daily_rate,
                   min_rent_period, max_rent_period, available_now
            FROM vehicles
            WHERE id = ?
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Vehicle::from))
    }

    async fn find_all(
        con: &mut sqlx::SqliteConnection,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            // language=sqlite
            r#"
            SELECT id, make, model, year, mileage, daily_rate,
                   min_rent_period, max_rent_period, available_now
            FROM vehicles
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn find_available(
        con: &mut sqlx::SqliteConnection,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            // language=sqlite
            r#"
            SELECT id, make, model, year, mileage, daily_rate,
                   min_rent_period, max_rent_period, available_now
            FROM vehicles
            WHERE available_now = 1
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn create(
        con: &mut sqlx::SqliteConnection,
        vehicle: &NewVehicle,
    ) -> error_stack::Result<VehicleId, KernelError> {
        let result = sqlx::query(
            // language=sqlite
            r#"
            INSERT INTO vehicles (make, model, year, mileage, daily_rate,
                                  min_rent_period, max_rent_period, available_now)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(vehicle.make())
        .bind(vehicle.model())
        .bind(vehicle.year())
        .bind(vehicle.mileage())
        .bind(vehicle.daily_rate().as_f64())
        .bind(vehicle.rent_window().min_days())
        .bind(vehicle.rent_window().max_days())
        .bind(vehicle.available_now())
        .execute(con)
        .await
        .convert_error()?;
        Ok(VehicleId::new(result.last_insert_rowid()))
    }

    async fn update(
        con: &mut sqlx::SqliteConnection,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=sqlite
            r#"
            UPDATE vehicles
            SET make = ?, model = ?, year = ?, mileage = ?, daily_rate = ?,
                min_rent_period = ?, max_rent_period = ?, available_now = ?
            WHERE id = ?
            "#,
        )
        .bind(vehicle.make())
        .bind(vehicle.model())
        .bind(vehicle.year())
        .bind(vehicle.mileage())
        .bind(vehicle.daily_rate().as_f64())
        .bind(vehicle.rent_window().min_days())
        .bind(vehicle.rent_window().max_days())
        .bind(vehicle.available_now())
        .bind(vehicle.id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut sqlx::SqliteConnection,
        id: &VehicleId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=sqlite
            r#"
            DELETE FROM vehicles
            WHERE id = ?
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::VehicleQuery;
    use kernel::interface::update::VehicleModifier;
    use kernel::prelude::entity::{DailyRate, NewVehicle, RentWindow, VehicleUpdate};
    use kernel::KernelError;

    use crate::database::sqlite::{SqliteDatabase, SqliteVehicleRepository};

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::connect("sqlite::memory:").await?;
        let mut con = db.transact().await?;

        let vehicle = NewVehicle::new(
            "Toyota",
            "Corolla",
            2020,
            42_000,
            DailyRate::new(50.0),
            RentWindow::new(2, 10),
            true,
        );
        let id = SqliteVehicleRepository.create(&mut con, &vehicle).await?;

        let found = SqliteVehicleRepository.find_by_id(&mut con, &id).await?;
        let found = found.expect("vehicle should exist");
        assert_eq!(found.make(), "Toyota");
        assert_eq!(found.daily_rate().as_f64(), 50.0);
        assert!(found.available_now());

        let updated = found.clone().apply(VehicleUpdate {
            mileage: Some(43_500),
            available_now: Some(false),
            ..VehicleUpdate::default()
        });
        SqliteVehicleRepository.update(&mut con, &updated).await?;

        let found = SqliteVehicleRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(updated));

        let available = SqliteVehicleRepository.find_available(&mut con).await?;
        assert!(available.is_empty());
        let all = SqliteVehicleRepository.find_all(&mut con).await?;
        assert_eq!(all.len(), 1);

        SqliteVehicleRepository.delete(&mut con, &id).await?;
        let found = SqliteVehicleRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());
        Ok(())
    }
}
