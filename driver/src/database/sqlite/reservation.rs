use error_stack::Report;

use kernel::interface::query::ReservationQuery;
use kernel::interface::update::ReservationModifier;
use kernel::prelude::entity::{
    AccountId, NewReservation, RentalPeriod, Reservation, ReservationId, ReservationStatus,
    VehicleId,
};
use kernel::KernelError;

use crate::database::sqlite::SqliteConnection;
use crate::error::ConvertError;

pub struct SqliteReservationRepository;

#[async_trait::async_trait]
impl ReservationQuery<SqliteConnection> for SqliteReservationRepository {
    async fn find_by_id(
        &self,
        con: &mut SqliteConnection,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError> {
        ReservationInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        ReservationInternal::find_all(con).await
    }

    async fn find_by_vehicle_id(
        &self,
        con: &mut SqliteConnection,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        ReservationInternal::find_by_vehicle_id(con, vehicle_id).await
    }
}

#[async_trait::async_trait]
impl ReservationModifier<SqliteConnection> for SqliteReservationRepository {
    async fn create(
        &self,
        con: &mut SqliteConnection,
        reservation: &NewReservation,
    ) -> error_stack::Result<ReservationId, KernelError> {
        ReservationInternal::create(con, reservation).await
    }

    async fn update_status(
        &self,
        con: &mut SqliteConnection,
        id: &ReservationId,
        status: ReservationStatus,
    ) -> error_stack::Result<(), KernelError> {
        ReservationInternal::update_status(con, id, status).await
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i64,
    user_id: i64,
    vehicle_id: i64,
    start_date: String,
    end_date: String,
    status: String,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = Report<KernelError>;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        let period = RentalPeriod::parse(&row.start_date, &row.end_date)?;
        let status = row.status.parse::<ReservationStatus>().map_err(Report::new)?;
        Ok(Reservation::new(
            ReservationId::new(row.id),
            AccountId::new(row.user_id),
            VehicleId::new(row.vehicle_id),
            period,
            status,
        ))
    }
}

pub(in crate::database) struct ReservationInternal;

impl ReservationInternal {
    async fn find_by_id(
        con: &mut sqlx::SqliteConnection,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            // language=sqlite
            r#"
            SELECT id, user_id, vehicle_id, start_date, end_date, status
            FROM reservations
            WHERE id = ?
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Reservation::try_from).transpose()
    }

    async fn find_all(
        con: &mut sqlx::SqliteConnection,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            // language=sqlite
            r#"
            SELECT id, user_id, vehicle_id, start_date, end_date, status
            FROM reservations
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_vehicle_id(
        con: &mut sqlx::SqliteConnection,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            // language=sqlite
            r#"
            SELECT id, user_id, vehicle_id, start_date, end_date, status
            FROM reservations
            WHERE vehicle_id = ?
            ORDER BY id
            "#,
        )
        .bind(vehicle_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn create(
        con: &mut sqlx::SqliteConnection,
        reservation: &NewReservation,
    ) -> error_stack::Result<ReservationId, KernelError> {
        let result = sqlx::query(
            // language=sqlite
            r#"
            INSERT INTO reservations (user_id, vehicle_id, start_date, end_date, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(reservation.user_id().as_ref())
        .bind(reservation.vehicle_id().as_ref())
        .bind(reservation.period().start_iso())
        .bind(reservation.period().end_iso())
        .bind(reservation.status().as_str())
        .execute(con)
        .await
        .convert_error()?;
        Ok(ReservationId::new(result.last_insert_rowid()))
    }

    async fn update_status(
        con: &mut sqlx::SqliteConnection,
        id: &ReservationId,
        status: ReservationStatus,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=sqlite
            r#"
            UPDATE reservations
            SET status = ?
            WHERE id = ?
            "#,
        )
        .bind(status.as_str())
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
    use kernel::interface::query::ReservationQuery;
    use kernel::interface::update::{AccountModifier, ReservationModifier, VehicleModifier};
    use kernel::prelude::entity::{
        DailyRate, EmailAddress, NewAccount, NewReservation, NewVehicle, PasswordHash,
        RentWindow, RentalPeriod, ReservationStatus, UserName, UserRole,
    };
    use kernel::KernelError;

    use crate::database::sqlite::{
        SqliteAccountRepository, SqliteDatabase, SqliteReservationRepository,
        SqliteVehicleRepository,
    };

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::connect("sqlite::memory:").await?;
        let mut con = db.transact().await?;

        let account = NewAccount::new(
            UserName::new("bob"),
            EmailAddress::new("bob@example.com"),
            PasswordHash::new("$argon2id$stub"),
            UserRole::Customer,
        );
        let user_id = SqliteAccountRepository.create(&mut con, &account).await?;

        let vehicle = NewVehicle::new(
            "Honda",
            "Civic",
            2021,
            18_000,
            DailyRate::new(60.0),
            RentWindow::new(1, 30),
            true,
        );
        let vehicle_id = SqliteVehicleRepository.create(&mut con, &vehicle).await?;

        let period = RentalPeriod::parse("2024-03-01", "2024-03-08")?;
        let reservation = NewReservation::new(user_id, vehicle_id, period);
        let id = SqliteReservationRepository
            .create(&mut con, &reservation)
            .await?;

        let found = SqliteReservationRepository.find_by_id(&mut con, &id).await?;
        let found = found.expect("reservation should exist");
        assert_eq!(found.status(), &ReservationStatus::Pending);
        assert_eq!(found.period(), &period);
        assert_eq!(found.user_id(), &user_id);

        SqliteReservationRepository
            .update_status(&mut con, &id, ReservationStatus::Approved)
            .await?;
        let found = SqliteReservationRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(
            found.expect("reservation should exist").status(),
            &ReservationStatus::Approved
        );

        let by_vehicle = SqliteReservationRepository
            .find_by_vehicle_id(&mut con, &vehicle_id)
            .await?;
        assert_eq!(by_vehicle.len(), 1);

        let all = SqliteReservationRepository.find_all(&mut con).await?;
        assert_eq!(all.len(), 1);
        Ok(())
    }
}
