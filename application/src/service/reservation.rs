use error_stack::{report, Report};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    DependOnReservationQuery, DependOnVehicleQuery, ReservationQuery, VehicleQuery,
};
use kernel::interface::update::{DependOnReservationModifier, ReservationModifier};
use kernel::prelude::entity::{
    AccountId, Decision, NewReservation, RentalPeriod, Reservation, ReservationId, VehicleId,
};
use kernel::KernelError;

use crate::transfer::{BookVehicleDto, BookingDto, DecideReservationDto, ReservationDto};

#[async_trait::async_trait]
pub trait BookVehicleService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnVehicleQuery<Connection>
    + DependOnReservationModifier<Connection>
{
    /// Books a vehicle for the requested period. Validation is fail-fast:
    /// date format, then date range, then vehicle lookup, then the vehicle's
    /// rent window. Nothing is persisted unless every check passes.
    async fn book_vehicle(&self, dto: BookVehicleDto) -> error_stack::Result<BookingDto, KernelError> {
        let period = RentalPeriod::parse(&dto.start_date, &dto.end_date)?;

        let mut connection = self.database_connection().transact().await?;

        let vehicle_id = VehicleId::new(dto.vehicle_id);
        let vehicle = self
            .vehicle_query()
            .find_by_id(&mut connection, &vehicle_id)
            .await?
            .ok_or_else(|| report!(KernelError::VehicleNotFound))?;

        let days = period.duration_days();
        if !vehicle.rent_window().contains(days) {
            return Err(report!(KernelError::DurationOutOfRange));
        }

        let fee = vehicle.daily_rate().fee_for(days);
        let reservation = NewReservation::new(AccountId::new(dto.user_id), vehicle_id, period);
        let id = self
            .reservation_modifier()
            .create(&mut connection, &reservation)
            .await?;
        tracing::info!(%id, vehicle = %vehicle_id, days, fee, "vehicle booked");

        let reservation = Reservation::new(
            id,
            *reservation.user_id(),
            *reservation.vehicle_id(),
            *reservation.period(),
            *reservation.status(),
        );
        Ok(BookingDto {
            reservation: ReservationDto::from(reservation),
            fee,
        })
    }
}

impl<Connection: 'static + Send, T> BookVehicleService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnVehicleQuery<Connection>
        + DependOnReservationModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetReservationService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnReservationQuery<Connection>
{
    async fn get_reservations(&self) -> error_stack::Result<Vec<ReservationDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let reservations = self.reservation_query().find_all(&mut connection).await?;
        Ok(reservations.into_iter().map(ReservationDto::from).collect())
    }
}

impl<Connection: 'static + Send, T> GetReservationService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnReservationQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait DecideReservationService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnReservationQuery<Connection>
    + DependOnReservationModifier<Connection>
{
    /// Applies an administrator decision to a pending reservation. The
    /// transition is one-way: an already decided reservation reports
    /// `ReservationClosed` and keeps its first decision.
    async fn decide_reservation(
        &self,
        dto: DecideReservationDto,
    ) -> error_stack::Result<ReservationDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ReservationId::new(dto.reservation_id);
        let reservation = self
            .reservation_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| report!(KernelError::ReservationNotFound))?;

        let decision = dto.decision.parse::<Decision>().map_err(Report::new)?;
        let decided = reservation.decide(decision)?;
        self.reservation_modifier()
            .update_status(&mut connection, decided.id(), *decided.status())
            .await?;
        tracing::info!(%id, status = %decided.status(), "reservation decided");
        Ok(ReservationDto::from(decided))
    }
}

impl<Connection: 'static + Send, T> DecideReservationService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnReservationQuery<Connection>
        + DependOnReservationModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use driver::database::SqliteDatabase;
    use kernel::prelude::entity::UserRole;
    use kernel::KernelError;

    use crate::service::{
        BookVehicleService, CreateVehicleService, DecideReservationService, GetReservationService,
        RegisterAccountService,
    };
    use crate::transfer::{
        BookVehicleDto, CreateVehicleDto, DecideReservationDto, RegisterAccountDto,
    };

    async fn fixture() -> error_stack::Result<(SqliteDatabase, i64, i64), KernelError> {
        let db = SqliteDatabase::connect("sqlite::memory:").await?;
        let user = db
            .register_account(RegisterAccountDto {
                username: "dave".to_string(),
                email: "dave@example.com".to_string(),
                password: "secret".to_string(),
                role: UserRole::Customer,
            })
            .await?;
        let vehicle_id = db
            .create_vehicle(CreateVehicleDto {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2020,
                mileage: 42_000,
                daily_rate: 50.0,
                min_rent_period: 2,
                max_rent_period: 10,
            })
            .await?;
        Ok((db, user.id, vehicle_id))
    }

    fn booking(vehicle_id: i64, user_id: i64, start: &str, end: &str) -> BookVehicleDto {
        BookVehicleDto {
            vehicle_id,
            user_id,
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[tokio::test]
    async fn booking_computes_fee_and_starts_pending() -> error_stack::Result<(), KernelError> {
        let (db, user_id, vehicle_id) = fixture().await?;

        let booked = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-01-01", "2024-01-05"))
            .await?;
        assert_eq!(booked.fee, 200.0);
        assert_eq!(booked.reservation.status, "pending");
        assert_eq!(booked.reservation.user_id, user_id);
        assert_eq!(booked.reservation.vehicle_id, vehicle_id);

        let listed = db.get_reservations().await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, booked.reservation.id);
        assert_eq!(listed[0].start_date, "2024-01-01");
        Ok(())
    }

    #[tokio::test]
    async fn reversed_dates_persist_nothing() -> error_stack::Result<(), KernelError> {
        let (db, user_id, vehicle_id) = fixture().await?;

        let report = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-01-05", "2024-01-01"))
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidDateRange
        ));
        assert!(db.get_reservations().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_date_fails_before_vehicle_lookup() -> error_stack::Result<(), KernelError> {
        let (db, user_id, _) = fixture().await?;

        // A nonexistent vehicle id shows the format check runs first.
        let report = db
            .book_vehicle(booking(999, user_id, "01/01/2024", "2024-01-05"))
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidDateFormat
        ));
        assert!(db.get_reservations().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_vehicle_fails_booking() -> error_stack::Result<(), KernelError> {
        let (db, user_id, _) = fixture().await?;

        let report = db
            .book_vehicle(booking(999, user_id, "2024-01-01", "2024-01-05"))
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::VehicleNotFound
        ));
        assert!(db.get_reservations().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duration_outside_rent_window_is_rejected() -> error_stack::Result<(), KernelError> {
        let (db, user_id, vehicle_id) = fixture().await?;

        // One day, below the two-day minimum.
        let report = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-01-01", "2024-01-02"))
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::DurationOutOfRange
        ));

        // Eleven days, above the ten-day maximum.
        let report = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-01-01", "2024-01-12"))
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::DurationOutOfRange
        ));
        assert!(db.get_reservations().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn listing_preserves_creation_order() -> error_stack::Result<(), KernelError> {
        let (db, user_id, vehicle_id) = fixture().await?;

        let mut ids = Vec::new();
        for (start, end) in [
            ("2024-01-01", "2024-01-05"),
            ("2024-02-01", "2024-02-05"),
            ("2024-03-01", "2024-03-05"),
        ] {
            let booked = db
                .book_vehicle(booking(vehicle_id, user_id, start, end))
                .await?;
            ids.push(booked.reservation.id);
        }

        let listed = db.get_reservations().await?;
        let listed_ids = listed.iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(listed_ids, ids);
        Ok(())
    }

    #[tokio::test]
    async fn approve_and_reject_transition_pending() -> error_stack::Result<(), KernelError> {
        let (db, user_id, vehicle_id) = fixture().await?;

        let first = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-01-01", "2024-01-05"))
            .await?;
        let second = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-02-01", "2024-02-05"))
            .await?;

        let approved = db
            .decide_reservation(DecideReservationDto {
                reservation_id: first.reservation.id,
                decision: "approve".to_string(),
            })
            .await?;
        assert_eq!(approved.status, "approved");

        let rejected = db
            .decide_reservation(DecideReservationDto {
                reservation_id: second.reservation.id,
                decision: "reject".to_string(),
            })
            .await?;
        assert_eq!(rejected.status, "rejected");
        Ok(())
    }

    #[tokio::test]
    async fn second_decision_is_refused() -> error_stack::Result<(), KernelError> {
        let (db, user_id, vehicle_id) = fixture().await?;

        let booked = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-01-01", "2024-01-05"))
            .await?;
        db.decide_reservation(DecideReservationDto {
            reservation_id: booked.reservation.id,
            decision: "approve".to_string(),
        })
        .await?;

        let report = db
            .decide_reservation(DecideReservationDto {
                reservation_id: booked.reservation.id,
                decision: "reject".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::ReservationClosed
        ));

        // The first decision stands.
        let listed = db.get_reservations().await?;
        assert_eq!(listed[0].status, "approved");
        Ok(())
    }

    #[tokio::test]
    async fn unrecognized_decision_leaves_status_unchanged() -> error_stack::Result<(), KernelError>
    {
        let (db, user_id, vehicle_id) = fixture().await?;

        let booked = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-01-01", "2024-01-05"))
            .await?;
        let report = db
            .decide_reservation(DecideReservationDto {
                reservation_id: booked.reservation.id,
                decision: "cancel".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidDecision
        ));

        let listed = db.get_reservations().await?;
        assert_eq!(listed[0].status, "pending");
        Ok(())
    }

    #[tokio::test]
    async fn deciding_missing_reservation_fails() -> error_stack::Result<(), KernelError> {
        let (db, _, _) = fixture().await?;

        let report = db
            .decide_reservation(DecideReservationDto {
                reservation_id: 42,
                decision: "approve".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::ReservationNotFound
        ));
        Ok(())
    }

    #[tokio::test]
    async fn vehicle_with_live_reservations_cannot_be_deleted(
    ) -> error_stack::Result<(), KernelError> {
        use crate::service::DeleteVehicleService;
        use crate::transfer::DeleteVehicleDto;

        let (db, user_id, vehicle_id) = fixture().await?;
        let booked = db
            .book_vehicle(booking(vehicle_id, user_id, "2024-01-01", "2024-01-05"))
            .await?;

        let report = db
            .delete_vehicle(DeleteVehicleDto { id: vehicle_id })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::VehicleReserved
        ));

        // A rejected reservation no longer blocks deletion.
        db.decide_reservation(DecideReservationDto {
            reservation_id: booked.reservation.id,
            decision: "reject".to_string(),
        })
        .await?;
        db.delete_vehicle(DeleteVehicleDto { id: vehicle_id }).await?;
        Ok(())
    }
}
