use error_stack::Report;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Error, Pool, Sqlite};

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{
    DependOnAccountQuery, DependOnReservationQuery, DependOnVehicleQuery,
};
use kernel::interface::update::{
    DependOnAccountModifier, DependOnReservationModifier, DependOnVehicleModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{account::*, reservation::*, vehicle::*};

mod account;
mod reservation;
mod vehicle;

static DATABASE_URL: &str = "DATABASE_URL";
static DEFAULT_DATABASE_URL: &str = "sqlite://car_rental.db?mode=rwc";

pub type SqliteConnection = PoolConnection<Sqlite>;

pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
}

impl SqliteDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(DATABASE_URL).unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Self::connect(&url).await
    }

    pub async fn connect(url: &str) -> error_stack::Result<Self, KernelError> {
        // An in-memory SQLite database lives and dies with its connection, so
        // the pool keeps exactly one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .convert_error()?;
        Self::create_tables(&pool).await?;
        Ok(Self { pool })
    }

    async fn create_tables(pool: &Pool<Sqlite>) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=sqlite
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                role TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await
        .convert_error()?;
        sqlx::query(
            // language=sqlite
            r#"
            CREATE TABLE IF NOT EXISTS vehicles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                make TEXT NOT NULL,
                model TEXT NOT NULL,
                year INTEGER NOT NULL,
                mileage INTEGER NOT NULL,
                daily_rate REAL NOT NULL,
                min_rent_period INTEGER NOT NULL,
                max_rent_period INTEGER NOT NULL,
                available_now INTEGER NOT NULL DEFAULT 1
            )
            "#,
        )
        .execute(pool)
        .await
        .convert_error()?;
        sqlx::query(
            // language=sqlite
            r#"
            CREATE TABLE IF NOT EXISTS reservations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES accounts (id),
                vehicle_id INTEGER NOT NULL REFERENCES vehicles (id),
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                status TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await
        .convert_error()?;
        tracing::debug!("database schema ensured");
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<SqliteConnection> for SqliteDatabase {
    async fn transact(&self) -> error_stack::Result<SqliteConnection, KernelError> {
        let con = self.pool.acquire().await.convert_error()?;
        Ok(con)
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            Error::RowNotFound => Report::from(error).change_context(KernelError::NotFound),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}

impl DependOnAccountQuery<SqliteConnection> for SqliteDatabase {
    type AccountQuery = SqliteAccountRepository;
    fn account_query(&self) -> &Self::AccountQuery {
        &SqliteAccountRepository
    }
}

impl DependOnAccountModifier<SqliteConnection> for SqliteDatabase {
    type AccountModifier = SqliteAccountRepository;
    fn account_modifier(&self) -> &Self::AccountModifier {
        &SqliteAccountRepository
    }
}

impl DependOnVehicleQuery<SqliteConnection> for SqliteDatabase {
    type VehicleQuery = SqliteVehicleRepository;
    fn vehicle_query(&self) -> &Self::VehicleQuery {
        &SqliteVehicleRepository
    }
}

impl DependOnVehicleModifier<SqliteConnection> for SqliteDatabase {
    type VehicleModifier = SqliteVehicleRepository;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier {
        &SqliteVehicleRepository
    }
}

impl DependOnReservationQuery<SqliteConnection> for SqliteDatabase {
    type ReservationQuery = SqliteReservationRepository;
    fn reservation_query(&self) -> &Self::ReservationQuery {
        &SqliteReservationRepository
    }
}

impl DependOnReservationModifier<SqliteConnection> for SqliteDatabase {
    type ReservationModifier = SqliteReservationRepository;
    fn reservation_modifier(&self) -> &Self::ReservationModifier {
        &SqliteReservationRepository
    }
}
