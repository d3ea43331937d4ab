use kernel::prelude::entity::Reservation;

#[derive(Debug, Clone)]
pub struct ReservationDto {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

impl From<Reservation> for ReservationDto {
    fn from(value: Reservation) -> Self {
        Self {
            id: (*value.id()).into(),
            user_id: (*value.user_id()).into(),
            vehicle_id: (*value.vehicle_id()).into(),
            start_date: value.period().start_iso(),
            end_date: value.period().end_iso(),
            status: value.status().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookVehicleDto {
    pub vehicle_id: i64,
    pub user_id: i64,
    pub start_date: String,
    pub end_date: String,
}

/// Booking result: the persisted reservation plus the fee computed from the
/// vehicle's daily rate. The fee stays at full precision here.
#[derive(Debug, Clone)]
pub struct BookingDto {
    pub reservation: ReservationDto,
    pub fee: f64,
}

#[derive(Debug, Clone)]
pub struct DecideReservationDto {
    pub reservation_id: i64,
    pub decision: String,
}
