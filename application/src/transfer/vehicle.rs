use kernel::prelude::entity::Vehicle;

#[derive(Debug, Clone)]
pub struct VehicleDto {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub daily_rate: f64,
    pub min_rent_period: i64,
    pub max_rent_period: i64,
    pub available_now: bool,
}

impl From<Vehicle> for VehicleDto {
    fn from(value: Vehicle) -> Self {
        Self {
            id: (*value.id()).into(),
            make: value.make().to_string(),
            model: value.model().to_string(),
            year: value.year(),
            mileage: value.mileage(),
            daily_rate: value.daily_rate().as_f64(),
            min_rent_period: value.rent_window().min_days(),
            max_rent_period: value.rent_window().max_days(),
            available_now: value.available_now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVehicleDto {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub daily_rate: f64,
    pub min_rent_period: i64,
    pub max_rent_period: i64,
}

#[derive(Debug, Clone)]
pub struct GetVehicleDto {
    pub id: i64,
}

/// `None` keeps the current value of the field.
#[derive(Debug, Clone, Default)]
pub struct UpdateVehicleDto {
    pub id: i64,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i32>,
    pub daily_rate: Option<f64>,
    pub min_rent_period: Option<i64>,
    pub max_rent_period: Option<i64>,
    pub available_now: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct DeleteVehicleDto {
    pub id: i64,
}
