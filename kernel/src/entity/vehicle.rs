mod id;
mod rate;
mod window;

pub use self::{id::*, rate::*, window::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    make: String,
    model: String,
    year: i32,
    mileage: i32,
    daily_rate: DailyRate,
    rent_window: RentWindow,
    available_now: bool,
}

impl Vehicle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VehicleId,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: i32,
        daily_rate: DailyRate,
        rent_window: RentWindow,
        available_now: bool,
    ) -> Self {
        Self {
            id,
            make: make.into(),
            model: model.into(),
            year,
            mileage,
            daily_rate,
            rent_window,
            available_now,
        }
    }

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn mileage(&self) -> i32 {
        self.mileage
    }

    pub fn daily_rate(&self) -> &DailyRate {
        &self.daily_rate
    }

    pub fn rent_window(&self) -> &RentWindow {
        &self.rent_window
    }

    pub fn available_now(&self) -> bool {
        self.available_now
    }

    /// Folds a partial update into the current record. Absent fields keep
    /// their current value.
    pub fn apply(self, update: VehicleUpdate) -> Self {
        let rent_window = RentWindow::new(
            update.min_rent_period.unwrap_or(self.rent_window.min_days()),
            update.max_rent_period.unwrap_or(self.rent_window.max_days()),
        );
        Self {
            id: self.id,
            make: update.make.unwrap_or(self.make),
            model: update.model.unwrap_or(self.model),
            year: update.year.unwrap_or(self.year),
            mileage: update.mileage.unwrap_or(self.mileage),
            daily_rate: update.daily_rate.unwrap_or(self.daily_rate),
            rent_window,
            available_now: update.available_now.unwrap_or(self.available_now),
        }
    }
}

/// Vehicle data before the store has assigned a surrogate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVehicle {
    make: String,
    model: String,
    year: i32,
    mileage: i32,
    daily_rate: DailyRate,
    rent_window: RentWindow,
    available_now: bool,
}

impl NewVehicle {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: i32,
        daily_rate: DailyRate,
        rent_window: RentWindow,
        available_now: bool,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            mileage,
            daily_rate,
            rent_window,
            available_now,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn mileage(&self) -> i32 {
        self.mileage
    }

    pub fn daily_rate(&self) -> &DailyRate {
        &self.daily_rate
    }

    pub fn rent_window(&self) -> &RentWindow {
        &self.rent_window
    }

    pub fn available_now(&self) -> bool {
        self.available_now
    }
}

/// Explicit partial update: only fields carrying `Some` change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleUpdate {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i32>,
    pub daily_rate: Option<DailyRate>,
    pub min_rent_period: Option<i64>,
    pub max_rent_period: Option<i64>,
    pub available_now: Option<bool>,
}
