use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    InvalidDateFormat,
    InvalidDateRange,
    DurationOutOfRange,
    VehicleNotFound,
    VehicleReserved,
    ReservationNotFound,
    ReservationClosed,
    InvalidDecision,
    DuplicateAccount,
    InvalidCredentials,
    NotFound,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidDateFormat => {
                write!(f, "Invalid date format. Please use YYYY-MM-DD")
            }
            KernelError::InvalidDateRange => write!(f, "End date must be after start date"),
            KernelError::DurationOutOfRange => {
                write!(f, "Rental duration is outside the vehicle's rent period")
            }
            KernelError::VehicleNotFound => write!(f, "Vehicle not found"),
            KernelError::VehicleReserved => {
                write!(f, "Vehicle is referenced by active reservations")
            }
            KernelError::ReservationNotFound => write!(f, "Reservation not found"),
            KernelError::ReservationClosed => write!(f, "Reservation has already been decided"),
            KernelError::InvalidDecision => write!(f, "Unrecognized decision"),
            KernelError::DuplicateAccount => write!(f, "Username or email already registered"),
            KernelError::InvalidCredentials => write!(f, "Invalid credentials"),
            KernelError::NotFound => write!(f, "Record not found"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
