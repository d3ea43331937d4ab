pub use self::{account::*, reservation::*, vehicle::*};

mod account;
mod reservation;
mod vehicle;
