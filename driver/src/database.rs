pub use self::sqlite::*;

pub mod sqlite;
