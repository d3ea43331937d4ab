use std::ops::Deref;
use std::sync::Arc;

use driver::database::SqliteDatabase;
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    database: SqliteDatabase,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let database = SqliteDatabase::new().await?;
        Ok(Self { database })
    }

    pub fn database(&self) -> &SqliteDatabase {
        &self.database
    }
}
