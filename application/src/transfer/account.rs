use kernel::prelude::entity::{Account, UserRole};

#[derive(Debug, Clone)]
pub struct AccountDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

impl From<Account> for AccountDto {
    fn from(value: Account) -> Self {
        Self {
            id: (*value.id()).into(),
            username: value.name().to_string(),
            email: value.email().to_string(),
            role: *value.role(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterAccountDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct AuthenticateDto {
    pub email: String,
    pub password: String,
}
