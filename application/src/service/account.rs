use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use error_stack::report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{AccountQuery, DependOnAccountQuery};
use kernel::interface::update::{AccountModifier, DependOnAccountModifier};
use kernel::prelude::entity::{EmailAddress, NewAccount, PasswordHash, UserName, UserRole};
use kernel::KernelError;

use crate::transfer::{AccountDto, AuthenticateDto, RegisterAccountDto};

static ADMIN_NAME: &str = "admin";

fn hash_password(password: &str) -> error_stack::Result<PasswordHash, KernelError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|error| report!(KernelError::Internal).attach_printable(error.to_string()))?;
    Ok(PasswordHash::new(hash.to_string()))
}

fn verify_password(password: &str, stored: &PasswordHash) -> bool {
    let Ok(parsed) = argon2::PasswordHash::new(stored.as_ref()) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[async_trait::async_trait]
pub trait RegisterAccountService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAccountQuery<Connection>
    + DependOnAccountModifier<Connection>
{
    async fn register_account(
        &self,
        dto: RegisterAccountDto,
    ) -> error_stack::Result<AccountDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let name = UserName::new(dto.username);
        let email = EmailAddress::new(dto.email);
        let taken = self
            .account_query()
            .find_by_name_or_email(&mut connection, &name, &email)
            .await?;
        if taken.is_some() {
            return Err(report!(KernelError::DuplicateAccount));
        }

        let password = hash_password(&dto.password)?;
        let account = NewAccount::new(name, email, password, dto.role);
        let id = self
            .account_modifier()
            .create(&mut connection, &account)
            .await?;
        tracing::info!(%id, role = %account.role(), "account registered");

        Ok(AccountDto {
            id: id.into(),
            username: account.name().to_string(),
            email: account.email().to_string(),
            role: *account.role(),
        })
    }

    /// Creates the built-in admin account once; later calls are no-ops.
    async fn bootstrap_admin(&self) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let name = UserName::new(ADMIN_NAME);
        let email = EmailAddress::new(ADMIN_NAME);
        let existing = self
            .account_query()
            .find_by_name_or_email(&mut connection, &name, &email)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let password = hash_password(ADMIN_NAME)?;
        let account = NewAccount::new(name, email, password, UserRole::Admin);
        let id = self
            .account_modifier()
            .create(&mut connection, &account)
            .await?;
        tracing::info!(%id, "default admin account created");
        Ok(())
    }
}

impl<Connection: 'static + Send, T> RegisterAccountService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnAccountQuery<Connection>
        + DependOnAccountModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait AuthenticateService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnAccountQuery<Connection>
{
    /// Missing account and failed verification are indistinguishable to the
    /// caller: both report `InvalidCredentials`.
    async fn authenticate(
        &self,
        dto: AuthenticateDto,
    ) -> error_stack::Result<AccountDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let email = EmailAddress::new(dto.email);
        let account = self
            .account_query()
            .find_by_email(&mut connection, &email)
            .await?;
        match account {
            Some(account) if verify_password(&dto.password, account.password()) => {
                tracing::info!(id = %account.id(), "login succeeded");
                Ok(AccountDto::from(account))
            }
            _ => Err(report!(KernelError::InvalidCredentials)),
        }
    }
}

impl<Connection: 'static + Send, T> AuthenticateService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnAccountQuery<Connection>
{
}
