use error_stack::Report;

use kernel::interface::query::AccountQuery;
use kernel::interface::update::AccountModifier;
use kernel::prelude::entity::{
    Account, AccountId, EmailAddress, NewAccount, PasswordHash, UserName, UserRole,
};
use kernel::KernelError;

use crate::database::sqlite::SqliteConnection;
use crate::error::ConvertError;

pub struct SqliteAccountRepository;

#[async_trait::async_trait]
impl AccountQuery<SqliteConnection> for SqliteAccountRepository {
    async fn find_by_id(
        &self,
        con: &mut SqliteConnection,
        id: &AccountId,
    ) -> error_stack::Result<Option<Account>, KernelError> {
        AccountInternal::find_by_id(con, id).await
    }

    async fn find_by_email(
        &self,
        con: &mut SqliteConnection,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<Account>, KernelError> {
        AccountInternal::find_by_email(con, email).await
    }

    async fn find_by_name_or_email(
        &self,
        con: &mut SqliteConnection,
        name: &UserName,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<Account>, KernelError> {
        AccountInternal::find_by_name_or_email(con, name, email).await
    }
}

#[async_trait::async_trait]
impl AccountModifier<SqliteConnection> for SqliteAccountRepository {
    async fn create(
        &self,
        con: &mut SqliteConnection,
        account: &NewAccount,
    ) -> error_stack::Result<AccountId, KernelError> {
        AccountInternal::create(con, account).await
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    email: String,
    password: String,
    role: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = Report<KernelError>;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let role = row.role.parse::<UserRole>().map_err(Report::new)?;
        Ok(Account::new(
            AccountId::new(row.id),
            UserName::new(row.username),
            EmailAddress::new(row.email),
            PasswordHash::new(row.password),
            role,
        ))
    }
}

pub(in crate::database) struct AccountInternal;

impl AccountInternal {
    async fn find_by_id(
        con: &mut sqlx::SqliteConnection,
        id: &AccountId,
    ) -> error_stack::Result<Option<Account>, KernelError> {
        let row = sqlx::query_as::<_, AccountRow>(
            // language=sqlite
            r#"
            SELECT id, username, email, password, role
            FROM accounts
            WHERE id = ?
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Account::try_from).transpose()
    }

    async fn find_by_email(
        con: &mut sqlx::SqliteConnection,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<Account>, KernelError> {
        let row = sqlx::query_as::<_, AccountRow>(
            // language=sqlite
            r#"
            SELECT id, username, email, password, role
            FROM accounts
            WHERE email = ?
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Account::try_from).transpose()
    }

    async fn find_by_name_or_email(
        con: &mut sqlx::SqliteConnection,
        name: &UserName,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<Account>, KernelError> {
        let row = sqlx::query_as::<_, AccountRow>(
            // language=sqlite
            r#"
            SELECT id, username, email, password, role
            FROM accounts
            WHERE username = ? OR email = ?
            "#,
        )
        .bind(name.as_ref())
        .bind(email.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Account::try_from).transpose()
    }

    async fn create(
        con: &mut sqlx::SqliteConnection,
        account: &NewAccount,
    ) -> error_stack::Result<AccountId, KernelError> {
        let result = sqlx::query(
            // language=sqlite
            r#"
            INSERT INTO accounts (username, email, password, role)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(account.name().as_ref())
        .bind(account.email().as_ref())
        .bind(account.password().as_ref())
        .bind(account.role().as_str())
        .execute(con)
        .await
        .convert_error()?;
        Ok(AccountId::new(result.last_insert_rowid()))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::AccountQuery;
    use kernel::interface::update::AccountModifier;
    use kernel::prelude::entity::{EmailAddress, NewAccount, PasswordHash, UserName, UserRole};
    use kernel::KernelError;

    use crate::database::sqlite::{SqliteAccountRepository, SqliteDatabase};

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::connect("sqlite::memory:").await?;
        let mut con = db.transact().await?;

        let account = NewAccount::new(
            UserName::new("alice"),
            EmailAddress::new("alice@example.com"),
            PasswordHash::new("$argon2id$stub"),
            UserRole::Customer,
        );
        let id = SqliteAccountRepository.create(&mut con, &account).await?;

        let found = SqliteAccountRepository.find_by_id(&mut con, &id).await?;
        let found = found.expect("account should exist");
        assert_eq!(found.id(), &id);
        assert_eq!(found.name(), &UserName::new("alice"));
        assert_eq!(found.role(), &UserRole::Customer);

        let by_email = SqliteAccountRepository
            .find_by_email(&mut con, &EmailAddress::new("alice@example.com"))
            .await?;
        assert_eq!(by_email, Some(found.clone()));

        let probe = SqliteAccountRepository
            .find_by_name_or_email(
                &mut con,
                &UserName::new("alice"),
                &EmailAddress::new("other@example.com"),
            )
            .await?;
        assert_eq!(probe, Some(found));

        let missing = SqliteAccountRepository
            .find_by_email(&mut con, &EmailAddress::new("nobody@example.com"))
            .await?;
        assert!(missing.is_none());
        Ok(())
    }
}
