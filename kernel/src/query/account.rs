use crate::entity::{Account, AccountId, EmailAddress, UserName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AccountQuery<Connection>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &AccountId,
    ) -> error_stack::Result<Option<Account>, KernelError>;

    async fn find_by_email(
        &self,
        con: &mut Connection,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<Account>, KernelError>;

    /// Uniqueness probe used before registration.
    async fn find_by_name_or_email(
        &self,
        con: &mut Connection,
        name: &UserName,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<Account>, KernelError>;
}

pub trait DependOnAccountQuery<Connection>: Sync + Send + 'static {
    type AccountQuery: AccountQuery<Connection>;
    fn account_query(&self) -> &Self::AccountQuery;
}
