use crate::entity::{AccountId, NewAccount};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AccountModifier<Connection>: 'static + Sync + Send {
    /// Persists the account and returns the store-assigned id.
    async fn create(
        &self,
        con: &mut Connection,
        account: &NewAccount,
    ) -> error_stack::Result<AccountId, KernelError>;
}

pub trait DependOnAccountModifier<Connection>: 'static + Sync + Send {
    type AccountModifier: AccountModifier<Connection>;
    fn account_modifier(&self) -> &Self::AccountModifier;
}
