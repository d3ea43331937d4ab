mod email;
mod id;
mod name;
mod password;
mod role;

pub use self::{email::*, id::*, name::*, password::*, role::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    name: UserName,
    email: EmailAddress,
    password: PasswordHash,
    role: UserRole,
}

impl Account {
    pub fn new(
        id: AccountId,
        name: UserName,
        email: EmailAddress,
        password: PasswordHash,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password,
            role,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }
}

/// Account data before the store has assigned a surrogate id.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    name: UserName,
    email: EmailAddress,
    password: PasswordHash,
    role: UserRole,
}

impl NewAccount {
    pub fn new(name: UserName, email: EmailAddress, password: PasswordHash, role: UserRole) -> Self {
        Self {
            name,
            email,
            password,
            role,
        }
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }
}
