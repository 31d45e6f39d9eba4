use soroban_sdk::{contractclient, Address, Env};
use vault_governance::{Role, UpgradeAuthorization, VaultError};

/// Read-only view of the main vault this vault defers to.
#[contractclient(name = "PrimaryVaultClient")]
pub trait PrimaryVault {
    fn has_role(env: Env, role: Role, identity: Address) -> bool;
    fn sanctioned_secondary_impl(env: Env) -> Option<Address>;
}

pub fn require_primary_admin(
    primary: &PrimaryVaultClient,
    caller: &Address,
) -> Result<(), VaultError> {
    if primary.has_role(&Role::Admin, caller) { Ok(()) } else { Err(VaultError::Unauthorized) }
}

/// The only consent channel of an investment vault: the implementation the main vault
/// currently sanctions, read at decision time.
pub struct DelegatedTrust<'a> { primary: PrimaryVaultClient<'a> }

impl<'a> DelegatedTrust<'a> {
    pub fn new(env: &Env, main_vault: &Address) -> Self {
        Self { primary: PrimaryVaultClient::new(env, main_vault) }
    }

    pub fn primary(&self) -> &PrimaryVaultClient<'a> { &self.primary }
}

impl UpgradeAuthorization for DelegatedTrust<'_> {
    fn check(&self, candidate: &Address) -> Result<(), VaultError> {
        match self.primary.sanctioned_secondary_impl() {
            Some(sanctioned) if &sanctioned == candidate => Ok(()),
            _ => Err(VaultError::InvalidImplementationAddress),
        }
    }

    // The sanctioned slot lives in the main vault, so a rejected candidate is never named here.
    fn names(&self, _candidate: &Address) -> bool { false }

    // The sanction belongs to the main vault and stays valid for every investment vault.
    fn consume(&self) {}
}
