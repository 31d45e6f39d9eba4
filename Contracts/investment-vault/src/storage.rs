use soroban_sdk::{contracttype, Address, Env};
use vault_governance::VaultError;
use crate::types::{InvestmentVaultConfig, TokenData};

// Variant names must stay clear of `vault_governance::ExecutorKey`.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    VaultConfig,
}

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn is_initialized(&self) -> bool {
        self.env.storage().instance().has(&DataKey::VaultConfig)
    }

    pub fn init(&self, config: &InvestmentVaultConfig) {
        self.env.storage().instance().set(&DataKey::VaultConfig, config);
    }

    pub fn config(&self) -> Result<InvestmentVaultConfig, VaultError> {
        self.env.storage().instance().get(&DataKey::VaultConfig).ok_or(VaultError::NotInitialized)
    }

    pub fn main_vault(&self) -> Result<Address, VaultError> {
        self.config().map(|config| config.main_vault)
    }

    pub fn token_data(&self) -> Result<TokenData, VaultError> {
        self.config()
            .map(|config| TokenData { token_mi: config.token_mi, token_mv: config.token_mv })
    }
}
