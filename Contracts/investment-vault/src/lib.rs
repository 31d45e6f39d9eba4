#![no_std]
//! Investment Vault
//!
//! A secondary vault whose logic is governed entirely by its main vault. It keeps no role table:
//! privileged calls are checked against the main vault's admin, and the only logic it may be
//! upgraded to is the implementation the main vault currently sanctions.

mod events;
mod helper;
mod primary;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Val, Vec};
use vault_governance::{
    authorize_first, ImplementationRecord, UpgradeAuthorization, UpgradeExecutor, VaultError,
};

pub use crate::primary::{PrimaryVault, PrimaryVaultClient};
pub use crate::types::{AssetConfig, InvestmentVaultConfig, TokenData};
use crate::{
    events::Events,
    primary::{require_primary_admin, DelegatedTrust},
    storage::Storage,
};

#[contract]
pub struct InvestmentVault;

pub trait InvestmentVaultTrait {
    /// One-time setup. `caller` must be admin of `config.main_vault` and `implementation` must be
    /// the logic the main vault sanctions.
    fn initialize(
        env: Env,
        caller: Address,
        config: InvestmentVaultConfig,
        implementation: Address,
    ) -> Result<(), VaultError>;
    /// Swap to `candidate`, which must equal the main vault's sanctioned implementation.
    fn upgrade_to_and_call(
        env: Env,
        caller: Address,
        candidate: Address,
        init_fn: Option<Symbol>,
        init_args: Vec<Val>,
    ) -> Result<(), VaultError>;

    fn main_vault(env: Env) -> Result<Address, VaultError>;
    fn token_data(env: Env) -> Result<TokenData, VaultError>;
    fn investment_config(env: Env) -> Result<InvestmentVaultConfig, VaultError>;
    fn implementation(env: Env) -> Result<Address, VaultError>;
    fn version(env: Env) -> u64;
    fn upgrade_history(env: Env) -> Vec<ImplementationRecord>;
    fn forward(env: Env, func: Symbol, args: Vec<Val>) -> Result<Val, VaultError>;
}

#[contractimpl]
impl InvestmentVaultTrait for InvestmentVault {
    fn initialize(
        env: Env,
        caller: Address,
        config: InvestmentVaultConfig,
        implementation: Address,
    ) -> Result<(), VaultError> {
        let store = Storage::new(&env);
        if store.is_initialized() { return Err(VaultError::AlreadyInitialized); }
        caller.require_auth();

        let trust = DelegatedTrust::new(&env, &config.main_vault);
        require_primary_admin(trust.primary(), &caller)?;
        trust.check(&implementation)?;
        helper::validate_config(&config)?;

        store.init(&config);
        UpgradeExecutor::new(&env).set_initial(&implementation);
        Events::emit_initialized(&env, &config.main_vault, &implementation, &caller);
        Ok(())
    }

    fn upgrade_to_and_call(
        env: Env,
        caller: Address,
        candidate: Address,
        init_fn: Option<Symbol>,
        init_args: Vec<Val>,
    ) -> Result<(), VaultError> {
        caller.require_auth();
        let trust = DelegatedTrust::new(&env, &Storage::new(&env).main_vault()?);
        require_primary_admin(trust.primary(), &caller)?;

        let channels: [&dyn UpgradeAuthorization; 1] = [&trust];
        authorize_first(&channels, &candidate)?.consume();
        UpgradeExecutor::new(&env).upgrade_to_and_call(&candidate, init_fn, init_args)?;
        Ok(())
    }

    fn main_vault(env: Env) -> Result<Address, VaultError> { Storage::new(&env).main_vault() }

    fn token_data(env: Env) -> Result<TokenData, VaultError> { Storage::new(&env).token_data() }

    fn investment_config(env: Env) -> Result<InvestmentVaultConfig, VaultError> {
        Storage::new(&env).config()
    }

    fn implementation(env: Env) -> Result<Address, VaultError> {
        UpgradeExecutor::new(&env).require_implementation()
    }

    fn version(env: Env) -> u64 { UpgradeExecutor::new(&env).version() }

    fn upgrade_history(env: Env) -> Vec<ImplementationRecord> {
        UpgradeExecutor::new(&env).history()
    }

    fn forward(env: Env, func: Symbol, args: Vec<Val>) -> Result<Val, VaultError> {
        UpgradeExecutor::new(&env).forward(&func, args)
    }
}
