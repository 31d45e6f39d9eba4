#![no_std]
//! Main Vault
//!
//! The primary custodial vault. It holds the governance role table and sits in front of an
//! upgradeable logic contract: calls are forwarded to the active implementation while all state
//! stays in this contract's instance storage.
//!
//! Replacing the logic needs consent from both the admin and the main investor, given either as
//! matching on-chain approvals or as an investor-signed commitment the admin records. The vault
//! also certifies which implementation the linked investment vaults may run, through its own
//! twin-approval channel.

mod events;
mod gate;
mod helper;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Val, Vec};
use vault_governance::{
    authorize_first, ImplementationRecord, Role, UpgradeAuthorization, UpgradeExecutor, VaultError,
};

pub use crate::gate::APPROVAL_WINDOW_SECONDS;
pub use crate::types::{
    FutureImplementation, MainVaultConfig, TwinApproval, UpgradeChannel, VaultSettings,
};
use crate::{
    events::Events,
    gate::{FutureCommitment, TwinApprovalGate},
    storage::Storage,
};

#[contract]
pub struct MainVault;

/// Public interface of the main vault.
pub trait MainVaultTrait {
    /// One-time setup: role table, settings, initially sanctioned investment vault logic, and the
    /// first implementation of this vault. Must be authorized by both the configured admin and
    /// the main investor, who vouches for `config.main_investor_key`.
    fn initialize(
        env: Env,
        config: MainVaultConfig,
        implementation: Address,
    ) -> Result<(), VaultError>;

    // Twin approval of this vault's own logic.
    fn approve_upgrade(env: Env, caller: Address, candidate: Address) -> Result<(), VaultError>;
    /// Admin records an implementation the main investor signed for off-chain.
    fn commit_future_implementation(
        env: Env,
        caller: Address,
        future: FutureImplementation,
        signature: BytesN<64>,
        recovery_id: u32,
    ) -> Result<(), VaultError>;
    /// Admin swaps the logic once either consent channel authorizes `candidate`.
    fn upgrade_to_and_call(
        env: Env,
        caller: Address,
        candidate: Address,
        init_fn: Option<Symbol>,
        init_args: Vec<Val>,
    ) -> Result<(), VaultError>;

    // Delegated trust for investment vault logic.
    fn approve_secondary_upgrade(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), VaultError>;
    fn sanction_secondary_impl(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), VaultError>;

    fn has_role(env: Env, role: Role, identity: Address) -> bool;
    fn role_holder(env: Env, role: Role) -> Option<Address>;
    fn upgrade_approvals(env: Env) -> TwinApproval;
    fn secondary_approvals(env: Env) -> TwinApproval;
    fn future_implementation(env: Env) -> Option<FutureImplementation>;
    /// Digest the main investor must sign to pre-authorize `implementation` until `deadline`.
    fn future_implementation_digest(
        env: Env,
        implementation: Address,
        deadline: u64,
    ) -> BytesN<32>;
    /// Key every signed commitment must recover to.
    fn investor_key(env: Env) -> Result<BytesN<65>, VaultError>;
    fn sanctioned_secondary_impl(env: Env) -> Option<Address>;
    fn settings(env: Env) -> Result<VaultSettings, VaultError>;
    fn implementation(env: Env) -> Result<Address, VaultError>;
    fn version(env: Env) -> u64;
    fn upgrade_history(env: Env) -> Vec<ImplementationRecord>;
    /// Forward an arbitrary call to the active implementation.
    fn forward(env: Env, func: Symbol, args: Vec<Val>) -> Result<Val, VaultError>;
}

#[contractimpl]
impl MainVaultTrait for MainVault {
    fn initialize(
        env: Env,
        config: MainVaultConfig,
        implementation: Address,
    ) -> Result<(), VaultError> {
        let store = Storage::new(&env);
        if store.is_initialized() { return Err(VaultError::AlreadyInitialized); }
        helper::validate_config(&config)?;
        config.admin.require_auth();
        // The signing key stands in for the investor on the signed channel.
        config.main_investor.require_auth();

        store.init(&config);
        UpgradeExecutor::new(&env).set_initial(&implementation);
        Events::emit_initialized(&env, &config.admin, &config.main_investor, &implementation);
        Ok(())
    }

    fn approve_upgrade(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), VaultError> {
        Self::approve(&env, UpgradeChannel::MainVault, caller, candidate)
    }

    fn commit_future_implementation(
        env: Env,
        caller: Address,
        future: FutureImplementation,
        signature: BytesN<64>,
        recovery_id: u32,
    ) -> Result<(), VaultError> {
        caller.require_auth();
        Storage::new(&env).require_role(&caller, Role::Admin)?;
        FutureCommitment::new(&env).commit(&future, &signature, recovery_id)?;
        Events::emit_future_implementation(&env, &future, &caller);
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
        Storage::new(&env).require_role(&caller, Role::Admin)?;

        let twin = TwinApprovalGate::new(&env, UpgradeChannel::MainVault);
        let signed = FutureCommitment::new(&env);
        let channels: [&dyn UpgradeAuthorization; 2] = [&twin, &signed];
        let channel = authorize_first(&channels, &candidate)?;

        // Clear consent before control can reach the new logic's initializer.
        channel.consume();
        UpgradeExecutor::new(&env).upgrade_to_and_call(&candidate, init_fn, init_args)?;
        Ok(())
    }

    fn approve_secondary_upgrade(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), VaultError> {
        Self::approve(&env, UpgradeChannel::InvestmentVault, caller, candidate)
    }

    fn sanction_secondary_impl(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), VaultError> {
        caller.require_auth();
        let store = Storage::new(&env);
        store.require_role(&caller, Role::Admin)?;

        let gate = TwinApprovalGate::new(&env, UpgradeChannel::InvestmentVault);
        gate.check(&candidate)?;
        gate.consume();
        store.set_sanctioned_secondary(&candidate);
        Events::emit_secondary_sanctioned(&env, &candidate, &caller);
        Ok(())
    }

    fn has_role(env: Env, role: Role, identity: Address) -> bool {
        Storage::new(&env).has_role(role, &identity)
    }

    fn role_holder(env: Env, role: Role) -> Option<Address> {
        Storage::new(&env).role_holder(role)
    }

    fn upgrade_approvals(env: Env) -> TwinApproval {
        Storage::new(&env).approval(UpgradeChannel::MainVault)
    }

    fn secondary_approvals(env: Env) -> TwinApproval {
        Storage::new(&env).approval(UpgradeChannel::InvestmentVault)
    }

    fn future_implementation(env: Env) -> Option<FutureImplementation> {
        Storage::new(&env).future_implementation()
    }

    fn future_implementation_digest(
        env: Env,
        implementation: Address,
        deadline: u64,
    ) -> BytesN<32> {
        FutureCommitment::new(&env).digest(&implementation, deadline)
    }

    fn investor_key(env: Env) -> Result<BytesN<65>, VaultError> {
        Storage::new(&env).investor_key()
    }

    fn sanctioned_secondary_impl(env: Env) -> Option<Address> {
        Storage::new(&env).sanctioned_secondary()
    }

    fn settings(env: Env) -> Result<VaultSettings, VaultError> { Storage::new(&env).settings() }

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

impl MainVault {
    fn approve(
        env: &Env,
        channel: UpgradeChannel,
        caller: Address,
        candidate: Address,
    ) -> Result<(), VaultError> {
        caller.require_auth();
        let role = Storage::new(env)
            .require_any_role(&caller, &[Role::Admin, Role::MainInvestor])?;
        let approval = TwinApprovalGate::new(env, channel).approve(role, &candidate)?;
        Events::emit_upgrade_approved(env, channel, &caller, role, &candidate, approval);
        Ok(())
    }
}

#[cfg(test)]
mod test_signature;
