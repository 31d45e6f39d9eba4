use soroban_sdk::{contracttype, log, symbol_short, Address, Env, Symbol, Val, Vec};
use crate::{error::VaultError, types::ImplementationRecord};

/// Storage keys owned by the executor. Vaults must not reuse these variant names in their
/// own key enums, since unit variants encode as their bare symbol.
#[contracttype]
#[derive(Clone)]
pub enum ExecutorKey {
    Implementation,
    ImplVersion,
    ImplHistory,
}

/// Owns the active implementation pointer of a vault and swaps it once a gate has said yes.
///
/// The pointer lives at `ExecutorKey::Implementation` in the vault's instance storage, so it can
/// be read directly without going through any accessor the logic contract exposes. Nothing else
/// in storage is touched by an upgrade.
pub struct UpgradeExecutor<'a> { env: &'a Env }

impl<'a> UpgradeExecutor<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn implementation(&self) -> Option<Address> {
        self.env.storage().instance().get(&ExecutorKey::Implementation)
    }

    pub fn require_implementation(&self) -> Result<Address, VaultError> {
        self.implementation().ok_or(VaultError::ImplementationNotSet)
    }

    pub fn version(&self) -> u64 {
        self.env.storage().instance().get(&ExecutorKey::ImplVersion).unwrap_or(0)
    }

    pub fn history(&self) -> Vec<ImplementationRecord> {
        self.env.storage().instance()
            .get(&ExecutorKey::ImplHistory)
            .unwrap_or_else(|| Vec::new(self.env))
    }

    /// Points a freshly initialized vault at its first logic contract (version 0).
    pub fn set_initial(&self, implementation: &Address) {
        let instance = self.env.storage().instance();
        instance.set(&ExecutorKey::Implementation, implementation);
        instance.set(&ExecutorKey::ImplVersion, &0u64);
        instance.set(&ExecutorKey::ImplHistory, &Vec::<ImplementationRecord>::new(self.env));
    }

    /// Swaps the active implementation and, if `init_fn` is given, invokes it on the new logic.
    ///
    /// Callers must have finished validating and clearing their own gate state before calling
    /// this; the initializer is the only point where control leaves the vault.
    pub fn upgrade_to_and_call(
        &self,
        new_impl: &Address,
        init_fn: Option<Symbol>,
        init_args: Vec<Val>,
    ) -> Result<ImplementationRecord, VaultError> {
        let prev = self.require_implementation()?;
        let record = ImplementationRecord {
            version: self.version() + 1,
            implementation: new_impl.clone(),
            prev,
        };

        let instance = self.env.storage().instance();
        let mut history = self.history();
        history.push_back(record.clone());
        instance.set(&ExecutorKey::Implementation, new_impl);
        instance.set(&ExecutorKey::ImplVersion, &record.version);
        instance.set(&ExecutorKey::ImplHistory, &history);

        self.env.events().publish((symbol_short!("upgraded"), new_impl.clone()), record.version);

        if let Some(func) = init_fn {
            log!(self.env, "running post-upgrade initializer", func);
            let _: Val = self.env.invoke_contract(new_impl, &func, init_args);
        }
        Ok(record)
    }

    /// Delegates a call to the active implementation.
    pub fn forward(&self, func: &Symbol, args: Vec<Val>) -> Result<Val, VaultError> {
        let target = self.require_implementation()?;
        Ok(self.env.invoke_contract(&target, func, args))
    }
}
