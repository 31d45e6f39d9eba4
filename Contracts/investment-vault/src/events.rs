use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone)]
pub struct VaultInitializedEvent {
    pub main_vault: Address,
    pub implementation: Address,
    pub initialized_by: Address,
    pub timestamp: u64,
}

pub struct Events;

impl Events {
    pub fn emit_initialized(
        env: &Env,
        main_vault: &Address,
        implementation: &Address,
        initialized_by: &Address,
    ) {
        let event = VaultInitializedEvent {
            main_vault: main_vault.clone(),
            implementation: implementation.clone(),
            initialized_by: initialized_by.clone(),
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("init"),), event);
    }
}
