use soroban_sdk::{contracttype, symbol_short, Address, Env};
use vault_governance::Role;
use crate::types::{FutureImplementation, TwinApproval, UpgradeChannel};

#[contracttype]
#[derive(Clone)]
pub struct VaultInitializedEvent {
    pub admin: Address,
    pub main_investor: Address,
    pub implementation: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct UpgradeApprovedEvent {
    pub channel: UpgradeChannel,
    pub approver: Address,
    pub role: Role,
    pub candidate: Address,
    pub approval: TwinApproval,
}

#[contracttype]
#[derive(Clone)]
pub struct FutureImplementationEvent {
    pub implementation: Address,
    pub deadline: u64,
    pub committed_by: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct SecondarySanctionedEvent {
    pub implementation: Address,
    pub sanctioned_by: Address,
    pub timestamp: u64,
}

pub struct Events;

impl Events {
    pub fn emit_initialized(
        env: &Env,
        admin: &Address,
        main_investor: &Address,
        implementation: &Address,
    ) {
        let event = VaultInitializedEvent {
            admin: admin.clone(),
            main_investor: main_investor.clone(),
            implementation: implementation.clone(),
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("init"),), event);
    }

    pub fn emit_upgrade_approved(
        env: &Env,
        channel: UpgradeChannel,
        approver: &Address,
        role: Role,
        candidate: &Address,
        approval: TwinApproval,
    ) {
        let topic = match channel {
            UpgradeChannel::MainVault => symbol_short!("upg_appr"),
            UpgradeChannel::InvestmentVault => symbol_short!("sec_appr"),
        };
        let event = UpgradeApprovedEvent {
            channel,
            approver: approver.clone(),
            role,
            candidate: candidate.clone(),
            approval,
        };
        env.events().publish((topic,), event);
    }

    pub fn emit_future_implementation(
        env: &Env,
        future: &FutureImplementation,
        committed_by: &Address,
    ) {
        let event = FutureImplementationEvent {
            implementation: future.implementation.clone(),
            deadline: future.deadline,
            committed_by: committed_by.clone(),
        };
        env.events().publish((symbol_short!("fut_impl"),), event);
    }

    pub fn emit_secondary_sanctioned(env: &Env, implementation: &Address, sanctioned_by: &Address) {
        let event = SecondarySanctionedEvent {
            implementation: implementation.clone(),
            sanctioned_by: sanctioned_by.clone(),
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("sec_sanc"),), event);
    }
}
