use soroban_sdk::{contracttype, Address, BytesN, Env};
use vault_governance::{Role, VaultError};
use crate::types::{
    FutureImplementation, MainVaultConfig, TwinApproval, UpgradeChannel, VaultSettings,
};

// Variant names must stay clear of `vault_governance::ExecutorKey`.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    RoleHolder(Role),
    InvestorKey,
    Settings,
    Approval(UpgradeChannel),
    FutureImpl,
    SanctionedSecondary,
}

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn is_initialized(&self) -> bool { self.env.storage().instance().has(&DataKey::Settings) }

    pub fn init(&self, config: &MainVaultConfig) {
        let instance = self.env.storage().instance();
        let holders = [
            (Role::MainInvestor, &config.main_investor),
            (Role::BackupInvestor, &config.backup_investor),
            (Role::EmergencyInvestor, &config.emergency_investor),
            (Role::Manager, &config.manager),
            (Role::Admin, &config.admin),
            (Role::BackupAdmin, &config.backup_admin),
            (Role::EmergencyAdmin, &config.emergency_admin),
        ];
        for (role, holder) in holders {
            instance.set(&DataKey::RoleHolder(role), holder);
        }
        instance.set(&DataKey::InvestorKey, &config.main_investor_key);
        instance.set(&DataKey::Settings, &VaultSettings {
            fee_wallet: config.fee_wallet.clone(),
            profit_wallet: config.profit_wallet.clone(),
            fee_percentage: config.fee_percentage,
            pauser_list: config.pauser_list.clone(),
            price_oracle: config.price_oracle.clone(),
            lock_period: config.lock_period,
        });
        if let Some(implementation) = &config.investment_vault_impl {
            instance.set(&DataKey::SanctionedSecondary, implementation);
        }
    }

    // --- Access control matrix ---

    pub fn role_holder(&self, role: Role) -> Option<Address> {
        self.env.storage().instance().get(&DataKey::RoleHolder(role))
    }

    pub fn has_role(&self, role: Role, identity: &Address) -> bool {
        self.role_holder(role).as_ref() == Some(identity)
    }

    pub fn require_role(&self, identity: &Address, role: Role) -> Result<(), VaultError> {
        if self.has_role(role, identity) { Ok(()) } else { Err(VaultError::Unauthorized) }
    }

    /// Returns the first of `roles` the identity holds.
    pub fn require_any_role(&self, identity: &Address, roles: &[Role]) -> Result<Role, VaultError> {
        roles.iter().copied()
            .find(|role| self.has_role(*role, identity))
            .ok_or(VaultError::Unauthorized)
    }

    pub fn investor_key(&self) -> Result<BytesN<65>, VaultError> {
        self.env.storage().instance().get(&DataKey::InvestorKey).ok_or(VaultError::NotInitialized)
    }

    pub fn settings(&self) -> Result<VaultSettings, VaultError> {
        self.env.storage().instance().get(&DataKey::Settings).ok_or(VaultError::NotInitialized)
    }

    // --- Upgrade gate state ---

    pub fn approval(&self, channel: UpgradeChannel) -> TwinApproval {
        self.env.storage().instance().get(&DataKey::Approval(channel)).unwrap_or_default()
    }

    pub fn save_approval(&self, channel: UpgradeChannel, approval: &TwinApproval) {
        self.env.storage().instance().set(&DataKey::Approval(channel), approval);
    }

    pub fn clear_approval(&self, channel: UpgradeChannel) {
        self.env.storage().instance().remove(&DataKey::Approval(channel));
    }

    pub fn future_implementation(&self) -> Option<FutureImplementation> {
        self.env.storage().instance().get(&DataKey::FutureImpl)
    }

    pub fn save_future_implementation(&self, future: &FutureImplementation) {
        self.env.storage().instance().set(&DataKey::FutureImpl, future);
    }

    pub fn clear_future_implementation(&self) {
        self.env.storage().instance().remove(&DataKey::FutureImpl);
    }

    pub fn sanctioned_secondary(&self) -> Option<Address> {
        self.env.storage().instance().get(&DataKey::SanctionedSecondary)
    }

    pub fn set_sanctioned_secondary(&self, implementation: &Address) {
        self.env.storage().instance().set(&DataKey::SanctionedSecondary, implementation);
    }
}
