use soroban_sdk::{contracttype, Address, BytesN};

/// Initialization record for the main vault. One identity per role.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MainVaultConfig {
    pub main_investor: Address,
    pub backup_investor: Address,
    pub emergency_investor: Address,
    pub manager: Address,
    pub admin: Address,
    pub backup_admin: Address,
    pub emergency_admin: Address,
    /// Uncompressed SEC-1 secp256k1 key the main investor signs future implementations with.
    pub main_investor_key: BytesN<65>,
    pub fee_wallet: Address,
    pub profit_wallet: Address,
    /// Basis points, 10_000 = 100%.
    pub fee_percentage: u32,
    pub investment_vault_impl: Option<Address>,
    pub pauser_list: Address,
    pub price_oracle: Address,
    pub lock_period: u64,
}

/// Everything in the config that is not a role assignment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultSettings {
    pub fee_wallet: Address,
    pub profit_wallet: Address,
    pub fee_percentage: u32,
    pub pauser_list: Address,
    pub price_oracle: Address,
    pub lock_period: u64,
}

/// Which logic a twin approval is about. Each channel has its own slots.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum UpgradeChannel {
    MainVault = 0,
    InvestmentVault = 1,
}

/// Admin and main investor votes on one channel. `approved_at` is the time of the first vote
/// of the live proposal.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TwinApproval {
    pub admin_approved: Option<Address>,
    pub investor_approved: Option<Address>,
    pub approved_at: Option<u64>,
}

impl TwinApproval {
    pub fn is_empty(&self) -> bool {
        self.admin_approved.is_none() && self.investor_approved.is_none()
    }
}

/// An implementation the main investor pre-authorized off-chain, valid until `deadline`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FutureImplementation {
    pub implementation: Address,
    pub deadline: u64,
}
