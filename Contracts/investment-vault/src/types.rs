use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetConfig {
    pub token: Address,
    pub share: i128,
}

/// Initialization record for an investment vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentVaultConfig {
    /// Main vault whose admin governs this vault and whose sanctioned logic it may run.
    pub main_vault: Address,
    pub token_mi: Address,
    pub token_mv: Address,
    pub capital_of_mi: i128,
    pub share_mi: i128,
    pub step: i128,
    pub assets: Vec<AssetConfig>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenData {
    pub token_mi: Address,
    pub token_mv: Address,
}
