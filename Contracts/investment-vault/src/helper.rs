use vault_governance::VaultError;
use crate::types::InvestmentVaultConfig;

/// Amounts and shares are never negative; the two vault tokens are different assets.
pub fn validate_config(config: &InvestmentVaultConfig) -> Result<(), VaultError> {
    if config.capital_of_mi < 0 || config.share_mi < 0 || config.step < 0 {
        return Err(VaultError::InvalidConfig);
    }
    if config.token_mi == config.token_mv {
        return Err(VaultError::InvalidConfig);
    }
    if config.assets.iter().any(|asset| asset.share < 0) {
        return Err(VaultError::InvalidConfig);
    }
    Ok(())
}
