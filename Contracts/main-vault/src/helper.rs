use soroban_sdk::BytesN;
use vault_governance::VaultError;
use crate::types::MainVaultConfig;

pub const MAX_FEE_PERCENTAGE: u32 = 10_000;
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// Validates the fee is at most 100% in basis points
pub fn validate_fee_percentage(fee_percentage: u32) -> Result<(), VaultError> {
    if fee_percentage > MAX_FEE_PERCENTAGE {
        return Err(VaultError::InvalidFeePercentage);
    }
    Ok(())
}

/// Validates the investor key is an uncompressed SEC-1 point
pub fn validate_signing_key(key: &BytesN<65>) -> Result<(), VaultError> {
    if key.get(0) != Some(SEC1_UNCOMPRESSED_TAG) {
        return Err(VaultError::InvalidConfig);
    }
    Ok(())
}

/// Admin and main investor cast separate votes, so they must be separate identities.
pub fn validate_distinct_approvers(config: &MainVaultConfig) -> Result<(), VaultError> {
    if config.admin == config.main_investor {
        return Err(VaultError::InvalidConfig);
    }
    Ok(())
}

pub fn validate_config(config: &MainVaultConfig) -> Result<(), VaultError> {
    validate_fee_percentage(config.fee_percentage)?;
    validate_signing_key(&config.main_investor_key)?;
    validate_distinct_approvers(config)
}
