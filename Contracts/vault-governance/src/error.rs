use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Access control
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,

    // Upgrade gates
    InvalidImplementationAddress = 4,
    InvalidSigner = 5,
    TimestampMustBeInTheFuture = 6,
    ImplementationNotApprovedByAdmin = 7,
    ImplementationNotApprovedByInvestor = 8,
    UpgradeDeadlineExpired = 9,
    ImplementationNotSet = 10,

    // Configuration
    InvalidFeePercentage = 11,
    InvalidConfig = 12,
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Unauthorized => write!(f, "Caller does not hold the required role"),
            VaultError::AlreadyInitialized => write!(f, "Vault is already initialized"),
            VaultError::NotInitialized => write!(f, "Vault is not initialized"),

            VaultError::InvalidImplementationAddress => write!(f, "Invalid implementation address"),
            VaultError::InvalidSigner => {
                write!(f, "Signature was not produced by the main investor")
            }
            VaultError::TimestampMustBeInTheFuture => write!(f, "Timestamp must be in the future"),
            VaultError::ImplementationNotApprovedByAdmin => {
                write!(f, "Implementation not approved by admin")
            }
            VaultError::ImplementationNotApprovedByInvestor => {
                write!(f, "Implementation not approved by investor")
            }
            VaultError::UpgradeDeadlineExpired => write!(f, "Upgrade deadline expired"),
            VaultError::ImplementationNotSet => write!(f, "Implementation not set"),

            VaultError::InvalidFeePercentage => write!(f, "Fee percentage exceeds 100%"),
            VaultError::InvalidConfig => write!(f, "Invalid vault configuration"),
        }
    }
}
