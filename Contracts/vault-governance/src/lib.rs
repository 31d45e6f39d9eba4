#![no_std]
//! Vault Governance
//!
//! Shared building blocks for the upgradeable vault contracts: the role identifiers both vaults
//! agree on, the upgrade executor that owns the active implementation pointer, the typed-data
//! signature verifier, and the authorization strategy trait every consent channel implements.

mod authorization;
mod error;
mod executor;
mod roles;
mod signature;
mod types;

pub use crate::authorization::{authorize_first, UpgradeAuthorization};
pub use crate::error::VaultError;
pub use crate::executor::{ExecutorKey, UpgradeExecutor};
pub use crate::roles::Role;
pub use crate::signature::{SignatureVerifier, TypedDomain};
pub use crate::types::ImplementationRecord;
