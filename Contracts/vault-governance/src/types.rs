use soroban_sdk::{contracttype, Address};

/// One entry of the executor's upgrade history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImplementationRecord {
    pub version: u64,
    pub implementation: Address,
    pub prev: Address,
}
