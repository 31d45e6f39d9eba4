use soroban_sdk::contracttype;

/// Governance roles held on the main vault. The investment vault has no role table of its own
/// and asks the main vault instead.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Role {
    MainInvestor = 0,
    BackupInvestor = 1,
    EmergencyInvestor = 2,
    Manager = 3,
    Admin = 4,
    BackupAdmin = 5,
    EmergencyAdmin = 6,
}
