use soroban_sdk::Address;
use crate::error::VaultError;

/// A consent channel that can authorize replacing a vault's logic.
///
/// Channels are independent: the executor only needs one of them to accept a candidate, and new
/// channels can be added without changing how the upgrade itself is carried out.
pub trait UpgradeAuthorization {
    /// Ok if this channel currently authorizes `candidate`, otherwise the channel's own reason.
    fn check(&self, candidate: &Address) -> Result<(), VaultError>;

    /// Whether this channel holds any live state naming `candidate`. Used to pick the most
    /// relevant rejection when no channel authorizes.
    fn names(&self, candidate: &Address) -> bool;

    /// Clears the state that authorized the upgrade so it cannot be replayed.
    fn consume(&self);

    fn is_authorized(&self, candidate: &Address) -> bool {
        self.check(candidate).is_ok()
    }
}

/// Returns the first channel in `channels` that authorizes `candidate`.
///
/// When none does, the error comes from the first channel that names the candidate, falling
/// back to the first channel's error.
pub fn authorize_first<'c>(
    channels: &[&'c dyn UpgradeAuthorization],
    candidate: &Address,
) -> Result<&'c dyn UpgradeAuthorization, VaultError> {
    let mut rejection: Option<VaultError> = None;
    let mut named = false;
    for channel in channels.iter().copied() {
        match channel.check(candidate) {
            Ok(()) => return Ok(channel),
            Err(err) => {
                let names = channel.names(candidate);
                if rejection.is_none() || (names && !named) {
                    rejection = Some(err);
                    named = names;
                }
            }
        }
    }
    Err(rejection.unwrap_or(VaultError::Unauthorized))
}
