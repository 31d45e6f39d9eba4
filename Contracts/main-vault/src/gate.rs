//! Consent channels guarding the main vault's own logic and the investment vault's sanctioned
//! implementation.
//!
//! Two channels can authorize a main vault upgrade:
//! * twin approval: admin and main investor each name the same candidate on-chain, and the
//!   admin executes within one day of the first vote;
//! * signed commitment: the main investor signs `(implementation, deadline)` off-chain and the
//!   admin records it; it can be executed until the deadline.
//!
//! The investment vault's implementation is sanctioned through a second, separately keyed twin
//! approval channel.

use soroban_sdk::{log, Address, BytesN, Env};
use vault_governance::{Role, SignatureVerifier, TypedDomain, UpgradeAuthorization, VaultError};
use crate::{
    storage::Storage,
    types::{FutureImplementation, TwinApproval, UpgradeChannel},
};

/// How long a twin approval stays executable after its first vote.
pub const APPROVAL_WINDOW_SECONDS: u64 = 24 * 60 * 60;

pub const SIGNING_DOMAIN: TypedDomain = TypedDomain { name: "MainVault", version: "1" };
const FUTURE_IMPLEMENTATION_TYPE: &[u8] =
    b"FutureMainVaultImplementation(address implementation,uint64 deadline)";

pub struct TwinApprovalGate<'a> {
    env: &'a Env,
    channel: UpgradeChannel,
}

impl<'a> TwinApprovalGate<'a> {
    pub fn new(env: &'a Env, channel: UpgradeChannel) -> Self { Self { env, channel } }

    pub fn state(&self) -> TwinApproval { Storage::new(self.env).approval(self.channel) }

    fn is_expired(&self, state: &TwinApproval, now: u64) -> bool {
        match state.approved_at {
            Some(first) => now > first.saturating_add(APPROVAL_WINDOW_SECONDS),
            None => true,
        }
    }

    /// Records `role`'s vote for `candidate`. An empty or expired proposal is discarded and a new
    /// window starts now.
    pub fn approve(&self, role: Role, candidate: &Address) -> Result<TwinApproval, VaultError> {
        let now = self.env.ledger().timestamp();
        let mut state = self.state();
        if state.is_empty() || self.is_expired(&state, now) {
            state = TwinApproval {
                admin_approved: None,
                investor_approved: None,
                approved_at: Some(now),
            };
        }
        match role {
            Role::Admin => state.admin_approved = Some(candidate.clone()),
            Role::MainInvestor => state.investor_approved = Some(candidate.clone()),
            _ => return Err(VaultError::Unauthorized),
        }
        Storage::new(self.env).save_approval(self.channel, &state);
        Ok(state)
    }
}

impl UpgradeAuthorization for TwinApprovalGate<'_> {
    fn check(&self, candidate: &Address) -> Result<(), VaultError> {
        let state = self.state();
        if state.investor_approved.as_ref() != Some(candidate) {
            return Err(VaultError::ImplementationNotApprovedByInvestor);
        }
        if state.admin_approved.as_ref() != Some(candidate) {
            return Err(VaultError::ImplementationNotApprovedByAdmin);
        }
        if self.is_expired(&state, self.env.ledger().timestamp()) {
            log!(self.env, "twin approval expired", state.approved_at);
            return Err(VaultError::UpgradeDeadlineExpired);
        }
        Ok(())
    }

    fn names(&self, candidate: &Address) -> bool {
        let state = self.state();
        state.admin_approved.as_ref() == Some(candidate)
            || state.investor_approved.as_ref() == Some(candidate)
    }

    fn consume(&self) { Storage::new(self.env).clear_approval(self.channel); }
}

pub struct FutureCommitment<'a> { env: &'a Env }

impl<'a> FutureCommitment<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    fn struct_hash(
        &self,
        verifier: &SignatureVerifier,
        implementation: &Address,
        deadline: u64,
    ) -> BytesN<32> {
        verifier.struct_hash(
            FUTURE_IMPLEMENTATION_TYPE,
            &[verifier.encode_address(implementation), verifier.encode_u64(deadline)],
        )
    }

    /// The digest the main investor signs to pre-authorize `implementation` until `deadline`.
    pub fn digest(&self, implementation: &Address, deadline: u64) -> BytesN<32> {
        let verifier = SignatureVerifier::new(self.env, SIGNING_DOMAIN);
        verifier.digest(&self.struct_hash(&verifier, implementation, deadline)).into()
    }

    /// Verifies the main investor's signature and stores the commitment, replacing any earlier one.
    pub fn commit(
        &self,
        future: &FutureImplementation,
        signature: &BytesN<64>,
        recovery_id: u32,
    ) -> Result<(), VaultError> {
        let storage = Storage::new(self.env);
        let verifier = SignatureVerifier::new(self.env, SIGNING_DOMAIN);
        let struct_hash = self.struct_hash(&verifier, &future.implementation, future.deadline);
        verifier.verify(&struct_hash, signature, recovery_id, &storage.investor_key()?)?;

        if future.deadline <= self.env.ledger().timestamp() {
            return Err(VaultError::TimestampMustBeInTheFuture);
        }
        storage.save_future_implementation(future);
        Ok(())
    }
}

impl UpgradeAuthorization for FutureCommitment<'_> {
    fn check(&self, candidate: &Address) -> Result<(), VaultError> {
        match Storage::new(self.env).future_implementation() {
            Some(future) if &future.implementation == candidate => {
                if self.env.ledger().timestamp() < future.deadline {
                    Ok(())
                } else {
                    log!(self.env, "future implementation deadline passed", future.deadline);
                    Err(VaultError::UpgradeDeadlineExpired)
                }
            }
            _ => Err(VaultError::InvalidImplementationAddress),
        }
    }

    fn names(&self, candidate: &Address) -> bool {
        Storage::new(self.env).future_implementation()
            .map_or(false, |future| &future.implementation == candidate)
    }

    fn consume(&self) { Storage::new(self.env).clear_future_implementation(); }
}
