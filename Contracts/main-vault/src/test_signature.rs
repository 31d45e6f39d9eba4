#![cfg(test)]
use k256::ecdsa::SigningKey;
use soroban_sdk::{Address, BytesN, Vec};
use vault_governance::{Role, VaultError};
use crate::{
    test::{assert_authorized_by, config, setup, signing_key, TestVault, VaultLogicV2},
    FutureImplementation, MainVault, MainVaultClient, TwinApproval,
};

fn sign(
    vault: &TestVault,
    signer: &SigningKey,
    client: &MainVaultClient,
    implementation: &Address,
    deadline: u64,
) -> (BytesN<64>, u32) {
    let digest = client.future_implementation_digest(implementation, &deadline);
    let (signature, recovery_id) = signer.sign_prehash_recoverable(&digest.to_array()).unwrap();
    let mut raw = [0u8; 64];
    raw.copy_from_slice(&signature.to_bytes());
    (BytesN::from_array(&vault.env, &raw), recovery_id.to_byte() as u32)
}

fn commit(vault: &TestVault, implementation: &Address, deadline: u64) -> Result<(), VaultError> {
    let (signature, recovery_id) =
        sign(vault, &vault.investor_signer, &vault.client, implementation, deadline);
    let future = FutureImplementation { implementation: implementation.clone(), deadline };
    let admin = &vault.actors.admin;
    match vault.client.try_commit_future_implementation(admin, &future, &signature, &recovery_id) {
        Ok(_) => Ok(()),
        Err(Ok(err)) => Err(err),
        Err(Err(invoke)) => panic!("unexpected host failure: {:?}", invoke),
    }
}

#[test]
fn test_signed_commitment_upgrade() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let deadline = vault.now() + 3600;
    let admin = &vault.actors.admin;

    assert_eq!(commit(&vault, &v2, deadline), Ok(()));
    assert_authorized_by(&vault.env, admin, &vault.id, "commit_future_implementation");
    assert_eq!(
        vault.client.future_implementation(),
        Some(FutureImplementation { implementation: v2.clone(), deadline }),
    );

    vault.client.upgrade_to_and_call(admin, &v2, &None, &Vec::new(&vault.env));

    assert_eq!(vault.stored_implementation(), Some(v2));
    assert_eq!(vault.client.future_implementation(), None);
    assert!(vault.client.has_role(&Role::MainInvestor, &vault.actors.main_investor));
    assert!(vault.client.has_role(&Role::Admin, &vault.actors.admin));
}

#[test]
fn test_commit_rejects_wrong_signer() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let deadline = vault.now() + 3600;

    // Signed by the admin's key instead of the main investor's.
    let (admin_signer, _) = signing_key(&vault.env, 9);
    let (signature, recovery_id) = sign(&vault, &admin_signer, &vault.client, &v2, deadline);
    let future = FutureImplementation { implementation: v2.clone(), deadline };

    assert_eq!(
        vault.client.try_commit_future_implementation(
            &vault.actors.admin,
            &future,
            &signature,
            &recovery_id,
        ),
        Err(Ok(VaultError::InvalidSigner)),
    );
    assert_eq!(vault.client.future_implementation(), None);
}

#[test]
fn test_commit_rejects_malformed_recovery_id() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let deadline = vault.now() + 3600;
    let (signature, _) = sign(&vault, &vault.investor_signer, &vault.client, &v2, deadline);
    let future = FutureImplementation { implementation: v2, deadline };

    assert_eq!(
        vault.client.try_commit_future_implementation(&vault.actors.admin, &future, &signature, &4),
        Err(Ok(VaultError::InvalidSigner)),
    );
}

#[test]
fn test_commit_rejects_past_deadline() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());

    assert_eq!(
        commit(&vault, &v2, vault.now() - 3600),
        Err(VaultError::TimestampMustBeInTheFuture),
    );
    assert_eq!(commit(&vault, &v2, vault.now()), Err(VaultError::TimestampMustBeInTheFuture));
    assert_eq!(commit(&vault, &v2, vault.now() + 1), Ok(()));
}

#[test]
fn test_signature_bound_to_committed_fields() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let v3 = vault.env.register(VaultLogicV2, ());
    let deadline = vault.now() + 3600;
    let (signature, recovery_id) =
        sign(&vault, &vault.investor_signer, &vault.client, &v2, deadline);

    let later = FutureImplementation { implementation: v2.clone(), deadline: deadline + 1 };
    assert_eq!(
        vault.client.try_commit_future_implementation(
            &vault.actors.admin,
            &later,
            &signature,
            &recovery_id,
        ),
        Err(Ok(VaultError::InvalidSigner)),
    );

    let swapped = FutureImplementation { implementation: v3, deadline };
    assert_eq!(
        vault.client.try_commit_future_implementation(
            &vault.actors.admin,
            &swapped,
            &signature,
            &recovery_id,
        ),
        Err(Ok(VaultError::InvalidSigner)),
    );
}

#[test]
fn test_signature_bound_to_vault_instance() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let deadline = vault.now() + 3600;

    // A second deployment with the very same investor key.
    let (_, key) = signing_key(&vault.env, 7);
    let other = MainVaultClient::new(&vault.env, &vault.env.register(MainVault, ()));
    other.initialize(&config(&vault.actors, key, None), &vault.logic_v1);

    let (signature, recovery_id) =
        sign(&vault, &vault.investor_signer, &vault.client, &v2, deadline);
    let future = FutureImplementation { implementation: v2.clone(), deadline };

    assert_eq!(
        other.try_commit_future_implementation(
            &vault.actors.admin,
            &future,
            &signature,
            &recovery_id,
        ),
        Err(Ok(VaultError::InvalidSigner)),
    );
    vault.client.commit_future_implementation(
        &vault.actors.admin,
        &future,
        &signature,
        &recovery_id,
    );
}

#[test]
fn test_only_admin_commits() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let deadline = vault.now() + 3600;
    let (signature, recovery_id) =
        sign(&vault, &vault.investor_signer, &vault.client, &v2, deadline);
    let future = FutureImplementation { implementation: v2, deadline };

    assert_eq!(
        vault.client.try_commit_future_implementation(
            &vault.actors.main_investor,
            &future,
            &signature,
            &recovery_id,
        ),
        Err(Ok(VaultError::Unauthorized)),
    );
}

#[test]
fn test_commitment_expires_at_deadline() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let deadline = vault.now() + 3600;
    assert_eq!(commit(&vault, &v2, deadline), Ok(()));

    vault.advance(3600);
    assert_eq!(vault.now(), deadline);
    assert_eq!(vault.upgrade(&vault.actors.admin, &v2), Err(VaultError::UpgradeDeadlineExpired));
    assert_eq!(vault.stored_implementation(), Some(vault.logic_v1.clone()));
}

#[test]
fn test_commitment_executes_just_before_deadline() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let deadline = vault.now() + 3600;
    assert_eq!(commit(&vault, &v2, deadline), Ok(()));

    vault.advance(3599);
    assert_eq!(vault.upgrade(&vault.actors.admin, &v2), Ok(()));
}

#[test]
fn test_commitment_only_covers_its_implementation() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let v3 = vault.env.register(VaultLogicV2, ());
    assert_eq!(commit(&vault, &v2, vault.now() + 3600), Ok(()));

    assert_eq!(
        vault.upgrade(&vault.actors.admin, &v3),
        Err(VaultError::ImplementationNotApprovedByInvestor),
    );
    assert_eq!(vault.upgrade(&vault.actors.main_investor, &v2), Err(VaultError::Unauthorized));
}

#[test]
fn test_newer_commitment_replaces_older() {
    let vault = setup();
    let v2 = vault.env.register(VaultLogicV2, ());
    let v3 = vault.env.register(VaultLogicV2, ());
    assert_eq!(commit(&vault, &v2, vault.now() + 3600), Ok(()));
    assert_eq!(commit(&vault, &v3, vault.now() + 7200), Ok(()));

    assert_eq!(
        vault.upgrade(&vault.actors.admin, &v2),
        Err(VaultError::ImplementationNotApprovedByInvestor),
    );
    assert_eq!(vault.upgrade(&vault.actors.admin, &v3), Ok(()));
}

#[test]
fn test_channels_coexist() {
    let vault = setup();
    let a = &vault.actors;
    let v2 = vault.env.register(VaultLogicV2, ());
    let v3 = vault.env.register(VaultLogicV2, ());

    vault.client.approve_upgrade(&a.admin, &v3);
    vault.client.approve_upgrade(&a.main_investor, &v3);
    assert_eq!(commit(&vault, &v2, vault.now() + 3600), Ok(()));

    // The commitment is consumed, the twin approval for v3 is left alone.
    assert_eq!(vault.upgrade(&a.admin, &v2), Ok(()));
    assert_eq!(vault.client.future_implementation(), None);
    assert_eq!(vault.client.upgrade_approvals().admin_approved, Some(v3.clone()));

    assert_eq!(vault.upgrade(&a.admin, &v3), Ok(()));
    assert_eq!(vault.client.upgrade_approvals(), TwinApproval::default());
    assert_eq!(vault.client.version(), 2);

    // Neither channel can be replayed.
    assert_eq!(vault.upgrade(&a.admin, &v2), Err(VaultError::ImplementationNotApprovedByInvestor));
    assert_eq!(vault.stored_implementation(), Some(v3));
}
