//! Typed, domain-separated signatures.
//!
//! Digests follow the EIP-712 layout: `keccak256(0x1901 || domainSeparator || structHash)`.
//! The domain binds the contract name, a version, the network id and the verifying contract's
//! address, so a signature accepted by one vault instance is worthless on any other.
//! Signers are identified by their uncompressed SEC-1 secp256k1 public key.

use soroban_sdk::{crypto::Hash, log, xdr::ToXdr, Address, Bytes, BytesN, Env};
use crate::error::VaultError;

const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,bytes32 networkId,address verifyingContract)";
const MAX_RECOVERY_ID: u32 = 3;

/// Static part of a signing domain.
#[derive(Clone, Copy, Debug)]
pub struct TypedDomain {
    pub name: &'static str,
    pub version: &'static str,
}

pub struct SignatureVerifier<'a> {
    env: &'a Env,
    domain: TypedDomain,
}

impl<'a> SignatureVerifier<'a> {
    pub fn new(env: &'a Env, domain: TypedDomain) -> Self { Self { env, domain } }

    fn keccak(&self, data: &Bytes) -> BytesN<32> {
        self.env.crypto().keccak256(data).into()
    }

    fn keccak_slice(&self, data: &[u8]) -> BytesN<32> {
        self.keccak(&Bytes::from_slice(self.env, data))
    }

    /// Hash of an address's XDR encoding; addresses are variable length, so they are hashed
    /// to a 32-byte word the way dynamic fields are.
    pub fn encode_address(&self, address: &Address) -> BytesN<32> {
        self.keccak(&address.clone().to_xdr(self.env))
    }

    /// A `u64` left-padded to a 32-byte big-endian word.
    pub fn encode_u64(&self, value: u64) -> BytesN<32> {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        BytesN::from_array(self.env, &word)
    }

    /// Domain separator bound to the currently executing contract.
    pub fn domain_separator(&self) -> BytesN<32> {
        let mut buf = Bytes::new(self.env);
        buf.append(&self.keccak_slice(DOMAIN_TYPE).into());
        buf.append(&self.keccak_slice(self.domain.name.as_bytes()).into());
        buf.append(&self.keccak_slice(self.domain.version.as_bytes()).into());
        buf.append(&self.env.ledger().network_id().into());
        buf.append(&self.encode_address(&self.env.current_contract_address()).into());
        self.keccak(&buf)
    }

    /// `keccak256(typeHash || fields...)` where each field is already a 32-byte word.
    pub fn struct_hash(&self, type_string: &[u8], fields: &[BytesN<32>]) -> BytesN<32> {
        let mut buf = Bytes::new(self.env);
        buf.append(&self.keccak_slice(type_string).into());
        for field in fields {
            buf.append(&field.clone().into());
        }
        self.keccak(&buf)
    }

    /// The digest a signer must sign for the given struct hash.
    pub fn digest(&self, struct_hash: &BytesN<32>) -> Hash<32> {
        let mut buf = Bytes::from_array(self.env, &[0x19, 0x01]);
        buf.append(&self.domain_separator().into());
        buf.append(&struct_hash.clone().into());
        self.env.crypto().keccak256(&buf)
    }

    /// Recovers the signer key and compares it with `expected`.
    pub fn verify(
        &self,
        struct_hash: &BytesN<32>,
        signature: &BytesN<64>,
        recovery_id: u32,
        expected: &BytesN<65>,
    ) -> Result<(), VaultError> {
        if recovery_id > MAX_RECOVERY_ID {
            return Err(VaultError::InvalidSigner);
        }
        let digest = self.digest(struct_hash);
        let recovered = self.env.crypto().secp256k1_recover(&digest, signature, recovery_id);
        if &recovered != expected {
            log!(self.env, "signature recovered to an unexpected key", recovered);
            return Err(VaultError::InvalidSigner);
        }
        Ok(())
    }
}
