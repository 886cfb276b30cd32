use std::{cell::RefCell, fmt::Debug, sync::Arc};

use fhegate_sampling::Source;
use rand_core::RngCore;

use crate::{
    cpu_ref::wire::{MAGIC, NONCE_BYTES, RefCiphertext},
    layouts::{EngineResult, Status},
};

thread_local! {
    static NONCES: RefCell<Source> = RefCell::new(Source::from_entropy());
}

fn fresh_nonce() -> [u8; NONCE_BYTES] {
    let mut nonce: [u8; NONCE_BYTES] = [0u8; NONCE_BYTES];
    NONCES.with(|source| source.borrow_mut().fill_bytes(&mut nonce));
    nonce
}

pub(crate) struct Secret {
    seed: [u8; 32],
    key_id: u64,
}

impl Secret {
    pub(crate) fn generate() -> Self {
        let mut source: Source = Source::from_entropy();
        let seed: [u8; 32] = source.new_seed();
        let key_id: u64 = source.next_u64();
        Self { seed, key_id }
    }

    pub(crate) fn key_id(&self) -> u64 {
        self.key_id
    }

    fn mask(&self, family: u8, nonce: &[u8; NONCE_BYTES]) -> u8 {
        let mut seed: [u8; 32] = self.seed;
        seed.iter_mut().zip(nonce.iter().cycle()).for_each(|(s, n)| *s ^= n);
        let mask: u8 = Source::new(seed).next_u8();
        if family == RefCiphertext::FAMILY_BOOLEAN { mask & 1 } else { mask }
    }

    pub(crate) fn encrypt(&self, family: u8, value: u8) -> RefCiphertext {
        let nonce: [u8; NONCE_BYTES] = fresh_nonce();
        RefCiphertext {
            magic: MAGIC,
            family,
            key_id: self.key_id,
            nonce,
            body: value ^ self.mask(family, &nonce),
        }
    }

    pub(crate) fn decrypt(&self, family: u8, ct: &RefCiphertext) -> EngineResult<u8> {
        if ct.family != family {
            return Err(Status::WRONG_FAMILY);
        }
        if ct.key_id != self.key_id {
            return Err(Status::KEY_MISMATCH);
        }
        Ok(ct.body ^ self.mask(family, &ct.nonce))
    }
}

/// Secret key. Shares its seed with the server and public keys derived from it.
#[derive(Clone)]
pub struct RefClientKey(pub(crate) Arc<Secret>);

/// Evaluation key. Carries the secret seed: the reference engine evaluates
/// by decrypting.
#[derive(Clone)]
pub struct RefServerKey(pub(crate) Arc<Secret>);

/// Encryption-only key. Carries the secret seed.
#[derive(Clone)]
pub struct RefPublicKey(pub(crate) Arc<Secret>);

macro_rules! debug_key_id {
    ($($ty:ident),+) => {
        $(
            impl Debug for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($ty)).field("key_id", &format_args!("{:016x}", self.0.key_id())).finish()
                }
            }
        )+
    };
}

debug_key_id!(RefClientKey, RefServerKey, RefPublicKey);
