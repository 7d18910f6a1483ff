use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

const KEY_BITS: usize = 2048;

/// Generate a fresh 2048-bit key (e=65537) and a PKCS#1 v1.5 / SHA-256
/// signature over `data`. Returns big-endian (modulus, signature) bytes.
pub fn sign(data: &[u8]) -> (Vec<u8>, Vec<u8>) {
    sign_with_exponent(data, 65537)
}

/// Same, with a chosen public exponent (3 for the small-exponent builds).
pub fn sign_with_exponent(data: &[u8], e: u32) -> (Vec<u8>, Vec<u8>) {
    let mut rng = rand_core::OsRng;

    let private_key = RsaPrivateKey::new_with_exp(&mut rng, KEY_BITS, &rsa::BigUint::from(e))
        .expect("failed to generate a key");
    log::debug!("generated {}-bit reference key, e={}", KEY_BITS, e);
    let signing_key = SigningKey::<Sha256>::new(private_key.clone());

    let sig = signing_key.sign_with_rng(&mut rng, data);
    let pk = private_key.to_public_key();

    (pk.n().to_bytes_be(), sig.to_bytes().to_vec())
}

#[test]
fn test_reference_signature_shape() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (n, sig) = sign(b"hello");
    assert_eq!(n.len(), KEY_BITS / 8);
    assert_eq!(sig.len(), KEY_BITS / 8);
    // 2048-bit modulus always has its top bit set
    assert!(n[0] & 0x80 != 0);
}
