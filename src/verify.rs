use crate::limbs::Limbs;
use crate::modexp::{Exponent, EXPONENT};
use crate::modmul::{DefaultMul, ModMul};
use crate::pkcs1v15;
use crate::sha256;
use crate::word::Word;
use crate::{Big, MOD_BYTES};

/// RSA signature check: recover `signature^e mod modulus` and compare it
/// against the expected padded digest representative. Word width, limb
/// count, strategy and exponent are all free here; the concrete entry
/// points below pin them to the build configuration.
///
/// Pure and stateless — a bad signature is the `false` return, never a
/// panic, and no input is mutated.
pub fn verify_with<M, W, const N: usize>(
    digest: &[u8; 32],
    modulus: &Limbs<W, N>,
    signature: &Limbs<W, N>,
    exponent: Exponent,
) -> bool
where
    M: ModMul<W, N>,
    W: Word,
{
    let expected = pkcs1v15::encode_digest(digest);
    let candidate = exponent.pow::<M, W, N>(signature, modulus);
    expected == candidate
}

/// Verify a precomputed digest against the build-configured modulus width,
/// strategy and exponent.
pub fn verify(digest: &[u8; 32], modulus: &Big, signature: &Big) -> bool {
    verify_with::<DefaultMul, u32, { crate::MOD_BITS / 32 }>(digest, modulus, signature, EXPONENT)
}

/// [`verify`] over raw big-endian key and signature buffers, as they sit in
/// the firmware container. The fixed-size references make wrong-length
/// buffers a type error rather than a runtime case.
pub fn verify_bytes(
    digest: &[u8; 32],
    public_key: &[u8; MOD_BYTES],
    signature: &[u8; MOD_BYTES],
) -> bool {
    verify(
        digest,
        &Big::from_be_bytes(public_key),
        &Big::from_be_bytes(signature),
    )
}

/// Hash a message with the built-in digest engine and verify the result.
pub fn verify_message(
    msg: &[u8],
    public_key: &[u8; MOD_BYTES],
    signature: &[u8; MOD_BYTES],
) -> bool {
    verify_bytes(&sha256::digest(msg), public_key, signature)
}
