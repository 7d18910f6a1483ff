use num_bigint::BigUint;
use num_integer::Integer;
use rand_core::RngCore;

use crate::limbs::Limbs;
use crate::word::Word;

/// `Limbs` to arbitrary precision, for checking against `num-bigint`.
pub fn to_biguint<W: Word, const N: usize>(x: &Limbs<W, N>) -> BigUint {
    let bytes: Vec<u8> = (0..Limbs::<W, N>::BYTES).map(|i| x.byte(i)).collect();
    BigUint::from_bytes_be(&bytes)
}

/// Arbitrary precision back into limb form. The value must fit the
/// configured width.
pub fn from_biguint<W: Word, const N: usize>(x: &BigUint) -> Limbs<W, N> {
    let bytes = x.to_bytes_be();
    let total = Limbs::<W, N>::BYTES;
    assert!(bytes.len() <= total, "value wider than the configured limbs");

    let mut out = Limbs::zero();
    for (i, &b) in bytes.iter().enumerate() {
        out.put_byte(total - bytes.len() + i, b);
    }
    out
}

/// `a * b mod m` the arbitrary-precision way — the oracle the strategy
/// equivalence tests compare against.
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let (_, r) = (a * b).div_rem(m);
    r
}

/// Random modulus-shaped value: top bit forced so the division's top-word
/// precondition holds.
pub fn random_modulus<W: Word, const N: usize>() -> Limbs<W, N> {
    let mut bytes = vec![0u8; Limbs::<W, N>::BYTES];
    rand_core::OsRng.fill_bytes(&mut bytes);
    bytes[0] |= 0x80;
    Limbs::from_be_bytes(&bytes)
}

/// Uniform random value below `m`.
pub fn random_below<W: Word, const N: usize>(m: &Limbs<W, N>) -> Limbs<W, N> {
    let mut bytes = vec![0u8; Limbs::<W, N>::BYTES];
    rand_core::OsRng.fill_bytes(&mut bytes);
    let x = BigUint::from_bytes_be(&bytes) % to_biguint(m);
    from_biguint(&x)
}

#[test]
fn test_biguint_limbs_round_trip() {
    let m = random_modulus::<u32, 8>();
    assert_eq!(from_biguint::<u32, 8>(&to_biguint(&m)), m);

    let x = BigUint::from(0xdead_beefu32);
    assert_eq!(to_biguint(&from_biguint::<u16, 4>(&x)), x);
}
