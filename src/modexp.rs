use crate::limbs::Limbs;
use crate::modmul::ModMul;
use crate::word::Word;

/// The two RSA public exponents this verifier knows. A closed enumeration:
/// anything else is a configuration error that cannot be expressed, matching
/// the original's compile-time exponent selection. There is deliberately no
/// general square-and-multiply loop — each exponent gets its own unrolled
/// chain to keep the code small.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exponent {
    E3,
    E65537,
}

/// Exponent the concrete verifier entry points use, selected by the `e3`
/// cargo feature. The exponent is a build-time property of the device, not
/// something read from key material.
#[cfg(feature = "e3")]
pub const EXPONENT: Exponent = Exponent::E3;
#[cfg(not(feature = "e3"))]
pub const EXPONENT: Exponent = Exponent::E65537;

impl Exponent {
    /// `s^e mod m` via the strategy `M`.
    pub fn pow<M, W, const N: usize>(self, s: &Limbs<W, N>, m: &Limbs<W, N>) -> Limbs<W, N>
    where
        M: ModMul<W, N>,
        W: Word,
    {
        match self {
            Exponent::E3 => pow_e3::<M, W, N>(s, m),
            Exponent::E65537 => pow_e65537::<M, W, N>(s, m),
        }
    }
}

/// s^3 = s^2 * s
fn pow_e3<M: ModMul<W, N>, W: Word, const N: usize>(
    s: &Limbs<W, N>,
    m: &Limbs<W, N>,
) -> Limbs<W, N> {
    let t = M::mod_mul(s, s, m);
    M::mod_mul(s, &t, m)
}

/// s^65537 = s^(2^16) * s: sixteen squarings, one multiply
fn pow_e65537<M: ModMul<W, N>, W: Word, const N: usize>(
    s: &Limbs<W, N>,
    m: &Limbs<W, N>,
) -> Limbs<W, N> {
    let mut c = M::mod_mul(s, s, m);
    for _ in 0..7 {
        let t = M::mod_mul(&c, &c, m);
        c = M::mod_mul(&t, &t, m);
    }
    let t = M::mod_mul(&c, &c, m);
    M::mod_mul(s, &t, m)
}
