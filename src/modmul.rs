use crate::limbs::Limbs;
use crate::word::Word;

/// Modular multiplication `a * b mod m` for `0 <= a, b < m`.
///
/// Two interchangeable strategies implement this, picked once per build via
/// [`DefaultMul`]: the schoolbook multiply-then-divide route for CPUs with a
/// usable multiply instruction, and a bit-serial route for the ones without.
/// Both are pure functions with no state of their own; their results agree
/// for every valid input (a tested property).
pub trait ModMul<W: Word, const N: usize> {
    fn mod_mul(a: &Limbs<W, N>, b: &Limbs<W, N>, m: &Limbs<W, N>) -> Limbs<W, N>;
}

/// Multiply then reduce by long division. Fast, but pulls in the word
/// multiply/divide paths — bigger code on small cores.
pub struct MulReduce;

/// Double-and-add over the bits of `b`, subtracting `m` whenever the running
/// value overflows or reaches it. No multiply or divide instructions at all,
/// at the cost of being word-count times slower than [`MulReduce`].
pub struct BitSerial;

impl<W: Word, const N: usize> ModMul<W, N> for MulReduce {
    fn mod_mul(a: &Limbs<W, N>, b: &Limbs<W, N>, m: &Limbs<W, N>) -> Limbs<W, N> {
        let mut t = a.mul_wide(b);
        t.div_reduce(m);
        t.low()
    }
}

impl<W: Word, const N: usize> ModMul<W, N> for BitSerial {
    fn mod_mul(a: &Limbs<W, N>, b: &Limbs<W, N>, m: &Limbs<W, N>) -> Limbs<W, N> {
        let mut r = Limbs::zero();
        for i in (0..N * W::BITS as usize).rev() {
            let mut c = r.shl1_assign();
            if b.bit(i) {
                if c || r >= *m {
                    r.borrowing_sub_assign(m);
                }
                c = r.carrying_add_assign(a);
            }
            if c || r >= *m {
                r.borrowing_sub_assign(m);
            }
        }
        r
    }
}

/// The strategy the concrete verifier entry points use, selected by the
/// `bitserial` cargo feature.
#[cfg(not(feature = "bitserial"))]
pub type DefaultMul = MulReduce;
#[cfg(feature = "bitserial")]
pub type DefaultMul = BitSerial;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::bigint::{self, from_biguint, random_below, random_modulus, to_biguint};

    fn strategies_agree<W: Word, const N: usize>(trials: usize) {
        for _ in 0..trials {
            let m = random_modulus::<W, N>();
            let a = random_below(&m);
            let b = random_below(&m);

            let fast = MulReduce::mod_mul(&a, &b, &m);
            let slow = BitSerial::mod_mul(&a, &b, &m);
            assert_eq!(fast, slow, "a={} b={} m={}", a, b, m);

            let want = bigint::mod_mul(&to_biguint(&a), &to_biguint(&b), &to_biguint(&m));
            assert_eq!(fast, from_biguint(&want));
        }
    }

    #[test]
    fn strategies_agree_u8() {
        strategies_agree::<u8, 8>(50);
    }

    #[test]
    fn strategies_agree_u16() {
        strategies_agree::<u16, 8>(50);
    }

    #[test]
    fn strategies_agree_u32() {
        strategies_agree::<u32, 8>(50);
    }

    #[test]
    fn strategies_agree_full_width() {
        // the shipped 2048-bit configuration
        strategies_agree::<u32, 64>(4);
    }

    #[test]
    fn zero_operands() {
        let m = random_modulus::<u32, 8>();
        let a = random_below(&m);
        let zero = Limbs::zero();
        assert_eq!(MulReduce::mod_mul(&a, &zero, &m), zero);
        assert_eq!(BitSerial::mod_mul(&zero, &a, &m), zero);
    }
}
