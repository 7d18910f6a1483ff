use crate::limbs::Limbs;
use crate::word::Word;

/// ASN.1 DigestInfo header naming SHA-256 (OID 2.16.840.1.101.3.4.2.1),
/// including the OCTET STRING tag and length of the digest that follows.
const SHA256_ID: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    0x05, 0x00, 0x04, 0x20,
];

/// EMSA-PKCS1-v1_5 for SHA-256 (RFC 8017):
///
/// `00 01 FF..FF 00 <DigestInfo> <digest>`
///
/// built straight into limb form one byte-poke at a time — there is never a
/// byte-array rendition of the encoded message. Offsets derive from the
/// configured modulus byte length; the FF run is whatever the key size
/// leaves over (202 bytes for RSA-2048), never fewer than the 8 bytes the
/// encoding requires, so the key must be at least 62 bytes.
pub fn encode_digest<W: Word, const N: usize>(digest: &[u8; 32]) -> Limbs<W, N> {
    let len = Limbs::<W, N>::BYTES;
    debug_assert!(len >= SHA256_ID.len() + 32 + 11);

    let mut em = Limbs::zero();
    em.put_byte(0, 0x00);
    em.put_byte(1, 0x01);
    for i in 2..=len - 53 {
        em.put_byte(i, 0xff);
    }
    em.put_byte(len - 52, 0x00);
    for (i, &b) in SHA256_ID.iter().enumerate() {
        em.put_byte(len - 51 + i, b);
    }
    for (i, &b) in digest.iter().enumerate() {
        em.put_byte(len - 32 + i, b);
    }
    em
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::bigint::from_biguint;
    use crate::sha256;
    use num_bigint::BigUint;

    type Em = Limbs<u32, 64>;

    #[test]
    fn layout_for_rsa_2048() {
        let digest = sha256::digest(b"hello");
        let em = encode_digest::<u32, 64>(&digest);

        assert_eq!(em.byte(0), 0x00);
        assert_eq!(em.byte(1), 0x01);
        for i in 2..=203 {
            assert_eq!(em.byte(i), 0xff, "offset {}", i);
        }
        assert_eq!(em.byte(204), 0x00);
        for (i, &b) in SHA256_ID.iter().enumerate() {
            assert_eq!(em.byte(205 + i), b);
        }
        for (i, &b) in digest.iter().enumerate() {
            assert_eq!(em.byte(224 + i), b);
        }
    }

    #[test]
    fn matches_independently_built_block() {
        let digest = sha256::digest(b"some firmware image");
        let em = encode_digest::<u32, 64>(&digest);

        let mut block = vec![0x00, 0x01];
        block.extend(std::iter::repeat(0xff).take(202));
        block.push(0x00);
        block.extend_from_slice(&SHA256_ID);
        block.extend_from_slice(&digest);
        assert_eq!(em, from_biguint::<u32, 64>(&BigUint::from_bytes_be(&block)));
    }

    #[test]
    fn extreme_digests_stay_in_bounds() {
        // degenerate digests must still produce a well-formed block
        for digest in [[0x00u8; 32], [0xffu8; 32]] {
            let em: Em = encode_digest(&digest);
            assert_eq!(em.byte(0), 0x00);
            assert_eq!(em.byte(1), 0x01);
            assert_eq!(em.byte(204), 0x00);
            assert_eq!(em.byte(255), digest[31]);
        }
    }

    #[test]
    fn offsets_scale_with_key_size() {
        // same codec at a 1024-bit key size: 74 FF bytes instead of 202
        let digest = sha256::digest(b"hello");
        let em = encode_digest::<u32, 32>(&digest);
        assert_eq!(em.byte(1), 0x01);
        for i in 2..=75 {
            assert_eq!(em.byte(i), 0xff);
        }
        assert_eq!(em.byte(76), 0x00);
        assert_eq!(em.byte(77), SHA256_ID[0]);
        assert_eq!(em.byte(96), digest[0]);
    }
}
