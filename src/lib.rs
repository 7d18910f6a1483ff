//! Tiny RSA signature verification for boot-time firmware authentication.
//!
//! A boot loader has to decide whether to execute an image using nothing but
//! fixed buffers: no allocator, minimal stack, and on the smallest parts no
//! multiply or divide instruction worth the code size. This crate keeps the
//! whole check inside those limits — SHA-256 over the image, PKCS#1 v1.5
//! encoding of the digest, and `signature^e mod n` for a 2048-bit modulus,
//! all on stack arrays whose sizes come from the build configuration.
//!
//! Build-time choices, in the spirit of a boot ROM's config header:
//!
//! - word width and limb count: the generic layer runs on u8/u16/u32 words;
//!   [`Big`] pins the shipped 2048-bit × u32 shape
//! - exponent: 65537, or 3 with the `e3` feature ([`Exponent`])
//! - modular multiplication: multiply-then-divide, or bit-serial with the
//!   `bitserial` feature for cores without usable multiply/divide
//!   ([`DefaultMul`])
//!
//! The arithmetic is not constant time: compares, branches and the division
//! correction all depend on data. The original boot-ROM verifier had the
//! same property, only public inputs are processed here, and hardening is
//! out of scope.

pub mod limbs;
pub mod modexp;
pub mod modmul;
pub mod pkcs1v15;
pub mod reference;
pub mod sha256;
pub mod verify;
pub mod word;

pub use limbs::Limbs;
pub use modexp::{Exponent, EXPONENT};
pub use modmul::{BitSerial, DefaultMul, ModMul, MulReduce};
pub use sha256::Sha256;
pub use verify::{verify, verify_bytes, verify_message, verify_with};
pub use word::Word;

/// Modulus width of the shipped configuration.
pub const MOD_BITS: usize = 2048;
/// Key / signature length in bytes.
pub const MOD_BYTES: usize = MOD_BITS / 8;

/// The shipped big-integer shape: 64 × u32 words.
pub type Big = Limbs<u32, { MOD_BITS / 32 }>;
