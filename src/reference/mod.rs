//! Reference-value generation for tests and benches: fresh keys and
//! signatures through the `rsa` crate, arbitrary-precision oracles through
//! `num-bigint`. Nothing in here runs on the boot path — the verification
//! core never allocates and never calls out of `crate::{limbs, modmul,
//! modexp, sha256, pkcs1v15, verify}`.

pub mod bigint;
pub mod signature;
