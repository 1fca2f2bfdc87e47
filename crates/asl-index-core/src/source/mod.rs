//! Script source handling: decoding, comment stripping, block extraction.

pub mod blocks;
pub mod fingerprint;
pub mod strip;
