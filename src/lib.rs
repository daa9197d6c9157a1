//! Placeholder icon generation and verification.
//!
//! [`placeholder`] writes the `icon<size>.png` stand-in files, [`verify`]
//! checks whether those files are still placeholders or have been replaced
//! by real images.

pub mod placeholder;
pub mod verify;
