//! Internal helpers shared by the transposition ciphers.

pub(crate) mod grid;
pub(crate) mod text;
