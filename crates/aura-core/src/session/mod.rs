//! Client-side session gate.

pub mod gate;
