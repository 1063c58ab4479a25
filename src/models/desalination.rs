//! Thermal desalination models.

pub mod agmd;
