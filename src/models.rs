//! Public Twine models.
//!
//! Models are organized into domain-specific submodules. Each model keeps its
//! computation in an internal `core` submodule. The [`twine_core::Model`]
//! implementations are thin adapters over that core.

pub mod desalination;
