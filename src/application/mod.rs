//! Application layer: the vending machine engine and the roles that use it.
//!
//! `VendingMachine` is the entry point for purchases and administration. The
//! `Consumer` and `Operator` roles share their money handling through the
//! `WalletHolder` trait.

pub mod catalog;
pub mod machine;
pub mod roles;
