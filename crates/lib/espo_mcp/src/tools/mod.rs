//! Tool parameter types and CRUD call builders.
//!
//! One module per EspoCRM entity holds that entity's typed request structs;
//! [`crud`] turns any of them into a single upstream call.

pub mod account;
pub mod call;
pub mod campaign;
pub mod common;
pub mod contact;
pub mod crud;
pub mod email;
pub mod lead;
pub mod target_list;
pub mod user;

#[cfg(test)]
mod tests;
