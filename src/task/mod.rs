//! Task workflow for Taskwright.
//!
//! This module governs how a task record may move between lifecycle statuses
//! and which create, update, and delete operations are legal. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the status graph in [`domain`]
//! - Port contracts in [`ports`]
//! - Validation rules and the default validator in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
