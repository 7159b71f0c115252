//! Taskwright: task workflow rules.
//!
//! This crate decides whether a task may be created, changed, moved to another
//! status, or deleted. It holds the status workflow graph, the validation
//! rules built on it, and a small service that applies them around a task
//! repository.
//!
//! # Architecture
//!
//! Taskwright follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Status graph, task validation, and lifecycle orchestration

pub mod task;
