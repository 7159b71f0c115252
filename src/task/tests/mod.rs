//! Unit tests for the task module.
//!
//! Tests are organised by concern: the status graph, the individual rules,
//! hierarchy facts, domain values, and the lifecycle service.
