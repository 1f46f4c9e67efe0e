//! Route Handlers
//!
//! Route handlers organized by functionality.

pub mod chat;
pub mod forms;
pub mod health;
pub mod mood;
pub mod page;
