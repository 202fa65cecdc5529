// src/application/commands/mod.rs
//
// Command Handlers
//
// - Commands are thin adapters between the CLI and the services
// - Commands return DTOs or serialized ErrorResponses
// - Commands NEVER contain business logic

pub mod account_commands;
pub mod admin_commands;
pub mod catalog_commands;
pub mod storage_commands;

#[cfg(test)]
mod commands_tests;

pub use account_commands::*;
pub use admin_commands::*;
pub use catalog_commands::*;
pub use storage_commands::*;
