/// Handles argument parsing and top-level dispatch.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// The name check, download and manifest rewrite pipeline.
pub mod initializer;

/// Download transport for template repositories.
pub mod loader;

/// Rewrites the downloaded project's `package.json`.
pub mod manifest;

/// User input and interaction handling.
pub mod prompt;

/// Built-in templates.
pub mod registry;

pub mod types;
