/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants used throughout the application.
pub mod constants;

/// Per-app JSON configuration handling.
pub mod config;

/// The embedded project template and its installer.
pub mod template;

/// Interactive `init` flow.
pub mod init;

/// Discovery of locally configured AWS credential profiles.
pub mod aws;

/// Local train/process/deploy/make subcommands.
pub mod local;

/// A set of helpers for working with the file system.
pub mod ioutils;
