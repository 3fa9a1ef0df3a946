//! quizboot-core: Launch plan, configuration, and the launcher sequence.
//!
//! This crate defines what a launch consists of (two command lines issued in
//! order) and the engine that issues them through a [`traits::CommandExecutor`].
//! Actually spawning processes lives in `quizboot-runner`.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod outcome;
pub mod traits;
