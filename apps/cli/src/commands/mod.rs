//! Command implementations.

pub mod export;
pub mod init;
pub mod objectives;
pub mod plan;
pub mod run;
pub mod sequence;
pub mod show;
