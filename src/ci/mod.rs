//! CI integration: PR lookup, run selection and artifact download
//!
//! The pipeline talks to CI through the `CiClient` trait; `GhCli` is the
//! production implementation built on the `gh` CLI.

mod artifact;
mod client;
mod gh;
mod resolve;
pub mod run;

pub use artifact::{fetch_artifact, ArtifactDir};
pub use client::CiClient;
pub use gh::GhCli;
pub use resolve::{locate_run, resolve_branch};
pub use run::WorkflowRun;
