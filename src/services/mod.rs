//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `workflow.rs` — the ordered lab sequence, stop-on-first-error.
//! - `coverage.rs` — baseline/combined coverage invocation builders.
//! - `generate.rs` — Pynguin invocation builder.
//! - `lcov.rs` — LCOV export + genhtml render invocations.
//! - `process.rs` — external command model and the one spawn point.
//! - `summary.rs` — coverage JSON totals parsing.
//! - `doctor.rs` — preflight checks for the external tool set.
//! - `config.rs` — covlab.toml loading.
//! - `storage.rs` — output dirs, run report, audit log, clean.
//! - `output.rs` — JSON/text output helper.
//!
//! ## Conventions
//! - Prefer pure helpers where possible; builders return invocations as data.
//! - Side effects should be explicit and localized (`process::run_tool`,
//!   `storage`).
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod coverage;
pub mod doctor;
pub mod generate;
pub mod lcov;
pub mod output;
pub mod process;
pub mod storage;
pub mod summary;
pub mod workflow;
