#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/contract-risk/issues/"
)]

//! Scenario-driven testing infrastructure for contract-risk.
//!
//! Review sessions are described declaratively in TOML files: an ordered list
//! of submit / adjust / finalize / list steps, each with optional expectations
//! about the resulting risk levels, errors, and archive size.
//!
//! ## Modules
//!
//! - [`scenario`] - Scenario file types
//! - [`loader`] - Loading scenarios from disk
//! - [`runner`] - Executing scenarios against a fresh workflow
//! - [`errors`] - Error types for the scenario system

pub mod errors;
pub mod loader;
pub mod runner;
pub mod scenario;

pub use errors::{ScenarioError, ScenarioResult};
pub use loader::{load_all_scenarios, load_scenario, parse_scenario};
pub use runner::{run_scenario, ScenarioReport, StepOutcome};
pub use scenario::{Action, ExpectedError, Expectation, Scenario, Step};
