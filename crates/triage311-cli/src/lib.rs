//! triage311 CLI - drive the three Azure AI calls and persist the record

pub mod cli;
pub mod driver;
pub mod json_store;
pub mod logging;
pub mod output;
pub mod samples;
pub mod ticket;
