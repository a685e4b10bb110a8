//! IdeaDash - AI idea and document generation desktop apps on AWS Bedrock
//!
//! IdeaDash is a pair of small egui desktop applications that turn form input
//! into Korean-language prompts, send them to Amazon Bedrock (Nova Lite), and
//! render the generated text.
//!
//! # Binaries
//!
//! - **ideadash**: living-lab hackathon idea generator with a secondary step
//!   that derives a minimal Streamlit-app PRD from the generated idea and can
//!   save it as a Markdown file.
//! - **ideadash-intro**: cover-letter (자기소개서) generator - a single form,
//!   one generation call, plain-text result.
//!
//! # Architecture Overview
//!
//! The crate follows a simple layered structure:
//!
//! - **UI Layer** ([`app::dashui`]): egui-based single-window apps, one per
//!   binary, rendering results as Markdown
//! - **Generation Logic** ([`app::generation`]): prompt assembly, token-ceiling
//!   selection, and the one-shot truncation escalation policy
//! - **Bedrock Integration** ([`app::bedrock_client`]): blocking Converse API
//!   invocation behind the [`app::bedrock_client::ModelInvoker`] seam
//! - **Session State** ([`app::session`]): explicit per-session stash for the
//!   most recent idea and PRD
//!
//! Generation failures are a discriminated type
//! ([`app::bedrock_client::GenerationError`]) rather than error-shaped strings;
//! the UI maps each variant to its user-facing message.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::dashui::{IdeaDashApp, IntroDashApp};
