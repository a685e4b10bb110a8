//! Core application modules for IdeaDash.
//!
//! This module contains the business logic and data models for prompt
//! assembly, Bedrock invocation, and the two form applications.
//!
//! # Module Organization
//!
//! ## Generation Pipeline
//! - [`prompt`] - Korean prompt templates and form input types
//! - [`length_profile`] - 간단/보통/상세 length presets with token ceilings
//! - [`generation`] - generation operations and the truncation escalation policy
//! - [`bedrock_client`] - AWS Bedrock Converse API client and the
//!   [`bedrock_client::ModelInvoker`] seam
//!
//! ## Application State and I/O
//! - [`session`] - explicit per-session stash for generated content
//! - [`prd_export`] - Markdown file persistence for generated PRDs
//!
//! ## UI and Infrastructure
//! - [`dashui`] - egui user interfaces for both binaries
//! - [`startup`] - shared logging and panic-handler bootstrap

pub mod bedrock_client;
pub mod dashui;
pub mod generation;
pub mod length_profile;
pub mod prd_export;
pub mod prompt;
pub mod session;
pub mod startup;
