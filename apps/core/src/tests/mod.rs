//! Test Module
//!
//! Crate-level test suite for the SupportBot engine.
//!
//! ## Test Categories
//! - `brain_tests`: Normalization, similarity, small talk, matchers, resolver precedence
//! - `chatbot_tests`: Message processing, history and user context
//! - `knowledge_tests`: Knowledge base loading from disk
//! - `integration_tests`: The bundled sample catalog end to end

pub mod integration_tests;
