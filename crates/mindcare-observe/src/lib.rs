//! Observability for MindCare: tracing subscriber setup.

pub mod tracing_setup;
