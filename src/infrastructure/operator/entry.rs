//! Concrete operator consumed by the CLI.

/// Implements every operator-facing inbound port over the configured runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;
