/// Violation summary domain: report model, tallies and the pure services
/// that extract, decode and aggregate a policy payload.
pub mod domain;
pub mod services;
