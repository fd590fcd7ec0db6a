/// Reconciliation domain - pure logic for comparing and fixing module graphs
pub mod domain;
pub mod services;
