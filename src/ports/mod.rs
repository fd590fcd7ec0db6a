/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe everything the reconciliation core
/// needs from the outside world: the Go toolchain, the console and the
/// final output destination.
pub mod outbound;
