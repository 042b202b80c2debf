// ============================================================================
// CERTORA SUNBEAM RULES FOR THE QUOTER
// ============================================================================
//
// Properties of the quoting engine that must hold for every input, not just
// the fixtures exercised by unit tests.
//
// - route_specs.rs : Protocol selector decoding
// - math_specs.rs  : Rounding direction of the hop formulas
//
// USAGE:
// - Unit tests: cargo test -p dex-quoter
// - Certora build: cargo build --features certora -p dex-quoter
//
// ============================================================================

pub mod math_specs;
pub mod route_specs;
