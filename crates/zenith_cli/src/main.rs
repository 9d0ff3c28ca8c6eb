//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `zenith_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("zenith_core version={}", zenith_core::core_version());
    println!(
        "zenith_core collections={}",
        zenith_core::collection_names().join(",")
    );
}
