// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on the set capacity feature.
//!
//! This enables cleaner conditional compilation in tests and code:
//! - `#[cfg(capacity_multiword)]` instead of `#[cfg(not(feature = "capacity_64"))]`
//! - `#[cfg(capacity_eq_256)]` for the largest supported capacity

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(capacity_multiword)");
    println!("cargo:rustc-check-cfg=cfg(capacity_eq_256)");

    // CAPACITY > 64 (default 128, or any explicit feature other than capacity_64)
    #[cfg(not(feature = "capacity_64"))]
    println!("cargo:rustc-cfg=capacity_multiword");

    #[cfg(feature = "capacity_256")]
    println!("cargo:rustc-cfg=capacity_eq_256");
}
