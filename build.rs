// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on BITS feature selection.
//!
//! This enables cleaner conditional compilation in tests:
//! - `#[cfg(bits_eq_3)]` for the 3-bit reference configuration
//! - `#[cfg(bits_eq_8)]` for the default/most common case

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(bits_eq_3)");
    println!("cargo:rustc-check-cfg=cfg(bits_eq_8)");

    // BITS = 3 (reference configuration)
    #[cfg(feature = "bits_3")]
    println!("cargo:rustc-cfg=bits_eq_3");

    // BITS = 8 (default or explicit bits_8 feature)
    #[cfg(any(
        feature = "bits_8",
        not(any(
            feature = "bits_3",
            feature = "bits_4",
            feature = "bits_5",
            feature = "bits_6",
            feature = "bits_7"
        ))
    ))]
    println!("cargo:rustc-cfg=bits_eq_8");
}
