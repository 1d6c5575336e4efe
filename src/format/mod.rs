//! Digit layout of a version code:
//!
//! ```text
//! {BUILD: 4-5 digits}{PATCH: 3 digits}{package: 1 digit}{ABIs: 1 digit}
//! ```
//!
//! e.g. build 3721, patch 0, ChromeModern (1), on ARM64 (5): `372100015`.

pub mod abi_digits;
pub mod apk_variants;
pub mod layout;
pub mod package_digits;

pub use abi_digits::{select_scheme, EncodingScheme};
pub use apk_variants::{apk_variants, ApkVariant};
pub use layout::{DigitOrder, NextBuildMarker, NEXT_BUILD_VERSION_CODE_DIFF};
pub use package_digits::{package_digit, package_for_digit};
