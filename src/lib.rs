//! Android Chrome version codes.
//!
//! Packages sharing a package name (Chrome, Monochrome, Trichrome, ...) are the
//! same app to the Play Store, which pushes the supported APK with the highest
//! version code. Each variant and ABI combination therefore gets its own code,
//! ordered so that devices receive the preferred APK.
uniffi::setup_scaffolding!();

pub mod format;
pub mod generate;
pub mod translate;
pub mod version_values;
mod ffi;
mod shared_macros;

pub mod types;
pub mod error;

pub use error::{Result, VersionCodeError};
pub use ffi::{android_version_codes, architecture_choices, decode_version_code};
pub use format::{select_scheme, EncodingScheme};
pub use generate::{
    generate, generate_for_all_architectures, generate_version_codes, GeneratedVersionCode,
    VersionCodes,
};
pub use translate::translate_version_code;
pub use types::{Architecture, PackageName, VersionCodeComponents};
pub use version_values::VersionValues;
