use std::collections::HashMap;

use crate::error::VersionCodeError;
use crate::generate::generate;
use crate::translate::translate_version_code;
use crate::types::{Architecture, VersionCodeComponents};

#[uniffi::export]
pub fn decode_version_code(
    version_code: String,
    is_webview: bool,
) -> Result<VersionCodeComponents, VersionCodeError> {
    translate_version_code(&version_code, is_webview)
}

/// `<VARIANT>_VERSION_CODE` to decimal string, for one architecture key.
#[uniffi::export]
pub fn android_version_codes(
    build_number: u32,
    patch_number: u32,
    arch: String,
    is_next_build: bool,
) -> Result<HashMap<String, String>, VersionCodeError> {
    let architecture: Architecture = arch.parse()?;
    let codes = generate(build_number, patch_number, architecture, is_next_build)?;
    Ok(codes.to_map().into_iter().collect())
}

#[uniffi::export]
pub fn architecture_choices() -> Vec<String> {
    Architecture::ALL
        .iter()
        .map(|arch| arch.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_functions() {
        let codes = android_version_codes(5750, 0, "x86".to_string(), false).unwrap();
        assert_eq!(codes["CHROME_VERSION_CODE"], "575000006");

        let decoded = decode_version_code(codes["WEBVIEW_BETA_VERSION_CODE"].clone(), true).unwrap();
        assert_eq!(decoded.abi, "x86");

        assert!(matches!(
            android_version_codes(5750, 0, "sparc".to_string(), false),
            Err(VersionCodeError::UnknownArchitecture(_))
        ));
        assert_eq!(architecture_choices(), vec!["arm", "arm64", "riscv64", "x86", "x64"]);
    }
}
