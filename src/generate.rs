use std::collections::BTreeMap;

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{Result, VersionCodeError};
use crate::format::{
    apk_variants, package_digit, select_scheme, EncodingScheme, NEXT_BUILD_VERSION_CODE_DIFF,
};
use crate::types::{AbiCombo, Architecture, PackageName};
use crate::version_values::VersionValues;

/// Smallest build number that still fills the 4-digit build field.
pub const MIN_BUILD_NUMBER: u32 = 1000;
/// Build numbers must fit the 5-digit build field.
pub const MAX_BUILD_NUMBER: u32 = 99_999;
/// Patch numbers at or above 500 would be read back as next builds.
pub const MAX_PATCH_NUMBER: u32 = 499;

const VERSION_CODE_SUFFIX: &str = "_VERSION_CODE";

/// A single generated version code and the APK it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVersionCode {
    pub variant: &'static str,
    pub package: PackageName,
    pub abis: AbiCombo,
    pub version_code: u64,
}

impl GeneratedVersionCode {
    /// Manifest variable name, e.g. `MONOCHROME_64_32_VERSION_CODE`.
    pub fn key(&self) -> String {
        format!("{}{}", self.variant, VERSION_CODE_SUFFIX)
    }
}

/// Every version code for one build configuration, in table order.
#[derive(Debug, Clone)]
pub struct VersionCodes {
    pub architecture: Architecture,
    pub build_number: u32,
    pub patch_number: u32,
    pub is_next_build: bool,
    pub scheme: EncodingScheme,
    pub codes: Vec<GeneratedVersionCode>,
}

impl VersionCodes {
    /// Look up a code by variant name, with or without the `_VERSION_CODE` suffix.
    pub fn get(&self, variant: &str) -> Option<u64> {
        let variant = variant.strip_suffix(VERSION_CODE_SUFFIX).unwrap_or(variant);
        self.codes
            .iter()
            .find(|code| code.variant == variant)
            .map(|code| code.version_code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedVersionCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `{ "CHROME_VERSION_CODE": "378100010", ... }`, as consumed by manifest templating.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.codes
            .iter()
            .map(|code| (code.key(), code.version_code.to_string()))
            .collect()
    }
}

/// Builds the version codes for every APK of `architecture`.
///
/// Codes are `{BUILD}{3 digits: PATCH}{1 digit: package}{1 digit: ABIs}`;
/// this is responsible for the final two digits. MAJOR and MINOR are not
/// part of the code: MINOR is always 0 and MAJOR always sorts with BUILD.
pub fn generate(
    build_number: u32,
    patch_number: u32,
    architecture: Architecture,
    is_next_build: bool,
) -> Result<VersionCodes> {
    check_range(build_number, patch_number)?;

    let mut base_version_code = (build_number as u64 * 1000 + patch_number as u64) * 100;
    if is_next_build {
        base_version_code += NEXT_BUILD_VERSION_CODE_DIFF;
    }

    let manufacturer = architecture.manufacturer();
    let bitness = architecture.bitness_class();
    let scheme = select_scheme(build_number, patch_number);
    debug!(
        "generating for {} ({}/{}): base={} scheme={}",
        architecture,
        manufacturer,
        bitness,
        base_version_code,
        scheme.name()
    );

    let mut codes = Vec::new();
    for apk in apk_variants(bitness) {
        if apk.abis == AbiCombo::Bits64And32High && architecture != Architecture::Arm64 {
            continue;
        }

        let abi_part = scheme.abi_digit(manufacturer, apk.abis).ok_or_else(|| {
            VersionCodeError::UnresolvedDigit(format!(
                "ABI lookup: {}/{} has no entry in the {} scheme",
                manufacturer,
                apk.abis,
                scheme.name()
            ))
        })?;
        let version_code = base_version_code + package_digit(apk.package) + abi_part;
        trace!("{}{} = {}", apk.name, VERSION_CODE_SUFFIX, version_code);

        codes.push(GeneratedVersionCode {
            variant: apk.name,
            package: apk.package,
            abis: apk.abis,
            version_code,
        });
    }

    Ok(VersionCodes {
        architecture,
        build_number,
        patch_number,
        is_next_build,
        scheme,
        codes,
    })
}

/// Dictionary form used by the build: reads BUILD and PATCH from the version
/// values and maps `<VARIANT>_VERSION_CODE` to decimal strings.
pub fn generate_version_codes(
    version_values: &VersionValues,
    arch: &str,
    is_next_build: bool,
) -> Result<BTreeMap<String, String>> {
    let architecture: Architecture = arch.parse()?;
    let codes = generate(
        version_values.build_number()?,
        version_values.patch_number()?,
        architecture,
        is_next_build,
    )?;
    Ok(codes.to_map())
}

/// Runs [`generate`] for every architecture, in [`Architecture::ALL`] order.
pub fn generate_for_all_architectures(
    build_number: u32,
    patch_number: u32,
    is_next_build: bool,
) -> Result<Vec<VersionCodes>> {
    Architecture::ALL
        .par_iter()
        .map(|arch| generate(build_number, patch_number, *arch, is_next_build))
        .collect()
}

fn check_range(build_number: u32, patch_number: u32) -> Result<()> {
    if !(MIN_BUILD_NUMBER..=MAX_BUILD_NUMBER).contains(&build_number) {
        return Err(VersionCodeError::RangeError(format!(
            "build number {} outside {}..={}",
            build_number, MIN_BUILD_NUMBER, MAX_BUILD_NUMBER
        )));
    }
    if patch_number > MAX_PATCH_NUMBER {
        return Err(VersionCodeError::RangeError(format!(
            "patch number {} exceeds {}",
            patch_number, MAX_PATCH_NUMBER
        )));
    }
    Ok(())
}
