use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{Result, VersionCodeError};
use crate::format::layout::{LEGACY_NEXT_PACKAGE_DIGIT_DIFF, TAIL_DIGITS};
use crate::format::{
    package_for_digit, select_scheme, DigitOrder, NextBuildMarker, NEXT_BUILD_VERSION_CODE_DIFF,
};
use crate::types::{AbiCombo, Manufacturer, VersionCodeComponents};

// 4-digit builds give 9 digits, 5-digit builds (around 2035 at one branch a
// day) give 10.
static VERSION_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9,10}$").expect("version code pattern compiles"));

/// Translates a version code to its component parts.
///
/// `is_webview` picks between webview and browser packages, which share
/// package digits. For build 100.0.5678.99 built for Monochrome on arm 64_32
/// (`567809924`) this yields `5678, 99, MONOCHROME, arm_64_32, false`.
pub fn translate_version_code(
    version_code: &str,
    is_webview: bool,
) -> Result<VersionCodeComponents> {
    if !VERSION_CODE_PATTERN.is_match(version_code) {
        return Err(VersionCodeError::MalformedVersionCode(format!(
            "parse: expected 9 or 10 decimal digits, got '{}'",
            version_code
        )));
    }

    let (build_digits, tail_digits) = version_code.split_at(version_code.len() - TAIL_DIGITS);
    let build_number: u32 = parse_digits(build_digits, version_code)?;
    let mut tail: u64 = parse_digits(tail_digits, version_code)?;

    let mut is_next_build = false;
    if tail >= NEXT_BUILD_VERSION_CODE_DIFF {
        is_next_build = true;
        tail -= NEXT_BUILD_VERSION_CODE_DIFF;
    }
    let patch_number = (tail / 100) as u32;

    let order = DigitOrder::for_build(build_number);
    let (mut package_digit, abi_digit) = order.split(tail % 100);

    if NextBuildMarker::for_build(build_number) == NextBuildMarker::PackageDigitOffset
        && package_digit >= LEGACY_NEXT_PACKAGE_DIGIT_DIFF
    {
        if is_next_build {
            return Err(VersionCodeError::MalformedVersionCode(format!(
                "next-build marker: '{}' carries both the package digit and the version code offset",
                version_code
            )));
        }
        is_next_build = true;
        package_digit -= LEGACY_NEXT_PACKAGE_DIGIT_DIFF;
    }

    let scheme = select_scheme(build_number, patch_number);
    debug!(
        "translating {}: build={} patch={} order={:?} scheme={} next={}",
        version_code,
        build_number,
        patch_number,
        order,
        scheme.name(),
        is_next_build
    );

    let package_name = package_for_digit(package_digit * 10, is_webview).ok_or_else(|| {
        VersionCodeError::UnresolvedDigit(format!(
            "package lookup: digit {} of '{}' matches no {} package",
            package_digit,
            version_code,
            if is_webview { "webview" } else { "non-webview" }
        ))
    })?;

    let (manufacturer, abis) = scheme.abi_for_digit(abi_digit).ok_or_else(|| {
        VersionCodeError::UnresolvedDigit(format!(
            "ABI lookup: digit {} of '{}' has no entry in the {} scheme",
            abi_digit,
            version_code,
            scheme.name()
        ))
    })?;

    Ok(VersionCodeComponents {
        build_number,
        patch_number,
        package_name,
        abi: abi_name(manufacturer, abis),
        is_next_build,
    })
}

/// `arm`, `x86`, or either one followed by `_<abis>` for anything but 32-bit.
pub fn abi_name(manufacturer: Manufacturer, abis: AbiCombo) -> String {
    match abis {
        AbiCombo::Bits32 => manufacturer.abi_prefix().to_string(),
        _ => format!("{}_{}", manufacturer.abi_prefix(), abis),
    }
}

fn parse_digits<T: FromStr<Err = ParseIntError>>(digits: &str, version_code: &str) -> Result<T> {
    digits.parse().map_err(|e: ParseIntError| {
        VersionCodeError::MalformedVersionCode(format!(
            "parse: '{}' of '{}': {}",
            digits, version_code, e
        ))
    })
}
