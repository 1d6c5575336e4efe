use std::fmt;
use std::str::FromStr;

use crate::error::VersionCodeError;
use crate::shared_macros::keyed_enum;

keyed_enum! {
    /// Package families that share a version code namespace on the Play Store.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, uniffi::Enum)]
    pub enum PackageName {
        Chrome => "CHROME",
        ChromeModern => "CHROME_MODERN",
        Monochrome => "MONOCHROME",
        Trichrome => "TRICHROME",
        TrichromeBeta => "TRICHROME_BETA",
        TrichromeAuto => "TRICHROME_AUTO",
        WebviewStable => "WEBVIEW_STABLE",
        WebviewBeta => "WEBVIEW_BETA",
        WebviewDev => "WEBVIEW_DEV",
    }
}

impl PackageName {
    /// Standalone webview packages reuse the browser package digits.
    pub fn is_webview(&self) -> bool {
        self.as_str().contains("WEBVIEW")
    }
}

keyed_enum! {
    /// Build config architecture, as passed by the build system.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, uniffi::Enum)]
    pub enum Architecture {
        Arm => "arm",
        Arm64 => "arm64",
        Riscv64 => "riscv64",
        X86 => "x86",
        X64 => "x64",
    }
}

impl Architecture {
    pub fn manufacturer(&self) -> Manufacturer {
        match self {
            // riscv64 ships under the arm digits until the store needs a
            // distinct code for it.
            Architecture::Arm | Architecture::Arm64 | Architecture::Riscv64 => Manufacturer::Arm,
            Architecture::X86 | Architecture::X64 => Manufacturer::Intel,
        }
    }

    pub fn bitness_class(&self) -> BitnessClass {
        match self {
            Architecture::Arm | Architecture::X86 => BitnessClass::Bits32,
            Architecture::Riscv64 => BitnessClass::Bits64,
            Architecture::Arm64 | Architecture::X64 => BitnessClass::Hybrid,
        }
    }
}

impl FromStr for Architecture {
    type Err = VersionCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Architecture::from_key(s).ok_or_else(|| {
            VersionCodeError::UnknownArchitecture(format!(
                "'{}' (expected one of: {})",
                s,
                Architecture::ALL
                    .iter()
                    .map(|arch| arch.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
    }
}

keyed_enum! {
    /// CPU manufacturer family, selecting a row of the ABI digit table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Manufacturer {
        Arm => "arm",
        Intel => "intel",
    }
}

impl Manufacturer {
    /// Prefix used in decoded ABI strings (`intel` is reported as `x86`).
    pub fn abi_prefix(&self) -> &'static str {
        match self {
            Manufacturer::Arm => "arm",
            Manufacturer::Intel => "x86",
        }
    }
}

keyed_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum BitnessClass {
        Bits32 => "32",
        Bits64 => "64",
        Hybrid => "hybrid",
    }
}

keyed_enum! {
    /// Combination of browser ABI and webview library ABI inside one APK.
    /// `64_32` is a 64-bit browser carrying an extra 32-bit webview library.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum AbiCombo {
        Bits32 => "32",
        Bits32And64 => "32_64",
        Bits64And32 => "64_32",
        Bits64And32High => "64_32_high",
        Bits64 => "64",
    }
}

/// The components recovered from a single version code.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct VersionCodeComponents {
    pub build_number: u32,
    pub patch_number: u32,
    pub package_name: PackageName,
    /// `arm` or `x86`, followed by `_<abis>` unless the APK is 32-bit only.
    pub abi: String,
    pub is_next_build: bool,
}

impl fmt::Display for VersionCodeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "build_number={} patch_number={} package_name={} abi={} is_next_build={}",
            self.build_number, self.patch_number, self.package_name, self.abi, self.is_next_build
        )
    }
}
