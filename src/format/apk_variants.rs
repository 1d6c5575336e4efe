use crate::types::{AbiCombo, BitnessClass, PackageName};

/// One version code emitted for a build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApkVariant {
    /// Version code name, without the `_VERSION_CODE` suffix.
    pub name: &'static str,
    pub package: PackageName,
    pub abis: AbiCombo,
}

const fn apk(name: &'static str, package: PackageName, abis: AbiCombo) -> ApkVariant {
    ApkVariant { name, package, abis }
}

use AbiCombo::{Bits32, Bits32And64, Bits64, Bits64And32, Bits64And32High};
use PackageName::{
    Chrome, ChromeModern, Monochrome, Trichrome, TrichromeAuto, TrichromeBeta, WebviewBeta,
    WebviewDev, WebviewStable,
};

static APKS_32: [ApkVariant; 9] = [
    apk("CHROME", Chrome, Bits32),
    apk("CHROME_MODERN", ChromeModern, Bits32),
    apk("MONOCHROME", Monochrome, Bits32),
    apk("TRICHROME", Trichrome, Bits32),
    apk("TRICHROME_AUTO", TrichromeAuto, Bits32),
    apk("TRICHROME_BETA", TrichromeBeta, Bits32),
    apk("WEBVIEW_STABLE", WebviewStable, Bits32),
    apk("WEBVIEW_BETA", WebviewBeta, Bits32),
    apk("WEBVIEW_DEV", WebviewDev, Bits32),
];

static APKS_64: [ApkVariant; 9] = [
    apk("CHROME", Chrome, Bits64),
    apk("CHROME_MODERN", ChromeModern, Bits64),
    apk("MONOCHROME", Monochrome, Bits64),
    apk("TRICHROME", Trichrome, Bits64),
    apk("TRICHROME_AUTO", TrichromeAuto, Bits64),
    apk("TRICHROME_BETA", TrichromeBeta, Bits64),
    apk("WEBVIEW_STABLE", WebviewStable, Bits64),
    apk("WEBVIEW_BETA", WebviewBeta, Bits64),
    apk("WEBVIEW_DEV", WebviewDev, Bits64),
];

// Multiarch packages (Monochrome, Trichrome, Webview) need both 32 and 64-bit
// code on a 64-bit device, hence the mixed combinations.
static APKS_HYBRID: [ApkVariant; 34] = [
    apk("CHROME", Chrome, Bits64),
    apk("CHROME_MODERN", ChromeModern, Bits64),
    apk("MONOCHROME", Monochrome, Bits32And64),
    apk("MONOCHROME_32", Monochrome, Bits32),
    apk("MONOCHROME_32_64", Monochrome, Bits32And64),
    apk("MONOCHROME_64_32", Monochrome, Bits64And32),
    apk("MONOCHROME_64", Monochrome, Bits64),
    apk("TRICHROME", Trichrome, Bits32And64),
    apk("TRICHROME_32", Trichrome, Bits32),
    apk("TRICHROME_32_64", Trichrome, Bits32And64),
    apk("TRICHROME_64_32", Trichrome, Bits64And32),
    apk("TRICHROME_64_32_HIGH", Trichrome, Bits64And32High),
    apk("TRICHROME_64", Trichrome, Bits64),
    apk("TRICHROME_AUTO", TrichromeAuto, Bits32And64),
    apk("TRICHROME_AUTO_32", TrichromeAuto, Bits32),
    apk("TRICHROME_AUTO_32_64", TrichromeAuto, Bits32And64),
    apk("TRICHROME_AUTO_64", TrichromeAuto, Bits64),
    apk("TRICHROME_AUTO_64_32", TrichromeAuto, Bits64And32),
    apk("TRICHROME_AUTO_64_32_HIGH", TrichromeAuto, Bits64And32High),
    apk("TRICHROME_BETA", TrichromeBeta, Bits32And64),
    apk("TRICHROME_32_BETA", TrichromeBeta, Bits32),
    apk("TRICHROME_32_64_BETA", TrichromeBeta, Bits32And64),
    apk("TRICHROME_64_32_BETA", TrichromeBeta, Bits64And32),
    apk("TRICHROME_64_32_HIGH_BETA", TrichromeBeta, Bits64And32High),
    apk("TRICHROME_64_BETA", TrichromeBeta, Bits64),
    apk("WEBVIEW_STABLE", WebviewStable, Bits32And64),
    apk("WEBVIEW_BETA", WebviewBeta, Bits32And64),
    apk("WEBVIEW_DEV", WebviewDev, Bits32And64),
    apk("WEBVIEW_32_STABLE", WebviewStable, Bits32),
    apk("WEBVIEW_32_BETA", WebviewBeta, Bits32),
    apk("WEBVIEW_32_DEV", WebviewDev, Bits32),
    apk("WEBVIEW_64_STABLE", WebviewStable, Bits64),
    apk("WEBVIEW_64_BETA", WebviewBeta, Bits64),
    apk("WEBVIEW_64_DEV", WebviewDev, Bits64),
];

/// Version codes to create for a bitness class, in emission order.
pub fn apk_variants(bitness: BitnessClass) -> &'static [ApkVariant] {
    match bitness {
        BitnessClass::Bits32 => &APKS_32,
        BitnessClass::Bits64 => &APKS_64,
        BitnessClass::Hybrid => &APKS_HYBRID,
    }
}
