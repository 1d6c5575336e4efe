use crate::types::PackageName;

/// Package contribution to a version code. Occupies the tens position.
///
/// Webview packages reuse the browser digits; digit `30` for webview is
/// reserved for Trichrome Webview, which shares the Trichrome version code.
pub const fn package_digit(package: PackageName) -> u64 {
    match package {
        PackageName::Chrome => 0,
        PackageName::ChromeModern => 10,
        PackageName::Monochrome => 20,
        PackageName::Trichrome => 30,
        PackageName::TrichromeBeta => 40,
        PackageName::TrichromeAuto => 50,
        PackageName::WebviewStable => 0,
        PackageName::WebviewBeta => 10,
        PackageName::WebviewDev => 20,
    }
}

/// Reverse lookup of a scaled package digit.
///
/// The digit alone is ambiguous between webview and browser packages, so the
/// caller has to say which family it expects.
pub fn package_for_digit(digit: u64, is_webview: bool) -> Option<PackageName> {
    PackageName::ALL
        .iter()
        .copied()
        .find(|name| package_digit(*name) == digit && name.is_webview() == is_webview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_fit_the_tens_position() {
        for package in PackageName::ALL {
            let digit = package_digit(*package);
            assert_eq!(digit % 10, 0);
            assert!(digit < 100);
        }
        assert_eq!(package_digit(PackageName::TrichromeAuto), 50);
        assert_eq!(package_digit(PackageName::WebviewDev), 20);
    }

    #[test]
    fn reverse_lookup_is_split_by_family() {
        assert_eq!(package_for_digit(10, false), Some(PackageName::ChromeModern));
        assert_eq!(package_for_digit(10, true), Some(PackageName::WebviewBeta));
        assert_eq!(package_for_digit(0, true), Some(PackageName::WebviewStable));
        assert_eq!(package_for_digit(30, true), None);
        assert_eq!(package_for_digit(60, false), None);
    }
}
