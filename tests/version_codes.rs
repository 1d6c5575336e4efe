//! Generation and translation against each other.

#[cfg(test)]
mod tests {
    use android_chrome_version::translate::abi_name;
    use android_chrome_version::{
        generate, translate_version_code, Architecture, EncodingScheme, PackageName,
    };

    const BUILDS: [u32; 9] = [4844, 5000, 5672, 5735, 5749, 5750, 6099, 9999, 12345];
    const PATCHES: [u32; 7] = [0, 1, 52, 53, 175, 176, 499];

    #[test]
    fn round_trip_across_schemes() {
        for &build in BUILDS.iter() {
            for &patch in PATCHES.iter() {
                for arch in Architecture::ALL {
                    for next in [false, true] {
                        let codes = generate(build, patch, *arch, next).unwrap();
                        for code in codes.iter() {
                            let text = code.version_code.to_string();
                            let decoded =
                                translate_version_code(&text, code.package.is_webview()).unwrap();
                            assert_eq!(decoded.build_number, build, "{}", text);
                            assert_eq!(decoded.patch_number, patch, "{}", text);
                            assert_eq!(decoded.is_next_build, next, "{}", text);
                            assert_eq!(decoded.package_name, code.package, "{}", text);
                            assert_eq!(
                                decoded.abi,
                                abi_name(arch.manufacturer(), code.abis),
                                "{} ({})",
                                text,
                                code.variant
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn emitted_codes_are_well_formed() {
        for arch in Architecture::ALL {
            for build in [1000, 9999, 10000, 99_999] {
                for code in generate(build, 499, *arch, true).unwrap().iter() {
                    let text = code.version_code.to_string();
                    let expected_len = if build < 10000 { 9 } else { 10 };
                    assert_eq!(text.len(), expected_len, "{}", text);
                    assert!(!text.starts_with('0'));
                }
            }
        }
    }

    #[test]
    fn distinct_apks_get_distinct_codes() {
        // Aliases such as MONOCHROME and MONOCHROME_32_64 share a code on
        // purpose; distinct (package, abis) pairs of one family never do.
        for arch in Architecture::ALL {
            let codes = generate(6099, 12, *arch, false).unwrap();
            let all: Vec<_> = codes.iter().collect();
            for (i, a) in all.iter().enumerate() {
                for b in &all[i + 1..] {
                    let same_apk = a.package == b.package && a.abis == b.abis;
                    let same_family = a.package.is_webview() == b.package.is_webview();
                    if same_family && !same_apk {
                        assert_ne!(a.version_code, b.version_code, "{} vs {}", a.variant, b.variant);
                    }
                    if same_apk {
                        assert_eq!(a.version_code, b.version_code);
                    }
                }
            }
        }
    }

    #[test]
    fn patch_and_next_are_monotonic() {
        for arch in Architecture::ALL {
            let mut previous = generate(5749, 0, *arch, false).unwrap();
            for patch in 1..=499 {
                let current = generate(5749, patch, *arch, false).unwrap();
                for (a, b) in previous.iter().zip(current.iter()) {
                    assert!(b.version_code > a.version_code, "{} patch {}", b.variant, patch);
                }
                previous = current;
            }

            let last_stable = generate(6000, 499, *arch, false).unwrap();
            let first_next = generate(6000, 0, *arch, true).unwrap();
            for (stable, next) in last_stable.iter().zip(first_next.iter()) {
                assert!(next.version_code > stable.version_code, "{}", next.variant);
            }
        }
    }

    #[test]
    fn preferred_abis_sort_higher() {
        let codes = generate(6099, 0, Architecture::Arm64, false).unwrap();
        let get = |name: &str| codes.get(name).unwrap();
        assert!(get("TRICHROME_64") > get("TRICHROME_64_32_HIGH"));
        assert!(get("TRICHROME_64_32_HIGH") > get("TRICHROME_64_32"));
        assert!(get("TRICHROME_64_32") > get("TRICHROME_32_64"));
        assert!(get("TRICHROME_32_64") > get("TRICHROME_32"));

        // From 5750 every x86 code sorts above every arm code.
        let x64 = generate(6099, 0, Architecture::X64, false).unwrap();
        let arm64_abi_max = codes.iter().map(|c| c.version_code % 10).max().unwrap();
        let x64_abi_min = x64.iter().map(|c| c.version_code % 10).min().unwrap();
        assert!(x64_abi_min > arm64_abi_max);
    }

    #[test]
    fn branch_adoption_of_current_scheme() {
        let before = generate(5672, 175, Architecture::X86, false).unwrap();
        let after = generate(5672, 176, Architecture::X86, false).unwrap();
        assert_eq!(before.scheme, EncodingScheme::Legacy);
        assert_eq!(after.scheme, EncodingScheme::Current);
        assert_eq!(before.get("CHROME"), Some(567217501));
        assert_eq!(after.get("CHROME"), Some(567217606));

        let decoded = translate_version_code("567217606", false).unwrap();
        assert_eq!(decoded.abi, "x86");
        assert_eq!(decoded.package_name, PackageName::Chrome);
    }

    #[test]
    fn pre_flip_codes_read_in_the_historical_order() {
        // Generation always writes the package digit first, while codes of
        // builds before 3992 are read with the ABI digit first.
        let codes = generate(3721, 0, Architecture::Arm64, false).unwrap();
        assert_eq!(codes.get("CHROME_MODERN_VERSION_CODE"), Some(372100015));

        let decoded = translate_version_code("372100015", false).unwrap();
        assert_eq!(decoded.build_number, 3721);
        assert_eq!(decoded.patch_number, 0);
        assert_eq!(decoded.package_name, PackageName::Chrome);
        assert_eq!(decoded.abi, "x86");
        assert!(decoded.is_next_build);

        let swapped = translate_version_code("372100051", false).unwrap();
        assert_eq!(swapped.package_name, PackageName::ChromeModern);
        assert_eq!(swapped.abi, "arm_64");
        assert!(!swapped.is_next_build);
    }
}
