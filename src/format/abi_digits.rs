use crate::types::{AbiCombo, Manufacturer};

/// First build number that uses the current ABI digit table on every patch.
pub const CURRENT_SCHEME_MIN_BUILD: u32 = 5750;

/// (branch build number, first patch) pairs where the current table was
/// adopted directly on a release branch (M113 and M114).
pub const CURRENT_SCHEME_BRANCH_ADOPTIONS: [(u32, u32); 2] = [(5672, 176), (5735, 53)];

/// Selects which ABI digit table a version code uses.
///
/// From build 5750 arm codes sort below every x86 code, because some intel
/// devices advertise arm support and must not be served an arm-optimized APK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum EncodingScheme {
    Legacy,
    Current,
}

type AbiDigitRow = (Manufacturer, AbiCombo, u64);

// Within a manufacturer the digits grow with 64-bit preference, so a 64-bit
// capable device prefers the APK that carries 64-bit code.
const CURRENT_ABI_DIGITS: [AbiDigitRow; 9] = [
    (Manufacturer::Arm, AbiCombo::Bits32, 0),
    (Manufacturer::Arm, AbiCombo::Bits32And64, 1),
    (Manufacturer::Arm, AbiCombo::Bits64And32, 2),
    (Manufacturer::Arm, AbiCombo::Bits64And32High, 3),
    (Manufacturer::Arm, AbiCombo::Bits64, 4),
    (Manufacturer::Intel, AbiCombo::Bits32, 6),
    (Manufacturer::Intel, AbiCombo::Bits32And64, 7),
    (Manufacturer::Intel, AbiCombo::Bits64And32, 8),
    (Manufacturer::Intel, AbiCombo::Bits64, 9),
];

const LEGACY_ABI_DIGITS: [AbiDigitRow; 9] = [
    (Manufacturer::Arm, AbiCombo::Bits32, 0),
    (Manufacturer::Arm, AbiCombo::Bits32And64, 3),
    (Manufacturer::Arm, AbiCombo::Bits64And32, 4),
    (Manufacturer::Arm, AbiCombo::Bits64, 5),
    (Manufacturer::Arm, AbiCombo::Bits64And32High, 9),
    (Manufacturer::Intel, AbiCombo::Bits32, 1),
    (Manufacturer::Intel, AbiCombo::Bits32And64, 6),
    (Manufacturer::Intel, AbiCombo::Bits64And32, 7),
    (Manufacturer::Intel, AbiCombo::Bits64, 8),
];

/// The single place deciding between the two ABI tables. Both generation and
/// translation call this with the build/patch of the code in question.
pub fn select_scheme(build_number: u32, patch_number: u32) -> EncodingScheme {
    let adopted_on_branch = CURRENT_SCHEME_BRANCH_ADOPTIONS
        .iter()
        .any(|&(build, first_patch)| build_number == build && patch_number >= first_patch);

    if build_number >= CURRENT_SCHEME_MIN_BUILD || adopted_on_branch {
        EncodingScheme::Current
    } else {
        EncodingScheme::Legacy
    }
}

impl EncodingScheme {
    fn table(&self) -> &'static [AbiDigitRow] {
        match self {
            EncodingScheme::Legacy => &LEGACY_ABI_DIGITS,
            EncodingScheme::Current => &CURRENT_ABI_DIGITS,
        }
    }

    /// Units digit for an APK. `None` when the scheme has no such combination
    /// (intel never ships `64_32_high`).
    pub fn abi_digit(&self, manufacturer: Manufacturer, abis: AbiCombo) -> Option<u64> {
        self.table()
            .iter()
            .find(|(mfg, combo, _)| *mfg == manufacturer && *combo == abis)
            .map(|(_, _, digit)| *digit)
    }

    pub fn abi_for_digit(&self, digit: u64) -> Option<(Manufacturer, AbiCombo)> {
        self.table()
            .iter()
            .find(|(_, _, value)| *value == digit)
            .map(|(mfg, combo, _)| (*mfg, *combo))
    }

    pub fn name(&self) -> &'static str {
        match self {
            EncodingScheme::Legacy => "legacy",
            EncodingScheme::Current => "current",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_boundaries() {
        assert_eq!(select_scheme(5749, 999), EncodingScheme::Legacy);
        assert_eq!(select_scheme(5750, 0), EncodingScheme::Current);
        assert_eq!(select_scheme(5672, 176), EncodingScheme::Current);
        assert_eq!(select_scheme(5672, 175), EncodingScheme::Legacy);
        assert_eq!(select_scheme(5735, 53), EncodingScheme::Current);
        assert_eq!(select_scheme(5735, 52), EncodingScheme::Legacy);
        assert_eq!(select_scheme(5673, 500), EncodingScheme::Legacy);
        assert_eq!(select_scheme(3721, 0), EncodingScheme::Legacy);
    }

    #[test]
    fn digits_are_unique_within_a_scheme() {
        for scheme in [EncodingScheme::Legacy, EncodingScheme::Current] {
            let table = scheme.table();
            for (i, (_, _, a)) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|(_, _, b)| a != b));
            }
        }
    }

    #[test]
    fn arm_sorts_below_intel_in_current_scheme() {
        let scheme = EncodingScheme::Current;
        let arm_max = AbiCombo::ALL
            .iter()
            .filter_map(|combo| scheme.abi_digit(Manufacturer::Arm, *combo))
            .max();
        assert_eq!(arm_max, Some(4));
        assert_eq!(scheme.abi_digit(Manufacturer::Intel, AbiCombo::Bits32), Some(6));
    }

    #[test]
    fn missing_entries() {
        assert_eq!(
            EncodingScheme::Current.abi_digit(Manufacturer::Intel, AbiCombo::Bits64And32High),
            None
        );
        assert_eq!(EncodingScheme::Current.abi_for_digit(5), None);
        assert_eq!(EncodingScheme::Legacy.abi_for_digit(2), None);
        assert_eq!(
            EncodingScheme::Legacy.abi_for_digit(9),
            Some((Manufacturer::Arm, AbiCombo::Bits64And32High))
        );
    }
}
