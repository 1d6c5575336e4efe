/// "Next" builds add 500 to their patch number.
///
/// Play Store needs a total ordering of versions while we only have a partial
/// one; the offset makes a next build newer than any non-next build of the
/// same branch, assuming real patch numbers never reach 500.
pub const NEXT_BUILD_VERSION_CODE_DIFF: u64 = 50_000;

/// From this branch on, the package digit precedes the ABI digit.
pub const PACKAGE_DIGIT_FIRST_MIN_BUILD: u32 = 3992;

/// Before this branch, next builds added 5 to the package digit instead of
/// using [`NEXT_BUILD_VERSION_CODE_DIFF`].
pub const OFFSET_NEXT_MARKER_MIN_BUILD: u32 = 4844;

pub const LEGACY_NEXT_PACKAGE_DIGIT_DIFF: u64 = 5;

/// Width of the `{PATCH}{package}{abi}` tail that follows the build number.
pub const TAIL_DIGITS: usize = 5;

/// Order of the two trailing digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOrder {
    AbiThenPackage,
    PackageThenAbi,
}

impl DigitOrder {
    pub fn for_build(build_number: u32) -> Self {
        if build_number >= PACKAGE_DIGIT_FIRST_MIN_BUILD {
            DigitOrder::PackageThenAbi
        } else {
            DigitOrder::AbiThenPackage
        }
    }

    /// Split the two lowest decimal digits into `(package, abi)` digits.
    pub fn split(&self, low_two_digits: u64) -> (u64, u64) {
        let (tens, units) = (low_two_digits / 10 % 10, low_two_digits % 10);
        match self {
            DigitOrder::PackageThenAbi => (tens, units),
            DigitOrder::AbiThenPackage => (units, tens),
        }
    }
}

/// How a code marks a next build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextBuildMarker {
    PackageDigitOffset,
    VersionCodeOffset,
}

impl NextBuildMarker {
    pub fn for_build(build_number: u32) -> Self {
        if build_number < OFFSET_NEXT_MARKER_MIN_BUILD {
            NextBuildMarker::PackageDigitOffset
        } else {
            NextBuildMarker::VersionCodeOffset
        }
    }
}
