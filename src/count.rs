/// Limits how many occurrences of a single pattern get replaced
///
/// Converts from the same forms that the public functions accept:
///
/// * `true` is `Limited(1)`, only the first occurrence is replaced
/// * `false` is [`ReplaceCount::Unlimited`]
/// * non negative integer N is `Limited(N)`, 0 replaces nothing
/// * negative integer is [`ReplaceCount::Unlimited`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceCount {
    #[default]
    Unlimited,
    Limited(usize),
}

impl ReplaceCount {
    /// Numeric form of the limit: -1 for unlimited, N otherwise
    pub fn code(&self) -> i64 {
        match self {
            Self::Unlimited => -1,
            Self::Limited(n) => i64::try_from(*n).unwrap_or(i64::MAX),
        }
    }

    /// Whether occurrence with given 1-based index may still be replaced
    #[inline]
    pub fn permits(&self, occurrence: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(n) => occurrence <= *n,
        }
    }
}

impl From<bool> for ReplaceCount {
    fn from(first_only: bool) -> Self {
        if first_only {
            Self::Limited(1)
        } else {
            Self::Unlimited
        }
    }
}

impl From<usize> for ReplaceCount {
    fn from(n: usize) -> Self {
        Self::Limited(n)
    }
}

impl From<i64> for ReplaceCount {
    fn from(n: i64) -> Self {
        usize::try_from(n).map_or(Self::Unlimited, Self::Limited)
    }
}

impl From<i32> for ReplaceCount {
    fn from(n: i32) -> Self {
        Self::from(i64::from(n))
    }
}

impl From<u32> for ReplaceCount {
    fn from(n: u32) -> Self {
        Self::Limited(usize::try_from(n).unwrap_or(usize::MAX))
    }
}

// saturates on targets where usize is narrower
impl From<u64> for ReplaceCount {
    fn from(n: u64) -> Self {
        Self::Limited(usize::try_from(n).unwrap_or(usize::MAX))
    }
}
