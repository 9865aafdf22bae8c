//! View selection models

/// Ordering applied to the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    /// Selector value we do not know; the list keeps its input order
    Unrecognized,
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "date" => Self::Date,
            "amount" => Self::Amount,
            _ => Self::Unrecognized,
        }
    }
}

/// Subset of the transaction list to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKey {
    #[default]
    All,
    Transfer,
    Swap,
    Other,
}

impl FilterKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Transfer => "transfer",
            Self::Swap => "swap",
            Self::Other => "other",
        }
    }
}

impl From<&str> for FilterKey {
    /// Unknown selector values fall back to `All`
    fn from(value: &str) -> Self {
        match value {
            "transfer" => Self::Transfer,
            "swap" => Self::Swap,
            "other" => Self::Other,
            _ => Self::All,
        }
    }
}

/// Current sort and filter selection. Defaults to date order, all types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSelection {
    pub sort: SortKey,
    pub filter: FilterKey,
}
