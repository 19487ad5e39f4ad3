//! Month token resolution
//!
//! Every endpoint that takes a `month` parameter resolves it here. A token is
//! either an all-digit literal in `1..=12` or a case-insensitive English month
//! name. The transaction list additionally understands the `All Months`
//! sentinel and is lenient about tokens it cannot resolve.

use crate::error::{Result, SalescopeError};
use time::{Month, OffsetDateTime, UtcOffset};

/// Sentinel the dashboard sends when no month is selected
pub const ALL_MONTHS: &str = "All Months";

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Resolve a month token to a calendar month.
///
/// Fails with [`SalescopeError::InvalidMonth`] for empty tokens, numbers
/// outside `1..=12` and anything that is not a full English month name.
pub fn parse_month(token: &str) -> Result<Month> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token
            .parse::<u8>()
            .ok()
            .and_then(|n| Month::try_from(n).ok())
            .ok_or_else(|| SalescopeError::invalid_month(token));
    }

    MONTHS
        .iter()
        .copied()
        .find(|month| month.to_string().eq_ignore_ascii_case(token))
        .ok_or_else(|| SalescopeError::invalid_month(token))
}

/// Month restriction applied to a transaction query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    AllMonths,
    Only(Month),
}

impl MonthFilter {
    /// Strict resolution: a missing, empty or `All Months` token means no
    /// restriction, anything else must resolve via [`parse_month`].
    pub fn parse(token: Option<&str>) -> Result<Self> {
        match token.map(str::trim) {
            None | Some("") => Ok(Self::AllMonths),
            Some(t) if t.eq_ignore_ascii_case(ALL_MONTHS) => Ok(Self::AllMonths),
            Some(t) => parse_month(t).map(Self::Only),
        }
    }

    /// Lenient resolution used by the transaction list: unresolvable tokens
    /// fall back to [`MonthFilter::AllMonths`].
    pub fn parse_lenient(token: Option<&str>) -> Self {
        Self::parse(token).unwrap_or_default()
    }

    pub fn month(&self) -> Option<Month> {
        match self {
            Self::AllMonths => None,
            Self::Only(month) => Some(*month),
        }
    }

    /// Whether a sale date falls into this filter. Months are compared in UTC.
    pub fn matches(&self, date: &OffsetDateTime) -> bool {
        match self {
            Self::AllMonths => true,
            Self::Only(month) => month_of(date) == *month,
        }
    }
}

impl From<Month> for MonthFilter {
    fn from(month: Month) -> Self {
        Self::Only(month)
    }
}

/// Calendar month of a timestamp in UTC
pub fn month_of(date: &OffsetDateTime) -> Month {
    date.to_offset(UtcOffset::UTC).month()
}
