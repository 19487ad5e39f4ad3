//! Query builder for the paginated transaction list
//!
//! Turns the raw `(search, month, page)` request parameters into a
//! backend-neutral [`TransactionFilter`] plus the page window to read.

use crate::month::MonthFilter;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Fixed page size of the transaction list
pub const PER_PAGE: u64 = 10;

/// Free-text search over title and description, with an exact price arm
/// when the term is numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    text: String,
    price: Option<f64>,
}

impl SearchTerm {
    /// Returns `None` for an empty term
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        let price = text.trim().parse::<f64>().ok().filter(|p| p.is_finite());
        Some(Self { text, price })
    }

    /// The literal text to look for
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Price to compare exactly, if the term parsed as a finite number
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Title contains, OR description contains (both case-insensitive), OR
    /// price equals the numeric term.
    pub fn matches(&self, tx: &Transaction) -> bool {
        let needle = self.text.to_lowercase();
        tx.title.to_lowercase().contains(&needle)
            || tx.description.to_lowercase().contains(&needle)
            || matches!((self.price, tx.price), (Some(wanted), Some(actual)) if wanted == actual)
    }
}

/// Backend-neutral filter over stored transactions. All set conditions are
/// ANDed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub search: Option<SearchTerm>,
    pub month: MonthFilter,
    pub sold: Option<bool>,
}

impl TransactionFilter {
    /// Everything sold or unsold within one calendar month, any year
    pub fn for_month(month: time::Month) -> Self {
        Self {
            month: MonthFilter::Only(month),
            ..Self::default()
        }
    }

    pub fn sold(mut self, sold: bool) -> Self {
        self.sold = Some(sold);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.month.matches(&tx.date_of_sale)
            && self.sold.is_none_or(|sold| tx.sold == sold)
            && self.search.as_ref().is_none_or(|term| term.matches(tx))
    }
}

/// Offset/limit pair handed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Window for a 1-based page of `per_page` items
    pub fn for_page(page: u64, per_page: u64) -> Self {
        Self {
            skip: page.max(1).saturating_sub(1).saturating_mul(per_page),
            limit: per_page,
        }
    }
}

/// Pagination metadata returned alongside a page of transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_records: u64,
    pub current_page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(total_records: u64, current_page: u64, per_page: u64) -> Self {
        Self {
            total_records,
            current_page,
            per_page,
            total_pages: total_records.div_ceil(per_page),
        }
    }
}

/// A resolved transaction list request
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionQuery {
    pub search: Option<SearchTerm>,
    pub month: MonthFilter,
    pub page: u64,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            search: None,
            month: MonthFilter::AllMonths,
            page: 1,
        }
    }
}

impl TransactionQuery {
    /// Build a query from raw request parameters.
    ///
    /// Missing or empty search means no search. The month is resolved
    /// leniently (see [`MonthFilter::parse_lenient`]). Pages that are
    /// missing, non-numeric or below 1 become page 1.
    pub fn from_params(search: Option<&str>, month: Option<&str>, page: Option<&str>) -> Self {
        Self {
            search: search.and_then(SearchTerm::new),
            month: MonthFilter::parse_lenient(month),
            page: page
                .and_then(|p| p.trim().parse::<u64>().ok())
                .filter(|p| *p >= 1)
                .unwrap_or(1),
        }
    }

    pub fn filter(&self) -> TransactionFilter {
        TransactionFilter {
            search: self.search.clone(),
            month: self.month,
            sold: None,
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::for_page(self.page, PER_PAGE)
    }

    pub fn pagination(&self, total_records: u64) -> Pagination {
        Pagination::new(total_records, self.page, PER_PAGE)
    }
}
