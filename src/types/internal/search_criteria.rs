use chrono::NaiveDateTime;

use crate::errors::internal::ValidationError;
use crate::services::canonical_time::{self, BoundKind};

pub const DEFAULT_PAGE_SIZE: u64 = 500;
pub const MAX_PAGE_SIZE: u64 = 5000;

/// Search parameters as received from the transport layer
#[derive(Debug, Clone, Default)]
pub struct RawSearchParams {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub functionality: Option<String>,
    pub event_type: Option<String>,
    pub store_id: Option<i64>,
    pub company_id: Option<i64>,
    pub user: Option<String>,
    pub message_pattern: Option<String>,
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
}

/// Validated search predicates
///
/// Absent fields impose no constraint. Time bounds are canonical civil time and
/// both are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub from_date: Option<NaiveDateTime>,
    pub to_date: Option<NaiveDateTime>,
    pub functionality: Option<String>,
    pub event_type: Option<String>,
    pub store_id: Option<i64>,
    pub company_id: Option<i64>,
    pub user: Option<String>,
    pub message_pattern: Option<String>,
    pub page_number: u64,
    pub page_size: u64,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            from_date: None,
            to_date: None,
            functionality: None,
            event_type: None,
            store_id: None,
            company_id: None,
            user: None,
            message_pattern: None,
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchCriteria {
    /// Validate raw parameters
    ///
    /// Blank strings count as absent. Page number must be at least 1 and page
    /// size within `1..=MAX_PAGE_SIZE`.
    pub fn from_raw(raw: RawSearchParams) -> Result<Self, ValidationError> {
        let from_date = match non_blank(raw.from_date) {
            Some(value) => Some(
                canonical_time::parse_search_bound(&value, BoundKind::Start)
                    .ok_or_else(|| ValidationError::invalid_timestamp("from_date", &value))?,
            ),
            None => None,
        };

        let to_date = match non_blank(raw.to_date) {
            Some(value) => Some(
                canonical_time::parse_search_bound(&value, BoundKind::End)
                    .ok_or_else(|| ValidationError::invalid_timestamp("to_date", &value))?,
            ),
            None => None,
        };

        let page_number = raw.page_number.unwrap_or(1);
        if page_number < 1 {
            return Err(ValidationError::invalid_field("page_number", "must be at least 1"));
        }

        let page_size = raw.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ValidationError::invalid_field(
                "page_size",
                format!("must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }

        Ok(Self {
            from_date,
            to_date,
            functionality: non_blank(raw.functionality),
            event_type: non_blank(raw.event_type),
            store_id: raw.store_id,
            company_id: raw.company_id,
            user: non_blank(raw.user),
            message_pattern: non_blank(raw.message_pattern),
            page_number,
            page_size,
        })
    }

    /// Zero-based row offset of the requested page
    ///
    /// `None` when the offset overflows or exceeds what SQL can bind (`i64::MAX`).
    pub fn offset(&self) -> Option<u64> {
        (self.page_number - 1)
            .checked_mul(self.page_size)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
