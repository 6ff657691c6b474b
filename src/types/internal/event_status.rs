use std::fmt;

use sea_orm::entity::prelude::*;

/// Outcome recorded on an audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EventStatus {
    #[default]
    #[sea_orm(string_value = "Success")]
    Success,
    #[sea_orm(string_value = "Failed")]
    Failed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Success => "Success",
            EventStatus::Failed => "Failed",
        }
    }

    /// Exact, case-sensitive match on the stored spelling
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Success" => Some(EventStatus::Success),
            "Failed" => Some(EventStatus::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
