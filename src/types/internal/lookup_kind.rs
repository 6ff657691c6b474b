use std::fmt;

/// Which directory entity a point lookup targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Store,
    Company,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Store => f.write_str("store"),
            LookupKind::Company => f.write_str("company"),
        }
    }
}
