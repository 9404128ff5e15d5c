use std::fmt;

/// Where a [`Limit`] was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSource {
    Query,
    Default,
}

/// Number of items a caller asked for, kept exactly as given.
///
/// The catalog accepts it but currently returns every item regardless, so the
/// value is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    pub raw: String,
    pub source: LimitSource,
}

impl Limit {
    /// Limit given as `queryStringParameters.limit`.
    pub fn from_query(raw: &str) -> Limit {
        Limit {
            raw: raw.to_owned(),
            source: LimitSource::Query,
        }
    }

    /// Limit configured through `DEFAULT_DATA_LIMIT`.
    pub fn from_default(raw: &str) -> Limit {
        Limit {
            raw: raw.to_owned(),
            source: LimitSource::Default,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = match self.source {
            LimitSource::Query => "query",
            LimitSource::Default => "default",
        };
        write!(f, "`{}` ({})", self.raw, source)
    }
}
