/// Stored office marker for events that are not tied to a specific office.
///
/// Also used as the "no office filter" probe.
pub const OUTSIDE_OFFICE: &str = "[]";

/// Events returned per page when no configuration overrides it.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Longest span, in days, a caller may request for the catalog date filter.
pub const DEFAULT_MAX_DATE_RANGE_DAYS: u32 = 365;

pub const DEFAULT_LOG_LEVEL: &str = "info";
