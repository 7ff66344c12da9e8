//! Event domain enums without database dependencies.

use serde::{Deserialize, Serialize};

/// A participant's answer to an event invitation.
///
/// Stored as an integer code; only `Idle` and `Attending` drive listing logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendStatus {
    #[default]
    Idle,
    Attending,
    NotAttending,
    MaybeAttending,
    AttendingVirtually,
}

impl AttendStatus {
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Idle => 0,
            Self::Attending => 1,
            Self::NotAttending => 2,
            Self::MaybeAttending => 3,
            Self::AttendingVirtually => 4,
        }
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Idle),
            1 => Some(Self::Attending),
            2 => Some(Self::NotAttending),
            3 => Some(Self::MaybeAttending),
            4 => Some(Self::AttendingVirtually),
            _ => None,
        }
    }
}

/// Selection rule attached to an event option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionRule {
    /// Picked automatically and listed before every other option.
    Default,
    IgnoreSingleJoin,
}

impl OptionRule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::IgnoreSingleJoin => "ignore_single_join",
        }
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl std::fmt::Display for OptionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which relation to the requester the "my events" view filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MyEventsFilter {
    /// Events the requester is responsible for.
    Host,
    /// Events the requester has a participant record in.
    Participant,
}

impl MyEventsFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Participant => "participant",
        }
    }
}

impl std::fmt::Display for MyEventsFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
