//! Diesel wrappers for the event domain enums.
//!
//! Each wrapper implements `ToSql` and `FromSql` so rows convert straight into
//! typed values; unknown stored values fail deserialization.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{Integer, Text};
use std::io::Write;

/// Participant attend status.
///
/// Maps to `event_participants.attend_status` (integer code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
#[diesel(sql_type = Integer)]
pub struct AttendStatusCode(pub gather_core::types::AttendStatus);

impl ToSql<Integer, Pg> for AttendStatusCode {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(&self.0.code().to_be_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Integer, Pg> for AttendStatusCode {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let code = <i32 as FromSql<Integer, Pg>>::from_sql(bytes)?;
        gather_core::types::AttendStatus::from_code(code)
            .map(Self)
            .ok_or_else(|| format!("Unrecognized attend status code {code}").into())
    }
}

impl From<gather_core::types::AttendStatus> for AttendStatusCode {
    fn from(status: gather_core::types::AttendStatus) -> Self {
        Self(status)
    }
}

impl From<AttendStatusCode> for gather_core::types::AttendStatus {
    fn from(code: AttendStatusCode) -> Self {
        code.0
    }
}

/// Event option rule.
///
/// Maps to `event_options.rule` CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub struct OptionRuleText(pub gather_core::types::OptionRule);

impl ToSql<Text, Pg> for OptionRuleText {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.0.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for OptionRuleText {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        use gather_core::types::OptionRule;

        match bytes.as_bytes() {
            b"default" => Ok(Self(OptionRule::Default)),
            b"ignore_single_join" => Ok(Self(OptionRule::IgnoreSingleJoin)),
            _ => Err("Unrecognized option rule".into()),
        }
    }
}

impl From<gather_core::types::OptionRule> for OptionRuleText {
    fn from(rule: gather_core::types::OptionRule) -> Self {
        Self(rule)
    }
}

impl From<OptionRuleText> for gather_core::types::OptionRule {
    fn from(rule: OptionRuleText) -> Self {
        rule.0
    }
}
