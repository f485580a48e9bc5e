//! Timer transition events read from the activity log.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A state the pomodoro timer can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Rest,
    Work,
}

impl TimerState {
    /// String representation as written in the log.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Rest => "rest",
            Self::Work => "work",
        }
    }

    /// Idle and rest both count as "not working".
    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::Idle | Self::Rest)
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimerState {
    type Err = UnknownTimerState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "rest" => Ok(Self::Rest),
            "work" => Ok(Self::Work),
            _ => Err(UnknownTimerState(s.to_string())),
        }
    }
}

/// Error type for unknown timer state strings.
#[derive(Debug, Clone)]
pub struct UnknownTimerState(String);

impl fmt::Display for UnknownTimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown timer state: {}", self.0)
    }
}

impl std::error::Error for UnknownTimerState {}

/// A single record from the transition log.
///
/// Every field is optional: the log is loosely structured and records that
/// are not state transitions (or are damaged) simply leave fields empty.
/// Deserialization never fails for a well-formed JSON value; unrecognized
/// state strings and non-numeric timestamps become `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct Event {
    /// State the timer left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_state: Option<TimerState>,
    /// State the timer entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_state: Option<TimerState>,
    /// Unix timestamp in whole seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// A recognized work boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// idle/rest → work at the given timestamp.
    WorkStarted(i64),
    /// work → idle/rest at the given timestamp.
    WorkStopped(i64),
}

impl Event {
    /// Creates a fully populated transition event.
    #[must_use]
    pub const fn new(from: TimerState, to: TimerState, timestamp: i64) -> Self {
        Self {
            from_state: Some(from),
            to_state: Some(to),
            timestamp: Some(timestamp),
        }
    }

    /// Extracts the recognized fields from an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        let state = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .and_then(|s| s.parse::<TimerState>().ok())
        };

        Self {
            from_state: state("fromState"),
            to_state: state("toState"),
            timestamp: value.get("timestamp").and_then(timestamp_secs),
        }
    }

    /// Classifies the event as a work boundary, if it is one.
    ///
    /// Returns `None` for inert events: missing fields, work→work,
    /// idle→rest and the like.
    pub fn transition(&self) -> Option<Transition> {
        let from = self.from_state?;
        let to = self.to_state?;
        let timestamp = self.timestamp?;

        match (from, to) {
            (from, TimerState::Work) if from.is_break() => Some(Transition::WorkStarted(timestamp)),
            (TimerState::Work, to) if to.is_break() => Some(Transition::WorkStopped(timestamp)),
            _ => None,
        }
    }
}

impl From<Value> for Event {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Reads a timestamp as whole seconds, flooring fractional values.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn timestamp_secs(value: &Value) -> Option<i64> {
    if let Some(secs) = value.as_i64() {
        return Some(secs);
    }

    let secs = value.as_f64()?.floor();
    if secs.is_finite() && secs >= i64::MIN as f64 && secs < i64::MAX as f64 {
        Some(secs as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Event {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_transition_record() {
        let event = parse(
            r#"{"type":"transition","fromState":"idle","toState":"work","timestamp":1709629200}"#,
        );

        assert_eq!(
            event,
            Event::new(TimerState::Idle, TimerState::Work, 1_709_629_200)
        );
        assert_eq!(
            event.transition(),
            Some(Transition::WorkStarted(1_709_629_200))
        );
    }

    #[test]
    fn fractional_timestamp_is_floored() {
        let event = parse(r#"{"fromState":"work","toState":"rest","timestamp":1709629200.987}"#);
        assert_eq!(event.timestamp, Some(1_709_629_200));
    }

    #[test]
    fn unknown_state_is_inert() {
        let event = parse(r#"{"fromState":"paused","toState":"work","timestamp":10}"#);

        assert_eq!(event.from_state, None);
        assert_eq!(event.transition(), None);
    }

    #[test]
    fn missing_fields_are_inert() {
        assert_eq!(parse(r#"{"toState":"work","timestamp":10}"#).transition(), None);
        assert_eq!(parse(r#"{"fromState":"idle","toState":"work"}"#).transition(), None);
        assert_eq!(
            parse(r#"{"fromState":"idle","toState":"work","timestamp":"10"}"#).transition(),
            None
        );
    }

    #[test]
    fn non_object_values_are_inert() {
        assert_eq!(parse("42"), Event::default());
        assert_eq!(parse(r#"["idle","work"]"#), Event::default());
        assert_eq!(parse("null"), Event::default());
    }

    #[test]
    fn only_break_work_boundaries_are_transitions() {
        let cases = [
            (TimerState::Idle, TimerState::Work, Some(Transition::WorkStarted(5))),
            (TimerState::Rest, TimerState::Work, Some(Transition::WorkStarted(5))),
            (TimerState::Work, TimerState::Idle, Some(Transition::WorkStopped(5))),
            (TimerState::Work, TimerState::Rest, Some(Transition::WorkStopped(5))),
            (TimerState::Work, TimerState::Work, None),
            (TimerState::Idle, TimerState::Rest, None),
            (TimerState::Rest, TimerState::Idle, None),
        ];

        for (from, to, expected) in cases {
            assert_eq!(
                Event::new(from, to, 5).transition(),
                expected,
                "{from} -> {to}"
            );
        }
    }

    #[test]
    fn serializes_with_log_field_names() {
        let json = serde_json::to_string(&Event::new(TimerState::Rest, TimerState::Work, 7)).unwrap();
        assert_eq!(json, r#"{"fromState":"rest","toState":"work","timestamp":7}"#);
    }

    #[test]
    fn unknown_state_error_message() {
        let err = "paused".parse::<TimerState>().unwrap_err();
        assert_eq!(err.to_string(), "unknown timer state: paused");
    }
}
