// Schedule Action Compiler
// Input-switch actions and the create/delete batches that carry them

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashSet;
use crate::models::{
    FixedModeScheduleActionStartSettings, FollowModeScheduleActionStartSettings, FollowPoint,
    ImmediateModeScheduleActionStartSettings, InputSwitchSettings, ScheduleAction,
    ScheduleActionSettings, ScheduleActionStartSettings, ScheduleBatch, ScheduleCreates,
    ScheduleDeletes,
};
use crate::services::{CompileError, CompileResult};

/// Canonical UTC timestamp with millisecond precision (`2024-01-01T00:00:00.000Z`)
pub fn to_iso_string(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// True if `value` is already a canonical timestamp and needs no conversion
pub fn is_iso_string(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value)
        .map(|time| to_iso_string(&time.with_timezone(&Utc)) == value)
        .unwrap_or(false)
}

/// Start time of a fixed-mode action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedTime {
    /// Caller-formatted timestamp; stored as-is when already canonical
    Text(String),
    Instant(DateTime<Utc>),
}

impl FixedTime {
    pub fn now() -> Self {
        FixedTime::Instant(Utc::now())
    }

    /// Canonical form of this time
    pub fn to_iso_string(&self) -> CompileResult<String> {
        match self {
            FixedTime::Instant(time) => Ok(to_iso_string(time)),
            FixedTime::Text(text) if is_iso_string(text) => Ok(text.clone()),
            FixedTime::Text(text) => DateTime::parse_from_rfc3339(text.trim())
                .map(|time| to_iso_string(&time.with_timezone(&Utc)))
                .map_err(|_| CompileError::InvalidTimestamp(text.clone())),
        }
    }
}

impl From<&str> for FixedTime {
    fn from(value: &str) -> Self {
        FixedTime::Text(value.to_string())
    }
}

impl From<String> for FixedTime {
    fn from(value: String) -> Self {
        FixedTime::Text(value)
    }
}

impl From<DateTime<Utc>> for FixedTime {
    fn from(value: DateTime<Utc>) -> Self {
        FixedTime::Instant(value)
    }
}

/// When a switch takes effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleTrigger {
    Fixed(FixedTime),
    Follow {
        reference_action_name: String,
        follow_point: FollowPoint,
    },
    Immediate,
}

impl ScheduleTrigger {
    pub fn fixed(time: impl Into<FixedTime>) -> Self {
        ScheduleTrigger::Fixed(time.into())
    }

    pub fn follow(reference_action_name: impl Into<String>, follow_point: FollowPoint) -> Self {
        ScheduleTrigger::Follow {
            reference_action_name: reference_action_name.into(),
            follow_point,
        }
    }

    fn start_settings(&self) -> CompileResult<ScheduleActionStartSettings> {
        Ok(match self {
            ScheduleTrigger::Fixed(time) => {
                ScheduleActionStartSettings::FixedModeScheduleActionStartSettings(
                    FixedModeScheduleActionStartSettings {
                        time: time.to_iso_string()?,
                    },
                )
            }
            ScheduleTrigger::Follow {
                reference_action_name,
                follow_point,
            } => ScheduleActionStartSettings::FollowModeScheduleActionStartSettings(
                FollowModeScheduleActionStartSettings {
                    follow_point: *follow_point,
                    reference_action_name: reference_action_name.clone(),
                },
            ),
            ScheduleTrigger::Immediate => {
                ScheduleActionStartSettings::ImmediateModeScheduleActionStartSettings(
                    ImmediateModeScheduleActionStartSettings::default(),
                )
            }
        })
    }
}

/// Build one input-switch action.
/// `url_path` is substituted into a dynamic-URL input's templated source.
pub fn build_schedule_action(
    action_name: &str,
    trigger: &ScheduleTrigger,
    input_attachment_name: &str,
    url_path: Option<&str>,
) -> CompileResult<ScheduleAction> {
    Ok(ScheduleAction {
        action_name: action_name.to_string(),
        schedule_action_settings: ScheduleActionSettings {
            input_switch_settings: InputSwitchSettings {
                input_attachment_name_reference: input_attachment_name.to_string(),
                url_path: url_path.map(|p| vec![p.to_string()]).unwrap_or_default(),
            },
        },
        schedule_action_start_settings: trigger.start_settings()?,
    })
}

/// Batches actions against what the channel already has scheduled
#[derive(Debug, Clone, Default)]
pub struct ScheduleCompiler {
    scheduled_actions: HashSet<String>,
}

impl ScheduleCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions already on the channel's schedule; valid follow targets
    pub fn with_scheduled_actions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scheduled_actions: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Aggregate creates and deletes into one batch.
    ///
    /// Create order is kept as given. Deletes are de-duplicated (first occurrence wins).
    /// Every follow trigger must reference another create or a scheduled action that
    /// this batch does not delete.
    pub fn batch(
        &self,
        channel_id: &str,
        creates: Vec<ScheduleAction>,
        deletes: Vec<String>,
    ) -> CompileResult<ScheduleBatch> {
        let mut seen = HashSet::new();
        let deletes: Vec<String> = deletes
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();

        let mut created = HashSet::new();
        for action in &creates {
            if !created.insert(action.action_name.as_str()) {
                return Err(CompileError::DuplicateActionName(action.action_name.clone()));
            }
        }

        for action in &creates {
            let Some(reference) = action.schedule_action_start_settings.reference_action_name() else {
                continue;
            };
            let still_scheduled =
                self.scheduled_actions.contains(reference) && !seen.contains(reference);
            let resolves = reference != action.action_name
                && (created.contains(reference) || still_scheduled);
            if !resolves {
                return Err(CompileError::UnresolvedFollowReference {
                    action: action.action_name.clone(),
                    reference: reference.to_string(),
                });
            }
        }

        log::debug!(
            "Schedule batch for channel {}: {} creates, {} deletes",
            channel_id,
            creates.len(),
            deletes.len()
        );

        Ok(ScheduleBatch {
            channel_id: channel_id.to_string(),
            creates: ScheduleCreates {
                schedule_actions: creates,
            },
            deletes: ScheduleDeletes {
                action_names: deletes,
            },
        })
    }
}

/// Batch with no previously scheduled actions to follow
pub fn build_schedule_batch(
    channel_id: &str,
    creates: Vec<ScheduleAction>,
    deletes: Vec<String>,
) -> CompileResult<ScheduleBatch> {
    ScheduleCompiler::new().batch(channel_id, creates, deletes)
}
