// Schedule Models
// Input-switch actions and the batch submitted to a running channel

use serde::{Deserialize, Serialize};

/// Which edge of the reference action a follow action fires on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FollowPoint {
    End,
    Start,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FixedModeScheduleActionStartSettings {
    /// Canonical ISO-8601 UTC timestamp
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FollowModeScheduleActionStartSettings {
    pub follow_point: FollowPoint,
    pub reference_action_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImmediateModeScheduleActionStartSettings {}

/// When an action takes effect (externally tagged on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleActionStartSettings {
    FixedModeScheduleActionStartSettings(FixedModeScheduleActionStartSettings),
    FollowModeScheduleActionStartSettings(FollowModeScheduleActionStartSettings),
    ImmediateModeScheduleActionStartSettings(ImmediateModeScheduleActionStartSettings),
}

impl ScheduleActionStartSettings {
    /// Name of the action this one follows, if any
    pub fn reference_action_name(&self) -> Option<&str> {
        match self {
            ScheduleActionStartSettings::FollowModeScheduleActionStartSettings(follow) => {
                Some(follow.reference_action_name.as_str())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputSwitchSettings {
    pub input_attachment_name_reference: String,

    /// Path substituted into a dynamic-URL input's `$urlPath$`; empty otherwise
    pub url_path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleActionSettings {
    pub input_switch_settings: InputSwitchSettings,
}

/// A time-triggered input switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleAction {
    /// Unique within a batch
    pub action_name: String,
    pub schedule_action_settings: ScheduleActionSettings,
    pub schedule_action_start_settings: ScheduleActionStartSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleCreates {
    pub schedule_actions: Vec<ScheduleAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleDeletes {
    pub action_names: Vec<String>,
}

/// Batch consumed by batch-update-schedule, submitted atomically
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleBatch {
    pub channel_id: String,
    pub creates: ScheduleCreates,
    pub deletes: ScheduleDeletes,
}
