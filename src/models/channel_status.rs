// Channel Status Models
// Read-back from describe channel and the monitoring projection built from it

use serde::{Deserialize, Serialize};

/// Remote channel lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelState {
    Creating,
    CreateFailed,
    Idle,
    Starting,
    Running,
    Recovering,
    Stopping,
    Deleting,
    Deleted,
    Updating,
    UpdateFailed,
}

impl ChannelState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelState::Creating => "CREATING",
            ChannelState::CreateFailed => "CREATE_FAILED",
            ChannelState::Idle => "IDLE",
            ChannelState::Starting => "STARTING",
            ChannelState::Running => "RUNNING",
            ChannelState::Recovering => "RECOVERING",
            ChannelState::Stopping => "STOPPING",
            ChannelState::Deleting => "DELETING",
            ChannelState::Deleted => "DELETED",
            ChannelState::Updating => "UPDATING",
            ChannelState::UpdateFailed => "UPDATE_FAILED",
        }
    }
}

impl std::fmt::Display for ChannelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PipelineDetail {
    #[serde(default)]
    pub active_input_attachment_name: Option<String>,

    #[serde(default)]
    pub pipeline_id: Option<String>,
}

/// Subset of the describe channel response the compiler's callers read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelDescription {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    pub state: ChannelState,

    #[serde(default)]
    pub pipeline_details: Vec<PipelineDetail>,
}

/// Monitoring projection of a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStatus {
    pub engine: String,
    pub channel: String,
    /// Active input attachment of the first pipeline, or ""
    pub stream: String,
    pub state: ChannelState,
    /// True iff the remote state is RUNNING
    pub connected: bool,
}

impl ChannelStatus {
    pub fn project(engine: &str, channel_code: &str, description: &ChannelDescription) -> Self {
        let stream = description
            .pipeline_details
            .first()
            .and_then(|p| p.active_input_attachment_name.clone())
            .unwrap_or_default();

        Self {
            engine: engine.to_string(),
            channel: channel_code.to_string(),
            stream,
            state: description.state,
            connected: description.state == ChannelState::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_running_channel() {
        let description: ChannelDescription = serde_json::from_str(
            r#"{
                "Id": "1234567",
                "State": "RUNNING",
                "PipelineDetails": [
                    { "ActiveInputAttachmentName": "show1-rtmp-push", "PipelineId": "0" }
                ]
            }"#,
        )
        .unwrap();

        let status = ChannelStatus::project("medialive", "show1", &description);

        assert_eq!(status.engine, "medialive");
        assert_eq!(status.channel, "show1");
        assert_eq!(status.stream, "show1-rtmp-push");
        assert_eq!(status.state, ChannelState::Running);
        assert!(status.connected);
    }

    #[test]
    fn test_project_idle_channel_without_pipelines() {
        let description = ChannelDescription {
            id: None,
            name: None,
            state: ChannelState::Idle,
            pipeline_details: Vec::new(),
        };

        let status = ChannelStatus::project("medialive", "show1", &description);

        assert_eq!(status.stream, "");
        assert!(!status.connected);

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["state"], "IDLE");
        assert_eq!(json["connected"], false);
    }
}
