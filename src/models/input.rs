// Input Model
// Ingest inputs created before a channel and attached to it

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::services::CompileError;

/// Input type as understood by the encoding service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputType {
    UdpPush,
    RtpPush,
    RtmpPush,
    RtmpPull,
    UrlPull,
    Mp4File,
}

impl InputType {
    pub fn is_push(&self) -> bool {
        matches!(self, InputType::UdpPush | InputType::RtpPush | InputType::RtmpPush)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputSource {
    pub url: String,
}

/// Stream name a push input listens on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputDestinationRequest {
    pub stream_name: String,
}

/// Ingest input descriptor consumed by create input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Input {
    pub name: String,

    #[serde(rename = "Type")]
    pub input_type: InputType,

    /// Pulled/file sources; empty for push inputs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<InputSource>,

    /// Push endpoints; empty for pulled/file inputs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<InputDestinationRequest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_security_groups: Vec<String>,
}

/// What an input is for within a channel's ingest set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRole {
    /// Looping default asset
    DefaultFile,
    Push,
    /// File input whose URL is templated with `$urlPath$` at switch time
    DynamicUrl,
    Pull,
}

impl InputRole {
    /// Suffix appended to the channel name to form the input name
    pub fn name_suffix(&self) -> &'static str {
        match self {
            InputRole::DefaultFile => "default",
            InputRole::Push => "rtmp-push",
            InputRole::DynamicUrl => "dynamic",
            InputRole::Pull => "rtmp-pull",
        }
    }

    pub fn input_type(&self) -> InputType {
        match self {
            InputRole::DefaultFile | InputRole::DynamicUrl => InputType::Mp4File,
            InputRole::Push => InputType::RtmpPush,
            InputRole::Pull => InputType::RtmpPull,
        }
    }
}

/// Ingest strategy; decides which inputs exist and their precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngestStrategy {
    Pull,
    Push,
    Linear,
}

impl IngestStrategy {
    /// Input roles in attachment precedence order (first is active at start)
    pub fn roles(&self) -> &'static [InputRole] {
        match self {
            IngestStrategy::Pull => &[InputRole::Pull, InputRole::Push, InputRole::DynamicUrl],
            IngestStrategy::Push => &[InputRole::Push, InputRole::DynamicUrl, InputRole::Pull],
            IngestStrategy::Linear => &[
                InputRole::DefaultFile,
                InputRole::Push,
                InputRole::DynamicUrl,
                InputRole::Pull,
            ],
        }
    }
}

impl FromStr for IngestStrategy {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pull" => Ok(IngestStrategy::Pull),
            "push" => Ok(IngestStrategy::Push),
            "linear" => Ok(IngestStrategy::Linear),
            other => Err(CompileError::UnknownIngestStrategy(other.to_string())),
        }
    }
}
