// Channel Model
// Complete live-encoding channel descriptor

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::models::{AudioDescription, Destination, OutputGroup, VideoDescription};
use crate::services::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelClass {
    #[default]
    SinglePipeline,
    Standard,
}

impl ChannelClass {
    /// Redundant (two-pipeline) channels are called STANDARD by the service
    pub const REDUNDANT: ChannelClass = ChannelClass::Standard;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    #[default]
    Error,
    Warning,
    Info,
    Debug,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimecodeSource {
    #[default]
    Embedded,
    Systemclock,
    Zerobased,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimecodeConfig {
    pub source: TimecodeSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncoderSettings {
    pub audio_descriptions: Vec<AudioDescription>,
    pub output_groups: Vec<OutputGroup>,
    pub timecode_config: TimecodeConfig,
    pub video_descriptions: Vec<VideoDescription>,
}

/// Binding of an external input to the channel; switch actions target `input_attachment_name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputAttachment {
    pub input_id: String,
    pub input_attachment_name: String,
}

impl InputAttachment {
    pub fn new(input_id: impl Into<String>, input_attachment_name: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
            input_attachment_name: input_attachment_name.into(),
        }
    }
}

/// Channel descriptor consumed by create/update channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Channel {
    pub channel_class: ChannelClass,
    pub destinations: Vec<Destination>,
    pub encoder_settings: EncoderSettings,
    pub input_attachments: Vec<InputAttachment>,
    pub log_level: LogLevel,
    pub name: String,
    pub role_arn: String,
}

impl Channel {
    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn video_description(&self, name: &str) -> Option<&VideoDescription> {
        self.encoder_settings
            .video_descriptions
            .iter()
            .find(|d| d.name == name)
    }

    pub fn audio_description(&self, name: &str) -> Option<&AudioDescription> {
        self.encoder_settings
            .audio_descriptions
            .iter()
            .find(|d| d.name == name)
    }

    pub fn output_groups(&self) -> &[OutputGroup] {
        &self.encoder_settings.output_groups
    }
}

/// Named channel topologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelPreset {
    /// One restream group per service key, plus segmented HLS and snapshots
    FanOut,
    /// One restream group plus snapshots
    SingleRestream,
    /// One segmented HLS group plus snapshots
    SingleSegmented,
}

impl ChannelPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelPreset::FanOut => "fan-out",
            ChannelPreset::SingleRestream => "single-restream",
            ChannelPreset::SingleSegmented => "single-segmented",
        }
    }
}

impl FromStr for ChannelPreset {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fan-out" => Ok(ChannelPreset::FanOut),
            "single-restream" => Ok(ChannelPreset::SingleRestream),
            "single-segmented" => Ok(ChannelPreset::SingleSegmented),
            other => Err(CompileError::UnknownPreset(other.to_string())),
        }
    }
}
