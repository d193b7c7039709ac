// Encoder Description Models
// Video/audio descriptions referenced by name from outputs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureIntervalUnits {
    Milliseconds,
    #[default]
    Seconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrameCaptureSettings {
    pub capture_interval: u32,
    pub capture_interval_units: CaptureIntervalUnits,
}

/// Codec-specific settings of a video description (externally tagged on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoCodecSettings {
    FrameCaptureSettings(FrameCaptureSettings),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RespondToAfd {
    None,
    Passthrough,
    Respond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScalingBehavior {
    Default,
    StretchToOutput,
}

/// Video encode parameters, referenced by `Output.video_description_name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoDescription {
    /// Unique within a channel, at most 32 characters
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec_settings: Option<VideoCodecSettings>,

    pub width: u32,

    pub height: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respond_to_afd: Option<RespondToAfd>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_behavior: Option<ScalingBehavior>,
}

impl VideoDescription {
    /// Plain scaled encode at the given size
    pub fn scaled(name: String, resolution: Resolution) -> Self {
        Self {
            name,
            codec_settings: None,
            width: resolution.width,
            height: resolution.height,
            sharpness: None,
            respond_to_afd: None,
            scaling_behavior: None,
        }
    }

    pub fn with_sharpness(mut self, sharpness: u32) -> Self {
        self.sharpness = Some(sharpness);
        self
    }
}

/// Audio encode parameters, referenced by `Output.audio_description_names`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioDescription {
    pub audio_selector_name: String,

    /// Unique within a channel, at most 32 characters
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}

/// Parsed `<width>x<height>` encode size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Fixed snapshot canvas, independent of the channel's encode size
    pub const SNAPSHOT_CANVAS: Resolution = Resolution {
        width: 1920,
        height: 1080,
    };

    /// Segment/snapshot name suffix (e.g. "_720p")
    pub fn name_modifier(&self) -> String {
        format!("_{}p", self.height)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Caller-facing encode profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingProfile {
    /// "WIDTHxHEIGHT", e.g. "1280x720"
    pub resolution: String,
}

impl EncodingProfile {
    pub fn new(resolution: impl Into<String>) -> Self {
        Self {
            resolution: resolution.into(),
        }
    }
}
