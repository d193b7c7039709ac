// OutputGroup Model
// Family-specific output bundles of a channel

use serde::{Deserialize, Serialize};
use crate::models::DestinationRef;

/// Output group families the compiler can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFamily {
    Restream,
    SegmentedHls,
    PeriodicSnapshot,
}

impl OutputFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFamily::Restream => "restream",
            OutputFamily::SegmentedHls => "segmented-hls",
            OutputFamily::PeriodicSnapshot => "periodic-snapshot",
        }
    }
}

/// Storage ACL applied to segment and snapshot uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CannedAcl {
    AuthenticatedRead,
    BucketOwnerFullControl,
    BucketOwnerRead,
    #[default]
    PublicRead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationScheme {
    Akamai,
    #[default]
    Common,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputLossAction {
    #[default]
    EmitOutput,
    PauseOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RtmpGroupSettings {
    pub ad_markers: Vec<String>,
    pub authentication_scheme: AuthenticationScheme,
    pub input_loss_action: InputLossAction,
}

impl Default for RtmpGroupSettings {
    fn default() -> Self {
        Self {
            ad_markers: Vec::new(),
            authentication_scheme: AuthenticationScheme::Common,
            input_loss_action: InputLossAction::EmitOutput,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsS3Settings {
    pub canned_acl: CannedAcl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsCdnSettings {
    pub hls_s3_settings: HlsS3Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsGroupSettings {
    pub ad_markers: Vec<String>,
    pub destination: DestinationRef,
    pub hls_cdn_settings: HlsCdnSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrameCaptureS3Settings {
    pub canned_acl: CannedAcl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrameCaptureCdnSettings {
    pub frame_capture_s3_settings: FrameCaptureS3Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrameCaptureGroupSettings {
    pub destination: DestinationRef,
    pub frame_capture_cdn_settings: FrameCaptureCdnSettings,
}

/// Protocol-specific settings of an output group (externally tagged on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputGroupSettings {
    RtmpGroupSettings(RtmpGroupSettings),
    HlsGroupSettings(HlsGroupSettings),
    FrameCaptureGroupSettings(FrameCaptureGroupSettings),
}

impl OutputGroupSettings {
    pub fn family(&self) -> OutputFamily {
        match self {
            OutputGroupSettings::RtmpGroupSettings(_) => OutputFamily::Restream,
            OutputGroupSettings::HlsGroupSettings(_) => OutputFamily::SegmentedHls,
            OutputGroupSettings::FrameCaptureGroupSettings(_) => OutputFamily::PeriodicSnapshot,
        }
    }

    /// Group-level destination, for families that deliver per group
    pub fn destination(&self) -> Option<&DestinationRef> {
        match self {
            OutputGroupSettings::RtmpGroupSettings(_) => None,
            OutputGroupSettings::HlsGroupSettings(hls) => Some(&hls.destination),
            OutputGroupSettings::FrameCaptureGroupSettings(fc) => Some(&fc.destination),
        }
    }
}

/// Transport stream layout of HLS segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct M3u8Settings {
    pub audio_frames_per_pes: String,
    pub audio_pids: String,
    pub pcr_control: String,
    pub scte35_pid: String,
    pub timed_metadata_pid: String,
    pub video_pid: String,
    pub pmt_pid: String,
}

impl Default for M3u8Settings {
    fn default() -> Self {
        Self {
            audio_frames_per_pes: "4".to_string(),
            audio_pids: "492-498".to_string(),
            pcr_control: "PCR_EVERY_PES_PACKET".to_string(),
            scte35_pid: "500".to_string(),
            timed_metadata_pid: "502".to_string(),
            video_pid: "481".to_string(),
            pmt_pid: "480".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardHlsSettings {
    pub m3u8_settings: M3u8Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsSettings {
    pub standard_hls_settings: StandardHlsSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RtmpOutputSettings {
    pub destination: DestinationRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsOutputSettings {
    /// Suffix appended to segment names, encodes the vertical resolution (`_720p`)
    pub name_modifier: String,
    pub hls_settings: HlsSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrameCaptureOutputSettings {
    pub name_modifier: String,
}

/// Family-specific settings of a single output (externally tagged on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputSettings {
    RtmpOutputSettings(RtmpOutputSettings),
    HlsOutputSettings(HlsOutputSettings),
    FrameCaptureOutputSettings(FrameCaptureOutputSettings),
}

impl OutputSettings {
    /// Output-level destination, only restream outputs carry one
    pub fn destination(&self) -> Option<&DestinationRef> {
        match self {
            OutputSettings::RtmpOutputSettings(rtmp) => Some(&rtmp.destination),
            _ => None,
        }
    }
}

/// A single encoded output inside a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    pub output_settings: OutputSettings,

    /// At most 32 characters
    pub output_name: String,

    /// Must name a VideoDescription of the same channel
    pub video_description_name: String,

    /// Each entry must name an AudioDescription of the same channel
    pub audio_description_names: Vec<String>,
}

/// A family-specific bundle of outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputGroup {
    /// At most 32 characters
    pub name: String,

    pub output_group_settings: OutputGroupSettings,

    pub outputs: Vec<Output>,
}

impl OutputGroup {
    pub fn family(&self) -> OutputFamily {
        self.output_group_settings.family()
    }

    /// Every destination id this group points at, group level first
    pub fn destination_ref_ids(&self) -> impl Iterator<Item = &str> {
        self.output_group_settings
            .destination()
            .into_iter()
            .chain(self.outputs.iter().filter_map(|o| o.output_settings.destination()))
            .map(|r| r.destination_ref_id.as_str())
    }
}
