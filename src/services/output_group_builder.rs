// Output Group Builder
// Maps a destination family to an output group plus the descriptions it references

use regex::Regex;
use std::sync::OnceLock;
use crate::models::{
    AudioDescription, CaptureIntervalUnits, CompilerSettings, DestinationRef,
    FrameCaptureCdnSettings, FrameCaptureGroupSettings, FrameCaptureOutputSettings,
    FrameCaptureS3Settings, FrameCaptureSettings, HlsCdnSettings, HlsGroupSettings,
    HlsOutputSettings, HlsS3Settings, HlsSettings, M3u8Settings, Output, OutputFamily,
    OutputGroup, OutputGroupSettings, OutputSettings, RespondToAfd, Resolution,
    RtmpGroupSettings, RtmpOutputSettings, ScalingBehavior, StandardHlsSettings,
    VideoCodecSettings, VideoDescription,
};
use crate::services::{CompileContext, CompileError, CompileResult};

const RESOLUTION_PATTERN: &str = r"^\s*(\d{1,5})\s*[xX]\s*(\d{1,5})\s*$";
static RESOLUTION_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// Sharpness applied to segmented and snapshot encodes
const DEFAULT_SHARPNESS: u32 = 50;

/// Parse a `<width>x<height>` resolution string
pub fn parse_resolution(raw: &str) -> CompileResult<Resolution> {
    let invalid = || CompileError::InvalidProfile(raw.to_string());

    let regex = RESOLUTION_REGEX
        .get_or_init(|| Regex::new(RESOLUTION_PATTERN).ok())
        .as_ref()
        .ok_or_else(invalid)?;
    let captures = regex.captures(raw).ok_or_else(invalid)?;

    let width: u32 = captures[1].parse().map_err(|_| invalid())?;
    let height: u32 = captures[2].parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok(Resolution { width, height })
}

/// How a group's names are derived from the channel name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLayout {
    /// Group shares the channel with other groups of the same kind (fan-out)
    Shared,
    /// Group is the channel's only output of its kind
    Standalone,
}

/// Inputs of one output group build
#[derive(Debug, Clone)]
pub struct GroupRequest<'r> {
    pub channel_name: &'r str,
    pub destination_id: &'r str,
    /// Restream platform key; names the group in a fan-out
    pub service_key: Option<&'r str>,
    pub resolution: Resolution,
    pub layout: GroupLayout,
}

/// An output group together with the descriptions its outputs reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputGroupBundle {
    pub group: OutputGroup,
    pub video_descriptions: Vec<VideoDescription>,
    pub audio_descriptions: Vec<AudioDescription>,
}

/// Raw (untruncated) names of one group
struct GroupNames {
    group: String,
    output: String,
    video: String,
    audio: Option<AudioNames>,
}

struct AudioNames {
    name: String,
    selector: String,
    stream: Option<String>,
}

impl GroupNames {
    fn restream(channel: &str, service_key: Option<&str>) -> Self {
        match service_key {
            Some(key) => Self {
                group: format!("{channel}-{key}"),
                output: format!("{channel}-{key}-output"),
                video: format!("{channel}-{key}-video"),
                audio: Some(AudioNames {
                    name: format!("{channel}-{key}-audio"),
                    selector: format!("{channel}-{key}-audio-desc"),
                    stream: Some(format!("{channel}-{key}")),
                }),
            },
            None => Self {
                group: format!("{channel}-output-group"),
                output: format!("{channel}-output"),
                video: format!("{channel}-video-desc"),
                audio: Some(AudioNames {
                    name: format!("{channel}-audio"),
                    selector: format!("{channel}-audio-desc"),
                    stream: Some(format!("{channel}-stream")),
                }),
            },
        }
    }

    fn segmented(channel: &str, layout: GroupLayout) -> Self {
        match layout {
            GroupLayout::Shared => Self {
                group: format!("{channel}-hls"),
                output: format!("{channel}-hls-output"),
                video: format!("{channel}-hls-video"),
                audio: Some(AudioNames {
                    name: format!("{channel}-hls-audio"),
                    selector: format!("{channel}-hls-audio-selector"),
                    stream: None,
                }),
            },
            GroupLayout::Standalone => Self {
                group: format!("{channel}-output"),
                output: format!("{channel}-hls-s3-output"),
                video: format!("{channel}-video-description"),
                audio: Some(AudioNames {
                    name: format!("{channel}-audio"),
                    selector: format!("{channel}-audio-selector"),
                    stream: None,
                }),
            },
        }
    }

    fn snapshot(channel: &str) -> Self {
        Self {
            group: format!("{channel}-frame-capture"),
            output: format!("{channel}-frame-capture-output"),
            video: format!("{channel}-frame-capture-video-desc"),
            audio: None,
        }
    }
}

/// Names after the platform limit was applied
struct LimitedNames {
    group: String,
    output: String,
    video: String,
    audio: Option<AudioDescription>,
}

impl LimitedNames {
    fn apply(names: GroupNames, ctx: &mut CompileContext) -> Self {
        let audio = names.audio.map(|audio| AudioDescription {
            audio_selector_name: ctx.name(audio.selector),
            name: ctx.name(audio.name),
            stream_name: audio.stream,
        });
        Self {
            group: ctx.name(names.group),
            output: ctx.name(names.output),
            video: ctx.name(names.video),
            audio,
        }
    }

    fn audio_description_names(&self) -> Vec<String> {
        self.audio.iter().map(|a| a.name.clone()).collect()
    }
}

pub struct OutputGroupBuilder<'s> {
    settings: &'s CompilerSettings,
}

impl<'s> OutputGroupBuilder<'s> {
    pub fn new(settings: &'s CompilerSettings) -> Self {
        Self { settings }
    }

    pub fn build(
        &self,
        family: OutputFamily,
        request: &GroupRequest,
        ctx: &mut CompileContext,
    ) -> OutputGroupBundle {
        let bundle = match family {
            OutputFamily::Restream => self.restream(request, ctx),
            OutputFamily::SegmentedHls => self.segmented_hls(request, ctx),
            OutputFamily::PeriodicSnapshot => self.periodic_snapshot(request, ctx),
        };
        log::debug!(
            "Built {} output group '{}' -> destination '{}'",
            family.as_str(),
            bundle.group.name,
            request.destination_id
        );
        bundle
    }

    fn restream(&self, request: &GroupRequest, ctx: &mut CompileContext) -> OutputGroupBundle {
        let names = LimitedNames::apply(
            GroupNames::restream(request.channel_name, request.service_key),
            ctx,
        );

        let output = Output {
            output_settings: OutputSettings::RtmpOutputSettings(RtmpOutputSettings {
                destination: DestinationRef::new(request.destination_id),
            }),
            output_name: names.output.clone(),
            video_description_name: names.video.clone(),
            audio_description_names: names.audio_description_names(),
        };

        OutputGroupBundle {
            group: OutputGroup {
                name: names.group,
                output_group_settings: OutputGroupSettings::RtmpGroupSettings(
                    RtmpGroupSettings::default(),
                ),
                outputs: vec![output],
            },
            video_descriptions: vec![VideoDescription::scaled(names.video, request.resolution)],
            audio_descriptions: names.audio.into_iter().collect(),
        }
    }

    fn segmented_hls(&self, request: &GroupRequest, ctx: &mut CompileContext) -> OutputGroupBundle {
        let names = LimitedNames::apply(
            GroupNames::segmented(request.channel_name, request.layout),
            ctx,
        );

        let output = Output {
            output_settings: OutputSettings::HlsOutputSettings(HlsOutputSettings {
                name_modifier: request.resolution.name_modifier(),
                hls_settings: HlsSettings {
                    standard_hls_settings: StandardHlsSettings {
                        m3u8_settings: M3u8Settings::default(),
                    },
                },
            }),
            output_name: names.output.clone(),
            video_description_name: names.video.clone(),
            audio_description_names: names.audio_description_names(),
        };

        OutputGroupBundle {
            group: OutputGroup {
                name: names.group,
                output_group_settings: OutputGroupSettings::HlsGroupSettings(HlsGroupSettings {
                    ad_markers: Vec::new(),
                    destination: DestinationRef::new(request.destination_id),
                    hls_cdn_settings: HlsCdnSettings {
                        hls_s3_settings: HlsS3Settings {
                            canned_acl: self.settings.segment_canned_acl,
                        },
                    },
                }),
                outputs: vec![output],
            },
            video_descriptions: vec![
                VideoDescription::scaled(names.video, request.resolution)
                    .with_sharpness(DEFAULT_SHARPNESS),
            ],
            audio_descriptions: names.audio.into_iter().collect(),
        }
    }

    /// Snapshots always render on the fixed 1080p canvas; only the name modifier follows the profile
    fn periodic_snapshot(&self, request: &GroupRequest, ctx: &mut CompileContext) -> OutputGroupBundle {
        let names = LimitedNames::apply(GroupNames::snapshot(request.channel_name), ctx);
        let canvas = Resolution::SNAPSHOT_CANVAS;

        let output = Output {
            output_settings: OutputSettings::FrameCaptureOutputSettings(
                FrameCaptureOutputSettings {
                    name_modifier: request.resolution.name_modifier(),
                },
            ),
            output_name: names.output.clone(),
            video_description_name: names.video.clone(),
            audio_description_names: Vec::new(),
        };

        let video = VideoDescription {
            name: names.video,
            codec_settings: Some(VideoCodecSettings::FrameCaptureSettings(FrameCaptureSettings {
                capture_interval: self.settings.snapshot_capture_interval_seconds,
                capture_interval_units: CaptureIntervalUnits::Seconds,
            })),
            width: canvas.width,
            height: canvas.height,
            sharpness: Some(DEFAULT_SHARPNESS),
            respond_to_afd: Some(RespondToAfd::None),
            scaling_behavior: Some(ScalingBehavior::Default),
        };

        OutputGroupBundle {
            group: OutputGroup {
                name: names.group,
                output_group_settings: OutputGroupSettings::FrameCaptureGroupSettings(
                    FrameCaptureGroupSettings {
                        destination: DestinationRef::new(request.destination_id),
                        frame_capture_cdn_settings: FrameCaptureCdnSettings {
                            frame_capture_s3_settings: FrameCaptureS3Settings {
                                canned_acl: self.settings.segment_canned_acl,
                            },
                        },
                    },
                ),
                outputs: vec![output],
            },
            video_descriptions: vec![video],
            audio_descriptions: Vec::new(),
        }
    }
}
