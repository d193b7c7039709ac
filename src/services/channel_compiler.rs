// Channel Compiler
// Composes destinations, output groups and input attachments into one channel descriptor

use serde::Serialize;
use std::sync::Arc;
use crate::models::{
    AudioDescription, Channel, ChannelClass, ChannelPreset, CompilerSettings, Destination,
    DestinationTarget, EncoderSettings, EncodingProfile, InputAttachment, LogLevel, OutputFamily,
    OutputGroup, Resolution, TimecodeConfig, VideoDescription,
};
use crate::services::{
    emit_event, parse_resolution, validate_channel_with, CompileContext, CompileError, CompileResult,
    CompileWarning, DestinationBuilder, EventSink, GroupLayout, GroupRequest, IdAllocator,
    NoopEventSink, OutputGroupBuilder, OutputGroupBundle, EVENT_CHANNEL_COMPILED,
};

/// Caller parameters of one channel compile
#[derive(Debug, Clone)]
pub struct ChannelRequest {
    pub preset: ChannelPreset,
    pub channel_name: String,
    /// Falls back to the configured default class
    pub channel_class: Option<ChannelClass>,
    pub input_attachments: Vec<InputAttachment>,
    pub profile: EncodingProfile,
    /// Falls back to the configured default level
    pub log_level: Option<LogLevel>,
    /// Falls back to the configured role
    pub role_arn: Option<String>,
    /// Fan-out only: overrides the configured restream service keys
    pub restream_service_keys: Option<Vec<String>>,
}

impl ChannelRequest {
    pub fn new(preset: ChannelPreset, channel_name: impl Into<String>, profile: EncodingProfile) -> Self {
        Self {
            preset,
            channel_name: channel_name.into(),
            channel_class: None,
            input_attachments: Vec::new(),
            profile,
            log_level: None,
            role_arn: None,
            restream_service_keys: None,
        }
    }

    pub fn with_class(mut self, channel_class: ChannelClass) -> Self {
        self.channel_class = Some(channel_class);
        self
    }

    pub fn with_input_attachments(mut self, input_attachments: Vec<InputAttachment>) -> Self {
        self.input_attachments = input_attachments;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = Some(log_level);
        self
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    pub fn with_service_keys(mut self, keys: Vec<String>) -> Self {
        self.restream_service_keys = Some(keys);
        self
    }
}

/// A validated channel plus the non-fatal warnings raised while compiling it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledChannel {
    pub channel: Channel,
    pub warnings: Vec<CompileWarning>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChannelCompiledEvent<'a> {
    name: &'a str,
    preset: &'a str,
    output_groups: usize,
    destinations: usize,
    warnings: usize,
}

/// Accumulates the pieces of a channel in declaration order
#[derive(Default)]
struct ChannelAssembly {
    destinations: Vec<Destination>,
    output_groups: Vec<OutputGroup>,
    video_descriptions: Vec<VideoDescription>,
    audio_descriptions: Vec<AudioDescription>,
}

impl ChannelAssembly {
    fn push(
        &mut self,
        destination: Destination,
        bundle: OutputGroupBundle,
        ctx: &mut CompileContext,
    ) -> CompileResult<()> {
        self.destinations.push(destination);
        self.output_groups.push(bundle.group);
        for video in bundle.video_descriptions {
            merge_description(&mut self.video_descriptions, video, "video description", |d| &d.name, ctx)?;
        }
        for audio in bundle.audio_descriptions {
            merge_description(&mut self.audio_descriptions, audio, "audio description", |d| &d.name, ctx)?;
        }
        Ok(())
    }
}

/// Descriptions are shared by name. When truncation gives two descriptions the same
/// name the first one is kept and outputs of both groups reference it.
fn merge_description<T: PartialEq>(
    existing: &mut Vec<T>,
    candidate: T,
    kind: &'static str,
    name: impl Fn(&T) -> &String,
    ctx: &mut CompileContext,
) -> CompileResult<()> {
    match existing.iter().find(|d| name(*d) == name(&candidate)) {
        Some(_) if ctx.tolerate_collision(kind, name(&candidate)) => Ok(()),
        Some(current) if *current == candidate => Ok(()),
        Some(_) => Err(CompileError::DuplicateIdentifier {
            kind,
            name: name(&candidate).clone(),
        }),
        None => {
            existing.push(candidate);
            Ok(())
        }
    }
}

pub struct ChannelCompiler {
    settings: CompilerSettings,
    events: Arc<dyn EventSink>,
}

impl ChannelCompiler {
    pub fn new(settings: CompilerSettings) -> Self {
        Self {
            settings,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_event_sink(settings: CompilerSettings, events: Arc<dyn EventSink>) -> Self {
        Self { settings, events }
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    /// Compile a channel; fails as a whole on the first error
    pub fn compile(&self, request: &ChannelRequest) -> CompileResult<CompiledChannel> {
        self.compile_with_allocator(request, IdAllocator::new())
    }

    /// Compile with a caller-provided allocator (e.g. seeded, for reproducible ids)
    pub fn compile_with_allocator(
        &self,
        request: &ChannelRequest,
        allocator: IdAllocator,
    ) -> CompileResult<CompiledChannel> {
        let mut ctx = CompileContext::with_allocator(allocator, self.events.as_ref());
        let channel = self.compile_in(request, &mut ctx)?;
        let warnings = ctx.into_warnings();

        log::info!(
            "Compiled {} channel '{}': {} output groups, {} destinations, {} warnings",
            request.preset.as_str(),
            channel.name,
            channel.encoder_settings.output_groups.len(),
            channel.destinations.len(),
            warnings.len()
        );
        emit_event(
            self.events.as_ref(),
            EVENT_CHANNEL_COMPILED,
            &ChannelCompiledEvent {
                name: &channel.name,
                preset: request.preset.as_str(),
                output_groups: channel.encoder_settings.output_groups.len(),
                destinations: channel.destinations.len(),
                warnings: warnings.len(),
            },
        );

        Ok(CompiledChannel { channel, warnings })
    }

    fn compile_in(&self, request: &ChannelRequest, ctx: &mut CompileContext) -> CompileResult<Channel> {
        let channel_name = request.channel_name.as_str();
        if channel_name.trim().is_empty() {
            return Err(CompileError::InvalidChannelName(
                "channel name cannot be empty".to_string(),
            ));
        }
        let resolution = parse_resolution(&request.profile.resolution)?;

        let assembly = match request.preset {
            ChannelPreset::FanOut => {
                let keys = request
                    .restream_service_keys
                    .as_ref()
                    .unwrap_or(&self.settings.restream_service_keys);
                self.fan_out(channel_name, keys, resolution, ctx)?
            }
            ChannelPreset::SingleRestream => self.single_restream(channel_name, resolution, ctx)?,
            ChannelPreset::SingleSegmented => self.single_segmented(channel_name, resolution, ctx)?,
        };

        let channel = Channel {
            channel_class: request
                .channel_class
                .unwrap_or(self.settings.default_channel_class),
            destinations: assembly.destinations,
            encoder_settings: EncoderSettings {
                audio_descriptions: assembly.audio_descriptions,
                output_groups: assembly.output_groups,
                timecode_config: TimecodeConfig::default(),
                video_descriptions: assembly.video_descriptions,
            },
            input_attachments: request.input_attachments.clone(),
            log_level: request.log_level.unwrap_or(self.settings.default_log_level),
            name: channel_name.to_string(),
            role_arn: request
                .role_arn
                .clone()
                .unwrap_or_else(|| self.settings.role_arn.clone()),
        };

        validate_channel_with(&channel, |kind, name| ctx.tolerate_collision(kind, name))?;
        Ok(channel)
    }

    /// One restream group per service key, then segmented HLS, then snapshots
    fn fan_out(
        &self,
        channel_name: &str,
        service_keys: &[String],
        resolution: Resolution,
        ctx: &mut CompileContext,
    ) -> CompileResult<ChannelAssembly> {
        for key in service_keys {
            if key.trim().is_empty() {
                return Err(CompileError::InvalidChannelName(format!(
                    "empty restream service key for channel '{channel_name}'"
                )));
            }
        }

        let mut assembly = ChannelAssembly::default();
        for key in service_keys {
            let target = DestinationTarget::Restream {
                service_key: Some(key.clone()),
            };
            let destination = DestinationBuilder::new(&self.settings).build(&target, channel_name, ctx)?;
            let bundle = self.group(
                OutputFamily::Restream,
                channel_name,
                &destination,
                Some(key),
                resolution,
                GroupLayout::Shared,
                ctx,
            );
            assembly.push(destination, bundle, ctx)?;
        }

        self.push_allocated(
            &mut assembly,
            DestinationTarget::SegmentedOutput,
            OutputFamily::SegmentedHls,
            channel_name,
            resolution,
            GroupLayout::Shared,
            ctx,
        )?;
        self.push_snapshot(&mut assembly, channel_name, resolution, ctx)?;
        Ok(assembly)
    }

    fn single_restream(
        &self,
        channel_name: &str,
        resolution: Resolution,
        ctx: &mut CompileContext,
    ) -> CompileResult<ChannelAssembly> {
        let mut assembly = ChannelAssembly::default();
        self.push_allocated(
            &mut assembly,
            DestinationTarget::Restream { service_key: None },
            OutputFamily::Restream,
            channel_name,
            resolution,
            GroupLayout::Standalone,
            ctx,
        )?;
        self.push_snapshot(&mut assembly, channel_name, resolution, ctx)?;
        Ok(assembly)
    }

    /// The segmented destination keeps its configured, non-random id
    fn single_segmented(
        &self,
        channel_name: &str,
        resolution: Resolution,
        ctx: &mut CompileContext,
    ) -> CompileResult<ChannelAssembly> {
        let fixed_id = self.settings.segmented_destination_id.clone();
        if !ctx.reserve_id(&fixed_id) {
            return Err(CompileError::DuplicateIdentifier {
                kind: "destination",
                name: fixed_id,
            });
        }

        let mut assembly = ChannelAssembly::default();
        let destination = DestinationBuilder::new(&self.settings).build_with_id(
            &DestinationTarget::SegmentedOutput,
            channel_name,
            fixed_id,
        );
        let bundle = self.group(
            OutputFamily::SegmentedHls,
            channel_name,
            &destination,
            None,
            resolution,
            GroupLayout::Standalone,
            ctx,
        );
        assembly.push(destination, bundle, ctx)?;

        self.push_snapshot(&mut assembly, channel_name, resolution, ctx)?;
        Ok(assembly)
    }

    fn push_snapshot(
        &self,
        assembly: &mut ChannelAssembly,
        channel_name: &str,
        resolution: Resolution,
        ctx: &mut CompileContext,
    ) -> CompileResult<()> {
        self.push_allocated(
            assembly,
            DestinationTarget::SnapshotOutput,
            OutputFamily::PeriodicSnapshot,
            channel_name,
            resolution,
            GroupLayout::Standalone,
            ctx,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn push_allocated(
        &self,
        assembly: &mut ChannelAssembly,
        target: DestinationTarget,
        family: OutputFamily,
        channel_name: &str,
        resolution: Resolution,
        layout: GroupLayout,
        ctx: &mut CompileContext,
    ) -> CompileResult<()> {
        let destination = DestinationBuilder::new(&self.settings).build(&target, channel_name, ctx)?;
        let bundle = self.group(family, channel_name, &destination, None, resolution, layout, ctx);
        assembly.push(destination, bundle, ctx)
    }

    #[allow(clippy::too_many_arguments)]
    fn group(
        &self,
        family: OutputFamily,
        channel_name: &str,
        destination: &Destination,
        service_key: Option<&str>,
        resolution: Resolution,
        layout: GroupLayout,
        ctx: &mut CompileContext,
    ) -> OutputGroupBundle {
        let request = GroupRequest {
            channel_name,
            destination_id: &destination.id,
            service_key,
            resolution,
            layout,
        };
        OutputGroupBuilder::new(&self.settings).build(family, &request, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::models::{OutputGroupSettings, OutputSettings};
    use crate::services::{RecordingEventSink, EVENT_NAME_COLLISION, MAX_NAME_LENGTH};

    fn attachments() -> Vec<InputAttachment> {
        vec![
            InputAttachment::new("1001", "show1-rtmp-push"),
            InputAttachment::new("1002", "show1-dynamic"),
        ]
    }

    fn fan_out_request(name: &str, resolution: &str) -> ChannelRequest {
        ChannelRequest::new(ChannelPreset::FanOut, name, EncodingProfile::new(resolution))
            .with_class(ChannelClass::SinglePipeline)
            .with_input_attachments(attachments())
            .with_log_level(LogLevel::Error)
            .with_role_arn("arn:aws:iam::123456789012:role/MediaLiveAccessRole")
    }

    fn referenced_destination_ids(channel: &Channel) -> HashSet<String> {
        channel
            .output_groups()
            .iter()
            .flat_map(|g| g.destination_ref_ids())
            .map(|id| id.to_string())
            .collect()
    }

    fn assert_closed_graph(channel: &Channel) {
        let declared: HashSet<String> = channel.destinations.iter().map(|d| d.id.clone()).collect();
        assert_eq!(referenced_destination_ids(channel), declared);

        for group in channel.output_groups() {
            assert!(group.name.chars().count() <= MAX_NAME_LENGTH);
            for output in &group.outputs {
                assert!(output.output_name.chars().count() <= MAX_NAME_LENGTH);
                assert!(channel.video_description(&output.video_description_name).is_some());
                for audio in &output.audio_description_names {
                    assert!(channel.audio_description(audio).is_some());
                }
            }
        }
    }

    #[test]
    fn test_fan_out_topology() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        let compiled = compiler.compile(&fan_out_request("show1", "1280x720")).unwrap();
        let channel = &compiled.channel;

        assert!(compiled.warnings.is_empty());
        assert_eq!(channel.name, "show1");
        assert_eq!(channel.output_groups().len(), 4 + 1 + 1);
        assert_eq!(channel.destinations.len(), 6);
        assert_eq!(channel.input_attachments, attachments());
        assert_eq!(channel.role_arn, "arn:aws:iam::123456789012:role/MediaLiveAccessRole");

        let families: Vec<OutputFamily> = channel.output_groups().iter().map(|g| g.family()).collect();
        assert_eq!(
            families,
            vec![
                OutputFamily::Restream,
                OutputFamily::Restream,
                OutputFamily::Restream,
                OutputFamily::Restream,
                OutputFamily::SegmentedHls,
                OutputFamily::PeriodicSnapshot,
            ]
        );

        for group in channel.output_groups().iter().filter(|g| g.family() == OutputFamily::Restream) {
            for output in &group.outputs {
                assert_eq!(output.audio_description_names.len(), 1);
            }
        }

        let ids: Vec<&str> = channel.destinations.iter().take(4).map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["youtube", "facebook", "instagram", "rtmp"]);
        assert!(channel
            .encoder_settings
            .video_descriptions
            .iter()
            .any(|v| v.width == 1280 && v.height == 720));

        assert_closed_graph(channel);
    }

    #[test]
    fn test_fan_out_custom_service_keys() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        let request = fan_out_request("show1", "1920x1080")
            .with_service_keys(vec!["twitch".to_string(), "kick".to_string()]);

        let channel = compiler.compile(&request).unwrap().channel;

        assert_eq!(channel.output_groups().len(), 2 + 1 + 1);
        assert!(channel.destination("twitch").is_some());
        assert!(channel.destination("youtube").is_none());
        assert_closed_graph(&channel);
    }

    #[test]
    fn test_fan_out_rejects_duplicate_service_keys() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        let request = fan_out_request("show1", "1280x720")
            .with_service_keys(vec!["youtube".to_string(), "youtube".to_string()]);

        assert!(matches!(
            compiler.compile(&request),
            Err(CompileError::DuplicateIdentifier { .. })
        ));
    }

    #[test]
    fn test_single_restream_topology() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        let request = ChannelRequest::new(
            ChannelPreset::SingleRestream,
            "show1",
            EncodingProfile::new("1280x720"),
        );

        let channel = compiler.compile(&request).unwrap().channel;

        let families: Vec<OutputFamily> = channel.output_groups().iter().map(|g| g.family()).collect();
        assert_eq!(families, vec![OutputFamily::Restream, OutputFamily::PeriodicSnapshot]);
        assert_eq!(channel.destinations[0].settings[0].url, "rtmp://1.2.3.4/show1");
        assert_eq!(channel.channel_class, ChannelClass::SinglePipeline);
        assert_eq!(channel.log_level, LogLevel::Error);
        assert_closed_graph(&channel);
    }

    #[test]
    fn test_single_segmented_uses_fixed_destination() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        let fixed_id = compiler.settings().segmented_destination_id.clone();
        let request = ChannelRequest::new(
            ChannelPreset::SingleSegmented,
            "show1",
            EncodingProfile::new("854x480"),
        );

        let channel = compiler.compile(&request).unwrap().channel;

        assert_eq!(channel.output_groups().len(), 2);
        match &channel.output_groups()[0].output_group_settings {
            OutputGroupSettings::HlsGroupSettings(hls) => {
                assert_eq!(hls.destination.destination_ref_id, fixed_id)
            }
            other => panic!("expected HLS group, got {other:?}"),
        }
        match &channel.output_groups()[0].outputs[0].output_settings {
            OutputSettings::HlsOutputSettings(hls) => assert_eq!(hls.name_modifier, "_480p"),
            other => panic!("expected HLS output, got {other:?}"),
        }
        assert_ne!(channel.destinations[1].id, fixed_id);
        assert_closed_graph(&channel);
    }

    #[test]
    fn test_invalid_resolution_fails_whole_compile() {
        let sink = Arc::new(RecordingEventSink::new());
        let compiler = ChannelCompiler::with_event_sink(CompilerSettings::default(), sink.clone());

        for raw in ["720p", "1280x", "axb", ""] {
            let result = compiler.compile(&fan_out_request("show1", raw));
            assert_eq!(result, Err(CompileError::InvalidProfile(raw.to_string())));
        }
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_empty_channel_name_rejected() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        assert!(matches!(
            compiler.compile(&fan_out_request("", "1280x720")),
            Err(CompileError::InvalidChannelName(_))
        ));
    }

    #[test]
    fn test_long_channel_name_truncates_with_warnings() {
        let sink = Arc::new(RecordingEventSink::new());
        let compiler = ChannelCompiler::with_event_sink(CompilerSettings::default(), sink.clone());
        let request = ChannelRequest::new(
            ChannelPreset::SingleRestream,
            "weekly-townhall-stream",
            EncodingProfile::new("1280x720"),
        );

        let compiled = compiler.compile(&request).unwrap();

        assert!(!compiled.warnings.is_empty());
        assert_closed_graph(&compiled.channel);

        let events = sink.events();
        let (last_event, payload) = events.last().unwrap();
        assert_eq!(last_event, EVENT_CHANNEL_COMPILED);
        assert_eq!(payload["warnings"], compiled.warnings.len());
        assert_eq!(
            events.iter().filter(|(name, _)| name == crate::services::EVENT_NAME_TRUNCATED).count(),
            compiled.warnings.len()
        );
    }

    #[test]
    fn test_truncation_collisions_degrade_to_warnings() {
        let alphabet = "abcdefghijklmnopqrstuvwxyz0123456789";
        let presets = [
            ChannelPreset::FanOut,
            ChannelPreset::SingleRestream,
            ChannelPreset::SingleSegmented,
        ];

        for length in [30, 31, 32] {
            let name = &alphabet[..length];
            for preset in presets {
                let sink = Arc::new(RecordingEventSink::new());
                let compiler =
                    ChannelCompiler::with_event_sink(CompilerSettings::default(), sink.clone());
                let request = ChannelRequest::new(preset, name, EncodingProfile::new("1280x720"));

                let compiled = compiler
                    .compile(&request)
                    .unwrap_or_else(|e| panic!("{} {length}: {e}", preset.as_str()));
                assert_closed_graph(&compiled.channel);

                let collisions: Vec<&CompileWarning> = compiled
                    .warnings
                    .iter()
                    .filter(|w| matches!(w, CompileWarning::NameCollision { .. }))
                    .collect();
                if length >= 31 || preset == ChannelPreset::FanOut {
                    assert!(!collisions.is_empty(), "{} {length}", preset.as_str());
                }
                for warning in &collisions {
                    match warning {
                        CompileWarning::NameCollision { name: shared, .. } => {
                            assert!(shared.chars().count() <= MAX_NAME_LENGTH);
                            assert!(shared.starts_with(name) || name.starts_with(shared.as_str()));
                        }
                        other => panic!("unexpected warning {other:?}"),
                    }
                }
                assert_eq!(
                    sink.events()
                        .iter()
                        .filter(|(event, _)| event == EVENT_NAME_COLLISION)
                        .count(),
                    collisions.len()
                );
            }
        }
    }

    #[test]
    fn test_colliding_descriptions_keep_first_declared() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        let name = "abcdefghijklmnopqrstuvwxyz0123";

        let channel = compiler
            .compile(&ChannelRequest::new(
                ChannelPreset::FanOut,
                name,
                EncodingProfile::new("1280x720"),
            ))
            .unwrap()
            .channel;

        let shared = format!("{name}-f");
        let videos: Vec<&VideoDescription> = channel
            .encoder_settings
            .video_descriptions
            .iter()
            .filter(|v| v.name == shared)
            .collect();
        assert_eq!(videos.len(), 1);
        assert_eq!((videos[0].width, videos[0].height), (1280, 720));

        let snapshot = channel
            .output_groups()
            .iter()
            .find(|g| g.family() == OutputFamily::PeriodicSnapshot)
            .unwrap();
        assert_eq!(snapshot.outputs[0].video_description_name, shared);
    }

    #[test]
    fn test_seeded_compiles_are_reproducible() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        let request = fan_out_request("show1", "1280x720");

        let a = compiler.compile_with_allocator(&request, IdAllocator::with_seed(9)).unwrap();
        let b = compiler.compile_with_allocator(&request, IdAllocator::with_seed(9)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let compiler = ChannelCompiler::new(CompilerSettings::default());
        let channel = compiler.compile(&fan_out_request("show1", "1280x720")).unwrap().channel;
        let json = serde_json::to_value(&channel).unwrap();

        assert_eq!(json["ChannelClass"], "SINGLE_PIPELINE");
        assert_eq!(json["LogLevel"], "ERROR");
        assert_eq!(json["Name"], "show1");
        assert_eq!(json["EncoderSettings"]["TimecodeConfig"]["Source"], "EMBEDDED");
        assert_eq!(json["InputAttachments"][0]["InputAttachmentName"], "show1-rtmp-push");

        let rtmp_group = &json["EncoderSettings"]["OutputGroups"][0];
        assert_eq!(rtmp_group["Name"], "show1-youtube");
        assert_eq!(
            rtmp_group["OutputGroupSettings"]["RtmpGroupSettings"]["AuthenticationScheme"],
            "COMMON"
        );
        assert_eq!(
            rtmp_group["Outputs"][0]["OutputSettings"]["RtmpOutputSettings"]["Destination"]
                ["DestinationRefId"],
            "youtube"
        );

        let hls_output = &json["EncoderSettings"]["OutputGroups"][4]["Outputs"][0];
        assert_eq!(
            hls_output["OutputSettings"]["HlsOutputSettings"]["HlsSettings"]["StandardHlsSettings"]
                ["M3u8Settings"]["PmtPid"],
            "480"
        );

        let snapshot_video = json["EncoderSettings"]["VideoDescriptions"]
            .as_array()
            .unwrap()
            .iter()
            .find(|v| v["Name"] == "show1-frame-capture-video-desc")
            .unwrap()
            .clone();
        assert_eq!(
            snapshot_video["CodecSettings"]["FrameCaptureSettings"]["CaptureIntervalUnits"],
            "SECONDS"
        );
        assert_eq!(snapshot_video["Width"], 1920);
        assert_eq!(snapshot_video["RespondToAfd"], "NONE");
    }
}
