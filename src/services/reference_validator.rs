// Reference Validator
// Resolves every string cross-reference of a channel before it is handed out

use std::collections::{HashMap, HashSet};
use crate::models::Channel;
use crate::services::{CompileError, CompileResult};

/// Collect names into a set. A repeat fails unless `tolerate` accepts it.
fn unique_names<'c>(
    kind: &'static str,
    names: impl Iterator<Item = &'c str>,
    tolerate: &mut impl FnMut(&'static str, &str) -> bool,
) -> CompileResult<HashSet<&'c str>> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) && !tolerate(kind, name) {
            return Err(CompileError::DuplicateIdentifier {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(seen)
}

/// Check that the channel is a closed graph:
/// - destination ids, group, output and description names are unique
/// - every output group has outputs
/// - every destination ref and description name used by an output resolves
/// - every destination is referenced at least once
pub fn validate_channel(channel: &Channel) -> CompileResult<()> {
    validate_channel_with(channel, |_, _| false)
}

/// Same as [`validate_channel`], except that a repeated group, output or description
/// name passes when `tolerate(kind, name)` returns true. Destination ids and input
/// attachment names must always be unique.
pub fn validate_channel_with(
    channel: &Channel,
    mut tolerate: impl FnMut(&'static str, &str) -> bool,
) -> CompileResult<()> {
    if channel.name.trim().is_empty() {
        return Err(CompileError::InvalidChannelName(
            "channel name cannot be empty".to_string(),
        ));
    }

    let mut strict = |_: &'static str, _: &str| false;
    let destination_ids = unique_names(
        "destination",
        channel.destinations.iter().map(|d| d.id.as_str()),
        &mut strict,
    )?;
    unique_names(
        "input attachment",
        channel
            .input_attachments
            .iter()
            .map(|a| a.input_attachment_name.as_str()),
        &mut strict,
    )?;

    let video_names = unique_names(
        "video description",
        channel
            .encoder_settings
            .video_descriptions
            .iter()
            .map(|d| d.name.as_str()),
        &mut tolerate,
    )?;
    let audio_names = unique_names(
        "audio description",
        channel
            .encoder_settings
            .audio_descriptions
            .iter()
            .map(|d| d.name.as_str()),
        &mut tolerate,
    )?;
    unique_names(
        "output group",
        channel.output_groups().iter().map(|g| g.name.as_str()),
        &mut tolerate,
    )?;
    unique_names(
        "output",
        channel
            .output_groups()
            .iter()
            .flat_map(|g| g.outputs.iter())
            .map(|o| o.output_name.as_str()),
        &mut tolerate,
    )?;

    let mut ref_counts: HashMap<&str, usize> = destination_ids.iter().map(|id| (*id, 0)).collect();

    for group in channel.output_groups() {
        if group.outputs.is_empty() {
            return Err(CompileError::EmptyOutputGroup(group.name.clone()));
        }

        for id in group.destination_ref_ids() {
            match ref_counts.get_mut(id) {
                Some(count) => *count += 1,
                None => {
                    return Err(CompileError::DanglingReference {
                        kind: "destination",
                        name: id.to_string(),
                    })
                }
            }
        }

        for output in &group.outputs {
            if !video_names.contains(output.video_description_name.as_str()) {
                return Err(CompileError::DanglingReference {
                    kind: "video description",
                    name: output.video_description_name.clone(),
                });
            }
            if let Some(missing) = output
                .audio_description_names
                .iter()
                .find(|name| !audio_names.contains(name.as_str()))
            {
                return Err(CompileError::DanglingReference {
                    kind: "audio description",
                    name: missing.clone(),
                });
            }
        }
    }

    // Report orphans in declaration order
    if let Some(orphan) = channel
        .destinations
        .iter()
        .find(|d| ref_counts.get(d.id.as_str()).copied().unwrap_or(0) == 0)
    {
        return Err(CompileError::OrphanedDestination(orphan.id.clone()));
    }

    Ok(())
}
