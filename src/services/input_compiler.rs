// Input Set Compiler
// Ordered ingest inputs for a channel, per ingest strategy

use crate::models::{
    CompilerSettings, IngestStrategy, Input, InputAttachment, InputDestinationRequest, InputRole,
    InputSource,
};
use crate::services::{CompileError, CompileResult};

/// Template placeholder the service substitutes with a switch action's url path
pub const DYNAMIC_URL_TEMPLATE: &str = "s3://$urlPath$";

pub struct InputCompiler<'s> {
    settings: &'s CompilerSettings,
}

impl<'s> InputCompiler<'s> {
    pub fn new(settings: &'s CompilerSettings) -> Self {
        Self { settings }
    }

    /// Inputs in attachment precedence order; the first is active when the channel starts.
    /// `fallback_source_url` feeds the pull input and defaults to the configured fallback.
    pub fn compile(
        &self,
        strategy: IngestStrategy,
        channel_name: &str,
        fallback_source_url: Option<&str>,
    ) -> CompileResult<Vec<Input>> {
        if channel_name.trim().is_empty() {
            return Err(CompileError::InvalidChannelName(
                "channel name cannot be empty".to_string(),
            ));
        }

        let pull_url = fallback_source_url.unwrap_or(&self.settings.pull_fallback_url);
        let inputs: Vec<Input> = strategy
            .roles()
            .iter()
            .map(|role| self.input(*role, channel_name, pull_url))
            .collect();

        log::debug!(
            "Compiled {} inputs for channel '{}': {:?}",
            inputs.len(),
            channel_name,
            inputs.iter().map(|i| i.name.as_str()).collect::<Vec<_>>()
        );
        Ok(inputs)
    }

    /// Same as [`compile`](Self::compile), with the strategy given by name
    pub fn compile_named(
        &self,
        strategy: &str,
        channel_name: &str,
        fallback_source_url: Option<&str>,
    ) -> CompileResult<Vec<Input>> {
        self.compile(strategy.parse()?, channel_name, fallback_source_url)
    }

    fn input(&self, role: InputRole, channel_name: &str, pull_url: &str) -> Input {
        let name = format!("{channel_name}-{}", role.name_suffix());
        let input_type = role.input_type();

        if input_type.is_push() {
            let security_groups = if self.settings.input_security_group.is_empty() {
                Vec::new()
            } else {
                vec![self.settings.input_security_group.clone()]
            };
            return Input {
                name,
                input_type,
                sources: Vec::new(),
                destinations: vec![InputDestinationRequest {
                    stream_name: channel_name.to_string(),
                }],
                input_security_groups: security_groups,
            };
        }

        let url = match role {
            InputRole::DefaultFile => format!(
                "s3://{}/media/common/default.mp4",
                self.settings.storage_bucket
            ),
            InputRole::DynamicUrl => DYNAMIC_URL_TEMPLATE.to_string(),
            _ => pull_url.to_string(),
        };

        Input {
            name,
            input_type,
            sources: vec![InputSource { url }],
            destinations: Vec::new(),
            input_security_groups: Vec::new(),
        }
    }
}

/// Attachment of a created input; switch actions reference it by the input's name
pub fn attach_input(input_id: impl Into<String>, input: &Input) -> InputAttachment {
    InputAttachment::new(input_id, input.name.clone())
}
