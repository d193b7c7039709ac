// Live Encoding Backend
// Boundary to the remote encoding service and the state-wait loop built on it

use async_trait::async_trait;
use std::time::Duration;

use crate::models::{Channel, ChannelDescription, ChannelState, ChannelStatus, Input, InputAttachment, ScheduleBatch};
use crate::services::attach_input;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors surfaced by a backend, passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Channel {channel_id} did not reach {target} after {attempts} attempts")]
    WaitTimedOut {
        channel_id: String,
        target: ChannelState,
        attempts: u32,
    },
}

/// Remote operations the compiled documents are submitted to
#[async_trait]
pub trait LiveEncodingBackend: Send + Sync {
    /// Create a channel, returning its service-assigned id
    async fn create_channel(&self, channel: &Channel) -> BackendResult<String>;

    async fn update_channel(&self, channel_id: &str, channel: &Channel) -> BackendResult<()>;

    async fn delete_channel(&self, channel_id: &str) -> BackendResult<()>;

    async fn start_channel(&self, channel_id: &str) -> BackendResult<()>;

    async fn stop_channel(&self, channel_id: &str) -> BackendResult<()>;

    async fn describe_channel(&self, channel_id: &str) -> BackendResult<ChannelDescription>;

    /// Create an input, returning its service-assigned id
    async fn create_input(&self, input: &Input) -> BackendResult<String>;

    async fn batch_update_schedule(&self, batch: &ScheduleBatch) -> BackendResult<()>;
}

/// How often and how long to poll for a channel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub poll_interval: Duration,
    pub max_attempts: u32,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_attempts: 60,
        }
    }
}

/// Poll `describe_channel` until the channel reports `target`.
/// Backend errors end the wait immediately.
pub async fn wait_for_state(
    backend: &dyn LiveEncodingBackend,
    channel_id: &str,
    target: ChannelState,
    policy: WaitPolicy,
) -> BackendResult<ChannelDescription> {
    for attempt in 1..=policy.max_attempts {
        let description = backend.describe_channel(channel_id).await?;
        if description.state == target {
            log::info!("Channel {} reached {} after {} polls", channel_id, target, attempt);
            return Ok(description);
        }

        log::debug!(
            "Channel {} is {} (waiting for {}, attempt {}/{})",
            channel_id,
            description.state,
            target,
            attempt,
            policy.max_attempts
        );

        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.poll_interval).await;
        }
    }

    log::warn!("Timed out waiting for channel {} to reach {}", channel_id, target);
    Err(BackendError::WaitTimedOut {
        channel_id: channel_id.to_string(),
        target,
        attempts: policy.max_attempts,
    })
}

/// Create inputs in order and return their attachments in the same order
pub async fn create_inputs(
    backend: &dyn LiveEncodingBackend,
    inputs: &[Input],
) -> BackendResult<Vec<InputAttachment>> {
    let mut attachments = Vec::with_capacity(inputs.len());
    for input in inputs {
        let input_id = backend.create_input(input).await?;
        attachments.push(attach_input(input_id, input));
    }
    Ok(attachments)
}

/// Describe a channel and project it for monitoring
pub async fn channel_status(
    backend: &dyn LiveEncodingBackend,
    engine: &str,
    channel_code: &str,
    channel_id: &str,
) -> BackendResult<ChannelStatus> {
    let description = backend.describe_channel(channel_id).await?;
    Ok(ChannelStatus::project(engine, channel_code, &description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngestStrategy, PipelineDetail};
    use crate::models::CompilerSettings;
    use crate::services::InputCompiler;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Backend that replays a scripted sequence of describe results
    #[derive(Default)]
    struct ScriptedBackend {
        states: Mutex<VecDeque<BackendResult<ChannelState>>>,
        describes: Mutex<u32>,
        created_inputs: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn with_states(states: Vec<BackendResult<ChannelState>>) -> Self {
            Self {
                states: Mutex::new(states.into()),
                ..Self::default()
            }
        }

        fn describes(&self) -> u32 {
            *self.describes.lock().unwrap()
        }
    }

    #[async_trait]
    impl LiveEncodingBackend for ScriptedBackend {
        async fn create_channel(&self, _channel: &Channel) -> BackendResult<String> {
            Ok("1234567".to_string())
        }

        async fn update_channel(&self, _channel_id: &str, _channel: &Channel) -> BackendResult<()> {
            Ok(())
        }

        async fn delete_channel(&self, _channel_id: &str) -> BackendResult<()> {
            Ok(())
        }

        async fn start_channel(&self, _channel_id: &str) -> BackendResult<()> {
            Ok(())
        }

        async fn stop_channel(&self, _channel_id: &str) -> BackendResult<()> {
            Ok(())
        }

        async fn describe_channel(&self, channel_id: &str) -> BackendResult<ChannelDescription> {
            *self.describes.lock().unwrap() += 1;
            let state = self
                .states
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(ChannelState::Idle))?;
            Ok(ChannelDescription {
                id: Some(channel_id.to_string()),
                name: None,
                state,
                pipeline_details: vec![PipelineDetail {
                    active_input_attachment_name: Some("show1-rtmp-push".to_string()),
                    pipeline_id: Some("0".to_string()),
                }],
            })
        }

        async fn create_input(&self, input: &Input) -> BackendResult<String> {
            let mut created = self.created_inputs.lock().unwrap();
            created.push(input.name.clone());
            Ok(format!("{}", 1000 + created.len()))
        }

        async fn batch_update_schedule(&self, _batch: &ScheduleBatch) -> BackendResult<()> {
            Ok(())
        }
    }

    fn fast_policy(max_attempts: u32) -> WaitPolicy {
        WaitPolicy {
            poll_interval: Duration::from_millis(1),
            max_attempts,
        }
    }

    #[tokio::test]
    async fn test_wait_reaches_target_state() {
        let backend = ScriptedBackend::with_states(vec![
            Ok(ChannelState::Creating),
            Ok(ChannelState::Starting),
            Ok(ChannelState::Running),
        ]);

        let description = wait_for_state(&backend, "1234567", ChannelState::Running, fast_policy(10))
            .await
            .unwrap();

        assert_eq!(description.state, ChannelState::Running);
        assert_eq!(backend.describes(), 3);
    }

    #[tokio::test]
    async fn test_wait_times_out() {
        let backend = ScriptedBackend::with_states(Vec::new());

        let result = wait_for_state(&backend, "1234567", ChannelState::Running, fast_policy(3)).await;

        assert_eq!(
            result,
            Err(BackendError::WaitTimedOut {
                channel_id: "1234567".to_string(),
                target: ChannelState::Running,
                attempts: 3,
            })
        );
        assert_eq!(backend.describes(), 3);
    }

    #[tokio::test]
    async fn test_wait_stops_on_backend_error() {
        let backend = ScriptedBackend::with_states(vec![
            Ok(ChannelState::Starting),
            Err(BackendError::Transport("connection reset".to_string())),
            Ok(ChannelState::Running),
        ]);

        let result = wait_for_state(&backend, "1234567", ChannelState::Running, fast_policy(10)).await;

        assert_eq!(result, Err(BackendError::Transport("connection reset".to_string())));
        assert_eq!(backend.describes(), 2);
    }

    #[tokio::test]
    async fn test_create_inputs_keeps_order() {
        let settings = CompilerSettings::default();
        let inputs = InputCompiler::new(&settings)
            .compile(IngestStrategy::Push, "show1", None)
            .unwrap();
        let backend = ScriptedBackend::default();

        let attachments = create_inputs(&backend, &inputs).await.unwrap();

        assert_eq!(attachments.len(), 3);
        assert_eq!(attachments[0].input_id, "1001");
        assert_eq!(attachments[0].input_attachment_name, "show1-rtmp-push");
        assert_eq!(attachments[2].input_attachment_name, "show1-rtmp-pull");
    }

    #[tokio::test]
    async fn test_channel_status_projection() {
        let backend = ScriptedBackend::with_states(vec![Ok(ChannelState::Running)]);

        let status = channel_status(&backend, "medialive", "show1", "1234567").await.unwrap();

        assert_eq!(status.stream, "show1-rtmp-push");
        assert!(status.connected);
    }
}
