// Destination Model
// Delivery targets referenced by outputs through DestinationRefId

use serde::{Deserialize, Serialize};

/// One delivery endpoint of a destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliverySettings {
    /// Opaque delivery URL (rtmp://..., s3://...)
    pub url: String,

    /// Stream name, only set for restream endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}

impl DeliverySettings {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            stream_name: None,
        }
    }

    pub fn stream(url: impl Into<String>, stream_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            stream_name: Some(stream_name.into()),
        }
    }
}

/// A named delivery target for one or more outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    /// Unique within a channel
    pub id: String,

    /// Ordered delivery targets
    pub settings: Vec<DeliverySettings>,
}

/// Reference from an output (or output group) to a Destination.id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DestinationRef {
    pub destination_ref_id: String,
}

impl DestinationRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            destination_ref_id: id.into(),
        }
    }
}

/// The kind of artifact a destination receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationTarget {
    /// RTMP restream endpoint; `service_key` names one of several platforms
    Restream { service_key: Option<String> },
    /// Segmented HLS playlist in the storage root
    SegmentedOutput,
    /// Periodic snapshot image in the storage root
    SnapshotOutput,
}

impl DestinationTarget {
    /// File extension of the stored artifact, if this target writes to storage
    pub fn artifact_extension(&self) -> Option<&'static str> {
        match self {
            DestinationTarget::Restream { .. } => None,
            DestinationTarget::SegmentedOutput => Some("m3u8"),
            DestinationTarget::SnapshotOutput => Some("png"),
        }
    }
}
