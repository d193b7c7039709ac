// Settings Model
// Compiler-wide configuration

use serde::{Deserialize, Serialize};
use crate::models::{CannedAcl, ChannelClass, LogLevel};

fn default_storage_uri() -> String {
    "s3://spiritstream-live".to_string()
}

fn default_storage_bucket() -> String {
    "spiritstream-live".to_string()
}

fn default_restream_base_url() -> String {
    "rtmp://1.2.3.4".to_string()
}

fn default_restream_service_keys() -> Vec<String> {
    ["youtube", "facebook", "instagram", "rtmp"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

fn default_segmented_destination_id() -> String {
    "kywofs".to_string()
}

fn default_snapshot_capture_interval_seconds() -> u32 {
    5
}

fn default_pull_fallback_url() -> String {
    "rtmp://1.2.3.4/temp".to_string()
}

fn default_id_length() -> usize {
    12
}

/// Compiler settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    // Storage root for segments, snapshots and the default asset
    #[serde(default = "default_storage_uri")]
    pub storage_uri: String,
    #[serde(default = "default_storage_bucket")]
    pub storage_bucket: String,

    // Restream
    #[serde(default = "default_restream_base_url")]
    pub restream_base_url: String,
    #[serde(default = "default_restream_service_keys")]
    pub restream_service_keys: Vec<String>,

    // Channel defaults
    #[serde(default)]
    pub role_arn: String,
    #[serde(default)]
    pub default_log_level: LogLevel,
    #[serde(default)]
    pub default_channel_class: ChannelClass,

    // Segmented HLS
    #[serde(default = "default_segmented_destination_id")]
    pub segmented_destination_id: String,
    #[serde(default)]
    pub segment_canned_acl: CannedAcl,

    // Snapshots
    #[serde(default = "default_snapshot_capture_interval_seconds")]
    pub snapshot_capture_interval_seconds: u32,

    // Inputs
    #[serde(default)]
    pub input_security_group: String,
    #[serde(default = "default_pull_fallback_url")]
    pub pull_fallback_url: String,

    // Generated destination ids
    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            storage_uri: default_storage_uri(),
            storage_bucket: default_storage_bucket(),
            restream_base_url: default_restream_base_url(),
            restream_service_keys: default_restream_service_keys(),
            role_arn: String::new(),
            default_log_level: LogLevel::default(),
            default_channel_class: ChannelClass::default(),
            segmented_destination_id: default_segmented_destination_id(),
            segment_canned_acl: CannedAcl::default(),
            snapshot_capture_interval_seconds: default_snapshot_capture_interval_seconds(),
            input_security_group: String::new(),
            pull_fallback_url: default_pull_fallback_url(),
            id_length: default_id_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: CompilerSettings =
            serde_json::from_str(r#"{ "roleArn": "arn:aws:iam::1:role/live" }"#).unwrap();

        assert_eq!(settings.role_arn, "arn:aws:iam::1:role/live");
        assert_eq!(settings.restream_service_keys.len(), 4);
        assert_eq!(settings.snapshot_capture_interval_seconds, 5);
        assert_eq!(settings.segment_canned_acl, CannedAcl::PublicRead);
        assert_eq!(settings.default_log_level, LogLevel::Error);
    }
}
