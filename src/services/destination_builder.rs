// Destination Builder
// Maps an output target to a destination descriptor (id + delivery URLs)

use crate::models::{CompilerSettings, DeliverySettings, Destination, DestinationTarget};
use crate::services::{CompileContext, CompileError, CompileResult};

pub struct DestinationBuilder<'s> {
    settings: &'s CompilerSettings,
}

impl<'s> DestinationBuilder<'s> {
    pub fn new(settings: &'s CompilerSettings) -> Self {
        Self { settings }
    }

    /// Build a destination, allocating an id when the target has no natural one.
    /// Keyed restream targets use their service key as id; a key already taken in
    /// this compile is a duplicate.
    pub fn build(
        &self,
        target: &DestinationTarget,
        channel_name: &str,
        ctx: &mut CompileContext,
    ) -> CompileResult<Destination> {
        let id = match target {
            DestinationTarget::Restream {
                service_key: Some(key),
            } => {
                if !ctx.reserve_id(key) {
                    return Err(CompileError::DuplicateIdentifier {
                        kind: "restream service key",
                        name: key.clone(),
                    });
                }
                key.clone()
            }
            _ => ctx.allocate_id(self.settings.id_length),
        };
        Ok(self.build_with_id(target, channel_name, id))
    }

    /// Build a destination under a caller-chosen id
    pub fn build_with_id(
        &self,
        target: &DestinationTarget,
        channel_name: &str,
        id: String,
    ) -> Destination {
        let settings = match target {
            DestinationTarget::Restream { service_key } => {
                self.restream_delivery(channel_name, service_key.as_deref())
            }
            DestinationTarget::SegmentedOutput | DestinationTarget::SnapshotOutput => {
                let extension = target.artifact_extension().unwrap_or_default();
                DeliverySettings::url(self.storage_url(channel_name, extension))
            }
        };

        Destination {
            id,
            settings: vec![settings],
        }
    }

    fn restream_delivery(&self, channel_name: &str, service_key: Option<&str>) -> DeliverySettings {
        let base = self.settings.restream_base_url.trim_end_matches('/');
        let encoded = urlencoding::encode(channel_name);
        match service_key {
            Some(key) => DeliverySettings::stream(
                format!("{base}/{encoded}_{key}"),
                format!("{channel_name}-{key}"),
            ),
            None => DeliverySettings::stream(format!("{base}/{encoded}"), channel_name),
        }
    }

    /// `<storage>/channel/<ch>/<ch>.<ext>`
    pub fn storage_url(&self, channel_name: &str, extension: &str) -> String {
        let root = self.settings.storage_uri.trim_end_matches('/');
        let encoded = urlencoding::encode(channel_name);
        format!("{root}/channel/{encoded}/{encoded}.{extension}")
    }
}
