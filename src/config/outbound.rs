use log::{debug, warn};
use serde_json::{Map, Value, json};

pub const VLESS_PROTOCOL: &str = "vless";

/// Every object entry of the top-level `outbounds` array.
///
/// Yields nothing when the document has no `outbounds` array, so callers can
/// treat a partial schema as "nothing to do".
pub fn outbounds_mut(config: &mut Value) -> impl Iterator<Item = &mut Map<String, Value>> {
    config
        .get_mut("outbounds")
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object_mut)
}

/// Overwrites `settings.vnext[*].address` on every vless outbound.
///
/// Returns the number of addresses written.
pub fn update_address(config: &mut Value, address: &str) -> usize {
    let mut updated = 0;

    for outbound in outbounds_mut(config) {
        if outbound.get("protocol").and_then(Value::as_str) != Some(VLESS_PROTOCOL) {
            continue;
        }

        let tag = outbound
            .get("tag")
            .and_then(Value::as_str)
            .unwrap_or("<untagged>")
            .to_string();

        let Some(vnext) = outbound
            .get_mut("settings")
            .and_then(|settings| settings.get_mut("vnext"))
            .and_then(Value::as_array_mut)
        else {
            debug!("Outbound {} has no settings.vnext, skipping", tag);
            continue;
        };

        for (idx, server) in vnext.iter_mut().enumerate() {
            match server.as_object_mut() {
                Some(server) => {
                    server.insert("address".to_string(), json!(address));
                    updated += 1;
                }
                None => warn!("Outbound {}: vnext[{}] is not an object, skipping", tag, idx),
            }
        }
    }

    updated
}
