use super::outbound::outbounds_mut;
use log::warn;
use serde_json::{Map, Value, json};

pub const FRAGMENT_TAG: &str = "fragment";

/// Fragmentation parameters, kept as the strings given on the command line
/// (`"10-20"` style ranges included).
#[derive(Debug, Clone)]
pub struct Fragment {
    pub interval: String,
    pub length: String,
    pub packets: String,
}

/// Sets `settings.fragment.{interval,length,packets}` on every outbound tagged
/// `fragment`, creating `settings` and `fragment` when missing.
///
/// Returns the number of outbounds updated.
pub fn update_fragment(config: &mut Value, fragment: &Fragment) -> usize {
    let mut updated = 0;

    for outbound in outbounds_mut(config) {
        if outbound.get("tag").and_then(Value::as_str) != Some(FRAGMENT_TAG) {
            continue;
        }

        let Some(settings) = ensure_object(outbound, "settings") else {
            warn!("Outbound {}: settings is not an object, skipping", FRAGMENT_TAG);
            continue;
        };
        let Some(target) = ensure_object(settings, "fragment") else {
            warn!("Outbound {}: settings.fragment is not an object, skipping", FRAGMENT_TAG);
            continue;
        };

        target.insert("interval".to_string(), json!(fragment.interval));
        target.insert("length".to_string(), json!(fragment.length));
        target.insert("packets".to_string(), json!(fragment.packets));
        updated += 1;
    }

    updated
}

// None when the key holds something other than an object.
fn ensure_object<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    map.entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
}
