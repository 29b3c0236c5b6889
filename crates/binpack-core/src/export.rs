use crate::model::Layout;
use serde_json::{Value, json};

/// Serializes a `Layout` as `{ pages: [...], meta: {...} }`.
///
/// Each frame becomes `{ key, frame: { x, y, w, h }, rotated }`; keys are rendered with
/// `ToString` so any printable key type can be exported.
pub fn to_json<K: ToString>(layout: &Layout<K>) -> Value {
    let pages: Vec<Value> = layout
        .pages
        .iter()
        .map(|p| {
            let frames: Vec<Value> = p
                .frames
                .iter()
                .map(|fr| {
                    json!({
                        "key": fr.key.to_string(),
                        "frame": {"x": fr.frame.x, "y": fr.frame.y, "w": fr.frame.w, "h": fr.frame.h},
                        "rotated": fr.rotated,
                    })
                })
                .collect();
            json!({
                "id": p.id,
                "width": p.width,
                "height": p.height,
                "frames": frames,
            })
        })
        .collect();
    let meta = &layout.meta;
    json!({
        "pages": pages,
        "meta": {
            "schemaVersion": meta.schema_version,
            "app": meta.app,
            "version": meta.version,
            "family": meta.family.to_string(),
            "size": {"w": meta.bin_size.0, "h": meta.bin_size.1},
            "sorted": meta.sorted,
        }
    })
}
