//! Shared builders for mock library responses.
#![allow(dead_code)]

use serde_json::{json, Value};

/// One item document with a single metadata element.
pub fn item_json(nasa_id: &str, href: &str) -> Value {
    json!({
        "href": href,
        "data": [{
            "title": format!("Title for {nasa_id}"),
            "nasa_id": nasa_id,
            "media_type": "image",
            "date_created": "2022-10-12T10:00:00Z"
        }],
        "links": [
            { "href": format!("https://images-assets.nasa.gov/image/{nasa_id}/{nasa_id}~thumb.jpg"), "rel": "preview", "render": "image" }
        ]
    })
}

/// A collection document wrapping the given items.
pub fn collection_json(items: Vec<Value>) -> Value {
    json!({
        "collection": {
            "version": "1.0",
            "href": "https://images-api.nasa.gov/search",
            "items": items
        }
    })
}

/// A page of `count` items with ids `{prefix}-0..{prefix}-{count-1}`.
pub fn page_of(count: usize, prefix: &str) -> Value {
    let items = (0..count)
        .map(|i| {
            let id = format!("{prefix}-{i}");
            let href = format!("https://images-assets.nasa.gov/image/{id}/collection.json");
            item_json(&id, &href)
        })
        .collect();
    collection_json(items)
}
