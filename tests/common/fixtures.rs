use serde_json::{Value, json};

/// Wraps content nodes in a rich-text document root.
pub fn rich_document(content: Vec<Value>) -> Value {
    json!({ "nodeType": "document", "data": {}, "content": content })
}

pub fn text(value: &str) -> Value {
    json!({ "nodeType": "text", "value": value, "marks": [], "data": {} })
}

pub fn bold_text(value: &str) -> Value {
    json!({ "nodeType": "text", "value": value, "marks": [{ "type": "bold" }], "data": {} })
}

pub fn paragraph(content: Vec<Value>) -> Value {
    json!({ "nodeType": "paragraph", "data": {}, "content": content })
}

pub fn heading(level: u8, value: &str) -> Value {
    json!({
        "nodeType": format!("heading-{level}"),
        "data": {},
        "content": [text(value)],
    })
}

pub fn asset_block(title: Option<&str>, url: Option<&str>) -> Value {
    let mut fields = json!({});
    if let Some(title) = title {
        fields["title"] = json!(title);
    }
    if let Some(url) = url {
        fields["file"] = json!({ "url": url, "fileName": "image.jpg", "contentType": "image/jpeg" });
    }
    json!({
        "nodeType": "embedded-asset-block",
        "data": { "target": { "sys": { "id": "asset1" }, "fields": fields } },
        "content": [],
    })
}

pub fn entry_block(content_type: &str, fields: Value) -> Value {
    json!({
        "nodeType": "embedded-entry-block",
        "data": {
            "target": {
                "sys": { "id": "entry1", "contentType": { "sys": { "id": content_type } } },
                "fields": fields,
            }
        },
        "content": [],
    })
}

pub fn video_entry(url: &str) -> Value {
    entry_block("videoEmbed", json!({ "title": "Lecture", "youtubeUrl": url }))
}

pub fn image_entry(url: &str, alignment: Value) -> Value {
    entry_block(
        "imageEntry",
        json!({
            "title": "Courtyard",
            "caption": "At dawn",
            "alignment": alignment,
            "image": { "fields": { "file": { "url": url } } },
        }),
    )
}

/// A minimal article entry for collection payloads.
pub fn article_entry(id: &str, slug: &str, date: &str, category: Option<&str>) -> Value {
    let mut fields = json!({
        "title": slug,
        "slug": slug,
        "excerpt": "An excerpt.",
        "publishDate": date,
        "bodyContent": rich_document(vec![paragraph(vec![text("Body.")])]),
    });
    if let Some(category) = category {
        fields["category"] = json!([
            { "sys": { "id": format!("cat-{category}") }, "fields": { "title": category, "slug": category.to_lowercase() } }
        ]);
    }
    json!({ "sys": { "id": id }, "fields": fields })
}

pub fn entries_payload(items: Vec<Value>) -> Value {
    json!({ "sys": { "type": "Array" }, "total": items.len(), "items": items })
}
