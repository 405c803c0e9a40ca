// Copyright 2026 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic payload encodings for submitting a document plus metadata.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use scrawl_svg::SvgDocument;

/// Fixed boundary for [`PayloadKind::FormMultipart`] bodies.
///
/// A fixed boundary keeps payload construction deterministic. The document
/// part is base64-encoded, so the boundary cannot collide with it.
const MULTIPART_BOUNDARY: &str = "scrawl-form-boundary";

/// Opaque string fields that travel alongside the document.
///
/// Fields keep insertion order and are never interpreted here: a team
/// number, a match number, whatever the collecting endpoint expects.
/// [`PayloadKind::CsvPost`] uses values in order; the other payload kinds
/// address fields by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: Vec<(String, String)>,
}

impl Metadata {
    /// Creates an empty metadata set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing the value of an existing field with the same
    /// name or appending a new one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(field) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            field.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Removes all fields.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Returns `true` when no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The transport shape a submission payload is encoded as.
///
/// All three wrap the same document data URI; collecting endpoints differ
/// only in how they want it framed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    /// One plain-text CSV line: metadata values in order, then the data URI.
    CsvPost,
    /// A `multipart/form-data` body with one part per field plus an `svg` part.
    FormMultipart,
    /// A JSON object mapping field names to values plus an `svg` member.
    JsonRpc,
}

/// An encoded submission body ready for transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    /// The `Content-Type` header value for this body.
    pub content_type: &'static str,
    /// The encoded body text.
    pub body: String,
}

/// Encodes a document as a base64 `data:image/svg+xml` URI.
#[must_use]
pub fn svg_data_uri(document: &SvgDocument) -> String {
    let mut uri = String::from("data:image/svg+xml;base64,");
    uri.push_str(&STANDARD.encode(document.as_str()));
    uri
}

/// Builds the transport payload for `kind` from `metadata` and `document`.
///
/// Pure and deterministic: the same inputs always produce the same body,
/// which keeps payload construction testable without a network.
#[must_use]
pub fn build_payload(kind: PayloadKind, metadata: &Metadata, document: &SvgDocument) -> Payload {
    let data_uri = svg_data_uri(document);
    let payload = match kind {
        PayloadKind::CsvPost => csv_payload(metadata, &data_uri),
        PayloadKind::FormMultipart => multipart_payload(metadata, &data_uri),
        PayloadKind::JsonRpc => json_payload(metadata, &data_uri),
    };
    tracing::debug!(kind = ?kind, bytes = payload.body.len(), "Built submit payload");
    payload
}

fn csv_payload(metadata: &Metadata, data_uri: &str) -> Payload {
    let mut line = String::new();
    for (_, value) in metadata.fields() {
        line.push_str(value);
        line.push(',');
    }
    line.push_str(data_uri);
    line.push('\n');
    Payload {
        content_type: "text/plain",
        body: line,
    }
}

fn multipart_payload(metadata: &Metadata, data_uri: &str) -> Payload {
    use core::fmt::Write as _;

    let mut body = String::new();
    for (name, value) in metadata.fields() {
        let _ = write!(
            body,
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        );
    }
    let _ = write!(
        body,
        "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"svg\"\r\n\r\n{data_uri}\r\n--{MULTIPART_BOUNDARY}--\r\n"
    );
    Payload {
        content_type: "multipart/form-data; boundary=scrawl-form-boundary",
        body,
    }
}

fn json_payload(metadata: &Metadata, data_uri: &str) -> Payload {
    let mut object = serde_json::Map::new();
    for (name, value) in metadata.fields() {
        object.insert(name.clone(), serde_json::Value::String(value.clone()));
    }
    object.insert(
        "svg".to_owned(),
        serde_json::Value::String(data_uri.to_owned()),
    );
    Payload {
        content_type: "application/json",
        body: serde_json::Value::Object(object).to_string(),
    }
}
