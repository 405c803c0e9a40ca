// Copyright 2026 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrawl Submit: deliver serialized annotation documents to a collection endpoint.
//!
//! This crate is the transport boundary of the pipeline. The capture and
//! serialization crates are pure; everything fallible lives here:
//!
//! - [`payload`]: deterministic payload encodings. The document travels as a
//!   base64 `data:image/svg+xml` URI, wrapped in one of three transport
//!   shapes ([`payload::PayloadKind`]): a CSV line POSTed as plain text, a
//!   `multipart/form-data` body, or a JSON object.
//! - [`sink`]: the [`sink::SubmitSink`] capability plus [`sink::HttpSink`],
//!   the production implementation delivering payloads over HTTP POST.
//!
//! Transport failure is always recoverable: a sink reports the error and
//! guarantees nothing about the endpoint, and callers keep their capture
//! state untouched so the user can retry. State is cleared only after a
//! sink reports success (see `scrawl_widget`).

pub mod payload;
pub mod sink;
