// Copyright 2026 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Submit sinks: where finished documents go.

use scrawl_svg::SvgDocument;

use crate::payload::{Metadata, PayloadKind, build_payload};

/// A failure delivering a submission.
///
/// Sinks never corrupt caller state; every variant means "retry safely".
#[derive(Debug)]
pub enum SubmitError {
    /// The HTTP transport failed (connection, TLS, non-success status).
    Transport(ureq::Error),
    /// The endpoint answered with a non-success status code.
    UnexpectedStatus(u16),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "submission transport failed: {err}"),
            Self::UnexpectedStatus(code) => write!(f, "endpoint answered with status {code}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::UnexpectedStatus(_) => None,
        }
    }
}

/// A destination for finished annotation documents.
///
/// Implementations own their framing: the same document and metadata can be
/// delivered as a CSV line, a form post, or a JSON object depending on the
/// sink. Success means the endpoint accepted the submission; only then may
/// the caller clear its capture state.
pub trait SubmitSink {
    /// Delivers `document` with its accompanying `metadata`.
    fn submit(&mut self, metadata: &Metadata, document: &SvgDocument) -> Result<(), SubmitError>;
}

/// Delivers payloads to a collection endpoint over HTTP POST.
///
/// The payload shape is selected once by configuration
/// ([`PayloadKind`]), not by the caller, so the same capture pipeline
/// serves every endpoint variant.
#[derive(Clone, Debug)]
pub struct HttpSink {
    endpoint: String,
    kind: PayloadKind,
}

impl HttpSink {
    /// Creates a sink POSTing `kind`-shaped payloads to `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, kind: PayloadKind) -> Self {
        Self {
            endpoint: endpoint.into(),
            kind,
        }
    }

    /// Returns the configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the configured payload shape.
    #[must_use]
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }
}

impl SubmitSink for HttpSink {
    fn submit(&mut self, metadata: &Metadata, document: &SvgDocument) -> Result<(), SubmitError> {
        let payload = build_payload(self.kind, metadata, document);

        let response = ureq::post(&self.endpoint)
            .header("Content-Type", payload.content_type)
            .send(payload.body.as_str())
            .map_err(|err| {
                tracing::warn!(endpoint = %self.endpoint, error = %err, "Submission failed");
                SubmitError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, status = status.as_u16(), "Submission rejected");
            return Err(SubmitError::UnexpectedStatus(status.as_u16()));
        }

        tracing::info!(endpoint = %self.endpoint, kind = ?self.kind, "Submission delivered");
        Ok(())
    }
}
