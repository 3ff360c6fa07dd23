//! Screen-facing services.
//!
//! # Responsibility
//! - Pair each screen's endpoints with its view state and, where writes
//!   exist, the optimistic mutation controller.
//! - Decode normalized payloads into typed models; a `null` payload is an
//!   empty collection.
//!
//! # Invariants
//! - A screen that requires a session issues zero network calls when none
//!   is present; it fails straight to the error state.
//! - Read failures land in the view state. Mutation failures are returned
//!   to the caller and never destroy an already-rendered list.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::gateway::{execute, FetchError, Gateway, GatewayResult, PreparedRequest};

pub mod auth;
pub mod feed;
pub mod history;
pub mod insights;
pub mod library;
pub mod social;

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> GatewayResult<T> {
    serde_json::from_value(value)
        .map_err(|err| FetchError::Network(format!("malformed payload: {err}")))
}

/// Decodes a collection payload; the backend omits empty collections, so
/// `null` reads as an empty list.
pub(crate) fn decode_list<T: DeserializeOwned>(value: Value) -> GatewayResult<Vec<T>> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    decode(value)
}

pub(crate) fn fetch_value<G: Gateway>(
    gateway: &G,
    prepared: &PreparedRequest,
) -> GatewayResult<Value> {
    match execute(gateway, prepared) {
        Ok(value) => {
            debug!(
                "event=fetch module=service path={} status=ok",
                prepared.request.path
            );
            Ok(value)
        }
        Err(err) => {
            warn!(
                "event=fetch module=service path={} status=error error={}",
                prepared.request.path, err
            );
            Err(err)
        }
    }
}

pub(crate) fn fetch_one<G: Gateway, T: DeserializeOwned>(
    gateway: &G,
    prepared: &PreparedRequest,
) -> GatewayResult<T> {
    fetch_value(gateway, prepared).and_then(decode)
}

pub(crate) fn fetch_list<G: Gateway, T: DeserializeOwned>(
    gateway: &G,
    prepared: &PreparedRequest,
) -> GatewayResult<Vec<T>> {
    fetch_value(gateway, prepared).and_then(decode_list)
}
