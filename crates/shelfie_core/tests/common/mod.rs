//! Scripted gateway for driving services without a network.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;
use shelfie_core::{ApiRequest, FetchError, Gateway, GatewayResult};

/// Replays queued responses in order and records every request issued.
#[derive(Default)]
pub struct ScriptedGateway {
    responses: RefCell<VecDeque<GatewayResult<Value>>>,
    calls: RefCell<Vec<ApiRequest>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, body: Value) {
        self.responses.borrow_mut().push_back(Ok(body));
    }

    pub fn push_err(&self, err: FetchError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Gateway for ScriptedGateway {
    fn call(&self, request: &ApiRequest) -> GatewayResult<Value> {
        self.calls.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("script exhausted".to_string())))
    }
}
