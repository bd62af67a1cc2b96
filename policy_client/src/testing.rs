//! Scripted `Transport` for unit tests.
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use policy_common::{PolicyError, RawResponse, Result};

use crate::transport::Transport;

/// Request as seen by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Post { path: String, body: String },
    Get { path: String, authorization: String },
}

#[derive(Default)]
struct Inner {
    replies: VecDeque<Result<RawResponse>>,
    requests: Vec<Recorded>,
}

/// Replays queued replies in order and records every request.
#[derive(Clone, Default)]
pub struct StubTransport {
    inner: Arc<Mutex<Inner>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .replies
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn refuse(&self) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .replies
            .push_back(Err(PolicyError::Connection("connection refused".to_string())));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    fn next(&self, request: Recorded) -> Result<RawResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        inner
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(PolicyError::Connection("no scripted reply".to_string())))
    }
}

impl Transport for StubTransport {
    fn post_json(&self, path: &str, body: String) -> Result<RawResponse> {
        self.next(Recorded::Post {
            path: path.to_string(),
            body,
        })
    }

    fn get_authorized(&self, path: &str, authorization: &str) -> Result<RawResponse> {
        self.next(Recorded::Get {
            path: path.to_string(),
            authorization: authorization.to_string(),
        })
    }
}
