//! Scripted transport for unit tests

use crate::client::{ApiRequest, Transport};
use crate::error::RequestError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub(crate) enum Reply {
    Body(String),
    Status(u16),
}

type Scripted = (Option<oneshot::Receiver<()>>, Reply);

/// Replies to requests in order from a queue, optionally holding a reply
/// until its gate is opened
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back((None, reply));
    }

    /// Queue a reply that is only delivered once the returned sender fires
    pub(crate) fn gated_reply(&self, reply: Reply) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back((Some(rx), reply));
        tx
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, RequestError> {
        self.requests.lock().unwrap().push(request.clone());
        let (gate, reply) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left");

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match reply {
            Reply::Body(body) => Ok(body.into_bytes()),
            Reply::Status(status) => Err(RequestError::Status {
                status,
                url: request.url,
            }),
        }
    }
}

pub(crate) const BOOKS_JSON: &str = r#"[
    {"id": 1, "name": "Dune", "author": "Herbert", "img": "dune.jpg", "genres": ["Sci-Fi"], "stars": 5},
    {"id": 2, "name": "Emma", "author": "Austen", "img": "emma.jpg", "genres": ["Romance"], "stars": 4}
]"#;
