//! Wire types of the Messages API (only the fields this client uses)

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: &'a str,
    pub messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct RequestMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct MessagesResponse {
    pub content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponseBlock {
    pub text: Option<String>,
}
