//! Request/response session
//!
//! Every request gets exactly one response. A layout failure closes the
//! session; later requests are answered with an error.

use serde::{Deserialize, Serialize};

use crate::brief::ProductBrief;
use crate::canvas::CanvasDriver;
use crate::config::Config;
use crate::error::BriefError;
use crate::layout::{generate_document, DocumentLayout};
use crate::llm::BriefClient;
use crate::store::{resolve_api_key, KeyValueStore, API_KEY};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    GetApiKey,
    SetApiKey { api_key: String },
    /// Ask the model for a brief
    ExpandBrief { idea: String },
    /// Lay out a brief on the session's canvas
    GenerateDocument { brief: Box<ProductBrief> },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Response {
    ApiKey { api_key: Option<String> },
    ApiKeySaved,
    Brief { brief: Box<ProductBrief> },
    Document { layout: DocumentLayout },
    Error { message: String, retryable: bool },
}

impl Response {
    fn error(err: &BriefError) -> Self {
        Response::Error {
            message: err.user_message(),
            retryable: err.is_retryable(),
        }
    }
}

pub struct Session<'a> {
    config: Config,
    store: Box<dyn KeyValueStore + 'a>,
    canvas: &'a mut dyn CanvasDriver,
    closed: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        config: Config,
        store: Box<dyn KeyValueStore + 'a>,
        canvas: &'a mut dyn CanvasDriver,
    ) -> Self {
        Self {
            config,
            store,
            canvas,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub async fn handle(&mut self, request: Request) -> Response {
        if self.closed {
            return Response::Error {
                message: "Session closed after a layout failure".to_string(),
                retryable: false,
            };
        }
        match request {
            Request::GetApiKey => match self.store.get(API_KEY) {
                Ok(api_key) => Response::ApiKey { api_key },
                Err(err) => {
                    // A broken store reads as "no key" so the user can set a new one
                    tracing::warn!(error = %err, "Could not read stored API key");
                    Response::ApiKey { api_key: None }
                }
            },
            Request::SetApiKey { api_key } => match self.store.set(API_KEY, api_key.trim()) {
                Ok(()) => Response::ApiKeySaved,
                Err(err) => Response::error(&err),
            },
            Request::ExpandBrief { idea } => match self.expand(&idea).await {
                Ok(brief) => Response::Brief {
                    brief: Box::new(brief),
                },
                Err(err) => Response::error(&err),
            },
            Request::GenerateDocument { brief } => {
                match generate_document(&brief, &mut *self.canvas, &self.config.fonts) {
                    Ok(layout) => Response::Document { layout },
                    Err(err) => {
                        self.closed = true;
                        Response::error(&err)
                    }
                }
            }
        }
    }

    async fn expand(&self, idea: &str) -> crate::Result<ProductBrief> {
        let api_key = resolve_api_key(self.store.as_ref())?;
        let client = BriefClient::new(self.config.api.clone(), api_key)?;
        client.expand_brief(idea).await
    }
}
