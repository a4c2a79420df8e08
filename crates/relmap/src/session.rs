//! Front-end state as an explicit reducer.

use crate::{GenerateRequest, GenerateResponse, Generated, ModelChoice, NO_RELATIONSHIPS};
use relmap_layout::{LayoutOptions, RenderGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready,
    NoRelationships,
}

impl Status {
    /// Text to show in place of the graph, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Status::NoRelationships => Some(NO_RELATIONSHIPS),
            Status::Idle | Status::Loading | Status::Ready => None,
        }
    }
}

#[derive(Debug)]
pub enum Action {
    EditCode(String),
    SelectModel(ModelChoice),
    /// Starts a request; see [`Session::dispatch`].
    Submit,
    Received(relmap_core::Result<GenerateResponse>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub code: String,
    pub model: ModelChoice,
    pub graph: RenderGraph,
    pub summary: String,
    pub loading: bool,
    pub status: Status,
    pub options: LayoutOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Applies `action`.
    ///
    /// `Submit` returns the request to send, or `None` when the code is blank or a request is
    /// already in flight. Responses that arrive while nothing is in flight are ignored.
    pub fn dispatch(&mut self, action: Action) -> Option<GenerateRequest> {
        match action {
            Action::EditCode(code) => self.code = code,
            Action::SelectModel(model) => self.model = model,
            Action::Submit => return self.submit(),
            Action::Received(result) => {
                if !self.loading {
                    tracing::debug!("ignoring a response with no request in flight");
                    return None;
                }
                match result {
                    Ok(response) => self.apply(crate::generate(&response, &self.options)),
                    Err(err) => self.fail(&err.to_string()),
                }
            }
            Action::Failed(message) => {
                if self.loading {
                    self.fail(&message);
                }
            }
        }
        None
    }

    pub fn message(&self) -> Option<&'static str> {
        self.status.message()
    }

    fn submit(&mut self) -> Option<GenerateRequest> {
        if self.loading || self.code.trim().is_empty() {
            return None;
        }
        self.loading = true;
        self.status = Status::Loading;
        Some(GenerateRequest::new(self.code.clone(), self.model))
    }

    fn apply(&mut self, generated: Generated) {
        self.loading = false;
        self.graph = generated.graph;
        self.summary = generated.summary;
        self.status = generated.status;
    }

    fn fail(&mut self, message: &str) {
        tracing::warn!(%message, "generate request failed");
        self.apply(Generated::no_relationships(String::new()));
    }
}
