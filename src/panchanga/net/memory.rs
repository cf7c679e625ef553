use super::{Fetched, Fetcher, Request};
use crate::error::{PanchangaError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves canned responses by exact request and records every request.
/// A request with no response registered fails like a transport error.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    responses: HashMap<Request, Fetched>,
    requests: RefCell<Vec<Request>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, request: Request, response: Fetched) -> Self {
        self.responses.insert(request, response);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for StaticFetcher {
    fn get(&self, request: &Request) -> Result<Fetched> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .get(request)
            .cloned()
            .ok_or_else(|| PanchangaError::Http(format!("{}: connection refused", request)))
    }
}
