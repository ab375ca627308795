//! Test support.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{self, BoxFuture};

use crate::descriptor::RequestDescriptor;
use crate::error::SdkError;
use crate::executor::RequestExecutor;
use crate::response::{Response, ResponseBody};

/// An executor that records every request and answers with a canned
/// response (`200 OK` with an empty JSON object unless configured).
///
/// Clones share the recording, so a test can hand one clone to a service
/// and inspect the other.
///
/// ## Examples
///
/// ```
/// use clinical_runtime::testing::RecordingExecutor;
///
/// let recorder = RecordingExecutor::new();
/// assert_eq!(recorder.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingExecutor {
    requests: Arc<Mutex<Vec<RequestDescriptor>>>,
    response: Response,
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::with_response(Response::ok(ResponseBody::Json(serde_json::json!({}))))
    }

    pub fn with_response(response: Response) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RequestDescriptor>> {
        self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.lock().clone()
    }

    pub fn last_request(&self) -> Option<RequestDescriptor> {
        self.lock().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }
}

impl RequestExecutor for RecordingExecutor {
    fn execute(&self, request: RequestDescriptor) -> BoxFuture<'_, Result<Response, SdkError>> {
        self.lock().push(request);
        Box::pin(future::ready(Ok(self.response.clone())))
    }
}
