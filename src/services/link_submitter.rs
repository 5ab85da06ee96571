//! Creation validator & submitter
//!
//! Gates a create attempt locally, then performs exactly one create call and
//! classifies the result. One submitter belongs to one form; while a submit
//! is in flight further submits from that form are ignored.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use super::link_store::LinkStore;
use crate::client::LinkApi;
use crate::errors::{DashboardError, Result};
use crate::models::{CreateLinkRequest, LinkRecord};
use crate::utils::url_validator::{validate_short_code, validate_url, validation_error_message};

pub const MSG_CREATED: &str = "Link created successfully!";
pub const MSG_CODE_TAKEN: &str = "That short code is already taken. Please try another.";
pub const MSG_CREATE_FAILED: &str = "Failed to create link. Please try again.";

/// Validate raw form input. Rules run in order and the first failure wins:
/// empty URL, malformed URL, then the optional custom code.
pub fn validate_create_input(url: &str, short_code: &str) -> Result<CreateLinkRequest> {
    validate_url(url)?;
    validate_short_code(short_code)?;
    Ok(CreateLinkRequest::new(url, short_code))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(LinkRecord),
    /// 409: the requested custom code exists
    CodeTaken,
    /// Any other gateway failure
    Failed(DashboardError),
    /// Rejected locally, nothing was sent
    Invalid(DashboardError),
    /// Another submit from this form is still running
    Busy,
}

impl SubmitOutcome {
    /// The collection must be refreshed after this outcome.
    pub fn should_refresh(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }

    /// Text shown under the form. `None` for an ignored submit.
    pub fn message(&self) -> Option<String> {
        match self {
            SubmitOutcome::Created(_) => Some(MSG_CREATED.to_string()),
            SubmitOutcome::CodeTaken => Some(MSG_CODE_TAKEN.to_string()),
            SubmitOutcome::Failed(_) => Some(MSG_CREATE_FAILED.to_string()),
            SubmitOutcome::Invalid(e) => Some(validation_error_message(e).to_string()),
            SubmitOutcome::Busy => None,
        }
    }
}

pub struct LinkSubmitter {
    api: Arc<dyn LinkApi>,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag on every exit path.
struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl LinkSubmitter {
    pub fn new(api: Arc<dyn LinkApi>) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn try_acquire(&self) -> Option<SubmitGuard<'_>> {
        match self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => Some(SubmitGuard(&self.in_flight)),
            Err(_) => {
                debug!("Create ignored: a submission is already in flight");
                None
            }
        }
    }

    /// Validate and issue one create request.
    pub async fn submit(&self, url: &str, short_code: &str) -> SubmitOutcome {
        let Some(_guard) = self.try_acquire() else {
            return SubmitOutcome::Busy;
        };
        self.create(url, short_code).await
    }

    async fn create(&self, url: &str, short_code: &str) -> SubmitOutcome {
        let request = match validate_create_input(url, short_code) {
            Ok(request) => request,
            Err(e) => {
                debug!("Create rejected locally: {}", e);
                return SubmitOutcome::Invalid(e);
            }
        };

        match self.api.create_link(&request).await {
            Ok(record) => {
                info!(
                    "Created link '{}' -> {}",
                    record.short_code, record.original_url
                );
                SubmitOutcome::Created(record)
            }
            Err(DashboardError::Conflict(msg)) => {
                info!("Short code {:?} already taken: {}", request.short_code, msg);
                SubmitOutcome::CodeTaken
            }
            Err(e) => {
                warn!("Create failed: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Submit and, on success, refresh `store`. The submitter stays in
    /// flight until the refresh has finished. A failed refresh does not
    /// turn a successful create into a failure; the store records the error.
    pub async fn submit_and_refresh(
        &self,
        url: &str,
        short_code: &str,
        store: &LinkStore,
    ) -> SubmitOutcome {
        let Some(_guard) = self.try_acquire() else {
            return SubmitOutcome::Busy;
        };
        let outcome = self.create(url, short_code).await;
        if outcome.should_refresh()
            && let Err(e) = store.refresh().await
        {
            warn!("Refresh after create failed: {}", e);
        }
        outcome
    }
}

/// Severity of the message under the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: FormStatusKind,
    pub message: String,
}

/// Input state of one create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub url: String,
    pub short_code: String,
    pub status: Option<FormStatus>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_inputs(&mut self) {
        self.url.clear();
        self.short_code.clear();
    }

    /// Fold a submit outcome into the form: inputs are cleared only on success.
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        let Some(message) = outcome.message() else {
            return;
        };
        let kind = if outcome.is_success() {
            self.clear_inputs();
            FormStatusKind::Success
        } else {
            FormStatusKind::Error
        };
        self.status = Some(FormStatus { kind, message });
    }

    /// Local validation, for live feedback while typing.
    pub fn validate(&self) -> Result<CreateLinkRequest> {
        validate_create_input(&self.url, &self.short_code)
    }
}
