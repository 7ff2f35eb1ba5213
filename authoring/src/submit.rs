//! The guide submit sequence and the in-form category side channel.
//!
//! Submission runs in strict order: validate the whole draft, confirm a
//! session, upload a still-local image, resolve category snapshots, then
//! create or update. Any failing step aborts everything after it; nothing
//! already done is rolled back (an uploaded image whose save then fails
//! stays in storage). Errors are terminal: logged once and surfaced as the
//! blocking error modal, with the draft kept intact for a resubmit.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use common::model::category::Category;
use common::model::guide::{normalize_sections, Guide};
use common::requests::{CategoryPayload, GuidePayload};
use log::error;

use crate::draft::ImageSource;
use crate::modal::Modal;
use crate::wizard::{self, GuideWizard, Msg};

/// The authenticated session handed to the form by its shell.
pub trait SessionState {
    fn token(&self) -> Option<String>;
}

/// Object storage for hero images and icons.
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    /// Stores the bytes under `path` and returns the public URL.
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, String>;
}

/// The slice of the API layer the guide form talks to. `Ok(None)` means the
/// response arrived without the expected object, which callers treat as a
/// failed save.
#[allow(async_fn_in_trait)]
pub trait GuideApi {
    async fn create_guide(&self, payload: &GuidePayload) -> Result<Option<Guide>, String>;
    async fn update_guide(
        &self,
        id: &str,
        payload: &GuidePayload,
    ) -> Result<Option<Guide>, String>;
    async fn create_category(
        &self,
        payload: &CategoryPayload,
    ) -> Result<Option<Category>, String>;
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Created(Guide),
    Updated(Guide),
}

impl SubmitOutcome {
    pub fn guide(&self) -> &Guide {
        match self {
            SubmitOutcome::Created(guide) | SubmitOutcome::Updated(guide) => guide,
        }
    }
}

#[derive(Debug)]
pub enum SubmitError {
    /// Client-side validation failed; no network call was made.
    Validation(Vec<&'static str>),
    /// No authenticated session.
    Auth,
    /// The image upload failed; no guide was written.
    Storage(String),
    /// The create/update call failed or returned no guide.
    Api(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(missing) => {
                write!(f, "missing required fields: {}", missing.join(", "))
            }
            SubmitError::Auth => write!(f, "you must be signed in to save a guide"),
            SubmitError::Storage(message) => write!(f, "image upload failed: {message}"),
            SubmitError::Api(message) => write!(f, "{message}"),
        }
    }
}

impl SubmitError {
    pub fn modal(&self) -> Modal {
        match self {
            SubmitError::Validation(missing) => {
                Modal::error("Missing required fields", missing.join("\n"))
            }
            SubmitError::Auth => {
                Modal::error("Not signed in", "You must be signed in to save a guide.")
            }
            SubmitError::Storage(message) => Modal::error("Image upload failed", message.clone()),
            SubmitError::Api(message) => Modal::error("Save failed", message.clone()),
        }
    }
}

/// Runs the submit sequence. On success the caller navigates away from the
/// form; the wizard state needs no further reconciliation.
pub async fn submit_guide<S, O, A>(
    wizard: &mut GuideWizard,
    session: &S,
    store: &O,
    api: &A,
) -> Result<SubmitOutcome, SubmitError>
where
    S: SessionState,
    O: ObjectStore,
    A: GuideApi,
{
    let missing = wizard.missing_for_submit();
    if !missing.is_empty() {
        return Err(SubmitError::Validation(missing));
    }

    if session.token().is_none() {
        return Err(SubmitError::Auth);
    }

    let pending = match &wizard.draft.image {
        ImageSource::Pending { filename, bytes } => Some((filename.clone(), bytes.clone())),
        _ => None,
    };
    if let Some((filename, bytes)) = pending {
        let path = format!("guides/{}_{}", unix_millis(), filename);
        let url = store
            .upload(&path, &bytes)
            .await
            .map_err(SubmitError::Storage)?;
        // The draft now holds the resolved URL; a resubmit after a later
        // failure skips the upload.
        wizard.draft.image = ImageSource::Url(url);
    }

    let image = match wizard.draft.image.url() {
        Some(url) => url.to_string(),
        None => return Err(SubmitError::Validation(vec!["Image"])),
    };

    let mut modules = wizard.draft.modules.clone();
    normalize_sections(&mut modules);
    let payload = GuidePayload {
        title: wizard.draft.title.clone(),
        description: wizard.draft.description.clone(),
        image,
        color: wizard.draft.color.clone(),
        is_popular: wizard.draft.is_popular,
        categories: wizard.categories.resolve(&wizard.draft.category_ids),
        metadata: wizard.draft.metadata(),
        modules,
    };

    let editing = wizard.editing.clone();
    let result = match &editing {
        Some(id) => api.update_guide(id, &payload).await,
        None => api.create_guide(&payload).await,
    };
    match result {
        Ok(Some(guide)) => Ok(if editing.is_some() {
            SubmitOutcome::Updated(guide)
        } else {
            SubmitOutcome::Created(guide)
        }),
        Ok(None) => Err(SubmitError::Api(if editing.is_some() {
            "The guide could not be updated".to_string()
        } else {
            "The guide could not be created".to_string()
        })),
        Err(message) => Err(SubmitError::Api(message)),
    }
}

/// [`submit_guide`] plus the terminal error handling: failures are logged
/// and shown as the blocking error modal, and the draft survives for a
/// resubmit.
pub async fn submit_and_notify<S, O, A>(
    wizard: &mut GuideWizard,
    session: &S,
    store: &O,
    api: &A,
) -> Option<SubmitOutcome>
where
    S: SessionState,
    O: ObjectStore,
    A: GuideApi,
{
    match submit_guide(wizard, session, store, api).await {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            error!("guide submit failed: {err}");
            wizard.modal = Some(err.modal());
            None
        }
    }
}

/// Creates a category without leaving the guide form. The new category is
/// appended to the selectable index and the draft selection, and the success
/// notice re-offers the dialog so several can be added in a row.
pub async fn create_category_inline<A>(
    wizard: &mut GuideWizard,
    api: &A,
    payload: CategoryPayload,
) -> Result<Category, String>
where
    A: GuideApi,
{
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        wizard.modal = Some(Modal::error(
            "Missing required fields",
            missing.join("\n"),
        ));
        return Err(format!("missing required fields: {}", missing.join(", ")));
    }
    match api.create_category(&payload).await {
        Ok(Some(category)) => {
            wizard::update(wizard, Msg::CategoryCreated(category.clone()));
            Ok(category)
        }
        Ok(None) => {
            let message = "The category could not be created".to_string();
            error!("category create failed: no category in response");
            wizard.modal = Some(Modal::error("Save failed", message.clone()));
            Err(message)
        }
        Err(message) => {
            error!("category create failed: {message}");
            wizard.modal = Some(Modal::error("Save failed", message.clone()));
            Err(message)
        }
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
