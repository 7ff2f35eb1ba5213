//! End-to-end exercises of the guide submit sequence against recording
//! doubles for the session, object store, and API layer.

use std::sync::Mutex;

use authoring::category_index::CategoryIndex;
use authoring::draft::ImageSource;
use authoring::modal::Modal;
use authoring::submit::{
    create_category_inline, submit_and_notify, submit_guide, GuideApi, ObjectStore,
    SessionState, SubmitError, SubmitOutcome,
};
use authoring::wizard::GuideWizard;
use common::model::category::Category;
use common::model::guide::{
    CategorySnapshot, Guide, Module, ModuleContent, Question, Section, SectionText,
};
use common::requests::{CategoryPayload, GuidePayload};

struct SignedIn;

impl SessionState for SignedIn {
    fn token(&self) -> Option<String> {
        Some("token".to_string())
    }
}

struct SignedOut;

impl SessionState for SignedOut {
    fn token(&self) -> Option<String> {
        None
    }
}

#[derive(Default)]
struct RecordingStore {
    fail: bool,
    uploads: Mutex<Vec<(String, Vec<u8>)>>,
}

impl ObjectStore for RecordingStore {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, String> {
        if self.fail {
            return Err("bucket unavailable".to_string());
        }
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), bytes.to_vec()));
        Ok(format!("/storage/{path}"))
    }
}

#[derive(Default)]
struct RecordingApi {
    fail: bool,
    respond_empty: bool,
    created: Mutex<Vec<GuidePayload>>,
    updated: Mutex<Vec<(String, GuidePayload)>>,
    categories: Mutex<Vec<CategoryPayload>>,
}

impl RecordingApi {
    fn guide_from(payload: &GuidePayload, id: &str) -> Guide {
        Guide {
            id: id.to_string(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            image: payload.image.clone(),
            color: payload.color.clone(),
            is_popular: payload.is_popular,
            categories: payload.categories.clone(),
            metadata: payload.metadata.clone(),
            modules: payload.modules.clone(),
            created_at: String::new(),
        }
    }
}

impl GuideApi for RecordingApi {
    async fn create_guide(&self, payload: &GuidePayload) -> Result<Option<Guide>, String> {
        if self.fail {
            return Err("create failed".to_string());
        }
        self.created.lock().unwrap().push(payload.clone());
        if self.respond_empty {
            return Ok(None);
        }
        Ok(Some(Self::guide_from(payload, "g-new")))
    }

    async fn update_guide(
        &self,
        id: &str,
        payload: &GuidePayload,
    ) -> Result<Option<Guide>, String> {
        if self.fail {
            return Err("update failed".to_string());
        }
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), payload.clone()));
        if self.respond_empty {
            return Ok(None);
        }
        Ok(Some(Self::guide_from(payload, id)))
    }

    async fn create_category(
        &self,
        payload: &CategoryPayload,
    ) -> Result<Option<Category>, String> {
        if self.fail {
            return Err("category create failed".to_string());
        }
        self.categories.lock().unwrap().push(payload.clone());
        if self.respond_empty {
            return Ok(None);
        }
        Ok(Some(Category {
            id: "c-new".to_string(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            icon_url: payload.icon_url.clone(),
            color: payload.color.clone(),
            featured: payload.featured,
            coming_soon: payload.coming_soon,
            guides: payload.guides.clone(),
            created_at: String::new(),
        }))
    }
}

fn category(id: &str, title: &str, color: &str) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
        description: "d".to_string(),
        icon_url: "icon.png".to_string(),
        color: color.to_string(),
        featured: false,
        coming_soon: false,
        guides: Vec::new(),
        created_at: String::new(),
    }
}

/// The scenario-A draft: one keyword, one module with one plain-string
/// section, a pending local image.
fn filled_wizard() -> GuideWizard {
    let index = CategoryIndex::from_categories(&[category("c1", "Basics", "#445566")]);
    let mut wizard = GuideWizard::new(index);
    wizard.draft.title = "T".to_string();
    wizard.draft.description = "D".to_string();
    wizard.draft.image = ImageSource::Pending {
        filename: "hero.png".to_string(),
        bytes: vec![1, 2, 3],
    };
    wizard.draft.color = "#112233".to_string();
    wizard.draft.keywords = vec!["k".to_string()];
    wizard.draft.overview_text = "O".to_string();
    wizard.draft.category_ids = vec!["c1".to_string()];
    wizard.draft.modules = vec![Module {
        title: "M1".to_string(),
        locked: false,
        content: ModuleContent {
            sections: vec![Section {
                heading: "H".to_string(),
                text: SectionText::Text("X".to_string()),
                list: Vec::new(),
                expandable: None,
            }],
        },
        questions: vec![Question {
            question: "Q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_answer: 1,
        }],
    }];
    wizard
}

#[tokio::test]
async fn new_guide_submit_uploads_then_creates_with_normalized_sections() {
    let mut wizard = filled_wizard();
    let store = RecordingStore::default();
    let api = RecordingApi::default();

    let outcome = submit_guide(&mut wizard, &SignedIn, &store, &api)
        .await
        .expect("submit succeeds");
    match outcome {
        SubmitOutcome::Created(guide) => assert_eq!(guide.id, "g-new"),
        other => panic!("expected Created, got {other:?}"),
    }

    let uploads = store.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert!(uploads[0].0.starts_with("guides/"));
    assert!(uploads[0].0.ends_with("_hero.png"));
    assert_eq!(uploads[0].1, vec![1, 2, 3]);

    let created = api.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    let payload = &created[0];
    assert_eq!(payload.title, "T");
    assert_eq!(payload.description, "D");
    assert_eq!(payload.color, "#112233");
    assert_eq!(payload.image, format!("/storage/{}", uploads[0].0));
    assert_eq!(payload.metadata.keywords, vec!["k".to_string()]);
    assert_eq!(payload.metadata.overview.text, "O");
    assert_eq!(
        payload.modules[0].content.sections[0].text,
        SectionText::Paragraphs(vec!["X".to_string()])
    );
    assert_eq!(
        payload.categories,
        vec![CategorySnapshot {
            id: "c1".to_string(),
            title: "Basics".to_string(),
            color: "#445566".to_string(),
        }]
    );
}

#[tokio::test]
async fn upload_failure_aborts_before_any_create_call() {
    let mut wizard = filled_wizard();
    let store = RecordingStore {
        fail: true,
        ..Default::default()
    };
    let api = RecordingApi::default();

    let err = submit_guide(&mut wizard, &SignedIn, &store, &api)
        .await
        .expect_err("upload failure surfaces");
    assert!(matches!(err, SubmitError::Storage(_)));
    assert!(api.created.lock().unwrap().is_empty());
    assert!(api.updated.lock().unwrap().is_empty());
    // The draft still holds the local file for a retry.
    assert!(matches!(wizard.draft.image, ImageSource::Pending { .. }));
}

#[tokio::test]
async fn missing_session_aborts_before_any_network_call() {
    let mut wizard = filled_wizard();
    let store = RecordingStore::default();
    let api = RecordingApi::default();

    let err = submit_guide(&mut wizard, &SignedOut, &store, &api)
        .await
        .expect_err("auth failure surfaces");
    assert!(matches!(err, SubmitError::Auth));
    assert!(store.uploads.lock().unwrap().is_empty());
    assert!(api.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submit_validates_the_whole_draft_regardless_of_step() {
    let mut wizard = filled_wizard();
    wizard.draft.overview_text = String::new();
    wizard.step = 0;
    let store = RecordingStore::default();
    let api = RecordingApi::default();

    let err = submit_guide(&mut wizard, &SignedIn, &store, &api)
        .await
        .expect_err("validation failure surfaces");
    match err {
        SubmitError::Validation(missing) => assert_eq!(missing, vec!["Overview text"]),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(store.uploads.lock().unwrap().is_empty());
    assert!(api.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_category_ids_are_dropped_from_the_payload() {
    let mut wizard = filled_wizard();
    wizard
        .draft
        .category_ids
        .push("deleted-meanwhile".to_string());
    let store = RecordingStore::default();
    let api = RecordingApi::default();

    submit_guide(&mut wizard, &SignedIn, &store, &api)
        .await
        .expect("submit succeeds");
    let created = api.created.lock().unwrap();
    let ids: Vec<&str> = created[0].categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1"]);
}

#[tokio::test]
async fn existing_guide_goes_through_update() {
    let index = CategoryIndex::default();
    let mut wizard = filled_wizard();
    wizard.categories = index;
    wizard.draft.category_ids.clear();
    wizard.editing = Some("g-7".to_string());
    wizard.draft.image = ImageSource::Url("/storage/existing.png".to_string());
    let store = RecordingStore::default();
    let api = RecordingApi::default();

    let outcome = submit_guide(&mut wizard, &SignedIn, &store, &api)
        .await
        .expect("submit succeeds");
    assert!(matches!(outcome, SubmitOutcome::Updated(_)));
    // Nothing to upload when the image is already a URL.
    assert!(store.uploads.lock().unwrap().is_empty());
    let updated = api.updated.lock().unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "g-7");
    assert_eq!(updated[0].1.image, "/storage/existing.png");
}

#[tokio::test]
async fn response_without_a_guide_is_a_failed_save() {
    let mut wizard = filled_wizard();
    let store = RecordingStore::default();
    let api = RecordingApi {
        respond_empty: true,
        ..Default::default()
    };

    let err = submit_guide(&mut wizard, &SignedIn, &store, &api)
        .await
        .expect_err("empty response surfaces");
    assert!(matches!(err, SubmitError::Api(_)));
}

#[tokio::test]
async fn notify_wrapper_shows_the_error_modal_and_keeps_the_draft() {
    let mut wizard = filled_wizard();
    let store = RecordingStore::default();
    let api = RecordingApi {
        fail: true,
        ..Default::default()
    };

    let outcome = submit_and_notify(&mut wizard, &SignedIn, &store, &api).await;
    assert!(outcome.is_none());
    match wizard.modal.as_ref().expect("modal shown") {
        Modal::Error { title, message } => {
            assert_eq!(title, "Save failed");
            assert_eq!(message, "create failed");
        }
        other => panic!("expected error modal, got {other:?}"),
    }
    assert_eq!(wizard.draft.title, "T");
    assert!(!wizard.draft.modules.is_empty());
}

#[tokio::test]
async fn inline_category_creation_updates_index_selection_and_dialog() {
    let mut wizard = GuideWizard::new(CategoryIndex::default());
    let api = RecordingApi::default();

    let payload = CategoryPayload {
        title: "Prompting".to_string(),
        description: "d".to_string(),
        icon_url: "icon.png".to_string(),
        color: "#aabbcc".to_string(),
        ..Default::default()
    };
    let created = create_category_inline(&mut wizard, &api, payload)
        .await
        .expect("category created");

    assert_eq!(created.id, "c-new");
    assert!(wizard.categories.get("c-new").is_some());
    assert_eq!(wizard.draft.category_ids, vec!["c-new".to_string()]);
    assert_eq!(
        wizard.modal,
        Some(Modal::success("Category created", true))
    );
}

#[tokio::test]
async fn inline_category_creation_rejects_incomplete_payloads_locally() {
    let mut wizard = GuideWizard::new(CategoryIndex::default());
    let api = RecordingApi::default();

    let result =
        create_category_inline(&mut wizard, &api, CategoryPayload::default()).await;
    assert!(result.is_err());
    assert!(api.categories.lock().unwrap().is_empty());
    assert!(matches!(wizard.modal, Some(Modal::Error { .. })));
}
