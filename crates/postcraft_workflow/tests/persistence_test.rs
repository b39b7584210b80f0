//! Workflow state persisted through session stores.

mod test_utils;

use async_trait::async_trait;
use postcraft_error::{PostcraftResult, StorageError, StorageErrorKind};
use postcraft_interface::SessionStore;
use postcraft_storage::{FileSystemSessionStore, InMemorySessionStore};
use postcraft_workflow::{SessionHandle, SessionKey, Stage};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use test_utils::{MockGateway, MockResponse, five_ideas_json, workflow};

const CONTENT_JSON: &str = r##"{"linkedin_post": "A VPN helps.", "blog_article": "# VPN Myths\n\nBody."}"##;
const TRANSLATION_JSON: &str = r#"{"linkedin_post_fr": "Un VPN aide.", "blog_article_fr": "Corps.", "blog_link_tag_fr": "mythes-vpn"}"#;

/// In-memory store that fails every write to one chosen key once armed.
#[derive(Default)]
struct FailingStore {
    inner: InMemorySessionStore,
    failing_key: Mutex<Option<SessionKey>>,
}

impl FailingStore {
    fn fail_on(&self, key: SessionKey) {
        *self.failing_key.lock().unwrap() = Some(key);
    }

    fn check(&self, key: &str) -> PostcraftResult<()> {
        match *self.failing_key.lock().unwrap() {
            Some(failing) if failing.as_ref() == key => Err(StorageError::new(
                StorageErrorKind::FileWrite(format!("{} is read-only", key)),
            )
            .into()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SessionStore for FailingStore {
    async fn get(&self, token: &str, key: &str) -> PostcraftResult<Option<Value>> {
        self.inner.get(token, key).await
    }

    async fn set(&self, token: &str, key: &str, value: Value) -> PostcraftResult<()> {
        self.check(key)?;
        self.inner.set(token, key, value).await
    }

    async fn delete(&self, token: &str, key: &str) -> PostcraftResult<()> {
        self.check(key)?;
        self.inner.delete(token, key).await
    }
}

fn handle(dir: &tempfile::TempDir, token: &str) -> SessionHandle {
    let store: Arc<dyn SessionStore> = Arc::new(FileSystemSessionStore::new(dir.path()).unwrap());
    SessionHandle::new(store, token).unwrap()
}

#[tokio::test]
async fn test_full_pipeline_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(MockGateway::new_sequence(vec![
        MockResponse::Text(five_ideas_json()),
        MockResponse::Text(CONTENT_JSON.to_string()),
        MockResponse::Text(TRANSLATION_JSON.to_string()),
    ]));
    let workflow = workflow(gateway);

    let session = handle(&dir, "persisted");
    workflow
        .select_topic(&session, "VPN Explained Simply")
        .await
        .unwrap();
    workflow.generate_ideas(&session).await.unwrap();
    workflow.select_idea(&session, 4).await.unwrap();
    let content = workflow.generate_content(&session).await.unwrap().into_value();
    let translation = workflow
        .translate_content(&session)
        .await
        .unwrap()
        .into_value();

    let reopened = handle(&dir, "persisted");
    let state = reopened.load().await.unwrap();
    assert_eq!(state.stage(), Stage::Translated);
    assert_eq!(state.generated_ideas.len(), 5);
    assert_eq!(state.last_generated_content, Some(content));
    assert_eq!(state.translated_content, Some(translation.clone()));
    assert_eq!(translation.full_blog_url_fr, "https://myblogname.com/mythes-vpn");
}

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = workflow(Arc::new(MockGateway::new_sequence(vec![])));

    let first = handle(&dir, "first");
    let second = handle(&dir, "second");
    workflow
        .select_topic(&first, "VPN Explained Simply")
        .await
        .unwrap();

    assert_eq!(first.load().await.unwrap().stage(), Stage::TopicSelected);
    assert_eq!(second.load().await.unwrap().stage(), Stage::Fresh);
}

#[tokio::test]
async fn test_values_are_stored_under_session_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileSystemSessionStore::new(dir.path()).unwrap());
    let session = SessionHandle::new(store.clone(), "keys").unwrap();
    let workflow = workflow(Arc::new(MockGateway::new_sequence(vec![])));

    workflow
        .select_topic(&session, "VPN Explained Simply")
        .await
        .unwrap();

    let topic = store
        .get("keys", SessionKey::CurrentTopic.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(topic["title"], "VPN Explained Simply");
    assert!(
        store
            .get("keys", SessionKey::GeneratedIdeas.as_ref())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_failed_translation_delete_keeps_old_content_and_translation_together() {
    let store = Arc::new(FailingStore::default());
    let session = SessionHandle::new(store.clone(), "failing").unwrap();
    let gateway = Arc::new(MockGateway::new_sequence(vec![
        MockResponse::Text(five_ideas_json()),
        MockResponse::Text(CONTENT_JSON.to_string()),
        MockResponse::Text(TRANSLATION_JSON.to_string()),
        MockResponse::Text(
            r#"{"linkedin_post": "Second post", "blog_article": "Second article"}"#.to_string(),
        ),
    ]));
    let workflow = workflow(gateway);

    workflow
        .select_topic(&session, "VPN Explained Simply")
        .await
        .unwrap();
    workflow.generate_ideas(&session).await.unwrap();
    workflow.select_idea(&session, 4).await.unwrap();
    let content = workflow.generate_content(&session).await.unwrap().into_value();
    let translation = workflow
        .translate_content(&session)
        .await
        .unwrap()
        .into_value();

    store.fail_on(SessionKey::TranslatedContent);
    assert!(workflow.generate_content(&session).await.is_err());

    let state = session.load().await.unwrap();
    assert_eq!(state.last_generated_content, Some(content));
    assert_eq!(state.translated_content, Some(translation));
}

#[tokio::test]
async fn test_failed_idea_delete_keeps_previous_topic_and_ideas() {
    let store = Arc::new(FailingStore::default());
    let session = SessionHandle::new(store.clone(), "failing").unwrap();
    let workflow = workflow(Arc::new(MockGateway::new_text(five_ideas_json())));

    workflow
        .select_topic(&session, "VPN Explained Simply")
        .await
        .unwrap();
    workflow.generate_ideas(&session).await.unwrap();
    let before = session.load().await.unwrap();
    let other = workflow
        .catalog()
        .topics()
        .iter()
        .find(|topic| topic.title != "VPN Explained Simply")
        .unwrap()
        .title
        .clone();

    store.fail_on(SessionKey::GeneratedIdeas);
    assert!(workflow.select_topic(&session, &other).await.is_err());

    let after = session.load().await.unwrap();
    assert_eq!(after.current_topic, before.current_topic);
    assert_eq!(after.generated_ideas, before.generated_ideas);
    assert_eq!(after.stage(), Stage::IdeasGenerated);
}
