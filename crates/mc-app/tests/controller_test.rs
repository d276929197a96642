//! End-to-end tests of [`Controller::dispatch`] with a fully mocked host.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use mc_app::{Command, Controller, HostDeps};
use mc_core::ports::{
    EditorPort, MenuOutcome, MenuPort, MenuRequest, NotifierPort, SystemClipboardPort,
};
use mc_core::{DocumentMeta, EditorContext, Settings};

struct MockEditor {
    context: Mutex<Option<EditorContext>>,
    ops: Mutex<Vec<String>>,
}

impl MockEditor {
    fn selecting(selections: &[&str]) -> Self {
        Self {
            context: Mutex::new(Some(EditorContext {
                document: DocumentMeta {
                    file_name: "/src/main.rs".to_string(),
                    language_id: "rust".to_string(),
                },
                selections: selections.iter().map(|s| s.to_string()).collect(),
            })),
            ops: Mutex::new(Vec::new()),
        }
    }

    fn absent() -> Self {
        Self {
            context: Mutex::new(None),
            ops: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EditorPort for MockEditor {
    async fn active_context(&self) -> Result<Option<EditorContext>> {
        Ok(self.context.lock().unwrap().clone())
    }

    async fn delete_selection(&self) -> Result<()> {
        self.ops.lock().unwrap().push("delete".to_string());
        Ok(())
    }

    async fn insert_at_cursor(&self, text: &str) -> Result<()> {
        self.ops.lock().unwrap().push(format!("insert:{text}"));
        Ok(())
    }
}

struct MockMenu;

#[async_trait]
impl MenuPort for MockMenu {
    async fn pick(&self, _request: MenuRequest) -> Result<MenuOutcome> {
        Ok(MenuOutcome::Cancelled)
    }
}

#[derive(Default)]
struct MockNotifier {
    warnings: Mutex<Vec<String>>,
}

#[async_trait]
impl NotifierPort for MockNotifier {
    async fn status(&self, _message: &str) -> Result<()> {
        Ok(())
    }

    async fn warn(&self, message: &str) -> Result<()> {
        self.warnings.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct MockSystemClipboard {
    calls: Mutex<Vec<&'static str>>,
}

#[async_trait]
impl SystemClipboardPort for MockSystemClipboard {
    async fn native_copy(&self) -> Result<()> {
        self.calls.lock().unwrap().push("copy");
        Ok(())
    }

    async fn native_cut(&self) -> Result<()> {
        self.calls.lock().unwrap().push("cut");
        Ok(())
    }

    async fn native_paste(&self) -> Result<()> {
        self.calls.lock().unwrap().push("paste");
        Ok(())
    }
}

struct Host {
    editor: Arc<MockEditor>,
    notifier: Arc<MockNotifier>,
    system_clipboard: Arc<MockSystemClipboard>,
    controller: Controller,
}

fn host_with(editor: MockEditor) -> Host {
    let editor = Arc::new(editor);
    let notifier = Arc::new(MockNotifier::default());
    let system_clipboard = Arc::new(MockSystemClipboard::default());
    let controller = Controller::new(HostDeps {
        editor: editor.clone(),
        menu: Arc::new(MockMenu),
        system_clipboard: system_clipboard.clone(),
        notifier: notifier.clone(),
        settings: Settings::default(),
    });
    Host {
        editor,
        notifier,
        system_clipboard,
        controller,
    }
}

#[tokio::test]
async fn copy_captures_then_runs_the_native_copy() {
    let host = host_with(MockEditor::selecting(&["snippet"]));

    host.controller.dispatch(Command::Copy).await.unwrap();

    assert_eq!(host.controller.clip_count(), 1);
    assert_eq!(host.system_clipboard.calls.lock().unwrap().as_slice(), &["copy"]);
}

#[tokio::test]
async fn cut_captures_then_runs_the_native_cut() {
    let host = host_with(MockEditor::selecting(&["snippet"]));

    host.controller.dispatch(Command::Cut).await.unwrap();

    assert_eq!(host.controller.clip_count(), 1);
    assert_eq!(host.system_clipboard.calls.lock().unwrap().as_slice(), &["cut"]);
}

#[tokio::test]
async fn copy_then_slot_paste_round_trips_the_text() {
    let host = host_with(MockEditor::selecting(&["snippet"]));

    host.controller.dispatch(Command::Copy).await.unwrap();
    host.controller.dispatch(Command::PasteSlot(1)).await.unwrap();

    assert_eq!(
        host.editor.ops.lock().unwrap().as_slice(),
        &["delete".to_string(), "insert:snippet".to_string()]
    );
    assert_eq!(
        host.system_clipboard.calls.lock().unwrap().as_slice(),
        &["copy", "paste"]
    );
}

#[tokio::test]
async fn empty_slot_paste_still_chains_the_native_paste() {
    let host = host_with(MockEditor::selecting(&["snippet"]));

    host.controller.dispatch(Command::PasteSlot(4)).await.unwrap();

    assert!(host.editor.ops.lock().unwrap().is_empty());
    assert_eq!(host.system_clipboard.calls.lock().unwrap().as_slice(), &["paste"]);
}

#[tokio::test]
async fn copy_without_an_editor_warns_but_still_runs_the_native_copy() {
    let host = host_with(MockEditor::absent());

    host.controller.dispatch(Command::Copy).await.unwrap();

    assert_eq!(host.controller.clip_count(), 0);
    assert_eq!(host.notifier.warnings.lock().unwrap().len(), 1);
    assert_eq!(host.system_clipboard.calls.lock().unwrap().as_slice(), &["copy"]);
}

#[tokio::test]
async fn browse_commands_route_to_the_menu_without_native_actions() {
    let host = host_with(MockEditor::selecting(&["snippet"]));

    host.controller.dispatch(Command::ShowHistory).await.unwrap();
    host.controller
        .dispatch(Command::ShowHistoryByLanguage)
        .await
        .unwrap();
    host.controller
        .dispatch(Command::ShowHistoryByFile)
        .await
        .unwrap();
    host.controller.dispatch(Command::RemoveClip).await.unwrap();

    assert!(host.system_clipboard.calls.lock().unwrap().is_empty());
}

#[test]
fn commands_serialize_for_the_host_bridge() {
    let json = serde_json::to_string(&Command::PasteSlot(2)).unwrap();
    assert_eq!(json, r#"{"paste_slot":2}"#);

    let back: Command = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Command::PasteSlot(2));

    assert_eq!(serde_json::to_string(&Command::Copy).unwrap(), r#""copy""#);
}
