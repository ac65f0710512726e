//! Clipboard copy paths
//!
//! Uses a scripted scratch surface that records each step so the
//! insert → select → copy → remove sequence can be checked.

use std::cell::RefCell;

use async_trait::async_trait;
use portfolio_core::error::ClipboardResult;
use portfolio_core::{copy_text, legacy_copy, ClipboardBackend, ClipboardError, ScratchSurface};

#[derive(Default)]
struct ScriptedSurface {
    steps: RefCell<Vec<String>>,
    copy_succeeds: bool,
    select_fails: bool,
}

impl ScriptedSurface {
    fn working() -> Self {
        Self {
            copy_succeeds: true,
            ..Self::default()
        }
    }

    fn steps(&self) -> Vec<String> {
        self.steps.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ScratchSurface for ScriptedSurface {
    async fn insert_hidden(&self, text: &str) -> ClipboardResult<()> {
        self.steps.borrow_mut().push(format!("insert:{text}"));
        Ok(())
    }

    async fn select(&self) -> ClipboardResult<()> {
        self.steps.borrow_mut().push("select".to_string());
        if self.select_fails {
            return Err(ClipboardError::Script("detached".to_string()));
        }
        Ok(())
    }

    async fn exec_copy(&self) -> ClipboardResult<bool> {
        self.steps.borrow_mut().push("copy".to_string());
        Ok(self.copy_succeeds)
    }

    async fn remove(&self) -> ClipboardResult<()> {
        self.steps.borrow_mut().push("remove".to_string());
        Ok(())
    }
}

#[derive(Default)]
struct MemoryClipboard {
    contents: RefCell<Option<String>>,
}

#[async_trait(?Send)]
impl ClipboardBackend for MemoryClipboard {
    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_legacy_copy_runs_all_steps() {
    let surface = ScriptedSurface::working();
    legacy_copy(&surface, "ana@example.com").await.unwrap();
    assert_eq!(
        surface.steps(),
        vec!["insert:ana@example.com", "select", "copy", "remove"]
    );
}

#[tokio::test]
async fn test_failed_command_rejects_and_cleans_up() {
    let surface = ScriptedSurface::default();
    let err = legacy_copy(&surface, "x").await.unwrap_err();
    assert_eq!(err, ClipboardError::CommandFailed);
    assert_eq!(surface.steps().last().map(String::as_str), Some("remove"));
}

#[tokio::test]
async fn test_select_error_still_removes_holder() {
    let surface = ScriptedSurface {
        select_fails: true,
        ..ScriptedSurface::working()
    };
    let err = legacy_copy(&surface, "x").await.unwrap_err();
    assert!(matches!(err, ClipboardError::Script(_)));
    assert_eq!(surface.steps(), vec!["insert:x", "select", "remove"]);
}

#[tokio::test]
async fn test_primary_clipboard_skips_fallback() {
    let clipboard = MemoryClipboard::default();
    let surface = ScriptedSurface::working();

    copy_text(Some(&clipboard), &surface, "+55 11 9999").await.unwrap();

    assert_eq!(clipboard.contents.borrow().as_deref(), Some("+55 11 9999"));
    assert!(surface.steps().is_empty());
}

#[tokio::test]
async fn test_missing_primary_uses_fallback() {
    let surface = ScriptedSurface::working();
    copy_text(None, &surface, "hello").await.unwrap();
    assert_eq!(surface.steps().len(), 4);
}
