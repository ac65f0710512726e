//! Clipboard copy with a legacy fallback
//!
//! The platform clipboard is tried first. When it is not available at all the
//! text goes through a [`ScratchSurface`]: a hidden text holder is inserted,
//! selected, copied with the legacy command and removed again.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ClipboardError, ClipboardResult};

/// How long a copy button shows its "copied" state
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1800);

/// Label shown on a copy button right after a successful copy
pub const COPIED_LABEL: &str = "✓ Copied!";

/// Alert shown when copying failed on every path
pub const MANUAL_COPY_ALERT: &str =
    "Couldn't copy automatically. Please select the text and copy it manually.";

/// Primary clipboard
#[async_trait(?Send)]
pub trait ClipboardBackend {
    async fn write_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Host for the hidden-holder fallback
#[async_trait(?Send)]
pub trait ScratchSurface {
    /// Insert an off-screen holder containing `text`
    async fn insert_hidden(&self, text: &str) -> ClipboardResult<()>;
    /// Focus the holder and select all of its content
    async fn select(&self) -> ClipboardResult<()>;
    /// Run the legacy copy command; `Ok(false)` means it reported failure
    async fn exec_copy(&self) -> ClipboardResult<bool>;
    /// Remove the holder
    async fn remove(&self) -> ClipboardResult<()>;
}

/// Copy via the hidden holder. The holder is removed on every path.
pub async fn legacy_copy<S>(surface: &S, text: &str) -> ClipboardResult<()>
where
    S: ScratchSurface + ?Sized,
{
    surface.insert_hidden(text).await?;

    let result = async {
        surface.select().await?;
        if surface.exec_copy().await? {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed)
        }
    }
    .await;

    if let Err(e) = surface.remove().await {
        tracing::warn!(error = %e, "Failed to remove copy holder");
    }

    result
}

/// Copy `text`, using `primary` when there is one and the legacy path otherwise.
///
/// A primary clipboard that exists but fails is reported as-is; the fallback
/// only covers the "no clipboard at all" case.
pub async fn copy_text<S>(
    primary: Option<&dyn ClipboardBackend>,
    fallback: &S,
    text: &str,
) -> ClipboardResult<()>
where
    S: ScratchSurface + ?Sized,
{
    match primary {
        Some(clipboard) => clipboard.write_text(text).await,
        None => {
            tracing::debug!("No platform clipboard, using legacy copy");
            legacy_copy(fallback, text).await
        }
    }
}

/// Label state of a copy button.
///
/// Works like the feedback banner: each copy returns a ticket, and only the
/// latest ticket restores the original label.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CopyButtonState {
    copied: bool,
    generation: u64,
}

impl CopyButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    pub fn restore(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Label to render, given the button's own label
    pub fn label<'a>(&self, original: &'a str) -> &'a str {
        if self.copied {
            COPIED_LABEL
        } else {
            original
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_state_restores_on_latest_ticket() {
        let mut state = CopyButtonState::new();
        let first = state.mark_copied();
        let second = state.mark_copied();
        assert_eq!(state.label("Copy"), COPIED_LABEL);

        assert!(!state.restore(first));
        assert!(state.is_copied());
        assert!(state.restore(second));
        assert_eq!(state.label("Copy"), "Copy");
    }
}
