//! Platform glue for the page.
//!
//! Everything that touches the webview (scroll position, element geometry,
//! the legacy copy command) goes through `document::eval`; everything that
//! touches the OS (clipboard, mail client) goes through native crates.

use std::cell::RefCell;

use async_trait::async_trait;
use dioxus::prelude::*;
use portfolio_core::error::ClipboardResult;
use portfolio_core::page::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use portfolio_core::page::{anchor_scroll_top, anchor_target, SectionBounds};
use portfolio_core::{ClipboardBackend, ClipboardError, MailDraft, MailDraftError, MailDraftOpener, ScratchSurface};
use serde::Deserialize;

/// Scroll position plus section geometry, sent on load and on every scroll
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScrollSnapshot {
    pub y: f64,
    pub sections: Vec<SectionBounds>,
}

const SCROLL_LISTENER_JS: &str = r#"
const snapshot = () => ({
    y: window.pageYOffset,
    sections: Array.from(document.querySelectorAll('section[id]')).map(s => ({
        id: s.id,
        offsetTop: s.offsetTop,
        offsetHeight: s.offsetHeight,
    })),
});
window.addEventListener('scroll', () => dioxus.send(snapshot()), { passive: true });
dioxus.send(snapshot());
"#;

/// Start listening for scroll events. Each call to `recv` yields a snapshot.
pub fn scroll_listener() -> document::Eval {
    document::eval(SCROLL_LISTENER_JS)
}

/// Start the reveal observer; it sends the id of each element as it first
/// intersects the viewport.
pub fn reveal_observer() -> document::Eval {
    let js = format!(
        r#"
requestAnimationFrame(() => {{
    const observer = new IntersectionObserver(entries => {{
        entries.forEach(entry => {{
            if (entry.isIntersecting) {{
                dioxus.send(entry.target.id);
                observer.unobserve(entry.target);
            }}
        }});
    }}, {{ threshold: {threshold}, rootMargin: '{margin}' }});
    document.querySelectorAll('[data-aos]').forEach(el => observer.observe(el));
}});
"#,
        threshold = REVEAL_THRESHOLD,
        margin = REVEAL_ROOT_MARGIN,
    );
    document::eval(&js)
}

/// Smoothly scroll so the section behind `href` sits below the fixed header.
///
/// `"#"` and unknown ids are ignored.
pub async fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let id_literal = js_string(id);

    let measure = document::eval(&format!(
        r#"
const el = document.getElementById({id_literal});
return el ? [el.getBoundingClientRect().top, window.pageYOffset] : null;
"#
    ));

    match measure.join::<Option<(f64, f64)>>().await {
        Ok(Some((top, page_y))) => smooth_scroll_to(anchor_scroll_top(top, page_y)),
        Ok(None) => tracing::debug!(id, "Anchor target not found"),
        Err(e) => tracing::warn!("Failed to measure anchor target {}: {:?}", id, e),
    }
}

pub fn smooth_scroll_to(top: f64) {
    document::eval(&format!(
        "window.scrollTo({{ top: {top}, behavior: 'smooth' }});"
    ));
}

/// Add `loaded` to the body once the page is up
pub fn mark_page_loaded() {
    document::eval("document.body.classList.add('loaded');");
}

/// Blocking browser alert
pub async fn alert(message: &str) {
    let eval = document::eval(&format!("alert({});", js_string(message)));
    if let Err(e) = eval.join::<serde_json::Value>().await {
        tracing::warn!("Alert failed: {:?}", e);
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// OS clipboard through arboard
pub struct ArboardClipboard(RefCell<arboard::Clipboard>);

impl ArboardClipboard {
    /// `None` when the platform has no usable clipboard
    pub fn open() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(Self(RefCell::new(clipboard))),
            Err(e) => {
                tracing::warn!("Clipboard not available: {}", e);
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl ClipboardBackend for ArboardClipboard {
    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        self.0
            .borrow_mut()
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

const SCRATCH_ID: &str = "copy-scratch";

/// Hidden textarea in the webview, driven step by step
pub struct WebviewScratch;

impl WebviewScratch {
    async fn run<T: serde::de::DeserializeOwned>(&self, body: String) -> ClipboardResult<T> {
        document::eval(&body)
            .join::<T>()
            .await
            .map_err(|e| ClipboardError::Script(format!("{:?}", e)))
    }
}

#[async_trait(?Send)]
impl ScratchSurface for WebviewScratch {
    async fn insert_hidden(&self, text: &str) -> ClipboardResult<()> {
        let js = format!(
            r#"
const area = document.createElement('textarea');
area.id = '{SCRATCH_ID}';
area.value = {text};
area.style.position = 'fixed';
area.style.opacity = '0';
document.body.appendChild(area);
return true;
"#,
            text = js_string(text),
        );
        self.run::<bool>(js).await.map(|_| ())
    }

    async fn select(&self) -> ClipboardResult<()> {
        let js = format!(
            r#"
const area = document.getElementById('{SCRATCH_ID}');
if (!area) return false;
area.focus();
area.select();
return true;
"#
        );
        if self.run::<bool>(js).await? {
            Ok(())
        } else {
            Err(ClipboardError::Script("copy holder missing".to_string()))
        }
    }

    async fn exec_copy(&self) -> ClipboardResult<bool> {
        self.run::<bool>(
            r#"
try {
    return document.execCommand('copy');
} catch (e) {
    return false;
}
"#
            .to_string(),
        )
        .await
    }

    async fn remove(&self) -> ClipboardResult<()> {
        let js = format!(
            r#"
const area = document.getElementById('{SCRATCH_ID}');
if (area) area.remove();
return true;
"#
        );
        self.run::<bool>(js).await.map(|_| ())
    }
}

/// Opens mail drafts with the OS default handler for `mailto:`.
///
/// The launcher runs detached; the page never waits on the mail client.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemMailOpener;

impl MailDraftOpener for SystemMailOpener {
    fn open(&self, draft: &MailDraft) -> Result<(), MailDraftError> {
        open::that_detached(draft.uri()).map_err(|e| MailDraftError::Open(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"here\"\n"), r#""it's \"here\"\n""#);
    }

    #[test]
    fn scroll_snapshot_from_listener_json() {
        let json = r#"{"y":420.5,"sections":[{"id":"about","offsetTop":600,"offsetHeight":700}]}"#;
        let snapshot: ScrollSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.y, 420.5);
        assert_eq!(snapshot.sections[0].id, "about");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn mail_opener_does_not_wait_for_launcher() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::{Duration, Instant};

        // Launcher that stays in the foreground like a terminal mail client
        let bin = tempfile::tempdir().unwrap();
        let launcher = bin.path().join("xdg-open");
        std::fs::write(&launcher, "#!/bin/sh\nsleep 3\n").unwrap();
        std::fs::set_permissions(&launcher, std::fs::Permissions::from_mode(0o755)).unwrap();

        let path = std::env::var("PATH").unwrap_or_default();
        std::env::set_var("PATH", format!("{}:{}", bin.path().display(), path));

        let draft = MailDraft {
            recipient: "owner@example.com".to_string(),
            subject: "Portfolio contact - Ana".to_string(),
            body: "Hello".to_string(),
        };
        let started = Instant::now();
        let result = SystemMailOpener.open(&draft);
        let elapsed = started.elapsed();

        std::env::set_var("PATH", path);

        assert!(result.is_ok(), "launcher should start: {:?}", result);
        assert!(elapsed < Duration::from_secs(2), "open blocked for {:?}", elapsed);
    }
}
