//! Editor lifecycle event listeners

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::context::EditorHandle;
use crate::error::RenderResult;
use crate::script::{ScriptValue, Template};

const ADD_LISTENER: Template = Template::new(
    "add_listener",
    r#"
            {{editor}}.addListener({{event}}, function () {
                {{event_code}}
        });"#,
);

pub const SELECTION_CHANGE: &str = "selectionchange";
pub const CONTENT_CHANGE: &str = "contentchange";

/// Token inside hook code that is replaced with the editor handle
pub const EDITOR_PLACEHOLDER: &str = "{editor}";

/// Produces the code run when an event fires; empty means "no listener"
pub type EventHook = Arc<dyn Fn() -> String + Send + Sync>;

/// Ordered table of event hooks
///
/// Listeners render in insertion order. `selectionchange` and
/// `contentchange` are declared up front with empty hooks.
#[derive(Clone)]
pub struct EventHandler {
    hooks: Vec<(String, EventHook)>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("events", &self.events())
            .finish()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        let noop: EventHook = Arc::new(String::new);
        Self {
            hooks: vec![
                (SELECTION_CHANGE.to_string(), Arc::clone(&noop)),
                (CONTENT_CHANGE.to_string(), noop),
            ],
        }
    }

    /// Set the hook for `event`, replacing an existing one in place
    pub fn on<F>(mut self, event: impl Into<String>, hook: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        let event = event.into();
        let hook: EventHook = Arc::new(hook);

        match self.hooks.iter_mut().find(|(name, _)| *name == event) {
            Some(entry) => entry.1 = hook,
            None => self.hooks.push((event, hook)),
        }
        self
    }

    /// Set a hook that always yields the same code
    pub fn on_script(self, event: impl Into<String>, code: impl Into<String>) -> Self {
        let code = code.into();
        self.on(event, move || code.clone())
    }

    pub fn on_selection_change<F>(self, hook: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.on(SELECTION_CHANGE, hook)
    }

    pub fn on_content_change<F>(self, hook: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.on(CONTENT_CHANGE, hook)
    }

    /// Event names in render order
    pub fn events(&self) -> Vec<&str> {
        self.hooks.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Render one `addListener` statement per hook that yields code
    ///
    /// The handle is emitted bare, so it must be a valid identifier as soon
    /// as at least one listener is rendered.
    pub fn render(&self, editor: &EditorHandle) -> RenderResult<String> {
        let mut listeners = Vec::new();

        for (event, hook) in &self.hooks {
            let code = hook();
            if code.is_empty() {
                continue;
            }

            let handle = editor.require_identifier()?;
            debug!(event = %event, editor = %editor, "rendering event listener");
            let code = code.replace(EDITOR_PLACEHOLDER, handle);
            listeners.push(ADD_LISTENER.render(&[
                ("editor", ScriptValue::code(handle)),
                ("event", ScriptValue::single_quoted(event.as_str())),
                ("event_code", ScriptValue::Code(code)),
            ])?);
        }

        Ok(listeners.join("\n"))
    }
}
