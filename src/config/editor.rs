//! Editor, command and event listener configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use geekblog_ueditor::{
    ButtonCommand, ComboCommand, Command, DialogCommand, EditorHandle, EventHandler,
    RenderContext,
};

/// Editor instance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// JavaScript identifier of the editor instance
    pub handle: String,

    /// Base URL for button icons
    #[serde(default)]
    pub media_url: String,
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        EditorHandle::new(self.handle.as_str())?;
        Ok(())
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.media_url.as_str())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handle: "editor".to_string(),
            media_url: "/media/".to_string(),
        }
    }
}

/// A toolbar command entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandConfig {
    Button(ButtonCommand),
    Combo(ComboCommand),
    Dialog(DialogCommand),
}

impl CommandConfig {
    pub fn ui_name(&self) -> &str {
        self.as_command().ui_name()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CommandConfig::Button(_) => "button",
            CommandConfig::Combo(_) => "combo",
            CommandConfig::Dialog(_) => "dialog",
        }
    }

    pub fn as_command(&self) -> &dyn Command {
        match self {
            CommandConfig::Button(button) => button,
            CommandConfig::Combo(combo) => combo,
            CommandConfig::Dialog(dialog) => dialog,
        }
    }

    pub fn into_command(self) -> Box<dyn Command> {
        match self {
            CommandConfig::Button(button) => Box::new(button),
            CommandConfig::Combo(combo) => Box::new(combo),
            CommandConfig::Dialog(dialog) => Box::new(dialog),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ui_name().trim().is_empty() {
            return Err(anyhow!("{} command has an empty ui_name", self.kind()));
        }

        // Dialogs have no widget; catch them here rather than at render time
        if let CommandConfig::Dialog(_) = self {
            return Err(anyhow!(
                "command '{}': dialog commands cannot be rendered from configuration",
                self.ui_name()
            ));
        }

        Ok(())
    }
}

/// Script run when an editor event fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Event name, e.g. `selectionchange`
    pub event: String,

    /// Listener body; `{editor}` expands to the editor handle
    pub script: String,
}

/// Build the event handler from configured listeners, in file order
pub fn build_event_handler(events: &[EventConfig]) -> EventHandler {
    events.iter().fold(EventHandler::new(), |handler, event| {
        handler.on_script(event.event.as_str(), event.script.as_str())
    })
}
