//! Registry of commands and event listeners rendered together

use tracing::{debug, info};

use crate::command::Command;
use crate::context::{EditorHandle, RenderContext};
use crate::error::RenderResult;
use crate::events::EventHandler;

/// Error raised when two commands share a `ui_name`
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("command '{0}' is already registered")]
pub struct DuplicateCommand(pub String);

/// Every extension attached to one editor instance
#[derive(Default)]
pub struct ExtensionRegistry {
    commands: Vec<Box<dyn Command>>,
    events: EventHandler,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command; names must be unique
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), DuplicateCommand> {
        if self.contains(command.ui_name()) {
            return Err(DuplicateCommand(command.ui_name().to_string()));
        }

        debug!(ui_name = command.ui_name(), "registered command");
        self.commands.push(command);
        Ok(())
    }

    pub fn contains(&self, ui_name: &str) -> bool {
        self.commands.iter().any(|c| c.ui_name() == ui_name)
    }

    pub fn set_events(&mut self, events: EventHandler) {
        self.events = events;
    }

    pub fn events(&self) -> &EventHandler {
        &self.events
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render all command registrations followed by the event listeners
    pub fn render(&self, editor: &EditorHandle, ctx: &RenderContext) -> RenderResult<String> {
        let mut script = String::new();

        for command in &self.commands {
            script.push_str(&command.render(editor, ctx)?);
        }

        let listeners = self.events.render(editor)?;
        if !listeners.is_empty() {
            script.push_str(&listeners);
            script.push('\n');
        }

        info!(
            commands = self.commands.len(),
            editor = %editor,
            bytes = script.len(),
            "rendered editor extensions"
        );
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonCommand;
    use crate::command::CommandOptions;
    use crate::combo::ComboCommand;
    use crate::dialog::DialogCommand;
    use crate::error::RenderError;

    fn editor() -> EditorHandle {
        EditorHandle::new("editor").unwrap()
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(Box::new(ButtonCommand::new(CommandOptions::new("code"), "code.png")))
            .unwrap();

        let err = registry
            .register(Box::new(ComboCommand::new(CommandOptions::new("code"), Vec::new(), "")))
            .unwrap_err();
        assert_eq!(err, DuplicateCommand("code".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_render_concatenates_in_registration_order() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(Box::new(ButtonCommand::new(CommandOptions::new("first"), "a.png")))
            .unwrap();
        registry
            .register(Box::new(ComboCommand::new(CommandOptions::new("second"), Vec::new(), "")))
            .unwrap();
        registry.set_events(EventHandler::new().on_script("selectionchange", "sync();"));

        let script = registry.render(&editor(), &RenderContext::new("/media/")).unwrap();

        assert_eq!(script.matches("UE.registerUI(").count(), 2);
        let first = script.find("UE.registerUI(\"first\"").unwrap();
        let second = script.find("UE.registerUI(\"second\"").unwrap();
        let listener = script.find("editor.addListener('selectionchange'").unwrap();
        assert!(first < second);
        assert!(second < listener);
    }

    #[test]
    fn test_dialog_fails_whole_render() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(Box::new(DialogCommand::new(CommandOptions::new("dialog"))))
            .unwrap();

        assert!(matches!(
            registry.render(&editor(), &RenderContext::default()),
            Err(RenderError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_empty_registry_renders_empty_script() {
        let registry = ExtensionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.render(&editor(), &RenderContext::default()).unwrap(), "");
    }
}
