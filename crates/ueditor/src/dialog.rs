//! Dialog commands
//!
//! A dialog has no widget of its own yet: it carries the common options and
//! keeps the unimplemented `render_ui`, so rendering one fails with
//! [`RenderError::NotImplemented`](crate::RenderError::NotImplemented).
//! Wrap it in a type that provides `render_ui` to make it usable.

use serde::{Deserialize, Serialize};

use crate::command::{Command, CommandOptions};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogCommand {
    #[serde(flatten)]
    pub options: CommandOptions,
}

impl DialogCommand {
    pub fn new(options: CommandOptions) -> Self {
        Self { options }
    }
}

impl Command for DialogCommand {
    fn options(&self) -> &CommandOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{EditorHandle, RenderContext};
    use crate::error::{RenderError, RenderResult};

    #[test]
    fn test_render_is_not_implemented() {
        let dialog = DialogCommand::new(CommandOptions::new("attachment"));
        let result = dialog.render(
            &EditorHandle::new("editor").unwrap(),
            &RenderContext::default(),
        );

        match result {
            Err(RenderError::NotImplemented { ui_name }) => assert_eq!(ui_name, "attachment"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    struct PreviewDialog {
        inner: DialogCommand,
    }

    impl Command for PreviewDialog {
        fn options(&self) -> &CommandOptions {
            &self.inner.options
        }

        fn render_ui(&self, _editor: &EditorHandle, _ctx: &RenderContext) -> RenderResult<String> {
            Ok("return new UE.ui.Dialog({editor: editor, name: uiName});".to_string())
        }
    }

    #[test]
    fn test_wrapped_dialog_renders() {
        let dialog = PreviewDialog {
            inner: DialogCommand::new(CommandOptions::new("preview")),
        };
        let script = dialog
            .render(
                &EditorHandle::new("editor").unwrap(),
                &RenderContext::default(),
            )
            .unwrap();
        assert!(script.contains("new UE.ui.Dialog"));
    }
}
