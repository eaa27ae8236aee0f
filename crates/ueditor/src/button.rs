//! Toolbar button commands

use serde::{Deserialize, Serialize};

use crate::command::{Command, CommandOptions};
use crate::context::{EditorHandle, RenderContext};
use crate::error::RenderResult;
use crate::script::{ScriptValue, Template};

const BUTTON_UI: Template = Template::new(
    "button_ui",
    r#"
            var btn = new UE.ui.Button({
                name: uiName,
                title: {{title}},
                cssRules: {{css_rules}},
                onclick: function() {
                    {{onclick}}
                }
            });
            return btn
        "#,
);

/// Click body used when none is configured
pub const DEFAULT_ON_CLICK: &str = "editor.execCommand(uiName);";

/// A button that runs its own command when clicked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonCommand {
    #[serde(flatten)]
    pub options: CommandOptions,

    /// Icon path relative to the media base URL
    #[serde(default)]
    pub icon: String,

    /// Click body, `editor.execCommand(uiName);` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
}

impl ButtonCommand {
    pub fn new(options: CommandOptions, icon: impl Into<String>) -> Self {
        Self {
            options,
            icon: icon.into(),
            on_click: None,
        }
    }

    pub fn with_on_click(mut self, on_click: impl Into<String>) -> Self {
        self.on_click = Some(on_click.into());
        self
    }

    pub fn on_click(&self) -> String {
        self.on_click
            .clone()
            .unwrap_or_else(|| DEFAULT_ON_CLICK.to_string())
    }

    /// Widget fragment for an arbitrary click body
    ///
    /// Exposed so wrapping commands can reuse the button widget with their
    /// own click behavior.
    pub fn render_button(&self, on_click: String, ctx: &RenderContext) -> RenderResult<String> {
        let css_rules = format!(
            "background-image:url('{}')!important;",
            ctx.media(&self.icon)
        );

        BUTTON_UI.render(&[
            ("title", ScriptValue::string(self.options.title())),
            ("css_rules", ScriptValue::Str(css_rules)),
            ("onclick", ScriptValue::Code(on_click)),
        ])
    }
}

impl Command for ButtonCommand {
    fn options(&self) -> &CommandOptions {
        &self.options
    }

    fn render_ui(&self, _editor: &EditorHandle, ctx: &RenderContext) -> RenderResult<String> {
        self.render_button(self.on_click(), ctx)
    }
}
