//! The command contract shared by every toolbar extension

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::{EditorHandle, RenderContext};
use crate::error::{RenderError, RenderResult};
use crate::script::{ScriptValue, Template};

const REGISTER_UI: Template = Template::new(
    "register_ui",
    r#"
        UE.registerUI({{ui_name}}, function(editor, uiName) {
            {{register_command}}
            {{ui_object}}
        },{{index}},{{editor}});
        "#,
);

const REGISTER_COMMAND: Template = Template::new(
    "register_command",
    r#"
            editor.registerCommand(uiName, {
                    {{commands}}
                });
            "#,
);

const EXEC_COMMAND: Template = Template::new(
    "exec_command",
    r#"execCommand: function() {
                    {{exec_cmd}}
                    {{exec_ajax_cmd}}
                }
            "#,
);

const QUERY_VALUE_COMMAND: Template = Template::new(
    "query_value_command",
    r#"queryCommandValue:function(){
                    {{query_value}}
                }"#,
);

const AJAX_REQUEST: Template = Template::new(
    "ajax_request",
    r#"
            UE.ajax.request( {{ajax_url}}, {
                 data: {
                     name: 'ueditor'
                 },
                 onsuccess: function ( xhr ) {{{ajax_success}}},
                 onerror: function ( xhr ){ {{ajax_error}} }
            });
        "#,
);

/// Outcome of the ajax round-trip a command issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AjaxState {
    Success,
    Error,
}

impl AjaxState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AjaxState::Success => "success",
            AjaxState::Error => "error",
        }
    }
}

/// Script bodies attached to a command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandScripts {
    /// Runs when the command executes
    #[serde(default)]
    pub execute: String,

    /// Runs when the ajax request succeeds (`xhr` in scope)
    #[serde(default)]
    pub ajax_success: String,

    /// Runs when the ajax request fails (`xhr` in scope)
    #[serde(default)]
    pub ajax_error: String,

    /// Runs when the editor queries the command value
    #[serde(default)]
    pub query_value: String,
}

/// Options common to every command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandOptions {
    /// Name the UI factory and command are registered under
    pub ui_name: String,

    /// Tooltip title, falls back to `ui_name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Toolbar position
    #[serde(default)]
    pub index: i32,

    /// Server endpoint called when the command executes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ajax_url: Option<String>,

    #[serde(default)]
    pub scripts: CommandScripts,
}

impl CommandOptions {
    pub fn new(ui_name: impl Into<String>) -> Self {
        Self {
            ui_name: ui_name.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    pub fn with_ajax_url(mut self, ajax_url: impl Into<String>) -> Self {
        self.ajax_url = Some(ajax_url.into());
        self
    }

    pub fn with_scripts(mut self, scripts: CommandScripts) -> Self {
        self.scripts = scripts;
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.ui_name)
    }

    /// The ajax endpoint, if one is configured and non-empty
    pub fn ajax_url(&self) -> Option<&str> {
        self.ajax_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// A toolbar extension registered with the editor
///
/// Implementors provide [`Command::options`] and usually
/// [`Command::render_ui`]; every other method has a default. The script
/// hooks return the configured bodies (empty unless set) and may be
/// overridden to compute code at render time.
pub trait Command: Send + Sync {
    fn options(&self) -> &CommandOptions;

    fn ui_name(&self) -> &str {
        &self.options().ui_name
    }

    fn title(&self) -> &str {
        self.options().title()
    }

    fn index(&self) -> i32 {
        self.options().index
    }

    /// Code run when the command fires
    fn on_execute_command(&self) -> String {
        self.options().scripts.execute.clone()
    }

    /// Code run for each ajax outcome
    fn on_execute_ajax_command(&self, state: AjaxState) -> String {
        let scripts = &self.options().scripts;
        match state {
            AjaxState::Success => scripts.ajax_success.clone(),
            AjaxState::Error => scripts.ajax_error.clone(),
        }
    }

    /// Code run when the editor queries the command's current value
    fn on_execute_query_value_command(&self) -> String {
        self.options().scripts.query_value.clone()
    }

    /// Build the UI widget. Must return the widget from the factory.
    fn render_ui(&self, _editor: &EditorHandle, _ctx: &RenderContext) -> RenderResult<String> {
        Err(RenderError::NotImplemented {
            ui_name: self.ui_name().to_string(),
        })
    }

    /// Ajax request issued from `execCommand`, empty without an endpoint
    fn render_ajax_command(&self) -> RenderResult<String> {
        render_ajax_command(self)
    }

    /// `editor.registerCommand(...)` block, empty when there is nothing to run
    fn render_command(&self) -> RenderResult<String> {
        render_command(self)
    }

    /// Full `UE.registerUI(...)` statement
    fn render(&self, editor: &EditorHandle, ctx: &RenderContext) -> RenderResult<String> {
        render_registration(self, editor, ctx)
    }
}

fn render_ajax_command<C: Command + ?Sized>(command: &C) -> RenderResult<String> {
    let Some(ajax_url) = command.options().ajax_url() else {
        let scripts = &command.options().scripts;
        if !scripts.ajax_success.is_empty() || !scripts.ajax_error.is_empty() {
            warn!(
                ui_name = command.ui_name(),
                "ajax scripts configured without an ajax_url; skipping ajax request"
            );
        }
        return Ok(String::new());
    };

    AJAX_REQUEST.render(&[
        ("ajax_url", ScriptValue::single_quoted(ajax_url)),
        (
            "ajax_success",
            ScriptValue::code(command.on_execute_ajax_command(AjaxState::Success)),
        ),
        (
            "ajax_error",
            ScriptValue::code(command.on_execute_ajax_command(AjaxState::Error)),
        ),
    ])
}

fn render_command<C: Command + ?Sized>(command: &C) -> RenderResult<String> {
    let exec_cmd = command.on_execute_command();
    let exec_ajax_cmd = command.render_ajax_command()?;
    let query_value = command.on_execute_query_value_command();

    let mut commands = Vec::new();

    if !exec_cmd.is_empty() || !exec_ajax_cmd.is_empty() {
        commands.push(EXEC_COMMAND.render(&[
            ("exec_cmd", ScriptValue::Code(exec_cmd)),
            ("exec_ajax_cmd", ScriptValue::Code(exec_ajax_cmd)),
        ])?);
    }

    if !query_value.is_empty() {
        commands.push(QUERY_VALUE_COMMAND.render(&[("query_value", ScriptValue::Code(query_value))])?);
    }

    if commands.is_empty() {
        return Ok(String::new());
    }

    REGISTER_COMMAND.render(&[("commands", ScriptValue::Code(commands.join(",")))])
}

fn render_registration<C: Command + ?Sized>(
    command: &C,
    editor: &EditorHandle,
    ctx: &RenderContext,
) -> RenderResult<String> {
    debug!(ui_name = command.ui_name(), editor = %editor, "rendering command");

    let register_command = command.render_command()?;
    let ui_object = command.render_ui(editor, ctx)?;

    REGISTER_UI.render(&[
        ("ui_name", ScriptValue::string(command.ui_name())),
        ("register_command", ScriptValue::Code(register_command)),
        ("ui_object", ScriptValue::Code(ui_object)),
        ("index", ScriptValue::Number(i64::from(command.index()))),
        ("editor", ScriptValue::string(editor.as_str())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        options: CommandOptions,
    }

    impl Command for Plain {
        fn options(&self) -> &CommandOptions {
            &self.options
        }

        fn render_ui(&self, _editor: &EditorHandle, _ctx: &RenderContext) -> RenderResult<String> {
            Ok("return null;".to_string())
        }
    }

    struct Bare {
        options: CommandOptions,
    }

    impl Command for Bare {
        fn options(&self) -> &CommandOptions {
            &self.options
        }
    }

    fn editor() -> EditorHandle {
        EditorHandle::new("editor").unwrap()
    }

    #[test]
    fn test_render_without_bodies_omits_command_block() {
        let command = Plain {
            options: CommandOptions::new("plain").with_index(3),
        };
        let script = command.render(&editor(), &RenderContext::default()).unwrap();

        assert!(script.contains("UE.registerUI(\"plain\", function(editor, uiName) {"));
        assert!(script.contains("},3,\"editor\");"));
        assert!(script.contains("return null;"));
        assert!(!script.contains("registerCommand"));
        assert!(!script.contains("{{"));
    }

    #[test]
    fn test_execute_body_is_followed_by_ajax() {
        let command = Plain {
            options: CommandOptions::new("save")
                .with_ajax_url("/api/save/")
                .with_scripts(CommandScripts {
                    execute: "editor.fireEvent('saving');".to_string(),
                    ajax_success: "alert('saved');".to_string(),
                    ajax_error: "alert('failed');".to_string(),
                    ..CommandScripts::default()
                }),
        };
        let script = command.render(&editor(), &RenderContext::default()).unwrap();

        assert!(script.contains("editor.registerCommand(uiName, {"));
        let exec = script.find("editor.fireEvent('saving');").unwrap();
        let ajax = script.find("UE.ajax.request( '/api/save/', {").unwrap();
        assert!(exec < ajax);
        assert!(script.contains("name: 'ueditor'"));
        assert!(script.contains("onsuccess: function ( xhr ) {alert('saved');},"));
        assert!(script.contains("onerror: function ( xhr ){ alert('failed'); }"));
        assert!(!script.contains("queryCommandValue"));
    }

    #[test]
    fn test_ajax_alone_registers_command() {
        let command = Plain {
            options: CommandOptions::new("ping").with_ajax_url("/api/ping/"),
        };
        let block = command.render_command().unwrap();
        assert!(block.contains("execCommand: function() {"));
        assert!(block.contains("UE.ajax.request("));
    }

    #[test]
    fn test_empty_ajax_url_degrades_silently() {
        let command = Plain {
            options: CommandOptions::new("noop").with_ajax_url(""),
        };
        assert_eq!(command.render_ajax_command().unwrap(), "");
        assert_eq!(command.render_command().unwrap(), "");
    }

    #[test]
    fn test_query_value_only() {
        let command = Plain {
            options: CommandOptions::new("state").with_scripts(CommandScripts {
                query_value: "return 1;".to_string(),
                ..CommandScripts::default()
            }),
        };
        let block = command.render_command().unwrap();
        assert!(block.contains("queryCommandValue:function(){"));
        assert!(!block.contains("execCommand"));
    }

    #[test]
    fn test_exec_and_query_value_are_comma_joined() {
        let command = Plain {
            options: CommandOptions::new("both").with_scripts(CommandScripts {
                execute: "run();".to_string(),
                query_value: "return 0;".to_string(),
                ..CommandScripts::default()
            }),
        };
        let block = command.render_command().unwrap();
        let exec = block.find("execCommand").unwrap();
        let query = block.find(",queryCommandValue").unwrap();
        assert!(exec < query);
    }

    #[test]
    fn test_base_render_ui_is_not_implemented() {
        let command = Bare {
            options: CommandOptions::new("bare"),
        };
        match command.render(&editor(), &RenderContext::default()) {
            Err(RenderError::NotImplemented { ui_name }) => assert_eq!(ui_name, "bare"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_title_defaults_to_ui_name() {
        let options = CommandOptions::new("bold");
        assert_eq!(options.title(), "bold");
        assert_eq!(options.with_title("Bold").title(), "Bold");
    }

    #[test]
    fn test_ui_name_is_escaped() {
        let command = Plain {
            options: CommandOptions::new("a\"b"),
        };
        let script = command.render(&editor(), &RenderContext::default()).unwrap();
        assert!(script.contains("UE.registerUI(\"a\\\"b\","));
    }
}
