//! Drop-down (combo box) commands

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::command::{Command, CommandOptions};
use crate::context::{EditorHandle, RenderContext};
use crate::error::RenderResult;
use crate::script::{ScriptValue, Template};

const COMBO_UI: Template = Template::new(
    "combo_ui",
    r#"
        var combox = new UE.ui.Combox({
            editor:editor,
            items:{{items}},
            onselect:function (t, index) {
                {{onselect}}
            },
            title:{{title}},
            initValue:{{init_value}}
        });
        return combox;
        "#,
);

/// Computes combo items at render time
pub type ItemsProvider = Arc<dyn Fn() -> Vec<serde_json::Value> + Send + Sync>;

/// A combo box whose selection runs script code
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ComboCommand {
    #[serde(flatten)]
    pub options: CommandOptions,

    /// Entries as handed to `UE.ui.Combox`, serialized verbatim
    #[serde(default)]
    pub items: Vec<serde_json::Value>,

    /// Label shown before anything is selected
    #[serde(default)]
    pub init_value: String,

    /// Selection body (`t` and `index` in scope)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_select: Option<String>,

    #[serde(skip)]
    items_provider: Option<ItemsProvider>,
}

impl fmt::Debug for ComboCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboCommand")
            .field("options", &self.options)
            .field("items", &self.items)
            .field("init_value", &self.init_value)
            .field("on_select", &self.on_select)
            .field("dynamic_items", &self.items_provider.is_some())
            .finish()
    }
}

impl ComboCommand {
    pub fn new(
        options: CommandOptions,
        items: Vec<serde_json::Value>,
        init_value: impl Into<String>,
    ) -> Self {
        Self {
            options,
            items,
            init_value: init_value.into(),
            on_select: None,
            items_provider: None,
        }
    }

    pub fn with_on_select(mut self, on_select: impl Into<String>) -> Self {
        self.on_select = Some(on_select.into());
        self
    }

    /// Recompute the items on every render instead of using the stored list
    pub fn with_items_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Vec<serde_json::Value> + Send + Sync + 'static,
    {
        self.items_provider = Some(Arc::new(provider));
        self
    }

    pub fn items(&self) -> Vec<serde_json::Value> {
        match &self.items_provider {
            Some(provider) => provider(),
            None => self.items.clone(),
        }
    }

    pub fn on_select(&self) -> String {
        self.on_select.clone().unwrap_or_default()
    }
}

impl Command for ComboCommand {
    fn options(&self) -> &CommandOptions {
        &self.options
    }

    fn render_ui(&self, _editor: &EditorHandle, _ctx: &RenderContext) -> RenderResult<String> {
        let items = serde_json::to_value(self.items())?;

        COMBO_UI.render(&[
            ("items", ScriptValue::Json(items)),
            ("onselect", ScriptValue::Code(self.on_select())),
            ("title", ScriptValue::single_quoted(self.options.title())),
            ("init_value", ScriptValue::single_quoted(self.init_value.as_str())),
        ])
    }
}
