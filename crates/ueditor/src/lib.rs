//! UEditor extension script generation
//!
//! Toolbar commands (buttons, combo boxes, dialogs) and lifecycle event
//! listeners are rendered into the JavaScript the editor runtime executes
//! to register them.

pub mod button;
pub mod combo;
pub mod command;
pub mod context;
pub mod dialog;
pub mod error;
pub mod events;
pub mod registry;
pub mod script;

pub use button::ButtonCommand;
pub use combo::{ComboCommand, ItemsProvider};
pub use command::{AjaxState, Command, CommandOptions, CommandScripts};
pub use context::{EditorHandle, RenderContext};
pub use dialog::DialogCommand;
pub use error::{RenderError, RenderResult};
pub use events::{EventHandler, EventHook};
pub use registry::{DuplicateCommand, ExtensionRegistry};
