//! Render inputs: the editor handle and the media base URL

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::{Position, Url};

use crate::error::{RenderError, RenderResult};

/// Identifier of the editor instance the generated script attaches to
///
/// Any non-empty string is accepted: `UE.registerUI` only sees the handle as
/// a quoted string literal. Event listeners emit it as a bare identifier
/// (`editor.addListener(...)`), so [`EventHandler::render`] additionally
/// requires [`EditorHandle::is_identifier`].
///
/// [`EventHandler::render`]: crate::EventHandler::render
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EditorHandle(String);

impl EditorHandle {
    pub fn new(handle: impl Into<String>) -> RenderResult<Self> {
        let handle = handle.into();
        if handle.trim().is_empty() {
            return Err(RenderError::InvalidEditorHandle(handle));
        }
        Ok(Self(handle))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the handle can be emitted as a bare JavaScript identifier
    pub fn is_identifier(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
            _ => return false,
        }
        chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    }

    /// The handle, or an error when it is not usable as an identifier
    pub fn require_identifier(&self) -> RenderResult<&str> {
        if self.is_identifier() {
            Ok(&self.0)
        } else {
            Err(RenderError::InvalidEditorHandle(self.0.clone()))
        }
    }
}

impl fmt::Display for EditorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EditorHandle {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EditorHandle> for String {
    fn from(handle: EditorHandle) -> Self {
        handle.0
    }
}

/// Origin that scheme-less bases are resolved against, then stripped again
const PLACEHOLDER_ORIGIN: &str = "http://placeholder.invalid/";
const PLACEHOLDER_HOST: &str = "placeholder.invalid";

/// Parameters shared by every render call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderContext {
    /// Base URL that relative media paths (button icons) resolve against
    #[serde(default)]
    pub media_url: String,
}

impl RenderContext {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
        }
    }

    /// Join a media path onto the configured base URL
    ///
    /// Follows URL reference resolution for absolute, protocol-relative
    /// (`//host/`) and path-only (`/media/`) bases alike. Nothing is
    /// validated: an empty or malformed base simply produces an unusable URL.
    pub fn media(&self, path: &str) -> String {
        if self.media_url.is_empty() || Url::parse(path).is_ok() {
            return path.to_string();
        }

        if let Ok(base) = Url::parse(&self.media_url) {
            if let Ok(joined) = base.join(path) {
                return joined.to_string();
            }
        }

        debug!(base = %self.media_url, path, "joining media path against scheme-less base");
        let joined = Url::parse(PLACEHOLDER_ORIGIN)
            .and_then(|origin| origin.join(&self.media_url))
            .and_then(|base| base.join(path));

        match joined {
            Ok(url) if url.host_str() == Some(PLACEHOLDER_HOST) => {
                let resolved = &url[Position::BeforePath..];
                // A relative base such as `media/` keeps producing relative URLs
                if !self.media_url.starts_with('/') && !path.starts_with('/') {
                    resolved.trim_start_matches('/').to_string()
                } else {
                    resolved.to_string()
                }
            }
            // Protocol-relative base: drop only the placeholder scheme
            Ok(url) => format!("//{}", &url[Position::BeforeUsername..]),
            Err(_) => path.to_string(),
        }
    }
}
