use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub buttons: Vec<Button>,
}

/// One button on the board: a label and the destination it redirects to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Button {
    pub label: Option<String>,
    pub url: Option<String>,
}

impl Button {
    /// The navigation target. A button declared without a `url` resolves to
    /// the literal `undefined`, which then appears in both the status message
    /// and the navigation request.
    pub fn target(&self) -> &str {
        self.url.as_deref().unwrap_or("undefined")
    }

    /// Label for display, falling back to the target when none is set.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.target())
    }
}
