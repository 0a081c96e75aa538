#![deny(unsafe_code)]
//! HTML shell rendering for the terragen browser client.
//!
//! The served page is a single empty mount point plus a script tag pointing
//! at the deployed client bundle. Which bundle to reference is deployment
//! configuration, so it arrives here as an explicit [`ShellConfig`] value
//! (never read from the environment), and a missing bundle renders a
//! diagnostic page instead of failing.

use serde::{Deserialize, Serialize};

/// Message rendered when no client bundle hash was configured.
const MISSING_BUNDLE_MESSAGE: &str = "No bundle file hash was specified for server.";

/// Deployment-time configuration for the client shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Content hash of the deployed client bundle; the page references
    /// `static/<hash>.js`. `None` (or empty) means no bundle was deployed.
    pub bundle_hash: Option<String>,
}

impl ShellConfig {
    /// Creates a config referencing the given bundle hash.
    pub fn new(bundle_hash: impl Into<String>) -> Self {
        Self {
            bundle_hash: Some(bundle_hash.into()),
        }
    }
}

/// Renders the browser client's bootstrap page.
///
/// With a configured bundle hash the result is the full HTML shell; with a
/// missing or empty hash it is a human-readable diagnostic, so a
/// misdeployed server still answers with something an operator can act on.
pub fn render_index(config: &ShellConfig) -> String {
    let bundle_hash = match config.bundle_hash.as_deref() {
        Some(hash) if !hash.is_empty() => hash,
        _ => return MISSING_BUNDLE_MESSAGE.to_string(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html><head><meta charset=\"utf-8\"><title>Terragen</title></head>\n\
         <body>\n\
         \t<div id=\"app\"></div>\n\
         \t<script src=\"static/{bundle_hash}.js\" type=\"text/javascript\"></script>\n\
         </body>\n\
         </html>\n"
    )
}
