//! Mount boundary for third-party embedded widgets.
//!
//! Vendors like Tableau render themselves by scanning the DOM from an
//! injected script. All of that direct DOM work is confined to this module:
//! a page renders an empty placeholder `div` and asks an [`ExternalWidget`]
//! to mount into it. Nothing outside this module knows how a particular
//! vendor bootstraps itself.

use std::fmt;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlScriptElement, Node};

use crate::config;

/// Id of the placeholder `div` the tableau page renders.
pub const TABLEAU_PLACEHOLDER_ID: &str = "tableau-viz-placeholder";

const TABLEAU_API_SRC: &str = "https://public.tableau.com/javascripts/api/viz_v1.js";
const TABLEAU_HOST_URL: &str = "https://public.tableau.com/";

#[derive(Debug, Clone, PartialEq)]
pub enum EmbedError {
    /// The placeholder element is not in the document.
    PlaceholderMissing(String),
    /// A DOM operation failed while building the embed.
    Dom(String),
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::PlaceholderMissing(id) => {
                write!(f, "embed placeholder element #{id} not found")
            }
            EmbedError::Dom(detail) => write!(f, "DOM operation failed: {detail}"),
        }
    }
}

impl From<JsValue> for EmbedError {
    fn from(value: JsValue) -> Self {
        EmbedError::Dom(format!("{value:?}"))
    }
}

/// A third-party widget that renders itself into a placeholder element
/// already present in the document.
pub trait ExternalWidget {
    fn mount(&self, document: &Document) -> Result<(), EmbedError>;
}

/// Tableau Public viz, embedded the way Tableau's share snippet does it:
/// a hidden `<object class="tableauViz">` full of `<param>`s, resized to a
/// fixed pixel box, with the `viz_v1.js` vendor script inserted before it.
/// The script finds the object and replaces it with the live dashboard.
pub struct TableauViz {
    pub placeholder_id: &'static str,
    pub viz_name: &'static str,
    pub width_px: u32,
    pub height_px: u32,
}

impl Default for TableauViz {
    fn default() -> Self {
        Self {
            placeholder_id: TABLEAU_PLACEHOLDER_ID,
            viz_name: config::TABLEAU_VIZ_NAME,
            width_px: 1169,
            height_px: 827,
        }
    }
}

impl TableauViz {
    /// Static preview image Tableau Public serves for a viz, keyed by the
    /// first two characters of the workbook name.
    pub fn static_image_url(&self) -> String {
        let prefix: String = self.viz_name.chars().take(2).collect();
        format!(
            "https://public.tableau.com/static/images/{}/{}/1.png",
            prefix, self.viz_name
        )
    }

    /// The `<param>` set the vendor script reads off the `<object>`.
    pub fn object_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("host_url", urlencoding::encode(TABLEAU_HOST_URL).into_owned()),
            ("embed_code_version", "3".to_string()),
            ("site_root", String::new()),
            ("name", self.viz_name.to_string()),
            ("tabs", "no".to_string()),
            ("toolbar", "yes".to_string()),
            ("static_image", self.static_image_url()),
            ("animate_transition", "yes".to_string()),
            ("display_static_image", "yes".to_string()),
            ("display_spinner", "yes".to_string()),
            ("display_overlay", "yes".to_string()),
            ("display_count", "yes".to_string()),
            ("language", "en-US".to_string()),
        ]
    }
}

impl ExternalWidget for TableauViz {
    fn mount(&self, document: &Document) -> Result<(), EmbedError> {
        let placeholder = document
            .get_element_by_id(self.placeholder_id)
            .ok_or_else(|| EmbedError::PlaceholderMissing(self.placeholder_id.to_string()))?;

        // The vendor script unhides the object once it takes over.
        let object: HtmlElement = document
            .create_element("object")?
            .dyn_into()
            .map_err(|_| EmbedError::Dom("object element cast".to_string()))?;
        object.set_class_name("tableauViz");
        let style = object.style();
        style.set_property("display", "none")?;
        style.set_property("width", &format!("{}px", self.width_px))?;
        style.set_property("height", &format!("{}px", self.height_px))?;

        for (name, value) in self.object_params() {
            let param = document.create_element("param")?;
            param.set_attribute("name", name)?;
            param.set_attribute("value", &value)?;
            object.append_child(&param)?;
        }

        placeholder.append_child(&object)?;

        let script: HtmlScriptElement = document
            .create_element("script")?
            .dyn_into()
            .map_err(|_| EmbedError::Dom("script element cast".to_string()))?;
        script.set_src(TABLEAU_API_SRC);

        let object_node: &Node = object.as_ref();
        placeholder.insert_before(script.as_ref(), Some(object_node))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viz_matches_published_dashboard() {
        let viz = TableauViz::default();
        assert_eq!(viz.viz_name, "Finalproject1tableau/Dashboard2");
        assert_eq!((viz.width_px, viz.height_px), (1169, 827));
    }

    #[test]
    fn static_image_url_uses_two_char_prefix() {
        let viz = TableauViz::default();
        assert_eq!(
            viz.static_image_url(),
            "https://public.tableau.com/static/images/Fi/Finalproject1tableau/Dashboard2/1.png"
        );
    }

    #[test]
    fn object_params_carry_encoded_host_and_name() {
        let viz = TableauViz::default();
        let params = viz.object_params();

        let lookup = |key: &str| {
            params
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.clone())
        };

        assert_eq!(
            lookup("host_url").as_deref(),
            Some("https%3A%2F%2Fpublic.tableau.com%2F")
        );
        assert_eq!(lookup("embed_code_version").as_deref(), Some("3"));
        assert_eq!(lookup("name").as_deref(), Some("Finalproject1tableau/Dashboard2"));
        assert_eq!(lookup("tabs").as_deref(), Some("no"));
        assert_eq!(lookup("toolbar").as_deref(), Some("yes"));
    }

    #[test]
    fn missing_placeholder_renders_readable_error() {
        let err = EmbedError::PlaceholderMissing(TABLEAU_PLACEHOLDER_ID.to_string());
        assert_eq!(
            err.to_string(),
            "embed placeholder element #tableau-viz-placeholder not found"
        );
    }
}
