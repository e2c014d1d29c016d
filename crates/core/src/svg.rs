//! Single-path SVG documents for download and for inlining into CSS.

use crate::color::Srgb;
use crate::format::{encode_uri_component, num};
use crate::path::Path;
use serde::Serialize;
use std::fmt::Write as _;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// An SVG document holding one filled path.
///
/// `sized` documents carry explicit `width`/`height` attributes in addition
/// to the `viewBox`; unsized ones scale to their container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub path: Path,
    pub fill: Srgb,
    pub sized: bool,
}

impl SvgDocument {
    fn open_tag(&self) -> String {
        let mut tag = String::from("<svg");
        if self.sized {
            let _ = write!(
                tag,
                " width=\"{}\" height=\"{}\"",
                num(self.width),
                num(self.height)
            );
        }
        let _ = write!(
            tag,
            " viewBox=\"0 0 {} {}\" xmlns=\"{SVG_NS}\">",
            num(self.width),
            num(self.height)
        );
        tag
    }

    fn path_element(&self) -> String {
        format!("<path d=\"{}\" fill=\"{}\" />", self.path, self.fill.to_hex())
    }

    /// Indented multi-line form, as written to a `.svg` file.
    pub fn to_pretty(&self) -> String {
        format!("{}\n  {}\n</svg>", self.open_tag(), self.path_element())
    }

    /// Single-line form for embedding.
    pub fn to_inline(&self) -> String {
        format!("{}{}</svg>", self.open_tag(), self.path_element())
    }

    /// `data:image/svg+xml,` URI of the inline form.
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml,{}", encode_uri_component(&self.to_inline()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Point;

    fn doc(sized: bool) -> SvgDocument {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(10.0, 0.0))
            .close();
        SvgDocument {
            width: 10.0,
            height: 5.0,
            path,
            fill: Srgb::from_hex("#3b82f6").unwrap(),
            sized,
        }
    }

    #[test]
    fn pretty_unsized_document_has_viewbox_only() {
        assert_eq!(
            doc(false).to_pretty(),
            "<svg viewBox=\"0 0 10 5\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
             <path d=\"M0,0 L10,0 Z\" fill=\"#3b82f6\" />\n</svg>"
        );
    }

    #[test]
    fn sized_document_carries_width_and_height() {
        let text = doc(true).to_inline();
        assert!(text.starts_with("<svg width=\"10\" height=\"5\" viewBox=\"0 0 10 5\""));
        assert!(text.ends_with("fill=\"#3b82f6\" /></svg>"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn data_uri_is_percent_encoded() {
        let uri = doc(true).data_uri();
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg%20width%3D%2210%22"));
        assert!(!uri.contains('<'));
        assert!(!uri.contains('#'));
        assert!(uri.contains("%233b82f6"));
    }
}
