use crate::core::{ClientCollection, ReportRenderer};
use std::fmt::Write;

/// One `Name: .. Address: ..` line per client.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for TextRenderer {
    fn generate(&self, clients: &ClientCollection) -> String {
        let mut out = String::new();
        for client in clients {
            let _ = writeln!(out, "Name: {} Address: {}", client.name(), client.address());
        }
        out
    }
}

const HTML_HEAD: &str = "<html><head><title>Report</title></head><body><table><thead><tr><th>Name</th><th>Address</th></tr></thead><tbody>";
const HTML_TAIL: &str = "</tbody></table></body></html>";

/// Single-line HTML table, one body row per client.
///
/// Names and addresses are written into the cells as-is; markup inside a
/// value ends up in the document unescaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for HtmlRenderer {
    fn generate(&self, clients: &ClientCollection) -> String {
        let mut out = String::from(HTML_HEAD);
        for client in clients {
            let _ = write!(
                out,
                "<tr><td>{}</td><td>{}</td></tr>",
                client.name(),
                client.address()
            );
        }
        out.push_str(HTML_TAIL);
        out
    }
}

/// Built-in report formats, chosen once when the renderer is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    Text,
    #[default]
    Html,
}

impl ReportFormat {
    pub fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            Self::Text => Box::new(TextRenderer::new()),
            Self::Html => Box::new(HtmlRenderer::new()),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
        }
    }

    pub fn default_file_name(self) -> String {
        format!("report.{}", self.extension())
    }
}
