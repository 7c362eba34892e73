//! Word-compatible document export.
//!
//! Documents are plain HTML pages with a print style sheet, saved with a
//! `.doc` extension so word processors open them directly. Every value coming
//! from the model or the user is HTML-escaped by the template engine.

mod templates;

use crate::constants::AUTHOR_CREDIT;
use crate::error::Result;
use crate::records::{LessonPlanDocument, ObjectiveRecord, SequenceRecord, SessionInfo};
use handlebars::{Handlebars, handlebars_helper};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Longest objective prefix used in a lesson plan's file name.
const PLAN_FILENAME_CHARS: usize = 30;

handlebars_helper!(minutes: |value: f64| format_minutes(value));

/// Whole minutes print without a fractional part.
pub fn format_minutes(value: f64) -> String {
    if value.is_finite() && value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// A rendered document ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub filename: String,
    pub html: String,
}

impl ExportedDocument {
    /// Writes the document into `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.html)?;
        debug!(path = %path.display(), bytes = self.html.len(), "Document written");
        Ok(path)
    }
}

/// Renders the three document kinds.
#[derive(Debug)]
pub struct DocumentRenderer {
    registry: Handlebars<'static>,
}

impl DocumentRenderer {
    /// Compiles the built-in templates.
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_helper("minutes", Box::new(minutes));
        registry.register_partial("info_panel", templates::INFO_PANEL)?;
        registry.register_template_string("page", templates::PAGE)?;
        registry.register_template_string("objectives", templates::OBJECTIVES)?;
        registry.register_template_string("sequence", templates::SEQUENCE)?;
        registry.register_template_string("plan", templates::PLAN)?;
        Ok(Self { registry })
    }

    /// Body of the learning-objectives document.
    pub fn render_objectives_html(&self, info: &SessionInfo, objectives: &[ObjectiveRecord]) -> Result<String> {
        let data = json!({"credit": AUTHOR_CREDIT, "info": info, "objectives": objectives});
        Ok(self.registry.render("objectives", &data)?)
    }

    /// Body of the learning-sequence document.
    pub fn render_sequence_html(&self, info: &SessionInfo, sequence: &[SequenceRecord]) -> Result<String> {
        let data = json!({"credit": AUTHOR_CREDIT, "info": info, "sequence": sequence});
        Ok(self.registry.render("sequence", &data)?)
    }

    /// Body of the lesson-plan document.
    pub fn render_plan_html(&self, plan: &LessonPlanDocument) -> Result<String> {
        let data = json!({"credit": AUTHOR_CREDIT, "plan": plan});
        Ok(self.registry.render("plan", &data)?)
    }

    /// Wraps a body in a complete page carrying the print style sheet.
    pub fn wrap_document(&self, title: &str, body: &str) -> Result<String> {
        let data = json!({"title": title, "style": templates::STYLE, "body": body});
        Ok(self.registry.render("page", &data)?)
    }

    pub fn export_objectives(&self, info: &SessionInfo, objectives: &[ObjectiveRecord]) -> Result<ExportedDocument> {
        let filename = objectives_filename(&info.subject);
        let html = self.wrap_document(&filename, &self.render_objectives_html(info, objectives)?)?;
        Ok(ExportedDocument { filename, html })
    }

    pub fn export_sequence(&self, info: &SessionInfo, sequence: &[SequenceRecord]) -> Result<ExportedDocument> {
        let filename = sequence_filename(&info.subject);
        let html = self.wrap_document(&filename, &self.render_sequence_html(info, sequence)?)?;
        Ok(ExportedDocument { filename, html })
    }

    /// `objective` is the selected objective's text; it names the file.
    pub fn export_plan(&self, objective: &str, plan: &LessonPlanDocument) -> Result<ExportedDocument> {
        let filename = plan_filename(objective);
        let html = self.wrap_document(&filename, &self.render_plan_html(plan)?)?;
        Ok(ExportedDocument { filename, html })
    }
}

/// Characters that cannot appear inside a single file-name component.
const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Whitespace, path separators and other reserved characters become `_`,
/// so the result never leaves the output directory.
fn file_component(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() || c.is_control() || RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

pub fn objectives_filename(subject: &str) -> String {
    format!("Tujuan_Pembelajaran_{}.doc", file_component(subject))
}

pub fn sequence_filename(subject: &str) -> String {
    format!("Alur_Tujuan_Pembelajaran_{}.doc", file_component(subject))
}

/// `PPM_` plus the first 30 characters of the objective, or `Tanpa_Judul`.
pub fn plan_filename(objective: &str) -> String {
    let prefix: String = objective.chars().take(PLAN_FILENAME_CHARS).collect();
    if prefix.is_empty() {
        "PPM_Tanpa_Judul.doc".to_string()
    } else {
        format!("PPM_{}.doc", file_component(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionInput;

    fn objective(no: u32, text: &str) -> ObjectiveRecord {
        ObjectiveRecord {
            no,
            standard: "CP <ekosistem>".to_string(),
            content: "Konten".to_string(),
            competency: "Kompetensi".to_string(),
            topic: "Materi".to_string(),
            objective: text.to_string(),
        }
    }

    #[test]
    fn test_filenames() {
        assert_eq!(objectives_filename("Ilmu Pengetahuan Alam"), "Tujuan_Pembelajaran_Ilmu_Pengetahuan_Alam.doc");
        assert_eq!(sequence_filename("IPA"), "Alur_Tujuan_Pembelajaran_IPA.doc");
        assert_eq!(
            plan_filename("Peserta didik mampu menjelaskan siklus air dengan benar"),
            "PPM_Peserta_didik_mampu_menjelaska.doc"
        );
        assert_eq!(plan_filename(""), "PPM_Tanpa_Judul.doc");
    }

    #[test]
    fn test_filenames_are_single_path_components() {
        assert_eq!(
            plan_filename("Menjelaskan dan/atau menganalisis"),
            "PPM_Menjelaskan_dan_atau_menganali.doc"
        );
        assert_eq!(objectives_filename("x/../../../escaped"), "Tujuan_Pembelajaran_x_.._.._.._escaped.doc");
        assert_eq!(sequence_filename("a\\b:c*d?\"e<f>g|h\0"), "Alur_Tujuan_Pembelajaran_a_b_c_d_e_f_g_h_.doc");
        for name in [
            plan_filename("Menjelaskan dan/atau menganalisis"),
            objectives_filename("x/../../../escaped"),
        ] {
            assert_eq!(std::path::Path::new(&name).components().count(), 1);
        }
    }

    #[test]
    fn test_write_to_stays_inside_output_dir() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("a").join("b").join("out");
        let renderer = DocumentRenderer::new().unwrap();
        let mut info = SessionInput::template().info;
        info.subject = "x/../../../escaped".to_string();

        let path = renderer.export_objectives(&info, &[]).unwrap().write_to(&out).unwrap();
        assert_eq!(path.parent(), Some(out.as_path()));
        assert!(path.exists());

        let plan_doc = ExportedDocument { filename: plan_filename("Menjelaskan dan/atau menganalisis"), html: String::new() };
        let path = plan_doc.write_to(&out).unwrap();
        assert_eq!(path.parent(), Some(out.as_path()));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(10.0), "10");
        assert_eq!(format_minutes(12.5), "12.5");
    }

    #[test]
    fn test_objectives_document_escapes_model_text() {
        let renderer = DocumentRenderer::new().unwrap();
        let info = SessionInput::template().info;
        let body = renderer
            .render_objectives_html(&info, &[objective(1, "Menjelaskan <script>alert(1)</script>")])
            .unwrap();

        assert!(body.contains("Tujuan Pembelajaran (TP) Mendalam"));
        assert!(body.contains(AUTHOR_CREDIT));
        assert!(body.contains("Informasi Pembelajaran:"));
        assert!(body.contains("D / VII"));
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
        assert!(body.contains("CP &lt;ekosistem&gt;"));
        assert!(body.contains("*Uraian ini dapat digunakan"));
    }

    #[test]
    fn test_wrap_document_carries_style_and_raw_body() {
        let renderer = DocumentRenderer::new().unwrap();
        let page = renderer.wrap_document("A & B.doc", "<p>isi</p>").unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>A &amp; B.doc</title>"));
        assert!(page.contains(".section-break { page-break-before: always; }"));
        assert!(page.contains("font-family: 'Times New Roman', Times, serif; margin: 1in;"));
        assert!(page.contains("<p>isi</p>"));
    }

    #[test]
    fn test_export_writes_doc_file() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = DocumentRenderer::new().unwrap();
        let info = SessionInput::template().info;

        let doc = renderer.export_objectives(&info, &[objective(1, "TP")]).unwrap();
        let path = doc.write_to(dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "Tujuan_Pembelajaran_Ilmu_Pengetahuan_Alam.doc");
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("<td>TP</td>"));
    }
}
