use crate::cli::RenderMode;
use crate::domain::models::ReportDocument;
use askama::Template;

/// One row per folder, each holding its own table of grants.
#[derive(Template)]
#[template(path = "nested.html")]
struct NestedPage<'a> {
    doc: &'a ReportDocument,
}

/// One row per (folder, grant) pair with the folder columns repeated.
#[derive(Template)]
#[template(path = "flat.html")]
struct FlatPage<'a> {
    doc: &'a ReportDocument,
}

pub fn render(doc: &ReportDocument, mode: RenderMode) -> askama::Result<String> {
    match mode {
        RenderMode::NestedTable => render_nested(doc),
        RenderMode::FlatTable => render_flat(doc),
    }
}

pub fn render_nested(doc: &ReportDocument) -> askama::Result<String> {
    NestedPage { doc }.render()
}

pub fn render_flat(doc: &ReportDocument) -> askama::Result<String> {
    FlatPage { doc }.render()
}
