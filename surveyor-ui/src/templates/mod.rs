use mock_data::{fixtures, Accreditation, Chapter};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccreditationVm {
    pub id: String,
    pub name: String,
    pub authority: String,
    pub status: String,
    pub chapter_count: usize,
}

impl AccreditationVm {
    pub fn from_fixture(accreditation: &Accreditation) -> Self {
        Self {
            id: accreditation.id.clone(),
            name: accreditation.name.clone(),
            authority: accreditation.authority.clone(),
            status: accreditation.status.to_string(),
            chapter_count: fixtures::chapters_for(&accreditation.id).len(),
        }
    }
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChapterVm {
    pub id: String,
    pub code: String,
    pub title: String,
    pub standard_count: usize,
}

impl ChapterVm {
    pub fn from_fixture(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id.clone(),
            code: chapter.code.clone(),
            title: chapter.title.clone(),
            standard_count: fixtures::standards_for(&chapter.id).len(),
        }
    }
}

fn tojson_filter(
    value: &tera::Value,
    _: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".into());
    Ok(tera::Value::String(s))
}

pub fn register_filters(tera: &mut tera::Tera) {
    tera.register_filter("tojson", tojson_filter);
    // Back-compat alias used in templates
    tera.register_filter("json", tojson_filter);
}
