//! Master file display decoration
//!
//! Pages are stored bare; thumbnail, viewer link and page number are
//! computed per response and never persisted.

use serde::Serialize;

use crate::config::ExternalSystems;
use crate::traits::MasterFile;

/// A master file decorated for display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageImage {
    pub id: i64,
    pub pid: String,
    pub filename: String,
    pub title: String,
    pub description: String,

    #[serde(rename = "unitID")]
    pub unit_id: i64,

    #[serde(rename = "metadataPID", skip_serializing_if = "Option::is_none")]
    pub metadata_pid: Option<String>,

    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,

    #[serde(rename = "viewerURL")]
    pub viewer_url: String,

    pub page_num: u32,
}

/// Decorate a component's master files, preserving arrival (filename) order
pub fn decorate(systems: &ExternalSystems, files: Vec<MasterFile>) -> Vec<PageImage> {
    files
        .into_iter()
        .enumerate()
        .map(|(position, file)| decorate_one(systems, position, file))
        .collect()
}

fn decorate_one(systems: &ExternalSystems, position: usize, file: MasterFile) -> PageImage {
    let page_num = match page_sequence(&file.filename) {
        Some(num) => num,
        None => {
            tracing::warn!(
                master_file = file.id,
                filename = %file.filename,
                "no page sequence in filename, falling back to list position"
            );
            (position + 1) as u32
        }
    };

    let thumbnail_url = format!(
        "{}/{}/full/!240,385/0/default.jpg",
        systems.iiif_url, file.pid
    );

    let viewer_url = match &file.metadata {
        Some(metadata) => {
            let mut url = format!(
                "{}/view/{}?unit={}",
                systems.viewer_url, metadata.pid, file.unit_id
            );
            // The first page is the viewer's default; only later pages carry
            // an explicit page parameter.
            if position > 0 {
                url.push_str(&format!("&page={page_num}"));
            }
            url
        }
        // Unpublished pages link straight to the full-size image.
        None => format!("{}/{}/full/full/0/default.jpg", systems.iiif_url, file.pid),
    };

    PageImage {
        id: file.id,
        pid: file.pid,
        filename: file.filename,
        title: file.title,
        description: file.description,
        unit_id: file.unit_id,
        metadata_pid: file.metadata.map(|metadata| metadata.pid),
        thumbnail_url,
        viewer_url,
        page_num,
    }
}

/// Numeric sequence token from a `<name>_<NNNN>.<ext>` filename
///
/// Taken from after the last `_`, up to the first `.`. Filenames are not
/// guaranteed well-formed; `None` sends the caller to the positional
/// fallback.
fn page_sequence(filename: &str) -> Option<u32> {
    let (_, tail) = filename.rsplit_once('_')?;
    let token = match tail.split_once('.') {
        Some((token, _)) => token,
        None => tail,
    };
    token.parse().ok()
}
