//! ZIP container disambiguation for OOXML office packages.
//!
//! Word, Excel and PowerPoint packages share the ZIP envelope and differ
//! only in the folder their content parts live under (`word/`, `xl/`,
//! `ppt/`). When the first local file header already names such a part the
//! answer is immediate. When it names packaging metadata instead
//! (`[Content_Types].xml` or `_rels/.rels`), we hop forward through a small,
//! bounded number of local file headers looking for the content folder.
//!
//! This is a front-of-file heuristic, not a central-directory parse. It can
//! be fooled by packages that put more bookkeeping entries ahead of content
//! than the hop limit allows, and that imprecision is accepted in exchange
//! for classifying from the first few kilobytes only.

use super::config::ContainerScanConfig;
use super::signatures::{at, ZIP_MAGIC};
use memchr::memmem;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Offset of the file name in the first local file header.
const NAME_OFFSET: usize = 0x1e;

/// Offset of the compressed-size field in the first local file header.
/// Read big-endian, matching the signature tables this heuristic descends from.
const FIRST_SIZE_OFFSET: usize = 18;

/// Length of a local file header up to the start of its name.
const LFH_LEN: usize = 30;

/// Fixed local-file-header bytes that follow the magic and precede the name.
const LFH_FIXED_LEN: usize = 26;

const CONTENT_TYPES: &[u8] = b"[Content_Types].xml";
const PACKAGE_RELS: &[u8] = b"_rels/.rels";

/// The three OOXML document families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficeFamily {
    /// WordprocessingML (`.docx`)
    Document,
    /// SpreadsheetML (`.xlsx`)
    Spreadsheet,
    /// PresentationML (`.pptx`)
    Presentation,
}

impl OfficeFamily {
    pub const ALL: [OfficeFamily; 3] = [
        OfficeFamily::Presentation,
        OfficeFamily::Spreadsheet,
        OfficeFamily::Document,
    ];

    /// Part-name prefix that identifies the family inside the package.
    pub fn fragment(self) -> &'static [u8] {
        match self {
            OfficeFamily::Document => b"word/",
            OfficeFamily::Spreadsheet => b"xl/",
            OfficeFamily::Presentation => b"ppt/",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OfficeFamily::Document => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            OfficeFamily::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            OfficeFamily::Presentation => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }
}

/// Does `data` start with a ZIP local file header?
pub fn is_zip(data: &[u8]) -> bool {
    at(data, 0, &ZIP_MAGIC)
}

fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes(bytes.try_into().ok()?))
}

/// Find the next local file header in `[from, from + window)` and return
/// the offset of its file name.
fn next_entry_name(data: &[u8], from: usize, window: usize) -> Option<usize> {
    let end = from.saturating_add(window).min(data.len());
    if from >= end {
        return None;
    }
    let idx = memmem::find(&data[from..end], &ZIP_MAGIC)?;
    Some(from + idx + ZIP_MAGIC.len() + LFH_FIXED_LEN)
}

/// Is `data` an OOXML package of the given family?
pub fn is_office_package(
    data: &[u8],
    family: OfficeFamily,
    config: &ContainerScanConfig,
) -> bool {
    let fragment = family.fragment();

    if !is_zip(data) {
        return false;
    }

    if at(data, NAME_OFFSET, fragment) {
        return true;
    }

    let Some(first_name) = [CONTENT_TYPES, PACKAGE_RELS]
        .into_iter()
        .find(|name| at(data, NAME_OFFSET, name))
    else {
        return false;
    };

    let Some(size) = read_u32_be(data, FIRST_SIZE_OFFSET) else {
        return false;
    };
    // The second header starts right after the first entry's name and body
    let mut cursor = (size as usize).saturating_add(LFH_LEN + first_name.len());

    for hop in 1..=config.max_hops {
        let Some(name) = next_entry_name(data, cursor, config.scan_window) else {
            trace!(?family, hop, cursor, "no further local file header in scan window");
            return false;
        };
        cursor = name;
        if at(data, cursor, fragment) {
            trace!(?family, hop, offset = cursor, "office content part found");
            return true;
        }
    }

    false
}

/// Classify `data` as one of the office families, if any.
pub fn detect_office_family(data: &[u8], config: &ContainerScanConfig) -> Option<OfficeFamily> {
    OfficeFamily::ALL
        .into_iter()
        .find(|&family| is_office_package(data, family, config))
}
