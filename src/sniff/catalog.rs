//! The built-in signature catalog.
//!
//! Entries are evaluated in the order listed. Entries are meant to be
//! mutually exclusive; where two byte layouts genuinely overlap the more
//! specific signature is listed first (Debian package before `ar`, Canon
//! CR2 before TIFF, M4A/M4V before QuickTime). The legacy Office binaries
//! share one OLE2 header and cannot be told apart from it, so Word wins.

use super::config::{ContainerScanConfig, SniffConfig};
use super::containers::{self, OfficeFamily};
use super::signatures as sig;
use crate::core::MimeType;

/// How a catalog entry decides whether it matches.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Fixed-offset comparison over the sniff window.
    Fixed(fn(&[u8]) -> bool),
    /// Bounded local-file-header scan over the whole buffer.
    Office(OfficeFamily),
}

/// One built-in signature.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub mime: &'static str,
    pub matcher: Matcher,
}

impl Signature {
    const fn fixed(mime: &'static str, f: fn(&[u8]) -> bool) -> Self {
        Self {
            mime,
            matcher: Matcher::Fixed(f),
        }
    }

    const fn office(family: OfficeFamily, mime: &'static str) -> Self {
        Self {
            mime,
            matcher: Matcher::Office(family),
        }
    }

    /// Evaluate against the full buffer; fixed matchers see only `window`.
    pub fn matches(&self, window: &[u8], full: &[u8], scan: &ContainerScanConfig) -> bool {
        match self.matcher {
            Matcher::Fixed(f) => f(window),
            Matcher::Office(family) => containers::is_office_package(full, family, scan),
        }
    }
}

const WORD_ML: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const SPREADSHEET_ML: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PRESENTATION_ML: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Built-in signatures in evaluation order.
pub const SIGNATURES: &[Signature] = &[
    // Archives and packages
    Signature::fixed("application/epub+zip", sig::is_epub),
    Signature::office(OfficeFamily::Presentation, PRESENTATION_ML),
    Signature::office(OfficeFamily::Spreadsheet, SPREADSHEET_ML),
    Signature::office(OfficeFamily::Document, WORD_ML),
    Signature::fixed("application/x-7z-compressed", sig::is_7z),
    Signature::fixed("application/x-bzip2", sig::is_bzip2),
    Signature::fixed("application/x-compress", sig::is_unix_compress),
    Signature::fixed("application/x-deb", sig::is_deb),
    Signature::fixed("application/x-unix-archive", sig::is_unix_archive),
    Signature::fixed("application/x-lzip", sig::is_lzip),
    Signature::fixed("application/x-rpm", sig::is_rpm),
    Signature::fixed("application/x-tar", sig::is_tar),
    Signature::fixed("application/x-xz", sig::is_xz),
    Signature::fixed("application/vnd.ms-cab-compressed", sig::is_ms_cab),
    Signature::fixed("application/x-google-chrome-extension", sig::is_chrome_extension),
    // Documents and fonts
    Signature::fixed("application/msword", sig::is_ole2),
    // Same OLE2 header as msword, so these two never match. They stay so
    // the legacy Office keys remain listed in `mime_types()`.
    Signature::fixed("application/vnd.ms-excel", sig::is_ole2),
    Signature::fixed("application/vnd.ms-powerpoint", sig::is_ole2),
    Signature::fixed("application/rtf", sig::is_rtf),
    Signature::fixed("application/font-sfnt", sig::is_font_sfnt),
    Signature::fixed("application/font-woff", sig::is_font_woff),
    Signature::fixed("application/x-sqlite3", sig::is_sqlite3),
    // Executables and ROMs
    Signature::fixed("application/x-executable", sig::is_elf),
    Signature::fixed("application/x-msdownload", sig::is_ms_dos_executable),
    Signature::fixed("application/x-nintendo-nes-rom", sig::is_nes_rom),
    Signature::fixed("application/x-shockwave-flash", sig::is_shockwave_flash),
    // Audio
    Signature::fixed("audio/aac", sig::is_aac),
    Signature::fixed("audio/amr", sig::is_amr),
    Signature::fixed("audio/m4a", sig::is_m4a),
    Signature::fixed("audio/ogg", sig::is_ogg),
    Signature::fixed("audio/x-flac", sig::is_flac),
    Signature::fixed("audio/x-wav", sig::is_wav),
    // Images
    Signature::fixed("image/jp2", sig::is_jp2),
    Signature::fixed("image/x-canon-cr2", sig::is_canon_cr2),
    Signature::fixed("image/tiff", sig::is_tiff),
    Signature::fixed("image/vnd.adobe.photoshop", sig::is_photoshop),
    // Video
    Signature::fixed("video/x-m4v", sig::is_m4v),
    Signature::fixed("video/quicktime", sig::is_quicktime),
    Signature::fixed("video/mpeg", sig::is_mpeg),
    Signature::fixed("video/x-flv", sig::is_flv),
    Signature::fixed("video/x-matroska", sig::is_matroska),
    Signature::fixed("video/x-ms-wmv", sig::is_wmv),
    Signature::fixed("video/x-msvideo", sig::is_avi),
];

/// The immutable, ordered set of built-in signatures.
#[derive(Debug, Clone)]
pub struct Catalog {
    signatures: &'static [Signature],
    sniff_len: usize,
    scan: ContainerScanConfig,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&SniffConfig::default())
    }
}

impl Catalog {
    pub fn new(config: &SniffConfig) -> Self {
        Self {
            signatures: SIGNATURES,
            sniff_len: config.sniff_len,
            scan: config.container,
        }
    }

    pub fn entries(&self) -> &'static [Signature] {
        self.signatures
    }

    pub fn mime_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.signatures.iter().map(|s| s.mime)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// First signature matching `data`, in catalog order.
    pub fn find(&self, data: &[u8]) -> Option<&'static Signature> {
        let window = &data[..data.len().min(self.sniff_len)];
        self.signatures
            .iter()
            .find(|s| s.matches(window, data, &self.scan))
    }

    /// Key of the first matching signature.
    pub fn lookup(&self, data: &[u8]) -> Option<MimeType> {
        self.find(data).map(|s| MimeType::from_static(s.mime))
    }
}
