//! Office package disambiguation through the public `sniff` entry point.

use magicsniff::sniff::containers::{detect_office_family, OfficeFamily};
use magicsniff::sniff::{ContainerScanConfig, SniffConfig};
use magicsniff::Sniffer;

use crate::common::mime::*;
use crate::common::samples::*;

#[test]
fn test_content_part_first() {
    let sniffer = Sniffer::new();

    let pptx = zip_package(&[("ppt/presentation.xml", b"<p:presentation/>")]);
    assert_eq!(sniffer.sniff(&pptx), PPTX);

    let xlsx = zip_package(&[("xl/workbook.xml", b"<workbook/>")]);
    assert_eq!(sniffer.sniff(&xlsx), XLSX);

    let docx = zip_package(&[("word/document.xml", b"<w:document/>")]);
    assert_eq!(sniffer.sniff(&docx), DOCX);
}

#[test]
fn test_content_part_after_packaging_entries() {
    let sniffer = Sniffer::new();
    assert_eq!(sniffer.sniff(&ooxml_package("word/document.xml")), DOCX);
    assert_eq!(sniffer.sniff(&ooxml_package("xl/workbook.xml")), XLSX);
    assert_eq!(sniffer.sniff(&ooxml_package("ppt/presentation.xml")), PPTX);
}

#[test]
fn test_rels_first_package() {
    let sniffer = Sniffer::new();

    let pptx = zip_package(&[
        ("_rels/.rels", b"<Relationships/>"),
        ("ppt/presentation.xml", b""),
    ]);
    assert_eq!(sniffer.sniff(&pptx), PPTX);

    let docx = zip_package(&[
        ("_rels/.rels", b"<Relationships/>"),
        ("word/document.xml", b"<w:document/>"),
    ]);
    assert_eq!(sniffer.sniff(&docx), DOCX);

    let pptx = zip_package(&[
        ("_rels/.rels", b""),
        ("docProps/app.xml", b"<Properties/>"),
        ("ppt/presentation.xml", b""),
    ]);
    assert_eq!(sniffer.sniff(&pptx), PPTX);
}

#[test]
fn test_plain_zip_falls_through() {
    let sniffer = Sniffer::new();

    let jar = zip_package(&[
        ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\r\n"),
        ("com/example/Main.class", b"\xCA\xFE\xBA\xBE"),
    ]);
    assert_eq!(sniffer.sniff(&jar), ZIP);

    // Packaging metadata but no recognizable content folder
    let odd = ooxml_package("custom/part.xml");
    assert_eq!(sniffer.sniff(&odd), ZIP);
}

#[test]
fn test_epub_is_not_an_office_package() {
    let sniffer = Sniffer::new();
    let epub = zip_package(&[("mimetype", b"application/epub+zip"), ("OEBPS/content.opf", b"")]);
    assert_eq!(sniffer.sniff(&epub), "application/epub+zip");
}

#[test]
fn test_hop_limit_is_configurable() {
    let buried = zip_package(&[
        ("[Content_Types].xml", b""),
        ("_rels/.rels", b""),
        ("docProps/core.xml", b""),
        ("docProps/app.xml", b""),
        ("customXml/item1.xml", b""),
        ("xl/workbook.xml", b""),
    ]);

    assert_eq!(Sniffer::new().sniff(&buried), ZIP);

    let config = SniffConfig {
        container: ContainerScanConfig {
            max_hops: 5,
            ..ContainerScanConfig::default()
        },
        ..SniffConfig::default()
    };
    assert_eq!(Sniffer::with_config(config).sniff(&buried), XLSX);
}

#[test]
fn test_content_beyond_sniff_len_is_still_found() {
    // Large packaging entries push the content part past the 512-byte window;
    // the container scan has its own bounds.
    let body = vec![b' '; 700];
    let docx = zip_package(&[
        ("[Content_Types].xml", &body),
        ("_rels/.rels", &body),
        ("word/document.xml", b""),
    ]);
    assert!(docx.len() > 1400);
    assert_eq!(Sniffer::new().sniff(&docx), DOCX);
}

#[test]
fn test_scan_window_gap_defeats_detection() {
    let gap = vec![b' '; 7000];
    let docx = zip_package(&[
        ("[Content_Types].xml", b""),
        ("_rels/.rels", &gap),
        ("word/document.xml", b""),
    ]);
    assert_eq!(detect_office_family(&docx, &ContainerScanConfig::default()), None);

    let wide = ContainerScanConfig {
        scan_window: 8000,
        ..ContainerScanConfig::default()
    };
    assert_eq!(detect_office_family(&docx, &wide), Some(OfficeFamily::Document));
}

#[test]
fn test_truncated_packages_are_total() {
    let sniffer = Sniffer::new();
    let docx = ooxml_package("word/document.xml");
    for len in 0..docx.len() {
        let mime = sniffer.sniff(&docx[..len]);
        assert!(!mime.is_empty());
    }
}
