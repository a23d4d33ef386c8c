//! One representative sample per built-in signature.

use magicsniff::sniff::{Catalog, SniffConfig};
use magicsniff::{DetectionSource, Sniffer};
use std::collections::HashSet;

use crate::common::mime::*;
use crate::common::samples::*;

fn tar_header() -> Vec<u8> {
    let mut data = vec![0u8; 512];
    data[0..8].copy_from_slice(b"file.txt");
    data[257..263].copy_from_slice(b"ustar\0");
    data
}

fn samples() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        (
            "application/epub+zip",
            zip_package(&[("mimetype", b"application/epub+zip")]),
        ),
        (PPTX, zip_package(&[("ppt/slides/slide1.xml", b"")])),
        (XLSX, zip_package(&[("xl/workbook.xml", b"")])),
        (DOCX, ooxml_package("word/document.xml")),
        ("application/x-7z-compressed", padded(b"7z\xBC\xAF\x27\x1C", 32)),
        ("application/x-bzip2", b"BZh91AY&SY".to_vec()),
        ("application/x-compress", padded(b"\x1F\x9D\x90", 16)),
        ("application/x-deb", b"!<arch>\ndebian-binary   1342943816  0     0     100644  4         `\n2.0\n".to_vec()),
        ("application/x-unix-archive", b"!<arch>\nlibfoo.o/       ".to_vec()),
        ("application/x-lzip", padded(b"LZIP\x01", 16)),
        ("application/x-rpm", padded(b"\xED\xAB\xEE\xDB\x03\x00", 128)),
        ("application/x-tar", tar_header()),
        ("application/x-xz", padded(b"\xFD7zXZ\x00", 32)),
        ("application/vnd.ms-cab-compressed", padded(b"MSCF", 36)),
        ("application/x-google-chrome-extension", padded(b"Cr24\x02\x00\x00\x00", 16)),
        (
            "application/msword",
            padded(b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1", 512),
        ),
        ("application/rtf", b"{\\rtf1\\ansi\\deff0 hello}".to_vec()),
        ("application/font-sfnt", padded(b"\x00\x01\x00\x00\x00\x0F", 64)),
        ("application/font-woff", padded(b"wOFF\x00\x01\x00\x00", 44)),
        ("application/x-sqlite3", padded(b"SQLite format 3\x00", 100)),
        ("application/x-executable", padded(b"\x7FELF\x02\x01\x01", 64)),
        ("application/x-msdownload", padded(b"MZ\x90\x00", 64)),
        ("application/x-nintendo-nes-rom", padded(b"NES\x1A\x02\x01", 16)),
        ("application/x-shockwave-flash", padded(b"FWS\x0A", 16)),
        ("audio/aac", padded(b"\xFF\xF1\x50\x80", 16)),
        ("audio/amr", b"#!AMR\n\x3C\x48\x77\x55\x00\x12".to_vec()),
        ("audio/m4a", padded(b"\x00\x00\x00\x20ftypM4A \x00\x00\x00\x00", 32)),
        ("audio/ogg", padded(b"OggS\x00\x02", 32)),
        ("audio/x-flac", padded(b"fLaC\x00\x00\x00\x22", 42)),
        ("audio/x-wav", padded(b"RIFF\x24\x08\x00\x00WAVEfmt ", 44)),
        (
            "image/jp2",
            padded(b"\x00\x00\x00\x0CjP  \x0D\x0A\x87\x0A\x00\x00\x00\x14ftypjp2 ", 32),
        ),
        ("image/x-canon-cr2", padded(b"II*\x00\x10\x00\x00\x00CR\x02\x00", 32)),
        ("image/tiff", padded(b"MM\x00\x2A\x00\x00\x00\x08", 32)),
        ("image/vnd.adobe.photoshop", padded(b"8BPS\x00\x01", 32)),
        ("video/x-m4v", padded(b"\x00\x00\x00\x18ftypM4V \x00\x00\x00\x01", 32)),
        ("video/quicktime", padded(b"\x00\x00\x00\x14ftypqt  \x00\x00\x00\x00", 32)),
        ("video/mpeg", padded(b"\x00\x00\x01\xBA\x44\x00", 32)),
        ("video/x-flv", padded(b"FLV\x01\x05\x00\x00\x00\x09", 16)),
        (
            "video/x-matroska",
            padded(b"\x1A\x45\xDF\xA3\x93\x42\x82\x88matroska", 32),
        ),
        (
            "video/x-ms-wmv",
            padded(b"\x30\x26\xB2\x75\x8E\x66\xCF\x11\xA6\xD9\x00\xAA", 32),
        ),
        ("video/x-msvideo", padded(b"RIFF\x00\x10\x00\x00AVI LIST", 32)),
    ]
}

#[test]
fn test_every_sample_detected() {
    let sniffer = Sniffer::new();
    for (expected, data) in samples() {
        let detection = sniffer.detect(&data);
        assert_eq!(detection.mime, expected, "sample for {expected}");
        assert_eq!(detection.source, DetectionSource::Catalog, "sample for {expected}");
    }
}

#[test]
fn test_samples_cover_catalog() {
    let covered: HashSet<&str> = samples().into_iter().map(|(mime, _)| mime).collect();
    let shadowed = ["application/vnd.ms-excel", "application/vnd.ms-powerpoint"];

    for mime in Catalog::default().mime_types() {
        assert!(
            covered.contains(mime) || shadowed.contains(&mime),
            "no sample for {mime}"
        );
    }
}

#[test]
fn test_magic_beyond_window_is_ignored() {
    let short = Sniffer::with_config(SniffConfig {
        sniff_len: 256,
        ..SniffConfig::default()
    });
    let detection = short.detect(&tar_header());
    assert_ne!(detection.mime, "application/x-tar");
    assert_eq!(detection.source, DetectionSource::Fallback);
}

#[test]
fn test_trailing_bytes_do_not_matter() {
    let sniffer = Sniffer::new();
    let mut data = vec![b'a'; 512];
    data.extend_from_slice(b"\x7FELF\x00\x00\x00\x00");
    assert_eq!(sniffer.sniff(&data), TEXT);

    let mut elf = padded(b"\x7FELF\x02\x01\x01", 64);
    elf.extend_from_slice(&vec![0xCC; 4096]);
    assert_eq!(sniffer.sniff(&elf), "application/x-executable");
}

#[test]
fn test_short_headers_fall_through() {
    let sniffer = Sniffer::new();
    // ELF and RPM need their fixed header before they count
    assert_eq!(sniffer.detect(b"\x7FELF").source, DetectionSource::Fallback);
    assert_eq!(
        sniffer.detect(b"\xED\xAB\xEE\xDB").source,
        DetectionSource::Fallback
    );
    assert_eq!(sniffer.detect(b"#!AMR\n").source, DetectionSource::Fallback);
}
