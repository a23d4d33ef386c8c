//! Fixed-offset format signatures and magic numbers.
//!
//! Each predicate is a handful of byte comparisons at known offsets. The
//! minimum-length guards are deliberately conservative: a predicate only
//! matches once enough of the header is present, and every comparison goes
//! through [`at`], so short input is a non-match rather than a fault.

/// ZIP local file header magic, `PK\x03\x04`.
pub const ZIP_MAGIC: [u8; 4] = [b'P', b'K', 0x03, 0x04];

/// OLE2 compound document magic shared by legacy Office formats.
pub const OLE2_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];
const TIFF_LE: [u8; 4] = [b'I', b'I', 0x2A, 0x00];
const TIFF_BE: [u8; 4] = [b'M', b'M', 0x00, 0x2A];
const AR_MAGIC: &[u8] = b"!<arch>";

/// Does `data` contain `pattern` starting at `offset`?
#[inline]
pub fn at(data: &[u8], offset: usize, pattern: &[u8]) -> bool {
    offset
        .checked_add(pattern.len())
        .and_then(|end| data.get(offset..end))
        .is_some_and(|window| window == pattern)
}

/// Is `data` longer than `n` bytes? Mirrors the historical `len > n` guards.
#[inline]
fn longer_than(data: &[u8], n: usize) -> bool {
    data.len() > n
}

pub fn is_epub(data: &[u8]) -> bool {
    at(data, 0, &ZIP_MAGIC) && at(data, 30, b"mimetypeapplication/epub+zip")
}

pub fn is_font_sfnt(data: &[u8]) -> bool {
    at(data, 0, &[0x00, 0x01, 0x00, 0x00, 0x00]) || at(data, 0, b"OTTO\x00")
}

pub fn is_font_woff(data: &[u8]) -> bool {
    at(data, 0, b"wOFF\x00\x01\x00\x00") || at(data, 0, b"wOF2\x00\x01\x00\x00")
}

/// OLE2 compound file. Word, Excel and PowerPoint binaries all share it.
pub fn is_ole2(data: &[u8]) -> bool {
    at(data, 0, &OLE2_MAGIC)
}

pub fn is_rtf(data: &[u8]) -> bool {
    at(data, 0, b"{\\rtf")
}

pub fn is_ms_cab(data: &[u8]) -> bool {
    at(data, 0, b"MSCF") || at(data, 0, b"ISc(")
}

pub fn is_7z(data: &[u8]) -> bool {
    at(data, 0, &[b'7', b'z', 0xBC, 0xAF, 0x27, 0x1C])
}

pub fn is_bzip2(data: &[u8]) -> bool {
    at(data, 0, b"BZh")
}

pub fn is_unix_compress(data: &[u8]) -> bool {
    at(data, 0, &[0x1F, 0xA0]) || at(data, 0, &[0x1F, 0x9D])
}

pub fn is_deb(data: &[u8]) -> bool {
    at(data, 0, b"!<arch>\ndebian-binary")
}

pub fn is_elf(data: &[u8]) -> bool {
    longer_than(data, 52) && at(data, 0, &ELF_MAGIC)
}

pub fn is_chrome_extension(data: &[u8]) -> bool {
    at(data, 0, b"Cr24")
}

pub fn is_lzip(data: &[u8]) -> bool {
    at(data, 0, b"LZIP")
}

pub fn is_ms_dos_executable(data: &[u8]) -> bool {
    at(data, 0, b"MZ")
}

pub fn is_nes_rom(data: &[u8]) -> bool {
    at(data, 0, b"NES\x1A")
}

pub fn is_rpm(data: &[u8]) -> bool {
    longer_than(data, 96) && at(data, 0, &[0xED, 0xAB, 0xEE, 0xDB])
}

pub fn is_shockwave_flash(data: &[u8]) -> bool {
    at(data, 0, b"CWS") || at(data, 0, b"FWS")
}

pub fn is_sqlite3(data: &[u8]) -> bool {
    at(data, 0, b"SQLi")
}

/// POSIX tar: `ustar` at offset 257.
pub fn is_tar(data: &[u8]) -> bool {
    at(data, 257, b"ustar")
}

pub fn is_unix_archive(data: &[u8]) -> bool {
    at(data, 0, AR_MAGIC)
}

pub fn is_xz(data: &[u8]) -> bool {
    at(data, 0, &[0xFD, b'7', b'z', b'X', b'Z', 0x00])
}

/// ADTS AAC frame sync (MPEG-4 or MPEG-2, no CRC).
pub fn is_aac(data: &[u8]) -> bool {
    at(data, 0, &[0xFF, 0xF1]) || at(data, 0, &[0xFF, 0xF9])
}

pub fn is_amr(data: &[u8]) -> bool {
    longer_than(data, 11) && at(data, 0, b"#!AMR\n")
}

pub fn is_m4a(data: &[u8]) -> bool {
    longer_than(data, 10) && (at(data, 4, b"ftypM4A") || at(data, 0, b"M4A "))
}

pub fn is_ogg(data: &[u8]) -> bool {
    at(data, 0, b"OggS")
}

pub fn is_flac(data: &[u8]) -> bool {
    at(data, 0, b"fLaC")
}

pub fn is_wav(data: &[u8]) -> bool {
    at(data, 0, b"RIFF") && at(data, 8, b"WAVE")
}

pub fn is_jp2(data: &[u8]) -> bool {
    at(
        data,
        0,
        &[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A, 0x00],
    )
}

pub fn is_tiff(data: &[u8]) -> bool {
    at(data, 0, &TIFF_LE) || at(data, 0, &TIFF_BE)
}

pub fn is_photoshop(data: &[u8]) -> bool {
    at(data, 0, b"8BPS")
}

/// Canon RAW v2: a TIFF header followed by `CR` at offset 8.
pub fn is_canon_cr2(data: &[u8]) -> bool {
    is_tiff(data) && at(data, 8, b"CR")
}

/// MPEG program/video stream start codes `00 00 01 B0..=BF`.
pub fn is_mpeg(data: &[u8]) -> bool {
    at(data, 0, &[0x00, 0x00, 0x01]) && matches!(data.get(3), Some(0xB0..=0xBF))
}

pub fn is_quicktime(data: &[u8]) -> bool {
    longer_than(data, 15)
        && ((at(data, 0, &[0x00, 0x00, 0x00, 0x14]) && at(data, 4, b"ftyp"))
            || at(data, 4, b"moov")
            || at(data, 4, b"mdat")
            || at(data, 12, b"mdat"))
}

pub fn is_flv(data: &[u8]) -> bool {
    at(data, 0, b"FLV\x01")
}

pub fn is_m4v(data: &[u8]) -> bool {
    at(data, 4, b"ftypM4V")
}

/// EBML header with a `matroska` doctype, either in the compact layout or
/// at the offset produced by the longer header variant.
pub fn is_matroska(data: &[u8]) -> bool {
    (at(data, 0, &[0x1A, 0x45, 0xDF, 0xA3, 0x93, 0x42, 0x82, 0x88]) && at(data, 8, b"matroska"))
        || at(data, 31, b"matroska")
}

/// ASF header object GUID prefix.
pub fn is_wmv(data: &[u8]) -> bool {
    at(
        data,
        0,
        &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9],
    )
}

pub fn is_avi(data: &[u8]) -> bool {
    at(data, 0, b"RIFF") && at(data, 8, b"AVI")
}
