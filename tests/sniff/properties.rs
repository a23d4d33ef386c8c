//! Property tests over arbitrary input.

use magicsniff::sniff::ContainerScanConfig;
use magicsniff::sniff::containers::detect_office_family;
use magicsniff::{DetectionSource, MimeType, Sniffer};
use proptest::prelude::*;

use crate::common::mime::*;
use crate::common::samples::*;

proptest! {
    #[test]
    fn sniff_is_total(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mime = Sniffer::new().sniff(&data);
        prop_assert!(!mime.is_empty());
        prop_assert!(MimeType::parse(&mime).is_ok(), "unparseable result {}", mime);
        if data.is_empty() {
            prop_assert_eq!(mime, OCTET);
        }
    }

    #[test]
    fn registry_beats_catalog(tail in proptest::collection::vec(any::<u8>(), 0..256)) {
        let sniffer = Sniffer::new();
        sniffer.register("x-test/everything", |b: &[u8]| !b.is_empty());

        let mut data = b"fLaC".to_vec();
        data.extend_from_slice(&tail);
        let detection = sniffer.detect(&data);
        prop_assert_eq!(detection.source, DetectionSource::Registry);
        prop_assert_eq!(detection.mime, "x-test/everything");
    }

    #[test]
    fn zip_prefixed_noise_never_panics(
        noise in proptest::collection::vec(any::<u8>(), 0..8192),
        max_hops in 0usize..8,
        scan_window in 1usize..8192,
    ) {
        let mut data = ZIP_MAGIC.to_vec();
        data.extend_from_slice(&noise);
        let config = ContainerScanConfig { scan_window, max_hops };
        let _ = detect_office_family(&data, &config);
    }

    #[test]
    fn trailing_bytes_beyond_packages_do_not_change_family(
        tail in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut data = ooxml_package("xl/workbook.xml");
        data.extend_from_slice(&tail);
        prop_assert_eq!(Sniffer::new().sniff(&data), XLSX);
    }
}
