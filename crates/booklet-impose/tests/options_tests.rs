use booklet_impose::*;

#[test]
fn test_default_options() {
    let options = BookletOptions::default();
    assert_eq!(options.dpi, 300);
    assert_eq!(options.paper_size, PaperSize::Letter);
    assert_eq!(options.color_mode, ColorMode::Gray);
    assert_eq!(options.sheets_per_signature, 1);
    assert!(options.rotate_back);
    assert_eq!(options.first_page, None);
    assert_eq!(options.last_page, None);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_signature_size() {
    let mut options = BookletOptions::default();

    options.sheets_per_signature = 0;
    match options.validate() {
        Err(BookletError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("Sheets per signature"));
        }
        _ => panic!("Expected InvalidConfiguration error"),
    }

    options.sheets_per_signature = 4;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_dpi() {
    let mut options = BookletOptions::default();

    options.dpi = 0;
    assert!(options.validate().is_err());

    options.dpi = 10_000;
    assert!(options.validate().is_err());

    options.dpi = 72;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_inverted_range() {
    let options = BookletOptions {
        first_page: Some(8),
        last_page: Some(4),
        ..Default::default()
    };
    assert!(matches!(
        options.validate(),
        Err(BookletError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_validation_paper_size() {
    let options = BookletOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 100.0,
        },
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_page_range_defaults_to_whole_document() {
    let options = BookletOptions::default();
    assert_eq!(options.page_range(12), PageRange::full(12));
}

#[test]
fn test_page_range_clamps_to_document() {
    let options = BookletOptions {
        first_page: Some(4),
        last_page: Some(50),
        ..Default::default()
    };
    let range = options.page_range(10);
    assert_eq!((range.first(), range.last()), (4, 10));

    let options = BookletOptions {
        first_page: Some(20),
        ..Default::default()
    };
    let range = options.page_range(10);
    assert_eq!((range.first(), range.last()), (10, 10));
    assert!(range.is_empty());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        dpi: 150,
        color_mode: ColorMode::Rgb,
        paper_size: PaperSize::Custom {
            width_mm: 200.0,
            height_mm: 250.0,
        },
        blank_sheets: BlankSheetPolicy::Skip,
        sheets_per_signature: 3,
        rotate_back: false,
        first_page: Some(2),
        last_page: Some(30),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = BookletOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "dpi": 600 }"#).unwrap();

    let loaded = BookletOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.dpi, 600);
    assert_eq!(loaded.sheets_per_signature, 1);
    assert!(loaded.rotate_back);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    assert!(matches!(
        BookletOptions::load(temp_file.path()).await,
        Err(BookletError::InvalidConfiguration(_))
    ));
}
