//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use nasa_gallery::config::Config;
use nasa_gallery::error::GalleryError;
use nasa_gallery::export::{export_selection, CsvStyle};
use nasa_gallery_common::{CatalogError, CatalogItem};
use tempfile::tempdir;

/// 壊れた設定ファイルはJSONエラー
#[test]
fn test_corrupted_config_is_json_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, GalleryError::JsonParse(_)));
}

/// 書き込めない場所へのエクスポート
#[test]
fn test_export_into_file_as_directory_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file").unwrap();

    let items = vec![CatalogItem {
        id: "a".into(),
        title: "A".into(),
        description: "d".into(),
        image: None,
    }];

    // 既存ファイルの下にディレクトリは作れない
    let result = export_selection(&items, &blocker.join("sub").join("out.csv"), CsvStyle::Raw);
    assert!(result.is_err());
}

/// 検索エラーはユーザー向けメッセージで表示
#[test]
fn test_catalog_error_display() {
    let err = GalleryError::from(CatalogError::Api { code: 503 });
    assert_eq!(format!("{}", err), "検索エラー: Request failed (Code: 503)");

    let err = GalleryError::from(CatalogError::NoResults);
    assert!(format!("{}", err).contains("No results found."));
}

/// GalleryErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GalleryError::Config("テスト設定エラー".to_string()),
        GalleryError::UnknownItem("abc".to_string()),
        GalleryError::Export("書き込み失敗".to_string()),
        GalleryError::Form("画像が読めません".to_string()),
        GalleryError::Catalog(CatalogError::Network("refused".to_string())),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 共通ライブラリのエラーからの変換
#[test]
fn test_common_error_conversion() {
    let err: GalleryError = nasa_gallery_common::Error::Csv("bad".into()).into();
    assert!(matches!(err, GalleryError::Export(_)));

    let err: GalleryError = nasa_gallery_common::Error::Config("x".into()).into();
    assert!(matches!(err, GalleryError::Config(_)));
}
