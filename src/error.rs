use nasa_gallery_common::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("検索エラー: {}", .0.user_message())]
    Catalog(#[from] CatalogError),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("対話入力エラー: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("選択されたアイテムが結果にありません: {0}")]
    UnknownItem(String),

    #[error("エクスポートエラー: {0}")]
    Export(String),

    #[error("フォーム入力エラー: {0}")]
    Form(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<nasa_gallery_common::Error> for GalleryError {
    fn from(err: nasa_gallery_common::Error) -> Self {
        match err {
            nasa_gallery_common::Error::Io(e) => GalleryError::Io(e),
            nasa_gallery_common::Error::Json(e) => GalleryError::JsonParse(e),
            nasa_gallery_common::Error::Config(msg) => GalleryError::Config(msg),
            nasa_gallery_common::Error::Csv(msg) => GalleryError::Export(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
