//! localStorage に検索語を保存する

use nasa_gallery_common::KeyValueStore;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// ブラウザのlocalStorage（使えない環境では何も保存しない）
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get_string(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            gloo::console::warn!("localStorageが使えません");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            gloo::console::warn!(format!("検索語を保存できませんでした: {:?}", e));
        }
    }
}
