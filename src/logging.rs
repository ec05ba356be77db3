//! ログ初期化
//!
//! `RUST_LOG` があればそれを使い、無ければ `nasa_gallery=info`
//! （`--verbose` 時は debug）。出力は標準エラー。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "nasa_gallery=debug,nasa_gallery_common=debug"
    } else {
        "nasa_gallery=info"
    }
}

pub fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
