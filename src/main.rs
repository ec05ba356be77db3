use anyhow::Context;
use clap::Parser;
use indicatif::ProgressBar;
use nasa_gallery::{browse, cli, client, config, export, form, logging, session, storage};
use cli::{Cli, Commands};
use client::{CatalogApi, NasaClient};
use config::Config;
use export::CsvStyle;
use nasa_gallery_common::FormStore;
use session::SearchSession;
use std::time::Duration;
use storage::FileStore;

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn csv_style(quoted: bool) -> CsvStyle {
    if quoted {
        CsvStyle::Quoted
    } else {
        CsvStyle::Raw
    }
}

/// 検索語があれば送信、無ければ保存済みの語でマウント
async fn open_session(
    config: &Config,
    term: Option<String>,
) -> anyhow::Result<SearchSession<NasaClient, FileStore>> {
    let state_path = Config::state_path()?;
    let store = FileStore::load(&state_path);
    let client = NasaClient::from_config(config)?;

    let bar = spinner("Loading...");
    let session = match term {
        Some(term) => {
            let session = SearchSession::new(client, store, config.policy);
            let submitted = session.submit(&term).await;
            bar.finish_and_clear();
            submitted?;
            session
        }
        None => {
            let session = SearchSession::mount(client, store, config.policy).await;
            bar.finish_and_clear();
            session
        }
    };
    Ok(session)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = Config::load().context("設定ファイルを読み込めませんでした")?;

    match cli.command {
        Commands::Search { term, page, select, export, output, quoted } => {
            println!("🔭 nasa-gallery - 検索\n");

            let session = open_session(&config, term).await?;
            session.go_to_page(page);

            for id in &select {
                session.select(id)?;
                println!("✔ 選択: {}", id);
            }

            browse::print_page(&session);

            if export {
                let selected = session.selected();
                if selected.is_empty() {
                    println!("\n選択されたアイテムがないため、CSVは出力しません");
                } else {
                    let output_dir = output.unwrap_or_else(|| config.export_dir());
                    export::export_selection(&selected, &output_dir, csv_style(quoted))
                        .with_context(|| format!("CSVを書き出せませんでした: {}", output_dir.display()))?;
                }
            }
        }

        Commands::Detail { id } => {
            let client = NasaClient::from_config(&config)?;
            let bar = spinner("Loading...");
            let outcome = client.fetch_detail(&id).await;
            bar.finish_and_clear();
            browse::print_detail(&outcome);
        }

        Commands::Browse { term, output, quoted } => {
            println!("🔭 nasa-gallery - ブラウズ\n");

            let session = open_session(&config, term).await?;
            let output_dir = output.unwrap_or_else(|| config.export_dir());
            browse::run_browse(&session, &output_dir, csv_style(quoted)).await?;

            println!("\n✅ 終了");
        }

        Commands::Form { suggest_country } => {
            let mut store = FormStore::new();
            match suggest_country {
                Some(text) => {
                    for country in store.suggest(&text) {
                        println!("{}", country);
                    }
                }
                None => form::run_form(&mut store)?,
            }
        }

        Commands::Config { set_base_url, empty_term, zero_results, set_export_dir, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.api_base_url = url;
                changed = true;
                println!("✔ APIベースURLを設定しました");
            }
            if let Some(policy) = empty_term {
                config.policy.empty_term = policy;
                changed = true;
                println!("✔ 空の検索語の扱い: {}", policy);
            }
            if let Some(policy) = zero_results {
                config.policy.zero_results = policy;
                changed = true;
                println!("✔ 0件の扱い: {}", policy);
            }
            if let Some(dir) = set_export_dir {
                println!("✔ CSV出力先: {}", dir.display());
                config.export_dir = Some(dir);
                changed = true;
            }

            if changed {
                config.save().context("設定ファイルを保存できませんでした")?;
            }

            if show || !changed {
                println!("設定:");
                println!("  APIベースURL: {}", config.base_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  空の検索語: {}", config.policy.empty_term);
                println!("  0件: {}", config.policy.zero_results);
                println!("  CSV出力先: {}", config.export_dir().display());
            }
        }
    }

    Ok(())
}
