//! 対話式ブラウズ
//!
//! 検索 → ページ表示 → 操作選択 を終了まで繰り返す。
//! 表示用の整形は純粋関数に分けてある（テスト対象）。

use crate::client::CatalogApi;
use crate::error::Result;
use crate::export::{self, CsvStyle};
use crate::session::SearchSession;
use dialoguer::{Input, MultiSelect, Select};
use nasa_gallery_common::selection::selection_summary;
use nasa_gallery_common::{
    CatalogItem, DetailOutcome, KeyValueStore, Pagination, SearchPhase, SearchState,
};
use std::path::Path;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    NewSearch,
    PrevPage,
    NextPage,
    GoToPage,
    ToggleSelection,
    Detail,
    UnselectAll,
    Export,
    Quit,
}

impl BrowseAction {
    pub fn label(&self) -> &'static str {
        match self {
            BrowseAction::NewSearch => "新しく検索",
            BrowseAction::PrevPage => "前のページ",
            BrowseAction::NextPage => "次のページ",
            BrowseAction::GoToPage => "ページ番号を指定",
            BrowseAction::ToggleSelection => "このページの選択を変更",
            BrowseAction::Detail => "詳細を表示",
            BrowseAction::UnselectAll => "すべて選択解除",
            BrowseAction::Export => "CSVに書き出す",
            BrowseAction::Quit => "終了",
        }
    }
}

/// 現在の状態で選べる操作
///
/// 選択が空なら解除・エクスポートは出さない（フライアウト非表示と同じ条件）
pub fn available_actions(
    pagination: &Pagination,
    has_page_items: bool,
    selected_count: usize,
) -> Vec<BrowseAction> {
    let mut actions = vec![BrowseAction::NewSearch];
    if pagination.has_prev() {
        actions.push(BrowseAction::PrevPage);
    }
    if pagination.has_next() {
        actions.push(BrowseAction::NextPage);
    }
    if pagination.total_pages() > 1 {
        actions.push(BrowseAction::GoToPage);
    }
    if has_page_items {
        actions.push(BrowseAction::ToggleSelection);
        actions.push(BrowseAction::Detail);
    }
    if selected_count > 0 {
        actions.push(BrowseAction::UnselectAll);
        actions.push(BrowseAction::Export);
    }
    actions.push(BrowseAction::Quit);
    actions
}

/// 一覧1行
pub fn format_item_line(item: &CatalogItem, selected: bool) -> String {
    let mark = if selected { "[x]" } else { "[ ]" };
    format!("{} {} | {}", mark, item.id, item.title)
}

/// ページボタン列（現在ページは `[n]`）
pub fn format_page_buttons(pagination: &Pagination) -> String {
    pagination
        .buttons()
        .iter()
        .map(|b| {
            if b.disabled {
                format!("[{}]", b.page)
            } else {
                b.page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 検索状態の見出し
///
/// 0件はエラーとは別の表示にする
pub fn format_status(state: &SearchState) -> String {
    match state.phase {
        SearchPhase::Idle => "未検索".to_string(),
        SearchPhase::Loading => "Loading...".to_string(),
        SearchPhase::Success => {
            let term = if state.term.is_empty() { "(既定)" } else { state.term.as_str() };
            format!("検索語: {} / {}件", term, state.results.len())
        }
        SearchPhase::Error => match &state.failure {
            Some(failure) if failure.is_no_results() => failure.user_message(),
            Some(failure) => format!("Error: {}", failure.user_message()),
            None => format!("Error: {}", state.error.as_deref().unwrap_or_default()),
        },
    }
}

/// 詳細の表示行
pub fn format_detail(outcome: &DetailOutcome) -> Vec<String> {
    match outcome.record() {
        Some(record) => vec![
            record.title.clone(),
            format!("  ID: {}", record.id),
            "  Description:".to_string(),
            format!("  {}", record.description),
            format!("  画像: {}", record.image),
        ],
        None => vec!["No details available.".to_string()],
    }
}

/// 現在ページを表示
pub fn print_page<A: CatalogApi, S: KeyValueStore>(session: &SearchSession<A, S>) {
    let state = session.state();
    println!("\n{}", format_status(&state));

    let items = session.page_items();
    for item in &items {
        println!("  {}", format_item_line(item, session.is_selected(&item.id)));
    }

    let pagination = session.pagination();
    if state.phase == SearchPhase::Success {
        if items.is_empty() && !state.results.is_empty() {
            println!("  (このページにはアイテムがありません)");
        }
        println!("ページ: {}", format_page_buttons(&pagination));
    }

    let selected = session.selected().len();
    if selected > 0 {
        println!("{}", selection_summary(selected));
    }
}

pub fn print_detail(outcome: &DetailOutcome) {
    for line in format_detail(outcome) {
        println!("{}", line);
    }
}

/// 対話ループ
///
/// # Arguments
/// * `session` - マウント済みのセッション（初回検索済み）
/// * `output` - CSV出力先
/// * `style` - CSVの書式
pub async fn run_browse<A: CatalogApi, S: KeyValueStore>(
    session: &SearchSession<A, S>,
    output: &Path,
    style: CsvStyle,
) -> Result<()> {
    loop {
        print_page(session);

        let pagination = session.pagination();
        let page_items = session.page_items();
        let actions = available_actions(&pagination, !page_items.is_empty(), session.selected().len());
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

        let choice = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            BrowseAction::NewSearch => {
                let term: String = Input::new()
                    .with_prompt("検索語")
                    .with_initial_text(session.state().term)
                    .allow_empty(true)
                    .interact_text()?;
                if let Err(e) = session.submit(&term).await {
                    println!("{}", e);
                }
            }
            BrowseAction::PrevPage => session.go_to_page(pagination.current_page - 1),
            BrowseAction::NextPage => session.go_to_page(pagination.current_page + 1),
            BrowseAction::GoToPage => {
                let page: usize = Input::new()
                    .with_prompt(format!("ページ (1-{})", pagination.total_pages()))
                    .default(pagination.current_page)
                    .interact_text()?;
                session.go_to_page(page);
            }
            BrowseAction::ToggleSelection => toggle_page_selection(session, &page_items)?,
            BrowseAction::Detail => {
                let titles: Vec<String> = page_items.iter().map(|i| i.title.clone()).collect();
                let index = Select::new()
                    .with_prompt("詳細を表示するアイテム")
                    .items(&titles)
                    .default(0)
                    .interact()?;
                let outcome = session.detail(&page_items[index].id).await;
                println!();
                print_detail(&outcome);
            }
            BrowseAction::UnselectAll => {
                session.clear_selection();
                println!("✔ 選択をすべて解除しました");
            }
            BrowseAction::Export => {
                export::export_selection(&session.selected(), output, style)?;
            }
            BrowseAction::Quit => break,
        }
    }

    Ok(())
}

fn toggle_page_selection<A: CatalogApi, S: KeyValueStore>(
    session: &SearchSession<A, S>,
    page_items: &[CatalogItem],
) -> Result<()> {
    let labels: Vec<String> = page_items
        .iter()
        .map(|i| format!("{} | {}", i.id, i.title))
        .collect();
    let defaults: Vec<bool> = page_items.iter().map(|i| session.is_selected(&i.id)).collect();

    let chosen = MultiSelect::new()
        .with_prompt("選択（スペースで切替、Enterで確定）")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    for (index, item) in page_items.iter().enumerate() {
        let want = chosen.contains(&index);
        if want && !defaults[index] {
            session.select(&item.id)?;
        } else if !want && defaults[index] {
            session.unselect(&item.id);
        }
    }
    Ok(())
}
