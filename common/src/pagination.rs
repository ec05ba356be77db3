//! ページング
//!
//! ページは1始まり、1ページ10件固定。
//! 範囲外のページは空スライスを返す（自動補正しない）。

/// 1ページあたりの件数
pub const PAGE_SIZE: usize = 10;

/// 総ページ数（ceil）
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// 描画するページボタン数（0件でも1つ）
pub fn button_count(total_items: usize, page_size: usize) -> usize {
    total_pages(total_items, page_size).max(1)
}

/// 指定ページの要素
///
/// `[(page-1)*size, page*size)` を範囲内に切り詰める。page 0 や範囲外は空。
pub fn slice_for_page<T>(results: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= results.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(results.len());
    &results[start..end]
}

/// URLの `page` パラメータを解釈（正の整数以外は1）
pub fn parse_page_param(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// ページボタン1つ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: usize,
    /// 現在ページは押せない
    pub disabled: bool,
}

impl PageButton {
    /// クリック時の遷移先（無効ボタンは None）
    pub fn click(&self) -> Option<usize> {
        if self.disabled {
            None
        } else {
            Some(self.page)
        }
    }
}

/// ページング状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl Pagination {
    pub fn new(current_page: usize, total_items: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            page_size: PAGE_SIZE,
            total_items,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// ボタン一覧（1..=max(1, total)、現在ページは無効）
    pub fn buttons(&self) -> Vec<PageButton> {
        (1..=button_count(self.total_items, self.page_size))
            .map(|page| PageButton {
                page,
                disabled: page == self.current_page,
            })
            .collect()
    }

    pub fn slice<'a, T>(&self, results: &'a [T]) -> &'a [T] {
        slice_for_page(results, self.current_page, self.page_size)
    }

    /// ページ変更（0は1に丸める）
    pub fn on_page_change(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// 新しい検索でページを1に戻す
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// 件数だけ更新（現在ページは補正しない）
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // total_pages / button_count テスト
    // =============================================

    #[test]
    fn test_total_pages_ceil() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(100, PAGE_SIZE), 10);
        assert_eq!(total_pages(101, PAGE_SIZE), 11);
    }

    #[test]
    fn test_zero_items_shows_single_disabled_button() {
        let pagination = Pagination::new(1, 0);
        let buttons = pagination.buttons();
        assert_eq!(buttons, vec![PageButton { page: 1, disabled: true }]);
        assert_eq!(buttons[0].click(), None);
    }

    // =============================================
    // slice_for_page テスト
    // =============================================

    #[test]
    fn test_slices_cover_everything_once() {
        for total in [1usize, 9, 10, 11, 25, 100] {
            let items: Vec<usize> = (0..total).collect();
            let pages = total_pages(total, PAGE_SIZE);

            let mut seen = Vec::new();
            for page in 1..=pages {
                let slice = slice_for_page(&items, page, PAGE_SIZE);
                assert!(!slice.is_empty());
                assert!(slice.len() <= PAGE_SIZE);
                seen.extend_from_slice(slice);
            }
            assert_eq!(seen, items, "total={}", total);
        }
    }

    #[test]
    fn test_slice_is_idempotent() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(slice_for_page(&items, 2, PAGE_SIZE), slice_for_page(&items, 2, PAGE_SIZE));
        assert_eq!(slice_for_page(&items, 3, PAGE_SIZE), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<usize> = (0..15).collect();
        assert!(slice_for_page(&items, 3, PAGE_SIZE).is_empty());
        assert!(slice_for_page(&items, 0, PAGE_SIZE).is_empty());
        assert!(slice_for_page(&items, usize::MAX, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_no_clamp_when_results_shrink() {
        let mut pagination = Pagination::new(3, 30);
        pagination.set_total_items(5);
        assert_eq!(pagination.current_page, 3);
        let items: Vec<usize> = (0..5).collect();
        assert!(pagination.slice(&items).is_empty());
    }

    // =============================================
    // ボタン
    // =============================================

    #[test]
    fn test_buttons_current_page_two_of_five() {
        let pagination = Pagination::new(2, 45);
        let buttons = pagination.buttons();

        assert_eq!(buttons.len(), 5);
        assert!(buttons[1].disabled);
        assert_eq!(buttons.iter().filter(|b| b.disabled).count(), 1);

        let clicks: Vec<usize> = buttons
            .iter()
            .filter(|b| b.page == 4)
            .filter_map(|b| b.click())
            .collect();
        assert_eq!(clicks, vec![4]);
    }

    #[test]
    fn test_page_change_and_reset() {
        let mut pagination = Pagination::new(1, 50);
        pagination.on_page_change(4);
        assert_eq!(pagination.current_page, 4);
        assert!(pagination.has_next());
        assert!(pagination.has_prev());

        pagination.reset();
        assert_eq!(pagination.current_page, 1);
        assert!(!pagination.has_prev());
    }

    #[test]
    fn test_parse_page_param() {
        assert_eq!(parse_page_param(None), 1);
        assert_eq!(parse_page_param(Some("3")), 3);
        assert_eq!(parse_page_param(Some("0")), 1);
        assert_eq!(parse_page_param(Some("-2")), 1);
        assert_eq!(parse_page_param(Some("abc")), 1);
    }
}
