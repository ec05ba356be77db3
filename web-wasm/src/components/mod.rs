pub mod card_list;
pub mod detail_card;
pub mod fallback_boundary;
pub mod flyout;
pub mod forms;
pub mod header;
pub mod pagination;
pub mod search_bar;
pub mod spinner;
pub mod theme_switcher;
