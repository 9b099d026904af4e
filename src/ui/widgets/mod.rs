pub mod chart_view;
pub mod data_selector;
pub mod notice_list;
pub mod palette;
pub mod preview_table;

pub use chart_view::ChartWidget;
pub use data_selector::DataSelector;
pub use notice_list::NoticeList;
pub use preview_table::PreviewTable;
