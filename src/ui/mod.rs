mod data_table;
mod gif_panel;
mod heatmap;
mod help_dialog;
mod line_chart;
mod sidebar;
mod stats_table;
mod toolbar;

pub use data_table::render_data_table;
pub use gif_panel::render_gif;
pub use heatmap::render_heatmap;
pub use help_dialog::render_help_dialog;
pub use line_chart::render_line_chart;
pub use sidebar::render_sidebar;
pub use toolbar::render_toolbar;
