pub mod scatter;
mod genres;
mod help_dialog;
mod kpi_panel;
mod regions;
mod timeline;
mod toolbar;
mod top_list;

pub use genres::render_genres_tab;
pub use help_dialog::render_help_dialog;
pub use kpi_panel::render_kpi_panel;
pub use regions::render_regions_tab;
pub use timeline::render_timeline_tab;
pub use toolbar::render_toolbar;
pub use top_list::render_top_list;
