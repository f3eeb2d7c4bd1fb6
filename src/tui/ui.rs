use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::retrieval::DataLoader;
use crate::tui::component::Component;
use crate::tui::components::{DetailPanel, FilterPanel, ResultsList, TitleBar};
use crate::tui::{Focus, TuiState};

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState, loader: &DataLoader) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    // Title bar: source + load status + view counts
    let mut title_bar = TitleBar {
        source_label: loader.active_source().unwrap_or("—").to_string(),
        load_state: loader.state().clone(),
        loaded_at: tui.loaded_at,
        shown: tui.results.filtered().len(),
        total: tui.results.resources().len(),
    };
    title_bar.render(frame, title_area);

    // Main area: filters | results | details
    let [filter_area, results_area, detail_area] =
        Layout::horizontal([Percentage(28), Percentage(42), Percentage(30)]).areas(main_area);

    FilterPanel::new(&tui.filter_panel, tui.focus == Focus::Filters).render(frame, filter_area);
    ResultsList::new(&mut tui.results, tui.focus == Focus::Results).render(frame, results_area);
    DetailPanel::new(tui.detail.as_ref()).render(frame, detail_area);

    // Help line
    let help = Line::from(" Tab Switch panel  Enter Apply/Select  Ctrl+R Reset  Esc Quit ")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}
