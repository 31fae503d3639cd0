// Log panel rendering

use crate::dashboard::{DashboardState, SCROLL_TO_BOTTOM};
use crate::ui::Styles;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render the status line and the scrolling log
pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    dashboard_state: &mut DashboardState,
) {
    // Ensure area is valid
    if area.width == 0 || area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Log
            Constraint::Length(3), // Status bar (border + text + border)
        ])
        .split(area);

    render_log(f, chunks[0], dashboard_state);

    let status_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Status ", Styles::title()))
        .border_style(Styles::border())
        .padding(ratatui::widgets::Padding::new(1, 1, 0, 0));

    let status_para = Paragraph::new(dashboard_state.status_text.as_ref())
        .block(status_block)
        .style(Styles::text());

    f.render_widget(status_para, chunks[1]);
}

fn render_log(f: &mut Frame, area: Rect, dashboard_state: &mut DashboardState) {
    let output_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Log ", Styles::title()))
        .border_style(Styles::border())
        .padding(ratatui::widgets::Padding::new(1, 1, 0, 0));
    let output_inner = output_block.inner(area);

    let visible_height = output_inner.height as usize;
    let total_lines = dashboard_state.output_lines.len();
    let max_scroll = total_lines.saturating_sub(visible_height);

    // Resolve the "follow output" sentinel now that the height is known
    if dashboard_state.output_scroll == SCROLL_TO_BOTTOM {
        dashboard_state.scroll_to_bottom(visible_height);
    }
    dashboard_state.output_scroll = dashboard_state.output_scroll.min(max_scroll);

    let start_line = dashboard_state.output_scroll;
    let end_line = (start_line + visible_height).min(total_lines);

    let visible_lines: Vec<Line> = if dashboard_state.output_lines.is_empty() {
        vec![Line::from(Span::styled(
            "Drop .m3 files here, or press o to open one.",
            Styles::muted(),
        ))]
    } else {
        dashboard_state.output_lines[start_line..end_line]
            .iter()
            .map(|line| Line::from(Span::styled(line.clone(), Styles::log_line(line))))
            .collect()
    };

    f.render_widget(output_block, area);

    // Leave one column for the scrollbar when it is shown
    let scrolling = total_lines > visible_height;
    let content_area = if scrolling {
        Rect {
            width: output_inner.width.saturating_sub(1),
            ..output_inner
        }
    } else {
        output_inner
    };

    f.render_widget(Paragraph::new(visible_lines), content_area);

    if scrolling {
        let scrollbar_area = Rect {
            x: output_inner.x + output_inner.width.saturating_sub(1),
            width: 1,
            ..output_inner
        };

        let mut scrollbar_state = ScrollbarState::new(total_lines)
            .viewport_content_length(visible_height)
            .position(dashboard_state.output_scroll);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .thumb_symbol("█")
            .track_symbol(Some("│"));

        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
