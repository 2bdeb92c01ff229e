//! Sidebar form: symbol, start date, end date and the "Show Data" button.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stocktrend_core::shell;

use crate::app::{parse_date, AppState, Field};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} ", shell::SIDEBAR_TITLE))
        .title_style(theme::accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let form = &app.form;
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for field in [Field::Symbol, Field::Start, Field::End] {
        let focused = form.focus == field;
        let value = form.value(field);

        lines.push(Line::from(Span::styled(field.label(), theme::neutral())));

        let value_style = if focused {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::text()
        };
        let mut spans = vec![Span::raw(" "), Span::styled(format!(" {value} "), value_style)];
        if focused {
            spans.push(Span::styled("▏", theme::accent()));
        }
        if field != Field::Symbol && parse_date(value).is_none() {
            spans.push(Span::styled(" !", theme::warning()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let button_style = if form.focus == Field::Submit {
        theme::accent_bold().add_modifier(Modifier::REVERSED)
    } else {
        theme::accent()
    };
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("[ {} ]", shell::SUBMIT_LABEL), button_style),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(""));

    for hint in [
        "[Tab] next field",
        "[Enter] show data",
        "[F1/F2] switch tab",
        "[PgUp/PgDn] scroll table",
        "[Esc] quit",
    ] {
        lines.push(Line::from(Span::styled(hint, theme::muted())));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
