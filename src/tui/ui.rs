//! TUI UI rendering

use super::app::{App, InputMode, Notification, NotificationKind, ViewMode};
use crate::game::{DoorChooser, DoorView, Phase, Statistics};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap},
};

/// Draw the UI based on current app state
pub fn draw<C: DoorChooser>(f: &mut Frame, app: &App<C>) {
    match app.view_mode {
        ViewMode::Game => draw_game(f, app),
        ViewMode::Help => draw_help(f),
    }

    if let Some(notification) = &app.notification {
        draw_notification(f, notification);
    }
}

fn draw_game<C: DoorChooser>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Instruction
            Constraint::Length(7), // Doors
            Constraint::Min(10),   // Statistics + chart
            Constraint::Length(3), // Trial count input
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    // Header
    let header = Paragraph::new(format!(
        "Monty Hall Simulator - {}",
        app.session.phase().name()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Instruction
    let instruction = Paragraph::new(app.session.instruction())
        .style(Style::default().fg(Color::LightCyan))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(instruction, chunks[1]);

    draw_doors(f, app, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[3]);
    draw_stats(f, app.session.stats(), bottom[0]);
    draw_chart(f, app.session.stats(), bottom[1]);

    // Trial count input
    let editing = app.input_mode == InputMode::Editing;
    let input_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if editing { "_" } else { "" };
    let input = Paragraph::new(format!("{}{}", app.trial_input, cursor))
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Number of simulations"),
        );
    f.render_widget(input, chunks[4]);

    // Footer
    let footer_text = if editing {
        "[Enter] Run Simulation | [Backspace] Delete | [Esc] Cancel".to_string()
    } else {
        let decide = if app.session.phase() == Phase::Selected {
            "[s] Switch | [k] Stay | "
        } else {
            ""
        };
        format!(
            "[1-3] Pick Door | {}[r] Reset | [n] Edit Count | [Enter] Run Simulation | [h/?] Help | [q] Quit",
            decide
        )
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[5]);
}

fn draw_doors<C: DoorChooser>(f: &mut Frame, app: &App<C>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (view, column) in app.session.door_views().iter().zip(columns.iter()) {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Door {}", view.door),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if let Some(caption) = view.caption {
            lines.push(Line::from(caption));
        }

        let door = Paragraph::new(lines)
            .style(door_style(view))
            .centered()
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(door, *column);
    }
}

fn door_style(view: &DoorView) -> Style {
    let style = Style::default();
    if view.revealed && !view.winner {
        style.fg(Color::Black).bg(Color::Red)
    } else if view.selected {
        style.fg(Color::Black).bg(Color::Yellow)
    } else if view.winner {
        style.fg(Color::Black).bg(Color::Green)
    } else if view.selectable {
        style.fg(Color::White)
    } else {
        style.fg(Color::DarkGray)
    }
}

fn draw_stats(f: &mut Frame, stats: &Statistics, area: Rect) {
    let text = vec![
        Line::from(format!("Total trials: {}", stats.trials)),
        Line::from(format!(
            "Switch wins: {} ({:.1}%)",
            stats.switch_wins,
            stats.switch_win_rate()
        )),
        Line::from(format!(
            "Stay wins: {} ({:.1}%)",
            stats.stay_wins,
            stats.stay_win_rate()
        )),
    ];
    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Win rates in tenths of a percent so the bars keep one decimal
fn draw_chart(f: &mut Frame, stats: &Statistics, area: Rect) {
    let colors = [Color::Cyan, Color::Yellow];
    let bars: Vec<Bar> = stats
        .chart_series()
        .iter()
        .zip(colors)
        .map(|((label, rate), color)| {
            Bar::default()
                .value((rate * 10.0).round() as u64)
                .text_value(format!("{:.1}%", rate))
                .label(Line::from(*label))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Monty Hall Win Rates"),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(3)
        .max(1000);
    f.render_widget(chart, area);
}

fn draw_notification(f: &mut Frame, notification: &Notification) {
    let area = centered_rect(50, 30, f.area());
    let color = match notification.kind {
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Error => Color::Red,
    };

    let mut lines: Vec<Line> = notification.message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(notification.title.as_str())
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Draw help screen
fn draw_help(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Help content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    // Header
    let header = Paragraph::new("Help")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![Span::styled("About", bold)]),
        Line::from("  A car hides behind one of three doors and goats behind the other two."),
        Line::from("  After you pick, the host opens another door with a goat and offers a switch."),
        Line::from("  Switching wins about 2/3 of the time, staying only about 1/3: your first"),
        Line::from("  pick is right 1/3 of the time, and switching wins exactly when it is wrong."),
        Line::from(""),
        Line::from(vec![Span::styled("Playing", bold)]),
        Line::from("  1 / 2 / 3    - Pick a door"),
        Line::from("  s            - Switch to the remaining door"),
        Line::from("  k            - Keep (stay with) your door"),
        Line::from("  r            - Reset and start a new round"),
        Line::from(""),
        Line::from(vec![Span::styled("Simulation", bold)]),
        Line::from("  n            - Edit the number of simulations"),
        Line::from("  Enter        - Run the simulation (replaces statistics)"),
        Line::from("  Esc          - Stop editing"),
        Line::from(""),
        Line::from(vec![Span::styled("General", bold)]),
        Line::from("  h or ?       - This help screen"),
        Line::from("  q            - Quit application"),
        Line::from(""),
        Line::from(vec![Span::styled("Door Colors", bold)]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("■", Style::default().fg(Color::Yellow)),
            Span::raw(" Selected   - Your pick"),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("■", Style::default().fg(Color::Red)),
            Span::raw(" Revealed   - Opened by the host, a goat"),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("■", Style::default().fg(Color::Green)),
            Span::raw(" Winner     - The car, shown once the round ends"),
        ]),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keyboard Shortcuts & Legend"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(help_widget, chunks[1]);

    // Footer
    let footer = Paragraph::new("[h/Esc] Back to Game | [q] Quit")
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::random::testing::Scripted;
    use crate::game::{Door, Session};
    use ratatui::{Terminal, backend::TestBackend};

    fn render<C: DoorChooser>(app: &App<C>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_game_screen() {
        let app = App::new(Session::new(Scripted::new([1])), 1000);
        let screen = render(&app);

        assert!(screen.contains("Door 1"));
        assert!(screen.contains("Door 3"));
        assert!(screen.contains("Select a door to begin!"));
        assert!(screen.contains("Total trials: 0"));
    }

    #[test]
    fn test_renders_reveal_and_notification() {
        let mut app = App::new(Session::new(Scripted::new([1])), 1000);
        app.session.select_door(Door::One);
        assert!(render(&app).contains("Goat"));

        app.trial_input = "abc".to_string();
        app.run_batch();
        assert!(render(&app).contains("Please enter a positive number"));
    }

    #[test]
    fn test_renders_help() {
        let mut app = App::new(Session::new(Scripted::new([0])), 10);
        app.set_view_mode(ViewMode::Help);
        let screen = render(&app);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("About"));
        assert!(screen.contains("Switching wins about 2/3 of the time"));
        // legend is still on screen below the longer help text
        assert!(screen.contains("Winner"));
    }

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(50, 30, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 50);
    }
}
