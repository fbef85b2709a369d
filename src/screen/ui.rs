//! Screen rendering

use super::state::SearchState;
use crate::domain::GameRecord;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const TITLE: &str = "Game List";
pub const PLACEHOLDER: &str = "Search for a game...";
pub const LOADING: &str = "Loading games...";

/// Render the whole screen
pub fn render(frame: &mut Frame, state: &SearchState, list_state: &mut ListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search field
            Constraint::Min(0),    // Loading text or results
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_search_input(frame, state, chunks[1]);

    if state.is_loading() {
        frame.render_widget(Paragraph::new(LOADING), chunks[2]);
    } else {
        render_results(frame, state, list_state, chunks[2]);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_search_input(frame: &mut Frame, state: &SearchState, area: Rect) {
    let input = &state.query;
    let line = if input.text.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(input.text.as_str())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    frame.render_widget(Paragraph::new(line).block(block), area);

    let before_cursor = Span::raw(&input.text[..input.cursor]).width() as u16;
    frame.set_cursor_position((area.x + 1 + before_cursor, area.y + 1));
}

/// Two lines per game: the cover slot, then the title.
fn game_item(game: &GameRecord) -> ListItem<'static> {
    let cover = match game.cover() {
        Some(url) => Line::from(vec![
            Span::styled("▣ ", Style::default().fg(Color::Cyan)),
            Span::styled(url.to_string(), Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled("▢", Style::default().fg(Color::DarkGray))),
    };
    let title = Line::from(Span::styled(
        game.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    ListItem::new(vec![cover, title])
}

fn render_results(frame: &mut Frame, state: &SearchState, list_state: &mut ListState, area: Rect) {
    let items: Vec<ListItem> = state.results.iter().map(game_item).collect();
    let list = List::new(items)
        .highlight_symbol("▌ ")
        .highlight_style(Style::default().fg(Color::Yellow));
    frame.render_stateful_widget(list, area, list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameId;
    use crate::error::FetchError;
    use crate::screen::state::StalePolicy;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &SearchState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let mut list_state = ListState::default();
        terminal
            .draw(|f| render(f, state, &mut list_state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn sample() -> Vec<GameRecord> {
        vec![
            GameRecord {
                id: GameId::Number(1),
                name: "A".into(),
                background_image: Some("http://x/a.png".into()),
            },
            GameRecord {
                id: GameId::Number(2),
                name: "B".into(),
                background_image: None,
            },
        ]
    }

    #[test]
    fn loading_replaces_the_list() {
        let mut state = SearchState::new(StalePolicy::default());
        state.begin_fetch();
        let lines = draw(&state);

        assert!(lines[0].contains(TITLE));
        assert!(lines[2].contains(PLACEHOLDER));
        assert!(lines[4].starts_with(LOADING));
    }

    #[test]
    fn renders_one_row_per_game_in_order() {
        let mut state = SearchState::new(StalePolicy::default());
        let ticket = state.begin_fetch();
        state.settle(ticket.seq, Ok(sample()));
        let lines = draw(&state);

        assert!(lines.iter().all(|l| !l.contains(LOADING)));
        assert!(lines[4].contains("▣ http://x/a.png"));
        assert_eq!(lines[5].trim(), "A");
        assert_eq!(lines[6].trim(), "▢");
        assert_eq!(lines[7].trim(), "B");
        assert!(lines[8..].iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn failed_fetch_looks_like_an_empty_list() {
        let mut state = SearchState::new(StalePolicy::default());
        let ticket = state.begin_fetch();
        state.settle(
            ticket.seq,
            Err(FetchError::Status {
                status: 500,
                body: "oops".into(),
            }),
        );
        let lines = draw(&state);

        assert!(lines[4..].iter().all(|l| l.trim().is_empty()));
        assert!(lines.iter().all(|l| !l.contains("500")));
    }

    #[test]
    fn search_field_shows_the_query() {
        let mut state = SearchState::new(StalePolicy::default());
        for c in "metroid".chars() {
            state.query.insert(c);
        }
        let lines = draw(&state);
        assert!(lines[2].contains("metroid"));
        assert!(!lines[2].contains(PLACEHOLDER));
    }
}
