//! UI rendering with Ratatui.
//!
//! Everything here reads from the [`GameSession`]; nothing mutates it.
//! - Status header, map, quest and message panels
//! - One overlay per non-exploring mode
use frontier_content::Glyph;
use frontier_core::{
    CombatSession, GameMode, ItemOracle, ModeState, Position, RecipeOracle, World,
};
use frontier_runtime::GameSession;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListDirection, ListItem, Paragraph, Wrap},
};

pub const MESSAGE_PANEL_HEIGHT: u16 = 8;

const COMBAT_HINT: &str =
    "Actions: 1-Attack 2-Fireball 3-Heal 4-Use HP Potion 5-Use MP Potion 6-Shield Esc-Flee";

pub fn render(frame: &mut Frame, session: &GameSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(MESSAGE_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], session);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);
    render_map(frame, body[0], session);
    render_quests(frame, body[1], session);

    render_messages(frame, chunks[2], session);
    render_footer(frame, chunks[3], session.mode());

    match session.controller().state() {
        ModeState::Exploring => {}
        ModeState::InCombat(combat) => render_combat(frame, body[0], session, combat),
        ModeState::InDialogue { npc, selection } => {
            if let Some(npc) = session.world().npc(*npc) {
                let node = npc.dialogue().current();
                let options: Vec<&str> = node.options.iter().map(|o| o.text.as_str()).collect();
                let area = centered(body[0], 80, 60);
                let mut lines = vec![Line::from(node.text.as_str()), Line::from("")];
                lines.extend(menu_lines(&options, *selection));
                render_overlay(frame, area, npc.name(), lines);
            }
        }
        ModeState::InInventory { selection } => {
            let names: Vec<&str> = session
                .player()
                .inventory()
                .iter()
                .map(|item| item.name())
                .collect();
            let lines = if names.is_empty() {
                vec![Line::from("Inventory empty.")]
            } else {
                menu_lines(&names, *selection)
            };
            render_overlay(frame, centered(body[0], 60, 70), "Inventory", lines);
        }
        ModeState::InCrafting { selection } => {
            let rows = recipe_rows(session);
            let lines = if rows.is_empty() {
                vec![Line::from("No recipes available.")]
            } else {
                let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
                menu_lines(&rows, *selection)
            };
            render_overlay(frame, centered(body[0], 70, 70), "Crafting", lines);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, session: &GameSession) {
    let stats = session.player().stats();
    let text = vec![Line::from(vec![
        Span::styled(
            format!("HP {}/{}", stats.health(), stats.max_health()),
            Style::default().fg(Color::Red),
        ),
        Span::raw("  "),
        Span::styled(
            format!("MP {}/{}", stats.mana(), stats.max_mana()),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("  "),
        Span::styled(
            format!("LV {}", stats.level()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(format!(
            "  EXP {}/{}",
            stats.experience(),
            session.player().experience_to_next()
        )),
        Span::styled(
            format!("  [{}]", session.mode()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Frontier"));
    frame.render_widget(paragraph, area);
}

fn render_map(frame: &mut Frame, area: Rect, session: &GameSession) {
    let world = session.world();
    let map = world.map();
    let player = session.player().position();

    let rows = (0..map.height())
        .map(|y| {
            let spans = (0..map.width())
                .map(|x| {
                    let (glyph, style) = glyph_at(session, Position::new(x, y), player);
                    Span::styled(glyph.to_string(), style)
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} ({}×{})", map.name(), map.width(), map.height())),
    );
    frame.render_widget(paragraph, area);
}

fn glyph_at(session: &GameSession, position: Position, player: Position) -> (char, Style) {
    let world = session.world();
    if position == player {
        return (
            '@',
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    }
    if world
        .enemies()
        .iter()
        .any(|enemy| enemy.is_alive() && enemy.position() == position)
    {
        return ('E', Style::default().fg(Color::Red));
    }
    if world.npcs().iter().any(|npc| npc.position() == position) {
        return ('N', Style::default().fg(Color::Yellow));
    }
    if world.resource_at(position).is_some() {
        return ('*', Style::default().fg(Color::Green));
    }

    match world.map().glyph_at(position) {
        Some(Glyph::Wall) => ('#', Style::default().fg(Color::Gray)),
        Some(Glyph::Water) => ('~', Style::default().fg(Color::Blue)),
        _ => ('.', Style::default().fg(Color::DarkGray)),
    }
}

fn render_quests(frame: &mut Frame, area: Rect, session: &GameSession) {
    let quests = session.quests().list_active();
    let lines: Vec<Line> = if quests.is_empty() {
        vec![Line::from(Span::styled(
            "No active quests.",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        quests
            .iter()
            .flat_map(|quest| {
                [
                    Line::from(Span::styled(
                        format!("{} {}/{}", quest.name(), quest.progress(), quest.required()),
                        Style::default().fg(Color::Cyan),
                    )),
                    Line::from(Span::styled(
                        quest.description().to_string(),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Quests"));
    frame.render_widget(paragraph, area);
}

/// Newest message at the bottom.
fn render_messages(frame: &mut Frame, area: Rect, session: &GameSession) {
    let visible = MESSAGE_PANEL_HEIGHT.saturating_sub(2) as usize;
    let items: Vec<ListItem> = session
        .messages()
        .recent(visible)
        .map(|message| ListItem::new(message.to_string()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);
    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect, mode: GameMode) {
    let text = match mode {
        GameMode::Exploring => {
            "Move: arrows/WASD | E: interact | I: inventory | C: crafting | K: save | L: load | Q: quit"
        }
        GameMode::InCombat => COMBAT_HINT,
        GameMode::InDialogue => "Up/Down: choose | Enter: confirm | Esc: leave",
        GameMode::InInventory => "Up/Down: choose | Enter: use | I/Esc: close",
        GameMode::InCrafting => "Up/Down: choose | Enter: craft | C/Esc: close",
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn render_combat(frame: &mut Frame, area: Rect, session: &GameSession, combat: &CombatSession) {
    let enemy = combat.enemy();
    let player = session.player();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(enemy.name().to_string(), Style::default().fg(Color::Red)),
            Span::raw(format!(" HP {}/{}", enemy.health(), enemy.max_health())),
        ]),
        Line::from(format!(
            "You HP {}/{}  MP {}/{}",
            player.stats().health(),
            player.stats().max_health(),
            player.stats().mana(),
            player.stats().max_mana()
        )),
        Line::from(format!("Round {} | {} turn", combat.rounds() + 1, combat.whose_turn())),
        Line::from(""),
    ];

    for skill in player.skills().iter() {
        let status = match skill.current_cooldown() {
            0 => format!("{} MP", skill.mana_cost()),
            turns => format!("cooldown {}", turns),
        };
        lines.push(Line::from(Span::styled(
            format!("{} ({})", skill.name(), status),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(""));
    lines.extend(combat.log().iter().map(|entry| Line::from(entry.to_string())));

    render_overlay(frame, centered(area, 90, 90), "Combat", lines);
}

fn render_overlay(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn menu_lines<'a>(rows: &[&'a str], selection: usize) -> Vec<Line<'a>> {
    let selection = selection.min(rows.len().saturating_sub(1));
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            if index == selection {
                Line::from(Span::styled(
                    format!("> {}", row),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", row))
            }
        })
        .collect()
}

/// `"Health Potion <- herbx3"` for every recipe in the book.
fn recipe_rows(session: &GameSession) -> Vec<String> {
    let oracles = session.oracles();
    let items = oracles.items();
    oracles
        .recipes()
        .recipes()
        .iter()
        .map(|recipe| {
            let name = items
                .create(recipe.output())
                .map(|item| item.name().to_string())
                .unwrap_or_else(|| recipe.output().to_string());
            let ingredients = recipe
                .ingredients()
                .iter()
                .map(|ingredient| format!("{}x{}", ingredient.item, ingredient.count))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} <- {}", name, ingredients)
        })
        .collect()
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
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
