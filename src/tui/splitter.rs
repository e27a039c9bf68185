//! TUI for the proxy splitter with per-scheme panels and export keys

use crate::proxy::{BundleExporter, ClassifiedBundle, ProxyScheme};
use crate::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Panel colors per scheme, in priority order
const SCHEME_COLORS: [Color; 3] = [Color::Green, Color::Yellow, Color::Magenta];

/// Proxy splitter TUI application state
pub struct SplitterApp {
    /// Classified bundle being displayed
    bundle: ClassifiedBundle,
    /// Name of the loaded input file (for the title)
    source: String,
    /// Directory export keys write into
    output_dir: Option<PathBuf>,
    /// Selected panel (index into ProxyScheme::ALL)
    selected_panel: usize,
    /// Selected item in the current panel
    list_state: ListState,
    /// Status message
    status_message: String,
    /// Whether the user wants to quit
    should_quit: bool,
}

impl SplitterApp {
    /// Create a new splitter TUI application
    pub fn new(bundle: ClassifiedBundle, source: String, output_dir: Option<PathBuf>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let status_message = format!(
            "Proxies processed successfully | dropped: {} | h/4/5 export one, a export all, q quit",
            bundle.dropped
        );

        Self {
            bundle,
            source,
            output_dir,
            selected_panel: 0,
            list_state,
            status_message,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.ui(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key.code);
                        if self.should_quit {
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.selected_panel = (self.selected_panel + 1) % ProxyScheme::ALL.len();
                self.list_state.select(Some(0));
            }
            KeyCode::Down => {
                let len = self.bundle.count(ProxyScheme::ALL[self.selected_panel]);
                let i = match self.list_state.selected() {
                    Some(i) => {
                        if i >= len.saturating_sub(1) {
                            0
                        } else {
                            i + 1
                        }
                    }
                    None => 0,
                };
                self.list_state.select(Some(i));
            }
            KeyCode::Up => {
                let len = self.bundle.count(ProxyScheme::ALL[self.selected_panel]);
                let i = match self.list_state.selected() {
                    Some(i) => {
                        if i == 0 {
                            len.saturating_sub(1)
                        } else {
                            i - 1
                        }
                    }
                    None => 0,
                };
                self.list_state.select(Some(i));
            }
            KeyCode::Char('h') => self.export_scheme(ProxyScheme::Http),
            KeyCode::Char('4') => self.export_scheme(ProxyScheme::Socks4),
            KeyCode::Char('5') => self.export_scheme(ProxyScheme::Socks5),
            KeyCode::Char('a') => self.export_all(),
            _ => {}
        }
    }

    /// Export one scheme's bucket, if it has entries and a directory is set
    fn export_scheme(&mut self, scheme: ProxyScheme) {
        let Some(dir) = self.output_dir.clone() else {
            self.status_message = "No output directory configured (pass -o)".to_string();
            return;
        };

        if self.bundle.count(scheme) == 0 {
            self.status_message = format!("Nothing to export for {}", scheme);
            return;
        }

        let result = std::fs::create_dir_all(&dir)
            .map_err(anyhow::Error::from)
            .and_then(|_| BundleExporter::write_scheme(&self.bundle, scheme, &dir));
        self.status_message = match result {
            Ok(Some(path)) => format!("Saved {} proxies to {:?}", self.bundle.count(scheme), path),
            Ok(None) => format!("Nothing to export for {}", scheme),
            Err(e) => format!("Export failed: {}", e),
        };
    }

    fn export_all(&mut self) {
        let Some(dir) = self.output_dir.clone() else {
            self.status_message = "No output directory configured (pass -o)".to_string();
            return;
        };

        if self.bundle.is_empty() {
            self.status_message = "Nothing to export".to_string();
            return;
        }

        self.status_message = match BundleExporter::write_all(&self.bundle, &dir) {
            Ok(written) => format!("Saved {} files to {:?}", written.len(), dir),
            Err(e) => format!("Export failed: {}", e),
        };
    }

    fn ui(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Scheme panels
                Constraint::Length(3), // Status bar
            ])
            .split(f.size());

        // Title
        let title = Paragraph::new(format!("Proxy Splitter - {}", self.source))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // One panel per scheme, side by side
        let panel_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(chunks[1]);

        for (i, scheme) in ProxyScheme::ALL.into_iter().enumerate() {
            let selected = i == self.selected_panel;
            Self::render_scheme_panel(
                f,
                panel_chunks[i],
                scheme,
                &self.bundle,
                selected,
                SCHEME_COLORS[i],
                if selected { Some(&mut self.list_state) } else { None },
            );
        }

        // Status bar
        let status = Paragraph::new(self.status_message.clone())
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status, chunks[2]);
    }

    fn render_scheme_panel(
        f: &mut Frame,
        area: Rect,
        scheme: ProxyScheme,
        bundle: &ClassifiedBundle,
        is_selected: bool,
        color: Color,
        list_state: Option<&mut ListState>,
    ) {
        let items: Vec<ListItem> = bundle
            .records(scheme)
            .iter()
            .map(|record| ListItem::new(record.address.clone()).style(Style::default().fg(color)))
            .collect();

        let block_title = format!("{} ({})", scheme.to_string().to_uppercase(), bundle.count(scheme));
        let border_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(block_title)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(">> ");

        if let Some(state) = list_state {
            f.render_stateful_widget(list, area, state);
        } else {
            f.render_widget(list, area);
        }
    }
}
