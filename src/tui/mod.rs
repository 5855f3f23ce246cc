pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::app::{AppContext, Result};
use crate::controller::FetchRequest;
use crate::domain::Page;

use self::app::{InputMode, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// A finished fetch on its way back to the UI loop.
type Completion = (FetchRequest, Result<Page>);

pub async fn run(ctx: Arc<AppContext>, query: Option<String>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, query).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, query: Option<String>) -> Result<()> {
    let mut tui_app = TuiApp::new(ctx.controller(), ctx.config.search.view_options());
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();

    let initial = tui_app.submit_query(query.as_deref().unwrap_or(""));
    spawn_fetch(&ctx, initial, &tx);

    loop {
        while let Ok((request, result)) = rx.try_recv() {
            let next = tui_app.complete(request, result);
            spawn_fetch(&ctx, next, &tx);
        }

        terminal.draw(|frame| layout::render(frame, &mut tui_app, &ctx.config.colors))?;

        if let AppEvent::Key(key) = event_handler.next()? {
            match tui_app.input_mode {
                InputMode::Editing => {
                    let request = handle_editing_key(&mut tui_app, key);
                    spawn_fetch(&ctx, request, &tx);
                }
                InputMode::Normal => {
                    let action = ctx.config.keybindings.get_action(&key);
                    let request = handle_action(&mut tui_app, action);
                    spawn_fetch(&ctx, request, &tx);
                }
            }
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_editing_key(tui_app: &mut TuiApp, key: KeyEvent) -> Option<FetchRequest> {
    match key.code {
        KeyCode::Enter => return tui_app.submit(),
        KeyCode::Esc => tui_app.cancel_editing(),
        KeyCode::Backspace => tui_app.pop_char(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            tui_app.should_quit = true;
        }
        KeyCode::Char(c) => tui_app.push_char(c),
        _ => {}
    }
    None
}

fn handle_action(tui_app: &mut TuiApp, action: Action) -> Option<FetchRequest> {
    match action {
        Action::Quit => tui_app.should_quit = true,
        Action::MoveUp => tui_app.move_up(),
        Action::MoveDown => tui_app.move_down(),
        Action::Search => tui_app.start_editing(),
        Action::LoadMore => return tui_app.load_more(),
        Action::Dismiss => tui_app.dismiss_selected(),
        Action::Sort(key) => tui_app.sort(key),
        Action::OpenInBrowser => {
            if let Some(link) = tui_app.selected_item().map(|item| item.link()) {
                if let Err(e) = open::that(&link) {
                    tui_app.set_status(format!("Failed to open browser: {}", e));
                }
            }
        }
        Action::None => {}
    }
    None
}

/// Run `request` on its own task and post the outcome back to the loop.
fn spawn_fetch(ctx: &AppContext, request: Option<FetchRequest>, tx: &UnboundedSender<Completion>) {
    let Some(request) = request else {
        return;
    };
    let fetcher = ctx.fetcher.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = fetcher.fetch(&request).await;
        if tx.send((request, result)).is_err() {
            tracing::debug!("UI closed before fetch completed");
        }
    });
}
