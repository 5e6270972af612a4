//! Terminal UI that answers bin collection questions for Bradford districts.

mod app;
mod config;
mod input;
mod ui;

use std::{io, sync::Arc, time::Duration as StdDuration};

use anyhow::{Context, Result};
use binfo_core::{Agent, ScheduleStore};
use binfo_reviser_openai::OpenAiReviser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::input::Action;

const REVISION_TIMEOUT: StdDuration = StdDuration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is the normal case.
    drop(dotenvy::dotenv());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = config::Config::from_env();

    // Dataset problems are fatal: never serve queries from partial data.
    let store = ScheduleStore::load(&config.data_path)
        .with_context(|| format!("loading dataset from {}", config.data_path.display()))?;

    let mut agent = Agent::new(Arc::new(store));
    info!(
        districts = agent.store().all_district_codes().len(),
        "schedule store loaded"
    );
    if let Some(reviser_config) = &config.reviser {
        if reviser_config.api_key.is_none() {
            warn!("LLM_API_KEY not set; calling the reviser without authentication");
        }
        let client = Client::builder().user_agent("binfo/0.1").build()?;
        let reviser = OpenAiReviser::new(
            client,
            reviser_config.endpoint.clone(),
            reviser_config.model.clone(),
            reviser_config.api_key.clone(),
        );
        agent = agent.with_reviser(Arc::new(reviser), REVISION_TIMEOUT);
        info!(model = %reviser_config.model, "reviser enabled");
    }

    // App state
    let app = App::new(Arc::new(agent));

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::Submit => {
                    let question = app.input.trim().to_owned();
                    if question.is_empty() {
                        app.error_message = Some(
                            "Type a postcode district or area name, then press Enter".into(),
                        );
                        continue;
                    }

                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    // Deterministic resolution plus optional revision; the
                    // revised path falls back to the factual reply on its own.
                    let answer = app.agent.handle_query_revised(&question).await;

                    app.is_loading = false;
                    app.push_exchange(question, answer);
                    app.input.clear();
                }
            }
        }
    }

    Ok(())
}
