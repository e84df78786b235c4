mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use radial_shooter::surface::Surface;
use radial_shooter::{Config, GameEvent, Session, SetupError};

use display::{Hud, OverlayLayout, TerminalSurface};

// ── Logging ───────────────────────────────────────────────────────────────────

/// Send log output to a file; stderr is unusable once the alternate screen is up.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum Action {
    Quit,
    Start,
    Fire(u16, u16),
}

/// Translate one terminal event into a game action, if it maps to one.
fn action_for(event: Event, hud: &Hud, layout: &OverlayLayout) -> Option<Action> {
    match event {
        Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') if hud.overlay_visible => {
                Some(Action::Start)
            }
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            if hud.overlay_visible {
                layout.button_contains(column, row).then_some(Action::Start)
            } else {
                Some(Action::Fire(column, row))
            }
        }
        _ => None,
    }
}

fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    surface: &mut TerminalSurface,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(rng, config.spawn_interval_ms, surface.width(), surface.height());
    let mut hud = Hud::new();
    let layout = OverlayLayout::new(surface.cols(), surface.term_rows());

    let frame = Duration::from_millis(config.frame_ms);
    let clock = Instant::now();

    loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match action_for(ev, &hud, &layout) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Start) => {
                    session.start_game(surface.width(), surface.height(), now_ms);
                }
                Some(Action::Fire(col, row)) => {
                    if let Some(target) = surface.to_world(col, row) {
                        session.click(target.x, target.y);
                    }
                }
                None => {}
            }
        }

        session.poll_spawner(now_ms);
        session.frame(surface, now_ms);

        for event in session.drain_events() {
            match event {
                GameEvent::GameStarted => hud.overlay_visible = false,
                GameEvent::ScoreChanged(score) => hud.set_score(score),
                GameEvent::GameOver { score } => {
                    hud.set_score(score);
                    hud.games_played += 1;
                    hud.overlay_visible = true;
                }
            }
        }

        display::render(out, surface, &hud)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(SetupError::from)?;
    init_logging(&config)?;
    log::info!("radial shooter starting: {:?}", config);

    let (cols, rows) = terminal::size().map_err(SetupError::from)?;
    let mut surface = TerminalSurface::new(cols, rows, config.cell_width, config.cell_height)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().map_err(SetupError::from)?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &config, &mut surface, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("terminal I/O failed: {}", err);
    }
    log::info!("radial shooter exiting");
    result.context("running game loop")
}
