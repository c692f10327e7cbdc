use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::env;
use std::fs::File;
use std::io::{stdout, BufWriter, Stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use skyburst::config::{self, Command, Options};
use skyburst::driver::{finish_show, is_quit, surface_size_from, FrameClock, FIXED_DT};
use skyburst::effects::{self, Effect};
use skyburst::error::{FireworksError, Result};

fn init_logging(options: &Options) -> Result<()> {
    let Some(path) = &options.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(FireworksError::Log)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn surface_size() -> Result<(usize, usize)> {
    let (cols, rows) = terminal::size()?;
    surface_size_from(cols, rows)
}

fn event_loop<E: Effect>(effect: &mut E, stdout: &mut BufWriter<Stdout>) -> Result<()> {
    let mut last_frame = Instant::now();
    let mut clock = FrameClock::new();

    loop {
        if event::poll(Duration::from_millis(1))? {
            let event = event::read()?;
            match &event {
                Event::Key(key_event) => {
                    if is_quit(key_event) {
                        break;
                    }
                    effect.handle_event(&event);
                }
                Event::Resize(cols, rows) => {
                    // Collapsed terminals keep the last drawable size
                    if let Ok((width, height)) = surface_size_from(*cols, *rows) {
                        effect.resize(width, height);
                    }
                    execute!(stdout, Clear(ClearType::All))?;
                }
                _ => {
                    effect.handle_event(&event);
                }
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        for _ in 0..clock.advance(frame_time) {
            effect.update(FIXED_DT);
        }

        effect.render(stdout)?;
    }

    Ok(())
}

fn run_effect<E: Effect>(options: &Options) -> Result<()> {
    let (width, height) = surface_size()?;
    let mut effect = E::new(width, height, options)?;

    let stdout = stdout();
    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout);

    terminal::enable_raw_mode()?;
    let outcome = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All), EnableMouseCapture)
        .map_err(FireworksError::from)
        .and_then(|_| {
            tracing::info!(width, height, "show started");
            event_loop(&mut effect, &mut stdout)
        });

    // Raw mode is left even if leaving the alternate screen fails
    let leave = execute!(stdout, Show, LeaveAlternateScreen, DisableMouseCapture);
    let raw = terminal::disable_raw_mode();
    tracing::info!("show finished");

    finish_show(outcome, leave, raw)
}

fn main() {
    let options = match config::parse_args(env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            config::print_usage();
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            config::print_usage();
            std::process::exit(1);
        }
    };

    let result = init_logging(&options)
        .and_then(|_| run_effect::<effects::fireworks::FireworksEffect>(&options));

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("skyburst: {}", e);
        std::process::exit(1);
    }
}
