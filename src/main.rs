use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Stdout},
    panic,
    time::Instant,
};
use wordsprint::{
    app::{App, Flow},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore, RuntimeSettings},
    language::SupportedLanguage,
    logging,
    runtime::{CrosstermEventSource, EventSource, FixedTicker, GameEvent, Runner, Ticker},
    ui::screen::current_screen,
};

/// fast-paced typing game: type as many shuffled words as you can before the clock runs out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing game. Words are shown one at a time; type each one and press space. The clock starts with your first keystroke, and your score is reported as words per minute."
)]
pub struct Cli {
    /// number of seconds per round (defaults to the saved config, or 10)
    #[clap(short = 's', long, value_parser = clap::value_parser!(u64).range(1..))]
    secs: Option<u64>,

    /// word list to draw words from
    #[clap(short = 'l', long, value_enum)]
    language: Option<SupportedLanguage>,

    /// custom whitespace separated words to use instead of a built-in list
    #[clap(short = 'w', long)]
    words: Option<String>,

    /// remember the effective duration and language as defaults for future runs
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn settings(&self, cfg: &Config) -> RuntimeSettings {
        RuntimeSettings::resolve(cfg, self.secs, self.language, self.words.clone())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = AppDirs::log_path() {
        // playing without a log file is fine
        if let Err(e) = logging::init(&path) {
            eprintln!("logging disabled, cannot write {}: {e}", path.display());
        }
    }

    let store = FileConfigStore::new();
    let settings = cli.settings(&store.load());
    if cli.save_config {
        store.save(&Config::from(&settings))?;
        info!("saved defaults to {}", store.path().display());
    }

    let mut app = App::new(settings)?;

    install_panic_hook();
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    let result = start_tui(&mut terminal, &mut app, &runner);

    // a loop error outranks a restore error
    let restored = restore_terminal(&mut terminal);
    result?;
    restored?;
    Ok(())
}

/// Leave raw mode and the alternate screen before the panic message prints
fn install_panic_hook() {
    let default_panic = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = first_failure([
            disable_raw_mode(),
            execute!(io::stdout(), LeaveAlternateScreen, Show),
        ]);
        default_panic(info);
    }));
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    // every step runs before any result is looked at
    first_failure([
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ])
}

/// The first error among `results`, all of which have already been produced
fn first_failure<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    loop {
        let event = runner.step();
        let now = Instant::now();

        let flow = match event {
            GameEvent::Key(key) => app.handle_key(key, now),
            GameEvent::Resize | GameEvent::Tick => {
                app.advance_clock(now);
                Flow::Continue
            }
            GameEvent::Closed => {
                error!("no more terminal input, giving up");
                app.countdown = None;
                return Err("terminal input closed".into());
            }
        };
        if flow == Flow::Quit {
            break;
        }

        terminal.draw(|f| ui(app, f))?;
    }

    info!(
        "quit with score {}/{}",
        app.session.score(),
        app.session.current_index()
    );
    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    current_screen(&app.state).render(app, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::{sync::mpsc, time::Duration};
    use wordsprint::{
        app::{AnalyticsTab, AppState},
        runtime::ChannelEventSource,
    };

    fn key(code: KeyCode) -> GameEvent {
        GameEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn custom_app(words: &str) -> App {
        let cli = Cli::parse_from(["wordsprint", "-w", words]);
        App::new(cli.settings(&Config::default())).unwrap()
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["wordsprint"]);

        assert_eq!(cli.secs, None);
        assert_eq!(cli.language, None);
        assert_eq!(cli.words, None);
        assert!(!cli.save_config);

        let settings = cli.settings(&Config::default());
        assert_eq!(settings.duration_secs, 10);
        assert_eq!(settings.language, SupportedLanguage::English);
    }

    #[test]
    fn test_cli_secs() {
        let cli = Cli::parse_from(["wordsprint", "-s", "60"]);
        assert_eq!(cli.secs, Some(60));

        let cli = Cli::parse_from(["wordsprint", "--secs", "120"]);
        assert_eq!(cli.secs, Some(120));
    }

    #[test]
    fn test_cli_rejects_zero_secs() {
        let err = Cli::try_parse_from(["wordsprint", "-s", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_language() {
        let cli = Cli::parse_from(["wordsprint", "-l", "english-long"]);
        assert_eq!(cli.language, Some(SupportedLanguage::EnglishLong));

        let cli = Cli::parse_from(["wordsprint", "--language", "english"]);
        assert_eq!(cli.language, Some(SupportedLanguage::English));

        assert!(Cli::try_parse_from(["wordsprint", "-l", "klingon"]).is_err());
    }

    #[test]
    fn test_cli_custom_words_and_save() {
        let cli = Cli::parse_from(["wordsprint", "-w", "cat dog", "--save-config"]);
        assert_eq!(cli.words.as_deref(), Some("cat dog"));
        assert!(cli.save_config);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cfg = Config {
            duration_secs: 30,
            language: "englishlong".into(),
        };
        let cli = Cli::parse_from(["wordsprint", "-s", "5"]);
        let settings = cli.settings(&cfg);

        assert_eq!(settings.duration_secs, 5);
        assert_eq!(settings.language, SupportedLanguage::EnglishLong);
    }

    #[test]
    fn test_ui_draws_typing_screen() {
        let app = custom_app("zebra");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| ui(&app, f)).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("zebra"));
        assert!(content.contains("Timer: 10"));
    }

    #[test]
    fn test_start_tui_plays_a_round_and_quits() {
        let mut app = custom_app("ox");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let (tx, rx) = mpsc::channel();
        for event in [
            key(KeyCode::Char('o')),
            key(KeyCode::Char('x')),
            key(KeyCode::Char(' ')),
            key(KeyCode::Char('a')),
            key(KeyCode::Right),
            GameEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ] {
            tx.send(event).unwrap();
        }

        let runner = Runner::new(
            ChannelEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(5)),
        );
        start_tui(&mut terminal, &mut app, &runner).unwrap();

        assert!(app.session.has_finished());
        assert_eq!(app.session.score(), 1);
        assert_eq!(app.state, AppState::Analytics);
        assert_eq!(app.analytics_tab, AnalyticsTab::Wrong);
        assert!(app.countdown.is_none());
    }

    #[test]
    fn test_start_tui_ctrl_c_quits_mid_round() {
        let mut app = custom_app("one two three");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let (tx, rx) = mpsc::channel();
        tx.send(key(KeyCode::Char('o'))).unwrap();
        tx.send(GameEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();

        let runner = Runner::new(
            ChannelEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(5)),
        );
        start_tui(&mut terminal, &mut app, &runner).unwrap();

        assert!(app.session.has_started());
        assert!(!app.session.has_finished());
        assert!(app.countdown.is_none());
    }

    #[test]
    fn test_start_tui_gives_up_when_input_closes() {
        let mut app = custom_app("one two three");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let (tx, rx) = mpsc::channel();
        tx.send(key(KeyCode::Char('o'))).unwrap();
        drop(tx);

        let runner = Runner::new(ChannelEventSource::new(rx), FixedTicker::default());
        let err = start_tui(&mut terminal, &mut app, &runner).unwrap_err();

        assert_eq!(err.to_string(), "terminal input closed");
        assert!(app.session.has_started());
        assert!(app.countdown.is_none());
    }

    #[test]
    fn test_first_failure_keeps_the_earliest_error() {
        let results = [
            Ok(()),
            Err(io::Error::new(io::ErrorKind::Other, "raw mode")),
            Err(io::Error::new(io::ErrorKind::Other, "alternate screen")),
        ];
        assert_eq!(first_failure(results).unwrap_err().to_string(), "raw mode");

        assert!(first_failure([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_first_failure_sees_steps_after_an_error() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, ok: bool| {
            ran.push(name);
            if ok {
                Ok(())
            } else {
                Err(io::Error::new(io::ErrorKind::Other, name))
            }
        };

        let res = first_failure([step("raw", false), step("screen", true), step("cursor", true)]);

        assert!(res.is_err());
        assert_eq!(ran, ["raw", "screen", "cursor"]);
    }
}
