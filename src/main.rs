//! Math quiz - terminal driver
//!
//! Reads answers from stdin, ticks once per second during Time Trial turns
//! and prints whatever the engine reports. Game logic lives in the library.

mod cli;

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use mathquiz::{Leaderboard, MatchController, Operator, QuizEvent, QuizRng, StatusLine};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Everything the main loop waits on.
enum Input {
    Line(String),
    /// A one-second tick from the ticker with this generation.
    Tick(u64),
    Closed,
}

/// One-second ticker thread, restarted for every timed turn.
///
/// Ticks carry the generation of the ticker that sent them so a tick that
/// was already in flight when its ticker stopped is never delivered to the
/// next turn.
#[derive(Default)]
struct Ticker {
    generation: u64,
    stop: Option<Arc<AtomicBool>>,
}

impl Ticker {
    fn start(&mut self, tx: &Sender<Input>) {
        self.stop();
        self.generation += 1;

        let generation = self.generation;
        let stop = Arc::new(AtomicBool::new(false));
        let stopped = Arc::clone(&stop);
        let tx = tx.clone();

        thread::spawn(move || loop {
            thread::sleep(Duration::from_secs(1));
            if stopped.load(Ordering::Relaxed) || tx.send(Input::Tick(generation)).is_err() {
                break;
            }
        });
        self.stop = Some(stop);
    }

    fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop.store(true, Ordering::Relaxed);
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.stop.is_some() && generation == self.generation
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let (tx, rx) = mpsc::channel();
    spawn_stdin_reader(tx.clone());

    let mut ticker = Ticker::default();
    loop {
        let config = cli
            .setup_request(Vec::new())
            .validate()
            .context("input error; please check the number of players/questions/time limit")?;
        let names = read_names(&cli, config.player_names().len(), &rx)?;

        let rng = cli.seed.map_or_else(QuizRng::from_entropy, QuizRng::new);
        let mut quiz = MatchController::setup(&cli.setup_request(names), rng)?;
        info!(seed = quiz.seed(), mode = %quiz.mode(), "starting match");
        println!("Game mode: {} (seed {})", quiz.mode(), quiz.seed());

        let events = quiz.start_match();
        present(&events, &mut ticker, &tx);

        let finished = run_match(&mut quiz, &rx, &mut ticker, &tx)?;
        present(&quiz.reset_game(), &mut ticker, &tx);
        ticker.stop();

        if !finished || !ask_play_again(&rx)? {
            break;
        }
    }

    Ok(())
}

/// Feed input to the controller until the match finishes. Returns `false`
/// if stdin closed first.
fn run_match(
    quiz: &mut MatchController,
    rx: &Receiver<Input>,
    ticker: &mut Ticker,
    tx: &Sender<Input>,
) -> Result<bool> {
    while !quiz.is_finished() {
        match rx.recv().context("input channel closed")? {
            Input::Line(line) => match quiz.submit_answer(&line) {
                Ok(events) => present(&events, ticker, tx),
                Err(err) => {
                    println!("{err}");
                    prompt();
                }
            },
            Input::Tick(generation) if ticker.is_current(generation) => {
                present(&quiz.on_tick(), ticker, tx);
            }
            Input::Tick(generation) => debug!(generation, "stale tick dropped"),
            Input::Closed => return Ok(false),
        }
    }
    Ok(true)
}

fn present(events: &[QuizEvent], ticker: &mut Ticker, tx: &Sender<Input>) {
    for event in events {
        match event {
            QuizEvent::TurnStarted {
                name,
                score,
                status,
                ..
            } => println!("\n=== {name} ===  Score: {score}  {status}"),
            QuizEvent::TimerStarted { .. } => ticker.start(tx),
            QuizEvent::TimerStopped => ticker.stop(),
            QuizEvent::QuestionAsked {
                text,
                score,
                status,
            } => {
                println!("\n{text}    [Score: {score}  {status}]");
                prompt();
            }
            QuizEvent::Feedback { message, .. } => println!("{message}"),
            QuizEvent::StatusChanged(status @ StatusLine::Lives(_)) => println!("{status}"),
            QuizEvent::StatusChanged(status @ StatusLine::Time { left, low }) => {
                if *low && *left > 0 {
                    println!("\n{status} (hurry!)");
                    prompt();
                } else if *left > 0 && left % 10 == 0 {
                    println!("\n{status}");
                    prompt();
                }
            }
            QuizEvent::StatusChanged(StatusLine::Blank) => {}
            QuizEvent::TimeExpired => println!("\nTime's up! Your turn has ended"),
            QuizEvent::TurnEnded { score, .. } => println!("Turn over. Score: {score}"),
            QuizEvent::NextPlayer { name, .. } => println!("\n{name} it's your turn!"),
            QuizEvent::MatchFinished(board) => {
                println!("\n{board}");
                print_tallies(board);
            }
        }
    }
}

fn print_tallies(board: &Leaderboard) {
    println!("\n--- By Operator ---");
    for player in board.players() {
        let tally = player.log.tally_by_operator();
        let line: Vec<String> = Operator::ALL
            .iter()
            .filter_map(|op| tally.get(op).map(|t| format!("{op} {}/{}", t.correct, t.asked)))
            .collect();
        println!("{}: {}", player.name, line.join("  "));
    }
}

fn read_names(cli: &Cli, count: usize, rx: &Receiver<Input>) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        if let Some(name) = cli.names.get(i) {
            names.push(name.clone());
            continue;
        }

        print!("Enter Player {}'s name: ", i + 1);
        io::stdout().flush().ok();
        match read_line(rx)? {
            Some(name) => names.push(name),
            None => bail!("stdin closed during player setup"),
        }
    }
    Ok(names)
}

fn ask_play_again(rx: &Receiver<Input>) -> Result<bool> {
    print!("\nPlay again? [y/N] ");
    io::stdout().flush().ok();
    Ok(read_line(rx)?.is_some_and(|answer| {
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }))
}

/// Next line of input, skipping ticks. `None` once stdin is closed.
fn read_line(rx: &Receiver<Input>) -> Result<Option<String>> {
    loop {
        match rx.recv().context("input channel closed")? {
            Input::Line(line) => return Ok(Some(line)),
            Input::Tick(_) => {}
            Input::Closed => return Ok(None),
        }
    }
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}

fn spawn_stdin_reader(tx: Sender<Input>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Input::Closed);
    });
}
