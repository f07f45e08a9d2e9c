//! Console session
//!
//! Drives one or more games over an `InputReader`/`OutputWriter` pair:
//! difficulty prompt, briefing, the command cycle, and the replay prompt.

use std::io::ErrorKind;

use crate::game_engine::GameEngine;
use crate::io::{InputReader, OutputWriter};
use crate::models::config::{Difficulty, GameConfig};
use crate::models::constants::Device;
use crate::models::dice::Dice;
use crate::models::errors::{GameError, GameResult};
use crate::ui::presenters::{EventPresenter, ScanPresenter, SessionPresenter, StatusPresenter};

const COMMAND_PROMPT: &str = "COMMAND (R,S,L,G,P,T,W): ";
const COURSE_PROMPT: &str = "COURSE (1.0-9.0)? ";

/// One-letter console commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status,
    ShortRange,
    LongRange,
    GalaxyMap,
    Phasers,
    Torpedo,
    Warp,
    Unknown,
}

impl Command {
    /// Only the first letter counts, in either case.
    pub fn parse(input: &str) -> Option<Command> {
        let letter = input.trim().chars().next()?;
        Some(match letter.to_ascii_uppercase() {
            'R' => Command::Status,
            'S' => Command::ShortRange,
            'L' => Command::LongRange,
            'G' => Command::GalaxyMap,
            'P' => Command::Phasers,
            'T' => Command::Torpedo,
            'W' => Command::Warp,
            _ => Command::Unknown,
        })
    }

    /// The device the command needs, if any.
    pub fn device(&self) -> Option<Device> {
        match self {
            Command::ShortRange => Some(Device::ShortRangeSensor),
            Command::LongRange => Some(Device::LongRangeSensor),
            Command::GalaxyMap => Some(Device::ComputerDisplay),
            Command::Phasers => Some(Device::Phaser),
            Command::Torpedo => Some(Device::PhotonTubes),
            Command::Warp => Some(Device::WarpEngine),
            Command::Status | Command::Unknown => None,
        }
    }
}

pub struct Game<I: InputReader, O: OutputWriter> {
    input: I,
    output: O,
    config: GameConfig,
    seed: Option<u64>,
    games_played: u64,
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    /// With a seed, game `n` of the session uses `seed + n`; without one
    /// every game draws from OS entropy.
    pub fn new(input: I, output: O, config: GameConfig, seed: Option<u64>) -> Self {
        Game {
            input,
            output,
            config,
            seed,
            games_played: 0,
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Play games until the captain declines another. Running out of input
    /// ends the session as if they had.
    pub fn run(&mut self) -> GameResult<()> {
        match self.session() {
            Err(GameError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                tracing::debug!("input closed");
            }
            other => other?,
        }
        self.output.writeln("GOOD BYE.");
        self.output.flush()?;
        Ok(())
    }

    fn session(&mut self) -> GameResult<()> {
        loop {
            let mut engine = self.new_game()?;
            self.play(&mut engine)?;

            self.output.writeln("");
            self.output.write("ANOTHER GAME (Y OR N)? ");
            if !self.read_yes_no()? {
                return Ok(());
            }
        }
    }

    fn new_game(&mut self) -> GameResult<GameEngine> {
        self.output.write("DO YOU WANT A DIFFICULT GAME (Y OR N)? ");
        let difficulty = if self.read_yes_no()? {
            Difficulty::Difficult
        } else {
            Difficulty::Normal
        };

        let seed = self.seed.map(|s| s.wrapping_add(self.games_played));
        self.games_played += 1;
        let dice = match seed {
            Some(s) => Dice::seeded(s),
            None => Dice::from_entropy(),
        };
        tracing::info!(?difficulty, ?seed, game = self.games_played, "new game");

        let engine = GameEngine::with_config(self.config.clone(), difficulty, dice);
        SessionPresenter::show_briefing(engine.briefing(), &mut self.output);
        Ok(engine)
    }

    /// Run the command cycle until the game ends.
    pub fn play(&mut self, engine: &mut GameEngine) -> GameResult<()> {
        loop {
            let report = match engine.advance_turn() {
                Ok(report) => report,
                Err(GameError::GameOver(state)) => {
                    SessionPresenter::show_game_over(&state, &mut self.output);
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            EventPresenter::show_turn(&report, &mut self.output);

            self.output.writeln("");
            let line = self.prompt(COMMAND_PROMPT)?;
            let Some(command) = Command::parse(&line) else {
                continue;
            };

            let gated = command
                .device()
                .is_some_and(|d| engine.galaxy().enterprise().is_damaged(d));
            if gated {
                self.output.writeln("DEVICE DAMAGED.");
                continue;
            }

            match self.execute(engine, command) {
                Ok(()) => {}
                Err(GameError::InputRejected(reason)) => {
                    tracing::debug!(%reason, "command cancelled");
                }
                Err(e) => return Err(e),
            }

            let events = engine.klingon_attack()?;
            EventPresenter::show(&events, &mut self.output);
        }
    }

    fn execute(&mut self, engine: &mut GameEngine, command: Command) -> GameResult<()> {
        match command {
            Command::Status => StatusPresenter::show(&engine.status(), &mut self.output),
            Command::ShortRange => {
                ScanPresenter::show_short_range(&engine.short_range_scan()?, &mut self.output)
            }
            Command::LongRange => {
                ScanPresenter::show_long_range(&engine.long_range_scan()?, &mut self.output)
            }
            Command::GalaxyMap => {
                ScanPresenter::show_galaxy_map(&engine.galaxy_map()?, &mut self.output)
            }
            Command::Phasers => self.phasers(engine)?,
            Command::Torpedo => self.torpedo(engine)?,
            Command::Warp => self.warp(engine)?,
            Command::Unknown => self
                .output
                .writeln("PLEASE USE ONE OF THESE COMMANDS: R,S,L,G,P,T,W"),
        }
        Ok(())
    }

    fn phasers(&mut self, engine: &mut GameEngine) -> GameResult<()> {
        let line = self.prompt("ENERGY UNITS TO FIRE? ")?;
        let amount = match line.trim().parse::<i32>() {
            Ok(amount) if amount > 0 => amount,
            _ => {
                self.output.writeln("CANCELLED.");
                return Ok(());
            }
        };

        match engine.fire_phasers(amount) {
            Ok(events) => EventPresenter::show(&events, &mut self.output),
            Err(GameError::InsufficientResources { available, .. }) => self
                .output
                .writeln(&format!("SPOCK: WE HAVE ONLY {} UNITS.", available)),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn torpedo(&mut self, engine: &mut GameEngine) -> GameResult<()> {
        match engine.check_torpedo_ready() {
            Ok(()) => self.output.writeln("LOADED"),
            Err(GameError::InsufficientResources { .. }) => {
                self.output.writeln("EMPTY");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        let Some(heading) = self.read_number(COURSE_PROMPT)? else {
            return Ok(());
        };
        let events = engine.fire_torpedo(heading)?;
        EventPresenter::show(&events, &mut self.output);
        Ok(())
    }

    fn warp(&mut self, engine: &mut GameEngine) -> GameResult<()> {
        let Some(factor) = self.read_number("WARP FACTOR (0-8)? ")? else {
            return Ok(());
        };
        match engine.check_warp(factor) {
            Ok(_) => {}
            Err(GameError::InsufficientResources { .. }) => {
                self.output.writeln("SCOTTY: WE DO NOT HAVE THE ENERGY.");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        let Some(heading) = self.read_number(COURSE_PROMPT)? else {
            return Ok(());
        };
        let events = engine.warp(factor, heading)?;
        EventPresenter::show(&events, &mut self.output);
        Ok(())
    }

    // ========== Input helpers ==========

    fn prompt(&mut self, text: &str) -> GameResult<String> {
        self.output.write(text);
        self.output.flush()?;
        Ok(self.input.read_line()?)
    }

    /// `None` when the reply is not a number.
    fn read_number(&mut self, text: &str) -> GameResult<Option<f64>> {
        let line = self.prompt(text)?;
        Ok(line.trim().parse::<f64>().ok())
    }

    fn read_yes_no(&mut self) -> GameResult<bool> {
        loop {
            self.output.flush()?;
            let answer = self.input.read_line()?.trim().to_ascii_uppercase();
            if answer.starts_with('Y') {
                return Ok(true);
            }
            if answer.starts_with('N') {
                return Ok(false);
            }
            self.output.write("Y OR N? ");
        }
    }
}
