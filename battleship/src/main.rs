// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use broadside::{
    board::{CannotAttackReason, CannotPlaceReason},
    config::{ShipClass, BOARD_SIZE, FLEET},
    game::{FireError, Game, Side},
    player::RngSelector,
    setup, Axis, Board, Coordinate, Player, ShipId, ShotOutcome,
};

mod logging;

/// Matcher for the setup placement command.
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:place|put)\s+
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)\s+
        (?P<axis>h|v|horizontal|vertical)$",
    )
    .unwrap()
});

/// Matcher for a shot coordinate.
static SHOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$").unwrap());

fn main() -> io::Result<()> {
    logging::init_logging();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship against a hunting computer opponent.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first-player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed every random choice for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("auto")
                .short("a")
                .long("auto")
                .help("watch the computer play against itself"),
        )
        .get_matches();

    let seed = if matches.is_present("seed") {
        value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit())
    } else {
        rand::random()
    };
    info!("using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    if matches.is_present("auto") {
        simulate(&mut rng)?;
        println!("{}", ReplayHint(seed));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    loop {
        play_round(&matches, &mut rng, &mut input)?;
        println!("{}", ReplayHint(seed));
        println!();
        if !input.read_input_lower("Play again? (y/N)", play_again_choice)? {
            return Ok(());
        }
    }
}

/// Set up fresh players and play one interactive game. Every random choice comes from
/// the session's `rng`, so a seed reproduces all rounds in order.
fn play_round(
    matches: &ArgMatches,
    rng: &mut StdRng,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    let human_side = choose_side(matches, rng, input)?;

    let mut human = Player::seeded(rng.gen());
    choose_placements(rng, human.board_mut(), input)?;
    let bot = computer_player(rng)?;

    let game = match human_side {
        Side::First => Game::new(human, bot),
        Side::Second => Game::new(bot, human),
    };
    play(game, human_side, input)
}

/// A computer player with a randomly placed fleet.
fn computer_player(rng: &mut StdRng) -> io::Result<Player<RngSelector<StdRng>>> {
    let mut bot = Player::seeded(rng.gen());
    setup::place_fleet(bot.board_mut(), rng).map_err(to_io)?;
    Ok(bot)
}

fn play_again_choice(input: &str) -> Option<bool> {
    match input {
        "yes" | "y" => Some(true),
        "no" | "n" | "" => Some(false),
        _ => {
            println!("Invalid selection.");
            None
        }
    }
}

/// Choose which [`Side`] the human plays based on either args or cli input.
fn choose_side<B: BufRead>(
    matches: &ArgMatches,
    rng: &mut impl Rng,
    input: &mut InputReader<B>,
) -> io::Result<Side> {
    Ok(if let Some(clichoice) = matches.value_of("first_player") {
        match clichoice.to_ascii_lowercase().as_str() {
            "human" | "me" => Side::First,
            "computer" | "bot" => Side::Second,
            _ if rng.gen() => Side::First,
            _ => Side::Second,
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Side::First),
            "no" | "n" | "second" | "2" | "2nd" => Some(Side::Second),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Place every ship of the fleet using input from the player.
fn choose_placements(
    rng: &mut impl Rng,
    board: &mut Board,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Place(Coordinate, Axis),
        RandomizeRest,
        Help,
    }
    println!();
    println!("Place ships. Type help or ? for commands.");
    while let Some(class) = FLEET.get(board.ships().len()) {
        println!();
        println!("Your current board setup:");
        show_revealed_board(board);
        println!();
        println!("Next ship: {} (length {})", class.name(), class.length());

        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "randomize" | "rand" | "random" => Some(Command::RandomizeRest),
            other => match PLACE.captures(other) {
                Some(captures) => {
                    let start = parse_coordinate(&captures)?;
                    let axis = match &captures["axis"] {
                        "h" | "horizontal" => Axis::Horizontal,
                        _ => Axis::Vertical,
                    };
                    Some(Command::Place(start, axis))
                }
                None => {
                    println!("Invalid ship-placement command \"{}\". Use '?' for help", other);
                    None
                }
            },
        })?;

        match cmd {
            Command::Place(start, axis) => {
                if let Err(err) = board.place_ship(class.length(), start, axis) {
                    match err.reason() {
                        CannotPlaceReason::InvalidCoordinate => println!(
                            "Invalid placement: {} is not on the board.",
                            err.placement().start
                        ),
                        CannotPlaceReason::InsufficientSpace => println!(
                            "Invalid placement: runs off the board or overlaps another ship."
                        ),
                        CannotPlaceReason::InvalidSize => println!("Invalid placement: {}", err),
                    }
                }
            }
            Command::RandomizeRest => {
                let placed = board.ships().len();
                let sizes: Vec<_> = FLEET[placed..].iter().map(ShipClass::length).collect();
                if let Err(err) = setup::place_randomly(board, &sizes, rng) {
                    println!("Could not place the remaining ships: {}", err);
                }
            }
            Command::Help => {
                println!(
                    "Available Commands:
    place <row>,<col> <h|v>     place the next ship with its first cell at the given
        coordinate, running right (h) or down (v).
    randomize                   randomize the placements of the remaining ships."
                );
            }
        }
    }
    println!();
    println!("Your fleet:");
    show_revealed_board(board);
    Ok(())
}

/// Run the interactive game until one side wins.
fn play<S: broadside::Selector>(
    mut game: Game<S, S>,
    human_side: Side,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    let bot_side = human_side.opponent();
    while game.winner().is_none() {
        if game.current() == human_side {
            println!();
            println!("Computer's board:");
            show_obfuscated_board(game.board(bot_side));
            println!();
            println!("Your board:");
            show_revealed_board(game.board(human_side));
            println!();

            let coord = input.read_input_lower("Fire at <row>,<col>:", |input| {
                match SHOT.captures(input) {
                    Some(captures) => parse_coordinate(&captures),
                    None => {
                        println!("Expected a coordinate like 3,4");
                        None
                    }
                }
            })?;
            match game.fire(coord) {
                Ok(outcome) => println!("You fire at {}: {}", coord, OutcomeText(outcome)),
                Err(FireError::Attack(err)) => match err.reason() {
                    CannotAttackReason::InvalidCoordinate => {
                        println!("{} is not on the board.", coord)
                    }
                    CannotAttackReason::AlreadyAttacked => {
                        println!("You already fired at {}.", coord)
                    }
                },
                Err(err @ FireError::AlreadyOver) => return Err(to_io(err)),
            }
        } else {
            let shot = game.fire_auto().map_err(to_io)?;
            println!("Computer fires at {}: {}", shot.coord, OutcomeText(shot.outcome));
        }
    }

    println!();
    println!("Computer's board:");
    show_revealed_board(game.board(bot_side));
    println!();
    println!("Your board:");
    show_revealed_board(game.board(human_side));
    println!();
    if game.winner() == Some(human_side) {
        println!("You win after {} shots!", game.shots(human_side));
    } else {
        println!("The computer wins after {} shots.", game.shots(bot_side));
    }
    Ok(())
}

/// Play the computer against itself and print a summary.
fn simulate(rng: &mut StdRng) -> io::Result<()> {
    let first = computer_player(rng)?;
    let second = computer_player(rng)?;
    let mut game = Game::new(first, second);
    while game.winner().is_none() {
        game.fire_auto().map_err(to_io)?;
    }

    for &side in &[Side::First, Side::Second] {
        println!("{:?} player's board ({} shots fired):", side, game.shots(side));
        show_revealed_board(game.board(side));
        println!();
    }
    if let Some(winner) = game.winner() {
        println!("{:?} player wins.", winner);
    }
    Ok(())
}

/// Pull the row and column out of a matched command, reporting unusable numbers.
fn parse_coordinate(captures: &regex::Captures) -> Option<Coordinate> {
    let row = captures["row"].parse::<usize>();
    let col = captures["col"].parse::<usize>();
    match (row, col) {
        (Ok(row), Ok(col)) => Some(Coordinate::new(row, col)),
        _ => {
            println!(
                "coordinates must be numbers in range [0,{}]",
                BOARD_SIZE - 1
            );
            None
        }
    }
}

fn to_io<E>(err: E) -> io::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    io::Error::new(io::ErrorKind::Other, err)
}

/// Print out the fully-revealed board.
fn show_revealed_board(board: &Board) {
    enum RevealedCell {
        Empty,
        Shot,
        NotShot(ShipAbbreviation),
        Hit(ShipAbbreviation),
        Sunk(ShipAbbreviation),
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("~~"),
                RevealedCell::Shot => f.pad("x"),
                RevealedCell::NotShot(ship) => fmt::Display::fmt(ship, f),
                RevealedCell::Hit(ship) => f.pad(&format!("x{}", ship.abbrev())),
                RevealedCell::Sunk(ship) => f.pad(&format!("X{}", ship.abbrev())),
            }
        }
    }
    show_board(board.grid().rows().map(move |row| {
        row.iter().map(move |cell| match cell.ship() {
            None if cell.hit() => RevealedCell::Shot,
            None => RevealedCell::Empty,
            Some(id) if is_sunk(board, id) => RevealedCell::Sunk(ShipAbbreviation(id)),
            Some(id) if cell.hit() => RevealedCell::Hit(ShipAbbreviation(id)),
            Some(id) => RevealedCell::NotShot(ShipAbbreviation(id)),
        })
    }))
}

/// Print out the board as the opponent sees it: only shots are visible.
fn show_obfuscated_board(board: &Board) {
    enum HiddenCell {
        NotShot,
        Miss,
        Hit,
        Sunk(ShipAbbreviation),
    }
    impl fmt::Display for HiddenCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                HiddenCell::NotShot => f.pad("~~"),
                HiddenCell::Miss => f.pad("x"),
                HiddenCell::Hit => f.pad("X"),
                HiddenCell::Sunk(ship) => f.pad(&format!("X{}", ship.abbrev())),
            }
        }
    }
    show_board(board.grid().rows().map(move |row| {
        row.iter().map(move |cell| match cell.ship() {
            _ if !cell.hit() => HiddenCell::NotShot,
            None => HiddenCell::Miss,
            Some(id) if is_sunk(board, id) => HiddenCell::Sunk(ShipAbbreviation(id)),
            Some(_) => HiddenCell::Hit,
        })
    }))
}

fn is_sunk(board: &Board, id: ShipId) -> bool {
    board.get_ship(id).map_or(false, |ship| ship.is_sunk())
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items
fn show_board(rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("   ");
    for i in 0..BOARD_SIZE {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Fleet class of a ship. Both boards place [`FLEET`] in order, so IDs line up with it.
fn ship_class(id: ShipId) -> Option<&'static ShipClass> {
    FLEET.get(id.index())
}

/// Display helper telling the user how to reproduce the session.
struct ReplayHint(u64);

impl fmt::Display for ReplayHint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Replay this session with --seed {}", self.0)
    }
}

/// Display helper for a shot result.
struct OutcomeText(ShotOutcome);

impl fmt::Display for OutcomeText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            ShotOutcome::Miss => f.pad("miss"),
            ShotOutcome::Hit(_) => f.pad("hit!"),
            ShotOutcome::Sunk(id) => match ship_class(id) {
                Some(class) => write!(f, "sunk the {}!", class.name()),
                None => write!(f, "sunk ship {}!", id),
            },
        }
    }
}

/// Display helper that prints the ship's type abbreviation
struct ShipAbbreviation(ShipId);

impl ShipAbbreviation {
    fn abbrev(&self) -> &'static str {
        match ship_class(self.0).map(ShipClass::name) {
            Some("Carrier") => "cv",
            Some("Battleship") => "bb",
            Some("Cruiser") => "cl",
            Some("Submarine") => "ss",
            Some("Destroyer") => "dd",
            _ => "??",
        }
    }
}

impl fmt::Display for ShipAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.abbrev())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Exits the
    /// process on end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
