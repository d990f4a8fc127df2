//! The Textual User Interface for Polygon War.

use crate::Options;
use crossterm::style::{StyledContent, Stylize};
use polygon_engine::board::{Board, Position};
use polygon_engine::constants::{Color, Piece, BOARD_SIZE};
use polygon_engine::engine::Engine;
use polygon_engine::game::{Game, GameError, Victory, VictoryReason};
use polygon_engine::r#move::Move;
use std::io::{self, Write};

const HELP: &str = "Commands: a move (e.g. b2b4), 'moves <square>', 'undo', 'redo', 'board', 'history', 'exit'.";

/// Runs the main game loop for the text-based UI.
pub fn run(options: Options) {
    let mut game = Game::new();
    let mut engine = match options.seed {
        Some(seed) => Engine::with_seed(options.config.clone(), seed),
        None => Engine::new(options.config.clone()),
    };

    println!("--- Polygon War ---");
    println!("{HELP}");
    print_board(game.board(), &[]);

    loop {
        if let Some(victory) = game.outcome() {
            announce(victory);
            break;
        }
        let side = game.to_move();
        if !game.has_legal_move() {
            println!("{} has no legal move. Game over.", side_name(side));
            break;
        }

        if options.is_human(side) {
            // --- Player's Turn ---
            print!("{} to move> ", side_name(side));
            if io::stdout().flush().is_err() {
                break;
            }
            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            if !handle_command(input.trim(), &mut game, &options) {
                break;
            }
        } else {
            // --- Computer's Turn ---
            println!("Computer ({}) is thinking...", side_name(side));
            let Some(mv) = engine.get_ai_move(game.board(), side) else {
                println!("Computer has no move. Game over?");
                break;
            };
            if let Err(err) = game.play(mv) {
                log::warn!("engine produced {mv} which the game rejected: {err}");
                break;
            }
            println!("Computer moves: {} (nodes {})", mv, engine.nodes_searched);
            print_board(game.board(), &[]);
        }
    }
}

/// Executes one line of input. Returns false when the user asked to quit.
fn handle_command(input: &str, game: &mut Game, options: &Options) -> bool {
    let mut words = input.split_whitespace();
    match (words.next(), words.next()) {
        (None, _) => {}
        (Some("exit" | "quit"), _) => return false,
        (Some("help"), _) => println!("{HELP}"),
        (Some("board"), _) => print_board(game.board(), &[]),
        (Some("history"), _) => print_history(game),
        (Some("moves"), Some(square)) => match square.parse::<Position>() {
            Ok(pos) => {
                let moves = game.legal_moves_from(pos);
                if moves.is_empty() {
                    println!("No moves from {pos}.");
                } else {
                    print_board(game.board(), &moves);
                    let listed: Vec<String> = moves.iter().map(Move::to_string).collect();
                    println!("{}", listed.join(" "));
                }
            }
            Err(err) => println!("{err}"),
        },
        (Some("undo"), _) => report(step_back(game, options)),
        (Some("redo"), _) => report(step_forward(game, options)),
        (Some(text), _) => match game.play_notation(text) {
            Ok(mv) => {
                println!("You move: {mv}");
                print_board(game.board(), &[]);
            }
            Err(err) => println!("{err}"),
        },
    }
    true
}

/// Undoes moves until it is a human's turn again, so the computer does
/// not immediately replay what was just taken back.
fn step_back(game: &mut Game, options: &Options) -> Result<Move, GameError> {
    let mut last = game.undo()?;
    while !options.is_human(game.to_move()) {
        match game.undo() {
            Ok(mv) => last = mv,
            Err(_) => break,
        }
    }
    Ok(last)
}

fn step_forward(game: &mut Game, options: &Options) -> Result<Move, GameError> {
    let mut last = game.redo()?;
    while !options.is_human(game.to_move()) && game.outcome().is_none() {
        match game.redo() {
            Ok(mv) => last = mv,
            Err(_) => break,
        }
    }
    Ok(last)
}

fn report(result: Result<Move, GameError>) {
    match result {
        Ok(_) => {}
        Err(err) => println!("{err}"),
    }
}

fn print_history(game: &Game) {
    let moves: Vec<Move> = game.history().collect();
    if moves.is_empty() {
        println!("No moves yet.");
        return;
    }
    for (turn, pair) in moves.chunks(2).enumerate() {
        match pair {
            [first, second] => println!("{:>3}. {:<8} {}", turn + 1, first, second),
            [first] => println!("{:>3}. {}", turn + 1, first),
            _ => {}
        }
    }
}

/// Prints the board, marking the destinations in `highlights`.
fn print_board(board: &Board, highlights: &[Move]) {
    println!();
    println!("  +-----------------+");
    for row in 0..BOARD_SIZE {
        let mut line = format!("{} | ", BOARD_SIZE - row);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let marked = highlights.iter().any(|mv| mv.to == pos);
            let cell = match board.get(pos) {
                Some(piece) if marked => piece_glyph(piece).on_yellow(),
                Some(piece) => piece_glyph(piece),
                None if marked => '*'.yellow().bold(),
                None => '.'.dark_grey(),
            };
            line.push_str(&format!("{cell} "));
        }
        line.push('|');
        println!("{line}");
    }
    println!("  +-----------------+");
    println!("    a b c d e f g h");
    println!();
}

fn piece_glyph(piece: Piece) -> StyledContent<char> {
    let c = piece.to_layout_char();
    match piece.color {
        Color::Red => c.red().bold(),
        Color::Black => c.cyan().bold(),
    }
}

fn side_name(color: Color) -> StyledContent<&'static str> {
    match color {
        Color::Red => "Red".red().bold(),
        Color::Black => "Black".cyan().bold(),
    }
}

fn announce(victory: Victory) {
    let reason = match victory.reason {
        VictoryReason::OctagonsEliminated { loser } => {
            format!("{} has no Octagon left", side_name(loser))
        }
        VictoryReason::OctagonConsolidated => "its Octagons merged into one".to_string(),
    };
    println!("Game over! {} wins: {}.", side_name(victory.winner), reason);
}
