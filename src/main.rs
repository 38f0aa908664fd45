use std::io;
use std::process::ExitCode;

use clap::{crate_version, Arg, ArgAction, Command};

use chess_match::board::{CastlingRule, MatchOptions};
use chess_match::cli::run_cli_loop;
use chess_match::ChessMatch;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    let matches = Command::new("chess_match")
        .version(crate_version!())
        .about("Two-player console chess")
        .arg(
            Arg::new("lenient-castling")
                .long("lenient-castling")
                .help("Allow castling out of, through or into check")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("play-after-mate")
                .long("play-after-mate")
                .help("Keep accepting moves once a side is checkmated")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let castling = if matches.get_flag("lenient-castling") {
        CastlingRule::Lenient
    } else {
        CastlingRule::Strict
    };
    let options = MatchOptions::default()
        .castling(castling)
        .enforce_game_over(!matches.get_flag("play-after-mate"));

    let mut game = ChessMatch::with_options(options);
    let stdin = io::stdin();
    match run_cli_loop(&mut game, stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
