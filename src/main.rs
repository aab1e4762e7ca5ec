use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use hangman::cli::get_arg_matches;
use hangman::dictionary::{choose_word, extract_dictionary};
use hangman::gallows::Gallows;
use hangman::game::Game;
use hangman::screen;

fn main() -> Result<()> {
    let matches = get_arg_matches();
    let gallows = Gallows::from_file(matches.get_one::<String>("gallows").unwrap())?;
    let dictionary = extract_dictionary(matches.get_one::<String>("dictionary").unwrap())?;
    let word = choose_word(&dictionary).context("dictionary contains no usable words")?;

    let mut game = Game::new(word);
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let mut input = String::new();

    loop {
        stdout.write_all(screen::render_frame(&game, &gallows).as_bytes())?;

        // the losing frame wins over a completed word, as a last bad guess
        // and the final letter can arrive in the same word guess
        if game.is_lost(gallows.stage_count()) {
            stdout.write_all(screen::lose_screen(game.word()).as_bytes())?;
            break;
        }
        if game.is_won() {
            stdout.write_all(screen::win_screen().as_bytes())?;
            break;
        }

        stdout.write_all(b"Guess> ")?;
        stdout.flush()?;
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            // stdin closed, leave the session without a verdict
            break;
        }
        game.record_guess(input.trim());
    }
    Ok(())
}
