use crate::gallows::Gallows;
use crate::game::Game;

const BOX_TOP: &str = " ___________________";
const BOX_BOTTOM: &str = "|___________________|";
const BOX_ROWS: usize = 6;
const SLOTS_PER_ROW: usize = 9;

/// Renders one full frame: a scroll-clear, the gallows stage for the
/// current bad-guess count with the bad-guess box beside it, then the
/// word outline.
pub fn render_frame(game: &Game, gallows: &Gallows) -> String {
    let bad_guesses = game.bad_guesses();
    let mut frame = String::new();
    frame.push_str(&"\n".repeat(10));
    frame.push_str(&render_stage(gallows.stage(bad_guesses.len()), &bad_guesses));
    frame.push('\n');
    frame.push_str(&game.revealed());
    frame.push('\n');
    frame.push_str(&"-".repeat(game.word().len()));
    frame.push('\n');
    frame
}

/// Draws the stage with the bad-guess box vertically centered next to it,
/// offset three columns past the widest stage line. Stages shorter than
/// the box render plain, without the box.
fn render_stage(stage: &str, bad_guesses: &[char]) -> String {
    let stage_lines: Vec<&str> = stage.split('\n').collect();
    let mut out = String::new();

    if stage_lines.len() < BOX_ROWS {
        for line in &stage_lines {
            out.push_str(line);
            out.push('\n');
        }
        return out;
    }

    let box_offset = stage_lines.iter().map(|line| line.len()).max().unwrap_or(0) + 3;
    let box_start = (stage_lines.len() - BOX_ROWS) / 2;

    for (i, line) in stage_lines.iter().enumerate() {
        if i < box_start || i >= box_start + BOX_ROWS {
            out.push_str(line);
            out.push('\n');
            continue;
        }
        out.push_str(line);
        out.push_str(&" ".repeat(box_offset - line.len()));
        if i == box_start {
            out.push_str(BOX_TOP);
        } else if i == box_start + BOX_ROWS - 1 {
            out.push_str(BOX_BOTTOM);
        } else {
            out.push_str("| ");
            let slot_base = (i - box_start - 1) * SLOTS_PER_ROW;
            for slot in slot_base..slot_base + SLOTS_PER_ROW {
                match bad_guesses.get(slot) {
                    Some(letter) => {
                        out.push(*letter);
                        out.push(' ');
                    }
                    None => out.push_str("  "),
                }
            }
            out.push('|');
        }
        out.push('\n');
    }
    out
}

pub fn win_screen() -> String {
    [
        "__  __               _       ___",
        "\\ \\/ /___  __  __   | |     / (_)___",
        " \\  / __ \\/ / / /   | | /| / / / __ \\",
        " / / /_/ / /_/ /    | |/ |/ / / / / /",
        "/_/\\____/\\__,_/     |__/|__/_/_/ /_/",
        "",
    ]
    .join("\n")
}

pub fn lose_screen(word: &str) -> String {
    let banner = [
        "__  __               __",
        "\\ \\/ /___  __  __   / /   ____  ________",
        " \\  / __ \\/ / / /  / /   / __ \\/ ___/ _ \\",
        " / / /_/ / /_/ /  / /___/ /_/ (__  )  __/",
        "/_/\\____/\\__,_/  /_____/\\____/____/\\___/",
        "",
    ]
    .join("\n");
    format!("{}\nThe word was: {}\n", banner, word)
}
