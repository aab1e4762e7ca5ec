use clap::{Arg, ArgMatches, Command};

pub fn get_arg_matches() -> ArgMatches {
    Command::new("hangman")
        .version("0.1")
        .about("Guess the word one letter at a time before the gallows fill up")
        .arg(
            Arg::new("dictionary")
                .short('d')
                .long("dictionary")
                .value_name("FILE")
                .default_value("words.txt")
                .help("custom dictionary file, a set of lowercase words split up by new lines"),
        )
        .arg(
            Arg::new("gallows")
                .short('g')
                .long("gallows")
                .value_name("FILE")
                .default_value("default.gallows")
                .help("custom gallows and body progression design, a set of stages separated by two new lines"),
        )
        .get_matches()
}
