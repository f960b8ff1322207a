// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod play_main;
mod tui;

use std::io;

use clap::{Command, arg};

use crate::tui::Charset;

fn main() -> io::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Checkers")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Play checkers against the computer in the terminal")
        .arg(
            arg!(--"seed" <seed> "Seed for the computer's choices; random if omitted")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(arg!(--"ascii" "Render the board with plain ASCII characters and no colors"))
        .get_matches();

    play_main::run(play_main::PlayConfig {
        seed: matches.get_one::<u64>("seed").copied(),
        charset: if matches.get_flag("ascii") { Charset::Ascii } else { Charset::Unicode },
    })
}
