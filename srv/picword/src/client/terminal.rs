use std::io::{self, Write};
use std::time::Instant;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::api::GameApi;
use crate::client::player::{Player, Tone};

const HELP: &str = "\
  <n>          place letter n from the bank
  x <w> <s>    clear slot s of word w
  c            check answer
  h            hint
  n            new game
  q            quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Bank index, zero-based
    Place(usize),
    /// Token and position, zero-based
    Remove(usize, usize),
    Check,
    Hint,
    NewGame,
    Help,
    Quit,
}

/// Parse one input line; numbers are typed one-based
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;

    let command = match head {
        "c" | "check" => Command::Check,
        "h" | "hint" => Command::Hint,
        "n" | "new" => Command::NewGame,
        "q" | "quit" => Command::Quit,
        "?" | "help" => Command::Help,
        "x" | "rm" => {
            let token: usize = parts.next()?.parse().ok()?;
            let position: usize = parts.next()?.parse().ok()?;
            Command::Remove(token.checked_sub(1)?, position.checked_sub(1)?)
        }
        number => {
            let index: usize = number.parse().ok()?;
            Command::Place(index.checked_sub(1)?)
        }
    };

    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

fn print_screen(player: &Player) -> io::Result<()> {
    println!();
    match player.game() {
        Some(game) => println!("{}", game.render()),
        None => println!("(no game loaded)"),
    }
    if let Some(message) = player.message() {
        let marker = match message.tone {
            Tone::Info => "i",
            Tone::Success => "+",
            Tone::Error => "!",
        };
        println!("[{}] {}", marker, message.text);
    }
    print!("> ");
    io::stdout().flush()
}

/// Interactive round loop on stdin/stdout
pub async fn play(server_url: &str) -> io::Result<()> {
    let mut player = Player::new(GameApi::new(server_url));
    println!("Loading...");
    player.start_new_game().await;
    print_screen(&player)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Place(index)) => {
                player.place_letter(index);
            }
            Some(Command::Remove(token, position)) => {
                player.remove_letter(token, position);
            }
            Some(Command::Check) => player.check_answer(Instant::now()).await,
            Some(Command::Hint) => player.request_hint(Instant::now()).await,
            Some(Command::NewGame) => {
                println!("Loading...");
                player.start_new_game().await;
            }
            Some(Command::Help) | None => println!("{}", HELP),
        }
        print_screen(&player)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("3"), Some(Command::Place(2)));
        assert_eq!(parse_command("  12 "), Some(Command::Place(11)));
        assert_eq!(parse_command("x 2 1"), Some(Command::Remove(1, 0)));
        assert_eq!(parse_command("c"), Some(Command::Check));
        assert_eq!(parse_command("hint"), Some(Command::Hint));
        assert_eq!(parse_command("n"), Some(Command::NewGame));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_command_rejects_garbage() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("x 1"), None);
        assert_eq!(parse_command("x 0 1"), None);
        assert_eq!(parse_command("c now"), None);
        assert_eq!(parse_command("mèo"), None);
    }

    #[actix_web::test]
    async fn test_print_screen_without_game() {
        let player = Player::new(GameApi::new("http://127.0.0.1:1"));
        assert!(print_screen(&player).is_ok());
    }
}
