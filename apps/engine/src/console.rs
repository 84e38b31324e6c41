//! Line-oriented console adapter over the session engine.
//!
//! This is deliberately a thin surface: it parses command lines, calls one
//! service operation per verb, and formats the outcome. No game rules live
//! here. Table-wide verbs (`start`, `score`, ...) are bare; player verbs are
//! written `<name> <verb> [args]` since a terminal has no ambient identity
//! the way a chat platform does.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::io::AsyncBufReadExt;

use crate::domain::parse_card_phrase;
use crate::domain::scoring::RoundReport;
use crate::domain::snapshot::SessionPublic;
use crate::domain::Card;
use crate::error::AppError;
use crate::services::SessionService;

const DEFAULT_PREFIX: &str = "!";

#[derive(Debug, Serialize, Deserialize)]
struct PrefixFile {
    prefix: String,
}

/// Load the persisted command prefix, falling back to `!`.
pub async fn load_prefix(path: &Path) -> String {
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice::<PrefixFile>(&bytes)
            .map(|f| f.prefix)
            .unwrap_or_else(|_| DEFAULT_PREFIX.to_string()),
        Err(_) => DEFAULT_PREFIX.to_string(),
    }
}

async fn save_prefix(path: &Path, prefix: &str) -> Result<(), AppError> {
    let bytes = serde_json::to_vec_pretty(&PrefixFile {
        prefix: prefix.to_string(),
    })
    .map_err(|err| AppError::io(format!("encode prefix: {err}")))?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|err| AppError::io(format!("write {}: {err}", path.display())))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Join { player: String },
    Leave { player: String },
    Bid { player: String, amount: u8 },
    Play { player: String, card: Card },
    Start,
    Score,
    Reset,
    Rules,
    Help,
    Prefix { new: String },
    Quit,
}

/// Parse one command line (prefix already stripped).
pub fn parse_command(input: &str) -> Result<Command, AppError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let usage = |detail: &str| AppError::Validation {
        code: "USAGE",
        detail: detail.to_string(),
    };

    match tokens.as_slice() {
        [] => Err(usage("Empty command; try `help`")),
        ["start"] => Ok(Command::Start),
        ["score"] => Ok(Command::Score),
        ["reset"] => Ok(Command::Reset),
        ["rules"] => Ok(Command::Rules),
        ["help" | "helpme"] => Ok(Command::Help),
        ["quit" | "exit"] => Ok(Command::Quit),
        ["prefix", new] => Ok(Command::Prefix {
            new: (*new).to_string(),
        }),
        ["prefix"] => Err(usage("Usage: prefix <new>")),
        [player, "join"] => Ok(Command::Join {
            player: (*player).to_string(),
        }),
        [player, "leave"] => Ok(Command::Leave {
            player: (*player).to_string(),
        }),
        [player, "bid", amount] => {
            let amount: u8 = amount
                .parse()
                .map_err(|_| usage("Usage: <name> bid <tricks>"))?;
            Ok(Command::Bid {
                player: (*player).to_string(),
                amount,
            })
        }
        [player, "play", phrase @ ..] if !phrase.is_empty() => {
            let card = parse_card_phrase(&phrase.join(" "))?;
            Ok(Command::Play {
                player: (*player).to_string(),
                card,
            })
        }
        _ => Err(usage("Unrecognized command; try `help`")),
    }
}

pub struct Console {
    service: SessionService,
    prefix_path: PathBuf,
    prefix: String,
}

impl Console {
    pub fn new(service: SessionService, prefix_path: PathBuf, prefix: String) -> Self {
        Self {
            service,
            prefix_path,
            prefix,
        }
    }

    /// Read command lines from stdin until EOF or `quit`.
    pub async fn run(mut self) -> Result<(), AppError> {
        println!(
            "Call Break table ready. Type {}help for commands.",
            self.prefix
        );
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|err| AppError::io(format!("read stdin: {err}")))?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some(rest) = line.strip_prefix(&self.prefix) else {
                println!(
                    "Commands start with `{}` (try {}help).",
                    self.prefix, self.prefix
                );
                continue;
            };
            match parse_command(rest) {
                Err(err) => print_error(&err),
                Ok(Command::Quit) => break,
                Ok(cmd) => self.dispatch(cmd).await,
            }
        }
        Ok(())
    }

    async fn dispatch(&mut self, cmd: Command) {
        let result = match cmd {
            Command::Join { player } => self.service.join(player.clone()).await.map(|()| {
                println!("{player} joined the game.");
            }),
            Command::Leave { player } => self.service.leave(&player).await.map(|outcome| {
                println!("{player} left the game.");
                if let Some(trick) = outcome.resolved_trick {
                    println!("{} takes the trick with {}.", trick.winner, trick.card);
                }
                if let Some(report) = outcome.round_over {
                    print_report(&report);
                } else if outcome.roster_emptied {
                    println!("Table is empty; game reset.");
                } else if let Some(next) = outcome.next_turn {
                    println!("Next turn: {next}");
                }
            }),
            Command::Start => self.service.start().await.map(|outcome| {
                if outcome.leftover.is_empty() {
                    println!("Cards dealt, {} each. Bidding is open.", outcome.hand_size);
                } else {
                    println!(
                        "Cards dealt, {} each ({} set aside). Bidding is open.",
                        outcome.hand_size,
                        outcome.leftover.len()
                    );
                }
            }),
            Command::Bid { player, amount } => {
                self.service.bid(&player, amount).await.map(|outcome| {
                    println!("{player} bid {amount}.");
                    if let Some(first) = outcome.first_turn {
                        println!("All bids are in. First turn: {first}");
                    }
                })
            }
            Command::Play { player, card } => {
                self.service.play(&player, card).await.map(|outcome| {
                    println!("{player} played {card}.");
                    if let Some(trick) = outcome.trick {
                        println!("{} takes the trick with {}.", trick.winner, trick.card);
                    }
                    if let Some(report) = outcome.round_over {
                        print_report(&report);
                    } else if let Some(next) = outcome.next_turn {
                        println!("Next turn: {next}");
                    }
                })
            }
            Command::Score => {
                print_standings(&self.service.standings());
                Ok(())
            }
            Command::Reset => self.service.reset().await.map(|()| {
                println!("Game reset.");
            }),
            Command::Rules => {
                print_rules();
                Ok(())
            }
            Command::Help => {
                print_help(&self.prefix);
                Ok(())
            }
            Command::Prefix { new } => match save_prefix(&self.prefix_path, &new).await {
                Ok(()) => {
                    println!("Command prefix changed to `{new}`.");
                    self.prefix = new;
                    Ok(())
                }
                Err(err) => Err(err),
            },
            Command::Quit => Ok(()),
        };
        if let Err(err) = result {
            print_error(&err);
        }
    }
}

fn print_error(err: &AppError) {
    println!("error [{}]: {}", err.code(), err);
}

fn print_report(report: &RoundReport) {
    println!("Round {} over.", report.round);
    for line in &report.lines {
        let bid = line
            .bid
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        let verdict = if line.success { "hit" } else { "missed" };
        println!(
            "  {}: bid {bid}, took {}, {verdict}",
            line.player, line.tricks_won
        );
    }
    if report.winners.is_empty() {
        println!("No one hit their bid this round.");
    } else {
        println!("Winners: {}", report.winners.join(", "));
    }
}

fn print_standings(view: &SessionPublic) {
    println!("Round {} ({:?})", view.round, view.phase);
    for seat in &view.seats {
        let bid = seat
            .bid
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}: bid {}, tricks {}, wins {}, {} cards in hand",
            seat.player, bid, seat.tricks_won, seat.wins, seat.cards_left
        );
    }
    if !view.current_trick.is_empty() {
        let plays = view
            .current_trick
            .iter()
            .map(|(p, c)| format!("{p} {c}"))
            .collect::<Vec<_>>()
            .join(", ");
        match view.lead_suit {
            Some(lead) => println!("Current trick: {plays} (lead {lead})"),
            None => println!("Current trick: {plays}"),
        }
    }
    if let Some(next) = &view.to_act {
        println!("Next turn: {next}");
    }
}

fn print_rules() {
    println!("Call Break rules:");
    println!("1. Everyone gets an equal share of the 52-card deck; leftovers sit out.");
    println!("2. Bid the number of tricks you aim to take, then play one card per turn.");
    println!("3. You must beat the highest card of the lead suit when you can.");
    println!("4. If you can't beat it, throw a spade if you have one.");
    println!("5. Otherwise any card goes.");
    println!("6. The highest card of the lead suit takes the trick; spades take it only when nobody followed the lead.");
    println!("7. Hit your bid exactly to win the round.");
}

fn print_help(prefix: &str) {
    println!("Commands:");
    println!("  {prefix}<name> join         - take a seat");
    println!("  {prefix}<name> leave        - leave the table");
    println!("  {prefix}start               - shuffle and deal");
    println!("  {prefix}<name> bid <n>      - declare your target tricks");
    println!("  {prefix}<name> play <card>  - play a card (`10 hearts`, `ace of spades`, `AS`)");
    println!("  {prefix}score               - show standings");
    println!("  {prefix}reset               - reset the round");
    println!("  {prefix}rules               - game rules");
    println!("  {prefix}prefix <new>        - change the command prefix");
    println!("  {prefix}quit                - exit");
}
