//! Textual intent scripts for headless runs.
//!
//! A script is a whitespace separated list of commands, each optionally
//! followed by `*N` to repeat it:
//!
//! ```text
//! right*3 tick*10 dig left up down move(2,-1)   # comments run to end of line
//! ```
//!
//! - `left`, `right`, `up`, `down`: a [`MoveIntent::Step`]
//! - `move(dx,dy)`: a [`MoveIntent::Translate`]
//! - `tick`: one gravity tick
//! - `dig`: a crater under the worm; `dig(x,y)`: a crater at a level pixel
use std::str::FromStr;

use game_core::{Direction, MoveIntent, Point};

use crate::api::ScriptError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Intent(MoveIntent),
    Tick,
    /// Terrain hit. `None` aims just below the worm's feet.
    Dig(Option<Point>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub command: Command,
    pub repeat: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (index, token) in tokenize(source)?.into_iter().enumerate() {
            steps.push(parse_step(index, token)?);
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total number of commands once repeats are expanded.
    pub fn command_count(&self) -> u64 {
        self.steps.iter().map(|step| u64::from(step.repeat)).sum()
    }

    /// Commands in execution order with repeats expanded.
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.steps
            .iter()
            .flat_map(|step| std::iter::repeat_n(step.command, step.repeat as usize))
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Splits on whitespace outside parentheses so `move(2, -1)` stays one token.
fn tokenize(source: &str) -> Result<Vec<&str>, ScriptError> {
    let mut tokens = Vec::new();

    for line in source.lines() {
        let line = line.split_once('#').map_or(line, |(code, _)| code);
        let mut depth = 0usize;
        let mut start = None;

        for (offset, ch) in line.char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth = depth.checked_sub(1).ok_or_else(|| ScriptError::UnbalancedParens {
                        token: line[start.unwrap_or(offset)..=offset].to_string(),
                    })?;
                }
                c if c.is_whitespace() && depth == 0 => {
                    if let Some(begin) = start.take() {
                        tokens.push(&line[begin..offset]);
                    }
                    continue;
                }
                _ => {}
            }
            start.get_or_insert(offset);
        }

        if let Some(begin) = start {
            if depth != 0 {
                return Err(ScriptError::UnbalancedParens {
                    token: line[begin..].trim_end().to_string(),
                });
            }
            tokens.push(&line[begin..]);
        }
    }

    Ok(tokens)
}

fn parse_step(index: usize, token: &str) -> Result<Step, ScriptError> {
    let (body, repeat) = match token.rsplit_once('*') {
        Some((body, count)) => {
            let repeat = count
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| ScriptError::InvalidRepeat {
                    index,
                    token: token.to_string(),
                })?;
            (body, repeat)
        }
        None => (token, 1),
    };

    let (name, args) = match body.split_once('(') {
        Some((name, rest)) => {
            let inner = rest.strip_suffix(')').ok_or_else(|| ScriptError::UnknownCommand {
                index,
                token: token.to_string(),
            })?;
            (name, Some(inner))
        }
        None => (body, None),
    };

    let command = match (name.to_ascii_lowercase().as_str(), args) {
        ("tick", None) => Command::Tick,
        ("dig", None) => Command::Dig(None),
        ("dig", Some(args)) => {
            let [x, y] = parse_pair(index, token, args)?;
            Command::Dig(Some(Point::new(x, y)))
        }
        ("move", Some(args)) => {
            let [dx, dy] = parse_pair(index, token, args)?;
            Command::Intent(MoveIntent::translate(dx, dy))
        }
        (_, None) => {
            let direction =
                Direction::from_str(name).map_err(|_| ScriptError::UnknownCommand {
                    index,
                    token: token.to_string(),
                })?;
            Command::Intent(MoveIntent::step(direction))
        }
        (_, Some(_)) => {
            return Err(ScriptError::UnknownCommand {
                index,
                token: token.to_string(),
            });
        }
    };

    Ok(Step { command, repeat })
}

fn parse_pair(index: usize, token: &str, args: &str) -> Result<[i32; 2], ScriptError> {
    let invalid = || ScriptError::InvalidArguments {
        index,
        token: token.to_string(),
        expected: 2,
    };

    let values = args
        .split(',')
        .map(|arg| arg.trim().parse::<i32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    <[i32; 2]>::try_from(values).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(command: Command, repeat: u32) -> Step {
        Step { command, repeat }
    }

    #[test]
    fn parses_every_command_kind() {
        let script = Script::parse("right*3 tick*10 dig left up down move(2,-1) dig(100, 90)")
            .unwrap();

        assert_eq!(
            script.steps(),
            &[
                step(Command::Intent(MoveIntent::step(Direction::Right)), 3),
                step(Command::Tick, 10),
                step(Command::Dig(None), 1),
                step(Command::Intent(MoveIntent::step(Direction::Left)), 1),
                step(Command::Intent(MoveIntent::step(Direction::Up)), 1),
                step(Command::Intent(MoveIntent::step(Direction::Down)), 1),
                step(Command::Intent(MoveIntent::translate(2, -1)), 1),
                step(Command::Dig(Some(Point::new(100, 90))), 1),
            ]
        );
        assert_eq!(script.command_count(), 20);
    }

    #[test]
    fn comments_blank_lines_and_case_are_ignored() {
        let script = Script::parse("# warm up\n\n  RIGHT*2   # walk\nTick\n").unwrap();

        let commands: Vec<_> = script.commands().collect();
        assert_eq!(
            commands,
            vec![
                Command::Intent(MoveIntent::step(Direction::Right)),
                Command::Intent(MoveIntent::step(Direction::Right)),
                Command::Tick,
            ]
        );
    }

    #[test]
    fn empty_source_is_an_empty_script() {
        let script: Script = "   \n# nothing\n".parse().unwrap();
        assert!(script.is_empty());
        assert_eq!(script.commands().count(), 0);
    }

    #[test]
    fn rejects_unknown_commands() {
        assert_eq!(
            Script::parse("right jump"),
            Err(ScriptError::UnknownCommand {
                index: 1,
                token: "jump".to_string(),
            })
        );
        assert!(matches!(
            Script::parse("tick(1,2)"),
            Err(ScriptError::UnknownCommand { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_bad_repeat_counts() {
        for source in ["tick*0", "tick*", "tick*-2", "tick*x"] {
            assert!(
                matches!(Script::parse(source), Err(ScriptError::InvalidRepeat { .. })),
                "{source}"
            );
        }
    }

    #[test]
    fn rejects_bad_arguments() {
        for source in ["move(1)", "move(1,2,3)", "move(a,b)", "dig(,)"] {
            assert!(
                matches!(
                    Script::parse(source),
                    Err(ScriptError::InvalidArguments { expected: 2, .. })
                ),
                "{source}"
            );
        }
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert!(matches!(
            Script::parse("move(1, 2"),
            Err(ScriptError::UnbalancedParens { .. })
        ));
        assert!(matches!(
            Script::parse("move)1,2("),
            Err(ScriptError::UnbalancedParens { .. })
        ));
    }
}
