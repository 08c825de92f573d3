use sensormon_sensor::SensorKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown sensor kind: {0}")]
    UnknownKind(String),
}

/// One line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { kind: SensorKind, id: String },
    Read { id: String, value: String },
    Tagged { tag: String, id: String, value: String },
    Loose { id: String, value: String },
    ProcessAll,
    DescribeAll,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub const HELP: &str = "commands: addtemp <id> | addpres <id> | addvibr <id> | create <kind> <id> | \
read <id> <value> | <TAG> <id> <value> | <id> <value> | process | list | help | quit";

const KEYWORDS: &[&str] = &[
    "addtemp", "addpres", "addvibr", "create", "read", "process", "list", "help", "quit", "exit",
];

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = tokens.first() else {
            return Ok(Command::Empty);
        };
        let args = &tokens[1..];
        let keyword = first.to_ascii_lowercase();

        if !KEYWORDS.contains(&keyword.as_str()) {
            return Ok(match args {
                [id, value] => Command::Tagged {
                    tag: first.to_string(),
                    id: id.to_string(),
                    value: value.to_string(),
                },
                [value] => Command::Loose {
                    id: first.to_string(),
                    value: value.to_string(),
                },
                _ => Command::Unknown(line.trim().to_string()),
            });
        }

        match keyword.as_str() {
            "addtemp" => create(SensorKind::Temperature, args, "addtemp <id>"),
            "addpres" => create(SensorKind::Pressure, args, "addpres <id>"),
            "addvibr" => create(SensorKind::Vibration, args, "addvibr <id>"),
            "create" => match args {
                [kind, id, ..] => {
                    let kind = kind
                        .parse()
                        .map_err(|_| CommandError::UnknownKind(kind.to_string()))?;
                    Ok(Command::Create {
                        kind,
                        id: id.to_string(),
                    })
                }
                _ => Err(CommandError::Usage("create <temp|pres|vibr> <id>")),
            },
            "read" => match args {
                [id, value, ..] => Ok(Command::Read {
                    id: id.to_string(),
                    value: value.to_string(),
                }),
                _ => Err(CommandError::Usage("read <id> <value>")),
            },
            "process" => Ok(Command::ProcessAll),
            "list" => Ok(Command::DescribeAll),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Ok(Command::Unknown(line.trim().to_string())),
        }
    }
}

fn create(kind: SensorKind, args: &[&str], usage: &'static str) -> Result<Command, CommandError> {
    match args.first() {
        Some(id) => Ok(Command::Create {
            kind,
            id: id.to_string(),
        }),
        None => Err(CommandError::Usage(usage)),
    }
}
