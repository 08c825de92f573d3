use sensormon_sensor::{ProcessReport, SensorError, SensorRegistry};

use crate::command::{Command, HELP};

/// What the caller should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives one registry from parsed commands and renders the output lines.
pub struct Session {
    registry: SensorRegistry,
    json: bool,
}

impl Session {
    pub fn new(json: bool) -> Self {
        Self {
            registry: SensorRegistry::new(),
            json,
        }
    }

    pub fn registry(&self) -> &SensorRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SensorRegistry {
        &mut self.registry
    }

    /// Parses and executes one input line.
    pub fn handle_line(&mut self, line: &str, out: &mut Vec<String>) -> Flow {
        match Command::parse(line) {
            Ok(command) => self.execute(command, out),
            Err(e) => {
                out.push(e.to_string());
                Flow::Continue
            }
        }
    }

    pub fn execute(&mut self, command: Command, out: &mut Vec<String>) -> Flow {
        match command {
            Command::Create { kind, id } => match self.registry.create(kind, &id) {
                Ok(sensor) => out.push(format!("{}: created", sensor.id())),
                Err(SensorError::DuplicateId(id)) => out.push(format!("{}: already exists", id)),
                Err(e) => out.push(e.to_string()),
            },
            Command::Read { id, value } => match self.registry.add_reading(&id, &value) {
                Ok(sensor) => out.push(format!("{}: added", sensor.id())),
                Err(SensorError::SensorNotFound(id)) => out.push(format!("{}: not found", id)),
                Err(e) => out.push(e.to_string()),
            },
            Command::Tagged { tag, id, value } => {
                self.registry.register_by_kind_or_create(&tag, &id, &value);
                if let Some(sensor) = self.registry.find(&id) {
                    out.push(format!("{}: added", sensor.id()));
                }
            }
            Command::Loose { id, value } => {
                if let Some(sensor) = self.registry.add_loose_reading(&id, &value) {
                    out.push(format!("{}: added", sensor.id()));
                }
            }
            Command::ProcessAll => self.process_all(out),
            Command::DescribeAll => out.extend(self.registry.describe_all()),
            Command::Help => out.push(HELP.to_string()),
            Command::Quit => return Flow::Quit,
            Command::Empty => {}
            Command::Unknown(line) => {
                tracing::debug!("Unknown command: {}", line);
                out.push("unknown command".to_string());
            }
        }
        Flow::Continue
    }

    pub fn process_all(&mut self, out: &mut Vec<String>) {
        let reports = self.registry.process_all();
        if !self.json {
            out.push("processing".to_string());
        }
        out.extend(reports.iter().map(|r| self.render(r)));
    }

    fn render(&self, report: &ProcessReport) -> String {
        if self.json {
            serde_json::to_string(report).unwrap_or_else(|_| report.to_string())
        } else {
            report.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, lines: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        for line in lines {
            session.handle_line(line, &mut out);
        }
        out
    }

    #[test]
    fn test_create_read_process() {
        let mut session = Session::new(false);
        let out = run(
            &mut session,
            &[
                "addpres P-1",
                "addpres P-1",
                "read P-1 10",
                "read P-1 20",
                "read P-1 30",
                "read Q-1 5",
                "process",
            ],
        );

        assert_eq!(
            out,
            vec![
                "P-1: created",
                "P-1: already exists",
                "P-1: added",
                "P-1: added",
                "P-1: added",
                "Q-1: not found",
                "processing",
                "P-1: average 20.00",
            ]
        );
        assert_eq!(session.registry().find("P-1").unwrap().len(), 3);
    }

    #[test]
    fn test_unrecognized_tag_prints_nothing() {
        let mut session = Session::new(false);
        let out = run(&mut session, &["FOO Z-1 10"]);
        assert!(out.is_empty());
        assert!(session.registry().is_empty());
    }

    #[test]
    fn test_loose_and_tagged_lines() {
        let mut session = Session::new(false);
        let out = run(&mut session, &["X-1 21.5", "VIBR V-1 3", "list"]);
        assert_eq!(
            out,
            vec!["X-1: added", "V-1: added", "V-1: vibr", "X-1: temp"]
        );
    }

    #[test]
    fn test_json_reports() {
        let mut session = Session::new(true);
        let out = run(&mut session, &["addtemp T-1", "process"]);
        assert_eq!(out.len(), 2);

        let value: serde_json::Value = serde_json::from_str(&out[1]).unwrap();
        assert_eq!(value["status"], "no_readings");
        assert_eq!(value["id"], "T-1");
    }

    #[test]
    fn test_quit_and_errors() {
        let mut session = Session::new(false);
        let mut out = Vec::new();
        assert_eq!(session.handle_line("create", &mut out), Flow::Continue);
        assert_eq!(out, vec!["usage: create <temp|pres|vibr> <id>"]);
        assert_eq!(session.handle_line("bogus", &mut out), Flow::Continue);
        assert_eq!(out.last().unwrap(), "unknown command");
        assert_eq!(session.handle_line("quit", &mut out), Flow::Quit);
    }
}
