//! Line commands for driving a wizard from a terminal.

use crate::wizard::{
    HomeownerAnswer, NeedCategory, SubmitOutcome, WizardController, WizardEvent,
};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Step 1:  home <yes|no>   need <category>   amount <value>   next
Step 2:  first <name>   last <name>   email <address>   phone <area> <prefix> <line>
         back   submit
Other:   status   help   quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Homeowner(HomeownerAnswer),
    Need(NeedCategory),
    Amount(String),
    Next,
    Back,
    FirstName(String),
    LastName(String),
    Email(String),
    Phone {
        area: String,
        prefix: String,
        line: String,
    },
    Submit,
    Status,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "home" => Self::Homeowner(rest.parse()?),
            "need" => Self::Need(rest.parse()?),
            "amount" => Self::Amount(rest.to_string()),
            "next" => Self::Next,
            "back" => Self::Back,
            "first" => Self::FirstName(rest.to_string()),
            "last" => Self::LastName(rest.to_string()),
            "email" => Self::Email(rest.to_string()),
            "phone" => {
                let parts: Vec<&str> = rest.split_whitespace().collect();
                match parts.as_slice() {
                    [area, prefix, line] => Self::Phone {
                        area: area.to_string(),
                        prefix: prefix.to_string(),
                        line: line.to_string(),
                    },
                    _ => return Err("Usage: phone <area> <prefix> <line>".to_string()),
                }
            }
            "submit" => Self::Submit,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "/quit" => Self::Quit,
            other => return Err(format!("Unknown command: {other}. Type 'help'.")),
        };
        Ok(cmd)
    }

    /// Apply a wizard command. Returns a line of feedback when there is
    /// something to show beyond the wizard's own events.
    pub fn apply(&self, controller: &mut WizardController) -> Option<String> {
        match self {
            Self::Homeowner(answer) => controller.select_homeowner(*answer),
            Self::Need(category) => controller.select_need(*category),
            Self::Amount(raw) => {
                let display = controller.input_amount(raw);
                return Some(format!("$ {display}"));
            }
            Self::Next => {
                controller.advance();
            }
            Self::Back => {
                controller.retreat();
            }
            Self::FirstName(v) => controller.input_first_name(v),
            Self::LastName(v) => controller.input_last_name(v),
            Self::Email(v) => controller.input_email(v),
            Self::Phone { area, prefix, line } => {
                controller.input_phone_area(area);
                controller.input_phone_prefix(prefix);
                controller.input_phone_line(line);
            }
            Self::Submit => match controller.attempt_submit() {
                SubmitOutcome::Suppressed => {
                    return Some("Already sending; please wait.".to_string());
                }
                SubmitOutcome::WrongStep => {
                    return Some("Finish step 1 first (type 'next').".to_string());
                }
                SubmitOutcome::Dispatched(_) | SubmitOutcome::Rejected => {}
            },
            Self::Status => {
                return Some(
                    serde_json::to_string_pretty(&controller.snapshot())
                        .unwrap_or_else(|e| format!("Failed to render status: {e}")),
                );
            }
            Self::Help => return Some(HELP.to_string()),
            Self::Quit => {}
        }
        None
    }
}

/// Render a view event as a terminal line.
pub fn render_event(event: &WizardEvent) -> Option<String> {
    match event {
        WizardEvent::StepChanged { step } => Some(format!("── Step {} of 2 ──", step.number())),
        WizardEvent::StatusChanged { message, .. } if !message.is_empty() => {
            Some(format!("ℹ️  {message}"))
        }
        WizardEvent::FormReset => Some("Form cleared.".to_string()),
        WizardEvent::ScrollToTop | WizardEvent::StatusChanged { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardStep;

    #[test]
    fn parses_choices() {
        assert_eq!(
            Command::parse("home yes").unwrap(),
            Command::Homeowner(HomeownerAnswer::Yes)
        );
        assert_eq!(
            Command::parse("need Home Equity Loan").unwrap(),
            Command::Need(NeedCategory::HomeEquityLoan)
        );
        assert!(Command::parse("need lottery").is_err());
    }

    #[test]
    fn parses_phone_segments() {
        assert_eq!(
            Command::parse("phone 416 555 0134").unwrap(),
            Command::Phone {
                area: "416".into(),
                prefix: "555".into(),
                line: "0134".into(),
            }
        );
        assert!(Command::parse("phone 4165550134").is_err());
    }

    #[test]
    fn keeps_free_text_arguments() {
        assert_eq!(
            Command::parse("  amount  $50,000.5 ").unwrap(),
            Command::Amount("$50,000.5".into())
        );
        assert_eq!(
            Command::parse("first Mary Ann").unwrap(),
            Command::FirstName("Mary Ann".into())
        );
        assert_eq!(Command::parse("NEXT").unwrap(), Command::Next);
    }

    #[test]
    fn rejects_unknown_verbs() {
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn renders_events() {
        assert_eq!(
            render_event(&WizardEvent::StepChanged {
                step: WizardStep::Step2
            })
            .as_deref(),
            Some("── Step 2 of 2 ──")
        );
        assert_eq!(render_event(&WizardEvent::ScrollToTop), None);
        assert_eq!(
            render_event(&WizardEvent::StatusChanged {
                status: crate::wizard::SubmissionStatus::Idle,
                message: String::new(),
            }),
            None
        );
    }
}
