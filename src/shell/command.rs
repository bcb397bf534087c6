//! Line-based command parsing.

use std::str::FromStr;

use uf_core::navigation::ScreenTarget;
use uf_core::SecretString;

#[derive(Debug)]
pub enum ShellCommand {
    /// Missing arguments are sent as empty fields so validation can reject them.
    Details {
        username: String,
        password: SecretString,
    },
    Edit,
    Accept,
    Login {
        password: SecretString,
    },
    PasswordEdit,
    Unregister,
    Settings,
    Refresh,
    Logout,
    Back,
    Status,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
details <username> <password>  submit registration details
edit                           edit a registration field
accept                         accept terms and conditions
login <password>               log in as the remembered user
password-edit                  edit the login password
unregister                     forget the registered user
settings                       open settings
refresh                        refresh unread notifications
logout                         log out
back                           go back one screen
status                         show screen, history and user state
quit                           exit";

impl ShellCommand {
    /// Screen the command belongs to; `None` means it works anywhere.
    pub fn screen(&self) -> Option<ScreenTarget> {
        match self {
            ShellCommand::Details { .. } | ShellCommand::Edit => Some(ScreenTarget::EnterDetails),
            ShellCommand::Accept => Some(ScreenTarget::TermsAndConditions),
            ShellCommand::Login { .. } | ShellCommand::PasswordEdit | ShellCommand::Unregister => {
                Some(ScreenTarget::Login)
            }
            ShellCommand::Settings => Some(ScreenTarget::Main),
            ShellCommand::Refresh | ShellCommand::Logout => Some(ScreenTarget::Settings),
            ShellCommand::Back | ShellCommand::Status | ShellCommand::Help | ShellCommand::Quit => {
                None
            }
        }
    }

    pub fn available_on(&self, current: Option<ScreenTarget>) -> bool {
        match self.screen() {
            Some(screen) => current == Some(screen),
            None => true,
        }
    }
}

fn no_args(args: &[&str], command: ShellCommand, usage: &'static str) -> Result<ShellCommand, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage(usage))
    }
}

impl FromStr for ShellCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match name.to_ascii_lowercase().as_str() {
            "details" => match args.as_slice() {
                [] | [_] | [_, _] => Ok(ShellCommand::Details {
                    username: args.first().copied().unwrap_or_default().to_string(),
                    password: SecretString::new(args.get(1).copied().unwrap_or_default()),
                }),
                _ => Err(CommandError::Usage("details <username> <password>")),
            },
            "login" => match args.as_slice() {
                [] | [_] => Ok(ShellCommand::Login {
                    password: SecretString::new(args.first().copied().unwrap_or_default()),
                }),
                _ => Err(CommandError::Usage("login <password>")),
            },
            "edit" => no_args(&args, ShellCommand::Edit, "edit"),
            "accept" => no_args(&args, ShellCommand::Accept, "accept"),
            "password-edit" => no_args(&args, ShellCommand::PasswordEdit, "password-edit"),
            "unregister" => no_args(&args, ShellCommand::Unregister, "unregister"),
            "settings" => no_args(&args, ShellCommand::Settings, "settings"),
            "refresh" => no_args(&args, ShellCommand::Refresh, "refresh"),
            "logout" => no_args(&args, ShellCommand::Logout, "logout"),
            "back" => no_args(&args, ShellCommand::Back, "back"),
            "status" => no_args(&args, ShellCommand::Status, "status"),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
