use std::path::PathBuf;

use recruit_core::{CvId, JobDraft, JobId, JobType, ListKind, Msg, Route};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  login <user> <pass>      logout
  go <query>               e.g. go tab=candidates&jobId=3
  page <jobs|uploads> <n>
  new-job <title>|<location>|<type>|<skills>[|<about>|<responsibilities>|<qualifications>]
  edit-job <id> <field>=<value>
  delete-job <id>
  upload <path>...         delete-cv <id>...        download <id>
  scan [jobId]             search [text]
  toggle <cvId>            remove <cvId>            confirm
  start                    clear                    start-over
  candidate <id>           close
  help                     quit";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command {0:?}; type `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Editable job fields addressed by `edit-job`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JobField {
    Title,
    Location,
    JobType,
    About,
    Responsibilities,
    Qualifications,
    Skills,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppCommand {
    Send(Msg),
    EditJob {
        id: JobId,
        field: JobField,
        value: String,
    },
    Upload(Vec<PathBuf>),
    Download(CvId),
    Help,
    Quit,
}

pub(crate) fn parse_command(line: &str) -> Result<Option<AppCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match name {
        "login" => AppCommand::Send(Msg::LoginSubmitted {
            username: args.first().copied().unwrap_or_default().to_string(),
            password: args.get(1).copied().unwrap_or_default().to_string(),
        }),
        "logout" => AppCommand::Send(Msg::LogoutClicked),
        "go" => AppCommand::Send(Msg::Navigated(Route::parse(rest))),
        "page" => {
            const USAGE: &str = "page <jobs|uploads> <n>";
            let list = match args.first().copied() {
                Some("jobs") => ListKind::Jobs,
                Some("uploads") => ListKind::Uploads,
                _ => return Err(CommandError::Usage(USAGE)),
            };
            let page = parse_arg(args.get(1), USAGE)?;
            AppCommand::Send(Msg::PageChanged { list, page })
        }
        "new-job" => AppCommand::Send(Msg::JobSubmitted(parse_draft(rest)?)),
        "edit-job" => parse_edit(&args)?,
        "delete-job" => {
            let id = parse_arg(args.first(), "delete-job <id>")?;
            AppCommand::Send(Msg::JobDeleteClicked(id))
        }
        "upload" if !args.is_empty() => {
            AppCommand::Upload(args.iter().map(PathBuf::from).collect())
        }
        "upload" => return Err(CommandError::Usage("upload <path>...")),
        "delete-cv" if !args.is_empty() => AppCommand::Send(Msg::CvDeleteClicked(
            args.iter().map(|id| id.to_string()).collect(),
        )),
        "delete-cv" => return Err(CommandError::Usage("delete-cv <id>...")),
        "download" => match args.first() {
            Some(id) => AppCommand::Download(id.to_string()),
            None => return Err(CommandError::Usage("download <id>")),
        },
        "scan" => {
            let job_id = match args.first() {
                Some(_) => Some(parse_arg(args.first(), "scan [jobId]")?),
                None => None,
            };
            AppCommand::Send(Msg::ScanOpened { job_id })
        }
        "search" => AppCommand::Send(Msg::CvSearchChanged(rest.to_string())),
        "toggle" => AppCommand::Send(Msg::CvToggled(single(&args, "toggle <cvId>")?)),
        "remove" => AppCommand::Send(Msg::CvRemoved(single(&args, "remove <cvId>")?)),
        "confirm" => AppCommand::Send(Msg::CvsConfirmed),
        "start" => AppCommand::Send(Msg::StartAnalysisClicked),
        "clear" => AppCommand::Send(Msg::ClearAllClicked),
        "start-over" => AppCommand::Send(Msg::StartOverClicked),
        "candidate" => {
            let id = parse_arg(args.first(), "candidate <id>")?;
            AppCommand::Send(Msg::CandidateOpened(id))
        }
        "close" => AppCommand::Send(Msg::CandidateClosed),
        "help" => AppCommand::Help,
        "quit" | "exit" => AppCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn single(args: &[&str], usage: &'static str) -> Result<String, CommandError> {
    match args {
        [one] => Ok((*one).to_string()),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn parse_arg<T: std::str::FromStr>(
    arg: Option<&&str>,
    usage: &'static str,
) -> Result<T, CommandError> {
    arg.and_then(|raw| raw.parse().ok())
        .ok_or(CommandError::Usage(usage))
}

fn parse_job_type(raw: &str) -> Result<JobType, CommandError> {
    JobType::from_label(raw).ok_or(CommandError::Usage(
        "job type is one of Full-time, Part-time, Contract, Remote",
    ))
}

fn parse_draft(rest: &str) -> Result<JobDraft, CommandError> {
    const USAGE: &str =
        "new-job <title>|<location>|<type>|<skills>[|<about>|<responsibilities>|<qualifications>]";
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    if parts.len() < 4 || parts[0].is_empty() {
        return Err(CommandError::Usage(USAGE));
    }
    let optional = |index: usize| parts.get(index).copied().unwrap_or_default().to_string();
    Ok(JobDraft {
        title: parts[0].to_string(),
        location: parts[1].to_string(),
        job_type: parse_job_type(parts[2])?,
        skills: parts[3].to_string(),
        about: optional(4),
        responsibilities: optional(5),
        qualifications: optional(6),
    })
}

fn parse_edit(args: &[&str]) -> Result<AppCommand, CommandError> {
    const USAGE: &str = "edit-job <id> <field>=<value>";
    let id = parse_arg(args.first(), USAGE)?;
    let assignment = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
    let (field, value) = assignment
        .split_once('=')
        .ok_or(CommandError::Usage(USAGE))?;
    let field = match field.trim() {
        "title" => JobField::Title,
        "location" => JobField::Location,
        "type" | "jobType" => JobField::JobType,
        "about" => JobField::About,
        "responsibilities" => JobField::Responsibilities,
        "qualifications" => JobField::Qualifications,
        "skills" => JobField::Skills,
        _ => return Err(CommandError::Usage(USAGE)),
    };
    Ok(AppCommand::EditJob {
        id,
        field,
        value: value.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn login_passes_missing_fields_through_as_empty() {
        assert_eq!(
            parse_command("login admin"),
            Ok(Some(AppCommand::Send(Msg::LoginSubmitted {
                username: "admin".to_string(),
                password: String::new(),
            })))
        );
    }

    #[test]
    fn new_job_splits_on_pipes() {
        let Ok(Some(AppCommand::Send(Msg::JobSubmitted(draft)))) =
            parse_command("new-job Data Engineer | Berlin | remote | Python, SQL")
        else {
            panic!("expected a job draft");
        };
        assert_eq!(draft.title, "Data Engineer");
        assert_eq!(draft.location, "Berlin");
        assert_eq!(draft.job_type, JobType::Remote);
        assert_eq!(draft.skills(), vec!["Python", "SQL"]);
        assert!(draft.about.is_empty());
    }

    #[test]
    fn scan_job_id_is_optional() {
        assert_eq!(
            parse_command("scan"),
            Ok(Some(AppCommand::Send(Msg::ScanOpened { job_id: None })))
        );
        assert_eq!(
            parse_command("scan 4"),
            Ok(Some(AppCommand::Send(Msg::ScanOpened { job_id: Some(4) })))
        );
        assert!(parse_command("scan four").is_err());
    }

    #[test]
    fn edit_job_keeps_spaces_in_value() {
        assert_eq!(
            parse_command("edit-job 2 title=Senior Backend Developer"),
            Ok(Some(AppCommand::EditJob {
                id: 2,
                field: JobField::Title,
                value: "Senior Backend Developer".to_string(),
            }))
        );
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
