//! Interactive line-based shell over a [`DecisionSession`].

use std::io::{self, BufRead, Write};

use super::commands::{parse_index, Command, HELP};
use super::render;
use crate::application::{DecisionSession, DetailAdvance, ItemKind, SessionError};
use crate::domain::decision::OptionDrafts;
use crate::domain::foundation::{DomainError, ErrorCode, ItemId, OptionId};
use crate::domain::wizard::WizardStep;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal front end for the decision wizard.
///
/// Generic over its input and output so tests can script a whole session.
pub struct TerminalShell<R, W> {
    session: DecisionSession,
    drafts: Option<OptionDrafts>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalShell<R, W> {
    pub fn new(session: DecisionSession, input: R, output: W) -> Self {
        Self {
            session,
            drafts: None,
            input,
            output,
        }
    }

    pub fn session(&self) -> &DecisionSession {
        &self.session
    }

    /// Hands back the session and output once the shell is done.
    pub fn into_parts(self) -> (DecisionSession, W) {
        (self.session, self.output)
    }

    /// Runs until `:quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        if let Some(warning) = self.session.take_warning() {
            writeln!(
                self.output,
                "! Past decisions could not be loaded ({}). Continuing without them.",
                warning
            )?;
        }

        loop {
            render::screen(&mut self.output, &self.session, self.drafts.as_ref())?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "! {}", e)?;
                    continue;
                }
            };

            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(ShellError::Io(e)) => return Err(e),
                Err(ShellError::Session(e)) => writeln!(self.output, "! {}", e)?,
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, ShellError> {
        match command {
            Command::Empty => return Ok(Flow::Continue),
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            Command::Reset => {
                self.session.reset();
                self.drafts = None;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        match self.session.step() {
            WizardStep::Start => self.on_start(command)?,
            WizardStep::DefineOptions => self.on_define_options(command)?,
            WizardStep::InputDetails => self.on_input_details(command)?,
            WizardStep::Results => self.on_results(command)?,
            WizardStep::History => self.on_history(command)?,
        }
        Ok(Flow::Continue)
    }

    fn on_start(&mut self, command: Command) -> Result<(), ShellError> {
        match command {
            Command::Text(title) => {
                self.session.start(&title)?;
                self.drafts = Some(OptionDrafts::from_decision(self.session.decision()));
            }
            Command::History => self.session.show_history()?,
            other => self.unsupported(other)?,
        }
        Ok(())
    }

    fn on_define_options(&mut self, command: Command) -> Result<(), ShellError> {
        let drafts = self
            .drafts
            .get_or_insert_with(|| OptionDrafts::from_decision(self.session.decision()));

        match command {
            Command::Text(name) => {
                let target = match drafts.options().iter().find(|o| !o.is_named()) {
                    Some(blank) => blank.id,
                    None => drafts.add_blank(),
                };
                drafts.rename(target, name).map_err(SessionError::from)?;
            }
            Command::AddOption => {
                drafts.add_blank();
            }
            Command::RenameOption(index, name) => {
                let id = option_at(drafts, index)?;
                drafts.rename(id, name).map_err(SessionError::from)?;
            }
            Command::RemoveOption(index) => {
                let id = option_at(drafts, index)?;
                drafts.remove(id).map_err(SessionError::from)?;
            }
            Command::Next => {
                let candidates = drafts.clone().into_candidates();
                self.session.define_options(candidates)?;
                self.drafts = None;
            }
            Command::Back => {
                self.session.go_back()?;
                self.drafts = None;
            }
            other => self.unsupported(other)?,
        }
        Ok(())
    }

    fn on_input_details(&mut self, command: Command) -> Result<(), ShellError> {
        match command {
            Command::Pro(text) => {
                self.session.add_item(ItemKind::Pro, &text)?;
            }
            Command::Con(text) => {
                self.session.add_item(ItemKind::Con, &text)?;
            }
            Command::RemovePro(index) => {
                let id = self.item_at(ItemKind::Pro, index)?;
                self.session.remove_item(ItemKind::Pro, id)?;
            }
            Command::RemoveCon(index) => {
                let id = self.item_at(ItemKind::Con, index)?;
                self.session.remove_item(ItemKind::Con, id)?;
            }
            Command::Next => {
                if let DetailAdvance::Finalized(outcome) = self.session.next_option()? {
                    if let Some(e) = outcome.persistence_error {
                        writeln!(
                            self.output,
                            "! Could not save this decision ({}). It stays available until you quit.",
                            e
                        )?;
                    }
                }
            }
            Command::Prev => {
                self.session.previous_option()?;
            }
            Command::Back => {
                self.session.go_back()?;
                self.drafts = Some(OptionDrafts::from_decision(self.session.decision()));
            }
            other => self.unsupported(other)?,
        }
        Ok(())
    }

    fn on_results(&mut self, command: Command) -> Result<(), ShellError> {
        match command {
            Command::Factor(value) => {
                let applied = self.session.set_factor(value)?;
                if applied != value {
                    writeln!(self.output, "Sensitivity set to {}x.", applied)?;
                }
            }
            Command::Back => {
                self.session.go_back()?;
            }
            other => self.unsupported(other)?,
        }
        Ok(())
    }

    fn on_history(&mut self, command: Command) -> Result<(), ShellError> {
        match command {
            Command::Text(text) => {
                let index = parse_index(&text).map_err(|e| {
                    SessionError::from(DomainError::new(ErrorCode::ValidationFailed, e.to_string()))
                })?;
                let id = self
                    .session
                    .history()
                    .entries()
                    .get(index)
                    .map(|d| d.id())
                    .ok_or_else(|| {
                        SessionError::from(DomainError::new(
                            ErrorCode::DecisionNotFound,
                            format!("No past decision number {}", index + 1),
                        ))
                    })?;
                self.session.load_history_entry(id)?;
            }
            Command::Back => {
                self.session.go_back()?;
            }
            other => self.unsupported(other)?,
        }
        Ok(())
    }

    fn item_at(
        &self,
        kind: ItemKind,
        index: usize,
    ) -> Result<ItemId, SessionError> {
        let option = self.session.current_option().ok_or_else(|| {
            DomainError::new(ErrorCode::OptionNotFound, "No option is being detailed")
        })?;
        let items = match kind {
            ItemKind::Pro => &option.pros,
            ItemKind::Con => &option.cons,
        };
        items.get(index).map(|i| i.id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ItemNotFound,
                format!("No item number {}", index + 1),
            )
            .into()
        })
    }

    fn unsupported(&mut self, command: Command) -> Result<(), ShellError> {
        writeln!(
            self.output,
            "! {:?} does nothing on the {} step (type :help)",
            command,
            self.session.step()
        )?;
        Ok(())
    }
}

fn option_at(
    drafts: &OptionDrafts,
    index: usize,
) -> Result<OptionId, SessionError> {
    drafts.options().get(index).map(|o| o.id).ok_or_else(|| {
        DomainError::new(
            ErrorCode::OptionNotFound,
            format!("No option number {}", index + 1),
        )
        .into()
    })
}

#[derive(Debug)]
enum ShellError {
    Io(io::Error),
    Session(SessionError),
}

impl From<io::Error> for ShellError {
    fn from(e: io::Error) -> Self {
        ShellError::Io(e)
    }
}

impl From<SessionError> for ShellError {
    fn from(e: SessionError) -> Self {
        ShellError::Session(e)
    }
}
