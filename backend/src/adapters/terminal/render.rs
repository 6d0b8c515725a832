//! Plain-text screens for each wizard step.

use std::io::{self, Write};

use crate::application::DecisionSession;
use crate::domain::analysis::{FactorPolicy, RankedOption, Ranking};
use crate::domain::decision::{DecisionHistory, DecisionOption, OptionDrafts};
use crate::domain::wizard::WizardStep;

/// Progress bar like `[##--]` for the four main steps.
pub fn progress(step: WizardStep) -> Option<String> {
    let index = step.progress_index()?;
    let total = WizardStep::PROGRESS.len();
    let filled = "#".repeat(index + 1);
    let empty = "-".repeat(total - index - 1);
    Some(format!("[{}{}]", filled, empty))
}

pub fn start(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "What are you choosing between?")?;
    writeln!(out, "Type the decision you're facing (e.g. Picking a new laptop), or :history.")
}

pub fn define_options(out: &mut impl Write, title: &str, drafts: &OptionDrafts) -> io::Result<()> {
    writeln!(out, "{}: what are your options?", title)?;
    for (i, option) in drafts.options().iter().enumerate() {
        let name = if option.is_named() { option.name.as_str() } else { "(empty)" };
        writeln!(out, "  {}. {}", i + 1, name)?;
    }
    if drafts.can_accept() {
        writeln!(out, "Type another option, or :next to define the trade-offs.")
    } else {
        writeln!(out, "Name at least two options.")
    }
}

pub fn input_details(
    out: &mut impl Write,
    option: &DecisionOption,
    position: (usize, usize),
) -> io::Result<()> {
    writeln!(out, "{} ({} / {})", option.name, position.0 + 1, position.1)?;
    writeln!(out, "  Happy outcomes:")?;
    for (i, pro) in option.pros.iter().enumerate() {
        writeln!(out, "    {}. {}", i + 1, pro.text)?;
    }
    writeln!(out, "  Potential regrets:")?;
    for (i, con) in option.cons.iter().enumerate() {
        writeln!(out, "    {}. {}", i + 1, con.text)?;
    }
    let next = if position.0 + 1 == position.1 { "see results" } else { "next option" };
    write!(out, "Add with '+ text' / '- text', :next to {}", next)?;
    if position.0 > 0 {
        write!(out, ", :prev for the previous option")?;
    }
    writeln!(out, ".")
}

pub fn results(
    out: &mut impl Write,
    title: &str,
    ranking: &Ranking,
    factor: f64,
    policy: &FactorPolicy,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    let Some(winner) = ranking.winner() else {
        return writeln!(out, "No options to rank.");
    };
    writeln!(out, "Top recommendation: {}", winner.option.name)?;
    writeln!(out, "  {}", winner.description())?;
    writeln!(out, "  {}", score_line(winner))?;
    writeln!(
        out,
        "Regret sensitivity: {}x (range {} to {}, step {}; :factor X)",
        factor, policy.min, policy.max, policy.step
    )?;
    if !ranking.runners_up().is_empty() {
        writeln!(out, "Runners-up:")?;
        for (i, ranked) in ranking.runners_up().iter().enumerate() {
            writeln!(out, "  {}. {}  {}", i + 2, ranked.option.name, score_line(ranked))?;
        }
    }
    writeln!(out, ":new to start a new decision.")
}

fn score_line(ranked: &RankedOption) -> String {
    format!(
        "regret score {} ({}) | {} pros, {} cons",
        ranked.regret_score,
        ranked.band(),
        ranked.option.pros.len(),
        ranked.option.cons.len()
    )
}

pub fn history(out: &mut impl Write, history: &DecisionHistory) -> io::Result<()> {
    writeln!(out, "Past decisions")?;
    if history.is_empty() {
        return writeln!(out, "  Nothing here yet. :back to start one.");
    }
    for (i, summary) in history.summaries().iter().enumerate() {
        writeln!(out, "  {}. {}  ({})", i + 1, summary.title, summary)?;
    }
    writeln!(out, "Type a number to reopen it, or :back.")
}

/// Renders the screen for the session's current step.
pub fn screen(
    out: &mut impl Write,
    session: &DecisionSession,
    drafts: Option<&OptionDrafts>,
) -> io::Result<()> {
    writeln!(out)?;
    if let Some(bar) = progress(session.step()) {
        writeln!(out, "{}", bar)?;
    }
    match session.step() {
        WizardStep::Start => start(out),
        WizardStep::DefineOptions => match drafts {
            Some(drafts) => define_options(out, session.decision().title(), drafts),
            None => define_options(
                out,
                session.decision().title(),
                &OptionDrafts::from_decision(session.decision()),
            ),
        },
        WizardStep::InputDetails => match session.current_option() {
            Some(option) => input_details(out, option, session.detail_position()),
            None => writeln!(out, "No option selected."),
        },
        WizardStep::Results => results(
            out,
            session.decision().title(),
            &session.ranking(),
            session.factor(),
            session.factor_policy(),
        ),
        WizardStep::History => history(out, session.history()),
    }
}
