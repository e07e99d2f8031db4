use crate::render::render_report;
use chrono::{DateTime, Utc};
use interview_ready::assessment::catalog::{FRAMEWORKS, PROGRAMMING_LANGUAGES};
use interview_ready::assessment::{AnswerEdit, Answers, AssessmentResult};
use interview_ready::config::AppConfig;
use interview_ready::error::AppError;
use interview_ready::telemetry;
use interview_ready::wizard::{format_elapsed, Step, WizardController, WizardEvent};
use std::io::{self, BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(WizardEvent),
    Help,
    Quit,
}

pub(crate) fn run_wizard() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = WizardSession::new(
        stdin.lock(),
        stdout.lock(),
        WizardController::new(&config.wizard),
        Utc::now,
    );
    session.run()?;
    Ok(())
}

/// Line-oriented driver for the questionnaire over any reader/writer pair.
pub(crate) struct WizardSession<R, W, C> {
    input: R,
    output: W,
    controller: WizardController,
    clock: C,
}

impl<R, W, C> WizardSession<R, W, C>
where
    R: BufRead,
    W: Write,
    C: Fn() -> DateTime<Utc>,
{
    pub(crate) fn new(input: R, output: W, controller: WizardController, clock: C) -> Self {
        Self {
            input,
            output,
            controller,
            clock,
        }
    }

    /// Runs until the user quits or input ends; returns the last results shown.
    pub(crate) fn run(mut self) -> Result<Option<AssessmentResult>, AppError> {
        loop {
            self.render_screen()?;
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output, "\nAssessment closed.")?;
                break;
            }

            let step = self.controller.state().step();
            let command = match parse_command(line.trim(), step) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(self.output, "! {message}")?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => write_help(&mut self.output)?,
                Command::Event(event) => {
                    let now = (self.clock)();
                    if let Err(err) = self.controller.dispatch(event, now) {
                        writeln!(self.output, "! {err}")?;
                    }
                }
            }
        }

        Ok(self.controller.state().results().cloned())
    }

    fn render_screen(&mut self) -> io::Result<()> {
        let state = self.controller.state();
        let step = state.step();
        let out = &mut self.output;

        if step == Step::Welcome {
            writeln!(out, "\nInterviewReady")?;
            writeln!(
                out,
                "Get your personalized Interview Readiness Score in under 2 minutes"
            )?;
            return writeln!(out, "Press Enter to start the assessment, or q to quit.");
        }

        if let Some(result) = state.results() {
            writeln!(out)?;
            render_report(out, result, true)?;
            return writeln!(out, "\n[r]estart  [q]uit");
        }

        let now = (self.clock)();
        let position = step.question_index().map_or(0, |index| index + 1);
        let pace = if self.controller.pace_warning(now) {
            " (pace warning)"
        } else {
            ""
        };
        writeln!(
            out,
            "\nStep {position} of {} · {}   ⏱ {}{pace}",
            Step::QUESTIONS.len(),
            step.label(),
            format_elapsed(self.controller.elapsed(now))
        )?;

        let answers = state.answers();
        match step {
            Step::Technical => render_technical(out, answers)?,
            Step::Resume => render_resume(out, answers)?,
            Step::Communication => render_communication(out, answers)?,
            Step::Portfolio => render_portfolio(out, answers)?,
            Step::Welcome | Step::Results => {}
        }

        let next = if step == Step::Portfolio {
            "[n] see results"
        } else {
            "[n]ext"
        };
        writeln!(out, "{next}  [b]ack  [r]estart  [q]uit  [?] help")
    }
}

fn render_technical<W: Write>(out: &mut W, answers: &Answers) -> io::Result<()> {
    writeln!(out, "What's in your tech stack?")?;
    writeln!(out, "Programming languages (lang <number|name>)")?;
    render_choices(out, &PROGRAMMING_LANGUAGES, &answers.programming_languages)?;
    writeln!(out, "Frameworks & libraries (fw <number|name>)")?;
    render_choices(out, &FRAMEWORKS, &answers.frameworks)?;
    writeln!(out, "DSA proficiency (dsa 1-5): {}", answers.dsa_level.get())?;
    writeln!(
        out,
        "System design knowledge (design 1-5): {}",
        answers.system_design.get()
    )
}

fn render_resume<W: Write>(out: &mut W, answers: &Answers) -> io::Result<()> {
    writeln!(out, "How's your resume?")?;
    writeln!(
        out,
        "Do you have a resume ready? (resume y|n): {}",
        yes_no(answers.has_resume)
    )?;
    if !answers.has_resume {
        return Ok(());
    }
    writeln!(
        out,
        "How polished is your resume? (quality 1-5): {}",
        answers.resume_quality.get()
    )?;
    writeln!(
        out,
        "Does it have quantified achievements? (metrics y|n): {}",
        yes_no(answers.has_quantified_achievements)
    )?;
    writeln!(
        out,
        "Relevant experience or projects? (experience y|n): {}",
        yes_no(answers.has_relevant_experience)
    )?;
    writeln!(
        out,
        "Is it one page? (onepage y|n): {}",
        yes_no(answers.is_one_page)
    )
}

fn render_communication<W: Write>(out: &mut W, answers: &Answers) -> io::Result<()> {
    writeln!(out, "Can you articulate your value?")?;
    writeln!(
        out,
        "How confident are you speaking in interviews? (confidence 1-5): {}",
        answers.communication_confidence.get()
    )?;
    writeln!(
        out,
        "Can you explain your projects clearly? (explain y|n): {}",
        yes_no(answers.can_explain_projects)
    )?;
    writeln!(
        out,
        "Have you prepared STAR stories? (stories y|n): {}",
        yes_no(answers.has_prepped_stories)
    )?;
    writeln!(
        out,
        "Ready for behavioral questions? (behavioral y|n): {}",
        yes_no(answers.behavioral_ready)
    )
}

fn render_portfolio<W: Write>(out: &mut W, answers: &Answers) -> io::Result<()> {
    writeln!(out, "Show your work")?;
    writeln!(
        out,
        "Do you have a portfolio website? (site y|n): {}",
        yes_no(answers.has_portfolio)
    )?;
    writeln!(
        out,
        "Active GitHub profile? (github y|n): {}",
        yes_no(answers.has_github)
    )?;
    if answers.has_github {
        writeln!(
            out,
            "How active is your GitHub? (activity 1-5): {}",
            answers.github_activity.get()
        )?;
    }
    writeln!(
        out,
        "How many substantial projects do you have? (projects 0-5): {}",
        answers.project_count.get()
    )?;
    writeln!(
        out,
        "LinkedIn profile? (linkedin y|n): {}",
        yes_no(answers.has_linkedin)
    )
}

fn render_choices<W: Write>(out: &mut W, options: &[&str], selected: &[String]) -> io::Result<()> {
    for (index, option) in options.iter().enumerate() {
        let mark = if selected.iter().any(|name| name == option) {
            "x"
        } else {
            " "
        };
        writeln!(out, "  {:>2}. [{mark}] {option}", index + 1)?;
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  Enter / n     start or go to the next screen")?;
    writeln!(out, "  b             previous screen")?;
    writeln!(out, "  r             restart from scratch")?;
    writeln!(out, "  q             quit")?;
    writeln!(out, "  <field> <value>  answer a question shown on this screen")
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn parse_command(line: &str, step: Step) -> Result<Command, String> {
    let (keyword, argument) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    let keyword = keyword.to_ascii_lowercase();

    let edit = match keyword.as_str() {
        "" if step == Step::Welcome => return Ok(Command::Event(WizardEvent::Start)),
        "" | "n" | "next" => return Ok(Command::Event(WizardEvent::Next)),
        "s" | "start" => return Ok(Command::Event(WizardEvent::Start)),
        "b" | "back" => return Ok(Command::Event(WizardEvent::Back)),
        "r" | "restart" => return Ok(Command::Event(WizardEvent::Restart)),
        "q" | "quit" => return Ok(Command::Quit),
        "?" | "h" | "help" => return Ok(Command::Help),
        "lang" => AnswerEdit::ToggleLanguage(resolve_choice(argument, &PROGRAMMING_LANGUAGES)?),
        "fw" => AnswerEdit::ToggleFramework(resolve_choice(argument, &FRAMEWORKS)?),
        "dsa" => AnswerEdit::DsaLevel(parse_number(argument)?),
        "design" => AnswerEdit::SystemDesign(parse_number(argument)?),
        "resume" => AnswerEdit::HasResume(parse_flag(argument)?),
        "quality" => AnswerEdit::ResumeQuality(parse_number(argument)?),
        "metrics" => AnswerEdit::QuantifiedAchievements(parse_flag(argument)?),
        "experience" => AnswerEdit::RelevantExperience(parse_flag(argument)?),
        "onepage" => AnswerEdit::OnePage(parse_flag(argument)?),
        "confidence" => AnswerEdit::CommunicationConfidence(parse_number(argument)?),
        "explain" => AnswerEdit::CanExplainProjects(parse_flag(argument)?),
        "stories" => AnswerEdit::PreppedStories(parse_flag(argument)?),
        "behavioral" => AnswerEdit::BehavioralReady(parse_flag(argument)?),
        "site" => AnswerEdit::HasPortfolio(parse_flag(argument)?),
        "github" => AnswerEdit::HasGithub(parse_flag(argument)?),
        "activity" => AnswerEdit::GithubActivity(parse_number(argument)?),
        "projects" => AnswerEdit::ProjectCount(parse_number(argument)?),
        "linkedin" => AnswerEdit::HasLinkedIn(parse_flag(argument)?),
        other => return Err(format!("unknown command '{other}', type ? for help")),
    };

    Ok(Command::Event(WizardEvent::Edit(edit)))
}

/// Accepts a 1-based position or a case-insensitive catalog name. Anything
/// else is passed through so validation can name it.
fn resolve_choice(argument: &str, options: &[&str]) -> Result<String, String> {
    if argument.is_empty() {
        return Err("expected a number or a name".to_string());
    }
    if let Ok(position) = argument.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| options.get(index))
            .map(|name| name.to_string())
            .ok_or_else(|| format!("choose a number between 1 and {}", options.len()));
    }
    Ok(options
        .iter()
        .find(|name| name.eq_ignore_ascii_case(argument))
        .map_or_else(|| argument.to_string(), |name| name.to_string()))
}

fn parse_number(argument: &str) -> Result<u8, String> {
    argument
        .parse::<u8>()
        .map_err(|_| format!("expected a number, got '{argument}'"))
}

fn parse_flag(argument: &str) -> Result<bool, String> {
    match argument.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        _ => Err(format!("expected y or n, got '{argument}'")),
    }
}
