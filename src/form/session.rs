use std::io::{BufRead, Write};

use thiserror::Error;

use crate::form::select::SingleSelectGroup;
use crate::model::questionnaire::{QUESTION_COUNT, labels, statements};
use crate::model::responses::ResponseSet;
use crate::model::thresholds::{ProfileThresholds, UnansweredPolicy};
use crate::pipeline::stage1_answers::parse_entry;
use crate::pipeline::stage3_classify::assess;
use crate::report::text::{render_intro, render_result_block};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer { index: usize, value: u8 },
    Reset,
    Show,
    Result,
    Done,
}

/// Parses one input line. Question numbers are 1-based.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "reset" | "nulstil" => return Ok(Command::Reset),
        "show" | "vis" => return Ok(Command::Show),
        "result" | "resultat" => return Ok(Command::Result),
        "done" | "quit" | "q" => return Ok(Command::Done),
        _ => {}
    }

    let (number, answer) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("unknown command: {}", line))?;
    let number = number
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=QUESTION_COUNT).contains(n))
        .ok_or_else(|| format!("question number must be 1-{}", QUESTION_COUNT))?;
    match parse_entry(answer) {
        Some(Some(value)) => Ok(Command::Answer {
            index: number - 1,
            value,
        }),
        _ => Err(format!("invalid answer: {}", answer.trim())),
    }
}

/// One respondent working through the questionnaire on a line-based terminal.
pub struct Session<R, W> {
    input: R,
    output: W,
    responses: ResponseSet,
    thresholds: ProfileThresholds,
    policy: UnansweredPolicy,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, policy: UnansweredPolicy) -> Self {
        Self {
            input,
            output,
            responses: ResponseSet::new(),
            thresholds: ProfileThresholds::default_v1(),
            policy,
        }
    }

    /// Runs until `done` or end of input and returns the final answers.
    pub fn run(mut self) -> Result<ResponseSet, SessionError> {
        write!(self.output, "{}", render_intro())?;
        writeln!(
            self.output,
            "Besvar udsagnene med '<nr> <0-4 eller svar>'. Kommandoer: vis, resultat, nulstil, done."
        )?;
        self.render_questions()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Done) => break,
                Ok(command) => self.apply(command)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        self.output.flush()?;
        Ok(self.responses)
    }

    fn apply(&mut self, command: Command) -> Result<(), SessionError> {
        tracing::debug!(?command, "session command");
        match command {
            Command::Answer { index, value } => {
                let current = self.responses.get(index).map(usize::from);
                let mut group = SingleSelectGroup::new(labels(), current);
                let responses = &mut self.responses;
                let mut outcome = Ok(());
                group.select(usize::from(value), |selected| {
                    outcome = responses.set_answer(index, selected as u8);
                });
                if let Err(err) = outcome {
                    writeln!(self.output, "{}", err)?;
                    return Ok(());
                }
                self.render_question(index)?;
                self.render_result()?;
            }
            Command::Reset => {
                self.responses.reset();
                writeln!(self.output, "Alle svar er nulstillet.")?;
                self.render_result()?;
            }
            Command::Show => self.render_questions()?,
            Command::Result => self.render_result()?,
            Command::Done => {}
        }
        Ok(())
    }

    fn render_questions(&mut self) -> Result<(), SessionError> {
        for index in 0..QUESTION_COUNT {
            self.render_question(index)?;
        }
        Ok(())
    }

    fn render_question(&mut self, index: usize) -> Result<(), SessionError> {
        let current = self.responses.get(index).map(usize::from);
        let group = SingleSelectGroup::new(labels(), current);
        writeln!(self.output, "{}. {}", index + 1, statements()[index])?;
        writeln!(self.output, "   {}", group.render())?;
        Ok(())
    }

    fn render_result(&mut self) -> Result<(), SessionError> {
        let assessment = assess(&self.responses, &self.thresholds, self.policy);
        if assessment.outcome.is_none() {
            tracing::warn!(
                answered = assessment.answered,
                "result hidden until all questions are answered"
            );
        }
        writeln!(self.output)?;
        write!(self.output, "{}", render_result_block(&assessment))?;
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/form/session.rs"]
mod tests;
