use std::io::{BufRead, Write};

use chrono::Local;
use log::{debug, warn};

use crate::{
    domain::expense::ExpenseRecord,
    error::{Error, Result},
    prompt::prompt_string,
    recorder, report,
    store::Store,
};

const MENU: &str = "\n=== Expense Tracker ===\n\
                    1. Add New Expense\n\
                    2. View All Expenses\n\
                    3. Category-wise Summary\n\
                    4. Monthly Summary\n\
                    5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    List,
    ByCategory,
    ByMonth,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::ByCategory),
            "4" => Some(Self::ByMonth),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// An interactive session over one ledger.
///
/// The session owns the in-memory ledger for its whole lifetime and hands it
/// to the recorder and the reports explicitly.
pub struct Session<R, W> {
    records: Vec<ExpenseRecord>,
    store: Store,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Load the ledger from `store` and prepare a session on the given streams.
    pub fn open(store: Store, input: R, output: W) -> Result<Self> {
        let records = store.load()?;
        Ok(Self {
            records,
            store,
            input,
            output,
        })
    }

    #[cfg(test)]
    pub(crate) fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Run the menu loop until the user picks exit.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Expense Tracker")?;

        while self.step()? == State::Running {}

        writeln!(self.output, "Goodbye! Keep tracking your expenses wisely!")?;
        Ok(())
    }

    /// Show the menu once and carry out the chosen action.
    pub fn step(&mut self) -> Result<State> {
        writeln!(self.output, "{MENU}")?;
        let answer = prompt_string(
            &mut self.input,
            &mut self.output,
            "Choose an option (1-5): ",
        )?;

        let Some(choice) = Choice::parse(&answer) else {
            warn!("invalid menu choice {answer:?}");
            writeln!(self.output, "Invalid choice. Please try again.")?;
            return Ok(State::Running);
        };
        debug!("menu choice {choice:?}");

        let result = match choice {
            Choice::Add => recorder::add(
                &mut self.records,
                &self.store,
                Local::now().date_naive(),
                &mut self.input,
                &mut self.output,
            ),
            Choice::List => {
                report::list_all(&self.records, &mut self.output).map_err(Error::from)
            }
            Choice::ByCategory => report::summary_by_category(&self.records, &mut self.output),
            Choice::ByMonth => report::summary_by_month(&self.records, &mut self.output),
            Choice::Exit => return Ok(State::Terminated),
        };

        match result {
            Err(Error::BusinessError(err)) => {
                warn!("{choice:?} abandoned: {err}");
                writeln!(self.output, "{}", err.warning())?;
            }
            result => result?,
        }

        Ok(State::Running)
    }
}
