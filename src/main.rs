use std::{error::Error as _, io, process::ExitCode};

use log::error;

use expenses::{error::Error, menu::Session, store::Store};

fn main() -> ExitCode {
    env_logger::init();

    let result = Session::open(Store::default(), io::stdin().lock(), io::stdout())
        .and_then(|mut session| session.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

/// The error message followed by each of its causes.
fn describe(err: &Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
