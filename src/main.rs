/*
 * main.rs
 *
 * runtimex-probe: runs one fatal path for real so tests can watch the
 * process die from the outside. Exit status and stderr are the output.
 *
 *   runtimex-probe SCENARIO [MSG...]
 *
 * Exit 2 on bad usage, same as most CLIs.
 */

use core::fmt::{self, Write as FmtWrite};

use runtimex::io::{StderrWriter, eprint_line};
use runtimex::{
    Fatal, LogProcess, assert_true, exit_codes, exit_on_error, log_fatal_on_error,
    log_fatal_on_error0, log_fatal_on_error1, log_fatal_on_error2, log_fatal_on_error3, unwrap0,
    unwrap1, unwrap2, unwrap3,
};

const USAGE_ERROR: i32 = 2;

const USAGE: &str = "usage: runtimex-probe SCENARIO [MSG...]\n\
                     scenarios: ok, exit-on-error, log-fatal, log-fatal0, log-fatal-logger, \
                     log-fatal-no-logger, log-fatal-level-off, assert-false, unwrap-error";

/* the error every failing scenario reports */
#[derive(Debug)]
struct ProbeError;

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("probe failure")
    }
}

impl std::error::Error for ProbeError {}

/* log::Log over the raw stderr writer, for the LogProcess scenario */
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Error
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(StderrWriter, "[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run_main(&args));
}

/* shared implementation; only returns for ok and bad usage */
fn run_main(args: &[String]) -> i32 {
    let Some((scenario, rest)) = args.split_first() else {
        eprint_line(format_args!("{USAGE}"));
        return USAGE_ERROR;
    };
    let msgs: Vec<&str> = rest.iter().map(String::as_str).collect();

    match scenario.as_str() {
        "ok" => {
            success_paths();
            println!("ok");
            exit_codes::SUCCESS
        }
        "exit-on-error" => {
            exit_on_error(Some(ProbeError));
            unreachable!("exit_on_error returned");
        }
        "log-fatal" => {
            log_fatal_on_error(Some(ProbeError), &msgs);
            unreachable!("log_fatal_on_error returned");
        }
        "log-fatal0" => {
            log_fatal_on_error0(Some(ProbeError));
            unreachable!("log_fatal_on_error0 returned");
        }
        "log-fatal-logger" => {
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(log::LevelFilter::Error);
            }
            Fatal::new(LogProcess).log_fatal_on_error(Some(ProbeError), &msgs);
            unreachable!("LogProcess returned");
        }
        "log-fatal-no-logger" => {
            Fatal::new(LogProcess).log_fatal_on_error(Some(ProbeError), &msgs);
            unreachable!("LogProcess returned");
        }
        "log-fatal-level-off" => {
            /* installed, but max level stays at the default Off */
            let _ = log::set_logger(&LOGGER);
            Fatal::new(LogProcess).log_fatal_on_error(Some(ProbeError), &msgs);
            unreachable!("LogProcess returned");
        }
        "assert-false" => {
            assert_true(false);
            unreachable!("assert_true returned");
        }
        "unwrap-error" => unwrap1(exit_codes::SUCCESS, Some(ProbeError)),
        other => {
            eprint_line(format_args!("runtimex-probe: unknown scenario '{other}'\n{USAGE}"));
            USAGE_ERROR
        }
    }
}

/* every helper with an absent error; none of them may exit */
fn success_paths() {
    let none = || None::<ProbeError>;

    assert_true(true);
    unwrap0(none());
    let _ = unwrap1(1, none());
    let _ = unwrap2(1, "two", none());
    let _ = unwrap3(1, "two", 3.0, none());

    exit_on_error(none());
    log_fatal_on_error0(none());
    let _ = log_fatal_on_error1(1, none());
    let _ = log_fatal_on_error2(1, "two", none());
    let _ = log_fatal_on_error3(1, "two", 3.0, none());
    log_fatal_on_error(none(), &["never", "printed"]);
}
