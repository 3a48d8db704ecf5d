use crate::errors::PowerCalcError;
use crate::input::{parse_number, parse_step};
use clap::{App, AppSettings, Arg, ArgMatches};
use termcolor::ColorChoice;

#[derive(Debug)]
pub struct AppArgs {
    /// Set for one-shot mode. Without it an interactive session runs.
    pub number: Option<i64>,
    pub start: i64,
    pub step: i64,
    pub color: ColorChoice,
    pub verbosity: u64,
}

fn app() -> App<'static, 'static> {
    App::new("Power Calculator")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Adolph C. <adolphc@outlook.com>")
        .about("Calculates the square, cube and fifth power of an integer.")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("value")
                .long("value")
                .takes_value(true)
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .conflicts_with("NUMBER")
                .help("The value an interactive session starts with. [default: 1]"),
        )
        .arg(
            Arg::with_name("step")
                .long("step")
                .takes_value(true)
                .value_name("STEP")
                .conflicts_with("NUMBER")
                .help("How far `+` and `-` move the value in an interactive session. [default: 1]"),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .takes_value(true)
                .value_name("WHEN")
                .possible_values(&["auto", "always", "never"])
                .default_value("auto")
                .help("When to color the output."),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Logs more to stderr. Can be repeated."),
        )
        .arg(
            Arg::with_name("NUMBER")
                .help("Prints the powers of this number and exits instead of starting a session.")
                .index(1),
        )
}

/// Parses arguments from the command line and returns them as an `AppArgs` struct.
pub fn parse_cli_args() -> Result<AppArgs, PowerCalcError> {
    args_from_matches(&app().get_matches())
}

fn args_from_matches(matches: &ArgMatches) -> Result<AppArgs, PowerCalcError> {
    let number = matches.value_of("NUMBER").map(parse_number).transpose()?;
    let start = parse_number(matches.value_of("value").unwrap_or("1"))?;
    let step = parse_step(matches.value_of("step").unwrap_or("1"))?;

    let color = match matches.value_of("color") {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => {
            if atty::is(atty::Stream::Stdout) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    };

    Ok(AppArgs {
        number,
        start,
        step,
        color,
        verbosity: matches.occurrences_of("verbose"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppArgs, PowerCalcError> {
        let mut argv = vec!["power-calc"];
        argv.extend_from_slice(args);
        args_from_matches(&app().get_matches_from(argv))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.number, None);
        assert_eq!(args.start, 1);
        assert_eq!(args.step, 1);
        assert_eq!(args.verbosity, 0);
    }

    #[test]
    fn negative_number_is_not_a_flag() {
        let args = parse(&["-2"]).unwrap();
        assert_eq!(args.number, Some(-2));
    }

    #[test]
    fn session_options() {
        let args = parse(&["--value", "-5", "--step", "10", "-vv", "--color", "never"]).unwrap();
        assert_eq!(args.start, -5);
        assert_eq!(args.step, 10);
        assert_eq!(args.verbosity, 2);
        assert_eq!(args.color, ColorChoice::Never);
    }

    #[test]
    fn session_options_conflict_with_one_shot() {
        let result = app().get_matches_from_safe(vec!["power-calc", "--step", "2", "5"]);
        assert_eq!(
            result.unwrap_err().kind,
            clap::ErrorKind::ArgumentConflict
        );
        let result = app().get_matches_from_safe(vec!["power-calc", "--value", "-3", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn bad_values_are_errors() {
        assert_eq!(
            parse(&["1.5"]).unwrap_err(),
            PowerCalcError::NotAnInteger("1.5".into())
        );
        assert_eq!(
            parse(&["--step", "0"]).unwrap_err(),
            PowerCalcError::InvalidStep("0".into())
        );
    }
}
