use crate::options::Difficulty;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const HELP: &str = "\
Usage: snakegrid [<options>]

Play Snake in the terminal

Options:
  -c, --config <FILE>       Read configuration from <FILE>
  -d, --difficulty <LEVEL>  Preselect difficulty: easy, medium, or hard
      --log-file <FILE>     Append log messages to <FILE>
      --mute                Don't ring the terminal bell
  -h, --help                Display this help message and exit
  -V, --version             Show the program version and exit
";

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

/// Command-line settings that override the configuration file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) mute: bool,
    pub(crate) log_file: Option<PathBuf>,
}

impl Invocation {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('d') | Arg::Long("difficulty") => {
                    args.difficulty = Some(parser.value()?.parse()?);
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("mute") => args.mute = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}
