use alphaindex::render::{render_c_table, render_report};
use alphaindex::{build_inverse_table, Alphabet, AlphabetBuf};
use anyhow::Context;
use std::io::{BufWriter, Write};

const DEFAULT_TABLE_NAME: &str = "base64urlDecTable";

fn parse_c_identifier(s: &str) -> Result<String, String> {
    let mut chars = s.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(s.to_owned())
    } else {
        Err(format!("{:?} is not a valid C identifier", s))
    }
}

fn select_alphabet(args: &clap::ArgMatches) -> Alphabet<'_> {
    match args.get_one::<AlphabetBuf>("alphabet") {
        Some(buf) => buf.as_alphabet(),
        None if args.get_flag("standard") => Alphabet::STANDARD,
        None => Alphabet::URL_SAFE,
    }
}

fn run<W: Write>(args: &clap::ArgMatches, writer: &mut W) -> anyhow::Result<()> {
    let alphabet = select_alphabet(args);
    log::debug!("using alphabet {}", alphabet);

    let output = match args.get_one::<String>("format").map(String::as_str) {
        Some("c") => {
            let name = args
                .get_one::<String>("name")
                .map(String::as_str)
                .unwrap_or(DEFAULT_TABLE_NAME);

            render_c_table(name, &alphabet.decode_table())
        }
        _ => {
            let table = build_inverse_table(&alphabet);
            log::debug!("inverse table has {} slots", table.len());

            render_report(&table) + "\n"
        }
    };

    writer
        .write_all(output.as_bytes())
        .context("unable to write output")?;
    writer.flush().context("unable to write output")?;

    Ok(())
}

fn command() -> clap::Command {
    clap::Command::new("aidx")
        .version(clap::crate_version!())
        .about("Print the character to index lookup table of a base64 alphabet")
        .arg(
            clap::Arg::new("alphabet")
                .help("A custom 64 character alphabet")
                .short('a')
                .long("alphabet")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(AlphabetBuf))
                .value_name("ALPHABET"),
        )
        .arg(
            clap::Arg::new("standard")
                .help("Use the standard alphabet ('+' and '/') instead of the URL safe one")
                .long("standard")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("alphabet"),
        )
        .arg(
            clap::Arg::new("format")
                .help("Output format")
                .short('f')
                .long("format")
                .action(clap::ArgAction::Set)
                .value_parser(["report", "c"])
                .default_value("report")
                .value_name("FORMAT"),
        )
        .arg(
            clap::Arg::new("name")
                .help("Name of the C array, only used with --format c")
                .short('n')
                .long("name")
                .action(clap::ArgAction::Set)
                .value_parser(parse_c_identifier)
                .default_value(DEFAULT_TABLE_NAME)
                .value_name("NAME"),
        )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command().get_matches();

    let mut writer = BufWriter::new(std::io::stdout());
    if let Err(err) = run(&matches, &mut writer) {
        eprintln!("unable to print table, got err {:#}", err);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn run_with(args: &[&str]) -> String {
        let matches = command().try_get_matches_from(args).unwrap();

        let mut output: Vec<u8> = Vec::new();
        run(&matches, &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn command_should_be_valid() {
        command().debug_assert();
    }

    #[test]
    fn run_without_args_should_print_report() {
        let output = run_with(&["aidx"]);

        assert!(output.starts_with("undefined [-1, -1, 62, "));
        assert!(output.ends_with(", 51]\n"));
        assert_eq!(1, output.lines().count());
    }

    #[test]
    fn run_with_standard_should_work() {
        let matches = command()
            .try_get_matches_from(["aidx", "--standard"])
            .unwrap();
        assert_eq!(Alphabet::STANDARD, select_alphabet(&matches));

        let output = run_with(&["aidx", "--standard"]);
        assert!(output.starts_with("62 [62, "));
    }

    #[test]
    fn run_with_custom_alphabet_should_work() {
        let input = Alphabet::STANDARD.to_string();
        let matches = command()
            .try_get_matches_from(["aidx", "-a", input.as_str()])
            .unwrap();
        assert_eq!(Alphabet::STANDARD, select_alphabet(&matches));
    }

    #[test]
    fn run_with_c_format_should_work() {
        let output = run_with(&["aidx", "-f", "c"]);
        assert!(output.starts_with("static const uint8_t base64urlDecTable[128] = {\n"));
        assert!(output.ends_with("};\n"));

        let output = run_with(&["aidx", "-f", "c", "-n", "_dec_table2"]);
        assert!(output.starts_with("static const uint8_t _dec_table2[128] = {\n"));
    }

    #[test]
    fn invalid_alphabet_should_fail() {
        let input = &Alphabet::URL_SAFE.to_string()[..63];
        let err = command()
            .try_get_matches_from(["aidx", "-a", input])
            .unwrap_err();
        assert_eq!(ErrorKind::ValueValidation, err.kind());
        assert_eq!(2, err.exit_code());
    }

    #[test]
    fn standard_with_alphabet_should_fail() {
        let input = Alphabet::STANDARD.to_string();
        let err = command()
            .try_get_matches_from(["aidx", "--standard", "-a", input.as_str()])
            .unwrap_err();
        assert_eq!(ErrorKind::ArgumentConflict, err.kind());
    }

    #[test]
    fn invalid_name_should_fail() {
        for name in ["a b;", "9table", "", "dec-table"] {
            let err = command()
                .try_get_matches_from(["aidx", "-f", "c", "-n", name])
                .unwrap_err();
            assert_eq!(ErrorKind::ValueValidation, err.kind());
        }
    }

    #[test]
    fn parse_c_identifier_should_work() {
        assert_eq!(Ok("base64urlDecTable".to_owned()), parse_c_identifier("base64urlDecTable"));
        assert_eq!(Ok("_t0".to_owned()), parse_c_identifier("_t0"));
        assert!(parse_c_identifier("0t").is_err());
    }
}
