//! Parse the process arguments against a small registry and print the result.
//!
//! Run with:
//!
//! ```sh
//! cargo run -p optline-parser --example parse_args -- input.txt -n 3 --define k=v
//! ```

use optline_core::{Arity, OptionDef, OptionGroup, Options, ValidationError};
use optline_parser::Parser;
use optline_parser::output::{OutputFormat, format_command_line};

fn build_options() -> Result<Options, ValidationError> {
    let mut options = Options::new();
    options.add(OptionDef::with_value("n").long("lines"))?;
    options.add(
        OptionDef::new("D", Arity::Unbounded)
            .long("define")
            .value_separator('='),
    )?;
    options.add_group(
        OptionGroup::new()
            .with_option(OptionDef::flag("q").long("quiet"))
            .with_option(OptionDef::flag("v").long("verbose")),
    )?;
    Ok(options)
}

fn main() {
    let options = match build_options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match Parser::new().parse(&options, &args) {
        Ok(cmd) => match format_command_line(&cmd, OutputFormat::Table) {
            Ok(table) => print!("{table}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
