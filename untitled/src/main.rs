use std::process::ExitCode;

use untitled_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    untitled_driver::run(&argument)
}
