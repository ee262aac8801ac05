#![forbid(unsafe_code)]
use std::path::{Path, PathBuf};
use std::{env, ffi, fs, io};

fn main() -> CodingResult {
    CodingResult::catch_panic(|| {
        let flags = Flags::from_args(env::args_os());
        run_coding(flags)
    })
}

fn run_coding(flags: Flags) -> Result<(), io::Error> {
    let Flags {
        operation,
        input,
        output,
    } = flags;

    let data = fs::read(&input).map_err(|err| annotate(&input, err))?;

    let coded = match operation {
        Operation::Compress => {
            let compressed = lzw16::compress(&data);
            report_sizes(data.len(), compressed.len());
            compressed
        }
        Operation::Decompress => lzw16::decompress(&data).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: {}", input.display(), err),
            )
        })?,
    };

    fs::write(&output, &coded).map_err(|err| annotate(&output, err))
}

/// Per-file summary in the shape batch tabulators expect.
fn report_sizes(original: usize, compressed: usize) {
    if original == 0 {
        println!("Original: 0 bytes | Compressed: {} bytes", compressed);
    } else {
        let ratio = compressed as f64 / original as f64 * 100.0;
        println!(
            "Original: {} bytes | Compressed: {} bytes | Ratio: {:.2}%",
            original, compressed, ratio
        );
    }
}

fn annotate(path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

struct Flags {
    operation: Operation,
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug)]
enum Operation {
    Compress,
    Decompress,
}

fn command() -> clap::Command<'static> {
    clap::Command::new("lzw16")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compress and restore files as fixed-width 16 bit LZW code streams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            clap::Command::new("compress")
                .visible_alias("c")
                .about("Compress INPUT into a code stream at OUTPUT")
                .arg(file_arg("input"))
                .arg(file_arg("output")),
        )
        .subcommand(
            clap::Command::new("decompress")
                .visible_alias("d")
                .about("Restore the code stream at INPUT into OUTPUT")
                .arg(file_arg("input"))
                .arg(file_arg("output")),
        )
}

fn file_arg(name: &'static str) -> clap::Arg<'static> {
    clap::Arg::new(name)
        .required(true)
        .value_parser(clap::builder::ValueParser::path_buf())
}

impl Flags {
    fn from_args(args: impl Iterator<Item = ffi::OsString>) -> Self {
        let matches = command().get_matches_from(args);

        let (operation, sub) = match matches.subcommand() {
            Some(("compress", sub)) => (Operation::Compress, sub),
            Some(("decompress", sub)) => (Operation::Decompress, sub),
            _ => unreachable!("unparsed subcommand"),
        };

        Flags {
            operation,
            input: path_of(sub, "input"),
            output: path_of(sub, "output"),
        }
    }
}

fn path_of(matches: &clap::ArgMatches, name: &str) -> PathBuf {
    match matches.get_one::<PathBuf>(name) {
        Some(path) => path.clone(),
        None => unreachable!("unparsed {} path", name),
    }
}

enum CodingResult {
    Ok,
    Err(io::Error),
    Panic,
}

impl CodingResult {
    fn catch_panic(op: fn() -> Result<(), io::Error>) -> Self {
        std::panic::catch_unwind(|| match op() {
            Ok(()) => CodingResult::Ok,
            Err(err) => CodingResult::Err(err),
        })
        .unwrap_or(CodingResult::Panic)
    }
}

impl std::process::Termination for CodingResult {
    fn report(self) -> std::process::ExitCode {
        match self {
            CodingResult::Ok => std::process::ExitCode::SUCCESS,
            CodingResult::Err(err) => {
                eprintln!("{}", err);
                std::process::ExitCode::FAILURE
            }
            CodingResult::Panic => {
                eprintln!(
                    "The process failed irrecoverably! This should never happen and is a bug."
                );
                eprintln!("If you know what this means, please report it to:");
                eprintln!("	<{}>", env!("CARGO_PKG_REPOSITORY"));
                std::process::ExitCode::from(128)
            }
        }
    }
}
