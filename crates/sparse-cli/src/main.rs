use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use sparse_cli::input::read_matrix;
use sparse_cli::render::{render_text, Report};
use sparse_util::{add, multiply, subtract, transpose, SparseMatrix};

fn matrix_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Path to a matrix file (one row per line, whitespace-separated values)")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn load(matches: &ArgMatches, name: &str) -> Result<SparseMatrix> {
    let path = matches
        .get_one::<PathBuf>(name)
        .expect("argument is required");
    let dense = read_matrix(path)?;
    Ok(SparseMatrix::from_dense(&dense))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SPARSE_LOG", "error,sparse=info"))
        .init();

    let matches = Command::new("sparsecalc")
        .version(clap::crate_version!())
        .about("Sparse matrix calculator - transpose, add, subtract and multiply")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the result as JSON instead of tables")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("sparse")
                .about("Show the sparse form of a matrix")
                .arg(matrix_arg("MATRIX")),
        )
        .subcommand(
            Command::new("transpose")
                .about("Transpose a matrix")
                .arg(matrix_arg("MATRIX")),
        )
        .subcommand(
            Command::new("add")
                .about("Add two matrices of the same shape")
                .arg(matrix_arg("LEFT"))
                .arg(matrix_arg("RIGHT")),
        )
        .subcommand(
            Command::new("subtract")
                .about("Subtract the right matrix from the left")
                .arg(matrix_arg("LEFT"))
                .arg(matrix_arg("RIGHT")),
        )
        .subcommand(
            Command::new("multiply")
                .about("Multiply two matrices (left columns must equal right rows)")
                .arg(matrix_arg("LEFT"))
                .arg(matrix_arg("RIGHT")),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("sparse", sub)) => load(sub, "MATRIX")?,
        Some(("transpose", sub)) => transpose(&load(sub, "MATRIX")?),
        Some(("add", sub)) => add(&load(sub, "LEFT")?, &load(sub, "RIGHT")?)?,
        Some(("subtract", sub)) => subtract(&load(sub, "LEFT")?, &load(sub, "RIGHT")?)?,
        Some(("multiply", sub)) => multiply(&load(sub, "LEFT")?, &load(sub, "RIGHT")?)?,
        _ => unreachable!(),
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&Report::from_matrix(&result))?);
    } else {
        print!("{}", render_text(&result));
    }
    Ok(())
}
