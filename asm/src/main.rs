use std::{path::PathBuf, process::ExitCode};

use hackasm::{dump, io, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Output file [default: <INPUT>.hack]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write the resolved symbol table as YAML
    #[clap(short, long, value_name = "FILE")]
    symbols: Option<PathBuf>,
}

fn main() -> ExitCode {
    use clap::Parser;

    let env = env_logger::Env::default()
        .filter_or("HACKASM_LOG", "info")
        .write_style_or("HACKASM_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args: Args = Args::parse();
    println!("Hack Assembler");

    println!("1. Read Source");
    println!("  < {}", args.input.display());
    let file = args.input.display().to_string();
    let source = match io::read_source(&args.input) {
        Ok(source) => source,
        Err(err) => {
            err.print_diag(&file, "");
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.print_diag(&file, &source);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, source: &str) -> Result<(), Error> {
    println!("2. Resolve Symbols & Encode");
    let assembly = hackasm::assemble(source)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| io::default_output(&args.input));
    println!("3. Write Binary");
    println!("  > {}", output.display());
    io::write_output(&output, &assembly)?;

    if let Some(path) = &args.symbols {
        println!("  > {}", path.display());
        std::fs::write(path, assembly.symbols().to_yaml()?)
            .map_err(|e| Error::FileWrite(path.display().to_string(), e))?;
    }

    if args.dump {
        dump::print_listing(source, &assembly);
        dump::print_symbols(assembly.symbols());
    }

    Ok(())
}
