use arch::Arch;
use asm::{assemble, Assembly, Error};
use color_print::{cformat, cprintln};
use indexmap::IndexMap;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    #[clap(default_value = "main.asm")]
    input: Vec<String>,

    /// Listing file
    #[clap(short, long, default_value = "main.lst")]
    output: String,

    /// Dump listing to stdout
    #[clap(short, long)]
    dump: bool,

    /// Target label for the summary line
    #[clap(short, long, default_value = "x86_64")]
    arch: Arch,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            cprintln!("<red,bold>error</>: {}", err);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when any input produced a diagnostic.
fn run(args: &Args) -> Result<bool, Error> {
    use std::io::{BufRead, Write};

    println!("Placeholder Assembler ({})", args.arch);

    println!("1. Read Files and Assemble");
    let mut files: IndexMap<String, Vec<String>> = IndexMap::new();
    for path in &args.input {
        println!("  < {}", path);
        let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.clone(), e))?;
        let lines = std::io::BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::FileRead(path.clone(), e))?;
        files.insert(path.clone(), lines);
    }

    let mut results: IndexMap<String, Assembly> = IndexMap::new();
    for (path, lines) in &files {
        let result = assemble(&lines.join("\n"));
        for diag in &result.diagnostics {
            diag.print_diag(&files, path);
        }
        for problem in result.problems(args.arch) {
            println!("  {}: {}", path, problem);
        }
        results.insert(path.clone(), result);
    }

    println!("2. Write Listing");
    println!("  > {}", &args.output);
    let mut out = std::fs::File::create(&args.output)
        .map_err(|e| Error::FileCreate(args.output.clone(), e))?;
    for (path, result) in &results {
        writeln!(out, "; {}", path).map_err(|e| Error::FileWrite(args.output.clone(), e))?;
        if !result.listing.is_empty() {
            writeln!(out, "{}", result.listing)
                .map_err(|e| Error::FileWrite(args.output.clone(), e))?;
        }
    }

    if args.dump {
        for (path, result) in &results {
            println!(
                "{}+------[{}]{}",
                "-".repeat(7),
                path,
                "-".repeat(45usize.saturating_sub(path.len()))
            );
            for entry in &result.entries {
                println!(
                    "{} | {:>4}: {}",
                    cformat!("<y>{:04x}</>", entry.addr),
                    entry.line,
                    entry.text
                );
            }
        }
        println!("-------+-----------------------------------------------------");
    }

    Ok(results.values().all(|r| r.is_ok()))
}
