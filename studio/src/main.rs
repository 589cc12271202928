use arch::Arch;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};

use studio::msg::Msg;
use studio::{view, Command, Config, DirStore, Error, Session};

#[derive(Parser, Debug)]
#[clap(
    name = "asmstudio",
    author = "kanade-k-1228",
    version = "v0.1.0",
    about = "Mock assembly IDE with a placeholder assembler"
)]
struct Args {
    /// Directory holding the saved file list
    #[arg(short, long)]
    store: Option<String>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Target shown in the toolbar
    #[arg(short, long)]
    arch: Option<Arch>,

    /// Read commands from a file instead of stdin
    #[arg(short = 'f', long)]
    script: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        Msg::Error(err.to_string()).print();
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    println!("asmstudio by kanade-k-1228");

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(store) = args.store {
        config.store = store.into();
    }
    if let Some(arch) = args.arch {
        config.arch = arch;
    }

    let mut session = Session::open(DirStore::new(&config.store), &config, args.verbose);
    println!("{}", view::render(session.state()));

    let input: Box<dyn BufRead> = match &args.script {
        Some(fname) => {
            let file = File::open(fname).map_err(|e| Error::FileOpen(fname.clone(), e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(err) => {
                match &args.script {
                    Some(fname) => {
                        let at = (fname.as_str(), idx + 1, line.as_str());
                        Msg::Error(err.to_string()).diag(at)
                    }
                    None => Msg::Error(err.to_string()).print(),
                }
                continue;
            }
        };

        match cmd {
            Command::Quit => break,
            Command::Help => println!("{}", studio::command::HELP),
            Command::Show => println!("{}", view::render(session.state())),
            Command::Files => println!("{}", view::explorer(session.state())),
            Command::Action(action) => match session.dispatch(action) {
                Ok(()) => println!("{}", view::render(session.state())),
                Err(err) => Msg::Error(err.to_string()).print(),
            },
        }
    }

    println!("=================================================");
    Ok(())
}
