use computor_eval::{ctxt::Ctxt, process::process};
use std::{
    env,
    fs::OpenOptions,
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

const USAGE: &str = "\
computorv2 - interactive mathematical interpreter

usage:
    computorv2              start the interactive prompt
    computorv2 \"EXPR\"       evaluate a single expression and exit
    computorv2 --help       show this message

a line of input is one of:
    IDENT = EXPR                 variable assignment
    IDENT(IDENT, ...) = EXPR     function definition
    EXPR = ?                     evaluation query
    EXPR1 = EXPR2 ?              equation solving
    EXPR                         evaluation

type `exit` (or press ctrl-d) to leave the prompt.
";

/// The path of the history file, if a home directory is known.
fn history_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(".computorv2_history"))
}

/// Appends an input line to the history file. Best-effort: the interpreter works fine without a
/// writable history.
fn append_history(line: &str) {
    let Some(path) = history_path() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

/// Runs the interactive prompt, or consumes piped lines when stdin is not a terminal.
fn repl() {
    let mut ctxt = Ctxt::new();
    let interactive = io::stdin().is_terminal();
    let mut input = String::new();

    loop {
        if interactive {
            print!("> ");
            let _ = io::stdout().flush();
        }

        input.clear();
        match io::stdin().read_line(&mut input) {
            // EOF or a broken pipe both end the session
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        if interactive {
            append_history(line);
        }

        match process(line, &mut ctxt) {
            Ok(result) => println!("{}", result),
            Err(err) if interactive => err.report_to_stderr(line),
            Err(err) => eprintln!("Error: {}", err.message()),
        }
    }
}

fn main() -> ExitCode {
    let mut args = env::args();
    args.next();

    if let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        }

        // one-shot: evaluate the single expression and exit
        let mut ctxt = Ctxt::new();
        return match process(&arg, &mut ctxt) {
            Ok(result) => {
                println!("{}", result);
                ExitCode::SUCCESS
            },
            Err(err) => {
                eprintln!("Error: {}", err.message());
                ExitCode::FAILURE
            },
        };
    }

    repl();
    ExitCode::SUCCESS
}
