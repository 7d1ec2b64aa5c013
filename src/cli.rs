use crate::options::{Options, PrefixPolicy};
use crate::repair_with_options;
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE         Write output to FILE (default stdout)\n\
               --minify              Emit compact output instead of pretty\n\
               --indent N            Pretty-print indent width (default 2)\n\
               --fixes               Report applied fixes on stderr\n\
               --prefix-policy P     wrap|discard for embedded `label: {{...}}` strings\n\
               --max-depth N         Reviver recursion cap (default 10)\n\
               --no-comments         Disable comment stripping\n\
               --no-python-literals  Disable True/False/None normalization\n\
               --no-quote-unify      Disable single-quote conversion\n\
               --no-revive           Disable embedded-string revival\n\
           -h, --help                Show this help\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut minify = false;
    let mut show_fixes = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--minify" => {
                minify = true;
            }
            "--indent" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --indent");
                    std::process::exit(2);
                }
                opts.indent_width = args[i].parse().unwrap_or(2);
            }
            "--fixes" => {
                show_fixes = true;
            }
            "--prefix-policy" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing P for --prefix-policy");
                    std::process::exit(2);
                }
                match args[i].to_lowercase().as_str() {
                    "wrap" => opts.prefix_policy = PrefixPolicy::Wrap,
                    "discard" => opts.prefix_policy = PrefixPolicy::Discard,
                    other => {
                        eprintln!("Unknown prefix policy: {}", other);
                        std::process::exit(2);
                    }
                }
            }
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --max-depth");
                    std::process::exit(2);
                }
                opts.max_revive_depth = args[i].parse().unwrap_or(10);
            }
            "--no-comments" => {
                opts.strip_comments = false;
            }
            "--no-python-literals" => {
                opts.python_literals = false;
            }
            "--no-quote-unify" => {
                opts.unify_quotes = false;
            }
            "--no-revive" => {
                opts.revive_embedded = false;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    let mode = CliMode {
        input,
        output,
        minify,
        show_fixes,
    };
    (opts, mode)
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    minify: bool,
    show_fixes: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };

    let res = repair_with_options(&content, &opts);
    if mode.show_fixes {
        for f in &res.fixes {
            eprintln!("fix: {}", f);
        }
    }
    if !res.success {
        for e in &res.errors {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let rendered = if mode.minify {
        match &res.data {
            Some(v) => serde_json::to_string(v)?,
            None => String::new(),
        }
    } else {
        res.formatted
    };
    out_writer.write_all(rendered.as_bytes())?;
    out_writer.write_all(b"\n")?;
    out_writer.flush()?;
    Ok(())
}
