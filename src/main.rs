// Thin CLI over the library: decode a trainer log, run one correction pass
// and dump every table as JSON for the downstream report generator.
//
// File reading and character decoding live here on purpose; the library
// only ever sees decoded text.
use std::env;
use std::fs;
use std::process;

use neurolog::{run, FillPolicy, NullTrace, RunConfig, TraceEvent};

const USAGE: &str = "usage: neurolog <log-file> <alpha> <learning-rate> \
<errors-target> <correction-target> [--strict] [--trace]";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut strict = false;
    let mut trace = false;
    let mut positional = Vec::new();
    for arg in &args {
        match arg.as_str() {
            "--strict" => strict = true,
            "--trace" => trace = true,
            flag if flag.starts_with("--") => fail_usage(&format!("unknown flag {flag}")),
            _ => positional.push(arg.as_str()),
        }
    }
    if positional.len() != 5 {
        fail_usage("expected 5 positional arguments");
    }

    let config = RunConfig {
        alpha: number_arg(positional[1], "alpha"),
        learning_rate: number_arg(positional[2], "learning-rate"),
        target_for_errors_table: number_arg(positional[3], "errors-target"),
        target_for_correction_table: number_arg(positional[4], "correction-target"),
        fill: if strict {
            FillPolicy::Strict
        } else {
            FillPolicy::Lenient
        },
    };

    let text = read_log(positional[0]);
    let outcome = if trace {
        let mut sink = |event: TraceEvent| {
            if let Ok(line) = serde_json::to_string(&event) {
                eprintln!("{line}");
            }
        };
        run(&text, &config, &mut sink)
    } else {
        run(&text, &config, &mut NullTrace)
    };

    let artifacts = match outcome {
        Ok(artifacts) => artifacts,
        Err(err) => {
            eprintln!("neurolog: {err}");
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&artifacts) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("neurolog: {err}");
            process::exit(1);
        }
    }
}

/// Reads the log as UTF-8; a log saved in the trainer's legacy encoding
/// degrades to lossy decoding with a warning, since character decoding is
/// the operator's concern, not the parser's.
fn read_log(path: &str) -> String {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("neurolog: cannot read {path}: {err}");
            process::exit(1);
        }
    };
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("neurolog: {path} is not UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Operator-entered numbers accept the same comma decimal separator the
/// log uses.
fn number_arg(raw: &str, name: &str) -> f64 {
    match raw.replace(',', ".").parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("neurolog: {name} {raw:?} is not a number");
            process::exit(2);
        }
    }
}

fn fail_usage(reason: &str) -> ! {
    eprintln!("neurolog: {reason}\n{USAGE}");
    process::exit(2);
}
