//! Conio Headless Runner
//!
//! Drives the console without a display for testing and automation.
//! Feeds bytes from a file or stdin through the write surface (optionally
//! through the input adapter first) and outputs a display snapshot.

use std::io::{self, Read};
use std::process::ExitCode;

use conio::core::Snapshot;
use conio::io::{Console, Fd, QueuedSource, StdinSource};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut input_file: Option<String> = None;
    let mut output_file: Option<String> = None;
    let mut output_format = OutputFormat::Text;
    let mut echo = false;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            },
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "-e" | "--echo" => {
                echo = true;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let snapshot = if echo && input_file.is_none() {
        // Interactive echo: stdin is the device keyboard
        let source = match StdinSource::new() {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error configuring terminal: {}", e);
                return ExitCode::FAILURE;
            },
        };
        let mut console = Console::new(source);
        echo_interactive(&mut console);
        Snapshot::from_screen(console.screen())
    } else {
        // Read input
        let input_data = match &input_file {
            Some(path) => match std::fs::read(path) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path, e);
                    return ExitCode::FAILURE;
                },
            },
            None => {
                // Read from stdin
                let mut data = Vec::new();
                if let Err(e) = io::stdin().read_to_end(&mut data) {
                    eprintln!("Error reading stdin: {}", e);
                    return ExitCode::FAILURE;
                }
                data
            },
        };

        if echo {
            let mut console = Console::new(QueuedSource::from_bytes(&input_data));
            echo_scripted(&mut console, input_data.len());
            Snapshot::from_screen(console.screen())
        } else {
            let mut console = Console::new(QueuedSource::new());
            console.write(Fd::STDOUT, &input_data);
            Snapshot::from_screen(console.screen())
        }
    };

    // Output result
    let rendered = match output_format {
        OutputFormat::Text => render_text(&snapshot),
        OutputFormat::Json => match snapshot.to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            },
        },
    };

    match &output_file {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &rendered) {
                eprintln!("Error writing file '{}': {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => println!("{}", rendered.trim_end_matches('\n')),
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

/// Drain a preloaded source through the input adapter in multi-byte
/// requests, echoing each batch to the screen.
fn echo_scripted(console: &mut Console<QueuedSource>, total: usize) {
    let mut chunk = [0u8; 64];
    let mut remaining = total;

    while remaining > 0 {
        let take = remaining.min(chunk.len());
        let got = console.read(Fd::STDIN, &mut chunk[..take]);
        console.write(Fd::STDOUT, &chunk[..got]);
        remaining -= got;
    }
}

/// Echo single keystrokes until the session ends. NUL marks end of
/// input from the source; Ctrl-D ends an interactive session.
fn echo_interactive(console: &mut Console<StdinSource>) {
    const CTRL_D: u8 = 0x04;
    let mut byte = [0u8; 1];

    loop {
        console.read(Fd::STDIN, &mut byte);
        if byte[0] == 0 || byte[0] == CTRL_D {
            break;
        }
        console.write(Fd::STDOUT, &byte);
    }
}

fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("Display State ({}x{}):\n", snapshot.cols, snapshot.rows));
    out.push_str(&format!(
        "Cursor: ({}, {})\n",
        snapshot.cursor_col, snapshot.cursor_row
    ));
    out.push_str("---\n");
    out.push_str(&snapshot.to_text());
    out.push_str("---\n");
    out
}

fn print_help() {
    println!("Conio Headless Runner");
    println!();
    println!("Usage: conio-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>    Read input from file");
    println!("  -o, --output <PATH>  Write the snapshot to a file instead of stdout");
    println!("  -j, --json           Output snapshot as JSON");
    println!("  -t, --text           Output snapshot as text (default)");
    println!("  -e, --echo           Route bytes through the input adapter first");
    println!("  -h, --help           Show this help message");
    println!();
    println!("The display is fixed at 80x60. If no input file is specified,");
    println!("reads from stdin.");
    println!();
    println!("Examples:");
    println!("  printf 'Hello\\nWorld\\n' | conio-headless");
    println!("  conio-headless --json input.txt > snapshot.json");
    println!("  conio-headless --echo            (interactive, Ctrl-D to finish)");
}
