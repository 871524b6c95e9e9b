use clap::Parser;
use flujo::prelude::*;
use std::fs;
use std::io::{self, Write};

/// A flow-graph simulation engine CLI for branching chatbot scripts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow JSON file
    flow_path: String,

    /// Run the flow interactively from stdin instead of the automatic walk
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    /// Print the re-serialized flow after loading (round-trip check)
    #[arg(long)]
    echo: bool,
}

fn main() {
    let cli = Cli::parse();

    let payload = fs::read_to_string(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read flow file '{}': {}",
            &cli.flow_path, e
        ))
    });
    let graph = deserialize(&payload)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to import flow: {}", e)));

    print_summary(&graph);

    if cli.echo {
        let echoed = serialize_pretty(&graph)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize flow: {}", e)));
        println!("\n{}", echoed);
    }

    if cli.human {
        run_interactive(&graph);
    } else {
        run_walk(&graph);
    }
}

fn print_summary(graph: &FlowGraph) {
    println!("Loaded flow with {} blocks:", graph.len());
    for block in graph.blocks() {
        let wired = match &block.kind {
            BlockKind::Conditional { options, .. } => {
                format!("{} options", options.len())
            }
            _ => match block.next_id {
                Some(next) => format!("-> {}", next),
                None => "-> (end)".to_string(),
            },
        };
        println!(
            "  [{}] {} #{} {}",
            short_alias(block.id),
            block.kind,
            block.id,
            wired
        );
    }
}

/// Plays the whole flow without input, taking the first branch everywhere.
fn run_walk(graph: &FlowGraph) {
    println!("\nAutomatic walk (first option at every conditional):");
    let report = walk(graph);
    for step in &report.steps {
        println!("  -> #{}: {}", step.id, step.content);
    }
    match report.end {
        WalkEnd::Terminated => println!("Walk ended normally after {} blocks.", report.steps.len()),
        WalkEnd::Stalled { missing } => {
            println!("Walk stalled: block {} is referenced but does not exist.", missing)
        }
    }
}

/// Drives an interactive simulation from stdin.
fn run_interactive(graph: &FlowGraph) {
    println!("\n--- Flujo Interactive Mode ---");
    let mut sim = Simulation::new();
    sim.start(graph);
    let mut printed = 0;
    printed = flush_transcript(&sim, printed);

    loop {
        let state = sim.state();
        match state {
            SimState::Idle => {
                println!("The flow is empty; nothing to simulate.");
                return;
            }
            SimState::Terminated => {
                println!("\nConversation finished.");
                return;
            }
            SimState::Stalled { missing } => {
                println!(
                    "\nConversation stalled: no block with id {} exists.",
                    missing
                );
                return;
            }
            SimState::AtBlock(id) => {
                let Some(block) = graph.find(id) else {
                    return;
                };
                let result = match &block.kind {
                    BlockKind::Conditional { options, .. } => {
                        println!("\n{}", render(&block.content, sim.variables()));
                        for (i, option) in options.iter().enumerate() {
                            println!("  {}: {}", i + 1, option.label);
                        }
                        let line = prompt_for_input("Pick an option (number or label)");
                        let choice = line
                            .parse::<usize>()
                            .ok()
                            .and_then(|n| options.get(n.wrapping_sub(1)));
                        match choice {
                            Some(c) => sim.step(graph, StepInput::Choice(c)),
                            None => sim.step(graph, StepInput::Text(&line)),
                        }
                    }
                    _ => {
                        println!("\n{}", render(&block.content, sim.variables()));
                        let line = prompt_for_input("Your answer");
                        sim.step(graph, StepInput::Text(&line))
                    }
                };
                match result {
                    // Skip the prompt/answer pair already shown on screen,
                    // then print the message blocks the step played through.
                    Ok(()) => printed = flush_transcript(&sim, printed + 2),
                    Err(e) => println!("  ({})", e),
                }
            }
        }
    }
}

/// Prints transcript entries added since the last call.
fn flush_transcript(sim: &Simulation, printed: usize) -> usize {
    for entry in &sim.transcript()[printed.min(sim.transcript().len())..] {
        let speaker = match entry.role {
            Role::Bot => "bot ",
            Role::User => "user",
        };
        println!("  {} | {}", speaker, entry.text);
    }
    sim.transcript().len()
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    let _ = io::stdout().flush();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
