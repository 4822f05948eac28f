//! Espalier CLI - behaviour tree editor.
//!
//! Single binary that provides:
//! - `espalier show` - decode the built-in demo description and print it
//! - `espalier edit` - interactive editing session

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use espalier_core::{decode, NodeId, NodeKind, Tree};
use espalier_edit::{demo, EditError, EditOutcome, EditorConfig, TreeEditor};

#[derive(Parser)]
#[command(name = "espalier")]
#[command(about = "Behaviour tree editor", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in demo tree
    Show {
        /// Dump the flat description as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive editing session
    Edit {
        /// Reject node kinds outside the canonical set
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Some(Commands::Show { json }) => show(json),
        Some(Commands::Edit { strict }) => edit(strict),
        None => {
            println!("Espalier - behaviour tree editor");
            println!();
            println!("Usage: espalier <COMMAND>");
            println!();
            println!("Commands:");
            println!("  show    Print the built-in demo tree");
            println!("  edit    Start an interactive editing session");
            println!();
            println!("Run 'espalier --help' for more information.");
            Ok(())
        }
    }
}

fn show(json: bool) -> Result<()> {
    let spec = demo::pick_and_place();
    tracing::debug!(entries = spec.len(), "showing demo description");

    if json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    let tree = decode(&spec)?;
    print_tree(&tree);
    Ok(())
}

fn edit(strict: bool) -> Result<()> {
    let mut editor = TreeEditor::new().with_config(EditorConfig {
        strict_kinds: strict,
    });
    // The session, not the editor, owns the selection. Edits that remove the
    // selected node leave a handle that simply stops resolving.
    let mut selected: Option<NodeId> = None;

    tracing::debug!(strict, "editing session started");
    println!("espalier editing session. `help` lists commands, `quit` leaves.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "help" => print_help(),
            "load" => {
                selected = None;
                report("load", editor.load(&demo::pick_and_place()));
            }
            "new" => {
                selected = None;
                println!("new: {}", editor.new_tree());
            }
            "select" => match parts.next() {
                Some(name) => match find_named(editor.tree(), name) {
                    Some(id) => {
                        selected = Some(id);
                        if let Some(record) = editor.tree().get(id) {
                            println!("select: {record}");
                        }
                    }
                    None => println!("select: no node named {name}"),
                },
                None => println!("select: usage: select <name>"),
            },
            "add" => {
                let kind = parts.next().unwrap_or("");
                let name = parts.next().unwrap_or("");
                let behavior = parts.next().unwrap_or("");
                report("add", editor.add_child(selected, kind, name, behavior));
            }
            "delete" => {
                let result = editor.delete_node(selected);
                if result.is_ok() {
                    selected = None;
                }
                report("delete", result);
            }
            "clear" => {
                selected = None;
                println!("clear: {}", editor.clear());
            }
            "print" => print_tree(editor.tree()),
            "kinds" => {
                for kind in &NodeKind::CANONICAL {
                    if *kind != NodeKind::Root {
                        println!("{kind}");
                    }
                }
            }
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try `help`)"),
        }
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  load                         load the built-in demo tree");
    println!("  new                          start a fresh tree with a default root");
    println!("  select <name>                select the first node with this name");
    println!("  add <kind> <name> [behavior] add a child under the selection");
    println!("  delete                       delete the selection and its subtree");
    println!("  clear                        drop the whole tree");
    println!("  print                        render the current tree");
    println!("  kinds                        list node kinds for `add`");
    println!("  quit                         leave the session");
}

fn report(op: &str, result: Result<EditOutcome, EditError>) {
    match result {
        Ok(outcome) => println!("{op}: {outcome}"),
        Err(err) => println!("{op}: {err}"),
    }
}

fn find_named(tree: &Tree, name: &str) -> Option<NodeId> {
    tree.iter()
        .find(|(_, record)| record.name == name)
        .map(|(id, _)| id)
}

fn print_tree(tree: &Tree) {
    match tree.root() {
        Some(root) => println!("{}", render(tree, root)),
        None => println!("(empty tree)"),
    }
}

fn render(tree: &Tree, id: NodeId) -> termtree::Tree<String> {
    let label = match tree.get(id) {
        Some(record) => match &record.behavior {
            Some(behavior) => format!("{record} [{behavior}]"),
            None => record.to_string(),
        },
        None => "?".to_string(),
    };
    let leaves: Vec<_> = tree
        .children(id)
        .iter()
        .map(|&child| render(tree, child))
        .collect();
    termtree::Tree::new(label).with_leaves(leaves)
}
