//! Command-line client for the todo server.

mod transport;

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use todo_core::{CreateTodo, HttpRequest, HttpResponse, TodoClient};
use tracing_subscriber::{fmt, EnvFilter};

use transport::{agent, execute, CliError};

/// Todo CLI
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Manage todo tasks on a todo server")]
struct Args {
    /// Server base URL
    #[arg(short, long, env = "TODO_SERVER_URL", default_value = "http://localhost:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Get sample todo tasks
    Samples,

    /// Get all todo tasks
    All,

    /// Add new todo task
    Add {
        /// Title of the task
        title: String,

        /// Free-form note
        note: Option<String>,

        /// Due date, RFC 3339 (e.g. 2000-01-01T00:00:00+09:00)
        due_date: Option<String>,
    },

    /// Remove a todo task
    Delete {
        /// Id of the task to remove
        id: i32,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let agent = agent();
    let send = |req| execute(&agent, req);
    let client = TodoClient::new(&args.server);
    if let Err(e) = run(&client, args.command, send, &mut io::stdout().lock()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Send one request and print what came back. The status is not judged:
/// error bodies are printed like any other answer.
fn run<F, W>(
    client: &TodoClient,
    command: Commands,
    mut send: F,
    out: &mut W,
) -> Result<(), CliError>
where
    F: FnMut(HttpRequest) -> Result<HttpResponse, CliError>,
    W: Write,
{
    let req = match command {
        Commands::Samples => client.build_list_samples(),
        Commands::All => client.build_list_todos(),
        Commands::Add {
            title,
            note,
            due_date,
        } => {
            let req = client.build_create_todo(&new_todo(title, note, due_date))?;
            if let Some(body) = &req.body {
                writeln!(out, "{body}")?;
            }
            req
        }
        Commands::Delete { id } => client.build_delete_todo(id)?,
    };
    let response = send(req)?;
    print_body(&response, out)?;
    Ok(())
}

/// Empty strings count as "not given", so `todo add title "" 2000-...` works.
fn new_todo(title: String, note: Option<String>, due_date: Option<String>) -> CreateTodo {
    CreateTodo {
        title,
        note: note.filter(|n| !n.is_empty()),
        due_date: due_date.filter(|d| !d.is_empty()),
    }
}

fn print_body(response: &HttpResponse, out: &mut impl Write) -> io::Result<()> {
    let body = response.body.trim_end();
    if body.is_empty() {
        writeln!(out, "The response is empty.")
    } else {
        writeln!(out, "{body}")
    }
}
