//! Interactive console chat loop.

use std::io::{self, BufRead, Write};

use marvin_ai::{OllamaClient, Session};

/// Run the chat loop until quit or EOF.
pub(crate) async fn run(client: &OllamaClient, mut session: Session) -> io::Result<()> {
    println!("Marvin v{}", env!("CARGO_PKG_VERSION"));
    println!("Using model: {}", client.config().model);
    println!("Type 'quit' or 'exit' to stop, 'clear' to reset history.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("You: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "clear" => {
                session.reset();
                println!("History cleared.\n");
                continue;
            }
            _ => {}
        }

        match session.chat(client, input).await {
            Ok(response) => {
                println!("\nAgent:\n{response}\n");
            }
            Err(e) => {
                eprintln!("Error: {e}\n");
            }
        }
    }

    println!("\nGoodbye!");
    Ok(())
}
