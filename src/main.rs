// native front end: interactive prompt, plus the listing endpoint as a subcommand

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use ai2b_terminal::command::{submit_line, CommandRegistry, SpecialAction};
    use ai2b_terminal::config::{TerminalConfig, DEFAULT_BANNER, DEFAULT_USER};
    use ai2b_terminal::context::TerminalContext;
    use ai2b_terminal::listing::{list_directory, listing_response, render_tree};
    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(author, version, about = "ai2b simulated terminal")]
    struct Args {
        /// Name reported by `whoami`
        #[arg(long, default_value = DEFAULT_USER)]
        user: String,

        /// Banner shown when the session starts (empty for none)
        #[arg(long, default_value = DEFAULT_BANNER)]
        banner: String,

        #[command(subcommand)]
        command: Option<Cmd>,
    }

    #[derive(Subcommand, Debug)]
    enum Cmd {
        /// Print the file browser listing for a public folder as JSON
        List {
            /// Folder to walk
            #[arg(default_value = "public")]
            dir: PathBuf,

            /// Print an indented tree with preview kinds and sizes instead of JSON
            #[arg(long)]
            tree: bool,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        match args.command {
            Some(Cmd::List { dir, tree }) => list(dir, tree),
            None => repl(TerminalConfig {
                banner: args.banner,
                user: args.user,
            }),
        }
    }

    fn list(dir: PathBuf, tree: bool) -> Result<()> {
        let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
        if tree {
            let items = rt
                .block_on(list_directory(&dir))
                .with_context(|| format!("listing {} failed", dir.display()))?;
            print!("{}", render_tree(&items));
            return Ok(());
        }
        let response = rt.block_on(listing_response(&dir));
        println!("{}", serde_json::to_string_pretty(&response.body)?);
        if !response.is_success() {
            anyhow::bail!("listing {} failed with status {}", dir.display(), response.status);
        }
        Ok(())
    }

    fn repl(config: TerminalConfig) -> Result<()> {
        let mut ctx = TerminalContext::with_config(config);
        let registry = CommandRegistry::default_commands();
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for entry in &ctx.scrollback {
            println!("{}", entry.text);
        }

        loop {
            print!("{}$ ", ctx.cwd);
            stdout.flush()?;
            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                break;
            }

            let seen = ctx.scrollback.len();
            let Some(outcome) = submit_line(&input, &mut ctx, &registry) else {
                continue;
            };
            match outcome.action {
                Some(SpecialAction::ClearScreen) => {
                    print!("\x1B[2J\x1B[H");
                    continue;
                }
                Some(SpecialAction::Close) => {
                    println!("{}", outcome.output);
                    break;
                }
                None => {}
            }
            // the echo line is what the user just typed; print only output
            for entry in ctx.scrollback.iter().skip(seen).filter(|e| !e.is_command) {
                println!("{}", entry.text);
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
