use std::io;

use colored::Colorize;

use evx_core::suite;

use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(short, long)]
    pub json: bool,
}

pub fn exec(args: &Args, _global_args: &GlobalArgs) -> SubcmdResult {
    let cases = suite::builtin();

    if args.json {
        let rows: Vec<_> = cases
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "description": c.description,
                    "postId": c.input.post_id,
                    "expectations": c.expected.len(),
                })
            })
            .collect();
        serde_json::to_writer_pretty(io::stdout(), &rows)?;
        println!();
        return Ok(());
    }

    for c in cases {
        println!(
            "{}  {} ({} expectations)",
            c.id.bright_yellow().bold(),
            c.description,
            c.expected.len(),
        );
    }
    Ok(())
}
