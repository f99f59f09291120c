use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use thermoqc::cli::{Cli, Commands};
use thermoqc::ctx::Ctx;
use thermoqc::io;
use thermoqc::pipeline::stage0_scaffold::Stage0Scaffold;
use thermoqc::pipeline::stage1_input::Stage1Input;
use thermoqc::pipeline::stage2_sanitize::Stage2Sanitize;
use thermoqc::pipeline::stage3_output::Stage3Output;
use thermoqc::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(args.input, args.out, args.json, env!("CARGO_PKG_VERSION"));
            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage2Sanitize::new()),
                Box::new(Stage3Output::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Check(args) => {
            let mut ctx = Ctx::new(
                args.input,
                PathBuf::from("."),
                false,
                env!("CARGO_PKG_VERSION"),
            );
            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Input::new()),
                Box::new(Stage2Sanitize::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print_check_summary(&ctx)?;
        }
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if let Some(result) = &ctx.result {
        for message in &result.messages {
            println!("- {}", message);
        }
    }
    Ok(())
}

fn print_check_summary(ctx: &Ctx) -> Result<()> {
    let result = ctx
        .result
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("sanitization result missing"))?;
    for message in &result.messages {
        println!("- {}", message);
    }
    // "Error:"-prefixed diagnostics block submission; warnings do not.
    let blocking = result
        .messages
        .iter()
        .filter(|m| m.starts_with("Error:"))
        .count();
    if blocking > 0 {
        anyhow::bail!("{} blocking diagnostic(s) found", blocking);
    }
    println!("thermoqc check ok");
    Ok(())
}
