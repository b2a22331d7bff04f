//! treegrid command-line entry point
//!
//! Loads a grid, applies the requested operations through the update loop
//! and prints the result.

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::Read;

use cli::{CliArgs, PasteSource, RunPlan};
use treegrid::config::GridConfig;
use treegrid::host::{Clipboard, MemoryClipboard, SystemClipboard};
use treegrid::import::config_from_csv;
use treegrid::model::AppModel;
use treegrid::runtime::GridRuntime;
use treegrid::view;

fn main() -> Result<()> {
    let plan = CliArgs::parse().into_plan().map_err(|e| anyhow!(e))?;

    treegrid::tracing::init();

    let config = load_config(&plan)?;
    let model = AppModel::new(config).context("Failed to build grid from config")?;

    if plan.system_clipboard {
        let clipboard = SystemClipboard::new().context("System clipboard unavailable")?;
        run(&plan, GridRuntime::new(model, clipboard))
    } else {
        run(&plan, GridRuntime::new(model, MemoryClipboard::default()))
    }
}

fn load_config(plan: &RunPlan) -> Result<GridConfig> {
    let config = match &plan.config {
        Some(path) => GridConfig::load_from(path).map_err(|e| anyhow!(e))?,
        None => GridConfig::load(),
    };

    let Some(path) = &plan.import else {
        return Ok(config);
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    config_from_csv(file, &config).with_context(|| format!("Failed to import {}", path.display()))
}

fn read_paste_input(source: &PasteSource) -> Result<Option<String>> {
    match source {
        PasteSource::Clipboard => Ok(None),
        PasteSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read paste text from stdin")?;
            Ok(Some(text))
        }
        PasteSource::File(path) => std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn run<C: Clipboard>(plan: &RunPlan, mut runtime: GridRuntime<C>) -> Result<()> {
    let paste_text = match &plan.paste {
        Some(paste) => read_paste_input(&paste.source)?,
        None => None,
    };

    let copied = cli::execute(&mut runtime, plan, paste_text).map_err(|e| anyhow!(e))?;

    if let Some(path) = &plan.save {
        runtime
            .model
            .config
            .with_rows_from(&runtime.model.grid)
            .save_to(path)
            .map_err(|e| anyhow!(e))?;
    }

    if let Some(text) = copied {
        println!("{}", text);
        return Ok(());
    }

    if plan.json {
        let dump = serde_json::to_string_pretty(&view::dump(&runtime.model))
            .context("Failed to serialize grid")?;
        println!("{}", dump);
    } else {
        print!("{}", view::render_table(&runtime.model));
    }
    Ok(())
}
