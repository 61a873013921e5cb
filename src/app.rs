use std::io::{self, Write};

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain,
    infra::{self, snapshot_file::FileSnapshotSource},
    ui::{
        self,
        directive_table::directive_rows,
        timeline_text::{build_timeline_elements, render_lines},
    },
    usecases::{
        self, bootstrap,
        context::AppContext,
        render_timeline::{render_timeline, RenderTimelineQuery},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&context, &cli.command, &mut out)
}

fn execute(context: &AppContext, command: &Command, out: &mut dyn Write) -> Result<()> {
    let args = command.snapshot_args();
    let source = FileSnapshotSource::new(&args.snapshot);

    let output = render_timeline(
        context,
        &source,
        RenderTimelineQuery { limit: args.limit },
    )?;

    tracing::info!(
        snapshot = %args.snapshot.display(),
        messages = output.directives.len(),
        "snapshot projected"
    );

    let lines = match command {
        Command::Render(_) => render_lines(&build_timeline_elements(
            &output.view,
            &output.directives,
            context.projector.day_offset(),
        )),
        Command::Directives(_) => directive_rows(&output.directives),
    };

    for line in lines {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
