//! Command handlers.

use super::commands::Commands;
use postcraft::{Postcraft, PostcraftResult, StageReport, render};
use tracing::instrument;

fn print_report<T>(report: &StageReport<T>, body: impl FnOnce(&T) -> String) {
    eprint!("{}", render::notices(report.notices()));
    print!("{}", body(report.value()));
}

/// Run one command against the selected session.
#[instrument(skip(app, session))]
pub async fn handle_command(
    app: &Postcraft,
    session: Option<&str>,
    command: Commands,
) -> PostcraftResult<()> {
    let workflow = app.workflow();

    match command {
        Commands::Topics => {
            print!("{}", render::topics(workflow.catalog()));
        }

        Commands::SelectTopic { title } => {
            let handle = app.session(session)?;
            let topic = workflow.select_topic(&handle, &title).await?;
            println!("Selected topic: {}", topic.title);
        }

        Commands::Ideas => {
            let handle = app.session(session)?;
            let report = workflow.generate_ideas(&handle).await?;
            print_report(&report, |ideas| render::ideas(ideas));
        }

        Commands::SelectIdea { index } => {
            let handle = app.session(session)?;
            let idea = workflow.select_idea(&handle, index).await?;
            println!("Selected idea: {}", idea.title);
        }

        Commands::Content => {
            let handle = app.session(session)?;
            let report = workflow.generate_content(&handle).await?;
            print_report(&report, render::content);
        }

        Commands::Translate => {
            let handle = app.session(session)?;
            let report = workflow.translate_content(&handle).await?;
            print_report(&report, render::translation);
        }

        Commands::Show => {
            let handle = app.session(session)?;
            let state = workflow.show(&handle).await?;
            print!("{}", render::state(handle.token(), &state));
        }

        Commands::Reset => {
            let handle = app.session(session)?;
            workflow.reset(&handle).await?;
            println!("Cleared generated content and translation.");
        }

        Commands::NewSession => {
            let handle = app.new_session()?;
            println!("{}", handle.token());
        }
    }

    Ok(())
}
