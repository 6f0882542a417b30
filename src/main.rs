//! TokponlaEngagé demo
//!
//! Replays a scripted project-creation session against the in-memory
//! preview backend and logs every step, then prints the catalog and an
//! assistant exchange.

use anyhow::{bail, Context};
use tokponla::catalog;
use tokponla::{
    Candidate, Category, Config, Field, LogSink, MemoryPreviews, ProjectForm, Slot, SubmitError, Transcript, MEGABYTE,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_logging(&config);

    tracing::info!("TokponlaEngagé demo v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        image_max = config.uploads.image_max_bytes,
        attachment_max = config.uploads.attachment_max_bytes,
        "upload limits"
    );

    demo_form(&config)?;
    demo_catalog();
    demo_assistant(&config);

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tokponla={}", config.logging.level)),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn demo_form(config: &Config) -> anyhow::Result<()> {
    let mut form = ProjectForm::new(MemoryPreviews::new(), config);

    // Uploads: one wrong type, one too large, one cover replacement
    form.drop_files(
        Slot::Cover,
        vec![Candidate::detached("budget.pdf", MEGABYTE, "application/pdf")],
    );
    form.browse(Slot::Cover, vec![Candidate::detached("parc.jpg", 800 * 1024, "image/jpeg")]);
    form.browse(Slot::Cover, vec![Candidate::detached("parc-2.jpg", 900 * 1024, "image/jpeg")]);

    let gallery = form.drop_files(
        Slot::Gallery,
        vec![
            Candidate::detached("jeux.jpg", 2 * MEGABYTE, "image/jpeg"),
            Candidate::detached("bancs.png", MEGABYTE, "image/png"),
            Candidate::detached("panorama.jpg", 8 * MEGABYTE, "image/jpeg"),
        ],
    );
    if let Some(&first) = gallery.accepted.first() {
        form.remove(Slot::Gallery, first);
    }

    form.browse(
        Slot::Attachments,
        vec![
            Candidate::detached("Plan_de_renovation.pdf", 2 * MEGABYTE, "application/pdf"),
            Candidate::detached("Budget_detaille.xlsx", MEGABYTE, "application/vnd.ms-excel"),
        ],
    );

    // First attempt with only a title
    form.set_field(Field::Title, "Rénovation du parc municipal");
    match form.submit(&mut LogSink) {
        Err(SubmitError::Invalid(report)) => {
            for error in report.errors() {
                tracing::info!(field = ?error.field(), "{}", error);
            }
        }
        Err(e) => return Err(e).context("unexpected submit failure"),
        Ok(_) => bail!("an incomplete draft was accepted"),
    }

    form.set_field(
        Field::Description,
        "Revitaliser le parc du quartier Nord: jeux, bancs ombragés et plantations locales.",
    );
    form.set_field(Field::Location, "Cotonou, Bénin");
    form.set_category(Some(Category::Environment));
    form.set_field(Field::GoalAmount, "5000000");
    form.set_field(Field::Duration, "60");

    let outcome = form.submit(&mut LogSink).context("submitting the completed draft")?;
    let stats = form.preview_stats();
    tracing::info!(
        released = outcome.released,
        acquired = stats.acquired,
        live = stats.live(),
        "form session finished"
    );

    for toast in form.take_notifications() {
        tracing::info!(level = ?toast.level, description = ?toast.description, "toast: {}", toast.title);
    }
    Ok(())
}

fn demo_catalog() {
    for project in catalog::search("") {
        tracing::info!(
            id = project.id,
            raised = %catalog::format_amount(project.raised_amount),
            progress = project.progress(),
            "{}",
            project.title
        );
    }
    if let Some(detail) = catalog::detail(1) {
        for update in detail.updates {
            tracing::info!(date = %catalog::display_date(update.date), "{}", update.title);
        }
    }
}

fn demo_assistant(config: &Config) {
    let mut transcript = Transcript::new(&config.assistant);
    transcript.send("Comment puis-je contribuer à un projet ?");
    transcript.deliver_reply();
    for message in transcript.messages() {
        tracing::info!(sender = ?message.sender, "{}", message.text);
    }
}
