use crate::infra::{load_answers, parse_option, parse_section};
use career_compass::assessment::{
    AnswerSet, AssessmentEngine, AssessmentProgress, AssessmentSession, CareerReport,
    InMemoryStore, JsonFileStore, KeyValueStore, OptionKey, QuestionCatalog, Section, StorageKey,
};
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Limit output to one section (mbti, riasec, strengths, scenario)
    #[arg(long, value_parser = parse_section)]
    pub(crate) section: Option<Section>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON file mapping question ids to option letters, e.g. {"1": "A"}
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Score even when some questions are unanswered
    #[arg(long)]
    pub(crate) allow_partial: bool,
    /// Print the full report as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Persist answers and report into this data directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Option letter chosen for every question (A-E)
    #[arg(long, value_parser = parse_option, default_value = "A")]
    pub(crate) option: OptionKey,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    let sections = match args.section {
        Some(section) => vec![section],
        None => Section::ordered().to_vec(),
    };

    for section in sections {
        println!(
            "\nSection {}/{}: {}",
            section.number(),
            Section::ordered().len(),
            section.label()
        );
        for question in catalog.section(section) {
            println!(
                "{:>2}. {} [{}]",
                question.id, question.text, question.category
            );
            for option in question.options {
                println!("      {}) {}", option.key, option.label);
            }
        }
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        answers,
        allow_partial,
        json,
        data_dir,
    } = args;

    let config = AppConfig::load()?;
    let answers = load_answers(&answers)?;
    if !allow_partial {
        answers.ensure_complete()?;
    }

    let engine = AssessmentEngine::new(config.scoring);
    let report = engine.report(&answers);

    if let Some(dir) = data_dir {
        let store = JsonFileStore::new(dir);
        store.save(StorageKey::AssessmentAnswers, &answers)?;
        store.save(StorageKey::AssessmentResult, &report)?;
        store.save(StorageKey::MbtiResult, &report.mbti)?;
        eprintln!("report saved under {}", store.root().display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report_lines(&report, &answers.progress()) {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryStore::default());
    let session = AssessmentSession::new(store, AssessmentEngine::standard());

    println!("Career assessment demo (every answer = {})", args.option);
    for (question_id, option) in AnswerSet::uniform(args.option).iter() {
        let progress = session.record(question_id, option)?;
        if progress.complete || progress.answered % 10 == 0 {
            println!(
                "- {}/{} answered ({}%)",
                progress.answered, progress.total, progress.percent_complete
            );
        }
    }

    let report = session.submit()?;
    let progress = session.progress()?;
    for line in report_lines(&report, &progress) {
        println!("{line}");
    }

    session.retake()?;
    println!("\nSession reset; stored answers cleared.");
    Ok(())
}

pub(crate) fn report_lines(report: &CareerReport, progress: &AssessmentProgress) -> Vec<String> {
    let summary = report.summary();
    let mut lines = Vec::new();

    if !progress.complete {
        lines.push(format!(
            "Partial assessment: {}/{} questions answered ({}%)",
            progress.answered, progress.total, progress.percent_complete
        ));
    }

    lines.push(format!("\nPersonality type: {}", summary.mbti_type));
    if !summary.mbti_title.is_empty() {
        lines.push(format!("  {}", summary.mbti_title));
    }
    lines.push(format!("  {}", summary.mbti_tagline));
    for preference in &summary.preference_strengths {
        lines.push(format!(
            "  - {}: {} ({}%)",
            preference.dichotomy, preference.preferred_name, preference.percent
        ));
    }

    lines.push(format!(
        "\nCareer interests: {} ({})",
        summary.riasec_code, summary.riasec_names
    ));
    lines.push(format!("Top strengths: {}", summary.top_strengths));
    let workplace = summary.workplace_traits.join(", ");
    lines.push(format!("Workplace style: {workplace}"));
    for phrase in &report.scenario.workplace_recommendations {
        lines.push(format!("  - {phrase}"));
    }

    lines.push("\nRecommended careers:".to_string());
    for (rank, career) in summary.final_recommendations.iter().enumerate() {
        lines.push(format!("  {}. {}", rank + 1, career));
    }
    lines.push(format!("\nGenerated at {}", summary.generated_at));

    lines
}
