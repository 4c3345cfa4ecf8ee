//! Background report generation.
//!
//! Produces the full deadline report for a dossier: compute the workflow,
//! assemble the legal and document context, run the narrative generator
//! under the retry policy, convert the narrative to the document model and
//! store the result. Designed to be spawned as a background task; progress
//! goes to the job tracker so clients can follow along.

use std::sync::Arc;

use crate::api::{DossierId, ReportId};
use crate::db::repository::DossierRepository;
use crate::legislation;
use crate::report::{parse_markdown, DeadlineReport, Document};
use crate::services::ingest::ExtractedText;
use crate::services::job_tracker::{JobTracker, LogLevel};
use crate::services::narrative::{
    generate_with_retry, NarrativeGenerator, NarrativeRequest, RetryPolicy, TemplateGenerator,
};

/// Generate and store a report for a dossier.
///
/// Returns the stored report id on success. Failures are recorded on the job
/// and returned as plain messages; nothing here panics the server.
#[allow(clippy::too_many_arguments)]
pub async fn generate_report_async(
    job_id: String,
    tracker: JobTracker,
    repo: Arc<dyn DossierRepository>,
    generator: Arc<dyn NarrativeGenerator>,
    dossier_id: DossierId,
    documents: Vec<ExtractedText>,
    retry_policy: RetryPolicy,
) -> Result<ReportId, String> {
    tracker.log(&job_id, LogLevel::Info, "A carregar o dossier...");
    let dossier = match repo.get_dossier(dossier_id).await {
        Ok(dossier) => dossier,
        Err(e) => {
            let msg = format!("Dossier inacessível: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    tracker.log(&job_id, LogLevel::Info, "A calcular o cronograma legal...");
    let workflow = match crate::engine::calculate_workflow(
        dossier.start_date,
        &dossier.suspensions,
        &dossier.config,
        dossier.pea_date,
    ) {
        Ok(workflow) => workflow,
        Err(e) => {
            let msg = format!("Cálculo de prazos falhou: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };
    tracker.log(
        &job_id,
        LogLevel::Success,
        format!(
            "✓ {} marcos calculados ({} dias suspensos)",
            workflow.milestones.len(),
            workflow.total_suspended_days
        ),
    );

    // Context assembly: schedule rendering, legal library, uploaded documents.
    let regime_label = dossier.regime.label();
    let mut context_blocks = vec![(
        "CRONOGRAMA".to_string(),
        TemplateGenerator::render(&workflow, regime_label),
    )];
    let references: Vec<_> = legislation::search(&dossier.sector)
        .into_iter()
        .chain(legislation::search("RJAIA"))
        .collect();
    if !references.is_empty() {
        context_blocks.push((
            "LEGISLAÇÃO APLICÁVEL".to_string(),
            legislation::context_block(&references),
        ));
    }
    for document in &documents {
        context_blocks.push((
            format!("DOCUMENTO: {}", document.filename),
            document.tagged(),
        ));
    }
    tracker.log(
        &job_id,
        LogLevel::Info,
        format!(
            "A gerar a narrativa ({} blocos de contexto)...",
            context_blocks.len()
        ),
    );

    let request = NarrativeRequest {
        system_role: "Analista de Licenciamento Ambiental Sénior".to_string(),
        context_blocks,
        instructions: "Elabora o relatório de prazos do procedimento, citando a legislação \
                       aplicável e o cronograma calculado."
            .to_string(),
    };
    let narrative_text =
        match generate_with_retry(generator.as_ref(), &request, retry_policy, &tracker, &job_id)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                let msg = format!("Geração da narrativa falhou: {}", e);
                tracker.fail_job(&job_id, &msg);
                return Err(msg);
            }
        };
    tracker.log(&job_id, LogLevel::Success, "✓ Narrativa gerada");

    let narrative = Document::new(
        format!("Relatório de Prazos: {}", dossier.name),
        parse_markdown(&narrative_text),
    );
    let report = DeadlineReport::assemble(
        dossier.name.clone(),
        dossier.typology.clone(),
        dossier.sector.clone(),
        regime_label,
        dossier.start_date,
        &workflow,
        &dossier.suspensions,
        narrative,
    );

    tracker.log(&job_id, LogLevel::Info, "A arquivar o relatório...");
    match repo.store_report(dossier_id, report).await {
        Ok(stored) => {
            tracker.log(
                &job_id,
                LogLevel::Success,
                format!("✓ Relatório arquivado (ID: {})", stored.id),
            );
            tracker.complete_job(
                &job_id,
                Some(serde_json::json!({
                    "report_id": stored.id.value(),
                    "dossier_id": dossier_id.value(),
                })),
            );
            Ok(stored.id)
        }
        Err(e) => {
            let msg = format!("Arquivo do relatório falhou: {}", e);
            tracker.fail_job(&job_id, &msg);
            Err(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::NewDossier;
    use crate::db::repositories::LocalRepository;
    use crate::models::Regime;
    use crate::services::job_tracker::{JobKind, JobStatus};
    use chrono::NaiveDate;

    fn new_dossier() -> NewDossier {
        NewDossier {
            name: "Linha de Muito Alta Tensão".to_string(),
            typology: "Anexo I".to_string(),
            sector: "Energia".to_string(),
            regime: Regime::Days150,
            config: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            suspensions: vec![],
            pea_date: None,
        }
    }

    #[tokio::test]
    async fn test_report_job_completes() {
        let repo = Arc::new(LocalRepository::new());
        let tracker = JobTracker::new();
        let job_id = tracker.create_job(JobKind::ReportGeneration);
        let dossier = repo.create_dossier(new_dossier()).await.unwrap();

        let report_id = generate_report_async(
            job_id.clone(),
            tracker.clone(),
            repo.clone(),
            Arc::new(TemplateGenerator),
            dossier.id,
            vec![],
            RetryPolicy::default(),
        )
        .await
        .unwrap();

        let job = tracker.get_job(&job_id).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.result.unwrap()["report_id"], report_id.value());

        let stored = repo.get_report(report_id).await.unwrap();
        assert_eq!(stored.report.milestones.len(), 5);
        assert!(!stored.report.narrative.nodes.is_empty());
    }

    #[tokio::test]
    async fn test_report_job_fails_for_missing_dossier() {
        let repo = Arc::new(LocalRepository::new());
        let tracker = JobTracker::new();
        let job_id = tracker.create_job(JobKind::ReportGeneration);

        let result = generate_report_async(
            job_id.clone(),
            tracker.clone(),
            repo,
            Arc::new(TemplateGenerator),
            crate::api::DossierId::new(404),
            vec![],
            RetryPolicy::default(),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(tracker.get_job(&job_id).unwrap().status, JobStatus::Failed);
    }
}
