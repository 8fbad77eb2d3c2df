use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::{
    model::job::{CreateJobDto, JobDto},
    server::{
        data::{job::JobRepository, payload::PayloadRepository},
        error::AppError,
        model::{
            job::{CreateJobParams, CreatePayloadParams, Job},
            operator::Operator,
            payload::Payload,
        },
        util::clock::Clock,
    },
};

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> JobService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Creates a job with its payloads waiting at the origin airport.
    ///
    /// # Returns
    /// - `Ok(JobDto)` - The created job and payloads
    /// - `Err(AppError::BadRequest)` - Not exactly one operator, no payloads, or the job would
    ///   already be expired
    /// - `Err(AppError)` - Database error, including unknown airports
    pub async fn create(&self, dto: CreateJobDto) -> Result<JobDto, AppError> {
        let now = self.clock.now();

        let operator = Operator::from_columns(dto.operator_id, dto.operator_airline_icao)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if dto.payloads.is_empty() {
            return Err(AppError::BadRequest(
                "A job needs at least one payload".to_string(),
            ));
        }
        if dto.expires_at <= now {
            return Err(AppError::BadRequest(
                "Job expiry must be in the future".to_string(),
            ));
        }

        let params = CreateJobParams {
            operator,
            origin_icao: dto.origin_icao,
            job_type: dto.job_type,
            value: dto.value,
            expires_at: dto.expires_at,
            payloads: dto
                .payloads
                .into_iter()
                .map(|p| CreatePayloadParams {
                    destination_icao: p.destination_icao,
                    description: p.description,
                    weight: p.weight,
                })
                .collect(),
        };

        let txn = self.db.begin().await?;

        let job = JobRepository::new(&txn).create(&params, now).await?;

        let payload_repo = PayloadRepository::new(&txn);
        let mut payloads = Vec::with_capacity(params.payloads.len());
        for payload in params.payloads {
            let created = payload_repo
                .create_at_airport(&params.origin_icao, Some(job.id), payload)
                .await?;
            payloads.push(Payload::from_entity(created)?);
        }

        txn.commit().await?;

        Ok(Job::from_entity(job, payloads)?.into_dto())
    }

    /// Gets jobs offered at an airport that have not expired yet.
    pub async fn get_available_at_airport(&self, icao: &str) -> Result<Vec<JobDto>, AppError> {
        let jobs = JobRepository::new(self.db)
            .get_unexpired_at_airport(icao, self.clock.now())
            .await?;

        let job_ids: Vec<i32> = jobs.iter().map(|job| job.id).collect();
        let mut payloads_by_job: HashMap<i32, Vec<Payload>> = HashMap::new();
        for entity in PayloadRepository::new(self.db).get_by_jobs(&job_ids).await? {
            if let Some(job_id) = entity.job_id {
                payloads_by_job
                    .entry(job_id)
                    .or_default()
                    .push(Payload::from_entity(entity)?);
            }
        }

        jobs.into_iter()
            .map(|job| {
                let payloads = payloads_by_job.remove(&job.id).unwrap_or_default();
                Ok(Job::from_entity(job, payloads)?.into_dto())
            })
            .collect()
    }
}
