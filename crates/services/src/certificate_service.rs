use std::sync::Arc;

use academy_core::model::{Certificate, CertificateNumber, LearnerId};
use storage::repository::CertificateRepository;

use crate::error::CertificateServiceError;

#[derive(Clone)]
pub struct CertificateService {
    certificates: Arc<dyn CertificateRepository>,
}

impl CertificateService {
    #[must_use]
    pub fn new(certificates: Arc<dyn CertificateRepository>) -> Self {
        Self { certificates }
    }

    /// Certificates earned by the learner, newest first.
    ///
    /// # Errors
    ///
    /// Returns `CertificateServiceError::Storage` if repository access fails.
    pub async fn list(
        &self,
        learner_id: LearnerId,
    ) -> Result<Vec<Certificate>, CertificateServiceError> {
        let certificates = self.certificates.list_certificates(learner_id).await?;
        Ok(certificates)
    }

    /// Look up one of the learner's certificates by its number.
    ///
    /// # Errors
    ///
    /// Returns `CertificateServiceError::Storage` if repository access fails.
    pub async fn find_by_number(
        &self,
        learner_id: LearnerId,
        number: &CertificateNumber,
    ) -> Result<Option<Certificate>, CertificateServiceError> {
        let found = self
            .certificates
            .list_certificates(learner_id)
            .await?
            .into_iter()
            .find(|c| &c.number == number);
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::PassThreshold;
    use academy_core::time::fixed_now;
    use storage::seed::{FINANCE_COURSE, SECURITY_COURSE, demo_storage, seed_sample_history};

    #[tokio::test]
    async fn lists_newest_first_and_finds_by_number() {
        let storage = demo_storage(PassThreshold::default()).await.unwrap();
        let learner = LearnerId::random();
        seed_sample_history(&storage, learner, "CERT", PassThreshold::default(), fixed_now())
            .await
            .unwrap();
        let service = CertificateService::new(Arc::clone(&storage.certificates));

        let certificates = service.list(learner).await.unwrap();
        let courses: Vec<_> = certificates.iter().map(|c| c.course_id).collect();
        assert_eq!(courses, vec![SECURITY_COURSE, FINANCE_COURSE]);

        let number = certificates[1].number.clone();
        let found = service.find_by_number(learner, &number).await.unwrap();
        assert_eq!(found.map(|c| c.course_id), Some(FINANCE_COURSE));

        let other = service
            .find_by_number(LearnerId::random(), &number)
            .await
            .unwrap();
        assert!(other.is_none());
    }
}
