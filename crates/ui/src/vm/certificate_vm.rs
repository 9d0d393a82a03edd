use academy_core::model::Certificate;

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateCardVm {
    pub id: u64,
    pub course_title: String,
    pub number: String,
    pub issued: String,
    pub score_label: String,
    pub instructor: Option<String>,
}

impl From<&Certificate> for CertificateCardVm {
    fn from(certificate: &Certificate) -> Self {
        Self {
            id: certificate.id.value(),
            course_title: certificate.course_title.clone(),
            number: certificate.number.to_string(),
            issued: format_date(certificate.issued_at),
            score_label: format!("{}%", certificate.score),
            instructor: (!certificate.instructor.is_empty())
                .then(|| certificate.instructor.clone()),
        }
    }
}

#[must_use]
pub fn map_certificate_cards(certificates: &[Certificate]) -> Vec<CertificateCardVm> {
    certificates.iter().map(CertificateCardVm::from).collect()
}
