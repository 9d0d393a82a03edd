mod auth_vm;
mod certificate_vm;
mod course_vm;
mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use auth_vm::{AuthMode, auth_error_message};
pub use certificate_vm::{CertificateCardVm, map_certificate_cards};
pub use course_vm::{
    CourseCardVm, CourseDetailVm, LessonVm, MaterialVm, map_course_cards, map_course_detail,
    status_label,
};
pub use quiz_vm::{OptionVm, QuestionVm, QuizIntent, QuizOutcomeVm, QuizVm, start_quiz};
pub use results_vm::{ResultRowVm, StatTileVm, map_overview_tiles, map_result_rows};
pub use time_fmt::format_date;
