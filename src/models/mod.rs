pub mod lesson;
pub mod summary;
pub mod table;

pub use lesson::{LessonInput, LessonRecord, validate};
pub use summary::{DaySummary, ParticipantTotal, Report};
pub use table::{RawRow, Table};
