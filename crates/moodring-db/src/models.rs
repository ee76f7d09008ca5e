/// Row type mapping directly to the mood_submissions table. Kept
/// string-typed and distinct from the moodring-types API model so the
/// DB layer stays independent of wire parsing.
pub struct SubmissionRow {
    pub id: String,
    pub mood: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub timestamp: String,
    pub consent: bool,
}
