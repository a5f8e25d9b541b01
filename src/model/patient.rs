/// Demographics shown in the chart header. All fields are display
/// strings supplied by the caller; nothing here is validated or parsed.
#[derive(Debug, Clone)]
pub struct Patient {
    pub name: String,
    pub national_id: String,
    pub age: String,
    pub gender: String,
    pub address: String,
    pub category: String,
}
