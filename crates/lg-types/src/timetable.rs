use serde::{Deserialize, Serialize};

/// Days offered by the timetable form, in display order.
pub const DAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Timetable row as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub slot: NewTimetableEntry,
}

/// Timetable row payload; the backend uses capitalized field names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTimetableEntry {
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Teacher")]
    pub teacher: String,
}

/// `GET /api/tables/get-table` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TimetableList {
    #[serde(default)]
    pub data: Vec<TimetableEntry>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_backend_rows() {
        let list: TimetableList = serde_json::from_value(json!({
            "data": [{"_id": "t1", "Day": "Monday", "Time": "9:00-10:00", "Subject": "Maths", "Teacher": "Noether"}]
        }))
        .unwrap();

        let row = &list.data[0];
        assert_eq!(row.id.as_deref(), Some("t1"));
        assert_eq!(row.slot.day, "Monday");
        assert_eq!(row.slot.teacher, "Noether");
    }

    #[test]
    fn new_entry_serializes_capitalized() {
        let body = serde_json::to_value(NewTimetableEntry {
            day: "Friday".into(),
            time: "14:00".into(),
            subject: "Art".into(),
            teacher: "Kahlo".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"Day": "Friday", "Time": "14:00", "Subject": "Art", "Teacher": "Kahlo"}));
    }
}
