//! Student records (`/api/mahasiswa`). Wire field names are the backend's
//! Indonesian ones: `nim`, `nama`, `jurusan`.

use serde::{Deserialize, Serialize};

use super::{Record, Resource};

/// Marker for the student resource.
pub struct Students;

impl Resource for Students {
    const PATH: &'static str = "/api/mahasiswa";
    type Fields = StudentFields;
    type Patch = StudentPatch;
}

pub type Student = Record<StudentFields>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentFields {
    /// Student registration number.
    #[serde(rename = "nim")]
    pub student_number: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "jurusan")]
    pub major: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StudentPatch {
    #[serde(rename = "nim", skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(rename = "nama", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "jurusan", skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_has_no_id() {
        let fields = StudentFields {
            student_number: "11223344".to_string(),
            name: "Budi Sanjaya".to_string(),
            major: "Teknik Informatika".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::json!({"nim": "11223344", "nama": "Budi Sanjaya", "jurusan": "Teknik Informatika"})
        );
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = StudentPatch {
            major: Some("Sistem Informasi".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"jurusan": "Sistem Informasi"})
        );
    }
}
