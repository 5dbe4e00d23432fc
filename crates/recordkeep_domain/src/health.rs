//! Healthcare records.

use chrono::NaiveDate;
use recordkeep_core::{Entity, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A patient registered with the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: RecordId,
    name: String,
    age: u32,
    gender: String,
}

impl Patient {
    /// Creates a patient.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Gender as recorded at registration.
    pub fn gender(&self) -> &str {
        &self.gender
    }
}

impl Entity for Patient {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient ID: {}, Name: {}, Age: {}, Gender: {}",
            self.id, self.name, self.age, self.gender
        )
    }
}

/// A prescription issued to a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    id: RecordId,
    patient_id: RecordId,
    medication_name: String,
    date_issued: NaiveDate,
}

impl Prescription {
    /// Creates a prescription.
    pub fn new(
        id: impl Into<RecordId>,
        patient_id: impl Into<RecordId>,
        medication_name: impl Into<String>,
        date_issued: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id: patient_id.into(),
            medication_name: medication_name.into(),
            date_issued,
        }
    }

    /// Id of the patient the prescription was issued to.
    pub fn patient_id(&self) -> RecordId {
        self.patient_id
    }

    /// Name of the prescribed medication.
    pub fn medication_name(&self) -> &str {
        &self.medication_name
    }

    /// Date the prescription was issued.
    pub fn date_issued(&self) -> NaiveDate {
        self.date_issued
    }
}

impl Entity for Prescription {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prescription ID: {}, Patient ID: {}, Medication: {}, Date Issued: {}",
            self.id,
            self.patient_id,
            self.medication_name,
            self.date_issued.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_display() {
        let patient = Patient::new(1, "John Smith", 45, "Male");
        assert_eq!(
            patient.to_string(),
            "Patient ID: 1, Name: John Smith, Age: 45, Gender: Male"
        );
        assert_eq!(patient.id(), RecordId::new(1));
    }

    #[test]
    fn prescription_json_uses_iso_dates() {
        let prescription = Prescription::new(
            3,
            1,
            "Ibuprofen",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );
        let json = serde_json::to_value(&prescription).unwrap();
        assert_eq!(json["patient_id"], 1);
        assert_eq!(json["date_issued"], "2025-06-01");

        let back: Prescription = serde_json::from_value(json).unwrap();
        assert_eq!(back, prescription);
    }
}
