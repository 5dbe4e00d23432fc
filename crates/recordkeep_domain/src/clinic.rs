//! Patient and prescription records kept together.
//!
//! [`ClinicRecords`] holds patients and prescriptions in two
//! [`Repository`] stores and keeps them consistent: prescriptions must name a
//! registered patient, and removing a patient removes their prescriptions.
//! [`PrescriptionIndex`] groups prescriptions by patient for lookups.

use crate::health::{Patient, Prescription};
use recordkeep_core::{Entity, RecordId, Repository, StoreError, StoreResult};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Patients and their prescriptions.
#[derive(Debug, Clone, Default)]
pub struct ClinicRecords {
    patients: Repository<Patient>,
    prescriptions: Repository<Prescription>,
}

impl ClinicRecords {
    /// Creates empty records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds records from previously saved patients and prescriptions.
    ///
    /// Saved data is taken as-is; the checks made by [`add_patient`] and
    /// [`add_prescription`] apply to new records only.
    ///
    /// [`add_patient`]: Self::add_patient
    /// [`add_prescription`]: Self::add_prescription
    pub fn from_parts(
        patients: impl IntoIterator<Item = Patient>,
        prescriptions: impl IntoIterator<Item = Prescription>,
    ) -> Self {
        Self {
            patients: patients.into_iter().collect(),
            prescriptions: prescriptions.into_iter().collect(),
        }
    }

    /// Registers a patient.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if a patient with this id exists.
    pub fn add_patient(&mut self, patient: Patient) -> StoreResult<()> {
        let id = patient.id();
        if self.patients.find(|p| p.id() == id).is_some() {
            return Err(StoreError::duplicate_key(id));
        }
        self.patients.add(patient);
        Ok(())
    }

    /// Records a prescription for a registered patient.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DuplicateKey`] if a prescription with this id exists
    /// - [`StoreError::NotFound`] if the prescription's patient is not
    ///   registered
    pub fn add_prescription(&mut self, prescription: Prescription) -> StoreResult<()> {
        let id = prescription.id();
        if self.prescriptions.find(|p| p.id() == id).is_some() {
            return Err(StoreError::duplicate_key(id));
        }
        self.patients.get_by_id(prescription.patient_id())?;
        self.prescriptions.add(prescription);
        Ok(())
    }

    /// Removes a patient and every prescription issued to them. Returns the
    /// number of prescriptions removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the patient is not registered.
    pub fn remove_patient(&mut self, id: RecordId) -> StoreResult<usize> {
        self.patients.remove_by_id(id)?;
        let mut removed = 0;
        while self.prescriptions.remove(|p| p.patient_id() == id) {
            removed += 1;
        }
        Ok(removed)
    }

    /// Removes a single prescription.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no prescription has this id.
    pub fn remove_prescription(&mut self, id: RecordId) -> StoreResult<()> {
        self.prescriptions.remove_by_id(id)
    }

    /// Looks up a patient.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the patient is not registered.
    pub fn patient(&self, id: RecordId) -> StoreResult<Patient> {
        self.patients.get_by_id(id)
    }

    /// The patient store.
    pub fn patients(&self) -> &Repository<Patient> {
        &self.patients
    }

    /// The prescription store.
    pub fn prescriptions(&self) -> &Repository<Prescription> {
        &self.prescriptions
    }

    /// Groups the current prescriptions by patient.
    #[must_use]
    pub fn prescription_index(&self) -> PrescriptionIndex {
        PrescriptionIndex::build(&self.prescriptions)
    }

    /// Patients matching `query`, ordered by id.
    #[must_use]
    pub fn search(&self, query: &PatientQuery) -> Vec<Patient> {
        query.search(&self.patients)
    }
}

/// Prescriptions grouped by patient id, each group ordered by issue date.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionIndex {
    by_patient: BTreeMap<RecordId, Vec<Prescription>>,
}

impl PrescriptionIndex {
    /// Groups every prescription in `prescriptions` by its patient.
    ///
    /// Prescriptions issued on the same date keep their stored order.
    pub fn build(prescriptions: &Repository<Prescription>) -> Self {
        let mut by_patient: BTreeMap<RecordId, Vec<Prescription>> = BTreeMap::new();
        for prescription in prescriptions.iter() {
            by_patient
                .entry(prescription.patient_id())
                .or_default()
                .push(prescription.clone());
        }
        for group in by_patient.values_mut() {
            group.sort_by_key(Prescription::date_issued);
        }
        Self { by_patient }
    }

    /// Prescriptions issued to `patient_id`, oldest first. Empty when the
    /// patient has none or is unknown.
    pub fn for_patient(&self, patient_id: RecordId) -> &[Prescription] {
        self.by_patient
            .get(&patient_id)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Number of patients with at least one prescription.
    pub fn patient_count(&self) -> usize {
        self.by_patient.len()
    }

    /// Total number of indexed prescriptions.
    pub fn prescription_count(&self) -> usize {
        self.by_patient.values().map(Vec::len).sum()
    }

    /// Mean prescriptions per patient with prescriptions, or `None` if there
    /// are none.
    pub fn average_per_patient(&self) -> Option<f64> {
        if self.by_patient.is_empty() {
            return None;
        }
        Some(self.prescription_count() as f64 / self.patient_count() as f64)
    }

    /// Iterates over `(patient_id, prescriptions)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &[Prescription])> {
        self.by_patient
            .iter()
            .map(|(id, group)| (*id, group.as_slice()))
    }
}

/// A patient search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientQuery {
    /// Name contains the text, ignoring case. Empty text matches nobody.
    Name(String),
    /// Age within the inclusive range.
    Age(RangeInclusive<u32>),
    /// Gender equals the text, ignoring case. Empty text matches nobody.
    Gender(String),
}

impl PatientQuery {
    /// Returns `true` if `patient` satisfies the query.
    pub fn matches(&self, patient: &Patient) -> bool {
        match self {
            Self::Name(text) => {
                let text = text.trim().to_lowercase();
                !text.is_empty() && patient.name().to_lowercase().contains(&text)
            }
            Self::Age(range) => range.contains(&patient.age()),
            Self::Gender(text) => {
                let text = text.trim();
                !text.is_empty() && patient.gender().eq_ignore_ascii_case(text)
            }
        }
    }

    /// Patients in `patients` matching the query, ordered by id.
    pub fn search(&self, patients: &Repository<Patient>) -> Vec<Patient> {
        let mut found = patients.filter(|p| self.matches(p));
        found.sort_by_key(Entity::id);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn clinic() -> ClinicRecords {
        let mut records = ClinicRecords::new();
        records.add_patient(Patient::new(3, "Robert Johnson", 45, "Male")).unwrap();
        records.add_patient(Patient::new(1, "John Doe", 35, "Male")).unwrap();
        records.add_patient(Patient::new(2, "Jane Smith", 28, "Female")).unwrap();
        for (id, patient, medication, day) in [
            (101, 1, "Amoxicillin 500mg", 10),
            (102, 1, "Ibuprofen 200mg", 12),
            (103, 2, "Metformin 1000mg", 8),
            (104, 2, "Lisinopril 10mg", 13),
            (105, 3, "Atorvastatin 20mg", 5),
            (106, 1, "Paracetamol 500mg", 2),
        ] {
            records
                .add_prescription(Prescription::new(id, patient, medication, date(day)))
                .unwrap();
        }
        records
    }

    fn ids(prescriptions: &[Prescription]) -> Vec<i32> {
        prescriptions.iter().map(|p| p.id().get()).collect()
    }

    #[test]
    fn index_groups_by_patient_in_date_order() {
        let index = clinic().prescription_index();

        assert_eq!(ids(index.for_patient(RecordId::new(1))), vec![106, 101, 102]);
        assert_eq!(ids(index.for_patient(RecordId::new(2))), vec![103, 104]);
        assert_eq!(index.patient_count(), 3);
        assert_eq!(index.prescription_count(), 6);
        assert_eq!(index.average_per_patient(), Some(2.0));
    }

    #[test]
    fn index_for_unknown_patient_is_empty() {
        let index = clinic().prescription_index();
        assert!(index.for_patient(RecordId::new(99)).is_empty());

        let empty = PrescriptionIndex::build(&Repository::new());
        assert_eq!(empty.average_per_patient(), None);
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn same_day_prescriptions_keep_stored_order() {
        let repo: Repository<_> = [
            Prescription::new(7, 1, "B", date(4)),
            Prescription::new(5, 1, "A", date(4)),
        ]
        .into_iter()
        .collect();
        let index = PrescriptionIndex::build(&repo);
        assert_eq!(ids(index.for_patient(RecordId::new(1))), vec![7, 5]);
    }

    #[test]
    fn prescription_requires_registered_patient() {
        let mut records = clinic();
        let err = records
            .add_prescription(Prescription::new(200, 42, "Aspirin", date(1)))
            .unwrap_err();
        assert_eq!(err, StoreError::not_found(RecordId::new(42)));
        assert_eq!(records.prescriptions().count(), 6);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut records = clinic();
        assert_eq!(
            records.add_patient(Patient::new(1, "Someone Else", 50, "Female")),
            Err(StoreError::duplicate_key(RecordId::new(1)))
        );
        assert_eq!(
            records.add_prescription(Prescription::new(101, 2, "Aspirin", date(1))),
            Err(StoreError::duplicate_key(RecordId::new(101)))
        );
        assert_eq!(records.patient(RecordId::new(1)).unwrap().name(), "John Doe");
    }

    #[test]
    fn removing_patient_removes_their_prescriptions() {
        let mut records = clinic();
        assert_eq!(records.remove_patient(RecordId::new(1)), Ok(3));
        assert_eq!(records.prescriptions().count(), 3);
        assert!(records
            .prescription_index()
            .for_patient(RecordId::new(1))
            .is_empty());

        assert_eq!(
            records.remove_patient(RecordId::new(1)),
            Err(StoreError::not_found(RecordId::new(1)))
        );
    }

    #[test]
    fn remove_prescription_by_id() {
        let mut records = clinic();
        records.remove_prescription(RecordId::new(103)).unwrap();
        assert_eq!(
            ids(records.prescription_index().for_patient(RecordId::new(2))),
            vec![104]
        );
        assert!(records.remove_prescription(RecordId::new(103)).is_err());
    }

    #[test]
    fn search_by_name_ignores_case_and_orders_by_id() {
        let records = clinic();
        let found = records.search(&PatientQuery::Name("JOHN".into()));
        let names: Vec<_> = found.iter().map(Patient::name).collect();
        assert_eq!(names, vec!["John Doe", "Robert Johnson"]);

        assert!(records.search(&PatientQuery::Name("  ".into())).is_empty());
    }

    #[test]
    fn search_by_age_and_gender() {
        let records = clinic();
        let found = records.search(&PatientQuery::Age(30..=45));
        assert_eq!(found.len(), 2);

        let found = records.search(&PatientQuery::Gender("female".into()));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Jane Smith");
    }
}
