//! Health command implementation.
//!
//! Patients and prescriptions live in two log files. Each invocation loads
//! both into [`ClinicRecords`], applies one operation, and saves what changed.

use super::{open_log, save_log};
use chrono::{Days, Local, NaiveDate};
use recordkeep_core::{Entity, RecordId};
use recordkeep_domain::{ClinicRecords, Patient, PatientQuery, Prescription};
use recordkeep_log::{LogConfig, PersistentLog};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the patient and prescription logs are stored.
#[derive(Debug, Clone)]
pub struct HealthFiles {
    /// Patient log.
    pub patients: PathBuf,
    /// Prescription log.
    pub prescriptions: PathBuf,
}

impl HealthFiles {
    fn load(&self) -> Result<ClinicRecords, Box<dyn std::error::Error>> {
        let patients = open_log::<Patient>(&self.patients)?;
        let prescriptions = open_log::<Prescription>(&self.prescriptions)?;
        Ok(ClinicRecords::from_parts(
            patients.get_all(),
            prescriptions.get_all(),
        ))
    }

    fn save_patients(&self, records: &ClinicRecords) -> Result<(), Box<dyn std::error::Error>> {
        let saved = save_entries(&self.patients, records.patients().iter().cloned())?;
        debug!(path = %self.patients.display(), patients = saved, "patients saved");
        Ok(())
    }

    fn save_prescriptions(
        &self,
        records: &ClinicRecords,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let saved = save_entries(&self.prescriptions, records.prescriptions().iter().cloned())?;
        debug!(
            path = %self.prescriptions.display(),
            prescriptions = saved,
            "prescriptions saved"
        );
        Ok(())
    }
}

/// Registers a patient.
pub fn add_patient(
    files: &HealthFiles,
    id: i32,
    name: &str,
    age: u32,
    gender: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = files.load()?;
    let patient = Patient::new(id, name, age, gender);
    let line = patient.to_string();
    records.add_patient(patient)?;
    files.save_patients(&records)?;
    println!("Added: {line}");
    Ok(())
}

/// Records a prescription. `date_issued` defaults to today.
pub fn add_prescription(
    files: &HealthFiles,
    id: i32,
    patient_id: i32,
    medication: &str,
    date_issued: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = files.load()?;
    let date_issued = date_issued.unwrap_or_else(|| Local::now().date_naive());
    let prescription = Prescription::new(id, patient_id, medication, date_issued);
    let line = prescription.to_string();
    records.add_prescription(prescription)?;
    files.save_prescriptions(&records)?;
    println!("Added: {line}");
    Ok(())
}

/// Adds the sample patients and their prescriptions.
pub fn seed(files: &HealthFiles) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = files.load()?;
    let (patients, prescriptions) = sample_records(Local::now().date_naive());
    for patient in patients {
        records.add_patient(patient)?;
    }
    for prescription in prescriptions {
        records.add_prescription(prescription)?;
    }
    files.save_patients(&records)?;
    files.save_prescriptions(&records)?;
    println!(
        "Sample data added. {} patients, {} prescriptions",
        records.patients().count(),
        records.prescriptions().count()
    );
    Ok(())
}

/// Prints the prescriptions of one patient, oldest first.
pub fn prescriptions(
    files: &HealthFiles,
    patient_id: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = files.load()?;
    let patient_id = RecordId::new(patient_id);
    let patient = records.patient(patient_id)?;
    let index = records.prescription_index();
    let issued = index.for_patient(patient_id);

    println!("Prescriptions for Patient ID: {patient_id}");
    println!("Patient: {patient}");
    if issued.is_empty() {
        println!("No prescriptions found for this patient.");
        return Ok(());
    }
    for prescription in issued {
        println!("  - {prescription}");
    }
    println!();
    println!("Total prescriptions: {}", issued.len());
    Ok(())
}

/// Prints the patients matching `query`.
pub fn search(
    files: &HealthFiles,
    query: &PatientQuery,
) -> Result<(), Box<dyn std::error::Error>> {
    let found = files.load()?.search(query);
    if found.is_empty() {
        println!("No patients found matching the search criteria.");
        return Ok(());
    }
    println!("Search Results ({} patient(s) found):", found.len());
    for patient in &found {
        println!("  {patient}");
    }
    Ok(())
}

/// Removes a patient together with their prescriptions.
pub fn remove_patient(files: &HealthFiles, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = files.load()?;
    let removed = records.remove_patient(RecordId::new(id))?;
    files.save_patients(&records)?;
    files.save_prescriptions(&records)?;
    println!("Removed patient {id} and {removed} associated prescription(s).");
    Ok(())
}

/// Prints record counts.
pub fn summary(files: &HealthFiles) -> Result<(), Box<dyn std::error::Error>> {
    let records = files.load()?;
    let index = records.prescription_index();

    println!("Healthcare System Summary");
    println!("=========================");
    println!("Total Patients: {}", records.patients().count());
    println!("Total Prescriptions: {}", records.prescriptions().count());
    println!("Patients with Prescriptions: {}", index.patient_count());
    if let Some(average) = index.average_per_patient() {
        println!("Average Prescriptions per Patient: {average:.1}");
    }
    Ok(())
}

fn save_entries<T, I>(path: &Path, entries: I) -> Result<usize, Box<dyn std::error::Error>>
where
    T: Entity + Serialize + DeserializeOwned,
    I: IntoIterator<Item = T>,
{
    let mut log = PersistentLog::new(LogConfig::new(path));
    log.extend(entries);
    save_log(&log)
}

fn sample_records(today: NaiveDate) -> (Vec<Patient>, Vec<Prescription>) {
    let days_ago = |days| today.checked_sub_days(Days::new(days)).unwrap_or(today);
    let patients = vec![
        Patient::new(1, "John Doe", 35, "Male"),
        Patient::new(2, "Jane Smith", 28, "Female"),
        Patient::new(3, "Robert Johnson", 45, "Male"),
    ];
    let prescriptions = vec![
        Prescription::new(101, 1, "Amoxicillin 500mg", days_ago(5)),
        Prescription::new(102, 1, "Ibuprofen 200mg", days_ago(3)),
        Prescription::new(103, 2, "Metformin 1000mg", days_ago(7)),
        Prescription::new(104, 2, "Lisinopril 10mg", days_ago(2)),
        Prescription::new(105, 3, "Atorvastatin 20mg", days_ago(10)),
    ];
    (patients, prescriptions)
}
