use clap::{Parser, Subcommand};
use hms_core::{
    match_symptoms, AppointmentFilter, AppointmentService, BloodPressure, CoreConfig,
    DoctorDetails, DoctorService, LabService, NewVitalSigns, PatientDetails, PatientService,
    RecordId, VitalsService,
};
use hms_types::{EmailAddress, NonBlankText};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hms")]
#[command(about = "Hospital management service CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    Patients,
    /// Register a patient
    AddPatient {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Email address
        email: String,
        /// Phone number
        phone: String,
    },
    /// List all doctors
    Doctors,
    /// Add a doctor
    AddDoctor {
        /// Full name
        name: String,
        /// Specialization
        specialization: String,
        /// Email address
        email: String,
    },
    /// List appointments
    Appointments,
    /// List the lab test catalog
    LabTests,
    /// Match free text against the symptom table
    Search {
        /// The complaint, e.g. "I am suffering from fever"
        text: String,
    },
    /// Record a vital signs reading for a patient
    RecordVitals {
        /// Patient record id (32 lowercase hex characters)
        patient_id: String,
        /// Body temperature in °C
        #[arg(long)]
        temperature: Option<f64>,
        /// Heart rate in bpm
        #[arg(long)]
        heart_rate: Option<u16>,
        /// Systolic blood pressure in mmHg
        #[arg(long)]
        systolic: Option<u16>,
        /// Diastolic blood pressure in mmHg
        #[arg(long)]
        diastolic: Option<u16>,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List a patient's vital signs readings, newest first
    Vitals {
        /// Patient record id (32 lowercase hex characters)
        patient_id: String,
    },
}

fn load_config() -> anyhow::Result<Arc<CoreConfig>> {
    let data_dir = std::env::var("HMS_DATA_DIR").unwrap_or_else(|_| hms_core::DEFAULT_DATA_DIR.into());
    let symptom_table_override = std::env::var("HMS_SYMPTOM_TABLE").ok().map(PathBuf::from);
    Ok(Arc::new(CoreConfig::new(
        PathBuf::from(data_dir),
        symptom_table_override,
    )?))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = load_config()?;

    match cli.command {
        Some(Commands::Patients) => {
            let service = PatientService::new(cfg);
            let patients = service.list();
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "ID: {}, Name: {} {}, Email: {}",
                        patient.id,
                        patient.details.first_name,
                        patient.details.last_name,
                        patient.details.email
                    );
                }
            }
        }
        Some(Commands::AddPatient {
            first_name,
            last_name,
            email,
            phone,
        }) => {
            let service = PatientService::new(cfg);
            let details = PatientDetails {
                first_name: NonBlankText::new(first_name)?,
                last_name: NonBlankText::new(last_name)?,
                email: EmailAddress::new(email)?,
                phone: NonBlankText::new(phone)?,
                address: None,
                date_of_birth: None,
                gender: None,
                medical_history: vec![],
                allergies: vec![],
                blood_group: None,
                height: None,
                weight: None,
                emergency_contact: None,
            };
            let patient = service.create(details)?;
            println!("Registered patient with ID: {}", patient.id);
        }
        Some(Commands::Doctors) => {
            let service = DoctorService::new(cfg);
            let doctors = service.list();
            if doctors.is_empty() {
                println!("No doctors found.");
            } else {
                for doctor in doctors {
                    println!(
                        "ID: {}, Name: {}, Specialization: {}",
                        doctor.id, doctor.details.name, doctor.details.specialization
                    );
                }
            }
        }
        Some(Commands::AddDoctor {
            name,
            specialization,
            email,
        }) => {
            let service = DoctorService::new(cfg);
            let details = DoctorDetails {
                name: NonBlankText::new(name)?,
                specialization: NonBlankText::new(specialization)?,
                qualifications: vec![],
                phone: None,
                email: EmailAddress::new(email)?,
                address: None,
                working_hours: None,
            };
            let doctor = service.create(details)?;
            println!("Added doctor with ID: {}", doctor.id);
        }
        Some(Commands::Appointments) => {
            let service = AppointmentService::new(cfg);
            let appointments = service.list(&AppointmentFilter::default());
            if appointments.is_empty() {
                println!("No appointments found.");
            } else {
                for appointment in appointments {
                    println!(
                        "ID: {}, {} with {} on {} {}-{} [{:?}]",
                        appointment.id,
                        appointment.details.patient_name,
                        appointment.doctor_name,
                        appointment.details.appointment_date,
                        appointment.details.start_time,
                        appointment.details.end_time,
                        appointment.status
                    );
                }
            }
        }
        Some(Commands::LabTests) => {
            let service = LabService::new(cfg);
            for test in service.catalog() {
                println!(
                    "{}: {} ({}) - ${}, results in {}",
                    test.id, test.name, test.category, test.price, test.duration
                );
            }
        }
        Some(Commands::Search { text }) => {
            let hits = match_symptoms(&text, cfg.symptom_table());
            if hits.is_empty() {
                println!("No known condition recognised.");
            } else {
                for record in hits {
                    println!("{}", record.symptom);
                    println!("  About: {}", record.description);
                    println!("  Medicines: {}", record.medicines.join(", "));
                    println!("  Dosage: {}", record.dosage);
                    println!("  Warning: {}", record.warning);
                }
            }
        }
        Some(Commands::RecordVitals {
            patient_id,
            temperature,
            heart_rate,
            systolic,
            diastolic,
            notes,
        }) => {
            let service = VitalsService::new(cfg);
            let patient_id = RecordId::parse(&patient_id)?;
            let blood_pressure = if systolic.is_some() || diastolic.is_some() {
                Some(BloodPressure { systolic, diastolic })
            } else {
                None
            };
            let vitals = service.record(
                patient_id,
                NewVitalSigns {
                    temperature,
                    blood_pressure,
                    heart_rate,
                    respiratory_rate: None,
                    oxygen_saturation: None,
                    recorded_at: None,
                    recorded_by: None,
                    notes: notes.unwrap_or_default(),
                },
            )?;
            println!("Recorded vitals with ID: {}", vitals.id);
        }
        Some(Commands::Vitals { patient_id }) => {
            let service = VitalsService::new(cfg);
            let patient_id = RecordId::parse(&patient_id)?;
            let readings = service.list_for_patient(&patient_id);
            if readings.is_empty() {
                println!("No readings found.");
            } else {
                for reading in readings {
                    let bp = reading
                        .blood_pressure
                        .map(|bp| {
                            format!(
                                "{}/{}",
                                bp.systolic.map_or("-".into(), |v| v.to_string()),
                                bp.diastolic.map_or("-".into(), |v| v.to_string())
                            )
                        })
                        .unwrap_or_else(|| "-".into());
                    println!(
                        "{}: temp {:?} °C, HR {:?} bpm, BP {} mmHg",
                        reading.recorded_at, reading.temperature, reading.heart_rate, bp
                    );
                }
            }
        }
        None => {
            println!("No command given. Try `hms --help`.");
        }
    }

    Ok(())
}
