pub mod errors;
pub mod types;
pub mod validate;

pub mod consultation;
pub mod doctor;
pub mod medical_history;
pub mod patient;
pub mod pharmacist;
pub mod pharmacy;

pub use consultation::{ConsultationRecord, ConsultationWithDoctor, EditConsultation, NewConsultation};
pub use doctor::{Doctor, NewDoctor, UpdateDoctor};
pub use errors::{ValidationError, ValidationResult};
pub use medical_history::MedicalHistoryRecord;
pub use patient::{EditPatient, NewPatient, Patient};
pub use pharmacist::{NewPharmacist, Pharmacist, UpdatePharmacist};
pub use pharmacy::{NewPharmacy, Pharmacy, UpdatePharmacy};
pub use types::{BloodGroup, DoctorStatus, Gender};
