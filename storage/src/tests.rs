// storage/src/tests.rs

use chrono::{Datelike, NaiveDate};
use models::{
    BloodGroup, DoctorStatus, EditConsultation, EditPatient, Gender, NewDoctor, NewPatient,
    NewPharmacist, NewPharmacy, UpdateDoctor, UpdatePharmacist,
};

use crate::{ids, NewMedicalHistory, StorageError, Store};

fn sample_patient(aadhaar: &str) -> NewPatient {
    NewPatient {
        name: "Asha Rao".to_string(),
        aadhaar_number: aadhaar.to_string(),
        mobile_number: "9876543210".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        gender: Gender::Female,
        blood_group: BloodGroup::OPositive,
        address: "14 MG Road, Mysuru".to_string(),
        password: None,
    }
}

fn sample_doctor(email: &str, license: &str) -> NewDoctor {
    NewDoctor {
        name: "Dr. Meera Nair".to_string(),
        specialization: "Cardiology".to_string(),
        password: "s3cret".to_string(),
        email: email.to_string(),
        phone_number: "9876501234".to_string(),
        address: Some("Hospital Quarters, Block C".to_string()),
        gender: Gender::Female,
        date_of_birth: NaiveDate::from_ymd_opt(1978, 9, 2).unwrap(),
        license_number: license.to_string(),
        status: None,
    }
}

fn sample_pharmacist(email: &str, suffix: &str) -> NewPharmacist {
    NewPharmacist {
        pharmacist_name: "R. Iyer".to_string(),
        mobile_number: format!("98765432{suffix}"),
        license_number: format!("PH-LIC-{suffix}"),
        aadhaar_number: format!("1234123412{suffix}"),
        email_id: email.to_string(),
        password: "s3cret".to_string(),
    }
}

#[tokio::test]
async fn created_patient_gets_a_fresh_twelve_digit_id() {
    let store = Store::in_memory().await.unwrap();

    let first = store
        .create_patient(&sample_patient("111111111111"), "hash-a")
        .await
        .unwrap();
    let second = store
        .create_patient(&sample_patient("222222222222"), "hash-b")
        .await
        .unwrap();

    assert!(ids::is_record_id(&first.medical_id));
    assert!(ids::is_record_id(&second.medical_id));
    assert_ne!(first.medical_id, second.medical_id);

    let fetched = store.get_patient(&first.medical_id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Asha Rao");
    assert_eq!(fetched.blood_group, BloodGroup::OPositive);
    assert_eq!(fetched.gender, Gender::Female);
    assert_eq!(fetched.password_hash, "hash-a");
}

#[tokio::test]
async fn duplicate_aadhaar_is_rejected() {
    let store = Store::in_memory().await.unwrap();
    store
        .create_patient(&sample_patient("333333333333"), "h")
        .await
        .unwrap();
    let err = store
        .create_patient(&sample_patient("333333333333"), "h")
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Duplicate("aadhaar_number")));
}

#[tokio::test]
async fn deleting_a_patient_removes_its_history_rows() {
    let store = Store::in_memory().await.unwrap();
    let patient = store
        .create_patient(&sample_patient("444444444444"), "h")
        .await
        .unwrap();
    let doctor = store
        .create_doctor(&sample_doctor("a@clinic.example.org", "L-1"), "h")
        .await
        .unwrap();

    for day in 1..=3 {
        store
            .insert_consultation(
                &patient.medical_id,
                doctor.doctor_id,
                NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                Some("check-up"),
                Some("rest"),
                None,
            )
            .await
            .unwrap();
    }
    store
        .insert_medical_history(&NewMedicalHistory {
            medical_id: patient.medical_id.clone(),
            doctor_id: doctor.doctor_id,
            known_allergies: Some("penicillin".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    store.delete_patient(&patient.medical_id).await.unwrap();

    assert!(store.get_patient(&patient.medical_id).await.unwrap().is_none());
    assert!(store
        .consultations_for_patient(&patient.medical_id)
        .await
        .unwrap()
        .is_empty());
    assert!(store
        .medical_history_for_patient(&patient.medical_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn deleting_an_unknown_patient_is_not_found() {
    let store = Store::in_memory().await.unwrap();
    let err = store.delete_patient("000000000000").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn editing_an_unknown_patient_is_not_found() {
    let store = Store::in_memory().await.unwrap();
    let edit = EditPatient {
        medical_id: "000000000000".to_string(),
        name: "X".to_string(),
        aadhaar_number: "555555555555".to_string(),
        mobile_number: "9876543210".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        gender: Gender::Other,
        blood_group: BloodGroup::ANegative,
        address: "somewhere".to_string(),
    };
    assert!(matches!(
        store.edit_patient(&edit).await.unwrap_err(),
        StorageError::NotFound
    ));
}

#[tokio::test]
async fn doctor_update_merges_only_supplied_fields() {
    let store = Store::in_memory().await.unwrap();
    let doctor = store
        .create_doctor(&sample_doctor("merge@clinic.example.org", "L-2"), "old-hash")
        .await
        .unwrap();

    let update = UpdateDoctor {
        doctor_id: doctor.doctor_id,
        name: None,
        specialization: Some("Neurology".to_string()),
        password: None,
        email: None,
        phone_number: None,
        address: None,
        gender: None,
        date_of_birth: None,
        license_number: None,
        status: Some(DoctorStatus::Inactive),
    };
    let updated = store.update_doctor(&update, None).await.unwrap();

    assert_eq!(updated.specialization, "Neurology");
    assert_eq!(updated.status, DoctorStatus::Inactive);
    // untouched fields keep their stored values
    assert_eq!(updated.name, doctor.name);
    assert_eq!(updated.email, doctor.email);
    assert_eq!(updated.password_hash, "old-hash");
    assert_eq!(updated.phone_number, doctor.phone_number);
}

#[tokio::test]
async fn duplicate_pharmacist_email_leaves_a_single_record() {
    let store = Store::in_memory().await.unwrap();
    store
        .create_pharmacist(&sample_pharmacist("iyer@pharm.example.org", "01"), "h")
        .await
        .unwrap();

    let err = store
        .create_pharmacist(&sample_pharmacist("iyer@pharm.example.org", "02"), "h")
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Duplicate("email_id")));

    assert_eq!(store.list_pharmacists().await.unwrap().len(), 1);
}

#[tokio::test]
async fn pharmacist_update_merges_only_supplied_fields() {
    let store = Store::in_memory().await.unwrap();
    let pharmacist = store
        .create_pharmacist(&sample_pharmacist("keep@pharm.example.org", "03"), "h")
        .await
        .unwrap();

    let update = UpdatePharmacist {
        pharmacist_id: pharmacist.pharmacist_id.clone(),
        pharmacist_name: Some("Rajan Iyer".to_string()),
        mobile_number: None,
        license_number: None,
        aadhaar_number: None,
        email_id: None,
        password: None,
    };
    let updated = store.update_pharmacist(&update, None).await.unwrap();

    assert_eq!(updated.pharmacist_name, "Rajan Iyer");
    assert_eq!(updated.mobile_number, pharmacist.mobile_number);
    assert_eq!(updated.email_id, pharmacist.email_id);
}

#[tokio::test]
async fn one_pharmacist_owns_at_most_one_pharmacy() {
    let store = Store::in_memory().await.unwrap();
    let pharmacist = store
        .create_pharmacist(&sample_pharmacist("own@pharm.example.org", "04"), "h")
        .await
        .unwrap();

    let new = NewPharmacy {
        pharmacy_name: "City Meds".to_string(),
        location: "Jayanagar".to_string(),
        pharmacist_id: pharmacist.pharmacist_id.clone(),
        password: "s3cret".to_string(),
    };
    store.create_pharmacy(&new, "h").await.unwrap();

    let again = NewPharmacy {
        pharmacy_name: "City Meds II".to_string(),
        ..new.clone()
    };
    let err = store.create_pharmacy(&again, "h").await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate("pharmacist_id")));
}

#[tokio::test]
async fn consultation_requires_an_existing_patient() {
    let store = Store::in_memory().await.unwrap();
    let doctor = store
        .create_doctor(&sample_doctor("fk@clinic.example.org", "L-3"), "h")
        .await
        .unwrap();

    let err = store
        .insert_consultation(
            "999999999999",
            doctor.doctor_id,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            None,
            None,
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Database(_)));
}

#[tokio::test]
async fn patient_history_is_ordered_most_recent_first() {
    let store = Store::in_memory().await.unwrap();
    let patient = store
        .create_patient(&sample_patient("666666666666"), "h")
        .await
        .unwrap();
    let doctor = store
        .create_doctor(&sample_doctor("order@clinic.example.org", "L-4"), "h")
        .await
        .unwrap();

    for day in [5, 20, 11] {
        store
            .insert_consultation(
                &patient.medical_id,
                doctor.doctor_id,
                NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                Some("visit"),
                None,
                None,
            )
            .await
            .unwrap();
    }

    let history = store
        .consultations_for_patient(&patient.medical_id)
        .await
        .unwrap();
    let days: Vec<u32> = history.iter().map(|c| c.consultation_date.day()).collect();
    assert_eq!(days, vec![20, 11, 5]);

    let with_doctor = store
        .consultations_with_doctor(&patient.medical_id)
        .await
        .unwrap();
    assert_eq!(with_doctor.len(), 3);
    assert!(with_doctor.iter().all(|c| c.doctor_name == "Dr. Meera Nair"));
}

#[tokio::test]
async fn consultation_edit_and_delete_follow_primary_key() {
    let store = Store::in_memory().await.unwrap();
    let patient = store
        .create_patient(&sample_patient("777777777777"), "h")
        .await
        .unwrap();
    let doctor = store
        .create_doctor(&sample_doctor("edit@clinic.example.org", "L-5"), "h")
        .await
        .unwrap();
    let record = store
        .insert_consultation(
            &patient.medical_id,
            doctor.doctor_id,
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            Some("initial"),
            None,
            None,
        )
        .await
        .unwrap();

    store
        .edit_consultation(&EditConsultation {
            consultation_id: record.id,
            date: NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
            notes: "follow-up".to_string(),
        })
        .await
        .unwrap();
    let edited = store.get_consultation(record.id).await.unwrap().unwrap();
    assert_eq!(edited.description.as_deref(), Some("follow-up"));
    assert_eq!(
        edited.consultation_date,
        NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()
    );

    store.delete_consultation(record.id).await.unwrap();
    assert!(matches!(
        store.delete_consultation(record.id).await.unwrap_err(),
        StorageError::NotFound
    ));
}

#[tokio::test]
async fn dashboard_counts_reflect_the_store() {
    let store = Store::in_memory().await.unwrap();
    let patient = store
        .create_patient(&sample_patient("888888888888"), "h")
        .await
        .unwrap();
    let doctor = store
        .create_doctor(&sample_doctor("count@clinic.example.org", "L-6"), "h")
        .await
        .unwrap();
    store
        .insert_consultation(
            &patient.medical_id,
            doctor.doctor_id,
            NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

    let counts = store.dashboard_counts().await.unwrap();
    assert_eq!(counts.patients, 1);
    assert_eq!(counts.doctors, 1);
    assert_eq!(counts.pharmacies, 0);
    assert_eq!(counts.pharmacists, 0);
    assert_eq!(counts.consultations, 1);
}
